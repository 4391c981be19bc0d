use innovalex_core::document::DocumentType;
use innovalex_db::models::legal_document::CreateLegalDocument;
use validator::{Validate, ValidationError};

use super::{
    convert_optional_id, field_error, optional, validate_optional_id, FieldErrors, FormSchema,
};

/// "Create Legal Document" form.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct DocumentForm {
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,
    #[validate(custom(function = "validate_document_type"))]
    pub document_type: String,
    pub content: String,
    #[validate(custom(function = "validate_optional_id"))]
    pub case_id: String,
    #[validate(custom(function = "validate_optional_id"))]
    pub ip_asset_id: String,
    pub signature_required: bool,
    pub ai_generated: bool,
}

fn validate_document_type(value: &str) -> Result<(), ValidationError> {
    match value.parse::<DocumentType>() {
        Ok(_) => Ok(()),
        Err(_) => Err(field_error("document_type", "Select a document type")),
    }
}

impl FormSchema for DocumentForm {
    type Output = CreateLegalDocument;

    fn convert(&self) -> Result<CreateLegalDocument, FieldErrors> {
        let mut errors = FieldErrors::default();
        let document_type = self.document_type.parse::<DocumentType>();
        if let Err(e) = &document_type {
            errors.add("document_type", e.to_string());
        }
        let case_id = convert_optional_id(&mut errors, "case_id", &self.case_id);
        let ip_asset_id = convert_optional_id(&mut errors, "ip_asset_id", &self.ip_asset_id);

        match document_type {
            Ok(document_type) if errors.is_empty() => Ok(CreateLegalDocument {
                title: self.title.clone(),
                document_type,
                content: optional(&self.content).map(str::to_string),
                case_id,
                ip_asset_id,
                signature_required: Some(self.signature_required),
                ai_generated: Some(self.ai_generated),
            }),
            _ => Err(errors),
        }
    }
}
