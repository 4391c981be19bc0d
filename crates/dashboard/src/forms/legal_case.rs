use innovalex_core::severity::Priority;
use innovalex_db::models::legal_case::CreateLegalCase;
use validator::{Validate, ValidationError};

use super::{
    convert_optional_id, field_error, optional, validate_optional_id, FieldErrors, FormSchema,
};

/// "New Legal Case" form.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct LegalCaseForm {
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,
    #[validate(custom(function = "validate_priority"))]
    pub priority: String,
    /// Dollar amount; blank means "not estimated".
    #[validate(custom(function = "validate_estimated_value"))]
    pub estimated_value: String,
    /// Related asset picked from the asset list, optional.
    #[validate(custom(function = "validate_optional_id"))]
    pub ip_asset_id: String,
}

impl Default for LegalCaseForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::default().as_str().to_string(),
            estimated_value: String::new(),
            ip_asset_id: String::new(),
        }
    }
}

fn validate_priority(value: &str) -> Result<(), ValidationError> {
    match value.parse::<Priority>() {
        Ok(_) => Ok(()),
        Err(_) => Err(field_error("priority", "Select a priority")),
    }
}

fn validate_estimated_value(value: &str) -> Result<(), ValidationError> {
    match optional(value).map(parse_amount) {
        Some(None) => Err(field_error("number", "Enter a number")),
        _ => Ok(()),
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl FormSchema for LegalCaseForm {
    type Output = CreateLegalCase;

    fn convert(&self) -> Result<CreateLegalCase, FieldErrors> {
        let mut errors = FieldErrors::default();
        let priority = self.priority.parse::<Priority>().unwrap_or_else(|e| {
            errors.add("priority", e.to_string());
            Priority::default()
        });
        let estimated_value = match optional(&self.estimated_value) {
            None => None,
            Some(raw) => {
                let parsed = parse_amount(raw);
                if parsed.is_none() {
                    errors.add("estimated_value", "Enter a number");
                }
                parsed
            }
        };
        let ip_asset_id = convert_optional_id(&mut errors, "ip_asset_id", &self.ip_asset_id);

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CreateLegalCase {
            title: self.title.clone(),
            description: self.description.clone(),
            ip_asset_id,
            priority,
            estimated_value,
        })
    }
}
