//! Legal document row and DTOs.

use innovalex_core::document::DocumentType;
use innovalex_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use super::Record;

/// A row from the `legal_documents` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalDocument {
    pub id: RecordId,
    #[serde(default)]
    pub case_id: Option<RecordId>,
    #[serde(default)]
    pub ip_asset_id: Option<RecordId>,
    pub creator_id: RecordId,
    pub document_type: DocumentType,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub template_id: Option<RecordId>,
    /// User-toggled flag; nothing generates content automatically.
    pub ai_generated: bool,
    pub lawyer_approved: bool,
    #[serde(default)]
    pub approved_by: Option<RecordId>,
    #[serde(default)]
    pub file_url: Option<String>,
    pub signature_required: bool,
    #[serde(default)]
    pub signed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for LegalDocument {
    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

/// DTO for creating a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLegalDocument {
    pub title: String,
    pub document_type: DocumentType,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub case_id: Option<RecordId>,
    #[serde(default)]
    pub ip_asset_id: Option<RecordId>,
    /// Defaults to `false` when omitted.
    #[serde(default)]
    pub signature_required: Option<bool>,
    /// Defaults to `false` when omitted.
    #[serde(default)]
    pub ai_generated: Option<bool>,
}

/// Insert payload with the creator and the boolean defaults applied.
#[derive(Debug, Serialize)]
pub struct NewLegalDocument<'a> {
    pub creator_id: RecordId,
    pub title: &'a str,
    pub document_type: DocumentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_asset_id: Option<RecordId>,
    pub ai_generated: bool,
    pub signature_required: bool,
}

impl<'a> NewLegalDocument<'a> {
    pub fn from_create(creator_id: RecordId, data: &'a CreateLegalDocument) -> Self {
        Self {
            creator_id,
            title: &data.title,
            document_type: data.document_type,
            content: data.content.as_deref(),
            case_id: data.case_id,
            ip_asset_id: data.ip_asset_id,
            ai_generated: data.ai_generated.unwrap_or(false),
            signature_required: data.signature_required.unwrap_or(false),
        }
    }
}

/// DTO for patching a document. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateLegalDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_asset_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lawyer_approved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_flags_default_to_false() {
        let data = CreateLegalDocument {
            title: "Mutual NDA".into(),
            document_type: DocumentType::Nda,
            content: None,
            case_id: None,
            ip_asset_id: None,
            signature_required: None,
            ai_generated: None,
        };
        let payload =
            serde_json::to_value(NewLegalDocument::from_create(RecordId::nil(), &data)).unwrap();
        assert_eq!(payload["ai_generated"], false);
        assert_eq!(payload["signature_required"], false);
        assert_eq!(payload["document_type"], "nda");
        assert!(payload.get("content").is_none());
        assert!(payload.get("lawyer_approved").is_none());
    }
}
