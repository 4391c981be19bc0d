use innovalex_core::document::{approval_label, signature_label};
use innovalex_db::models::legal_document::LegalDocument;

use super::{format_timestamp, CreateDialog, EmptyState, PageBody};
use crate::stores::EntityList;

pub const TITLE: &str = "Legal Documents";
pub const SUBTITLE: &str = "AI-generated legal documents and templates";
pub const CREATE_ACTION: &str = "New Document";

const EMPTY: EmptyState = EmptyState {
    title: "No Documents Yet",
    message: "Start creating legal documents with our AI-powered generator.",
    action: Some("Generate First Document"),
};

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentCard {
    pub title: String,
    pub type_label: &'static str,
    pub ai_generated: bool,
    pub approval: &'static str,
    pub signature: Option<&'static str>,
    pub created: String,
}

impl DocumentCard {
    pub fn from_document(doc: &LegalDocument) -> Self {
        Self {
            title: doc.title.clone(),
            type_label: doc.document_type.label(),
            ai_generated: doc.ai_generated,
            approval: approval_label(doc.lawyer_approved),
            signature: signature_label(doc.signature_required, doc.signed_at.is_some()),
            created: format_timestamp(doc.created_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentsPage {
    pub body: PageBody<DocumentCard>,
    pub dialog: CreateDialog,
}

impl DocumentsPage {
    pub fn build(documents: &EntityList<LegalDocument>, dialog: CreateDialog) -> Self {
        Self {
            body: PageBody::from_list(
                documents,
                "Loading documents...",
                EMPTY,
                DocumentCard::from_document,
            ),
            dialog,
        }
    }
}
