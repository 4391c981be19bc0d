//! Legal document vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Template family of a legal document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Nda,
    CeaseDesist,
    Dmca,
    License,
    Contract,
}

impl DocumentType {
    pub const ALL: [DocumentType; 5] = [
        DocumentType::Nda,
        DocumentType::CeaseDesist,
        DocumentType::Dmca,
        DocumentType::License,
        DocumentType::Contract,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentType::Nda => "nda",
            DocumentType::CeaseDesist => "cease_desist",
            DocumentType::Dmca => "dmca",
            DocumentType::License => "license",
            DocumentType::Contract => "contract",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Nda => "NDA",
            DocumentType::CeaseDesist => "Cease & Desist",
            DocumentType::Dmca => "DMCA",
            DocumentType::License => "License",
            DocumentType::Contract => "Contract",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "document_type",
                value: s.to_string(),
            })
    }
}

/// Review line shown on a document card.
pub fn approval_label(lawyer_approved: bool) -> &'static str {
    if lawyer_approved {
        "Lawyer Approved"
    } else {
        "Pending Review"
    }
}

/// Signature line shown on a document card, `None` when no signature is
/// required.
pub fn signature_label(signature_required: bool, signed: bool) -> Option<&'static str> {
    match (signature_required, signed) {
        (false, _) => None,
        (true, true) => Some("Signed"),
        (true, false) => Some("Signature Required"),
    }
}
