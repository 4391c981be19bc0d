//! Legal case row and DTOs.

use innovalex_core::legal_case::CaseStatus;
use innovalex_core::severity::Priority;
use innovalex_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use super::{flexible_timestamp, flexible_timestamp_opt, null_as_empty, Record};

/// A row from the `legal_cases` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalCase {
    pub id: RecordId,
    /// The owning user.
    pub client_id: RecordId,
    #[serde(default)]
    pub assigned_lawyer_id: Option<RecordId>,
    /// Weak reference; the asset may since have been deleted.
    #[serde(default)]
    pub ip_asset_id: Option<RecordId>,
    pub case_number: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub case_status: CaseStatus,
    pub priority: Priority,
    #[serde(default)]
    pub estimated_value: Option<f64>,
    #[serde(deserialize_with = "flexible_timestamp")]
    pub filing_date: Timestamp,
    #[serde(default, deserialize_with = "flexible_timestamp_opt")]
    pub resolution_date: Option<Timestamp>,
    #[serde(default)]
    pub outcome: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for LegalCase {
    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

/// DTO for opening a new legal case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLegalCase {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_asset_id: Option<RecordId>,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<f64>,
}

/// Insert payload: the create DTO plus the owning client and the generated
/// case number.
#[derive(Debug, Serialize)]
pub struct NewLegalCase<'a> {
    pub client_id: RecordId,
    pub case_number: &'a str,
    #[serde(flatten)]
    pub data: &'a CreateLegalCase,
}

/// DTO for patching a legal case. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateLegalCase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_status: Option<CaseStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_lawyer_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_asset_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
}
