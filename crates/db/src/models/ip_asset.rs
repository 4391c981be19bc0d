//! IP asset row and DTOs.

use innovalex_core::ip_asset::IpType;
use innovalex_core::types::{Date, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use super::{null_as_empty, Record};

/// A row from the `ip_assets` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpAsset {
    pub id: RecordId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub ip_type: IpType,
    /// Free text; the dashboard badges `active`, `pending` and `expired`.
    pub status: String,
    #[serde(default)]
    pub file_hash: Option<String>,
    #[serde(default)]
    pub blockchain_proof: Option<String>,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub filing_date: Option<Date>,
    #[serde(default)]
    pub expiry_date: Option<Date>,
    pub owner_id: RecordId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for IpAsset {
    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

/// DTO for registering a new IP asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIpAsset {
    pub title: String,
    pub description: String,
    pub ip_type: IpType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filing_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<Date>,
}

impl CreateIpAsset {
    pub fn new(title: impl Into<String>, description: impl Into<String>, ip_type: IpType) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ip_type,
            file_hash: None,
            registration_number: None,
            filing_date: None,
            expiry_date: None,
        }
    }
}

/// Insert payload: the create DTO plus the owning user.
#[derive(Debug, Serialize)]
pub struct NewIpAsset<'a> {
    pub owner_id: RecordId,
    #[serde(flatten)]
    pub data: &'a CreateIpAsset,
}

/// DTO for patching an IP asset. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateIpAsset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_type: Option<IpType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockchain_proof: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filing_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<Date>,
}

/// Projection used when joining alerts to their asset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssetTitle {
    pub id: RecordId,
    pub title: String,
}

/// Projection of just the primary key.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AssetId {
    pub id: RecordId,
}
