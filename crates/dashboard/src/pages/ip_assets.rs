use innovalex_core::ip_asset::asset_status_tone;
use innovalex_db::models::ip_asset::IpAsset;

use super::{format_date, format_timestamp, CreateDialog, EmptyState, PageBody};
use crate::stores::EntityList;

pub const TITLE: &str = "IP Assets";
pub const SUBTITLE: &str = "Manage and protect your intellectual property portfolio";
pub const CREATE_ACTION: &str = "Add IP Asset";

const EMPTY: EmptyState = EmptyState {
    title: "No IP Assets Yet",
    message: "Start building your intellectual property portfolio by registering your first asset.",
    action: Some("Create First IP Asset"),
};

#[derive(Debug, Clone, PartialEq)]
pub struct IpAssetCard {
    pub title: String,
    pub type_label: &'static str,
    pub status: String,
    pub status_tone: &'static str,
    pub description: String,
    pub registration_number: Option<String>,
    pub created: String,
    pub expires: Option<String>,
}

impl IpAssetCard {
    pub fn from_asset(asset: &IpAsset) -> Self {
        let description = if asset.description.trim().is_empty() {
            "No description provided".to_string()
        } else {
            asset.description.clone()
        };
        Self {
            title: asset.title.clone(),
            type_label: asset.ip_type.label(),
            status: asset.status.clone(),
            status_tone: asset_status_tone(&asset.status),
            description,
            registration_number: asset.registration_number.clone(),
            created: format_timestamp(asset.created_at),
            expires: asset.expiry_date.map(format_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IpAssetsPage {
    pub body: PageBody<IpAssetCard>,
    pub dialog: CreateDialog,
}

impl IpAssetsPage {
    pub fn build(assets: &EntityList<IpAsset>, dialog: CreateDialog) -> Self {
        Self {
            body: PageBody::from_list(assets, "Loading IP assets...", EMPTY, IpAssetCard::from_asset),
            dialog,
        }
    }
}
