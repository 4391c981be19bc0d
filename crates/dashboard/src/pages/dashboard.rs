//! Dashboard overview: headline counters and recent activity.

use innovalex_core::types::Timestamp;
use innovalex_db::models::ip_asset::IpAsset;
use innovalex_db::models::legal_case::LegalCase;
use innovalex_db::models::legal_document::LegalDocument;
use innovalex_db::models::misinformation_alert::MisinformationAlert;

use super::{time_ago, StatCard};
use crate::stores::EntityList;

pub const TITLE: &str = "Dashboard";
pub const SUBTITLE: &str = "Welcome to your AI-powered legal defense command center";

/// Number of entries in the recent activity feed.
pub const RECENT_ACTIVITY_LIMIT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityTone {
    Success,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityItem {
    pub action: String,
    pub details: String,
    pub at: Timestamp,
    pub tone: ActivityTone,
}

impl ActivityItem {
    pub fn time_ago(&self, now: Timestamp) -> String {
        time_ago(self.at, now)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOverview {
    pub stats: Vec<StatCard>,
    pub recent: Vec<ActivityItem>,
    /// Some list is still loading; counters may be incomplete.
    pub loading: bool,
}

impl DashboardOverview {
    pub fn build(
        assets: &EntityList<IpAsset>,
        cases: &EntityList<LegalCase>,
        documents: &EntityList<LegalDocument>,
        alerts: &EntityList<MisinformationAlert>,
    ) -> Self {
        let active_cases = cases.items.iter().filter(|c| c.case_status.is_active()).count();
        let threats_resolved = alerts.items.iter().filter(|a| a.is_resolved()).count();

        let stats = vec![
            StatCard::new(
                "IP Assets Protected",
                assets.len(),
                "Active intellectual property assets",
            ),
            StatCard::new("Active Legal Cases", active_cases, "Cases in progress"),
            StatCard::new(
                "Documents Generated",
                documents.len(),
                "AI-generated legal documents",
            ),
            StatCard::new(
                "Threats Detected",
                threats_resolved,
                "Misinformation alerts resolved",
            ),
        ];

        Self {
            stats,
            recent: recent_activity(assets, cases, documents, alerts),
            loading: assets.loading || cases.loading || documents.loading || alerts.loading,
        }
    }

    /// Value of the counter titled `title`.
    pub fn stat(&self, title: &str) -> Option<&str> {
        self.stats
            .iter()
            .find(|s| s.title == title)
            .map(|s| s.value.as_str())
    }
}

/// The most recent records across all four lists, newest first.
fn recent_activity(
    assets: &EntityList<IpAsset>,
    cases: &EntityList<LegalCase>,
    documents: &EntityList<LegalDocument>,
    alerts: &EntityList<MisinformationAlert>,
) -> Vec<ActivityItem> {
    let mut items: Vec<ActivityItem> = Vec::new();

    items.extend(assets.items.iter().map(|a| ActivityItem {
        action: format!("New {} registered", a.ip_type.label().to_lowercase()),
        details: a.title.clone(),
        at: a.created_at,
        tone: ActivityTone::Success,
    }));
    items.extend(cases.items.iter().map(|c| ActivityItem {
        action: "Legal case updated".to_string(),
        details: format!("{} - {}", c.case_number, c.title),
        at: c.updated_at,
        tone: ActivityTone::Info,
    }));
    items.extend(documents.items.iter().map(|d| ActivityItem {
        action: format!("{} generated", d.document_type.label()),
        details: d.title.clone(),
        at: d.created_at,
        tone: ActivityTone::Success,
    }));
    items.extend(alerts.items.iter().map(|a| ActivityItem {
        action: "Misinformation threat detected".to_string(),
        details: a
            .ip_asset_title
            .clone()
            .unwrap_or_else(|| a.source_url.clone()),
        at: a.created_at,
        tone: ActivityTone::Warning,
    }));

    items.sort_by(|a, b| b.at.cmp(&a.at));
    items.truncate(RECENT_ACTIVITY_LIMIT);
    items
}
