//! Misinformation alerts page.

use innovalex_core::alert::{
    actions_for_status, alert_status_tone, AlertAction, ALERT_STATUS_INVESTIGATING,
    ALERT_STATUS_PENDING, ALERT_STATUS_RESOLVED, MANUAL_RESOLUTION_ACTION, UNKNOWN_ASSET_TITLE,
};
use innovalex_core::format::{average_confidence_percent, confidence_percent};
use innovalex_core::severity::ThreatLevel;
use innovalex_core::types::RecordId;
use innovalex_db::models::misinformation_alert::MisinformationAlert;
use reqwest::Url;

use super::{format_timestamp, EmptyState, PageBody, StatCard};
use crate::error::StoreError;
use crate::stores::{AlertStore, EntityList};

pub const TITLE: &str = "Misinformation Alerts";
pub const SUBTITLE: &str = "AI-powered monitoring for unauthorized use and misinformation";

const EMPTY: EmptyState = EmptyState {
    title: "No Alerts Found",
    message: "Our AI monitoring system hasn't detected any threats to your IP assets.",
    action: None,
};

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertSummary {
    pub total: usize,
    /// Alerts whose threat level is exactly `high`.
    pub high_priority: usize,
    pub resolved: usize,
    /// Mean confidence as a rounded percentage; missing confidences count
    /// as zero.
    pub average_confidence: u32,
}

impl AlertSummary {
    pub fn from_alerts(alerts: &[MisinformationAlert]) -> Self {
        let confidences: Vec<Option<f64>> = alerts.iter().map(|a| a.ai_confidence).collect();
        Self {
            total: alerts.len(),
            high_priority: alerts
                .iter()
                .filter(|a| a.threat_level == ThreatLevel::High)
                .count(),
            resolved: alerts.iter().filter(|a| a.is_resolved()).count(),
            average_confidence: average_confidence_percent(&confidences),
        }
    }

    pub fn stat_cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Alerts", self.total, "Alerts on your assets"),
            StatCard::new("High Priority", self.high_priority, "High threat level"),
            StatCard::new("Resolved", self.resolved, "Threats addressed"),
            StatCard::new(
                "Avg Confidence",
                format!("{}%", self.average_confidence),
                "Detector confidence",
            ),
        ]
    }
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Status filter tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertFilter {
    #[default]
    All,
    Pending,
    Investigating,
    Resolved,
}

impl AlertFilter {
    pub const ALL: [AlertFilter; 4] = [
        AlertFilter::All,
        AlertFilter::Pending,
        AlertFilter::Investigating,
        AlertFilter::Resolved,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AlertFilter::All => "All",
            AlertFilter::Pending => "Pending",
            AlertFilter::Investigating => "Investigating",
            AlertFilter::Resolved => "Resolved",
        }
    }

    pub fn matches(self, alert: &MisinformationAlert) -> bool {
        match self {
            AlertFilter::All => true,
            AlertFilter::Pending => alert.status == ALERT_STATUS_PENDING,
            AlertFilter::Investigating => alert.status == ALERT_STATUS_INVESTIGATING,
            AlertFilter::Resolved => alert.status == ALERT_STATUS_RESOLVED,
        }
    }
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct AlertCard {
    pub id: RecordId,
    pub asset_title: String,
    /// Host of `source_url`, or the raw URL when it does not parse.
    pub source_host: String,
    pub threat_level: ThreatLevel,
    pub status: String,
    pub status_tone: &'static str,
    pub snippet: Option<String>,
    pub detected: String,
    pub confidence: Option<u32>,
    pub resolved: Option<String>,
    pub response_action: Option<String>,
    pub actions: &'static [AlertAction],
}

impl AlertCard {
    pub fn from_alert(alert: &MisinformationAlert) -> Self {
        Self {
            id: alert.id,
            asset_title: alert
                .ip_asset_title
                .clone()
                .unwrap_or_else(|| UNKNOWN_ASSET_TITLE.to_string()),
            source_host: source_host(&alert.source_url),
            threat_level: alert.threat_level,
            status: alert.status.clone(),
            status_tone: alert_status_tone(&alert.status),
            snippet: alert.content_snippet.clone(),
            detected: format_timestamp(alert.created_at),
            // A zero confidence is not shown.
            confidence: alert
                .ai_confidence
                .filter(|c| *c > 0.0)
                .map(confidence_percent),
            resolved: alert.resolved_at.map(format_timestamp),
            response_action: alert.response_action.clone(),
            actions: actions_for_status(&alert.status),
        }
    }
}

/// Hostname of a source URL for the "Detected on" line.
pub fn source_host(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct AlertsPage {
    pub summary: AlertSummary,
    pub filter: AlertFilter,
    pub body: PageBody<AlertCard>,
}

impl AlertsPage {
    /// Summary counters cover every alert; the card list honors `filter`.
    pub fn build(alerts: &EntityList<MisinformationAlert>, filter: AlertFilter) -> Self {
        let visible = EntityList {
            items: alerts
                .items
                .iter()
                .filter(|a| filter.matches(a))
                .cloned()
                .collect(),
            loading: alerts.loading,
        };
        Self {
            summary: AlertSummary::from_alerts(&alerts.items),
            filter,
            body: PageBody::from_list(&visible, "Loading alerts...", EMPTY, AlertCard::from_alert),
        }
    }
}

/// The card's Resolve / Mark Resolved button.
pub async fn resolve_from_page(
    store: &AlertStore,
    id: RecordId,
) -> Result<MisinformationAlert, StoreError> {
    store.resolve_alert(id, MANUAL_RESOLUTION_ACTION).await
}
