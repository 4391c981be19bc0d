//! Misinformation alert row and DTOs.

use innovalex_core::alert::ALERT_STATUS_RESOLVED;
use innovalex_core::severity::ThreatLevel;
use innovalex_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use super::Record;

/// A row from the `misinformation_alerts` table, plus the title of the
/// owning asset joined in on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MisinformationAlert {
    pub id: RecordId,
    /// Owning asset; alert access is scoped through the asset's owner.
    pub ip_asset_id: RecordId,
    pub source_url: String,
    #[serde(default)]
    pub content_snippet: Option<String>,
    pub threat_level: ThreatLevel,
    /// Detector confidence in `0.0..=1.0`.
    #[serde(default)]
    pub ai_confidence: Option<f64>,
    /// Free text: `pending`, `investigating`, `resolved` or anything else.
    pub status: String,
    #[serde(default)]
    pub response_action: Option<String>,
    #[serde(default)]
    pub resolved_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Not a column. Filled from the asset list after fetching.
    #[serde(default, skip_serializing)]
    pub ip_asset_title: Option<String>,
}

impl MisinformationAlert {
    pub fn is_resolved(&self) -> bool {
        self.status == ALERT_STATUS_RESOLVED
    }
}

impl Record for MisinformationAlert {
    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn merge_from(&mut self, updated: Self) {
        let title = updated.ip_asset_title.or_else(|| self.ip_asset_title.take());
        *self = MisinformationAlert {
            ip_asset_title: title,
            ..updated
        };
    }
}

/// DTO for patching an alert. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateMisinformationAlert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threat_level: Option<ThreatLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_snippet: Option<String>,
}

impl UpdateMisinformationAlert {
    /// Patch that marks an alert resolved with the given action at `at`.
    pub fn resolve(response_action: impl Into<String>, at: Timestamp) -> Self {
        Self {
            status: Some(ALERT_STATUS_RESOLVED.to_string()),
            response_action: Some(response_action.into()),
            resolved_at: Some(at),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;

    fn alert_row(status: &str) -> serde_json::Value {
        json!({
            "id": RecordId::nil(),
            "ip_asset_id": RecordId::nil(),
            "source_url": "https://social.example.com/post/1",
            "threat_level": "high",
            "ai_confidence": 0.87,
            "status": status,
            "created_at": "2025-02-01T12:00:00Z",
            "updated_at": "2025-02-01T12:00:00Z"
        })
    }

    #[test]
    fn title_is_never_sent() {
        let mut alert: MisinformationAlert = serde_json::from_value(alert_row("pending")).unwrap();
        alert.ip_asset_title = Some("Widget Patent".into());
        let value = serde_json::to_value(&alert).unwrap();
        assert!(value.get("ip_asset_title").is_none());
    }

    #[test]
    fn merge_keeps_joined_title() {
        let mut current: MisinformationAlert =
            serde_json::from_value(alert_row("pending")).unwrap();
        current.ip_asset_title = Some("Widget Patent".into());
        let updated: MisinformationAlert = serde_json::from_value(alert_row("resolved")).unwrap();

        current.merge_from(updated);
        assert_eq!(current.status, "resolved");
        assert_eq!(current.ip_asset_title.as_deref(), Some("Widget Patent"));
    }

    #[test]
    fn resolve_patch_sets_three_fields() {
        let now = Utc::now();
        let patch = serde_json::to_value(UpdateMisinformationAlert::resolve("Takedown sent", now))
            .unwrap();
        let object = patch.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(patch["status"], "resolved");
        assert_eq!(patch["response_action"], "Takedown sent");
    }
}
