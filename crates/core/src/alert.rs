//! Misinformation alert vocabulary.
//!
//! Alert `status` is free text on the backend. The dashboard understands
//! `pending`, `investigating` and `resolved`; anything else is shown as-is
//! with no actions.

pub const ALERT_STATUS_PENDING: &str = "pending";
pub const ALERT_STATUS_INVESTIGATING: &str = "investigating";
pub const ALERT_STATUS_RESOLVED: &str = "resolved";

/// Title attached to an alert whose asset could not be joined.
pub const UNKNOWN_ASSET_TITLE: &str = "Unknown Asset";

/// Response action recorded when a user resolves an alert from the page.
pub const MANUAL_RESOLUTION_ACTION: &str = "Manual resolution - threat addressed";

/// Actions a user can take on an alert card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    Investigate,
    Resolve,
    MarkResolved,
}

impl AlertAction {
    pub fn label(self) -> &'static str {
        match self {
            AlertAction::Investigate => "Investigate",
            AlertAction::Resolve => "Resolve",
            AlertAction::MarkResolved => "Mark Resolved",
        }
    }
}

/// Actions offered for an alert in the given status.
pub fn actions_for_status(status: &str) -> &'static [AlertAction] {
    match status {
        ALERT_STATUS_PENDING => &[AlertAction::Investigate, AlertAction::Resolve],
        ALERT_STATUS_INVESTIGATING => &[AlertAction::MarkResolved],
        _ => &[],
    }
}

/// Badge tone for an alert status.
pub fn alert_status_tone(status: &str) -> &'static str {
    match status {
        ALERT_STATUS_RESOLVED => "success",
        ALERT_STATUS_PENDING => "warning",
        ALERT_STATUS_INVESTIGATING => "info",
        _ => "neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_offers_investigate_and_resolve() {
        assert_eq!(
            actions_for_status("pending"),
            &[AlertAction::Investigate, AlertAction::Resolve]
        );
    }

    #[test]
    fn resolved_and_unknown_offer_nothing() {
        assert!(actions_for_status("resolved").is_empty());
        assert!(actions_for_status("dismissed").is_empty());
    }
}
