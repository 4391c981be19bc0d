//! Intellectual-property asset vocabulary.
//!
//! The asset `status` column is free text on the backend; the constants here
//! are the values the dashboard knows how to badge.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

pub const ASSET_STATUS_ACTIVE: &str = "active";
pub const ASSET_STATUS_PENDING: &str = "pending";
pub const ASSET_STATUS_EXPIRED: &str = "expired";

// ---------------------------------------------------------------------------
// IpType
// ---------------------------------------------------------------------------

/// Kind of intellectual property an asset represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IpType {
    Patent,
    Trademark,
    Copyright,
    TradeSecret,
}

impl IpType {
    /// Every variant, in the order the asset form lists them.
    pub const ALL: [IpType; 4] = [
        IpType::Patent,
        IpType::Trademark,
        IpType::Copyright,
        IpType::TradeSecret,
    ];

    /// Wire value stored in the `ip_type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            IpType::Patent => "patent",
            IpType::Trademark => "trademark",
            IpType::Copyright => "copyright",
            IpType::TradeSecret => "trade_secret",
        }
    }

    /// Human-readable label, e.g. `"Trade Secret"`.
    pub fn label(self) -> &'static str {
        match self {
            IpType::Patent => "Patent",
            IpType::Trademark => "Trademark",
            IpType::Copyright => "Copyright",
            IpType::TradeSecret => "Trade Secret",
        }
    }
}

impl fmt::Display for IpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IpType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IpType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "ip_type",
                value: s.to_string(),
            })
    }
}

/// Badge tone for an asset status. Unknown statuses render neutral.
pub fn asset_status_tone(status: &str) -> &'static str {
    match status {
        ASSET_STATUS_ACTIVE => "success",
        ASSET_STATUS_PENDING => "warning",
        ASSET_STATUS_EXPIRED => "danger",
        _ => "neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_value() {
        for t in IpType::ALL {
            assert_eq!(t.as_str().parse::<IpType>().unwrap(), t);
        }
    }

    #[test]
    fn rejects_unknown_type() {
        let err = "utility_model".parse::<IpType>().unwrap_err();
        assert!(err.to_string().contains("utility_model"));
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&IpType::TradeSecret).unwrap();
        assert_eq!(json, "\"trade_secret\"");
    }

    #[test]
    fn unknown_status_is_neutral() {
        assert_eq!(asset_status_tone("active"), "success");
        assert_eq!(asset_status_tone("archived"), "neutral");
    }
}
