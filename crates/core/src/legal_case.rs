//! Legal case vocabulary and case-number generation.
//!
//! Case numbers look like `LC-2025-0042`: a fixed prefix, the calendar year
//! at creation time and a random four-digit suffix. Numbers are generated on
//! the client and are never checked against existing cases, so two cases
//! created in the same year can share a number.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::Datelike;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Prefix shared by every case number.
pub const CASE_NUMBER_PREFIX: &str = "LC";

/// Size of the random suffix space (`0000..=9999`).
pub const CASE_NUMBER_SPACE: u32 = 10_000;

static CASE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^LC-\d{4}-\d{4}$").expect("case number pattern is valid"));

// ---------------------------------------------------------------------------
// CaseStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a legal case. New cases start as [`CaseStatus::Open`]
/// (assigned by the backend).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 4] = [
        CaseStatus::Open,
        CaseStatus::InProgress,
        CaseStatus::Resolved,
        CaseStatus::Closed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CaseStatus::Open => "open",
            CaseStatus::InProgress => "in_progress",
            CaseStatus::Resolved => "resolved",
            CaseStatus::Closed => "closed",
        }
    }

    /// Badge text; underscores become spaces (`"in progress"`).
    pub fn label(self) -> &'static str {
        match self {
            CaseStatus::Open => "open",
            CaseStatus::InProgress => "in progress",
            CaseStatus::Resolved => "resolved",
            CaseStatus::Closed => "closed",
        }
    }

    /// Open and in-progress cases count as active.
    pub fn is_active(self) -> bool {
        matches!(self, CaseStatus::Open | CaseStatus::InProgress)
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStatus::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "case_status",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Case numbers
// ---------------------------------------------------------------------------

/// Format a case number from its parts. `suffix` is reduced into the
/// four-digit space.
pub fn case_number_for(year: i32, suffix: u32) -> String {
    format!(
        "{CASE_NUMBER_PREFIX}-{year:04}-{:04}",
        suffix % CASE_NUMBER_SPACE
    )
}

/// Generate a case number for `year` drawing the suffix from `rng`.
pub fn generate_case_number_with<R: Rng + ?Sized>(year: i32, rng: &mut R) -> String {
    case_number_for(year, rng.random_range(0..CASE_NUMBER_SPACE))
}

/// Generate a case number for the current UTC year.
pub fn generate_case_number() -> String {
    let year = chrono::Utc::now().year();
    generate_case_number_with(year, &mut rand::rng())
}

/// Whether `s` has the `LC-YYYY-NNNN` shape.
pub fn is_case_number(s: &str) -> bool {
    CASE_NUMBER_RE.is_match(s)
}
