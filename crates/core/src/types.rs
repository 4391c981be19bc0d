/// All table primary keys are UUIDs assigned by the backend.
pub type RecordId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates without a time component (filing and expiry dates).
pub type Date = chrono::NaiveDate;
