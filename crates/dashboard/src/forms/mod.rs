//! Create forms.
//!
//! A form schema is a struct of raw inputs, exactly as typed or selected,
//! validated with the `validator` derive and then converted into a create
//! DTO. [`FormState`] wraps a schema with inline errors, the in-flight
//! flag and the completion callback a page uses to close its dialog.

pub mod document;
pub mod ip_asset;
pub mod legal_case;
pub mod options;

pub use document::DocumentForm;
pub use ip_asset::IpAssetForm;
pub use legal_case::LegalCaseForm;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use innovalex_core::types::{Date, RecordId};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::StoreError;

// ---------------------------------------------------------------------------
// Field errors
// ---------------------------------------------------------------------------

/// Inline validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    /// First message for `field`, the one shown under the input.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.0.get(field)?.first().map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (field, list) in errors.field_errors() {
            for error in list.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                out.add(&field.to_string(), message);
            }
        }
        out
    }
}

/// A schema that converts raw inputs into a create DTO.
pub trait FormSchema: Validate + Default + Clone {
    type Output;

    /// Convert already-validated inputs. Only called after `validate`
    /// succeeded, but conversion problems are still reported per field.
    fn convert(&self) -> Result<Self::Output, FieldErrors>;

    fn to_input(&self) -> Result<Self::Output, FieldErrors> {
        self.validate()?;
        self.convert()
    }
}

// ---------------------------------------------------------------------------
// FormState
// ---------------------------------------------------------------------------

/// Why a submission did not produce a record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    /// Inputs failed validation; see [`FormState::errors`]. Nothing was
    /// sent.
    #[error("Form has invalid fields")]
    Invalid,

    /// A submission is already in flight.
    #[error("Submission already in progress")]
    InFlight,

    /// The store rejected the create. It has already raised a toast.
    #[error(transparent)]
    Store(#[from] StoreError),
}

type Completion = Box<dyn FnMut() + Send>;

/// Values, inline errors and submission state of one create form.
pub struct FormState<S> {
    pub values: S,
    errors: FieldErrors,
    submitting: Arc<AtomicBool>,
    on_complete: Option<Completion>,
}

impl<S: FormSchema> FormState<S> {
    pub fn new() -> Self {
        Self::with_values(S::default())
    }

    pub fn with_values(values: S) -> Self {
        Self {
            values,
            errors: FieldErrors::default(),
            submitting: Arc::new(AtomicBool::new(false)),
            on_complete: None,
        }
    }

    /// Callback run after every successful submission.
    pub fn on_complete(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether the submit control should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Shared view of the in-flight flag for hosts that render while a
    /// submission is pending.
    pub fn submitting_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.submitting)
    }

    /// Validate, then hand the converted input to `create`.
    ///
    /// Invalid inputs are reported inline and nothing is sent. On success
    /// the values are reset and the completion callback runs; on failure
    /// the values are kept so the user can retry.
    pub async fn submit<F, Fut, R>(&mut self, create: F) -> Result<R, SubmitError>
    where
        F: FnOnce(S::Output) -> Fut,
        Fut: Future<Output = Result<R, StoreError>>,
    {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }

        let input = match self.values.to_input() {
            Ok(input) => input,
            Err(errors) => {
                tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Form rejected");
                self.errors = errors;
                return Err(SubmitError::Invalid);
            }
        };
        self.errors = FieldErrors::default();

        let result = {
            let _guard = SubmittingGuard::start(&self.submitting);
            create(input).await
        };

        let record = result?;
        self.values = S::default();
        if let Some(callback) = self.on_complete.as_mut() {
            callback();
        }
        Ok(record)
    }
}

/// Holds the submitting flag up until dropped, including when the
/// submission future is dropped mid-flight.
struct SubmittingGuard<'a>(&'a AtomicBool);

impl<'a> SubmittingGuard<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<S: FormSchema> Default for FormState<S> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Shared field rules
// ---------------------------------------------------------------------------

pub(crate) fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Empty or whitespace-only inputs are "not provided".
pub(crate) fn optional(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

pub(crate) fn parse_date(value: &str) -> Option<Date> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub(crate) fn validate_optional_date(value: &str) -> Result<(), ValidationError> {
    match optional(value) {
        Some(v) if parse_date(v).is_none() => {
            Err(field_error("date", "Enter a date as YYYY-MM-DD"))
        }
        _ => Ok(()),
    }
}

pub(crate) fn validate_optional_id(value: &str) -> Result<(), ValidationError> {
    match optional(value) {
        Some(v) if v.parse::<RecordId>().is_err() => {
            Err(field_error("id", "Select an item from the list"))
        }
        _ => Ok(()),
    }
}

/// Parse an optional id input, recording a field error when malformed.
pub(crate) fn convert_optional_id(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
) -> Option<RecordId> {
    let raw = optional(value)?;
    match raw.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.add(field, "Select an item from the list");
            None
        }
    }
}
