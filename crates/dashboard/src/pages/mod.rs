//! Page view models.
//!
//! A page turns one or more store snapshots into what the user sees: a
//! header, summary counters, and a body that is a loading indicator, an
//! empty-state card or a list of cards. Counters are recomputed from the
//! cached lists on every build; nothing is aggregated remotely.

pub mod alerts;
pub mod dashboard;
pub mod documents;
pub mod ip_assets;
pub mod legal_cases;
pub mod team;

use chrono::{Datelike, NaiveDate};
use innovalex_core::types::Timestamp;

use crate::stores::EntityList;

/// Body of a list page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageBody<T> {
    Loading(&'static str),
    Empty(EmptyState),
    Cards(Vec<T>),
}

impl<T> PageBody<T> {
    /// Loading while the list is loading, the empty state when it holds
    /// nothing, otherwise one card per item.
    pub fn from_list<E, F>(
        list: &EntityList<E>,
        loading: &'static str,
        empty: EmptyState,
        card: F,
    ) -> Self
    where
        F: FnMut(&E) -> T,
    {
        if list.loading {
            PageBody::Loading(loading)
        } else if list.items.is_empty() {
            PageBody::Empty(empty)
        } else {
            PageBody::Cards(list.items.iter().map(card).collect())
        }
    }

    pub fn cards(&self) -> &[T] {
        match self {
            PageBody::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageBody::Loading(_))
    }
}

/// Card shown in place of an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: &'static str,
    /// Label of the button that opens the create dialog, if any.
    pub action: Option<&'static str>,
}

/// A labelled summary number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub description: &'static str,
}

impl StatCard {
    pub fn new(title: &'static str, value: impl ToString, description: &'static str) -> Self {
        Self {
            title,
            value: value.to_string(),
            description,
        }
    }
}

/// Open/closed state of a page's create dialog. The embedded form's
/// completion callback closes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateDialog {
    open: bool,
}

impl CreateDialog {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// `M/D/YYYY`, the way dates appear on every card.
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

pub fn format_timestamp(ts: Timestamp) -> String {
    format_date(ts.date_naive())
}

/// Coarse "how long ago" text for the activity feed.
pub fn time_ago(then: Timestamp, now: Timestamp) -> String {
    let minutes = (now - then).num_minutes().max(0);
    let (amount, unit) = match minutes {
        0 => return "just now".to_string(),
        m if m < 60 => (m, "minute"),
        m if m < 60 * 24 => (m / 60, "hour"),
        m => (m / (60 * 24), "day"),
    };
    let plural = if amount == 1 { "" } else { "s" };
    format!("{amount} {unit}{plural} ago")
}
