use innovalex_core::format::format_currency;
use innovalex_core::severity::Priority;
use innovalex_db::models::legal_case::LegalCase;

use super::{format_timestamp, CreateDialog, EmptyState, PageBody, StatCard};
use crate::stores::EntityList;

pub const TITLE: &str = "Legal Cases";
pub const SUBTITLE: &str = "Manage active legal proceedings and case status";
pub const CREATE_ACTION: &str = "New Case";

const EMPTY: EmptyState = EmptyState {
    title: "No Active Cases",
    message: "You don't have any active legal cases at the moment.",
    action: Some("Create First Case"),
};

#[derive(Debug, Clone, PartialEq)]
pub struct LegalCaseCard {
    pub case_number: String,
    pub status_label: &'static str,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub filed: String,
    /// Formatted amount; absent when the case carries no estimate.
    pub estimated_value: Option<String>,
}

impl LegalCaseCard {
    pub fn from_case(case: &LegalCase) -> Self {
        Self {
            case_number: case.case_number.clone(),
            status_label: case.case_status.label(),
            priority: case.priority,
            title: case.title.clone(),
            description: case.description.clone(),
            filed: format_timestamp(case.filing_date),
            estimated_value: case.estimated_value.map(format_currency),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegalCasesPage {
    pub stats: Vec<StatCard>,
    pub body: PageBody<LegalCaseCard>,
    pub dialog: CreateDialog,
}

impl LegalCasesPage {
    pub fn build(cases: &EntityList<LegalCase>, dialog: CreateDialog) -> Self {
        let active = cases.items.iter().filter(|c| c.case_status.is_active()).count();
        let critical = cases
            .items
            .iter()
            .filter(|c| c.priority == Priority::Critical)
            .count();
        Self {
            stats: vec![
                StatCard::new("Total Cases", cases.len(), "All cases on file"),
                StatCard::new("Active Cases", active, "Open or in progress"),
                StatCard::new("Critical", critical, "Critical priority"),
            ],
            body: PageBody::from_list(cases, "Loading legal cases...", EMPTY, LegalCaseCard::from_case),
            dialog,
        }
    }
}
