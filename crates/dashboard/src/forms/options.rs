//! Select options for the create forms.

use innovalex_core::document::DocumentType;
use innovalex_core::ip_asset::IpType;
use innovalex_core::severity::Priority;
use innovalex_db::models::ip_asset::IpAsset;
use innovalex_db::models::legal_case::LegalCase;

/// One entry of a select control: the submitted value and its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

pub fn ip_type_options() -> Vec<SelectOption> {
    IpType::ALL
        .into_iter()
        .map(|t| SelectOption::new(t.as_str(), t.label()))
        .collect()
}

pub fn priority_options() -> Vec<SelectOption> {
    Priority::ALL
        .into_iter()
        .map(|p| SelectOption::new(p.as_str(), p.label()))
        .collect()
}

pub fn document_type_options() -> Vec<SelectOption> {
    DocumentType::ALL
        .into_iter()
        .map(|t| SelectOption::new(t.as_str(), t.label()))
        .collect()
}

/// Asset picker: one option per asset, labelled by title.
pub fn asset_options(assets: &[IpAsset]) -> Vec<SelectOption> {
    assets
        .iter()
        .map(|a| SelectOption::new(a.id.to_string(), a.title.clone()))
        .collect()
}

/// Case picker, labelled `"<case number> - <title>"`.
pub fn case_options(cases: &[LegalCase]) -> Vec<SelectOption> {
    cases
        .iter()
        .map(|c| SelectOption::new(c.id.to_string(), format!("{} - {}", c.case_number, c.title)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_options_carry_wire_values_and_labels() {
        let types = ip_type_options();
        assert_eq!(types.len(), 4);
        assert_eq!(types[3], SelectOption::new("trade_secret", "Trade Secret"));

        let docs = document_type_options();
        assert_eq!(docs[1], SelectOption::new("cease_desist", "Cease & Desist"));

        assert_eq!(priority_options()[0].value, "low");
    }
}
