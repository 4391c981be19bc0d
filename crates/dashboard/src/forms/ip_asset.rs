use innovalex_core::ip_asset::IpType;
use innovalex_db::models::ip_asset::CreateIpAsset;
use validator::{Validate, ValidationError};

use super::{field_error, optional, parse_date, validate_optional_date, FieldErrors, FormSchema};

/// "Register New IP Asset" form.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct IpAssetForm {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[validate(custom(function = "validate_description"))]
    pub description: String,
    /// Wire value of the selected type; empty until one is picked.
    #[validate(custom(function = "validate_ip_type"))]
    pub ip_type: String,
    pub registration_number: String,
    /// `YYYY-MM-DD`, optional.
    #[validate(custom(function = "validate_optional_date"))]
    pub filing_date: String,
    /// `YYYY-MM-DD`, optional.
    #[validate(custom(function = "validate_optional_date"))]
    pub expiry_date: String,
}

fn validate_title(value: &str) -> Result<(), ValidationError> {
    match optional(value) {
        Some(_) => Ok(()),
        None => Err(field_error("required", "Title is required")),
    }
}

fn validate_description(value: &str) -> Result<(), ValidationError> {
    match optional(value) {
        Some(_) => Ok(()),
        None => Err(field_error("required", "Description is required")),
    }
}

fn validate_ip_type(value: &str) -> Result<(), ValidationError> {
    match value.parse::<IpType>() {
        Ok(_) => Ok(()),
        Err(_) => Err(field_error("ip_type", "Select an IP type")),
    }
}

impl FormSchema for IpAssetForm {
    type Output = CreateIpAsset;

    fn convert(&self) -> Result<CreateIpAsset, FieldErrors> {
        let mut errors = FieldErrors::default();
        let ip_type = match self.ip_type.parse::<IpType>() {
            Ok(t) => Some(t),
            Err(e) => {
                errors.add("ip_type", e.to_string());
                None
            }
        };
        let filing_date = optional(&self.filing_date).and_then(parse_date);
        let expiry_date = optional(&self.expiry_date).and_then(parse_date);

        match ip_type {
            Some(ip_type) if errors.is_empty() => Ok(CreateIpAsset {
                registration_number: optional(&self.registration_number).map(str::to_string),
                filing_date,
                expiry_date,
                ..CreateIpAsset::new(self.title.trim(), self.description.trim(), ip_type)
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use innovalex_core::types::Date;

    use super::*;

    fn filled() -> IpAssetForm {
        IpAssetForm {
            title: "Widget Patent".into(),
            description: "Self-folding widget".into(),
            ip_type: "patent".into(),
            ..Default::default()
        }
    }

    #[test]
    fn blank_optionals_become_none() {
        let input = filled().to_input().unwrap();
        assert_eq!(input.ip_type, IpType::Patent);
        assert_eq!(input.registration_number, None);
        assert_eq!(input.filing_date, None);
    }

    #[test]
    fn dates_are_parsed() {
        let form = IpAssetForm {
            filing_date: "2024-03-01".into(),
            expiry_date: "2044-03-01".into(),
            registration_number: " US-123 ".into(),
            ..filled()
        };
        let input = form.to_input().unwrap();
        assert_eq!(input.filing_date, Date::from_ymd_opt(2024, 3, 1));
        assert_eq!(input.expiry_date, Date::from_ymd_opt(2044, 3, 1));
        assert_eq!(input.registration_number.as_deref(), Some("US-123"));
    }

    #[test]
    fn unselected_type_and_blank_title_are_inline_errors() {
        let form = IpAssetForm {
            title: "   ".into(),
            ip_type: String::new(),
            ..filled()
        };
        let errors = form.to_input().unwrap_err();
        assert_eq!(errors.first("title"), Some("Title is required"));
        assert_eq!(errors.first("ip_type"), Some("Select an IP type"));
        assert_eq!(errors.first("description"), None);
    }

    #[test]
    fn malformed_date_is_rejected() {
        let form = IpAssetForm {
            expiry_date: "next year".into(),
            ..filled()
        };
        let errors = form.to_input().unwrap_err();
        assert_eq!(errors.first("expiry_date"), Some("Enter a date as YYYY-MM-DD"));
    }
}
