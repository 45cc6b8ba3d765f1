//! DTOs for owner endpoints.

use regex::Regex;
use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};
use std::sync::LazyLock;
use validator::Validate;

use super::not_blank;
use crate::domain::entities::{Owner, Person};

/// Telephone numbers are 1 to 10 digits, nothing else.
static TELEPHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,10}$").unwrap());

/// Body of `POST /owners` and `PUT /owners/{ownerId}`.
///
/// An `id` in the payload is ignored; the path decides which owner is written.
/// A `null` field reads as empty and fails the blank check.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnerRequest {
    #[serde_as(as = "DefaultOnNull")]
    #[validate(custom(function = "not_blank"), length(max = 30))]
    pub first_name: String,

    #[serde_as(as = "DefaultOnNull")]
    #[validate(custom(function = "not_blank"), length(max = 30))]
    pub last_name: String,

    #[serde_as(as = "DefaultOnNull")]
    #[validate(custom(function = "not_blank"), length(max = 255))]
    pub address: String,

    #[serde_as(as = "DefaultOnNull")]
    #[validate(custom(function = "not_blank"), length(max = 80))]
    pub city: String,

    #[serde_as(as = "DefaultOnNull")]
    #[validate(
        custom(function = "not_blank"),
        regex(path = "*TELEPHONE_REGEX", code = "digits", message = "must be 1 to 10 digits")
    )]
    pub telephone: String,
}

impl OwnerRequest {
    /// Builds a new, unsaved owner.
    pub fn into_owner(self) -> Owner {
        let mut owner = Owner::new();
        self.apply_to(&mut owner);
        owner
    }

    /// Copies every editable field onto `owner`, leaving its id and pets alone.
    pub fn apply_to(self, owner: &mut Owner) {
        owner.person = Person::new(self.first_name, self.last_name);
        owner.address = self.address;
        owner.city = self.city;
        owner.telephone = self.telephone;
    }
}

/// Query string of `GET /owners/list`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSearchQuery {
    pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationErrors;

    fn john_doe() -> OwnerRequest {
        OwnerRequest {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            telephone: "0123456789".to_string(),
        }
    }

    fn codes(errors: &ValidationErrors, field: &str) -> Vec<String> {
        errors
            .field_errors()
            .get(field)
            .map(|errs| errs.iter().map(|e| e.code.to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_valid_owner_passes() {
        assert!(john_doe().validate().is_ok());
    }

    #[test]
    fn test_ten_digit_telephone_ok() {
        let request = OwnerRequest {
            telephone: "1234567890".to_string(),
            ..john_doe()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_eleven_digit_telephone_rejected_once() {
        let request = OwnerRequest {
            telephone: "12345678901".to_string(),
            ..john_doe()
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(codes(&errors, "telephone"), vec!["digits"]);
        assert_eq!(errors.field_errors().len(), 1);
    }

    #[test]
    fn test_non_numeric_telephone_rejected() {
        let request = OwnerRequest {
            telephone: "608-555-10".to_string(),
            ..john_doe()
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(codes(&errors, "telephone"), vec!["digits"]);
    }

    #[test]
    fn test_empty_telephone_fails_twice() {
        let request = OwnerRequest {
            telephone: String::new(),
            ..john_doe()
        };

        let errors = request.validate().unwrap_err();
        let mut telephone = codes(&errors, "telephone");
        telephone.sort();
        assert_eq!(telephone, vec!["digits", "required"]);
    }

    #[test]
    fn test_blank_names_required() {
        let request = OwnerRequest {
            first_name: "  ".to_string(),
            last_name: String::new(),
            ..john_doe()
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 2);
    }

    #[test]
    fn test_city_too_long_rejected() {
        let request = OwnerRequest {
            city: "x".repeat(81),
            ..john_doe()
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(codes(&errors, "city"), vec!["length"]);
    }

    #[test]
    fn test_missing_fields_deserialize_to_empty_and_fail() {
        let request: OwnerRequest = serde_json::from_str(r#"{"id": 99, "firstName": "John"}"#).unwrap();

        assert_eq!(request.first_name, "John");
        let errors = request.validate().unwrap_err();
        assert_eq!(codes(&errors, "city"), vec!["required"]);
    }

    #[test]
    fn test_null_fields_deserialize_to_empty_and_fail() {
        let request: OwnerRequest = serde_json::from_str(
            r#"{"firstName":"John","lastName":null,"address":"1 Main St","city":"Springfield","telephone":null}"#,
        )
        .unwrap();

        assert_eq!(request.last_name, "");
        let errors = request.validate().unwrap_err();
        assert_eq!(codes(&errors, "last_name"), vec!["required"]);
        assert!(codes(&errors, "telephone").contains(&"required".to_string()));
    }

    #[test]
    fn test_apply_to_keeps_id() {
        let mut owner = Owner::new();
        owner.id = Some(11);

        john_doe().apply_to(&mut owner);

        assert_eq!(owner.id, Some(11));
        assert_eq!(owner.first_name(), "John");
        assert_eq!(owner.telephone, "0123456789");
    }
}
