//! DTOs for pet endpoints.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_with::{DefaultOnNull, NoneAsEmptyString, serde_as};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

/// Pet type reference as sent by clients, `{"id": 2}` or a full pet type.
/// Only the id is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PetTypeRef {
    pub id: Option<i32>,
}

/// Body of `POST /owners/{ownerId}/pets` and `PUT /owners/{ownerId}/pets/{petId}`.
///
/// The type may be given as a nested `type` object or as a flat `typeId`;
/// the nested form wins when both are present. An empty `birthDate` string
/// counts as missing, and so does a `null` name.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PetRequest {
    #[serde_as(as = "DefaultOnNull")]
    #[validate(length(max = 30))]
    pub name: String,

    #[serde_as(as = "NoneAsEmptyString")]
    pub birth_date: Option<NaiveDate>,

    #[serde(rename = "type")]
    pub pet_type: Option<PetTypeRef>,

    pub type_id: Option<i32>,
}

impl PetRequest {
    /// Id of the requested pet type, if any was sent.
    pub fn type_id(&self) -> Option<i32> {
        self.pet_type
            .as_ref()
            .and_then(|t| t.id)
            .or(self.type_id)
    }

    /// Field checks for an edit of an existing pet.
    ///
    /// Creation goes through [`crate::domain::pet_validator::PetValidator`]
    /// instead, which also checks for duplicate names.
    pub fn validate_update(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if self.name.trim().is_empty() {
            errors.add("name", required());
        }
        if self.birth_date.is_none() {
            errors.add("birthDate", required());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn required() -> ValidationError {
    let mut error = ValidationError::new("required");
    error.message = Some(Cow::Borrowed("required"));
    error
}
