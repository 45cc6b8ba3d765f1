//! DTOs for visit endpoints.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_with::{DefaultOnNull, NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::domain::entities::Visit;

/// Body of `POST /owners/{ownerId}/pets/{petId}/visits`.
///
/// A missing or empty date means today. A `null` description is empty.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitRequest {
    #[serde_as(as = "NoneAsEmptyString")]
    pub date: Option<NaiveDate>,

    #[serde_as(as = "DefaultOnNull")]
    #[validate(length(max = 255))]
    pub description: String,
}

impl VisitRequest {
    pub fn into_visit(self) -> Visit {
        let visit = Visit::new().with_description(self.description);
        match self.date {
            Some(date) => visit.with_date(date),
            None => visit,
        }
    }
}
