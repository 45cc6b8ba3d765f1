//! Visit entity: one appointment of a pet at the clinic.

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use super::Entity;

/// A visit of a pet, dated and described in free text.
///
/// `pet_id` can be assigned directly when a visit is recorded for a known pet;
/// [`super::Pet::add_visit`] assigns it as part of attaching the visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: Option<i32>,
    pub date: NaiveDate,
    pub description: String,
    pub pet_id: Option<i32>,
}

impl Visit {
    /// Creates a new, unsaved visit dated today.
    pub fn new() -> Self {
        Self {
            id: None,
            date: Utc::now().date_naive(),
            description: String::new(),
            pet_id: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Default for Visit {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Visit {
    fn id(&self) -> Option<i32> {
        self.id
    }
}
