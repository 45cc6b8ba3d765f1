//! Pet entity.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use super::{Entity, Named, PetType, Visit};

/// A pet registered with the clinic.
///
/// The owner back-reference is written by [`super::Owner::add_pet`] (and by the
/// persistence layer when hydrating rows), never by the pet itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: Option<i32>,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: Option<PetType>,
    pub(crate) owner_id: Option<i32>,
    #[serde(serialize_with = "serialize_visits")]
    visits: Vec<Visit>,
}

impl Pet {
    /// Creates a new, unsaved pet with no owner.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn with_type(mut self, pet_type: PetType) -> Self {
        self.pet_type = Some(pet_type);
        self
    }

    /// Id of the owning owner, if the pet has been attached to one.
    pub fn owner_id(&self) -> Option<i32> {
        self.owner_id
    }

    /// Visits ordered by date, most recent first.
    pub fn visits(&self) -> Vec<&Visit> {
        sorted_visits(&self.visits)
    }

    /// Attaches a visit and points its `pet_id` at this pet.
    ///
    /// A visit with the same persisted id replaces the stored one; adding an
    /// identical unsaved visit twice keeps a single copy.
    pub fn add_visit(&mut self, mut visit: Visit) -> &mut Visit {
        visit.pet_id = self.id;

        let position = self.visits.iter().position(|existing| {
            (existing.id.is_some() && existing.id == visit.id) || *existing == visit
        });

        match position {
            Some(index) => {
                self.visits[index] = visit;
                &mut self.visits[index]
            }
            None => {
                self.visits.push(visit);
                let last = self.visits.len() - 1;
                &mut self.visits[last]
            }
        }
    }
}

impl Entity for Pet {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl Named for Pet {
    fn name(&self) -> &str {
        &self.name
    }
}

fn sorted_visits(visits: &[Visit]) -> Vec<&Visit> {
    let mut sorted: Vec<&Visit> = visits.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

fn serialize_visits<S: Serializer>(visits: &[Visit], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(sorted_visits(visits))
}
