//! Owner entity, the aggregate root for pets and their visits.

use serde::Serialize;

use super::{Entity, Person, Pet, serialize_sorted_by_name, sorted_by_name};

/// A pet owner with contact details and the pets registered to them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: Option<i32>,
    #[serde(flatten)]
    pub person: Person,
    pub address: String,
    pub city: String,
    pub telephone: String,
    #[serde(serialize_with = "serialize_sorted_by_name")]
    pets: Vec<Pet>,
}

impl Owner {
    /// Creates a new, unsaved owner without pets.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(&self) -> &str {
        &self.person.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.person.last_name
    }

    /// Pets ordered by name, ignoring case.
    pub fn pets(&self) -> Vec<&Pet> {
        sorted_by_name(&self.pets)
    }

    /// Attaches a pet to this owner and points its back-reference here.
    ///
    /// A pet with the same persisted id replaces the stored one; adding an
    /// identical unsaved pet twice keeps a single copy.
    pub fn add_pet(&mut self, mut pet: Pet) -> &mut Pet {
        pet.owner_id = self.id;

        let position = self.pets.iter().position(|existing| {
            (existing.id.is_some() && existing.id == pet.id) || *existing == pet
        });

        match position {
            Some(index) => {
                self.pets[index] = pet;
                &mut self.pets[index]
            }
            None => {
                self.pets.push(pet);
                let last = self.pets.len() - 1;
                &mut self.pets[last]
            }
        }
    }

    /// Finds a pet by name, ignoring case.
    ///
    /// Scans pets in insertion order and returns the first match. With
    /// `ignore_new`, pets that have not been persisted are skipped even when
    /// their name matches. Which of two persisted pets sharing a name is
    /// returned is not specified.
    pub fn get_pet(&self, name: &str, ignore_new: bool) -> Option<&Pet> {
        let wanted = name.to_lowercase();
        self.pets
            .iter()
            .filter(|pet| !(ignore_new && pet.is_new()))
            .find(|pet| pet.name.to_lowercase() == wanted)
    }
}

impl Entity for Owner {
    fn id(&self) -> Option<i32> {
        self.id
    }
}
