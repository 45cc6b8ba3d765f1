//! Pet type lookup entity (cat, dog, ...).

use serde::{Deserialize, Serialize};

use super::{Entity, Named};

/// Kind of animal, shared by many pets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetType {
    pub id: Option<i32>,
    pub name: String,
}

impl PetType {
    pub fn new(id: Option<i32>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Entity for PetType {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl Named for PetType {
    fn name(&self) -> &str {
        &self.name
    }
}
