//! Vet specialty lookup entity.

use serde::{Deserialize, Serialize};

use super::{Entity, Named};

/// Medical specialty (radiology, surgery, ...) shared by many vets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Specialty {
    pub id: Option<i32>,
    pub name: String,
}

impl Specialty {
    pub fn new(id: Option<i32>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Entity for Specialty {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl Named for Specialty {
    fn name(&self) -> &str {
        &self.name
    }
}
