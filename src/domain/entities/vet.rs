//! Vet entity, the aggregate root for specialty assignments.

use serde::Serialize;

use super::{Entity, Person, Specialty, serialize_sorted_by_name, sorted_by_name};

/// A veterinarian and the specialties they practise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vet {
    pub id: Option<i32>,
    #[serde(flatten)]
    pub person: Person,
    #[serde(serialize_with = "serialize_sorted_by_name")]
    specialties: Vec<Specialty>,
}

impl Vet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Specialties ordered by name, ignoring case.
    pub fn specialties(&self) -> Vec<&Specialty> {
        sorted_by_name(&self.specialties)
    }

    pub fn nr_of_specialties(&self) -> usize {
        self.specialties.len()
    }

    /// Assigns a specialty; assigning an equal specialty again is a no-op.
    pub fn add_specialty(&mut self, specialty: Specialty) {
        let duplicate = self.specialties.iter().any(|existing| {
            (existing.id.is_some() && existing.id == specialty.id) || *existing == specialty
        });
        if !duplicate {
            self.specialties.push(specialty);
        }
    }
}

impl Entity for Vet {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialties_sorted_and_counted() {
        let mut vet = Vet::new();
        vet.add_specialty(Specialty::new(Some(2), "surgery"));
        vet.add_specialty(Specialty::new(Some(3), "Dentistry"));
        vet.add_specialty(Specialty::new(Some(1), "radiology"));

        let names: Vec<&str> = vet.specialties().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Dentistry", "radiology", "surgery"]);
        assert_eq!(vet.nr_of_specialties(), 3);
    }

    #[test]
    fn test_add_specialty_twice_keeps_one() {
        let mut vet = Vet::new();
        vet.add_specialty(Specialty::new(Some(1), "radiology"));
        vet.add_specialty(Specialty::new(Some(1), "radiology"));

        assert_eq!(vet.nr_of_specialties(), 1);
    }

    #[test]
    fn test_vet_without_specialties() {
        let mut vet = Vet::new();
        vet.id = Some(1);
        vet.person = Person::new("James", "Carter");

        let json = serde_json::to_value(&vet).unwrap();
        assert_eq!(json["firstName"], "James");
        assert_eq!(json["specialties"], serde_json::json!([]));
        assert_eq!(vet.nr_of_specialties(), 0);
    }
}
