//! Field-level validation for pets being registered or edited.
//!
//! Not wired into every write path: handlers call [`PetValidator::validate`]
//! explicitly where the owner context needed for the duplicate check is loaded.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::domain::entities::{Entity, Owner, Pet};

/// Validates a candidate pet, reporting every violated rule.
///
/// Rules, each evaluated independently:
///
/// - blank `name` → `required` on `name`
/// - new pet whose owner already has a *persisted* pet of the same name
///   (case-insensitive) → `duplicate` on `name`
/// - new pet without a type → `required` on `type`
/// - missing birth date → `required` on `birthDate`
///
/// Existing pets are never checked for duplicates or a missing type.
#[derive(Debug, Default, Clone, Copy)]
pub struct PetValidator;

impl PetValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, pet: &Pet, owner: Option<&Owner>, errors: &mut ValidationErrors) {
        let name = pet.name.trim();
        if name.is_empty() {
            errors.add("name", rejection("required", "required"));
        }

        if pet.is_new() {
            let duplicate = !name.is_empty()
                && owner.is_some_and(|owner| owner.get_pet(&pet.name, true).is_some());
            if duplicate {
                errors.add("name", rejection("duplicate", "already exists"));
            }

            if pet.pet_type.is_none() {
                errors.add("type", rejection("required", "required"));
            }
        }

        if pet.birth_date.is_none() {
            errors.add("birthDate", rejection("required", "required"));
        }
    }

    /// Runs [`Self::validate`] and returns the collected errors, if any.
    pub fn check(&self, pet: &Pet, owner: Option<&Owner>) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.validate(pet, owner, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn rejection(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PetType;
    use chrono::NaiveDate;

    fn codes(errors: &ValidationErrors, field: &str) -> Vec<String> {
        errors
            .field_errors()
            .get(field)
            .map(|errs| errs.iter().map(|e| e.code.to_string()).collect())
            .unwrap_or_default()
    }

    fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 5, 1).unwrap()
    }

    fn owner_with_persisted_pet(name: &str) -> Owner {
        let mut owner = Owner::new();
        owner.id = Some(1);
        let mut existing = Pet::new().with_name(name);
        existing.id = Some(10);
        owner.add_pet(existing);
        owner
    }

    #[test]
    fn test_new_pet_with_nothing_set_reports_three_errors() {
        let pet = Pet::new();
        let mut errors = ValidationErrors::new();

        PetValidator::new().validate(&pet, None, &mut errors);

        assert_eq!(codes(&errors, "name"), vec!["required"]);
        assert_eq!(codes(&errors, "type"), vec!["required"]);
        assert_eq!(codes(&errors, "birthDate"), vec!["required"]);
        assert_eq!(errors.field_errors().len(), 3);
    }

    #[test]
    fn test_blank_name_is_required() {
        let pet = Pet::new()
            .with_name("   ")
            .with_birth_date(birth_date())
            .with_type(PetType::new(Some(1), "cat"));

        let errors = PetValidator::new().check(&pet, None).unwrap_err();
        assert_eq!(codes(&errors, "name"), vec!["required"]);
    }

    #[test]
    fn test_valid_new_pet_passes() {
        let owner = owner_with_persisted_pet("Leo");
        let pet = Pet::new()
            .with_name("Basil")
            .with_birth_date(birth_date())
            .with_type(PetType::new(Some(6), "hamster"));

        assert!(PetValidator::new().check(&pet, Some(&owner)).is_ok());
    }

    #[test]
    fn test_new_pet_duplicate_name_rejected() {
        let owner = owner_with_persisted_pet("Leo");
        let pet = Pet::new()
            .with_name("leo")
            .with_birth_date(birth_date())
            .with_type(PetType::new(Some(1), "cat"));

        let errors = PetValidator::new().check(&pet, Some(&owner)).unwrap_err();
        assert_eq!(codes(&errors, "name"), vec!["duplicate"]);
    }

    #[test]
    fn test_duplicate_check_ignores_unsaved_siblings() {
        let mut owner = Owner::new();
        owner.id = Some(1);
        owner.add_pet(Pet::new().with_name("Leo"));

        let pet = Pet::new()
            .with_name("Leo")
            .with_birth_date(birth_date())
            .with_type(PetType::new(Some(1), "cat"));

        assert!(PetValidator::new().check(&pet, Some(&owner)).is_ok());
    }

    #[test]
    fn test_existing_pet_skips_duplicate_and_type_checks() {
        let owner = owner_with_persisted_pet("Leo");
        let mut pet = Pet::new().with_name("Leo").with_birth_date(birth_date());
        pet.id = Some(11);

        assert!(PetValidator::new().check(&pet, Some(&owner)).is_ok());
    }

    #[test]
    fn test_existing_pet_still_requires_name_and_birth_date() {
        let mut pet = Pet::new();
        pet.id = Some(11);

        let errors = PetValidator::new().check(&pet, None).unwrap_err();
        assert_eq!(codes(&errors, "name"), vec!["required"]);
        assert_eq!(codes(&errors, "birthDate"), vec!["required"]);
        assert!(codes(&errors, "type").is_empty());
    }
}
