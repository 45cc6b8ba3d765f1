//! Core domain entities of the clinic.
//!
//! Entities are plain data holders with a nullable integer identity. An entity
//! whose id is `None` has not been persisted yet ("new").
//!
//! # Entity Types
//!
//! - [`Owner`] - Pet owner, aggregate root for [`Pet`] and [`Visit`]
//! - [`Pet`] - A pet belonging to one owner
//! - [`Visit`] - A visit of a pet to the clinic
//! - [`Vet`] - Veterinarian, aggregate root for [`Specialty`]
//! - [`PetType`], [`Specialty`] - Shared lookup entities
//!
//! # Associations
//!
//! Parents own their children in a private collection. Each child keeps a
//! non-owning key back to its parent, which is written by the parent's `add_*`
//! method in the same call that stores the child. Read accessors return fresh,
//! sorted `Vec<&T>` views so callers can never mutate the stored collection.

pub mod owner;
pub mod person;
pub mod pet;
pub mod pet_type;
pub mod specialty;
pub mod vet;
pub mod visit;

pub use owner::Owner;
pub use person::Person;
pub use pet::Pet;
pub use pet_type::PetType;
pub use specialty::Specialty;
pub use vet::Vet;
pub use visit::Visit;

/// Identity shared by all persisted entities.
pub trait Entity {
    fn id(&self) -> Option<i32>;

    /// True until the persistence layer has assigned an id.
    fn is_new(&self) -> bool {
        self.id().is_none()
    }
}

/// Entities identified to users by a single name.
pub trait Named {
    fn name(&self) -> &str;
}

/// Returns references to `items` ordered by name, ignoring case.
pub(crate) fn sorted_by_name<T: Named>(items: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_cached_key(|item| item.name().to_lowercase());
    sorted
}

/// Serializes a collection as its name-sorted view.
pub(crate) fn serialize_sorted_by_name<T, S>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
where
    T: Named + serde::Serialize,
    S: serde::Serializer,
{
    serializer.collect_seq(sorted_by_name(items))
}
