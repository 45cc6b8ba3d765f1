//! Clinic service facade over all repositories.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Owner, Pet, PetType, Vet, Visit};
use crate::domain::repositories::{
    OwnerRepository, PetRepository, VetRepository, VisitRepository,
};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::call_monitor::CallMonitor;

const ALL_VETS_KEY: &str = "all";

/// Single entry point for the REST handlers and the admin tool.
///
/// Each operation delegates to one repository call, routed through the
/// [`CallMonitor`]. Repository errors propagate unchanged. The exceptions:
///
/// - [`Self::find_owner_by_id`] turns a missing owner into [`AppError::NotFound`]
/// - [`Self::find_vets`] is memoized in the vets cache
pub struct ClinicService {
    owners: Arc<dyn OwnerRepository>,
    pets: Arc<dyn PetRepository>,
    vets: Arc<dyn VetRepository>,
    visits: Arc<dyn VisitRepository>,
    vets_cache: Arc<dyn CacheService<Vec<Vet>>>,
    monitor: Arc<CallMonitor>,
}

impl ClinicService {
    pub fn new(
        owners: Arc<dyn OwnerRepository>,
        pets: Arc<dyn PetRepository>,
        vets: Arc<dyn VetRepository>,
        visits: Arc<dyn VisitRepository>,
        vets_cache: Arc<dyn CacheService<Vec<Vet>>>,
        monitor: Arc<CallMonitor>,
    ) -> Self {
        Self {
            owners,
            pets,
            vets,
            visits,
            vets_cache,
            monitor,
        }
    }

    pub fn monitor(&self) -> &CallMonitor {
        &self.monitor
    }

    pub fn vets_cache(&self) -> &dyn CacheService<Vec<Vet>> {
        self.vets_cache.as_ref()
    }

    /// Lists all pet types ordered by name.
    pub async fn find_pet_types(&self) -> Result<Vec<PetType>, AppError> {
        self.monitor
            .invoke("find_pet_types", self.pets.find_pet_types())
            .await
    }

    /// Reads the pet type table without going through the call monitor.
    ///
    /// Used by the health check, which must not show up in the call counters.
    pub async fn check_database(&self) -> Result<usize, AppError> {
        Ok(self.pets.find_pet_types().await?.len())
    }

    /// Loads an owner with pets and visits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no owner has this id.
    pub async fn find_owner_by_id(&self, id: i32) -> Result<Owner, AppError> {
        self.monitor
            .invoke("find_owner_by_id", self.owners.find_by_id(id))
            .await?
            .ok_or_else(|| AppError::not_found("Owner not found", json!({ "owner_id": id })))
    }

    /// Lists every owner; an empty clinic yields an empty list.
    pub async fn find_all(&self) -> Result<Vec<Owner>, AppError> {
        self.monitor
            .invoke("find_all_owners", self.owners.find_all())
            .await
    }

    /// Lists owners whose last name starts with `last_name`, ignoring case.
    pub async fn find_owners_by_last_name(&self, last_name: &str) -> Result<Vec<Owner>, AppError> {
        self.monitor
            .invoke(
                "find_owners_by_last_name",
                self.owners.find_by_last_name(last_name),
            )
            .await
    }

    /// Inserts the owner if new, updates it otherwise.
    pub async fn save_owner(&self, owner: Owner) -> Result<Owner, AppError> {
        self.monitor
            .invoke("save_owner", self.owners.save(owner))
            .await
    }

    /// Loads a pet; `Ok(None)` when the id is unknown.
    pub async fn find_pet_by_id(&self, id: i32) -> Result<Option<Pet>, AppError> {
        self.monitor
            .invoke("find_pet_by_id", self.pets.find_by_id(id))
            .await
    }

    pub async fn save_pet(&self, pet: Pet) -> Result<Pet, AppError> {
        self.monitor.invoke("save_pet", self.pets.save(pet)).await
    }

    pub async fn save_visit(&self, visit: Visit) -> Result<Visit, AppError> {
        self.monitor
            .invoke("save_visit", self.visits.save(visit))
            .await
    }

    pub async fn find_visits_by_pet_id(&self, pet_id: i32) -> Result<Vec<Visit>, AppError> {
        self.monitor
            .invoke("find_visits_by_pet_id", self.visits.find_by_pet_id(pet_id))
            .await
    }

    /// Lists all vets, served from the vets cache while the entry is fresh.
    pub async fn find_vets(&self) -> Result<Vec<Vet>, AppError> {
        if let Some(vets) = self.vets_cache.get(ALL_VETS_KEY) {
            return Ok(vets);
        }

        let vets = self
            .monitor
            .invoke("find_vets", self.vets.find_all())
            .await?;
        self.vets_cache.put(ALL_VETS_KEY, vets.clone());
        Ok(vets)
    }

    pub async fn delete_owner(&self, id: i32) -> Result<bool, AppError> {
        self.monitor
            .invoke("delete_owner", self.owners.delete(id))
            .await
    }

    pub async fn delete_pet(&self, id: i32) -> Result<bool, AppError> {
        self.monitor.invoke("delete_pet", self.pets.delete(id)).await
    }

    pub async fn delete_visit(&self, id: i32) -> Result<bool, AppError> {
        self.monitor
            .invoke("delete_visit", self.visits.delete(id))
            .await
    }
}
