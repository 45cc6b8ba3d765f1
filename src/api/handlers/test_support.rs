//! Mock-backed application state for handler tests.

use std::collections::HashMap;
use std::sync::Arc;

use axum_test::TestServer;
use chrono::NaiveDate;
use parking_lot::Mutex;

use crate::api::routes::api_routes;
use crate::application::services::ClinicService;
use crate::domain::entities::{Owner, Person, Pet, PetType};
use crate::domain::repositories::{
    MockOwnerRepository, MockPetRepository, MockVetRepository, MockVisitRepository,
};
use crate::infrastructure::cache::NullCache;
use crate::state::AppState;
use crate::utils::call_monitor::CallMonitor;

#[derive(Default)]
pub(crate) struct TestRepos {
    pub owners: MockOwnerRepository,
    pub pets: MockPetRepository,
    pub vets: MockVetRepository,
    pub visits: MockVisitRepository,
}

impl TestRepos {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_state(self) -> AppState {
        let service = ClinicService::new(
            Arc::new(self.owners),
            Arc::new(self.pets),
            Arc::new(self.vets),
            Arc::new(self.visits),
            Arc::new(NullCache::new("vets")),
            Arc::new(CallMonitor::new(true)),
        );
        AppState::new(Arc::new(service))
    }

    pub fn into_server(self) -> TestServer {
        TestServer::new(api_routes().with_state(self.into_state())).unwrap()
    }

    /// Backs the owner repository with an in-memory map, assigning ids from 1.
    pub fn with_owner_store(mut self) -> Self {
        let store: Arc<Mutex<HashMap<i32, Owner>>> = Arc::default();

        let saved = store.clone();
        self.owners.expect_save().returning(move |mut owner| {
            let mut owners = saved.lock();
            let id = owner.id.unwrap_or_else(|| owners.keys().max().copied().unwrap_or(0) + 1);
            owner.id = Some(id);
            owners.insert(id, owner.clone());
            Ok(owner)
        });

        let found = store;
        self.owners
            .expect_find_by_id()
            .returning(move |id| Ok(found.lock().get(&id).cloned()));

        self
    }

    pub fn with_pet_types(mut self) -> Self {
        self.pets
            .expect_find_pet_types()
            .returning(|| Ok(vec![PetType::new(Some(1), "cat"), PetType::new(Some(2), "dog")]));
        self
    }
}

pub(crate) fn george_franklin() -> Owner {
    let mut owner = Owner::new();
    owner.id = Some(1);
    owner.person = Person::new("George", "Franklin");
    owner.address = "110 W. Liberty St.".to_string();
    owner.city = "Madison".to_string();
    owner.telephone = "6085551023".to_string();
    owner
}

/// George Franklin's cat Leo, persisted as pet 1.
pub(crate) fn leo() -> Pet {
    let mut owner = george_franklin();
    let mut pet = Pet::new()
        .with_name("Leo")
        .with_birth_date(NaiveDate::from_ymd_opt(2010, 9, 7).unwrap())
        .with_type(PetType::new(Some(1), "cat"));
    pet.id = Some(1);
    owner.add_pet(pet).clone()
}
