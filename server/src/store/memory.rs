//! In-process pet store seeded with the sample catalog.

use pets::{NewPetRecord, PetPage, PetQuery, PetRecord};
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{PetStore, StoreError};

pub struct MemoryStore {
    pets: RwLock<Vec<PetRecord>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(pets: Vec<PetRecord>) -> Self {
        Self { pets: RwLock::new(pets) }
    }

    #[must_use]
    pub fn seeded() -> Self {
        Self::new(pets::sample::sample_pets())
    }
}

#[async_trait::async_trait]
impl PetStore for MemoryStore {
    async fn list(&self, query: &PetQuery) -> Result<PetPage, StoreError> {
        let pets = self.pets.read().await;
        let mut matching: Vec<&PetRecord> = pets.iter().filter(|pet| query.matches(pet)).collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let count = u64::try_from(matching.len()).unwrap_or(u64::MAX);
        let offset = usize::try_from(query.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.limit).unwrap_or(usize::MAX);
        let pets = matching.into_iter().skip(offset).take(limit).cloned().collect();

        Ok(PetPage { pets, count })
    }

    async fn create(&self, pet: NewPetRecord) -> Result<PetRecord, StoreError> {
        let record = pet.into_record(Uuid::new_v4().to_string(), OffsetDateTime::now_utc());
        self.pets.write().await.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
