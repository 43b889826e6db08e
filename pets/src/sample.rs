//! Fixed sample listings shown on `/pets` and used to seed the memory store.

use time::macros::datetime;

use crate::record::{PetRecord, PetStatus, PetType};

#[must_use]
pub fn sample_pets() -> Vec<PetRecord> {
    vec![
        PetRecord {
            id: "1".to_owned(),
            name: "Luna".to_owned(),
            pet_type: PetType::Cat,
            age: "2 years".to_owned(),
            location: "New York, NY".to_owned(),
            description: "Friendly calico cat, very affectionate".to_owned(),
            image_url: "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80"
                .to_owned(),
            status: PetStatus::Lost,
            fee: 0.0,
            contact_info: "john@example.com".to_owned(),
            created_at: datetime!(2024-02-20 0:00 UTC),
        },
        PetRecord {
            id: "2".to_owned(),
            name: "Max".to_owned(),
            pet_type: PetType::Dog,
            age: "1 year".to_owned(),
            location: "Los Angeles, CA".to_owned(),
            description: "Energetic golden retriever puppy".to_owned(),
            image_url: "https://images.unsplash.com/photo-1552053831-71594a27632d?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80"
                .to_owned(),
            status: PetStatus::Adoption,
            fee: 150.0,
            contact_info: "sarah@example.com".to_owned(),
            created_at: datetime!(2024-02-19 0:00 UTC),
        },
    ]
}
