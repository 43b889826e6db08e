use super::*;
use crate::state::test_helpers::seeded_state;
use crate::store::PetStore;
use pets::{PetQuery, PetStatus, PetType};
use std::sync::Arc;

struct FailingStore;

#[async_trait::async_trait]
impl PetStore for FailingStore {
    async fn list(&self, _query: &PetQuery) -> Result<PetPage, StoreError> {
        Err(StoreError::Request("connection refused".into()))
    }

    async fn create(&self, _pet: NewPetRecord) -> Result<PetRecord, StoreError> {
        Err(StoreError::Response { status: 401, body: "{}".into() })
    }
}

fn new_pet(name: &str) -> NewPetRecord {
    NewPetRecord {
        name: name.to_owned(),
        pet_type: PetType::Other,
        age: " 3 months ".to_owned(),
        location: "Seattle, WA".to_owned(),
        description: "Small rabbit".to_owned(),
        image_url: String::new(),
        status: PetStatus::Found,
        fee: 0.0,
        contact_info: "bun@example.com".to_owned(),
    }
}

#[test]
fn store_error_to_status_maps_upstream_failures_to_bad_gateway() {
    assert_eq!(store_error_to_status(&StoreError::Request("x".into())), StatusCode::BAD_GATEWAY);
    assert_eq!(
        store_error_to_status(&StoreError::Response { status: 500, body: String::new() }),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(store_error_to_status(&StoreError::Parse("x".into())), StatusCode::BAD_GATEWAY);
    assert_eq!(
        store_error_to_status(&StoreError::HttpClientBuild("x".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn normalize_trims_fields() {
    let pet = normalize_new_pet(new_pet("  Clover ")).expect("valid pet");
    assert_eq!(pet.name, "Clover");
    assert_eq!(pet.age, "3 months");
}

#[test]
fn normalize_rejects_blank_name_and_bad_fee() {
    assert!(normalize_new_pet(new_pet("   ")).is_none());
    let mut negative = new_pet("Clover");
    negative.fee = -1.0;
    assert!(normalize_new_pet(negative).is_none());
    let mut nan = new_pet("Clover");
    nan.fee = f64::NAN;
    assert!(normalize_new_pet(nan).is_none());
}

#[tokio::test]
async fn list_pets_returns_filtered_page() {
    let params = ListParams { location: Some("los angeles".into()), ..ListParams::default() };
    let Json(page) = list_pets(State(seeded_state()), Query(params)).await.unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.pets[0].name, "Max");
}

#[tokio::test]
async fn list_pets_with_fee_cap_excludes_pricier_pets() {
    let params = ListParams { max_fee: Some(100), ..ListParams::default() };
    let Json(page) = list_pets(State(seeded_state()), Query(params)).await.unwrap();
    let names: Vec<_> = page.pets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Luna"]);
}

#[tokio::test]
async fn list_pets_maps_store_failure() {
    let state = AppState::new(Arc::new(FailingStore));
    let status = list_pets(State(state), Query(ListParams::default())).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn create_pet_returns_created_record() {
    let state = seeded_state();
    let (status, Json(created)) = create_pet(State(state.clone()), Json(new_pet("Clover"))).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.name, "Clover");

    let Json(page) = list_pets(State(state), Query(ListParams::default())).await.unwrap();
    assert_eq!(page.count, 3);
    assert_eq!(page.pets[0].id, created.id);
}

#[tokio::test]
async fn create_pet_rejects_blank_name() {
    let status = create_pet(State(seeded_state()), Json(new_pet(""))).await.unwrap_err();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_pet_maps_store_failure() {
    let state = AppState::new(Arc::new(FailingStore));
    let status = create_pet(State(state), Json(new_pet("Clover"))).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}
