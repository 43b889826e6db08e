//! Pet listing and submission routes.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use pets::{ListParams, NewPetRecord, PetPage, PetRecord};

use crate::state::AppState;
use crate::store::StoreError;

/// `GET /api/pets`: one page of listings matching the query-string filters.
pub async fn list_pets(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<PetPage>, StatusCode> {
    let query = params.to_query();
    let page = state.store.list(&query).await.map_err(|e| {
        tracing::warn!(error = %e, page = params.page, "pet list failed");
        store_error_to_status(&e)
    })?;
    tracing::debug!(page = params.page, returned = page.pets.len(), count = page.count, "pet list served");
    Ok(Json(page))
}

/// `POST /api/pets`: create a listing from the post-a-pet form.
pub async fn create_pet(
    State(state): State<AppState>,
    Json(body): Json<NewPetRecord>,
) -> Result<(StatusCode, Json<PetRecord>), StatusCode> {
    let pet = normalize_new_pet(body).ok_or(StatusCode::UNPROCESSABLE_ENTITY)?;
    let created = state.store.create(pet).await.map_err(|e| {
        tracing::warn!(error = %e, "pet create failed");
        store_error_to_status(&e)
    })?;
    tracing::info!(pet_id = %created.id, status = %created.status, "pet posted");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Trim free-text fields and reject records that cannot be displayed: a blank
/// name or a negative or non-finite fee.
fn normalize_new_pet(mut pet: NewPetRecord) -> Option<NewPetRecord> {
    for field in [
        &mut pet.name,
        &mut pet.age,
        &mut pet.location,
        &mut pet.description,
        &mut pet.image_url,
        &mut pet.contact_info,
    ] {
        *field = field.trim().to_owned();
    }
    if pet.name.is_empty() || !pet.fee.is_finite() || pet.fee < 0.0 {
        return None;
    }
    Some(pet)
}

pub(crate) fn store_error_to_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::Request(_) | StoreError::Response { .. } | StoreError::Parse(_) => StatusCode::BAD_GATEWAY,
        StoreError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "pets_test.rs"]
mod tests;
