//! REST API helpers for the host's `/api/pets` endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these calls are only
//! made from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with display-ready messages instead of panics
//! so a failed round trip degrades the page without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use pets::{ListParams, NewPetRecord, PetPage, PetRecord};

#[cfg(any(test, feature = "hydrate"))]
const PETS_ENDPOINT: &str = "/api/pets";

#[cfg(any(test, feature = "hydrate"))]
fn list_failed_message(status: u16) -> String {
    format!("pet list request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn create_failed_message(status: u16) -> String {
    match status {
        422 => "The listing was rejected. Check the name and fee.".to_owned(),
        _ => format!("posting the pet failed: {status}"),
    }
}

/// Fetch one listing page via `GET /api/pets`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body cannot be decoded.
pub async fn fetch_pets(params: &ListParams) -> Result<PetPage, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PETS_ENDPOINT)
            .query(params.query_pairs())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(list_failed_message(resp.status()));
        }
        resp.json::<PetPage>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = params;
        Err("not available on server".to_owned())
    }
}

/// Create a listing via `POST /api/pets`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects the
/// record.
pub async fn create_pet(pet: &NewPetRecord) -> Result<PetRecord, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(PETS_ENDPOINT)
            .json(pet)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(create_failed_message(resp.status()));
        }
        resp.json::<PetRecord>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pet;
        Err("not available on server".to_owned())
    }
}
