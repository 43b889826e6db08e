//! Pet storage backends.
//!
//! DESIGN
//! ======
//! Route handlers depend on the [`PetStore`] trait only. Production wires the
//! REST store pointed at the hosted table; development without backend
//! credentials and the test suite use the seeded memory store. Both evaluate
//! the same `pets::PetQuery`, so listing semantics do not depend on which
//! store is active.

pub mod memory;
pub mod rest;

use pets::{NewPetRecord, PetPage, PetQuery, PetRecord};

/// Errors produced by pet store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request to the backend failed before a response arrived.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend returned a non-success HTTP status.
    #[error("backend response error: status {status}: {body}")]
    Response { status: u16, body: String },

    /// The backend response could not be decoded.
    #[error("backend response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Read and create access to the pet table. Enables mocking in tests.
#[async_trait::async_trait]
pub trait PetStore: Send + Sync {
    /// Run one listing query: matching rows for the requested window, newest
    /// first, plus the exact number of matching rows.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend is unreachable or replies with
    /// an error or an undecodable body.
    async fn list(&self, query: &PetQuery) -> Result<PetPage, StoreError>;

    /// Insert a record; the store assigns `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the insert is rejected or cannot be sent.
    async fn create(&self, pet: NewPetRecord) -> Result<PetRecord, StoreError>;
}
