//! PostgREST client for the hosted pet table.
//!
//! Thin HTTP wrapper around `GET`/`POST /rest/v1/<table>`. Response decoding
//! lives in pure functions for testability.

use std::time::Duration;

use pets::{NewPetRecord, PetPage, PetQuery, PetRecord, parse_content_range};
use reqwest::header::CONTENT_RANGE;

use super::{PetStore, StoreError};
use crate::config::BackendConfig;

const COUNT_EXACT: &str = "count=exact";
const RETURN_REPRESENTATION: &str = "return=representation";

// =============================================================================
// CLIENT
// =============================================================================

pub struct RestStore {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl RestStore {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| StoreError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: config.table_endpoint(), api_key: config.api_key.clone() })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.header("apikey", &self.api_key).bearer_auth(&self.api_key)
    }
}

#[async_trait::async_trait]
impl PetStore for RestStore {
    async fn list(&self, query: &PetQuery) -> Result<PetPage, StoreError> {
        let response = self
            .authorized(self.http.get(&self.endpoint))
            .query(&query.postgrest_params())
            .header("Prefer", COUNT_EXACT)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let status = response.status();
        let content_range = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(StoreError::Response { status: status.as_u16(), body: text });
        }

        parse_list_response(&text, content_range.as_deref())
    }

    async fn create(&self, pet: NewPetRecord) -> Result<PetRecord, StoreError> {
        let response = self
            .authorized(self.http.post(&self.endpoint))
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&pet)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(StoreError::Response { status: status.as_u16(), body: text });
        }

        parse_create_response(&text)
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_list_response(body: &str, content_range: Option<&str>) -> Result<PetPage, StoreError> {
    let pets: Vec<PetRecord> = serde_json::from_str(body).map_err(|e| StoreError::Parse(e.to_string()))?;
    let count = content_range
        .and_then(parse_content_range)
        .ok_or_else(|| StoreError::Parse(format!("no exact count in Content-Range: {content_range:?}")))?;
    Ok(PetPage { pets, count })
}

/// Inserts with `return=representation` answer with a one-element array.
fn parse_create_response(body: &str) -> Result<PetRecord, StoreError> {
    let rows: Vec<PetRecord> = serde_json::from_str(body).map_err(|e| StoreError::Parse(e.to_string()))?;
    rows.into_iter()
        .next()
        .ok_or_else(|| StoreError::Parse("create returned no rows".to_owned()))
}

#[cfg(test)]
#[path = "rest_test.rs"]
mod tests;
