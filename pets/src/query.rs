//! Listing query construction.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser sends [`ListParams`] to the host's `/api/pets` endpoint. The
//! host rebuilds the same [`FilterState`] from them and derives a
//! [`PetQuery`], which either renders to PostgREST parameters for the hosted
//! table or runs in memory against the local store. Both paths apply the
//! identical restriction rules defined here.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use serde::{Deserialize, Serialize};

use crate::filter::{FilterState, location_matches};
use crate::record::{PetRecord, PetType};

/// Rows per listing page.
pub const PAGE_SIZE: u32 = 20;

/// Column the listing sorts on, newest first.
pub const ORDER_COLUMN: &str = "created_at";

/// Offset of the first row on a 1-indexed page. Page `0` is treated as page 1.
#[must_use]
pub fn page_offset(page: u32) -> u32 {
    page.max(1).saturating_sub(1).saturating_mul(PAGE_SIZE)
}

// =============================================================================
// PET QUERY
// =============================================================================

/// A single listing read: restrictions plus a page window, always ordered by
/// `created_at` descending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PetQuery {
    pub pet_type: Option<PetType>,
    /// Case-insensitive substring to match against `location`.
    pub location: Option<String>,
    /// Inclusive fee ceiling.
    pub max_fee: Option<u32>,
    pub offset: u32,
    pub limit: u32,
}

impl PetQuery {
    /// Build the read for `page` (1-indexed) under `filters`.
    ///
    /// - empty type: no type restriction
    /// - empty location: no location restriction
    /// - fee slider at its maximum: no fee restriction
    #[must_use]
    pub fn build(filters: &FilterState, page: u32) -> Self {
        Self {
            pet_type: filters.pet_type,
            location: filters.location_term().map(str::to_owned),
            max_fee: filters.fee_cap(),
            offset: page_offset(page),
            limit: PAGE_SIZE,
        }
    }

    /// Whether `pet` satisfies every restriction (the window is ignored).
    #[must_use]
    pub fn matches(&self, pet: &PetRecord) -> bool {
        if self.pet_type.is_some_and(|t| t != pet.pet_type) {
            return false;
        }
        if let Some(term) = &self.location {
            if !location_matches(&pet.location, term) {
                return false;
            }
        }
        self.max_fee.is_none_or(|cap| pet.fee <= f64::from(cap))
    }

    /// Render as PostgREST query parameters, in a stable order.
    #[must_use]
    pub fn postgrest_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("select", "*".to_owned())];
        if let Some(pet_type) = self.pet_type {
            params.push(("type", format!("eq.{pet_type}")));
        }
        if let Some(term) = &self.location {
            params.push(("location", format!("ilike.%{term}%")));
        }
        if let Some(cap) = self.max_fee {
            params.push(("fee", format!("lte.{cap}")));
        }
        params.push(("order", format!("{ORDER_COLUMN}.desc")));
        params.push(("offset", self.offset.to_string()));
        params.push(("limit", self.limit.to_string()));
        params
    }
}

// =============================================================================
// LIST PARAMS
// =============================================================================

/// Query string of `GET /api/pets`. Empty type and location are omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub pet_type: Option<PetType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_max: Option<u32>,
}

fn first_page() -> u32 {
    1
}

impl Default for ListParams {
    fn default() -> Self {
        Self { page: first_page(), pet_type: None, location: None, max_fee: None, age_max: None }
    }
}

impl ListParams {
    #[must_use]
    pub fn from_filters(filters: &FilterState, page: u32) -> Self {
        Self {
            page: page.max(1),
            pet_type: filters.pet_type,
            location: filters.location_term().map(str::to_owned),
            max_fee: Some(filters.max_fee),
            age_max: Some(filters.age_ceiling),
        }
    }

    /// Rebuild the filter state, clamping out-of-range numbers the same way
    /// the sliders do. Missing fields take their defaults.
    #[must_use]
    pub fn filters(&self) -> FilterState {
        let mut filters = FilterState::default();
        filters.set_pet_type(self.pet_type);
        if let Some(location) = &self.location {
            filters.set_location(location.clone());
        }
        if let Some(max_fee) = self.max_fee {
            filters.set_max_fee(max_fee);
        }
        if let Some(age_max) = self.age_max {
            filters.set_age_ceiling(age_max);
        }
        filters
    }

    #[must_use]
    pub fn to_query(&self) -> PetQuery {
        PetQuery::build(&self.filters(), self.page)
    }

    /// Key/value pairs for the request URL.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string())];
        if let Some(pet_type) = self.pet_type {
            pairs.push(("type", pet_type.as_str().to_owned()));
        }
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(max_fee) = self.max_fee {
            pairs.push(("max_fee", max_fee.to_string()));
        }
        if let Some(age_max) = self.age_max {
            pairs.push(("age_max", age_max.to_string()));
        }
        pairs
    }
}
