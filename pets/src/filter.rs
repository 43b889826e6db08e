//! Listing filter state and in-memory matching.
//!
//! DESIGN
//! ======
//! Setters report whether the value actually changed. The listing view uses
//! that signal to schedule a refetch explicitly instead of relying on an
//! implicit reactive dependency.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::record::{PetRecord, PetStatus, PetType};

/// Upper bound of the fee slider. At this value no fee cap is applied.
pub const FEE_SLIDER_MAX: u32 = 200;
/// Upper bound of the age-range slider, in years.
pub const AGE_SLIDER_MAX: u32 = 10;

/// Search criteria selected on the home listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    /// `None` is the "All Types" option.
    pub pet_type: Option<PetType>,
    pub location: String,
    /// Fee ceiling in whole dollars; `FEE_SLIDER_MAX` means unbounded.
    pub max_fee: u32,
    /// Upper end of the "0-N years" slider. Carried for the UI only; ages are
    /// free text so no restriction is derived from it.
    pub age_ceiling: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self { pet_type: None, location: String::new(), max_fee: FEE_SLIDER_MAX, age_ceiling: AGE_SLIDER_MAX }
    }
}

impl FilterState {
    /// Returns `true` when the value changed.
    pub fn set_pet_type(&mut self, pet_type: Option<PetType>) -> bool {
        replace_if_changed(&mut self.pet_type, pet_type)
    }

    /// Returns `true` when the value changed.
    pub fn set_location(&mut self, location: impl Into<String>) -> bool {
        replace_if_changed(&mut self.location, location.into())
    }

    /// Clamp to `0..=FEE_SLIDER_MAX`. Returns `true` when the value changed.
    pub fn set_max_fee(&mut self, max_fee: u32) -> bool {
        replace_if_changed(&mut self.max_fee, max_fee.min(FEE_SLIDER_MAX))
    }

    /// Clamp to `0..=AGE_SLIDER_MAX`. Returns `true` when the value changed.
    pub fn set_age_ceiling(&mut self, age_ceiling: u32) -> bool {
        replace_if_changed(&mut self.age_ceiling, age_ceiling.min(AGE_SLIDER_MAX))
    }

    /// Effective fee cap, or `None` when the slider sits on the sentinel.
    #[must_use]
    pub fn fee_cap(&self) -> Option<u32> {
        (self.max_fee < FEE_SLIDER_MAX).then_some(self.max_fee)
    }

    /// Location search term, or `None` when the input is empty.
    #[must_use]
    pub fn location_term(&self) -> Option<&str> {
        (!self.location.is_empty()).then_some(self.location.as_str())
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Case-insensitive substring match, the in-memory equivalent of
/// `location ilike '%term%'`.
#[must_use]
pub fn location_matches(location: &str, term: &str) -> bool {
    location.to_lowercase().contains(&term.to_lowercase())
}

// =============================================================================
// CATALOG FILTER
// =============================================================================

/// Client-side filter for the fixed sample catalog on `/pets`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub pet_type: Option<PetType>,
    pub status: Option<PetStatus>,
    pub location: String,
}

impl CatalogFilter {
    #[must_use]
    pub fn matches(&self, pet: &PetRecord) -> bool {
        if self.pet_type.is_some_and(|t| t != pet.pet_type) {
            return false;
        }
        if self.status.is_some_and(|s| s != pet.status) {
            return false;
        }
        self.location.is_empty() || location_matches(&pet.location, &self.location)
    }

    /// Records passing the filter, in their original order.
    #[must_use]
    pub fn apply(&self, pets: &[PetRecord]) -> Vec<PetRecord> {
        pets.iter().filter(|pet| self.matches(pet)).cloned().collect()
    }
}
