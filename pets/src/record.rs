//! Pet record schema.
//!
//! DESIGN
//! ======
//! Field names follow the hosted table's snake_case columns so records
//! deserialize straight from the backend response. `type` is a Rust keyword,
//! so the pet kind lives in `pet_type` and is renamed on the wire.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

/// Error returned when a select value or column string names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown pet type: {0}")]
    UnknownType(String),
    #[error("unknown pet status: {0}")]
    UnknownStatus(String),
}

// =============================================================================
// PET TYPE
// =============================================================================

/// Kind of animal a listing describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
    Fish,
    Other,
}

impl PetType {
    pub const ALL: [Self; 4] = [Self::Dog, Self::Cat, Self::Fish, Self::Other];

    /// Column value stored in the `type` field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Fish => "fish",
            Self::Other => "other",
        }
    }

    /// Singular label used by the submission form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Fish => "Fish",
            Self::Other => "Other",
        }
    }

    /// Plural label used by listing filters.
    #[must_use]
    pub fn plural_label(self) -> &'static str {
        match self {
            Self::Dog => "Dogs",
            Self::Cat => "Cats",
            Self::Fish => "Fish",
            Self::Other => "Other",
        }
    }

    /// Interpret a `<select>` value where the empty string means "all types".
    /// Unknown values are treated as no selection.
    #[must_use]
    pub fn from_select(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl FromStr for PetType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dog" => Ok(Self::Dog),
            "cat" => Ok(Self::Cat),
            "fish" => Ok(Self::Fish),
            "other" => Ok(Self::Other),
            other => Err(ParseError::UnknownType(other.to_owned())),
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// PET STATUS
// =============================================================================

/// Why a pet is listed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Lost,
    Found,
    Adoption,
}

impl PetStatus {
    pub const ALL: [Self; 3] = [Self::Lost, Self::Found, Self::Adoption];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lost => "lost",
            Self::Found => "found",
            Self::Adoption => "adoption",
        }
    }

    /// Capitalized status shown on badges and filter options.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Lost => "Lost",
            Self::Found => "Found",
            Self::Adoption => "Adoption",
        }
    }

    /// Longer wording used by the submission form's status select.
    #[must_use]
    pub fn form_label(self) -> &'static str {
        match self {
            Self::Lost => "Lost Pet",
            Self::Found => "Found Pet",
            Self::Adoption => "For Adoption",
        }
    }

    /// BEM modifier class selecting the badge color (red, green, blue).
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Lost => "status-badge status-badge--lost",
            Self::Found => "status-badge status-badge--found",
            Self::Adoption => "status-badge status-badge--adoption",
        }
    }

    #[must_use]
    pub fn from_select(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl FromStr for PetStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lost" => Ok(Self::Lost),
            "found" => Ok(Self::Found),
            "adoption" => Ok(Self::Adoption),
            other => Err(ParseError::UnknownStatus(other.to_owned())),
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// One lost, found, or adoptable animal listing. Mirrors the `pets` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PetRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    /// Free text such as "2 years".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub age: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Empty when the listing has no photo.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_url: String,
    pub status: PetStatus,
    pub fee: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contact_info: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Optional text columns come back as `null` for rows written outside the
/// post-a-pet form; they render as empty text.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl PetRecord {
    /// Card price text: `"Free"` for a zero fee, otherwise `"$<fee>"`.
    #[must_use]
    pub fn fee_label(&self) -> String {
        format_fee(self.fee)
    }
}

/// A record as submitted by the post-a-pet form. The store assigns `id` and
/// `created_at`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPetRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    pub age: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub status: PetStatus,
    #[serde(default)]
    pub fee: f64,
    pub contact_info: String,
}

impl NewPetRecord {
    /// Attach store-assigned identity to produce a full record.
    #[must_use]
    pub fn into_record(self, id: String, created_at: OffsetDateTime) -> PetRecord {
        PetRecord {
            id,
            name: self.name,
            pet_type: self.pet_type,
            age: self.age,
            location: self.location,
            description: self.description,
            image_url: self.image_url,
            status: self.status,
            fee: self.fee,
            contact_info: self.contact_info,
            created_at,
        }
    }
}

/// Format a fee for display. Fees are non-negative, so anything at or below
/// zero renders as `"Free"`.
#[must_use]
pub fn format_fee(fee: f64) -> String {
    if fee <= 0.0 { "Free".to_owned() } else { format!("${fee}") }
}
