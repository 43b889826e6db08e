//! Post-a-pet form state and validation.

#[cfg(test)]
#[path = "pet_form_test.rs"]
mod pet_form_test;

use pets::{NewPetRecord, PetStatus, PetType};

pub const NAME_REQUIRED: &str = "Enter the pet's name.";
pub const FEE_INVALID: &str = "Enter an adoption fee of zero or more.";

/// Raw form inputs, kept as typed text until submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PetForm {
    pub name: String,
    pub pet_type: PetType,
    pub age: String,
    pub location: String,
    pub description: String,
    pub status: PetStatus,
    pub contact_info: String,
    /// Empty means free.
    pub fee: String,
}

impl Default for PetForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            pet_type: PetType::Dog,
            age: String::new(),
            location: String::new(),
            description: String::new(),
            status: PetStatus::Lost,
            contact_info: String::new(),
            fee: String::new(),
        }
    }
}

impl PetForm {
    /// Trimmed record ready for the create endpoint. The photo drop zone does
    /// not upload anything, so `image_url` is always empty.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the name is blank or the fee is not
    /// a non-negative number.
    pub fn to_new_pet(&self) -> Result<NewPetRecord, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(NAME_REQUIRED);
        }
        let fee = parse_fee(&self.fee)?;
        Ok(NewPetRecord {
            name: name.to_owned(),
            pet_type: self.pet_type,
            age: self.age.trim().to_owned(),
            location: self.location.trim().to_owned(),
            description: self.description.trim().to_owned(),
            image_url: String::new(),
            status: self.status,
            fee,
            contact_info: self.contact_info.trim().to_owned(),
        })
    }
}

fn parse_fee(raw: &str) -> Result<f64, &'static str> {
    let raw = raw.trim().trim_start_matches('$');
    if raw.is_empty() {
        return Ok(0.0);
    }
    match raw.parse::<f64>() {
        Ok(fee) if fee.is_finite() && fee >= 0.0 => Ok(fee),
        _ => Err(FEE_INVALID),
    }
}

/// Lifecycle of one submit attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

impl SubmitStatus {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
