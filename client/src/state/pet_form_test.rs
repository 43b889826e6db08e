use super::*;

fn filled() -> PetForm {
    PetForm {
        name: "  Biscuit ".to_owned(),
        pet_type: PetType::Cat,
        age: "2 years ".to_owned(),
        location: " Austin, TX".to_owned(),
        description: "Orange tabby".to_owned(),
        status: PetStatus::Found,
        contact_info: " 555-0100 ".to_owned(),
        fee: String::new(),
    }
}

#[test]
fn default_form_matches_select_defaults() {
    let form = PetForm::default();
    assert_eq!(form.pet_type, PetType::Dog);
    assert_eq!(form.status, PetStatus::Lost);
}

#[test]
fn to_new_pet_trims_fields() {
    let pet = filled().to_new_pet().unwrap();
    assert_eq!(pet.name, "Biscuit");
    assert_eq!(pet.age, "2 years");
    assert_eq!(pet.location, "Austin, TX");
    assert_eq!(pet.contact_info, "555-0100");
    assert_eq!(pet.image_url, "");
    assert_eq!(pet.pet_type, PetType::Cat);
    assert_eq!(pet.status, PetStatus::Found);
}

#[test]
fn blank_fee_is_free() {
    let pet = filled().to_new_pet().unwrap();
    assert_eq!(pets::format_fee(pet.fee), "Free");
}

#[test]
fn fee_accepts_dollar_prefix() {
    let form = PetForm { fee: "$75".to_owned(), ..filled() };
    assert_eq!(pets::format_fee(form.to_new_pet().unwrap().fee), "$75");
}

#[test]
fn blank_name_is_rejected() {
    let form = PetForm { name: "   ".to_owned(), ..filled() };
    assert_eq!(form.to_new_pet(), Err(NAME_REQUIRED));
}

#[test]
fn bad_fee_is_rejected() {
    for fee in ["-5", "lots", "NaN"] {
        let form = PetForm { fee: fee.to_owned(), ..filled() };
        assert_eq!(form.to_new_pet(), Err(FEE_INVALID), "fee {fee:?}");
    }
}

#[test]
fn submit_status_helpers() {
    assert!(!SubmitStatus::Idle.is_submitting());
    assert!(SubmitStatus::Submitting.is_submitting());
    assert_eq!(SubmitStatus::Failed("boom".to_owned()).error(), Some("boom"));
    assert_eq!(SubmitStatus::Idle.error(), None);
}
