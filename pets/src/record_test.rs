use super::*;
use time::macros::datetime;

fn luna() -> PetRecord {
    crate::sample::sample_pets().remove(0)
}

#[test]
fn format_fee_zero_is_free() {
    assert_eq!(format_fee(0.0), "Free");
}

#[test]
fn format_fee_whole_dollars_has_no_decimals() {
    assert_eq!(format_fee(25.0), "$25");
    assert_eq!(format_fee(200.0), "$200");
}

#[test]
fn format_fee_keeps_cents() {
    assert_eq!(format_fee(12.5), "$12.5");
}

#[test]
fn pet_type_parses_column_values() {
    for pet_type in PetType::ALL {
        assert_eq!(pet_type.as_str().parse::<PetType>(), Ok(pet_type));
    }
    assert_eq!("bird".parse::<PetType>(), Err(ParseError::UnknownType("bird".to_owned())));
}

#[test]
fn pet_type_from_select_treats_empty_as_all() {
    assert_eq!(PetType::from_select(""), None);
    assert_eq!(PetType::from_select("fish"), Some(PetType::Fish));
}

#[test]
fn pet_status_badge_colors() {
    assert!(PetStatus::Lost.badge_class().ends_with("--lost"));
    assert!(PetStatus::Found.badge_class().ends_with("--found"));
    assert!(PetStatus::Adoption.badge_class().ends_with("--adoption"));
    assert_eq!(PetStatus::Adoption.label(), "Adoption");
}

#[test]
fn pet_status_rejects_unknown() {
    assert_eq!(PetStatus::from_select(""), None);
    assert_eq!("missing".parse::<PetStatus>(), Err(ParseError::UnknownStatus("missing".to_owned())));
}

#[test]
fn pet_record_deserializes_backend_row() {
    let row = serde_json::json!({
        "id": "7f1c",
        "name": "Biscuit",
        "type": "dog",
        "age": "3 years",
        "location": "Austin, TX",
        "description": "Shy but sweet",
        "image_url": "https://example.test/biscuit.jpg",
        "status": "found",
        "fee": 0,
        "contact_info": "555-0100",
        "created_at": "2024-03-01T12:30:00.123456+00:00"
    });
    let pet: PetRecord = serde_json::from_value(row).expect("row should decode");
    assert_eq!(pet.pet_type, PetType::Dog);
    assert_eq!(pet.status, PetStatus::Found);
    assert_eq!(pet.fee_label(), "Free");
    assert_eq!(pet.created_at.date(), datetime!(2024-03-01 0:00 UTC).date());
}

#[test]
fn pet_record_reads_null_text_columns_as_empty() {
    let row = serde_json::json!({
        "id": "9",
        "name": "Biscuit",
        "type": "dog",
        "age": null,
        "location": null,
        "description": null,
        "image_url": null,
        "status": "found",
        "fee": 0,
        "contact_info": null,
        "created_at": "2024-03-01T12:00:00Z"
    });
    let pet: PetRecord = serde_json::from_value(row).expect("row with nulls should decode");
    assert_eq!(pet.name, "Biscuit");
    assert_eq!(pet.description, "");
    assert_eq!(pet.image_url, "");
    assert_eq!(pet.age, "");
    assert_eq!(pet.location, "");
    assert_eq!(pet.contact_info, "");
}

#[test]
fn pet_record_tolerates_missing_image_column() {
    let row = serde_json::json!({
        "id": "10",
        "name": "Pip",
        "type": "other",
        "age": "1 year",
        "location": "Reno, NV",
        "description": "Hamster",
        "status": "adoption",
        "fee": 5,
        "contact_info": "pip@example.com",
        "created_at": "2024-03-02T12:00:00Z"
    });
    let pet: PetRecord = serde_json::from_value(row).expect("row without image should decode");
    assert_eq!(pet.image_url, "");
}

#[test]
fn pet_record_serializes_type_column_name() {
    let value = serde_json::to_value(luna()).expect("record should encode");
    assert_eq!(value["type"], "cat");
    assert_eq!(value["status"], "lost");
    assert!(value.get("pet_type").is_none());
    assert_eq!(value["created_at"], "2024-02-20T00:00:00Z");
}

#[test]
fn new_pet_record_defaults_optional_fields() {
    let body = serde_json::json!({
        "name": "Nemo",
        "type": "fish",
        "age": "6 months",
        "location": "Miami, FL",
        "description": "Orange clownfish",
        "status": "adoption",
        "contact_info": "nemo@example.com"
    });
    let new_pet: NewPetRecord = serde_json::from_value(body).expect("body should decode");
    assert_eq!(new_pet.image_url, "");
    assert!(new_pet.fee.abs() < f64::EPSILON);
}

#[test]
fn into_record_keeps_fields_and_assigns_identity() {
    let pet = luna();
    let new_pet = NewPetRecord {
        name: pet.name.clone(),
        pet_type: pet.pet_type,
        age: pet.age.clone(),
        location: pet.location.clone(),
        description: pet.description.clone(),
        image_url: pet.image_url.clone(),
        status: pet.status,
        fee: pet.fee,
        contact_info: pet.contact_info.clone(),
    };
    let record = new_pet.into_record("1".to_owned(), pet.created_at);
    assert_eq!(record, pet);
}
