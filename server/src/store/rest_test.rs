use super::*;
use crate::config::BackendTimeouts;

const ROW: &str = r#"{
    "id": "3b2d",
    "name": "Pepper",
    "type": "dog",
    "age": "5 years",
    "location": "Portland, OR",
    "description": "Loves hikes",
    "image_url": "https://example.test/pepper.jpg",
    "status": "lost",
    "fee": 0,
    "contact_info": "pepper@example.com",
    "created_at": "2024-05-01T08:00:00+00:00"
}"#;

fn backend() -> BackendConfig {
    BackendConfig {
        url: "https://abc.example.test".to_owned(),
        api_key: "anon".to_owned(),
        table: "pets".to_owned(),
        timeouts: BackendTimeouts { request_secs: 5, connect_secs: 1 },
    }
}

#[test]
fn new_targets_table_endpoint() {
    let store = RestStore::new(&backend()).unwrap();
    assert_eq!(store.endpoint(), "https://abc.example.test/rest/v1/pets");
}

#[test]
fn list_response_reads_rows_and_count() {
    let page = parse_list_response(&format!("[{ROW}]"), Some("0-0/41")).unwrap();
    assert_eq!(page.count, 41);
    assert_eq!(page.pets.len(), 1);
    assert_eq!(page.pets[0].name, "Pepper");
    assert_eq!(page.pets[0].fee_label(), "Free");
}

#[test]
fn list_response_empty_page() {
    let page = parse_list_response("[]", Some("*/0")).unwrap();
    assert_eq!(page, PetPage::default());
}

#[test]
fn list_response_requires_exact_count() {
    let err = parse_list_response("[]", Some("0-19/*")).unwrap_err();
    assert!(matches!(err, StoreError::Parse(_)));
    let err = parse_list_response("[]", None).unwrap_err();
    assert!(matches!(err, StoreError::Parse(_)));
}

#[test]
fn list_response_rejects_invalid_json() {
    let err = parse_list_response("{\"message\":\"nope\"}", Some("*/0")).unwrap_err();
    assert!(matches!(err, StoreError::Parse(_)));
}

#[test]
fn create_response_returns_first_row() {
    let pet = parse_create_response(&format!("[{ROW}]")).unwrap();
    assert_eq!(pet.id, "3b2d");
}

#[test]
fn create_response_without_rows_is_an_error() {
    let err = parse_create_response("[]").unwrap_err();
    assert!(matches!(err, StoreError::Parse(_)));
}

#[test]
fn list_response_keeps_rows_with_null_text() {
    let row = ROW.replace(r#""https://example.test/pepper.jpg""#, "null").replace(r#""Loves hikes""#, "null");
    let page = parse_list_response(&format!("[{ROW},{row}]"), Some("0-1/2")).unwrap();
    assert_eq!(page.pets.len(), 2);
    assert_eq!(page.pets[1].image_url, "");
    assert_eq!(page.pets[1].description, "");
}

#[test]
fn prefer_header_values_match_postgrest() {
    assert_eq!(COUNT_EXACT, "count=exact");
    assert_eq!(RETURN_REPRESENTATION, "return=representation");
}
