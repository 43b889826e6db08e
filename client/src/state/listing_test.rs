use super::*;
use pets::FEE_SLIDER_MAX;
use pets::sample::sample_pets;

fn page_of(count: u64) -> PetPage {
    PetPage { pets: sample_pets(), count }
}

// =============================================================
// Scheduling
// =============================================================

#[test]
fn default_state_is_idle_on_first_page() {
    let state = ListingState::default();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages, 1);
    assert!(!state.loading);
    assert!(!state.is_empty_result());
    assert!(!state.show_pagination());
}

#[test]
fn changed_filter_requests_a_drain() {
    let mut state = ListingState::default();
    assert!(state.set_location("Boston".to_owned()));
}

#[test]
fn unchanged_filter_requests_nothing() {
    let mut state = ListingState::default();
    assert!(!state.set_location(String::new()));
    assert!(!state.set_max_fee(FEE_SLIDER_MAX));
    assert!(!state.set_pet_type(None));
    assert!(!state.go_to_page(1));
}

#[test]
fn changes_before_drain_coalesce_into_one_fetch() {
    let mut state = ListingState::default();
    assert!(state.set_location("Austin".to_owned()));
    assert!(!state.set_pet_type(Some(PetType::Dog)));
    assert!(!state.set_max_fee(40));
    assert!(!state.set_age_ceiling(3));

    let ticket = state.begin_fetch();
    assert_eq!(ticket.params.location.as_deref(), Some("Austin"));
    assert_eq!(ticket.params.pet_type, Some(PetType::Dog));
    assert_eq!(ticket.params.max_fee, Some(40));

    assert!(state.set_max_fee(41), "a change after the drain started needs a new drain");
}

#[test]
fn search_resets_page_and_always_schedules() {
    let mut state = ListingState::default();
    state.go_to_page(3);
    state.begin_fetch();
    assert!(state.search());
    assert_eq!(state.current_page, 1);

    let ticket = state.begin_fetch();
    assert_eq!(ticket.params.page, 1);

    assert!(state.search(), "search on page 1 with no changes still fetches");
}

#[test]
fn go_to_page_sets_cursor_and_offset() {
    let mut state = ListingState::default();
    assert!(state.go_to_page(2));
    let ticket = state.begin_fetch();
    assert_eq!(ticket.params.page, 2);
    assert_eq!(ticket.params.to_query().offset, 20);
}

#[test]
fn go_to_page_zero_means_first_page() {
    let mut state = ListingState::default();
    state.go_to_page(4);
    state.go_to_page(0);
    assert_eq!(state.current_page, 1);
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn loading_spans_fetch_start_to_success() {
    let mut state = ListingState::default();
    let ticket = state.begin_fetch();
    assert!(state.loading);
    assert_eq!(state.finish_fetch(ticket.seq, Ok(page_of(57))), FetchOutcome::Applied);
    assert!(!state.loading);
    assert_eq!(state.pets.len(), 2);
    assert_eq!(state.total_pages, 3);
    assert!(state.show_pagination());
    assert_eq!(state.page_numbers().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn failure_keeps_rows_and_clears_loading() {
    let mut state = ListingState::default();
    let first = state.begin_fetch();
    state.finish_fetch(first.seq, Ok(page_of(2)));

    let second = state.begin_fetch();
    assert!(state.loading);
    let outcome = state.finish_fetch(second.seq, Err("network error".to_owned()));
    assert_eq!(outcome, FetchOutcome::Failed);
    assert!(!state.loading);
    assert_eq!(state.pets, sample_pets());
    assert_eq!(state.total_pages, 1);
}

#[test]
fn stale_response_is_discarded() {
    let mut state = ListingState::default();
    let older = state.begin_fetch();
    state.set_location("Denver".to_owned());
    let newer = state.begin_fetch();

    assert_eq!(state.finish_fetch(older.seq, Ok(page_of(99))), FetchOutcome::Stale);
    assert!(state.loading, "the newer fetch is still in flight");
    assert!(state.pets.is_empty());

    assert_eq!(state.finish_fetch(newer.seq, Ok(PetPage::default())), FetchOutcome::Applied);
    assert!(!state.loading);
    assert!(state.is_empty_result());
    assert_eq!(state.total_pages, 1);
}

#[test]
fn stale_failure_does_not_clear_loading() {
    let mut state = ListingState::default();
    let older = state.begin_fetch();
    let _newer = state.begin_fetch();
    assert_eq!(state.finish_fetch(older.seq, Err("timeout".to_owned())), FetchOutcome::Stale);
    assert!(state.loading);
}

#[test]
fn spinner_shows_before_the_first_fetch() {
    let mut state = ListingState::default();
    assert!(state.show_spinner());

    let ticket = state.begin_fetch();
    assert!(state.show_spinner());

    state.finish_fetch(ticket.seq, Ok(page_of(2)));
    assert!(!state.show_spinner());
}

#[test]
fn spinner_clears_after_failed_first_fetch() {
    let mut state = ListingState::default();
    let ticket = state.begin_fetch();
    assert_eq!(state.finish_fetch(ticket.seq, Err("offline".to_owned())), FetchOutcome::Failed);
    assert!(!state.show_spinner());
    assert!(!state.is_empty_result());
}
