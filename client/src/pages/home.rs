//! Home page: hero, location search, filters, paginated listing, and the
//! post-a-pet call to action.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns a `ListingState` signal for as long as it is mounted. Every
//! user input runs a `ListingState` transition; when the transition asks for a
//! drain, `spawn_fetch` performs one round trip against `/api/pets` on the
//! local executor. Responses from superseded requests are dropped by
//! `finish_fetch`.

use leptos::prelude::*;
use pets::PetType;

use crate::components::{
    filter_panel::FilterPanel, pagination::Pagination, pet_card::PetCard, search_bar::SearchBar,
};
use crate::state::listing::ListingState;

/// Run a listing transition and start a fetch if it scheduled one.
fn apply(listing: RwSignal<ListingState>, transition: impl FnOnce(&mut ListingState) -> bool) {
    if listing.try_update(transition).unwrap_or(false) {
        spawn_fetch(listing);
    }
}

fn spawn_fetch(listing: RwSignal<ListingState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(ticket) = listing.try_update(ListingState::begin_fetch) else {
            return;
        };
        let result = crate::net::api::fetch_pets(&ticket.params).await;
        if let Err(e) = &result {
            log::error!("Error fetching pets: {e}");
        }
        match listing.try_update(|s| s.finish_fetch(ticket.seq, result)) {
            Some(crate::state::listing::FetchOutcome::Stale) => {
                log::debug!("discarded stale pet page for request {}", ticket.seq);
            }
            Some(_) => {}
            None => log::debug!("home page unmounted before request {} finished", ticket.seq),
        }
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = listing;
}

#[component]
pub fn HomePage() -> impl IntoView {
    let listing = RwSignal::new(ListingState::default());
    let show_filters = RwSignal::new(false);

    // Initial load once the page is live in the browser.
    Effect::new(move || apply(listing, ListingState::schedule_fetch));

    let location = Signal::derive(move || listing.with(|s| s.filters.location.clone()));
    let filters = Signal::derive(move || listing.with(|s| s.filters.clone()));
    let current_page = Signal::derive(move || listing.with(|s| s.current_page));
    let page_numbers = Signal::derive(move || listing.with(ListingState::page_numbers));

    let on_location = Callback::new(move |value: String| apply(listing, |s| s.set_location(value)));
    let on_search = Callback::new(move |()| apply(listing, ListingState::search));
    let on_toggle_filters = Callback::new(move |()| show_filters.update(|open| *open = !*open));
    let on_close_filters = Callback::new(move |()| show_filters.set(false));
    let on_pet_type = Callback::new(move |pet_type: Option<PetType>| apply(listing, |s| s.set_pet_type(pet_type)));
    let on_max_fee = Callback::new(move |max_fee: u32| apply(listing, |s| s.set_max_fee(max_fee)));
    let on_age_ceiling = Callback::new(move |age: u32| apply(listing, |s| s.set_age_ceiling(age)));
    let on_page = Callback::new(move |page: u32| apply(listing, |s| s.go_to_page(page)));

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Find Your Perfect Pet Companion"</h1>
                <p class="hero__subtitle">
                    "Connect with your future furry friend or help lost pets find their way home"
                </p>
            </section>

            <div class="search-panel">
                <SearchBar
                    location=location
                    on_location=on_location
                    on_toggle_filters=on_toggle_filters
                    on_search=on_search
                />
                <Show when=move || show_filters.get()>
                    <FilterPanel
                        filters=filters
                        on_pet_type=on_pet_type
                        on_max_fee=on_max_fee
                        on_age_ceiling=on_age_ceiling
                        on_close=on_close_filters
                    />
                </Show>
            </div>

            <Show
                when=move || !listing.with(ListingState::show_spinner)
                fallback=|| {
                    view! {
                        <div class="listing__loading">
                            <div class="spinner"></div>
                            <p>"Loading pets..."</p>
                        </div>
                    }
                }
            >
                <Show when=move || listing.with(ListingState::is_empty_result)>
                    <p class="listing__empty">"No pets match your search yet."</p>
                </Show>
                <div class="listing__grid">
                    {move || {
                        listing
                            .with(|s| s.pets.clone())
                            .into_iter()
                            .map(|pet| view! { <PetCard pet=pet/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <Show when=move || listing.with(ListingState::show_pagination)>
                    <Pagination current=current_page pages=page_numbers on_select=on_page/>
                </Show>
            </Show>

            <section class="features">
                <div class="feature">
                    <span class="feature__icon feature__icon--pink" aria-hidden="true">"♥"</span>
                    <h3 class="feature__title">"Lost Pet Support"</h3>
                    <p class="feature__text">
                        "Post details about your lost pet and get help from our community to bring them home safely."
                    </p>
                </div>
                <div class="feature">
                    <span class="feature__icon feature__icon--indigo" aria-hidden="true">"🐾"</span>
                    <h3 class="feature__title">"Pet Adoption"</h3>
                    <p class="feature__text">
                        "Find your perfect companion from our selection of pets available for adoption."
                    </p>
                </div>
                <div class="feature">
                    <span class="feature__icon feature__icon--green" aria-hidden="true">"🔍"</span>
                    <h3 class="feature__title">"AI-Powered Help"</h3>
                    <p class="feature__text">
                        "Get personalized advice and support from our AI assistant specialized in pet care."
                    </p>
                </div>
            </section>

            <section class="cta">
                <h2 class="cta__title">"Ready to Help?"</h2>
                <p class="cta__text">
                    "Join our community of pet lovers and make a difference in an animal's life today."
                </p>
                <a class="btn btn--primary cta__button" href="/add-pet">"Post a Pet"</a>
            </section>
        </div>
    }
}
