//! Sticky location search bar for the home listing.

use leptos::prelude::*;

#[component]
pub fn SearchBar(
    #[prop(into)] location: Signal<String>,
    on_location: Callback<String>,
    on_toggle_filters: Callback<()>,
    on_search: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <label class="search-bar__field">
                <span class="search-bar__icon" aria-hidden="true">"📍"</span>
                <input
                    class="search-bar__input"
                    type="text"
                    placeholder="Enter your location"
                    prop:value=move || location.get()
                    on:input=move |ev| on_location.run(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_search.run(());
                        }
                    }
                />
            </label>
            <button class="btn search-bar__filters" on:click=move |_| on_toggle_filters.run(())>
                "⚙ Filters"
            </button>
            <button class="btn btn--primary search-bar__search" on:click=move |_| on_search.run(())>
                "Search"
            </button>
        </div>
    }
}
