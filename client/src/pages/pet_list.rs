//! Static catalog at `/pets`, filtered in memory over the bundled sample set.

use leptos::prelude::*;
use pets::{CatalogFilter, PetStatus, PetType, sample::sample_pets};

use crate::components::catalog_card::CatalogCard;

#[component]
pub fn PetListPage() -> impl IntoView {
    let filter = RwSignal::new(CatalogFilter::default());
    let catalog = sample_pets();
    let visible = Memo::new(move |_| filter.with(|f| f.apply(&catalog)));

    view! {
        <div class="catalog-page">
            <div class="catalog-page__header">
                <h1 class="catalog-page__title">"Available Pets"</h1>
                <div class="catalog-page__filters">
                    <input
                        class="catalog-page__input"
                        type="text"
                        placeholder="Location"
                        prop:value=move || filter.with(|f| f.location.clone())
                        on:input=move |ev| filter.update(|f| f.location = event_target_value(&ev))
                    />
                    <select
                        class="catalog-page__select"
                        prop:value=move || filter.with(|f| f.pet_type.map_or("", PetType::as_str).to_owned())
                        on:change=move |ev| {
                            filter.update(|f| f.pet_type = PetType::from_select(&event_target_value(&ev)));
                        }
                    >
                        <option value="">"All Types"</option>
                        {PetType::ALL
                            .into_iter()
                            .map(|pet_type| view! { <option value=pet_type.as_str()>{pet_type.plural_label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        class="catalog-page__select"
                        prop:value=move || filter.with(|f| f.status.map_or("", PetStatus::as_str).to_owned())
                        on:change=move |ev| {
                            filter.update(|f| f.status = PetStatus::from_select(&event_target_value(&ev)));
                        }
                    >
                        <option value="">"All Status"</option>
                        {PetStatus::ALL
                            .into_iter()
                            .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
            </div>

            <Show
                when=move || visible.with(|pets| !pets.is_empty())
                fallback=|| view! { <p class="listing__empty">"No pets match these filters."</p> }
            >
                <div class="listing__grid">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|pet| view! { <CatalogCard pet=pet/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
