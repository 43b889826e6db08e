//! Expanded filter panel: pet type select plus age and fee sliders.

#[cfg(test)]
#[path = "filter_panel_test.rs"]
mod filter_panel_test;

use leptos::prelude::*;
use pets::{AGE_SLIDER_MAX, FEE_SLIDER_MAX, FilterState, PetType};

/// Range inputs report text; anything unparsable falls back to the minimum.
fn parse_slider(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

fn age_readout(age_ceiling: u32) -> String {
    format!("0-{age_ceiling} years")
}

fn fee_readout(max_fee: u32) -> String {
    format!("${max_fee}")
}

#[component]
pub fn FilterPanel(
    #[prop(into)] filters: Signal<FilterState>,
    on_pet_type: Callback<Option<PetType>>,
    on_max_fee: Callback<u32>,
    on_age_ceiling: Callback<u32>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel__header">
                <h3 class="filter-panel__title">"Filters"</h3>
                <button class="filter-panel__close" title="Close filters" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
            </div>
            <div class="filter-panel__grid">
                <label class="filter-panel__field">
                    <span class="filter-panel__label">"Pet Type"</span>
                    <select
                        class="filter-panel__select"
                        prop:value=move || filters.with(|f| f.pet_type.map_or("", PetType::as_str).to_owned())
                        on:change=move |ev| on_pet_type.run(PetType::from_select(&event_target_value(&ev)))
                    >
                        <option value="">"All Types"</option>
                        {PetType::ALL
                            .into_iter()
                            .map(|pet_type| view! { <option value=pet_type.as_str()>{pet_type.plural_label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="filter-panel__field">
                    <span class="filter-panel__label">"Age Range (years)"</span>
                    <div class="filter-panel__slider">
                        <input
                            type="range"
                            min="0"
                            max=AGE_SLIDER_MAX.to_string()
                            prop:value=move || filters.with(|f| f.age_ceiling.to_string())
                            on:input=move |ev| on_age_ceiling.run(parse_slider(&event_target_value(&ev)))
                        />
                        <span class="filter-panel__readout">{move || age_readout(filters.with(|f| f.age_ceiling))}</span>
                    </div>
                </label>
                <label class="filter-panel__field">
                    <span class="filter-panel__label">"Maximum Adoption Fee"</span>
                    <div class="filter-panel__slider">
                        <input
                            type="range"
                            min="0"
                            max=FEE_SLIDER_MAX.to_string()
                            prop:value=move || filters.with(|f| f.max_fee.to_string())
                            on:input=move |ev| on_max_fee.run(parse_slider(&event_target_value(&ev)))
                        />
                        <span class="filter-panel__readout">{move || fee_readout(filters.with(|f| f.max_fee))}</span>
                    </div>
                </label>
            </div>
        </div>
    }
}
