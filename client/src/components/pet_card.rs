//! Listing card for a fetched pet.

use leptos::prelude::*;
use pets::PetRecord;

/// Card with photo, favorite toggle, fee, location, age, and a clamped
/// description. The favorite heart is local to the card and not persisted.
#[component]
pub fn PetCard(pet: PetRecord) -> impl IntoView {
    let fee = pet.fee_label();
    let PetRecord { name, age, location, description, image_url, .. } = pet;
    let alt = name.clone();
    let favorite = RwSignal::new(false);

    view! {
        <article class="pet-card">
            <div class="pet-card__media">
                <img class="pet-card__image" src=image_url alt=alt/>
                <button
                    class=move || {
                        if favorite.get() { "pet-card__favorite pet-card__favorite--active" } else { "pet-card__favorite" }
                    }
                    title="Favorite"
                    on:click=move |_| favorite.update(|f| *f = !*f)
                >
                    {move || if favorite.get() { "♥" } else { "♡" }}
                </button>
            </div>
            <div class="pet-card__body">
                <div class="pet-card__heading">
                    <h3 class="pet-card__name">{name}</h3>
                    <span class="pet-card__fee">{fee}</span>
                </div>
                <p class="pet-card__meta">
                    <span aria-hidden="true">"📍 "</span>
                    {location}
                </p>
                <p class="pet-card__meta">
                    <span aria-hidden="true">"📅 "</span>
                    {age}
                </p>
                <p class="pet-card__description">{description}</p>
                <button class="btn btn--primary pet-card__details">"View Details"</button>
            </div>
        </article>
    }
}
