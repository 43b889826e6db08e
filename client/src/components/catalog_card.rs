//! Card for the static catalog on `/pets`.

use leptos::prelude::*;
use pets::PetRecord;

use super::status_badge::StatusBadge;

#[component]
pub fn CatalogCard(pet: PetRecord) -> impl IntoView {
    let PetRecord { name, age, location, description, image_url, status, .. } = pet;
    let alt = name.clone();

    view! {
        <article class="pet-card pet-card--catalog">
            <img class="pet-card__image" src=image_url alt=alt/>
            <div class="pet-card__body">
                <div class="pet-card__heading">
                    <h3 class="pet-card__name">{name}</h3>
                    <StatusBadge status=status/>
                </div>
                <p class="pet-card__meta">
                    <span aria-hidden="true">"📍 "</span>
                    {location}
                </p>
                <p class="pet-card__meta">
                    <span aria-hidden="true">"📅 "</span>
                    {age}
                </p>
                <p class="pet-card__text">{description}</p>
                <button class="btn btn--primary pet-card__details">"Contact Owner"</button>
            </div>
        </article>
    }
}
