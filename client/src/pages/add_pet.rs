//! Post-a-pet form at `/add-pet`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use pets::{PetStatus, PetType};

use crate::components::photo_drop_zone::PhotoDropZone;
use crate::state::pet_form::{PetForm, SubmitStatus};

#[component]
pub fn AddPetPage() -> impl IntoView {
    let form = RwSignal::new(PetForm::default());
    let status = RwSignal::new(SubmitStatus::Idle);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.with(SubmitStatus::is_submitting) {
            return;
        }
        let new_pet = match form.with(PetForm::to_new_pet) {
            Ok(new_pet) => new_pet,
            Err(message) => {
                status.set(SubmitStatus::Failed(message.to_owned()));
                return;
            }
        };
        status.set(SubmitStatus::Submitting);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_pet(&new_pet).await {
                    Ok(created) => {
                        log::info!("posted pet {} ({})", created.name, created.id);
                        form.set(PetForm::default());
                        status.set(SubmitStatus::Idle);
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("Error posting pet: {e}");
                        status.set(SubmitStatus::Failed(e));
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        let _ = (new_pet, &navigate);
    };

    view! {
        <div class="add-pet-page">
            <h1 class="add-pet-page__title">"Post a Pet"</h1>
            <form class="pet-form" on:submit=on_submit>
                <div class="pet-form__field">
                    <span class="pet-form__label">"Upload Photo"</span>
                    <PhotoDropZone/>
                </div>

                <div class="pet-form__row">
                    <label class="pet-form__field">
                        <span class="pet-form__label">"Pet Name"</span>
                        <input
                            class="pet-form__input"
                            type="text"
                            placeholder="Enter pet name"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="pet-form__field">
                        <span class="pet-form__label">"Pet Type"</span>
                        <select
                            class="pet-form__input"
                            prop:value=move || form.with(|f| f.pet_type.as_str().to_owned())
                            on:change=move |ev| {
                                if let Some(pet_type) = PetType::from_select(&event_target_value(&ev)) {
                                    form.update(|f| f.pet_type = pet_type);
                                }
                            }
                        >
                            {PetType::ALL
                                .into_iter()
                                .map(|pet_type| view! { <option value=pet_type.as_str()>{pet_type.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>

                <div class="pet-form__row">
                    <label class="pet-form__field">
                        <span class="pet-form__label">"Age"</span>
                        <input
                            class="pet-form__input"
                            type="text"
                            placeholder="e.g., 2 years"
                            prop:value=move || form.with(|f| f.age.clone())
                            on:input=move |ev| form.update(|f| f.age = event_target_value(&ev))
                        />
                    </label>
                    <label class="pet-form__field">
                        <span class="pet-form__label">"Location"</span>
                        <input
                            class="pet-form__input"
                            type="text"
                            placeholder="City, State"
                            prop:value=move || form.with(|f| f.location.clone())
                            on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                        />
                    </label>
                </div>

                <div class="pet-form__row">
                    <label class="pet-form__field">
                        <span class="pet-form__label">"Status"</span>
                        <select
                            class="pet-form__input"
                            prop:value=move || form.with(|f| f.status.as_str().to_owned())
                            on:change=move |ev| {
                                if let Some(status) = PetStatus::from_select(&event_target_value(&ev)) {
                                    form.update(|f| f.status = status);
                                }
                            }
                        >
                            {PetStatus::ALL
                                .into_iter()
                                .map(|status| view! { <option value=status.as_str()>{status.form_label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="pet-form__field">
                        <span class="pet-form__label">"Adoption Fee"</span>
                        <input
                            class="pet-form__input"
                            type="text"
                            inputmode="decimal"
                            placeholder="0 for free"
                            prop:value=move || form.with(|f| f.fee.clone())
                            on:input=move |ev| form.update(|f| f.fee = event_target_value(&ev))
                        />
                    </label>
                </div>

                <label class="pet-form__field">
                    <span class="pet-form__label">"Description"</span>
                    <textarea
                        class="pet-form__input pet-form__textarea"
                        placeholder="Provide details about the pet..."
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>

                <label class="pet-form__field">
                    <span class="pet-form__label">"Contact Information"</span>
                    <input
                        class="pet-form__input"
                        type="text"
                        placeholder="Email or phone number"
                        prop:value=move || form.with(|f| f.contact_info.clone())
                        on:input=move |ev| form.update(|f| f.contact_info = event_target_value(&ev))
                    />
                </label>

                <Show when=move || status.with(|s| s.error().is_some())>
                    <p class="pet-form__error">{move || status.with(|s| s.error().unwrap_or_default().to_owned())}</p>
                </Show>

                <button
                    class="btn btn--primary pet-form__submit"
                    type="submit"
                    disabled=move || status.with(SubmitStatus::is_submitting)
                >
                    {move || if status.with(SubmitStatus::is_submitting) { "Posting..." } else { "Post Pet" }}
                </button>
            </form>
        </div>
    }
}
