use leptos::prelude::*;
use pets::PetStatus;

/// Colored pill: lost is red, found is green, adoption is blue.
#[component]
pub fn StatusBadge(status: PetStatus) -> impl IntoView {
    view! { <span class=status.badge_class()>{status.label()}</span> }
}
