//! Top navigation bar.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Brand link plus icon links. Reads `AuthState` from context and treats a
/// missing provider as signed out.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_context::<RwSignal<AuthState>>();
    let links = move || auth.map(|a| a.get()).unwrap_or_default().nav_links();

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href="/">
                    <span class="navbar__logo" aria-hidden="true">"🐾"</span>
                    <span class="navbar__title">"PetSOS"</span>
                </a>
                <div class="navbar__links">
                    {move || {
                        links()
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a class="navbar__link" href=link.href title=link.label aria-label=link.label>
                                        <span aria-hidden="true">{link.icon}</span>
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>
        </nav>
    }
}
