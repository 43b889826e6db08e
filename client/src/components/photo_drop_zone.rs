use leptos::prelude::*;

/// Upload affordance for the post-a-pet form. Purely visual: no file is read
/// or stored.
#[component]
pub fn PhotoDropZone() -> impl IntoView {
    view! {
        <div class="photo-drop">
            <span class="photo-drop__icon" aria-hidden="true">"📷"</span>
            <p class="photo-drop__hint">"Drag and drop or click to upload"</p>
        </div>
    }
}
