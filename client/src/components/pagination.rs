//! Numbered page buttons, one per page.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use std::ops::RangeInclusive;

use leptos::prelude::*;

fn page_class(active: bool) -> &'static str {
    if active { "pagination__page pagination__page--active" } else { "pagination__page" }
}

#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] pages: Signal<RangeInclusive<u32>>,
    on_select: Callback<u32>,
) -> impl IntoView {
    view! {
        <nav class="pagination" aria-label="Pages">
            {move || {
                pages
                    .get()
                    .map(|page| {
                        view! {
                            <button
                                class=move || page_class(current.get() == page)
                                on:click=move |_| on_select.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}
