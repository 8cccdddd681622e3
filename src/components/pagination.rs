//! Numbered page selector for paginated lists.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Number of pages needed for `total` records at `per_page` a page.
pub fn page_count(total: u64, per_page: u64) -> u64 {
    if per_page == 0 { 0 } else { total.div_ceil(per_page) }
}

/// Page buttons, hidden entirely when everything fits on one page.
#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<u64>,
    #[prop(into)] total: Signal<u64>,
    #[prop(into)] per_page: Signal<u64>,
    on_page: Callback<u64>,
) -> impl IntoView {
    let pages = move || (1..=page_count(total.get(), per_page.get())).collect::<Vec<_>>();

    view! {
        <Show when=move || { page_count(total.get(), per_page.get()) > 1 }>
            <div class="pagination">
                <For
                    each=pages
                    key=|page| *page
                    children=move |page: u64| {
                        view! {
                            <button
                                class="pagination__page"
                                class=("pagination__page--current", move || current.get() == page)
                                disabled=move || current.get() == page
                                on:click=move |_| on_page.run(page)
                            >
                                {page}
                            </button>
                        }
                    }
                />
            </div>
        </Show>
    }
}
