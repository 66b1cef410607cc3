// web_app/components/table.rs - Results table and pagination
//
// Components for displaying the filtered catalog:
// - ResultsHeader: row count above the table
// - ProductTable: the current page of products
// - NoResults: empty state when no product passes the filters
// - Pagination: 1-indexed numbered page selector

use leptos::prelude::*;

use super::common::PriceDisplay;
use crate::web_app::model::Product;
use crate::web_app::paging;

const HEADER_CLASS: &str =
    "px-4 py-3 text-left text-xs font-bold text-gray-600 uppercase tracking-wider";
const CELL_CLASS: &str = "px-4 py-3 text-sm text-gray-700";

/// Count line shown above the table.
#[component]
pub fn ResultsHeader(
    /// Number of products in the filtered view
    total: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="flex justify-between items-center mb-6">
            <span class="text-gray-500 font-medium">
                {move || {
                    let count = total.get();
                    if count == 1 {
                        "1 product found".to_string()
                    } else {
                        format!("{} products found", count)
                    }
                }}
            </span>
        </div>
    }
}

/// Empty state shown when no product passes the active filters.
#[component]
pub fn NoResults() -> impl IntoView {
    view! {
        <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
            <div class="text-gray-300 text-6xl mb-4">"🔍"</div>
            <h3 class="text-xl font-bold text-gray-900 mb-2">"No Results Found"</h3>
            <p class="text-gray-500 max-w-md mx-auto">
                "No products match the current filters. Try adjusting the search terms, category or date range."
            </p>
        </div>
    }
}

/// Table of the current page of products.
#[component]
pub fn ProductTable(
    /// The visible page of the filtered view
    products: Signal<Vec<Product>>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto bg-white rounded-2xl shadow-sm border border-gray-100">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class=HEADER_CLASS>"Id"</th>
                        <th class=HEADER_CLASS>"Product Name"</th>
                        <th class=HEADER_CLASS>"Category"</th>
                        <th class=HEADER_CLASS>"Price"</th>
                        <th class=HEADER_CLASS>"Added Date"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-100">
                    <For
                        each=move || products.get()
                        key=|product| product.id
                        children=move |product: Product| {
                            view! {
                                <tr class="hover:bg-gray-50 transition-colors">
                                    <td class=CELL_CLASS>{product.id}</td>
                                    <td class=CELL_CLASS>{product.title.clone()}</td>
                                    <td class=CELL_CLASS>{product.category.clone()}</td>
                                    <td class=CELL_CLASS>
                                        <PriceDisplay price=product.price />
                                    </td>
                                    <td class=CELL_CLASS>
                                        {product.added_date.format("%Y-%m-%d").to_string()}
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

/// Numbered page selector with Previous/Next.
///
/// Pages are 1-indexed. The parent hides the whole control when the
/// filtered view is empty.
#[component]
pub fn Pagination(
    /// Current page (1-indexed)
    current_page: RwSignal<u32>,
    /// Total number of items in the filtered view
    total_items: Signal<usize>,
    /// Items per page
    page_size: usize,
) -> impl IntoView {
    let total_pages = move || paging::page_count(total_items.get(), page_size) as u32;

    let can_go_prev = move || current_page.get() > 1;
    let can_go_next = move || current_page.get() < total_pages();

    let go_prev = move |_| {
        if can_go_prev() {
            current_page.update(|p| *p -= 1);
        }
    };

    let go_next = move |_| {
        if can_go_next() {
            current_page.update(|p| *p += 1);
        }
    };

    let nav_class = "px-4 py-2 bg-white border border-gray-200 rounded-lg shadow-sm \
                     disabled:opacity-50 disabled:cursor-not-allowed \
                     hover:bg-gray-50 hover:border-gray-300 transition-all font-medium text-gray-700";

    view! {
        <div class="flex items-center justify-center gap-2 mt-12 mb-8">
            <button
                type="button"
                class=nav_class
                disabled=move || !can_go_prev()
                on:click=go_prev
            >
                "← Previous"
            </button>

            <For
                each=move || 1..=total_pages()
                key=|page| *page
                children=move |page: u32| {
                    let is_current = move || current_page.get() == page;
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_current() {
                                    "w-10 h-10 rounded-lg text-sm font-bold bg-blue-600 text-white shadow-sm"
                                } else {
                                    "w-10 h-10 rounded-lg text-sm font-medium bg-white border border-gray-200 \
                                     text-gray-700 hover:bg-gray-50 hover:border-gray-300 transition-all"
                                }
                            }
                            on:click=move |_| current_page.set(page)
                        >
                            {page}
                        </button>
                    }
                }
            />

            <button
                type="button"
                class=nav_class
                disabled=move || !can_go_next()
                on:click=go_next
            >
                "Next →"
            </button>
        </div>
    }
}
