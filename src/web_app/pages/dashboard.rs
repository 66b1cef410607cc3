// web_app/pages/dashboard.rs - Catalog dashboard page
//
// The main page. Owns all session state:
// - the one-time catalog load
// - the filter criteria being edited and the criteria actually applied
// - the current page number
//
// The filtered view is always derived from the full product list and the
// applied criteria; it is never filtered incrementally from a previous
// result.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::filter::apply_filters;
use crate::web_app::model::{Catalog, FilterCriteria};
use crate::web_app::paging::{self, PAGE_SIZE};
use crate::web_app::server_fns::load_catalog;

/// Main dashboard page component
///
/// Orchestrates the dashboard:
/// - Filter bar with explicit Apply/Clear actions
/// - Paginated results table
/// - Loading, error and empty states
#[component]
pub fn DashboardPage() -> impl IntoView {
    // One-time load; the source never changes so this never re-fetches.
    let catalog = Resource::new(|| (), |_| load_catalog());

    // Criteria being edited in the filter bar.
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let start_date = RwSignal::new(None::<chrono::NaiveDate>);
    let end_date = RwSignal::new(None::<chrono::NaiveDate>);

    // Criteria actually in effect; only Apply and Clear touch these.
    let applied = RwSignal::new(FilterCriteria::default());
    let current_page = RwSignal::new(1_u32);

    // Derived signals for the loaded data
    let products = Signal::derive(move || {
        catalog
            .get()
            .and_then(|r: Result<Catalog, ServerFnError>| r.ok())
            .map(|c| c.products)
            .unwrap_or_default()
    });

    let categories = Signal::derive(move || {
        catalog
            .get()
            .and_then(|r| r.ok())
            .map(|c| c.categories)
            .unwrap_or_default()
    });

    // Recomputed from the full list every time the applied criteria change.
    let filtered = Signal::derive(move || apply_filters(&products.get(), &applied.get()));
    let total = Signal::derive(move || filtered.get().len());
    let visible = Signal::derive(move || {
        paging::page_slice(&filtered.get(), current_page.get() as usize, PAGE_SIZE)
    });

    // Snapshot the edited criteria; an empty category means no filter.
    let on_apply = Callback::new(move |()| {
        applied.set(FilterCriteria {
            search: search.get(),
            category: Some(category.get()).filter(|c| !c.is_empty()),
            start_date: start_date.get(),
            end_date: end_date.get(),
        });
        current_page.set(1);
    });

    // Reset the edits and the applied criteria; the view returns to the
    // full list.
    let on_clear = Callback::new(move |()| {
        search.set(String::new());
        category.set(String::new());
        start_date.set(None);
        end_date.set(None);
        applied.set(FilterCriteria::default());
        current_page.set(1);
    });

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            // Header
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <span class="text-2xl">"📦"</span>
                        <h1 class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-600 to-indigo-600">
                            "Catalog Dashboard"
                        </h1>
                    </div>
                    <div class="text-sm text-gray-500">
                        "All Products"
                    </div>
                </div>
            </header>

            // Main content
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <Suspense fallback=move || view! {
                    <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100 text-center">
                        <Loading message="Loading catalog..." />
                    </div>
                }>
                    {move || {
                        match catalog.get() {
                            None => view! {
                                <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100">
                                    <Loading message="Loading catalog..." />
                                </div>
                            }.into_any(),
                            Some(Err(e)) => view! {
                                <ErrorDisplay error=e.to_string() />
                            }.into_any(),
                            Some(Ok(_)) => view! {
                                <div class="animate-fade-in">
                                    // Filter bar
                                    <section class="bg-white rounded-2xl shadow-sm p-6 mb-8 border border-gray-100">
                                        <FilterBar
                                            search=search
                                            category=category
                                            start_date=start_date
                                            end_date=end_date
                                            categories=categories
                                            on_apply=on_apply
                                            on_clear=on_clear
                                        />
                                    </section>

                                    // Results
                                    <section>
                                        <ResultsHeader total=total />

                                        <Show
                                            when=move || total.get() > 0
                                            fallback=|| view! { <NoResults /> }
                                        >
                                            <ProductTable products=visible />
                                        </Show>

                                        <Show when=move || total.get() > 0>
                                            <Pagination
                                                current_page=current_page
                                                total_items=total
                                                page_size=PAGE_SIZE
                                            />
                                        </Show>
                                    </section>
                                </div>
                            }.into_any(),
                        }
                    }}
                </Suspense>
            </main>

            // Footer
            <footer class="bg-white border-t border-gray-200 mt-12 py-8">
                <div class="max-w-7xl mx-auto px-4 text-center text-gray-500 text-sm">
                    <p>"Built with Leptos and Actix."</p>
                </div>
            </footer>
        </div>
    }
}
