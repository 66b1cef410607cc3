// web_app/components/filters.rs - Filter controls
//
// Controls for the dashboard filters: search text, category selector and
// the added-date range, plus the Apply/Clear actions. Editing a control
// never filters anything by itself; the criteria only take effect when
// the user applies them.

use chrono::NaiveDate;
use leptos::prelude::*;

use super::common::{Button, DateField, SecondaryButton, TextInput};

/// Category selector with a leading "All Categories" option.
///
/// An empty selection means no category filter.
#[component]
pub fn CategorySelect(
    /// Currently selected category; empty string means all
    selected: RwSignal<String>,
    /// Category labels from the catalog service
    categories: Signal<Vec<String>>,
) -> impl IntoView {
    let class = "px-4 py-2 border border-gray-300 rounded-lg bg-white \
                 focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                 outline-none cursor-pointer shadow-sm";

    view! {
        <select class=class on:change=move |ev| selected.set(event_target_value(&ev))>
            <option value="" selected=move || selected.get().is_empty()>
                "All Categories"
            </option>
            <For
                each=move || categories.get()
                key=|category| category.clone()
                children=move |category: String| {
                    let opt_val = category.clone();
                    view! {
                        <option
                            value=category.clone()
                            selected=move || selected.get() == opt_val
                        >
                            {category}
                        </option>
                    }
                }
            />
        </select>
    }
}

/// The filter bar: search input, category selector, date range and the
/// Apply/Clear actions.
///
/// Submitting the form (Enter in the search field or the Apply button)
/// fires `on_apply`.
#[component]
pub fn FilterBar(
    /// Search text being edited
    search: RwSignal<String>,
    /// Category being edited; empty string means all
    category: RwSignal<String>,
    /// Start of the added-date range
    start_date: RwSignal<Option<NaiveDate>>,
    /// End of the added-date range
    end_date: RwSignal<Option<NaiveDate>>,
    /// Available category labels
    categories: Signal<Vec<String>>,
    /// Callback when filters are applied
    on_apply: Callback<()>,
    /// Callback when filters are cleared
    on_clear: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_apply.run(());
    };

    view! {
        <form on:submit=on_submit class="flex flex-wrap items-end gap-4">
            <div class="flex-1 min-w-48">
                <label class="flex flex-col gap-1 text-sm font-medium text-gray-600">
                    "Search"
                    <TextInput value=search placeholder="Search products..." input_type="search" />
                </label>
            </div>

            <label class="flex flex-col gap-1 text-sm font-medium text-gray-600">
                "Category"
                <CategorySelect selected=category categories=categories />
            </label>

            <DateField value=start_date label="Start Date" />
            <DateField value=end_date label="End Date" />

            <div class="flex gap-2">
                <Button button_type="submit">"Apply"</Button>
                <SecondaryButton on_click=on_clear>"Clear"</SecondaryButton>
            </div>
        </form>
    }
}
