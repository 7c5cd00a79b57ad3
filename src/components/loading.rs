//! Loading Component
//!
//! Spinner shown while a view's fetch is in flight.

use leptos::*;

/// Spinner with a message, e.g. "Loading teams..."
#[component]
pub fn Loading(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12 space-x-3 text-gray-300" role="status">
            <div class="loading-spinner w-8 h-8" />
            <p>{message}</p>
        </div>
    }
}
