//! Error and empty-state panels.

use leptos::*;

/// Persistent error panel for a failed fetch
#[component]
pub fn ErrorPanel(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3 bg-red-900/40 border border-red-700 text-red-200 rounded-xl px-6 py-4">
            <span class="text-2xl">"⚠️"</span>
            <p><strong>"Error: "</strong>{message}</p>
        </div>
    }
}

/// Placeholder for a list that loaded with no records
#[component]
pub fn EmptyState(
    icon: &'static str,
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 text-gray-400">
            <div class="text-4xl mb-2">{icon}</div>
            <p>{message}</p>
        </div>
    }
}
