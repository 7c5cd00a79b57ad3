//! Navigation Component
//!
//! Header navigation bar with brand and links to the five views.

use leptos::*;
use leptos_router::*;

use crate::api::Resource;
use crate::pages::nav_label;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"⚡"</span>
                        <span class="text-xl font-bold text-white">"OctoFit Tracker"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        {Resource::ALL
                            .into_iter()
                            .map(|resource| view! { <NavLink resource=resource /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Link to one resource view, highlighted while its route is active
#[component]
fn NavLink(resource: Resource) -> impl IntoView {
    view! {
        <A
            href=resource.route()
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {nav_label(resource)}
        </A>
    }
}
