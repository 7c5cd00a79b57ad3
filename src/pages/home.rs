//! Home Page
//!
//! Static landing section linking to every view.

use leptos::*;
use leptos_router::*;

use crate::api::Resource;

/// Call to action for one view: (button label, button color)
fn call_to_action(resource: Resource) -> (&'static str, &'static str) {
    match resource {
        Resource::Users => ("Meet the Users", "bg-blue-600 hover:bg-blue-700"),
        Resource::Teams => ("Form Teams", "bg-red-600 hover:bg-red-700"),
        Resource::Activities => ("Log Activities", "bg-yellow-500 hover:bg-yellow-600 text-gray-900"),
        Resource::Workouts => ("Start Training", "bg-cyan-600 hover:bg-cyan-700"),
        Resource::Leaderboard => ("View Leaderboard", "bg-green-600 hover:bg-green-700"),
    }
}

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-10 border border-gray-700">
            <h1 class="text-4xl font-bold mb-4">"Welcome to OctoFit Tracker ⚡"</h1>
            <p class="text-xl text-gray-300">
                "Power up your fitness journey, unite your team, and climb the leaderboard!"
            </p>
            <hr class="my-6 border-gray-700" />
            <p class="text-gray-400 mb-8">
                "Log activities, follow personalized workouts, and compete with your classmates."
            </p>

            <div class="flex flex-wrap gap-3">
                {Resource::ALL
                    .into_iter()
                    .map(|resource| {
                        let (label, color) = call_to_action(resource);
                        view! {
                            <A
                                href=resource.route()
                                class=format!("px-6 py-3 rounded-lg font-medium transition-colors {}", color)
                            >
                                {label}
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
