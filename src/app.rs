//! App Root Component
//!
//! Main application component with routing and the configuration provider.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::config::AppConfig;
use crate::pages::{Activities, Home, Leaderboard, Teams, Users, Workouts};

/// Root application component
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Resolved once in `main`; every list view reads it from context
    provide_context(config);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/users" view=Users />
                        <Route path="/teams" view=Teams />
                        <Route path="/activities" view=Activities />
                        <Route path="/workouts" view=Workouts />
                        <Route path="/leaderboard" view=Leaderboard />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Static page footer
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-4 text-center text-sm text-gray-400">
            <p>"⚡ OctoFit Tracker ⚡"</p>
            <p>"Train hard. Compete harder. Climb the leaderboard."</p>
        </footer>
    }
}
