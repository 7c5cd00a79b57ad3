//! Pages
//!
//! Top-level page components for each route.

pub mod activities;
pub mod home;
pub mod leaderboard;
pub mod teams;
pub mod users;
pub mod workouts;

pub use activities::Activities;
pub use home::Home;
pub use leaderboard::Leaderboard;
pub use teams::Teams;
pub use users::Users;
pub use workouts::Workouts;

use crate::api::Resource;

/// Navigation label for a view
pub fn nav_label(resource: Resource) -> &'static str {
    match resource {
        Resource::Users => "👥 Users",
        Resource::Teams => "🏆 Teams",
        Resource::Activities => "🏃 Activities",
        Resource::Workouts => "💪 Workouts",
        Resource::Leaderboard => "🏅 Leaderboard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_cover_every_view() {
        let links: Vec<_> = Resource::ALL
            .into_iter()
            .map(|resource| (resource.route(), nav_label(resource)))
            .collect();
        assert_eq!(
            links,
            vec![
                ("/users", "👥 Users"),
                ("/teams", "🏆 Teams"),
                ("/activities", "🏃 Activities"),
                ("/workouts", "💪 Workouts"),
                ("/leaderboard", "🏅 Leaderboard"),
            ]
        );
    }
}
