//! Leaderboard Page
//!
//! Entries arrive ranked by the backend; rank is display position.

use leptos::*;

use crate::api::Resource;
use crate::components::format::{count_or_zero, rank_cell};
use crate::components::{resource_list, Cell, Column, ResourcePage, Tone};
use crate::state::{present, LeaderboardEntry};

pub fn leaderboard_page() -> ResourcePage<LeaderboardEntry> {
    ResourcePage {
        resource: Resource::Leaderboard,
        icon: "🏅",
        title: "Leaderboard",
        subtitle: "Compete and climb the rankings",
        empty_icon: "🏅",
        empty_message: "No leaderboard entries found",
        columns: vec![
            Column::new("Rank", |_: &LeaderboardEntry, index| rank_cell(index)),
            Column::new("User", |entry: &LeaderboardEntry, _| {
                entry
                    .display_user()
                    .map_or_else(Cell::placeholder, |user| Cell::strong(user.to_string()))
            }),
            Column::new("Team", |entry: &LeaderboardEntry, _| {
                entry
                    .display_team()
                    .map_or_else(Cell::placeholder, |team| Cell::badge(Tone::Primary, team.to_string()))
            }),
            Column::new("Total Calories Burned", |entry: &LeaderboardEntry, _| {
                Cell::badge(
                    Tone::Warning,
                    format!("{} cal", count_or_zero(present(&entry.total_calories_burned))),
                )
            }),
            Column::new("Activities Completed", |entry: &LeaderboardEntry, _| {
                Cell::text(count_or_zero(present(&entry.activities_count)))
            }),
            Column::new("Points", |entry: &LeaderboardEntry, _| {
                Cell::badge(
                    Tone::Success,
                    format!("{} pts", count_or_zero(present(&entry.points))),
                )
            }),
        ],
    }
}

/// Leaderboard list view
#[component]
pub fn Leaderboard() -> impl IntoView {
    resource_list(leaderboard_page())
}
