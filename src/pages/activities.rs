//! Activities Page
//!
//! Logged activities with duration, calories and date.

use leptos::*;

use crate::api::Resource;
use crate::components::format::{count_or_zero, format_date, hash_id_cell};
use crate::components::{resource_list, Cell, Column, ResourcePage, Tone};
use crate::state::{present, Activity};

pub fn activities_page() -> ResourcePage<Activity> {
    ResourcePage {
        resource: Resource::Activities,
        icon: "🏃",
        title: "Activities",
        subtitle: "Track your fitness activities and achievements",
        empty_icon: "📊",
        empty_message: "No activities found",
        columns: vec![
            Column::new("ID", |activity: &Activity, _| hash_id_cell(present(&activity.id))),
            Column::new("User", |activity: &Activity, _| {
                activity
                    .display_user()
                    .map_or_else(Cell::placeholder, |user| Cell::strong(user.to_string()))
            }),
            Column::new("Activity Type", |activity: &Activity, _| {
                present(&activity.activity_type).map_or_else(Cell::placeholder, |kind| {
                    Cell::badge(Tone::Success, kind.to_string())
                })
            }),
            Column::new("Duration (minutes)", duration_cell),
            Column::new("Calories Burned", |activity: &Activity, _| {
                Cell::badge(
                    Tone::Warning,
                    format!("{} cal", count_or_zero(present(&activity.calories_burned))),
                )
            }),
            Column::new("Date", |activity: &Activity, _| {
                Cell::text(format_date(present(&activity.date)))
            }),
        ],
    }
}

fn duration_cell(activity: &Activity, _: usize) -> Cell {
    match present(&activity.duration_minutes) {
        Some(minutes) => Cell::Measure {
            value: minutes.to_string(),
            unit: "min",
        },
        None => Cell::placeholder(),
    }
}

/// Activities list view
#[component]
pub fn Activities() -> impl IntoView {
    resource_list(activities_page())
}
