//! Workouts Page
//!
//! Personalized workout suggestions with a color-coded difficulty.

use leptos::*;

use crate::api::Resource;
use crate::components::format::{difficulty_cell, hash_id_cell};
use crate::components::{resource_list, Cell, Column, ResourcePage, Tone};
use crate::state::{present, Workout};

pub fn workouts_page() -> ResourcePage<Workout> {
    ResourcePage {
        resource: Resource::Workouts,
        icon: "💪",
        title: "Personalized Workouts",
        subtitle: "Custom workout suggestions based on your fitness level",
        empty_icon: "🏋️",
        empty_message: "No workouts found",
        columns: vec![
            Column::new("ID", |workout: &Workout, _| hash_id_cell(present(&workout.id))),
            Column::new("User", |workout: &Workout, _| {
                workout
                    .display_user()
                    .map_or_else(Cell::placeholder, |user| Cell::strong(user.to_string()))
            }),
            Column::new("Workout Type", |workout: &Workout, _| {
                workout
                    .display_type()
                    .map_or_else(Cell::placeholder, |kind| Cell::badge(Tone::Info, kind.to_string()))
            }),
            Column::new("Difficulty", |workout: &Workout, _| {
                difficulty_cell(workout.display_difficulty())
            }),
            Column::new("Duration (minutes)", |workout: &Workout, _| {
                match present(&workout.duration_minutes) {
                    Some(minutes) => Cell::Measure {
                        value: minutes.to_string(),
                        unit: "min",
                    },
                    None => Cell::placeholder(),
                }
            }),
            Column::new("Description", |workout: &Workout, _| {
                Cell::text_or_placeholder(present(&workout.description))
            }),
        ],
    }
}

/// Workouts list view
#[component]
pub fn Workouts() -> impl IntoView {
    resource_list(workouts_page())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::decode_records;

    #[test]
    fn test_columns() {
        assert_eq!(
            workouts_page().headers(),
            vec![
                "ID",
                "User",
                "Workout Type",
                "Difficulty",
                "Duration (minutes)",
                "Description"
            ]
        );
    }

    #[test]
    fn test_difficulty_column() {
        let workouts: Vec<Workout> = decode_records(
            r#"[{"difficulty": "easy"}, {"difficulty": "medium"},
                {"difficulty": "hard"}, {"difficulty": "legendary"}]"#,
        )
        .unwrap();
        let badges: Vec<_> = workouts_page()
            .rows(&workouts)
            .into_iter()
            .map(|row| row[3].clone())
            .collect();
        assert_eq!(
            badges,
            vec![
                Cell::badge(Tone::Success, "Easy"),
                Cell::badge(Tone::Warning, "Medium"),
                Cell::badge(Tone::Danger, "Hard"),
                Cell::badge(Tone::Neutral, "legendary"),
            ]
        );
    }

    #[test]
    fn test_row_with_aliases_and_no_description() {
        let workouts: Vec<Workout> = decode_records(
            r#"[{"id": 9, "user_name": "Carol", "name": "Flight Drills",
                 "difficulty_level": "hard", "duration_minutes": 30}]"#,
        )
        .unwrap();
        let rows = workouts_page().rows(&workouts);
        assert_eq!(
            rows[0],
            vec![
                Cell::badge(Tone::Primary, "#9"),
                Cell::strong("Carol"),
                Cell::badge(Tone::Info, "Flight Drills"),
                Cell::badge(Tone::Danger, "Hard"),
                Cell::Measure {
                    value: "30".to_string(),
                    unit: "min"
                },
                Cell::placeholder(),
            ]
        );
    }
}
