//! Users Page
//!
//! Every user profile with team, fitness level and points.

use leptos::*;

use crate::api::Resource;
use crate::components::format::{count_or_zero, text_or_na};
use crate::components::{resource_list, Cell, Column, ResourcePage, Tone};
use crate::state::{present, User};

pub fn users_page() -> ResourcePage<User> {
    ResourcePage {
        resource: Resource::Users,
        icon: "👥",
        title: "Users",
        subtitle: "Manage and view all user profiles",
        empty_icon: "📋",
        empty_message: "No users found",
        columns: vec![
            Column::new("ID", id_cell),
            Column::new("Name", |user: &User, _| Cell::strong(text_or_na(present(&user.name)))),
            Column::new("Email", email_cell),
            Column::new("Team", |user: &User, _| Cell::text(text_or_na(present(&user.team)))),
            Column::new("Fitness Level", |user: &User, _| {
                Cell::badge(Tone::Info, text_or_na(present(&user.fitness_level)))
            }),
            Column::new("Points", |user: &User, _| {
                Cell::text(count_or_zero(present(&user.total_points)))
            }),
        ],
    }
}

fn id_cell(user: &User, _: usize) -> Cell {
    match present(&user.id) {
        Some(id) => Cell::badge(Tone::Primary, id.to_string()),
        None => Cell::placeholder(),
    }
}

fn email_cell(user: &User, _: usize) -> Cell {
    match present(&user.email) {
        Some(email) => Cell::Email(email.to_string()),
        None => Cell::placeholder(),
    }
}

/// Users list view
#[component]
pub fn Users() -> impl IntoView {
    resource_list(users_page())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::decode_records;

    #[test]
    fn test_columns() {
        assert_eq!(
            users_page().headers(),
            vec!["ID", "Name", "Email", "Team", "Fitness Level", "Points"]
        );
    }

    #[test]
    fn test_full_row() {
        let users: Vec<User> = decode_records(
            r#"[{"id": "u1", "name": "Steve Rogers", "email": "cap@avengers.org",
                 "team": "Team Marvel", "fitness_level": "advanced", "total_points": 950}]"#,
        )
        .unwrap();
        let rows = users_page().rows(&users);
        assert_eq!(
            rows,
            vec![vec![
                Cell::badge(Tone::Primary, "u1"),
                Cell::strong("Steve Rogers"),
                Cell::Email("cap@avengers.org".to_string()),
                Cell::text("Team Marvel"),
                Cell::badge(Tone::Info, "advanced"),
                Cell::text("950"),
            ]]
        );
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let users: Vec<User> = decode_records(r#"{"results": [{}]}"#).unwrap();
        let rows = users_page().rows(&users);
        assert_eq!(
            rows[0],
            vec![
                Cell::placeholder(),
                Cell::strong("N/A"),
                Cell::placeholder(),
                Cell::text("N/A"),
                Cell::badge(Tone::Info, "N/A"),
                Cell::text("0"),
            ]
        );
    }
}
