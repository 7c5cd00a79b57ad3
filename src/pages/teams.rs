//! Teams Page

use leptos::*;

use crate::api::Resource;
use crate::components::format::{count_or_zero, format_date, hash_id_cell};
use crate::components::{resource_list, Cell, Column, ResourcePage, Tone};
use crate::state::{present, Team};

pub fn teams_page() -> ResourcePage<Team> {
    ResourcePage {
        resource: Resource::Teams,
        icon: "🏆",
        title: "Teams",
        subtitle: "Create and manage competitive teams",
        empty_icon: "🏆",
        empty_message: "No teams found",
        columns: vec![
            Column::new("ID", |team: &Team, _| hash_id_cell(present(&team.id))),
            Column::new("Name", |team: &Team, _| {
                present(&team.name).map_or_else(Cell::placeholder, |name| Cell::strong(name.to_string()))
            }),
            Column::new("Description", |team: &Team, _| {
                Cell::text_or_placeholder(present(&team.description))
            }),
            Column::new("Created At", |team: &Team, _| {
                Cell::text(format_date(present(&team.created_at)))
            }),
            Column::new("Members", members_cell),
        ],
    }
}

fn members_cell(team: &Team, _: usize) -> Cell {
    let count = team.member_count();
    Cell::badge(Tone::Info, format!("{} members", count_or_zero(count.as_ref())))
}

/// Teams list view
#[component]
pub fn Teams() -> impl IntoView {
    resource_list(teams_page())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::decode_records;

    #[test]
    fn test_columns() {
        assert_eq!(
            teams_page().headers(),
            vec!["ID", "Name", "Description", "Created At", "Members"]
        );
    }

    #[test]
    fn test_rows() {
        let teams: Vec<Team> = decode_records(
            r#"[
                {"id": 1, "name": "Team Marvel", "description": "Earth's mightiest",
                 "created_at": "2024-03-15T00:00:00Z", "members_count": 4},
                {"id": 2, "name": "Team DC", "created_at": "soon", "members": ["a", "b"]}
            ]"#,
        )
        .unwrap();
        let rows = teams_page().rows(&teams);
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            vec![
                Cell::badge(Tone::Primary, "#1"),
                Cell::strong("Team Marvel"),
                Cell::text("Earth's mightiest"),
                Cell::text("Mar 15, 2024"),
                Cell::badge(Tone::Info, "4 members"),
            ]
        );
        assert_eq!(rows[1][2], Cell::placeholder());
        assert_eq!(rows[1][3], Cell::text("Invalid Date"));
        assert_eq!(rows[1][4], Cell::badge(Tone::Info, "2 members"));
    }

    #[test]
    fn test_missing_date_and_members() {
        let teams: Vec<Team> = decode_records(r#"[{"name": "Solo"}]"#).unwrap();
        let row = &teams_page().rows(&teams)[0];
        assert_eq!(row[3], Cell::text("N/A"));
        assert_eq!(row[4], Cell::badge(Tone::Info, "0 members"));
    }
}
