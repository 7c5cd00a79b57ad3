//! Table Cells
//!
//! A small vocabulary of cell shapes the resource tables are built from.
//! Column renderers produce a [`Cell`]; [`CellView`] turns it into markup.

use leptos::*;

use crate::state::Scalar;

/// Placeholder shown for absent optional fields
pub const EM_DASH: &str = "—";

/// Badge color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Info,
    Success,
    Warning,
    Danger,
    Neutral,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Primary => "bg-blue-600 text-white",
            Tone::Info => "bg-cyan-400 text-gray-900",
            Tone::Success => "bg-green-600 text-white",
            Tone::Warning => "bg-yellow-400 text-gray-900",
            Tone::Danger => "bg-red-600 text-white",
            Tone::Neutral => "bg-gray-600 text-white",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Strong(String),
    /// Bold value followed by a unit, e.g. "**30** min"
    Measure { value: String, unit: &'static str },
    Badge { tone: Tone, text: String },
    Email(String),
    Medal(&'static str),
    /// Dimmed placeholder for a missing value
    Muted(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn strong(value: impl Into<String>) -> Self {
        Cell::Strong(value.into())
    }

    pub fn badge(tone: Tone, text: impl Into<String>) -> Self {
        Cell::Badge {
            tone,
            text: text.into(),
        }
    }

    pub fn placeholder() -> Self {
        Cell::Muted(EM_DASH.to_string())
    }

    /// Plain text for the value, or the em-dash placeholder.
    pub fn text_or_placeholder(value: Option<&Scalar>) -> Self {
        value
            .filter(|v| !v.is_blank())
            .map_or_else(Cell::placeholder, |v| Cell::text(v.to_string()))
    }
}

#[cfg(test)]
impl Cell {
    /// The text a reader sees, ignoring styling.
    pub fn plain_text(&self) -> String {
        match self {
            Cell::Text(s) | Cell::Strong(s) | Cell::Email(s) | Cell::Muted(s) => s.clone(),
            Cell::Measure { value, unit } => format!("{} {}", value, unit),
            Cell::Badge { text, .. } => text.clone(),
            Cell::Medal(icon) => icon.to_string(),
        }
    }
}

/// Render a single cell's contents
#[component]
pub fn CellView(cell: Cell) -> impl IntoView {
    match cell {
        Cell::Text(text) => view! { <span>{text}</span> }.into_view(),
        Cell::Strong(text) => view! { <strong>{text}</strong> }.into_view(),
        Cell::Measure { value, unit } => view! {
            <span><strong>{value}</strong>" "{unit}</span>
        }
        .into_view(),
        Cell::Badge { tone, text } => view! {
            <span class=format!(
                "inline-block text-xs font-semibold px-2 py-0.5 rounded-full {}",
                tone.class()
            )>
                {text}
            </span>
        }
        .into_view(),
        Cell::Email(address) => view! {
            <a href=format!("mailto:{}", address) class="text-primary-400 hover:underline">
                {address}
            </a>
        }
        .into_view(),
        Cell::Medal(icon) => view! {
            <div class="text-2xl min-w-[40px]">{icon}</div>
        }
        .into_view(),
        Cell::Muted(text) => view! { <span class="text-gray-500">{text}</span> }.into_view(),
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use super::*;
    use crate::components::format::{difficulty_cell, rank_cell};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_cell(cell: Cell) -> web_sys::HtmlElement {
        let document = leptos::document();
        let host = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document.body().unwrap().append_child(&host).unwrap();
        let parent = host.clone();
        leptos::mount_to(parent, move || view! { <CellView cell=cell /> });
        host
    }

    #[wasm_bindgen_test]
    fn renders_hard_badge_in_red() {
        let html = mount_cell(difficulty_cell(Some(&Scalar::from("hard")))).inner_html();
        assert!(html.contains("bg-red-600"));
        assert!(html.contains("Hard"));
    }

    #[wasm_bindgen_test]
    fn renders_numeric_rank_badge() {
        let html = mount_cell(rank_cell(4)).inner_html();
        assert!(html.contains('5'));
        assert!(html.contains("rounded-full"));
    }

    #[wasm_bindgen_test]
    fn renders_mailto_link() {
        let html = mount_cell(Cell::Email("wanda@westview.io".to_string())).inner_html();
        assert!(html.contains("mailto:wanda@westview.io"));
    }
}
