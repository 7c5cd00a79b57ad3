//! Resource List
//!
//! The one list view every page instantiates. A [`ResourcePage`] describes a
//! resource: its header text, empty-state copy and column schema. The view
//! fetches once on mount, then renders loading, error, empty or populated
//! states from a [`ListState`].

use std::rc::Rc;

use leptos::*;
use serde::de::DeserializeOwned;

use super::cell::{Cell, CellView};
use super::feedback::{EmptyState, ErrorPanel};
use super::loading::Loading;
use crate::api::{self, Resource};
use crate::config::AppConfig;
use crate::state::ListState;

/// A table column: header text plus a renderer given the record and its
/// position in the list.
pub struct Column<T> {
    pub header: &'static str,
    pub render: fn(&T, usize) -> Cell,
}

impl<T> Column<T> {
    pub fn new(header: &'static str, render: fn(&T, usize) -> Cell) -> Self {
        Self { header, render }
    }
}

/// Everything that differs between list views
pub struct ResourcePage<T> {
    pub resource: Resource,
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub empty_icon: &'static str,
    pub empty_message: &'static str,
    pub columns: Vec<Column<T>>,
}

impl<T> ResourcePage<T> {
    pub fn loading_message(&self) -> String {
        format!("Loading {}...", self.resource)
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.header).collect()
    }

    /// One row of cells per record, in list order.
    pub fn rows(&self, records: &[T]) -> Vec<Vec<Cell>> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                self.columns
                    .iter()
                    .map(|column| (column.render)(record, index))
                    .collect()
            })
            .collect()
    }
}

/// Mount a list view for `page`: issue the fetch and render its state.
pub fn resource_list<T>(page: ResourcePage<T>) -> impl IntoView
where
    T: DeserializeOwned + 'static,
{
    let config = use_context::<AppConfig>().unwrap_or_default();
    let (state, set_state) = create_signal(ListState::<T>::Loading);
    let resource = page.resource;

    // Fetch on mount; the effect tracks nothing, so it runs once
    create_effect(move |_| {
        let api_config = config.api.clone();
        spawn_local(async move {
            let result = api::fetch_records::<T>(&api_config, resource).await;
            if let Err(e) = &result {
                log::error!("Error fetching {}: {}", resource, e);
            }
            if set_state.try_set(ListState::from(result)).is_some() {
                log::debug!("Discarding {} response: view already unmounted", resource);
            }
        });
    });

    let page = Rc::new(page);

    move || state.with(|state| render_state(&page, state))
}

/// The view for one list state: spinner, error panel, or table.
pub fn render_state<T>(page: &ResourcePage<T>, state: &ListState<T>) -> View {
    if state.is_loading() {
        view! { <Loading message=page.loading_message() /> }.into_view()
    } else if let Some(e) = state.error() {
        view! { <ErrorPanel message=e.to_string() /> }.into_view()
    } else {
        render_table(page, state.items())
    }
}

fn render_table<T>(page: &ResourcePage<T>, records: &[T]) -> View {
    let span = page.columns.len().to_string();

    let body = if records.is_empty() {
        view! {
            <tr>
                <td colspan=span>
                    <EmptyState icon=page.empty_icon message=page.empty_message />
                </td>
            </tr>
        }
        .into_view()
    } else {
        page.rows(records)
            .into_iter()
            .map(|cells| view! {
                <tr class="border-t border-gray-700 odd:bg-gray-800/60">
                    {cells
                        .into_iter()
                        .map(|cell| view! { <td class="px-4 py-3"><CellView cell=cell /></td> })
                        .collect_view()}
                </tr>
            })
            .collect_view()
    };

    view! {
        <div class="space-y-6">
            <PageHeader icon=page.icon title=page.title subtitle=page.subtitle />

            <div class="bg-gray-800 rounded-xl overflow-x-auto border border-gray-700">
                <table class="w-full text-left">
                    <thead class="bg-gray-700 text-gray-300 text-sm uppercase">
                        <tr>
                            {page.headers()
                                .into_iter()
                                .map(|header| view! { <th class="px-4 py-3">{header}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
        </div>
    }
    .into_view()
}

/// Page title block
#[component]
fn PageHeader(
    icon: &'static str,
    title: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <h1 class="text-3xl font-bold">{icon}" "{title}</h1>
            <p class="text-gray-400 mt-1">{subtitle}</p>
        </div>
    }
}
