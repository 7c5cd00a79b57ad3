//! UI Components
//!
//! Reusable Leptos components for the list views.

pub mod cell;
pub mod feedback;
pub mod format;
pub mod loading;
pub mod nav;
pub mod resource_list;

pub use cell::{Cell, Tone};
pub use nav::Nav;
pub use resource_list::{resource_list, Column, ResourcePage};
