//! State Management
//!
//! Record types for the five resources and the per-view list state.

pub mod list;
pub mod records;

pub use list::ListState;
pub use records::{present, Activity, LeaderboardEntry, Scalar, Team, User, Workout};
