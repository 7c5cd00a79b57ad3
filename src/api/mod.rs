//! OctoFit REST API
//!
//! Client side of the fitness backend. Every view issues exactly one
//! `GET {base}/api/{resource}/` through [`fetch_records`].
//!
//! # Endpoints
//!
//! - `GET /api/users/`
//! - `GET /api/teams/`
//! - `GET /api/activities/`
//! - `GET /api/workouts/`
//! - `GET /api/leaderboard/`
//!
//! Each returns either a bare JSON array or an envelope `{"results": [...]}`.

pub mod client;
pub mod error;

pub use client::{fetch_records, Resource};
pub use error::{FetchError, FetchResult};
