//! OctoFit Tracker UI
//!
//! Fitness tracking front-end built with Leptos (WASM).
//!
//! # Features
//!
//! - Users, teams, activities, workouts and leaderboard tables
//! - One fetch per view with loading, empty and error states
//! - Hosted or local backend selected at build time
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It reads the OctoFit REST API over HTTP and never writes back.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod pages;
mod state;

use config::{AppConfig, LoggingConfig};

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    init_logging(&config.logging);

    log::info!("OctoFit Tracker UI v{}", env!("CARGO_PKG_VERSION"));
    match config.api.hosted_identifier() {
        Some(name) => log::info!("Using hosted API for codespace {}", name),
        None => log::info!("Using local API on port {}", config.api.port),
    }

    // Mount the app to the document body
    mount_to_body(move || view! { <app::App config=config.clone() /> });
}

fn init_logging(logging: &LoggingConfig) {
    let (level, invalid) = match logging.level() {
        Ok(level) => (level, None),
        Err(e) => (log::Level::Info, Some(e)),
    };

    if console_log::init_with_level(level).is_err() {
        return;
    }

    if let Some(e) = invalid {
        log::warn!("{}; falling back to {}", e, level);
    }
}
