//! NoteHub Desktop Application
//!
//! Browse, search, create and delete notes stored in the NoteHub service.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod queries;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    // Load NOTEHUB_* variables from a .env file when present
    dotenvy::dotenv().ok();

    let filter = EnvFilter::from_default_env();
    let filter = match "notehub=debug".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting NoteHub...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("NoteHub")
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
