//! Bulletin Desktop Application
//!
//! A single-window app for keeping short news notes.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod paths;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bulletin_core=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Bulletin...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Bulletin")
            .with_inner_size(LogicalSize::new(680.0, 760.0)),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
