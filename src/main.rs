//! Annotrack
//!
//! A desktop editor for timed video annotations: a playback-synced marker
//! track with interval row packing and a property editor.

mod app;
mod components;
mod constants;
mod core;
mod error;
mod state;
mod track;
mod utils;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use log::info;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    info!("Annotrack starting...");

    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Annotrack")
                .with_inner_size(LogicalSize::new(1280.0, 800.0))
                .with_resizable(true),
        )
        .with_menu(None);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
