//! Kitchen Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod forms;
mod logging;
mod models;
mod store;
mod sync;
mod views;

use app::App;
use config::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ApiConfig::load();
    logging::init(config.level_filter());
    log::info!("[app] backend at {}", config.base_url);

    mount_to_body(move || view! { <App config=config /> });
}
