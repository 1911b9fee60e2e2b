//! Task List Frontend Entry Point

mod models;
mod error;
mod task_list;
mod store;
mod context;
mod rows;
mod strings;
mod config;
mod logger;
mod commands;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_location();
    logger::init(config.log_level);
    log::info!("[APP] starting, log level {}", config.log_level);

    mount_to_body(App);
}
