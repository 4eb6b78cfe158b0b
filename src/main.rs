//! Kanban Board Frontend Entry Point

mod app;
mod components;
mod context;
mod logging;
mod models;
mod persistence;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logger();
    mount_to_body(App);
}
