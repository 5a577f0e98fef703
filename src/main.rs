//! Codelance Admin Frontend Entry Point

mod models;
mod api;
mod config;
mod logger;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
