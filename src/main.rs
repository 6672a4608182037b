#![allow(warnings)]
//! Famhub Frontend Entry Point

mod api;
mod app;
mod cache;
mod components;
mod context;
mod controller;
mod models;
mod schedule;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
