//! Superior CV page behaviors
//!
//! Mounts the page components (drawer, scroll-to-top, theme toggle,
//! password field, share panel, resume search) into server-rendered pages.

mod api;
mod app;
mod components;
mod config;
mod error;
mod models;
mod platform;
mod share_links;
mod state;

use config::PageConfig;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", err).into());
    }

    let mounted = app::mount_page(PageConfig::default());
    log::info!("[app] mounted {} components", mounted);
}
