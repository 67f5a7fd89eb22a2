// XTSY Travellers Hostel landing page, Leptos 0.8 CSR
// XTSY Travellers Hostel, Shillong (c)2025

mod logging;

use leptos::prelude::*;
use tracing::level_filters::LevelFilter;
use xtsy_site::components::App;
use xtsy_site::styles::SITE_CSS;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    });

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting landing page");
    leptos::mount::mount_to_body(|| {
        view! {
            <style>{SITE_CSS}</style>
            <App />
        }
    });
}
