use log::{debug, info};
use web_sys::{Document, Window};

mod a11y;
mod active_nav;
mod analytics;
mod config;
mod debounce;
mod dom;
mod header;
mod keyboard;
mod lazy_load;
mod modal;
mod page;
mod reveal;
mod scroll;
mod share;
mod slideshow;
mod smooth_scroll;
mod viewport;

use keyboard::KeyRouter;
use modal::ScrollLock;
use scroll::ScrollDispatcher;

fn run(name: &str, result: Option<()>) {
    match result {
        Some(()) => debug!("Initialized {}", name),
        None => debug!("Skipped {}: required elements missing", name),
    }
}

fn init_page(window: &Window, document: &Document) {
    let lock = ScrollLock::new(document.body());
    let scroll = ScrollDispatcher::new(window);
    let mut keys = KeyRouter::default();

    run("slideshow", slideshow::init(document, &mut keys));
    run("smooth scroll", smooth_scroll::init(window, document));
    run("scroll reveal", reveal::init(document));
    run("privacy modal", modal::privacy::init(document, &lock, &mut keys));
    run("news modal", modal::news::init(document, &lock, &mut keys));
    run("header", header::init(document, &scroll));
    run("active navigation", active_nav::init(document, &scroll));
    run("lazy images", lazy_load::init(document));
    run("accessibility", a11y::init(document, &mut keys));

    keys.install(document);
    scroll.install();
    page::refresh_on_resize(window, &scroll);
    info!("Page behavior ready");
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    info!("Starting page behavior");
    page::log_errors(&window);
    page::mark_loaded(&window, &document);

    let ready_window = window.clone();
    let ready_document = document.clone();
    dom::on_ready(&document, move || init_page(&ready_window, &ready_document));
}
