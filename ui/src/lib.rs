//! HackMate page client.
//!
//! Loaded as a wasm module by the server-rendered pages. On start it attaches
//! the document click dispatcher and, once the DOM is ready, runs each
//! feature initializer exactly once.

use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::prelude::*;

mod animation;
mod api;
mod bootstrap;
mod dispatcher;
mod dom;
mod forms;
mod notifications;
mod search;
mod state;
mod tooltips;
mod views;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() {
    dioxus_logger::initialize_default();

    let Some(document) = dom::document() else {
        tracing::error!("No document available, page client disabled");
        return;
    };

    dispatcher::init(&document);

    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_| init());
    } else {
        init();
    }
}

fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    state::load_config();

    notifications::init();
    search::init();
    forms::init();
    animation::init();
    tooltips::init();

    tracing::info!("HackMate page client initialized");
}
