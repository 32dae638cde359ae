//! Browser-independent logic for the HackMate page client.
//!
//! Everything here is plain Rust so it can be tested natively: the CSRF cookie
//! lookup, the REST endpoint table and payloads, the `Api`/`View` seams the
//! wasm layer implements, visibility rules for search and category filters,
//! alert/modal markup, click classification, the confirmation flows, and the
//! virtual-time timers (poll schedule and debouncer) that drive them.

pub mod api;
pub mod config;
pub mod csrf;
pub mod dispatch;
pub mod endpoints;
pub mod error;
pub mod filter;
pub mod flows;
pub mod forms;
pub mod lifecycle;
pub mod markers;
pub mod markup;
pub mod notifications;
pub mod schedule;
