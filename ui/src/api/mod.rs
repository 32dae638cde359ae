pub mod client;
pub mod exports;
