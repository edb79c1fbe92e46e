//! Aquaweb - Pool Controller Web UI
//!
//! Core library for the embedded status/control HTTP server.

pub mod config;
pub mod html;
pub mod http;
pub mod pages;
pub mod pool;
pub mod server;
