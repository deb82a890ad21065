//! Core domain + application logic for the Telegram info service.
//!
//! This crate is intentionally framework-agnostic. The Telegram client and the
//! HTTP layer live behind ports (traits) implemented in adapter crates.

pub mod age;
pub mod config;
pub mod dc;
pub mod entity;
pub mod errors;
pub mod logging;
pub mod ports;
pub mod resolver;
pub mod view;

pub use errors::{Error, Result};
