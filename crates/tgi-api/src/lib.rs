//! HTTP surface for the Telegram info service.
//!
//! Route registration and handlers live here; the binary crate stays a thin
//! entrypoint. All platform access goes through the `LookupPort` trait
//! object in [`AppState`], so tests substitute a fake session.

use std::{path::PathBuf, sync::Arc};

use tgi_core::ports::LookupPort;

pub mod handlers;
pub mod routes;

/// Shared per-worker state. The session is created before the server starts
/// and never mutated afterwards; concurrent reads need no locking.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<dyn LookupPort>,
    pub status_page: PathBuf,
    pub default_photo_size: u32,
}

impl AppState {
    pub fn new(lookup: Arc<dyn LookupPort>, status_page: PathBuf, default_photo_size: u32) -> Self {
        Self {
            lookup,
            status_page,
            default_photo_size,
        }
    }
}
