//! API route configuration.
//!
//! - GET /info   — look up a Telegram entity and return the formatted record
//! - GET /health — capability descriptor + live session connectivity
//! - GET /       — status page (HTML file if present, JSON fallback)

use actix_web::web;

use crate::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/info", web::get().to(handlers::info_handler))
        .route("/health", web::get().to(handlers::health_handler))
        .route("/", web::get().to(handlers::root_handler));
}
