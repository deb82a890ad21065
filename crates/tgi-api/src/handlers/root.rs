//! GET / — status page with a JSON fallback.

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use tracing::debug;

use crate::AppState;

/// Serve the static status page if it is readable; a missing or unreadable
/// file degrades to a JSON descriptor instead of an error.
pub async fn root_handler(state: web::Data<AppState>) -> impl Responder {
    match tokio::fs::read_to_string(&state.status_page).await {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            debug!(
                "status page {} not served ({e}), using JSON fallback",
                state.status_page.display()
            );
            HttpResponse::Ok().json(json!({
                "success": true,
                "message": "Telegram Info API is running",
                "api_name": "Telegram Info API",
                "status": "Running",
                "endpoints": {
                    "/info": "Get Telegram entity information (requires username parameter)",
                    "/health": "API health check and detailed information",
                },
                "usage_example": "/info?username=telegram",
            }))
        }
    }
}
