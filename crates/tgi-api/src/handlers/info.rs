//! GET /info — entity lookup and formatting.

use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use tgi_core::{errors::Error, resolver, view};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct InfoQuery {
    /// Handle, numeric id, or a pasted t.me link.
    pub username: String,
    /// Profile photo size; server default when omitted.
    pub size: Option<u32>,
}

/// Resolve the handle, format the entity, recompute the photo URL at the
/// requested size. `NotFound` and platform errors map to 404 with the
/// reason; anything unexpected is a generic 500, detail only in the log.
pub async fn info_handler(
    state: web::Data<AppState>,
    query: web::Query<InfoQuery>,
) -> impl Responder {
    let size = query.size.unwrap_or(state.default_photo_size);

    match resolver::resolve(state.lookup.as_ref(), &query.username).await {
        Ok(entity) => {
            let record = view::render(&entity, Utc::now().date_naive(), size);
            HttpResponse::Ok().json(record)
        }
        Err(e @ (Error::NotFound | Error::Platform(_))) => {
            error!("lookup failed for {:?}: {e}", query.username);
            HttpResponse::NotFound().json(json!({
                "success": false,
                "error": e.to_string(),
            }))
        }
        Err(e) => {
            error!("internal fault serving /info for {:?}: {e}", query.username);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Internal server error",
            }))
        }
    }
}
