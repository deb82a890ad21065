//! GET /health — capability descriptor and live connectivity.

use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use crate::AppState;

/// Always 200, connected or not; load balancers poll this.
pub async fn health_handler(state: web::Data<AppState>) -> impl Responder {
    let bot_status = if state.lookup.is_connected() {
        "connected"
    } else {
        "disconnected"
    };

    HttpResponse::Ok().json(json!({
        "success": true,
        "status": "API is running",
        "api_info": {
            "name": "Telegram Info API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Telegram entity information retrieval service",
            "uptime_check": Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            "bot_status": format!("Bot client: {bot_status}"),
            "features": [
                "User & Bot Information",
                "Channel & Group Details",
                "Account Age Estimation",
                "Data Center Location",
                "Verification Status",
                "Profile Photo URLs",
            ],
        },
        "endpoints": {
            "/": "Status page",
            "/info": "Get Telegram entity information",
            "/health": "API health check and information",
        },
        "stats": {
            "supported_entities": ["Users", "Bots", "Channels", "Groups", "Supergroups"],
            "data_centers": 15,
            "response_format": "JSON",
            "authentication": "Bot Token Based",
        },
    }))
}
