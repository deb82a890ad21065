use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use tracing::info;

use tgi_api::{routes, AppState};
use tgi_core::config::Config;
use tgi_telegram::TelegramSession;

#[actix_web::main]
async fn main() -> Result<(), tgi_core::Error> {
    tgi_core::logging::init("tgi")?;

    let cfg = Config::load()?;

    // Authenticate before binding: no request is served without a session.
    let session = Arc::new(TelegramSession::start(&cfg).await?);
    let state = AppState::new(
        session.clone(),
        cfg.status_page.clone(),
        cfg.default_photo_size,
    );

    let bind_addr = (cfg.host.clone(), cfg.port);
    info!("starting HTTP server on {}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    // The server has stopped accepting and drained in-flight requests; only
    // now release the session.
    session.stop();
    info!("shutdown complete");

    Ok(())
}
