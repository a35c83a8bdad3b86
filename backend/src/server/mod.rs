//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use std::future::Future;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use classifieds::Trace;
#[cfg(debug_assertions)]
use classifieds::doc::ApiDoc;
use classifieds::inbound::http::health::{HealthState, live, ready};
use classifieds::inbound::http::state::HttpState;
use classifieds::inbound::http::{api_scope, not_found_service};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(not_found_service())
}

/// Construct an Actix HTTP server around the classifieds ports.
///
/// # Parameters
/// - `health_state`: shared readiness state, marked ready once bound.
/// - `http_state`: driving ports the handlers call into.
/// - `config`: pre-built [`ServerConfig`] carrying the bind address.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: HttpState,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(http_state);
    let ServerConfig { bind_addr } = config;

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

/// Wait for `signal`, fail the liveness probe, then stop `handle` gracefully.
///
/// A listener error leaves the server running and liveness untouched.
pub async fn drain_on<F>(health_state: web::Data<HealthState>, handle: ServerHandle, signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(error) = signal.await {
        warn!(%error, "shutdown signal listener failed");
        return;
    }
    health_state.mark_unhealthy();
    info!("liveness drained, stopping server");
    handle.stop(true).await;
}
