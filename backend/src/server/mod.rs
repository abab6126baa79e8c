//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;

pub use config::ServerConfig;

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use mobility_api::Trace;
#[cfg(debug_assertions)]
use mobility_api::doc::ApiDoc;
use mobility_api::inbound::http::health::{HealthState, live, ready};
use mobility_api::inbound::http::state::HttpState;
use mobility_api::inbound::http::users::{self, not_found};
use mobility_api::outbound::persistence::DieselUserRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use std::io;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(users::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(not_found))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The user endpoints are backed by a [`DieselUserRepository`] over the
/// configured pool. Readiness is signalled once the socket is bound.
/// Actix's own signal handling is disabled; pair the returned server with
/// [`shutdown_on_signal`] so liveness fails before connections drain.
///
/// # Errors
/// Propagates [`io::Error`] when binding the socket or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        db_pool,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;
    let http_state = web::Data::new(HttpState::from_repository(Arc::new(
        DieselUserRepository::new(db_pool),
    )));

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .disable_signals()
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

/// Fail liveness, then stop the server and wait for in-flight requests.
pub async fn drain(health_state: web::Data<HealthState>, handle: ServerHandle) {
    health_state.mark_unhealthy();
    handle.stop(true).await;
}

async fn shutdown_signal() -> io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result,
            _ = terminate.recv() => Ok(()),
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}

/// Wait for SIGINT or SIGTERM and [`drain`] the server.
///
/// If the signal handlers cannot be installed the server keeps running and
/// the failure is logged.
pub async fn shutdown_on_signal(health_state: web::Data<HealthState>, handle: ServerHandle) {
    match shutdown_signal().await {
        Ok(()) => {
            info!("shutdown signal received; draining");
            drain(health_state, handle).await;
        }
        Err(e) => warn!(error = %e, "signal handlers unavailable; graceful shutdown disabled"),
    }
}
