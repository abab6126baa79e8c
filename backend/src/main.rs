//! Backend entry-point: loads configuration, applies migrations, serves the
//! user endpoints with OpenAPI docs, and drains on SIGINT or SIGTERM.

mod server;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use color_eyre::eyre::{Context, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use mobility_api::config::{DatabaseSettings, ServerSettings, load_dotenv};
use mobility_api::inbound::http::health::HealthState;
use mobility_api::outbound::persistence::{DbPool, run_pending_migrations};
use server::{ServerConfig, create_server, shutdown_on_signal};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // Seed the environment before the tracing filter reads `RUST_LOG`.
    let dotenv_loaded = load_dotenv().wrap_err("load .env file")?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
    if dotenv_loaded {
        info!("loaded environment from .env");
    }

    let database = DatabaseSettings::from_env().wrap_err("load database settings")?;
    let listener = ServerSettings::from_env().wrap_err("load server settings")?;
    let pool_config = database.pool_config().wrap_err("resolve database settings")?;
    let bind_addr = listener.bind_addr().wrap_err("resolve listener address")?;

    let database_url = pool_config.database_url().to_owned();
    let applied = web::block(move || run_pending_migrations(&database_url))
        .await
        .map_err(|e| eyre!("migration task failed: {e}"))?
        .wrap_err("apply database migrations")?;
    info!(applied, "database schema up to date");

    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("build database pool")?;

    let config = ServerConfig::new(bind_addr, pool);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new("mobility")
            .endpoint("/metrics")
            .build()
    }));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(shutdown_on_signal(health_state, server.handle()));
    info!(%bind_addr, "listening");
    server.await?;
    Ok(())
}

/// Build Prometheus middleware, serving without metrics when registration fails.
#[cfg(feature = "metrics")]
fn initialize_metrics<F, E>(make: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    match make() {
        Ok(metrics) => Some(metrics),
        Err(e) => {
            warn!(error = %e, "metrics disabled: Prometheus setup failed");
            None
        }
    }
}
