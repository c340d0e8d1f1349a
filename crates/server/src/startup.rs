use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::Router;
use common::{env, utils::logging::init_logging_from_env};
use configs::AppConfig;
use migration::MigratorTrait;
use service::preference::repo::seaorm::SeaOrmPreferenceRepository;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, auth};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load settings from config.toml, or from environment variables when the file is absent.
///
/// A present but invalid file is an error; so is a missing JWT secret.
fn load_settings() -> anyhow::Result<AppConfig> {
    let path = env::var_or("CONFIG_PATH", "config.toml");
    let mut cfg = if Path::new(&path).exists() {
        configs::load_from_file(&path)?
    } else {
        warn!(%path, "config file not found; using environment");
        let mut cfg = AppConfig::default();
        cfg.server.host = env::var_or("SERVER_HOST", "127.0.0.1");
        cfg.server.port = env::parse_var::<u16>("SERVER_PORT").unwrap_or(8080);
        cfg.server.worker_threads = env::parse_var::<usize>("TOKIO_WORKER_THREADS");
        cfg
    };
    // DATABASE_URL / JWT_SECRET fill blanks; an empty secret is rejected here
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: connect, migrate, build the app and run the HTTP server until Ctrl+C
pub async fn run() -> anyhow::Result<()> {
    env::load_dotenv();
    init_logging_from_env();

    let cfg = load_settings()?;

    // DB connection + schema
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;

    let repo = Arc::new(SeaOrmPreferenceRepository::new(db));
    let state = auth::ServerState::new(repo, auth::ServerAuthConfig { jwt_secret: cfg.auth.jwt_secret.clone() });

    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting member preferences server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
