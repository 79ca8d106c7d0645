//! Loca API server binary.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use loca_core::auth::jwt::JwtCodec;
use loca_core::storage::FileStore;
use loca_core::store::postgres::PgStore;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "loca_server", about = "Loca rental listing API server")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = 4000)]
    port: u16,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/loca"
    )]
    database_url: String,

    /// Root directory for uploaded rental pictures.
    #[arg(long, env = "UPLOAD_DIR", default_value = "uploads")]
    upload_dir: PathBuf,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,loca_api=debug,loca_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    info!(database_url = %args.database_url, port = args.port, "starting loca_server");

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&args.database_url)
        .await?;

    info!("running database migrations");
    loca_core::migrate::migrate(&pool).await?;

    // A weak secret fails here, before the listener ever opens.
    let jwt_secret = loca_core::auth::jwt::resolve_jwt_secret();
    let jwt = Arc::new(JwtCodec::new(&jwt_secret)?);

    let files = FileStore::new(&args.upload_dir);
    files.init().await?;

    let config = loca_api::config::ApiConfig {
        bind_addr: format!("{}:{}", args.host, args.port),
        public_paths: loca_api::config::default_public_paths(),
    };

    let store = Arc::new(PgStore::new(pool));
    let state = loca_api::AppState {
        users: store.clone(),
        rentals: store.clone(),
        messages: store,
        files: Arc::new(files),
        jwt,
        config: config.clone(),
    };

    let app = loca_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
