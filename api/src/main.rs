use std::net::SocketAddr;

use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use store::AttendanceStore;
use tower_http::cors::CorsLayer;
use tracing_appender::rolling;
use util::{config, state::AppState};

#[tokio::main]
async fn main() {
    let _log_guard = init_logging(&config::log_file(), &config::log_level());

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server stopped");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let db = db::connect().await?;
    Migrator::up(&db, None).await?;

    let app_state = AppState::new(db, AttendanceStore::new());

    let cors = CorsLayer::very_permissive().expose_headers([CONTENT_DISPOSITION, CONTENT_TYPE]);
    let app = api::app(app_state).layer(cors);

    let addr: SocketAddr = format!("{}:{}", config::host(), config::port()).parse()?;
    tracing::info!(
        env = %config::env(),
        "Starting {} on http://{addr}",
        config::project_name()
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_logging(log_file: &str, log_level: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = config::log_to_stdout().then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
    });

    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("api=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    guard
}
