/// Review Scheduler server binary
///
/// Loads configuration, initializes logging and the database pool, and
/// starts the Axum HTTP server.
use clap::Parser;
use review_scheduler::{clock::UtcClock, config, create_app, db, run_migrations, scheduler::SchedulingConfig, AppState};
use std::{net::SocketAddr, path::Path, sync::Arc};
use tracing::{error, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{self, filter::LevelFilter, fmt, prelude::*, EnvFilter, Registry};

#[tokio::main]
async fn main() {
    let args = config::CliArgs::parse();

    if std::fs::metadata(".env").is_ok() {
        dotenv::dotenv().ok();
    }

    let cfg = match config::get_config(args) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&cfg.log_level);

    info!("Starting review scheduler server");

    let pool = db::init_pool(&cfg.database_url);
    {
        let mut conn = pool.get().expect("Failed to get a connection to run migrations");
        run_migrations(&mut conn);
    }

    let state = Arc::new(AppState {
        pool: Arc::new(pool),
        clock: Arc::new(UtcClock),
        scheduling_config: SchedulingConfig::default(),
    });

    let app = create_app(state);

    let addr: SocketAddr = cfg.bind_addr.parse().unwrap_or_else(|e| {
        error!("Invalid bind address {:?}: {}", cfg.bind_addr, e);
        std::process::exit(1);
    });

    info!("Listening on {}", addr);
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                error!("Server error: {}", e);
            }
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", addr, e);
        }
    }
}

/// Initialize tracing with both console and daily-rolling file outputs.
///
/// The Registry is the root subscriber; the console and file layers are
/// composed onto it independently, each with its own filter, following the
/// tracing-subscriber layer pattern.
fn init_tracing(log_level: &str) {
    if !Path::new("logs").exists() {
        std::fs::create_dir("logs").expect("Failed to create logs directory");
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, "logs", "review-scheduler.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);
    // Leak the guard: it must live for the process lifetime to flush the
    // non-blocking writer, and this function runs exactly once at startup.
    Box::leak(Box::new(_guard));

    let file_layer = fmt::layer().with_ansi(false).with_writer(file_writer).with_filter(LevelFilter::TRACE);

    let console_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let console_layer = fmt::layer().with_writer(std::io::stdout).with_filter(console_filter);

    let subscriber = Registry::default().with(console_layer).with(file_layer);
    subscriber.init();
}
