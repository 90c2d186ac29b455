use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use switchwatch::backend::http_client::HttpBackend;
use switchwatch::config::settings::{LoggingConfig, Settings};
use switchwatch::console::routes::AppState;
use switchwatch::console::server::ConsoleServer;
use switchwatch::dashboard::Dashboard;
use switchwatch::dispatcher::CommandDispatcher;
use switchwatch::scheduler::PollingScheduler;

/// Parse the `--config` CLI flag. Without it the built-in defaults apply.
fn parse_config_path() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    let mut config_path = None;

    let mut i = 1;
    while i < args.len() {
        if args[i] == "--config" {
            if let Some(path) = args.get(i + 1) {
                config_path = Some(path.clone());
            }
            i += 2;
        } else {
            i += 1;
        }
    }

    config_path
}

/// Initialise the `tracing` subscriber with both stdout and file output.
/// The returned guard flushes the file writer on drop.
fn init_tracing(logging: &LoggingConfig) -> WorkerGuard {
    let path = Path::new(&logging.file);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "switchwatch.log".into());
    let _ = std::fs::create_dir_all(dir);

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},switchwatch=debug", logging.level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    guard
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // ---------------------------------------------------------------
    // 1. Configuration
    // ---------------------------------------------------------------
    let config_path = parse_config_path();
    let settings = match &config_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    // ---------------------------------------------------------------
    // 2. Logging
    // ---------------------------------------------------------------
    let _log_guard = init_tracing(&settings.logging);

    info!("Starting switchwatch console");
    match &config_path {
        Some(path) => info!("Config loaded from {}", path),
        None => info!("No --config given; using built-in defaults"),
    }
    info!(backend = %settings.backend.base_url, "Polling detection backend");

    // ---------------------------------------------------------------
    // 3. Dashboard state and commands
    // ---------------------------------------------------------------
    let backend = Arc::new(HttpBackend::new(&settings.backend));
    let dashboard = Arc::new(Dashboard::new(backend, &settings));
    let dispatcher = Arc::new(CommandDispatcher::new(dashboard.clone()));

    // ---------------------------------------------------------------
    // 4. Operator console (bound before polling starts)
    // ---------------------------------------------------------------
    let console = ConsoleServer::new(
        AppState {
            dashboard: dashboard.clone(),
            dispatcher,
            push_interval: Duration::from_millis(settings.console.push_interval_ms),
        },
        settings.console.bind.clone(),
    );
    let listener = console.bind().await?;

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let console_handle = tokio::spawn(async move {
        let shutdown = async move {
            let _ = shutdown_rx.await;
        };
        if let Err(e) = console.run(listener, shutdown).await {
            error!("Console server error: {:#}", e);
        }
    });

    // ---------------------------------------------------------------
    // 5. Polling
    // ---------------------------------------------------------------
    let scheduler = PollingScheduler::new(dashboard.clone(), settings.polling.clone());
    let polling = scheduler.start();

    info!("switchwatch is running. Press Ctrl+C to shut down.");

    // ---------------------------------------------------------------
    // 6. Wait for shutdown signal
    // ---------------------------------------------------------------
    tokio::signal::ctrl_c().await?;
    info!("Shutting down switchwatch...");

    polling.shutdown().await;
    let _ = shutdown_tx.send(());
    if let Err(e) = console_handle.await {
        error!("Console task ended abnormally: {}", e);
    }

    info!("switchwatch shut down gracefully");
    Ok(())
}
