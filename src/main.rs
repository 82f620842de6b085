//! autoinjector: drift detection and canned context injection
//!
//! Usage:
//!   autoinjector detect "who am i?"   → injection or stable status as JSON
//!   echo text | autoinjector detect   → same, reading stdin
//!   autoinjector bootup               → five-step bootup sequence
//!   autoinjector restore              → emergency restoration record
//!   autoinjector status               → identity, mission context, monitoring config
//!   autoinjector run                  → start monitoring + bootup, until Ctrl-C
//!   autoinjector dump-config          → effective config as TOML

use anyhow::Context;
use autoinjector_monitor::{AutoInjector, InjectorConfig};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

#[derive(Parser)]
#[command(
    name = "autoinjector",
    about = "Real-time drift detection with canned context injection",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file (TOML)
    #[arg(long, global = true, default_value = "autoinjector.toml")]
    config: PathBuf,

    /// Write logs to a file (in addition to stderr)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan text for drift triggers (reads stdin when no text is given)
    Detect {
        text: Vec<String>,
    },
    /// Run the bootup sequence
    Bootup,
    /// Run the emergency restoration protocol
    Restore,
    /// Show system identity and monitoring settings
    Status,
    /// Start continuous monitoring and run bootup, until Ctrl-C
    Run,
    /// Print the effective config (file merged over defaults) as TOML
    DumpConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_tracing(cli.log_file.as_deref(), cli.log_json)?;

    let config = InjectorConfig::load(&cli.config);
    let injector = AutoInjector::new(config);

    match cli.command {
        Commands::Detect { text } => {
            let outcome = if text.is_empty() {
                let mut input = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut input)
                    .context("reading stdin")?;
                injector.detect_drift_bytes(&input)?
            } else {
                injector.detect_drift(&text.join(" "))?
            };
            print_json(&outcome)?;
        }
        Commands::Bootup => print_json(&injector.execute_bootup())?,
        Commands::Restore => print_json(&injector.emergency_restore()?)?,
        Commands::Status => print_json(&injector.status().await)?,
        Commands::Run => run(&injector).await?,
        Commands::DumpConfig => println!("{}", injector.config().to_toml()),
    }

    Ok(())
}

/// Explicit bootstrap: monitoring first, then one bootup.
async fn run(injector: &AutoInjector) -> anyhow::Result<()> {
    let confirmation = injector.start_monitoring().await;
    tracing::info!("{}", confirmation);
    injector.execute_bootup();
    tracing::info!("Auto-injector deployed, press Ctrl-C to stop");

    tokio::signal::ctrl_c().await.context("waiting for Ctrl-C")?;
    injector.stop_monitoring().await;
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing(log_file: Option<&Path>, json: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "autoinjector=info,autoinjector_monitor=info".into());

    let stderr = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let name = path
                .file_name()
                .with_context(|| format!("invalid log file path: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(
                dir.unwrap_or_else(|| Path::new(".")),
                name,
            );
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(file_layer)
        .init();

    Ok(guard)
}
