use clap::Parser;
use configs::AppConfig;
use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

/// Users API server
#[derive(Debug, Parser)]
#[command(name = "server", version, about)]
struct Args {
    /// API key required on /api/ routes; unset disables the check
    #[arg(long = "apikey")]
    api_key: Option<String>,
    /// Path to config.toml (defaults to CONFIG_PATH or ./config.toml)
    #[arg(long)]
    config: Option<String>,
    /// Port to listen on, overrides the config file
    #[arg(long)]
    port: Option<u16>,
}

fn load_config(args: &Args) -> anyhow::Result<AppConfig> {
    if let Some(path) = &args.config {
        std::env::set_var("CONFIG_PATH", path);
    }
    let mut cfg = AppConfig::load_and_validate()?;
    if let Some(key) = &args.api_key {
        cfg.auth.api_key = Some(key.clone());
    }
    if let Some(port) = args.port {
        cfg.server.port = port;
    }
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

fn main() -> std::process::ExitCode {
    dotenv().ok();
    let args = Args::parse();

    let cfg = match load_config(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("invalid configuration: {e:#}");
            return std::process::ExitCode::FAILURE;
        }
    };

    common::utils::logging::init_logging_for(&cfg.environment);
    info!(service = "server", event = "logger_init", environment = %cfg.environment, "tracing subscriber initialized");

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "server",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads {
        builder.worker_threads(w);
    }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        %service_id,
        pid,
        version,
        threads = cfg.server.worker_threads.unwrap_or_default(),
        auth = cfg.auth.api_key.is_some(),
        "server service starting"
    );

    rt.block_on(async move {
        match server::run(cfg).await {
            Ok(()) => {
                info!(service = "server", event = "stop", %service_id, pid, "server stopped normally");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "server", event = "run_failed", error = %e, "server::run returned error");
                std::process::ExitCode::FAILURE
            }
        }
    })
}
