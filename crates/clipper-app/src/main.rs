mod cli;
mod commands;

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use clipper_common::ConfigError;
use clipper_config::ClipperConfig;

fn load_config(path: Option<&str>) -> Result<ClipperConfig, ConfigError> {
    match path {
        Some(path) => clipper_config::load_config_from(Path::new(path)),
        None => clipper_config::load_config(),
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging starts so its level can apply; any
    // failure is reported once the subscriber is up.
    let loaded = load_config(args.config.as_deref());

    let log_directive = args.log_level.clone().unwrap_or_else(|| {
        loaded
            .as_ref()
            .map(|c| c.logging.level)
            .unwrap_or_default()
            .as_directive()
            .to_string()
    });
    let directive: Directive = log_directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Clipper v{} starting", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ClipperConfig::default()
    });

    if let Err(e) = clipper_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    match commands::run(args.command, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
