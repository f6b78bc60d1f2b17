//! Logging configuration for the CLI.

use clap::{Args, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Settings shared by every command. Flags override the environment.
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, env = "ARMID_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log line format.
    #[arg(
        long,
        global = true,
        env = "ARMID_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Text
    )]
    pub log_format: LogFormat,
}

impl Config {
    /// Installs the global subscriber. Logs go to stderr so stdout stays
    /// parseable.
    pub fn init_tracing(&self) {
        // prefer RUST_LOG, fall back to the configured level
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_level));
        let registry = tracing_subscriber::registry().with(filter);
        match self.log_format {
            LogFormat::Text => registry
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init(),
            LogFormat::Json => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init(),
        }
    }
}
