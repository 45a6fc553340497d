// ABOUTME: Logging configuration and structured tracing setup for the CLI surface
// ABOUTME: Configures log level and output format from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! Structured logging configuration for the command-line front end

use anyhow::Result;
use std::env;
use std::io;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for machine-read logs
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact single-line format
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self { level, format }
    }

    /// Initialize the global tracing subscriber.
    ///
    /// Diagnostics go to stderr; stdout stays reserved for report lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the level directive does not parse or a global
    /// subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::try_new(&self.level)?;
        let registry = tracing_subscriber::registry().with(env_filter);

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).try_init()?;
            }
        }

        tracing::debug!(log.level = %self.level, log.format = ?self.format, "logging initialized");
        Ok(())
    }
}
