// ABOUTME: Logging configuration and structured logging setup for the fittrack binaries
// ABOUTME: Picks level, format and detail from the environment and installs a tracing-subscriber stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! The library crates only emit `tracing` events; installing a subscriber is
//! left to binaries, which call [`LoggingConfig::init`] once at startup.
//! Everything is written to stderr so stdout can carry JSON reports.

use crate::constants::service_names;
use anyhow::{anyhow, Error, Result};
use std::env;
use std::fmt as std_fmt;
use std::io;
use std::str::FromStr;
use tracing::{debug, Level, Subscriber};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Type-erased formatting layer
type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default filter directive (`trace`..`error`, or a full `EnvFilter` string)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread ids and names
    pub include_thread: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Service name attached to the startup event
    pub service_name: String,
    /// Crate version attached to the startup event
    pub service_version: String,
    /// Deployment environment (development, staging, production)
    pub environment: String,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Full human readable output
    Pretty,
    /// Single-line terse output
    Compact,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "text" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(anyhow!("Unknown log format: {other}")),
        }
    }
}

impl std_fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        };
        f.write_str(name)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::FITTRACK.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

/// `true` when the variable is set to anything but an explicit "off" value
fn env_flag(name: &str) -> bool {
    env::var(name).is_ok_and(|v| !matches!(v.trim(), "" | "0" | "false" | "no" | "off"))
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT`, `ENVIRONMENT`, `SERVICE_NAME` and the
    /// `LOG_INCLUDE_*` switches, falling back to [`Default`] for anything unset
    ///
    /// Production turns on location and thread details.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        let production = environment.eq_ignore_ascii_case("production");

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .ok()
                .and_then(|f| f.parse().ok())
                .unwrap_or(defaults.format),
            include_location: production || env_flag("LOG_INCLUDE_LOCATION"),
            include_thread: production || env_flag("LOG_INCLUDE_THREAD"),
            include_spans: env_flag("LOG_INCLUDE_SPANS"),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: defaults.service_version,
            environment,
        }
    }

    /// Compact output at `warn`, or `debug` when `verbose`
    #[must_use]
    pub fn for_cli(verbose: bool) -> Self {
        Self {
            level: if verbose { "debug" } else { "warn" }.into(),
            format: LogFormat::Compact,
            ..Self::from_env()
        }
    }

    /// `RUST_LOG` wins over the configured level; rayon is capped at warn
    fn env_filter(&self) -> EnvFilter {
        let filter = env::var("RUST_LOG")
            .map_or_else(|_| EnvFilter::new(&self.level), EnvFilter::new);
        filter.add_directive(
            "rayon=warn"
                .parse()
                .unwrap_or_else(|_| Level::WARN.into()),
        )
    }

    fn fmt_layer<S>(&self) -> BoxedLayer<S>
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        let spans = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let base = fmt::layer()
            .with_writer(io::stderr)
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_thread_ids(self.include_thread)
            .with_thread_names(self.include_thread)
            .with_span_events(spans);

        match self.format {
            LogFormat::Json => base.json().with_current_span(self.include_spans).boxed(),
            LogFormat::Pretty => base.boxed(),
            LogFormat::Compact => base.compact().with_target(false).boxed(),
        }
    }

    /// Install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.fmt_layer())
            .with(self.env_filter())
            .try_init()?;

        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            format = %self.format,
            level = %self.level,
            "Logging initialized"
        );
        Ok(())
    }
}

