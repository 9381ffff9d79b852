//! `tracing` subscriber setup: stderr plus an optional append-only log file.
//!
//! Load events reach these layers through [`crate::loader::TracingObserver`].

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter for stderr when `RUST_LOG` is unset.
    pub stderr_filter: String,
    /// Filter for the log file when `RUST_LOG` is unset.
    pub file_filter: String,
    /// Emit JSON lines instead of plain text.
    pub json: bool,
    /// Use ANSI colors on stderr.
    pub ansi: bool,
    /// Append events to this file as well.
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            stderr_filter: "warn".to_string(),
            file_filter: "info".to_string(),
            json: false,
            ansi: true,
            log_file: None,
        }
    }
}

/// Keeps the log file writer running. Dropping it flushes buffered lines.
#[must_use = "dropping the guard stops file logging"]
#[derive(Debug, Default)]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Build the subscriber described by `config` without installing it.
///
/// Returns an error if the log file cannot be opened for appending.
pub fn build_subscriber(
    config: &LoggingConfig,
) -> io::Result<(impl Subscriber + Send + Sync + 'static, LoggingGuard)> {
    let mut layers: Vec<BoxedLayer> = vec![fmt_layer(
        io::stderr,
        config.json,
        config.ansi,
        env_filter(&config.stderr_filter),
    )];

    let file_guard = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            layers.push(fmt_layer(writer, config.json, false, env_filter(&config.file_filter)));
            Some(guard)
        }
        None => None,
    };

    Ok((
        tracing_subscriber::registry().with(layers),
        LoggingGuard { _file: file_guard },
    ))
}

/// Build and install the global subscriber.
pub fn init(config: &LoggingConfig) -> io::Result<LoggingGuard> {
    let (subscriber, guard) = build_subscriber(config)?;
    tracing::subscriber::set_global_default(subscriber).map_err(io::Error::other)?;
    Ok(guard)
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn fmt_layer<W>(writer: W, json: bool, ansi: bool, filter: EnvFilter) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer().with_ansi(ansi).with_writer(writer);
    if json {
        layer.json().with_filter(filter).boxed()
    } else {
        layer.with_filter(filter).boxed()
    }
}
