//! Diagnostics for the treecut binary.
//!
//! Everything goes to stderr through one `tracing` subscriber so the cluster
//! summary on stdout stays clean. `log` records from dependencies are routed
//! into the same subscriber.

use std::{env, ffi::OsString, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable selecting the output format, `human` or `json`.
pub const LOG_FORMAT_ENV: &str = "TREECUT_LOG_FORMAT";

/// Filter directive used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Errors raised while setting up diagnostics.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A logging variable held bytes that are not UTF-8.
    #[error("`{name}` is not valid UTF-8: {value:?}")]
    NonUnicodeVariable {
        /// Variable name.
        name: &'static str,
        /// Raw value as read from the environment.
        value: OsString,
    },
    /// `TREECUT_LOG_FORMAT` named a format other than `human` or `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Normalised value that was rejected.
        provided: String,
    },
    /// The global subscriber could not be installed.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// How events are written to stderr.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Multi-line text for terminals.
    #[default]
    Human,
    /// One JSON object per line, carrying the active span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalised = raw.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "" | "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::UnsupportedFormat {
                provided: normalised,
            }),
        }
    }
}

/// Logging configuration read from the process environment.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LogSettings {
    /// Output encoding.
    pub format: LogFormat,
    /// Raw `RUST_LOG` directive, if one was set.
    pub directive: Option<String>,
}

impl LogSettings {
    /// Reads the settings from the process environment.
    ///
    /// # Errors
    /// See [`LogSettings::from_lookup`].
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|name| env::var_os(name))
    }

    /// Resolves the settings through `lookup`, which returns the raw value
    /// of a variable or `None` when it is unset.
    ///
    /// # Errors
    /// Returns [`LoggingError::NonUnicodeVariable`] when a variable is not
    /// UTF-8 and [`LoggingError::UnsupportedFormat`] for an unknown format.
    pub fn from_lookup(
        mut lookup: impl FnMut(&'static str) -> Option<OsString>,
    ) -> Result<Self, LoggingError> {
        let mut read = |name: &'static str| {
            lookup(name)
                .map(|value| {
                    value
                        .into_string()
                        .map_err(|value| LoggingError::NonUnicodeVariable { name, value })
                })
                .transpose()
        };

        let format = match read(LOG_FORMAT_ENV)? {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };
        let directive = read(EnvFilter::DEFAULT_ENV)?;
        Ok(Self { format, directive })
    }

    fn filter(&self) -> EnvFilter {
        self.directive
            .as_deref()
            .and_then(|directive| EnvFilter::try_new(directive).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Installs the stderr subscriber on first use; later calls do nothing.
///
/// If some other subscriber already owns the global slot, that one is kept
/// and a note is printed instead of failing.
///
/// # Errors
/// Returns [`LoggingError`] when the environment holds an invalid setting.
pub fn init_logging() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let settings = LogSettings::from_env()?;
    if let Err(LoggingError::InstallFailed { source }) = install(&settings) {
        eprintln!("keeping the existing tracing subscriber: {source}");
    }
    let _ = INSTALLED.set(());
    Ok(())
}

fn install(settings: &LogSettings) -> Result<(), LoggingError> {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::FULL);
    let layer = match settings.format {
        LogFormat::Human => layer.boxed(),
        LogFormat::Json => layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // The `log` slot may already be taken by an embedding process.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(settings.filter())
        .with(layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}
