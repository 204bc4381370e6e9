//! Diagnostic stream setup for the arbor CLI.
//!
//! Engine spans (`mst.kruskal`, `mst.prim`) and the CLI's own spans are
//! written to stderr with their close timings, so the per-graph summary on
//! stdout stays free of log noise. `ARBOR_LOG_FORMAT` picks the rendering and
//! `RUST_LOG` the filter.

use std::{env, ffi::OsString, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt::format::FmtSpan, layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Environment variable selecting the diagnostic format.
pub const LOG_FORMAT_ENV: &str = "ARBOR_LOG_FORMAT";

/// Filter applied when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info";

static ACTIVE_FORMAT: OnceLock<LogFormat> = OnceLock::new();

/// Rendering of the diagnostic stream.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Human,
    /// One JSON object per event, carrying the enclosing span list so each
    /// line names the graph and engine it belongs to.
    Json,
}

impl LogFormat {
    /// Resolves the format from the raw value of [`LOG_FORMAT_ENV`].
    ///
    /// # Errors
    /// Returns [`LoggingError::InvalidUnicode`] for non-UTF-8 values and
    /// [`LoggingError::UnsupportedFormat`] for unknown names.
    pub fn from_env_value(raw: Option<OsString>) -> Result<Self, LoggingError> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };
        raw.into_string()
            .map_err(|value| LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                value,
            })?
            .parse()
    }

    fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let base = tracing_subscriber::fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(std::io::stderr);
        match self {
            Self::Human => base.with_target(false).boxed(),
            Self::Json => base
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .boxed(),
        }
    }
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let name = raw.trim();
        if name.eq_ignore_ascii_case("human") {
            Ok(Self::Human)
        } else if name.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(LoggingError::UnsupportedFormat {
                provided: raw.to_owned(),
            })
        }
    }
}

/// Errors raised while setting up the diagnostic stream.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The format variable held bytes that are not UTF-8.
    #[error("environment variable `{name}` is not valid UTF-8: {value:?}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Raw value as read from the environment.
        value: OsString,
    },
    /// The format variable named neither `human` nor `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Value supplied by the user.
        provided: String,
    },
}

/// Installs the global subscriber once and returns the active format.
///
/// Later calls return the format chosen by the first call without touching
/// the environment. When another subscriber already owns the global slot,
/// that subscriber is kept and receives a warning.
///
/// # Errors
/// Returns [`LoggingError`] when [`LOG_FORMAT_ENV`] cannot be resolved.
pub fn init_logging() -> Result<LogFormat, LoggingError> {
    if let Some(format) = ACTIVE_FORMAT.get() {
        return Ok(*format);
    }

    let format = LogFormat::from_env_value(env::var_os(LOG_FORMAT_ENV))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // The log bridge is best-effort; an existing logger keeps the slot.
    let _ = LogTracer::init();
    if let Err(source) = tracing_subscriber::registry()
        .with(format.layer())
        .with(filter)
        .try_init()
    {
        tracing::warn!(error = %source, "structured logging already configured elsewhere");
    }

    Ok(*ACTIVE_FORMAT.get_or_init(|| format))
}
