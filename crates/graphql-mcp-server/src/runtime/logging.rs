//! Logging config and utilities
//!
//! Logs go to stderr unless a directory is configured, since stdout carries MCP messages
//! when serving over stdio.

mod defaults;
mod format_style;
mod log_rotation_kind;

pub use format_style::FormatStyle;
pub use log_rotation_kind::LogRotationKind;
use schemars::JsonSchema;
use serde::Deserialize;
use anyhow::Context as _;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, Layer as LayerTrait, Registry};

use super::parsers;

/// Logging related options
#[derive(Debug, Deserialize, JsonSchema)]
pub struct Logging {
    /// The log level to use for tracing
    #[serde(
        default = "defaults::log_level",
        deserialize_with = "parsers::from_str"
    )]
    #[schemars(schema_with = "level")]
    pub level: Level,

    /// Directory to write rolling log files to, instead of stderr
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Log file rotation period to use when a log path is provided
    #[serde(default = "defaults::default_rotation")]
    pub rotation: LogRotationKind,

    #[serde(default = "defaults::default_format")]
    pub format: FormatStyle,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
            path: None,
            rotation: defaults::default_rotation(),
            format: defaults::default_format(),
        }
    }
}

type LoggingLayerResult = (
    Box<dyn LayerTrait<Registry> + Send + Sync>,
    Option<WorkerGuard>,
);

#[derive(Default)]
pub struct LoggingLayerBuilder {
    writer: Option<BoxMakeWriter>,
    ansi_enabled: bool,
}

impl LoggingLayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write to `mw` instead of the configured destination
    pub fn with_writer<W>(mut self, mw: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        self.writer = Some(BoxMakeWriter::new(mw));
        self
    }

    /// Only applies together with [`Self::with_writer`]
    pub fn with_ansi_enabled(mut self, enabled: bool) -> Self {
        self.ansi_enabled = enabled;
        self
    }

    /// Build the formatting layer.
    ///
    /// The returned guard flushes a log file on drop and must outlive the subscriber.
    pub fn build(self, logging: &Logging) -> Result<LoggingLayerResult, anyhow::Error> {
        let (writer, guard, ansi) = match self.writer {
            Some(writer) => (writer, None, self.ansi_enabled),
            None => match &logging.path {
                Some(directory) => {
                    let (writer, guard) = rolling_file(directory, logging)?;
                    (writer, Some(guard), false)
                }
                None => (BoxMakeWriter::new(std::io::stderr), None, true),
            },
        };

        let layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(ansi)
            .with_target(false);
        let layer = match logging.format {
            FormatStyle::Full => layer.boxed(),
            FormatStyle::Compact => layer.compact().boxed(),
            FormatStyle::Json => layer.json().boxed(),
            FormatStyle::Pretty => layer.pretty().boxed(),
        };

        Ok((layer, guard))
    }
}

fn rolling_file(
    directory: &Path,
    logging: &Logging,
) -> Result<(BoxMakeWriter, WorkerGuard), anyhow::Error> {
    std::fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;
    let appender = RollingFileAppender::builder()
        .rotation(logging.rotation.clone().into())
        .filename_prefix("graphql_mcp_bridge")
        .filename_suffix("log")
        .build(directory)
        .with_context(|| format!("Failed to open log file in {}", directory.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    Ok((BoxMakeWriter::new(writer), guard))
}

impl Logging {
    pub fn env_filter(logging: &Logging) -> Result<EnvFilter, anyhow::Error> {
        let mut env_filter = EnvFilter::from_default_env().add_directive(logging.level.into());

        if logging.level == Level::INFO {
            env_filter = env_filter.add_directive("rmcp=warn".parse()?);
        }
        Ok(env_filter)
    }
}

fn level(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
    /// Log level
    #[derive(JsonSchema)]
    #[schemars(rename_all = "lowercase")]
    #[allow(dead_code)]
    enum Level {
        Trace,
        Debug,
        Info,
        Warn,
        Error,
    }

    Level::json_schema(generator)
}
