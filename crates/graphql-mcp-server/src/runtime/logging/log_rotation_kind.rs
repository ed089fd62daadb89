use schemars::JsonSchema;
use serde::Deserialize;
use tracing_appender::rolling::Rotation;

/// How often to start a new log file
#[derive(Debug, Deserialize, JsonSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogRotationKind {
    Minutely,
    Hourly,
    Daily,
    Never,
}

impl From<LogRotationKind> for Rotation {
    fn from(value: LogRotationKind) -> Self {
        match value {
            LogRotationKind::Minutely => Rotation::MINUTELY,
            LogRotationKind::Hourly => Rotation::HOURLY,
            LogRotationKind::Daily => Rotation::DAILY,
            LogRotationKind::Never => Rotation::NEVER,
        }
    }
}
