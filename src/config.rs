use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{FinderError, Result};

pub const CONFIG_FILENAME: &str = "gear-ratio-finder.toml";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Fixed-angle sweep over the ratio only.
    #[default]
    Static,
    /// Motor-driven sweep over ratio and time.
    Timed,
}

impl ModelKind {
    pub fn name(self) -> &'static str {
        match self {
            ModelKind::Static => "static",
            ModelKind::Timed => "timed",
        }
    }

    pub fn field_labels(self) -> &'static [&'static str] {
        match self {
            ModelKind::Static => &[
                "Bar 1 length (inches): ",
                "Bar 2 length (inches): ",
                "Distance from backdrop to arm rotation axis (inches): ",
                "Backdrop angle (degrees): ",
            ],
            ModelKind::Timed => &[
                "Bar 1 length (inches): ",
                "Bar 2 length (inches): ",
                "Distance from backdrop to arm rotation axis (inches): ",
                "Backdrop angle (degrees): ",
                "Motor RPM: ",
            ],
        }
    }

    pub fn usage_fields(self) -> &'static str {
        match self {
            ModelKind::Static => "<bar1_in> <bar2_in> <distance_in> <angle_deg>",
            ModelKind::Timed => "<bar1_in> <bar2_in> <distance_in> <angle_deg> <motor_rpm>",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Raises the level by `steps` (one per `-v`), capped at trace.
    pub fn raised(self, steps: u8) -> Self {
        let order = [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        let idx = order.iter().position(|l| *l == self).unwrap_or(1);
        order[(idx + steps as usize).min(order.len() - 1)]
    }

    pub fn as_tracing(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub model: ModelKind,
    pub log_level: LogLevel,
    pub plot_dir: Option<PathBuf>,
}

impl Settings {
    pub fn from_toml(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| FinderError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `path`, or falls back to defaults when the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => {
                let settings = Self::from_toml(&text, path)?;
                info!(path = %path.display(), "loaded settings");
                Ok(settings)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(FinderError::Io(e)),
        }
    }
}
