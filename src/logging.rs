// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The TUI owns the terminal, so events are only written when a log file is configured
//! (`--log-file <path>` or `APISCOPE_LOG_FILE`). Without one no subscriber is installed and
//! every `tracing` macro is a no-op.
//!
//! Levels:
//! - `warn`: document quirks the viewer papers over (e.g. several servers)
//! - `info`: startup summary and quit
//! - `debug`: per-key selection and toggle events

use std::env;
use std::error::Error;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{
    filter::ParseError, fmt as subscriber_fmt, layer::SubscriberExt, util::SubscriberInitExt,
    util::TryInitError, EnvFilter,
};

pub const LOG_FILTER_ENV: &str = "APISCOPE_LOG";
pub const LOG_FILE_ENV: &str = "APISCOPE_LOG_FILE";
const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    filter: String,
    log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_owned(),
            log_file: None,
        }
    }
}

impl LogConfig {
    /// Reads `APISCOPE_LOG` / `APISCOPE_LOG_FILE`; an explicit `--log-file` wins over the env.
    pub fn from_env(cli_log_file: Option<PathBuf>) -> Self {
        Self::from_values(
            env::var(LOG_FILTER_ENV).ok(),
            cli_log_file,
            env::var(LOG_FILE_ENV).ok(),
        )
    }

    fn from_values(
        filter: Option<String>,
        cli_log_file: Option<PathBuf>,
        env_log_file: Option<String>,
    ) -> Self {
        let filter = filter
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_owned());
        let log_file = cli_log_file.or_else(|| {
            env_log_file
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        });
        Self { filter, log_file }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

/// Installs the global subscriber if a log file is configured.
///
/// Returns whether logging is active. Call once, before the terminal is taken over.
pub fn init_logging(config: &LogConfig) -> Result<bool, LogError> {
    let Some(path) = config.log_file() else {
        return Ok(false);
    };

    let filter = build_filter(config.filter())?;
    let file = open_log_file(path)?;
    let layer = subscriber_fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry().with(filter).with(layer).try_init().map_err(LogError::Init)?;
    Ok(true)
}

fn build_filter(value: &str) -> Result<EnvFilter, LogError> {
    EnvFilter::try_new(value).map_err(|source| LogError::Filter {
        value: value.to_owned(),
        source,
    })
}

fn open_log_file(path: &Path) -> Result<File, LogError> {
    OpenOptions::new().create(true).append(true).open(path).map_err(|source| LogError::Open {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug)]
pub enum LogError {
    Open { path: PathBuf, source: io::Error },
    Filter { value: String, source: ParseError },
    Init(TryInitError),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "failed to open log file {}: {source}", path.display())
            }
            Self::Filter { value, source } => {
                write!(f, "invalid {LOG_FILTER_ENV} filter {value:?}: {source}")
            }
            Self::Init(source) => write!(f, "failed to install logger: {source}"),
        }
    }
}

impl Error for LogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Filter { source, .. } => Some(source),
            Self::Init(source) => Some(source),
        }
    }
}
