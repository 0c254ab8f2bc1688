//! Logging initialization for tagcloud_app.
//!
//! Logging is off unless `TAGCLOUD_LOG` names a destination (`file`,
//! `terminal` or `both`). File logs are appended to `./tagcloud.log`.
//! `TAGCLOUD_LOG_LEVEL` picks the level (default `info`).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use engine_logging::LogDestination;
use log::LevelFilter;
use tagcloud_engine::TagCloudRequest;

const LOG_ENV: &str = "TAGCLOUD_LOG";
const LOG_LEVEL_ENV: &str = "TAGCLOUD_LOG_LEVEL";
const LOG_FILE: &str = "./tagcloud.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    pub destination: Option<LogDestination>,
    pub level: LevelFilter,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::parse(
            env::var(LOG_ENV).ok().as_deref(),
            env::var(LOG_LEVEL_ENV).ok().as_deref(),
        )
    }

    fn parse(destination: Option<&str>, level: Option<&str>) -> Self {
        let destination = destination.and_then(LogDestination::from_name);
        let level = level
            .and_then(|name| name.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);
        Self { destination, level }
    }
}

/// Starts logging for a run. The log file is never one of the run's own files.
pub fn initialize(settings: LogSettings, request: &TagCloudRequest) {
    let Some(destination) = settings.destination else {
        return;
    };
    let log_path = Path::new(LOG_FILE);

    let writes_file = matches!(destination, LogDestination::File | LogDestination::Both);
    let destination = if writes_file && collides_with_run(log_path, request) {
        eprintln!("Warning: not logging to {LOG_FILE}, it is the input or output file");
        match destination {
            LogDestination::Both => LogDestination::Terminal,
            _ => return,
        }
    } else {
        destination
    };

    engine_logging::initialize(destination, settings.level, log_path);
}

fn collides_with_run(log_path: &Path, request: &TagCloudRequest) -> bool {
    let log_path = resolve(log_path);
    resolve(&request.input_path) == log_path || resolve(&request.output_path) == log_path
}

/// Absolute form of `path`; the file itself need not exist.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(full) = fs::canonicalize(path) {
        return full;
    }
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match (fs::canonicalize(parent), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}
