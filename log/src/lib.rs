//! Logging for blocknav: a log file plus optional stdout.
//!
//! Logs always go to a file, at `warn` unless a filter is set in the environment.
//! Stdout logging is enabled when `BLOCKNAV_LOG` or `RUST_LOG` is set, or in debug
//! builds.
//!
//! ## Environment Variables
//!
//! 1. **`BLOCKNAV_LOG`** (highest priority). A bare level such as `debug` applies
//!    to every blocknav crate; anything with `=`, `:` or `,` is used verbatim.
//! 2. **`RUST_LOG`**, used verbatim.
//! 3. **Default**: `warn` globally, `info` for blocknav crates.
//!
//! ## Log File Location
//!
//! Default: `<data_local_dir>/blocknav/logs/blocknav-<pid>.log`
//! - macOS: `~/Library/Application Support/blocknav/logs/blocknav-12345.log`
//! - Linux: `~/.local/share/blocknav/logs/blocknav-12345.log`
//!
//! Override with `--log-file <path>`. A path with an extension names the file; any
//! other path names the directory.

use std::{
    env,
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

type Error = Box<dyn std::error::Error + Send + Sync>;

/// Crates whose level a bare `BLOCKNAV_LOG` value controls.
const CRATES: &[&str] = &[
    "blocknav",
    "blocknav_tree",
    "blocknav_config",
    "blocknav_bin",
];

/// Returned from [`init`]; hold it alive so the log file gets flushed.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

#[derive(Debug, Default)]
pub struct LogConfig {
    pub log_file_path: Option<PathBuf>,
}

/// Install the file and stdout subscribers.
///
/// Fails if a global subscriber is already installed.
pub fn init(config: LogConfig) -> Result<LogGuard, Error> {
    let (log_dir, filename) = resolve_log_path(config.log_file_path);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(file_filter());

    let stdout_layer = stdout_enabled().then(|| fmt::layer().with_filter(create_filter()));

    Registry::default()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_dir.join(filename),
    })
}

/// Stdout-only logging for tests. Safe to call from every test; only the first
/// call installs anything.
pub fn test() {
    let _ = fmt()
        .with_env_filter(create_filter())
        .with_test_writer()
        .try_init();
}

fn stdout_enabled() -> bool {
    env::var("BLOCKNAV_LOG").is_ok() || env::var("RUST_LOG").is_ok() || cfg!(debug_assertions)
}

fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let filename = format!("blocknav-{}.log", std::process::id());

    match override_path {
        Some(path) if path.extension().is_some() => {
            let dir = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or(Path::new("."))
                .to_path_buf();
            let name = path
                .file_name()
                .map_or(filename, |n| n.to_string_lossy().into_owned());
            (dir, name)
        },
        Some(dir) => (dir, filename),
        None => {
            let dir = dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("blocknav")
                .join("logs");
            (dir, filename)
        },
    }
}

/// File filter: the environment's filter if one is set, otherwise `warn`.
fn file_filter() -> EnvFilter {
    if env::var("BLOCKNAV_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
        return create_filter();
    }
    EnvFilter::new("warn")
}

/// `BLOCKNAV_LOG` > `RUST_LOG` > defaults.
fn create_filter() -> EnvFilter {
    let directives = match (env::var("BLOCKNAV_LOG"), env::var("RUST_LOG")) {
        (Ok(blocknav_log), _) => expand_directives(&blocknav_log),
        (Err(_), Ok(rust_log)) => rust_log,
        (Err(_), Err(_)) => crate_directives("info"),
    };
    EnvFilter::new(directives)
}

/// Expand a bare level to every blocknav crate; keep explicit directives as is.
fn expand_directives(blocknav_log: &str) -> String {
    if blocknav_log.contains(|c| matches!(c, '=' | ':' | ',')) {
        return blocknav_log.to_string();
    }
    crate_directives(blocknav_log.trim())
}

fn crate_directives(level: &str) -> String {
    let mut directives = String::from("warn");
    for name in CRATES {
        directives.push_str(&format!(",{name}={level}"));
    }
    directives
}
