//! Process-wide `log` backend.
//!
//! Every crate in the workspace logs through the `log` facade; this bridge
//! formats records as
//!
//! ```text
//! [<unix-seconds>.<micros>] [LEVEL] [target] message
//! ```
//!
//! and writes them to stderr, keeping stdout free for command output.
//!
//! Level precedence: `--log-level` flag, then `RUST_LOG` (a bare level name
//! such as `debug`), then the config file, then `warn`. The config file is
//! read after the bridge is installed, so its level is applied later through
//! [`apply_config_level`] and only if neither earlier source pinned one.

use gridglyph_config::LogLevel;
use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Level used when nothing else asks for one.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct LogBridge {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(
            &get_timestamp(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        let mut writer = self.writer.lock();
        let _ = writer.write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = self.writer.lock().flush();
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// Set when the CLI flag or `RUST_LOG` chose the level.
static LEVEL_PINNED: AtomicBool = AtomicBool::new(false);

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Render one log line, trailing newline included.
pub fn format_record(timestamp: &str, level: log::Level, target: &str, msg: &str) -> String {
    format!("[{timestamp}] [{level:<5}] [{target}] {msg}\n")
}

/// Parse a `RUST_LOG` value. Only bare level names are understood.
pub fn level_from_env_value(value: &str) -> Option<LevelFilter> {
    value
        .trim()
        .parse::<LogLevel>()
        .ok()
        .map(LogLevel::to_level_filter)
}

/// Pick the startup level from the CLI flag and `RUST_LOG`.
///
/// Returns the level and whether it was explicitly requested.
pub fn startup_level(cli_level: Option<LogLevel>, rust_log: Option<&str>) -> (LevelFilter, bool) {
    if let Some(level) = cli_level {
        return (level.to_level_filter(), true);
    }
    match rust_log.and_then(level_from_env_value) {
        Some(level) => (level, true),
        None => (DEFAULT_LEVEL, false),
    }
}

/// Install the bridge as the global logger.
///
/// Calling it again only updates the level.
pub fn init_log_bridge(cli_level: Option<LogLevel>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let (level, pinned) = startup_level(cli_level, rust_log.as_deref());
    LEVEL_PINNED.store(pinned, Ordering::Relaxed);

    let bridge = BRIDGE.get_or_init(|| LogBridge {
        writer: Mutex::new(Box::new(io::stderr())),
    });
    // A second install attempt fails harmlessly; the first bridge stays active.
    let _ = log::set_logger(bridge);
    log::set_max_level(level);
}

/// Apply the config file's level unless the CLI or environment already chose one.
pub fn apply_config_level(level: LogLevel) {
    if !LEVEL_PINNED.load(Ordering::Relaxed) {
        log::set_max_level(level.to_level_filter());
    }
}
