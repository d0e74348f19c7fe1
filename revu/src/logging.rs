//! File-based diagnostic logging.
//!
//! The TUI owns the terminal, so log output goes to `.revu/revu.log` in the
//! working directory instead of stderr. This is the channel that carries the
//! failure detail the review panel deliberately withholds: timeouts, refused
//! connections, and server statuses all land here at `warn` level.
//!
//! The filter is taken from `REVU_LOG` (standard `EnvFilter` syntax), with
//! `revu=info,revu_core=info` as the default.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Directory for runtime artifacts (currently just the log file).
pub const DATA_DIR: &str = ".revu";

/// Initialises the global tracing subscriber writing to `.revu/revu.log`.
///
/// Must be called once, before the first tracing macro fires and before the
/// terminal enters raw mode. ANSI escapes are disabled since the sink is a
/// file.
pub fn init() -> std::io::Result<()> {
    std::fs::create_dir_all(DATA_DIR)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(format!("{DATA_DIR}/revu.log"))?;

    let filter = EnvFilter::try_from_env("REVU_LOG")
        .unwrap_or_else(|_| EnvFilter::new("revu=info,revu_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
