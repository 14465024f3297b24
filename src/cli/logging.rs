//! Module implementing logging for the application.
//!
//! Everything is logged to stderr through a global `slog` logger,
//! with records of the `log` crate (used by the `memegen` library) forwarded to it.

use std::sync::Mutex;

use log::SetLoggerError;
use slog::{self, Drain, Level, Logger};
use slog_scope::GlobalLoggerGuard;
use slog_term::{FullFormat, TermDecorator};


/// Initialize logging with given verbosity.
///
/// The verbosity value has the same meaning as in `args::Options::verbosity`.
/// Returned guard has to be kept alive for as long as logging is needed.
pub fn init(verbosity: isize) -> Result<GlobalLoggerGuard, SetLoggerError> {
    let level = level_for(verbosity);

    let decorator = TermDecorator::new().stderr().build();
    let drain = FullFormat::new(decorator).build().fuse();
    let drain = Mutex::new(drain.filter_level(level)).fuse();

    let logger = Logger::root(drain, slog::o!());
    let guard = slog_scope::set_global_logger(logger);
    slog_stdlog::init()?;

    debug!("Logging initialized at {:?} level", level);
    Ok(guard)
}

/// Logging level corresponding to given verbosity.
fn level_for(verbosity: isize) -> Level {
    match verbosity {
        v if v <= -2 => Level::Critical,
        -1 => Level::Error,
        0 => Level::Warning,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    }
}
