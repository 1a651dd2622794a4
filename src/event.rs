//! Log callback system.
//!
//! The library never writes to stdout or links a logging backend. Hosts that
//! want diagnostics install a callback with [`set_log_callback`]; every edit
//! cycle then reports its classification and resulting caret through it.

use std::sync::{Mutex, OnceLock, PoisonError};

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback, replacing any previous one.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    let mut guard = log_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Some(Box::new(callback));
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    let mut guard = log_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// Emit a log message.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

/// Emit a log message built on demand.
///
/// `message` only runs when a callback is installed, so hot paths can log
/// formatted state without paying for the formatting.
pub fn emit_log_with<F>(level: LogLevel, message: F)
where
    F: FnOnce() -> String,
{
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, &message());
        }
    }
}
