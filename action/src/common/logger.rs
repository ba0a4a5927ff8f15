//! Logging subsystem.
use std::sync::Mutex;

use lazy_static::lazy_static;
use slog::{o, Drain};

lazy_static! {
    static ref LOGGER: slog::Logger = slog::Logger::root(
        Mutex::new(slog_json::Json::default(std::io::stderr())).map(slog::Fuse),
        o!("component" => "chain-action")
    );
}

/// Get the logger for the given module.
pub fn get_logger(module: &'static str) -> slog::Logger {
    LOGGER.new(o!("module" => module))
}
