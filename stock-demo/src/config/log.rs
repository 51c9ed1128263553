use env_logger::{Builder, Env};
use log::SetLoggerError;

/// Stdout carries the notifications, logs go to stderr.
const DEFAULT_FILTER: &str = "warn";

pub fn init() -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)).try_init()
}
