mod dyn_impls;
mod stderr_logger;
mod tracing_logger;


pub use self::{stderr_logger::StderrLogger, tracing_logger::TracingLogger};


use std::{
    fmt::{Arguments, Debug},
    sync::{Arc, LazyLock},
};


/// A [`Logger`] which can be shared between listener callbacks and background threads.
pub type SharedLogger = Arc<dyn Logger>;

/// Receives the human-readable lines rendered for database events.
///
/// Note that this has nothing to do with the write-ahead logs used by LevelDB; these messages
/// are purely for diagnostic or debugging purposes, not for database-critical purposes.
///
/// Lines are passed with their redaction markers intact, so that whatever ultimately stores
/// or ships the lines can redact sensitive spans. Any necessary buffering needs to be performed
/// within the `Logger`.
///
/// A logger is called synchronously from database background threads, possibly from several
/// threads at once.
pub trait Logger: Debug + Send + Sync {
    fn infof(&self, args: Arguments<'_>);
}

static DEFAULT_LOGGER: LazyLock<SharedLogger> = LazyLock::new(|| Arc::new(TracingLogger));

/// The process-wide fallback logger, used whenever no logger is provided.
///
/// This is a [`TracingLogger`], so lines go wherever the process's `tracing` subscriber
/// sends them.
#[must_use]
pub fn default_logger() -> SharedLogger {
    Arc::clone(&DEFAULT_LOGGER)
}
