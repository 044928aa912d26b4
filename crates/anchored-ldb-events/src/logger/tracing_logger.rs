use std::fmt::Arguments;

use crate::config_constants::TRACING_TARGET;
use super::Logger;


/// Emits each line as an `INFO` event through [`tracing`], with the target
/// `anchored_ldb_events`.
#[derive(Default, Debug, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn infof(&self, args: Arguments<'_>) {
        tracing::info!(target: TRACING_TARGET, "{args}");
    }
}
