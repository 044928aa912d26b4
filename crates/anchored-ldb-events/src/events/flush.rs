use std::time::Duration;
use std::fmt::{Result as FmtResult, Write as _};

use crate::{
    error::EventError,
    format::JobId,
    humanize::{Bytes, BytesPerSecond, Seconds},
    redact::{Safe, SafeFormat, SafePrinter, Sensitive},
    table_info::{FileNumbers, TableInfo, total_size},
};
use super::{display_stripped, OperationState};


/// Describes the beginning or end of a flush of memtables to level 0.
#[derive(Debug, Clone)]
pub struct FlushInfo {
    pub job_id:   JobId,
    /// Why the flush was started. Not included in the rendered line.
    pub reason:   String,
    /// The number of memtables being flushed.
    pub input:    usize,
    /// The tables written by the flush. Empty in the begin event.
    pub output:   Vec<TableInfo>,
    pub duration: Duration,
    pub done:     bool,
    pub err:      Option<EventError>,
}

impl FlushInfo {
    #[inline]
    #[must_use]
    pub const fn state(&self) -> OperationState {
        OperationState::from_outcome(self.done, self.err.as_ref())
    }

    #[must_use]
    pub fn output_size(&self) -> u64 {
        total_size(&self.output)
    }

    const fn memtables(&self) -> &'static str {
        if self.input == 1 { "memtable" } else { "memtables" }
    }
}

impl SafeFormat for FlushInfo {
    fn safe_format(&self, w: &mut SafePrinter<'_>) -> FmtResult {
        if let Some(err) = &self.err {
            return write!(w, "[JOB {}] flush error: {}", Safe(self.job_id), Sensitive(err));
        }

        if !self.done {
            return write!(
                w,
                "[JOB {}] flushing {} {} to L0",
                Safe(self.job_id), Safe(self.input), Safe(self.memtables()),
            );
        }

        let output_size = self.output_size();
        write!(
            w,
            "[JOB {}] flushed {} {} to L0 [{}] ({}), in {}, output rate {}",
            Safe(self.job_id),
            Safe(self.input),
            Safe(self.memtables()),
            Safe(FileNumbers(&self.output)),
            Safe(Bytes(output_size)),
            Safe(Seconds(self.duration)),
            Safe(BytesPerSecond { bytes: output_size, elapsed: self.duration }),
        )
    }
}

display_stripped!(FlushInfo);
