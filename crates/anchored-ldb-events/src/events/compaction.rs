use std::time::Duration;
use std::fmt::{Result as FmtResult, Write as _};

use crate::{
    error::EventError,
    format::JobId,
    humanize::{Bytes, BytesPerSecond, Seconds},
    redact::{Safe, SafeFormat, SafePrinter, Sensitive},
    table_info::LevelInfo,
};
use super::{display_stripped, OperationState};


/// Describes the beginning or end of a compaction.
///
/// The begin event is reported once the inputs of the compaction have been chosen, and has
/// `done == false` and no output tables. The end event is reported after the compaction's result
/// has been installed, or after the compaction failed, in which case `err` is set.
#[derive(Debug, Clone)]
pub struct CompactionInfo {
    pub job_id:   JobId,
    /// Why the compaction was started. Not included in the rendered line.
    pub reason:   String,
    /// The input tables, organized by level.
    pub input:    Vec<LevelInfo>,
    /// The output tables. These are empty in the begin event.
    pub output:   LevelInfo,
    pub duration: Duration,
    pub done:     bool,
    pub err:      Option<EventError>,
}

impl CompactionInfo {
    #[inline]
    #[must_use]
    pub const fn state(&self) -> OperationState {
        OperationState::from_outcome(self.done, self.err.as_ref())
    }

    #[must_use]
    pub fn output_size(&self) -> u64 {
        self.output.total_size()
    }

    fn safe_format_inputs(&self, w: &mut SafePrinter<'_>) -> FmtResult {
        for (idx, level_info) in self.input.iter().enumerate() {
            if idx > 0 {
                w.write_str(" + ")?;
            }
            level_info.safe_format(w)?;
        }
        Ok(())
    }
}

impl SafeFormat for CompactionInfo {
    fn safe_format(&self, w: &mut SafePrinter<'_>) -> FmtResult {
        if let Some(err) = &self.err {
            return write!(
                w,
                "[JOB {}] compaction to {} error: {}",
                Safe(self.job_id), Safe(self.output.level), Sensitive(err),
            );
        }

        if !self.done {
            write!(w, "[JOB {}] compacting ", Safe(self.job_id))?;
            return self.safe_format_inputs(w);
        }

        let output_size = self.output_size();
        write!(w, "[JOB {}] compacted ", Safe(self.job_id))?;
        self.safe_format_inputs(w)?;
        write!(
            w,
            " -> {} [{}] ({}), in {}, output rate {}",
            Safe(self.output.level),
            Safe(self.output.file_numbers()),
            Safe(Bytes(output_size)),
            Safe(Seconds(self.duration)),
            Safe(BytesPerSecond { bytes: output_size, elapsed: self.duration }),
        )
    }
}

display_stripped!(CompactionInfo);


#[cfg(test)]
mod tests {
    use crate::format::{FileNumber, Level};
    use crate::table_info::TableInfo;
    use super::*;


    fn level(level: u8, tables: &[(u64, u64)]) -> LevelInfo {
        LevelInfo {
            level:  Level::new(level).unwrap(),
            tables: tables
                .iter()
                .map(|&(file_number, size)| TableInfo { file_number: FileNumber(file_number), size })
                .collect(),
        }
    }

    fn compaction(done: bool, err: Option<EventError>) -> CompactionInfo {
        CompactionInfo {
            job_id:   JobId(7),
            reason:   String::from("size"),
            input:    vec![level(0, &[(100, 1000), (102, 23)]), level(1, &[(90, 2048)])],
            output:   if done { level(1, &[(101, 900)]) } else { level(1, &[]) },
            duration: Duration::from_millis(1500),
            done,
            err,
        }
    }

    #[test]
    fn in_progress() {
        let info = compaction(false, None);
        assert_eq!(info.state(), OperationState::InProgress);
        assert_eq!(
            info.to_string(),
            "[JOB 7] compacting L0 [000100 000102] (1023B) + L1 [000090] (2.0K)",
        );
    }

    #[test]
    fn completed() {
        let info = compaction(true, None);
        assert_eq!(info.state(), OperationState::Completed);
        assert_eq!(
            info.to_string(),
            "[JOB 7] compacted L0 [000100 000102] (1023B) + L1 [000090] (2.0K) \
             -> L1 [000101] (900B), in 1.5s, output rate 600B/s",
        );
    }

    #[test]
    fn error_dominates() {
        for done in [false, true] {
            let info = compaction(done, Some(EventError::msg("checksum mismatch")));
            assert_eq!(info.state(), OperationState::Failed);

            let line = info.redactable();
            assert_eq!(line.as_marked(), "[JOB 7] compaction to L1 error: ‹checksum mismatch›");
            assert_eq!(line.redacted(), "[JOB 7] compaction to L1 error: ‹×›");
            assert!(!line.as_marked().contains("output rate"));
        }
    }

    #[test]
    fn zero_duration_has_no_rate() {
        let info = CompactionInfo { duration: Duration::ZERO, ..compaction(true, None) };
        assert!(info.to_string().ends_with("in 0.0s, output rate n/a"));
    }

    #[test]
    fn safe_fields_survive_redaction() {
        let info = compaction(true, None);
        assert_eq!(info.redactable().redacted(), info.to_string());
    }
}
