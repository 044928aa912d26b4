use std::path::PathBuf;
use std::fmt::{Result as FmtResult, Write as _};

use crate::{
    error::EventError,
    format::{FileNumber, JobId},
    redact::{Safe, SafeFormat, SafePrinter, Sensitive},
};
use super::display_stripped;


/// Reported after a write-ahead log has been created, or failed to be created.
#[derive(Debug, Clone)]
pub struct WalCreateInfo {
    pub job_id:               JobId,
    /// Not included in the rendered line.
    pub path:                 PathBuf,
    pub file_number:          FileNumber,
    /// The previous log which was recycled to create this one, or [`FileNumber::ZERO`] if
    /// no log was recycled.
    pub recycled_file_number: FileNumber,
    pub err:                  Option<EventError>,
}

impl WalCreateInfo {
    #[inline]
    #[must_use]
    pub const fn recycled(&self) -> Option<FileNumber> {
        if self.recycled_file_number.is_zero() {
            None
        } else {
            Some(self.recycled_file_number)
        }
    }
}

impl SafeFormat for WalCreateInfo {
    fn safe_format(&self, w: &mut SafePrinter<'_>) -> FmtResult {
        if let Some(err) = &self.err {
            return write!(w, "[JOB {}] WAL create error: {}", Safe(self.job_id), Sensitive(err));
        }

        write!(w, "[JOB {}] WAL created {}", Safe(self.job_id), Safe(self.file_number))?;
        if let Some(recycled) = self.recycled() {
            write!(w, " (recycled {})", Safe(recycled))?;
        }
        Ok(())
    }
}

/// Reported after an obsolete write-ahead log has been deleted, or failed to be deleted.
#[derive(Debug, Clone)]
pub struct WalDeleteInfo {
    pub job_id:      JobId,
    /// Not included in the rendered line.
    pub path:        PathBuf,
    pub file_number: FileNumber,
    pub err:         Option<EventError>,
}

impl SafeFormat for WalDeleteInfo {
    fn safe_format(&self, w: &mut SafePrinter<'_>) -> FmtResult {
        match &self.err {
            Some(err) => write!(
                w,
                "[JOB {}] WAL delete error: {}",
                Safe(self.job_id), Sensitive(err),
            ),
            None => write!(
                w,
                "[JOB {}] WAL deleted {}",
                Safe(self.job_id), Safe(self.file_number),
            ),
        }
    }
}

display_stripped!(WalCreateInfo, WalDeleteInfo);


#[cfg(test)]
mod tests {
    use super::*;


    fn created(recycled: u64) -> WalCreateInfo {
        WalCreateInfo {
            job_id:               JobId(5),
            path:                 PathBuf::from("/db/000042.log"),
            file_number:          FileNumber(42),
            recycled_file_number: FileNumber(recycled),
            err:                  None,
        }
    }

    #[test]
    fn without_recycling() {
        let info = created(0);
        assert_eq!(info.recycled(), None);
        assert_eq!(info.to_string(), "[JOB 5] WAL created 000042");
        assert!(!info.to_string().contains("recycled"));
    }

    #[test]
    fn with_recycling() {
        let info = created(39);
        assert_eq!(info.recycled(), Some(FileNumber(39)));
        assert_eq!(info.to_string(), "[JOB 5] WAL created 000042 (recycled 000039)");
    }

    #[test]
    fn create_error() {
        let info = WalCreateInfo { err: Some(EventError::msg("EIO")), ..created(39) };
        assert_eq!(info.redactable().as_marked(), "[JOB 5] WAL create error: ‹EIO›");
    }

    #[test]
    fn deleted() {
        let mut info = WalDeleteInfo {
            job_id:      JobId(6),
            path:        PathBuf::from("/db/000040.log"),
            file_number: FileNumber(40),
            err:         None,
        };
        assert_eq!(info.to_string(), "[JOB 6] WAL deleted 000040");

        info.err = Some(EventError::msg("in use"));
        assert_eq!(info.redactable().redacted(), "[JOB 6] WAL delete error: ‹×›");
    }
}
