use std::path::PathBuf;
use std::fmt::{Result as FmtResult, Write as _};

use crate::{
    error::EventError,
    format::{FileNumber, JobId},
    redact::{Safe, SafeFormat, SafePrinter, Sensitive},
};
use super::display_stripped;


/// Reported after a `MANIFEST` file has been created, or failed to be created.
#[derive(Debug, Clone)]
pub struct ManifestCreateInfo {
    pub job_id:      JobId,
    /// Not included in the rendered line.
    pub path:        PathBuf,
    pub file_number: FileNumber,
    pub err:         Option<EventError>,
}

impl SafeFormat for ManifestCreateInfo {
    fn safe_format(&self, w: &mut SafePrinter<'_>) -> FmtResult {
        match &self.err {
            Some(err) => write!(
                w,
                "[JOB {}] MANIFEST create error: {}",
                Safe(self.job_id), Sensitive(err),
            ),
            None => write!(
                w,
                "[JOB {}] MANIFEST created {}",
                Safe(self.job_id), Safe(self.file_number),
            ),
        }
    }
}

/// Reported after an obsolete `MANIFEST` file has been deleted, or failed to be deleted.
#[derive(Debug, Clone)]
pub struct ManifestDeleteInfo {
    pub job_id:      JobId,
    /// Not included in the rendered line.
    pub path:        PathBuf,
    pub file_number: FileNumber,
    pub err:         Option<EventError>,
}

impl SafeFormat for ManifestDeleteInfo {
    fn safe_format(&self, w: &mut SafePrinter<'_>) -> FmtResult {
        match &self.err {
            Some(err) => write!(
                w,
                "[JOB {}] MANIFEST delete error: {}",
                Safe(self.job_id), Sensitive(err),
            ),
            None => write!(
                w,
                "[JOB {}] MANIFEST deleted {}",
                Safe(self.job_id), Safe(self.file_number),
            ),
        }
    }
}

display_stripped!(ManifestCreateInfo, ManifestDeleteInfo);
