use std::fmt::{Result as FmtResult, Write as _};

use crate::redact::{SafeFormat, SafePrinter, Sensitive};
use super::display_stripped;


/// Reported when incoming writes start being delayed to let background work catch up.
///
/// The matching end of the stall has no payload; see
/// [`WRITE_STALL_ENDING_MESSAGE`](crate::WRITE_STALL_ENDING_MESSAGE).
#[derive(Debug, Clone)]
pub struct WriteStallBeginInfo {
    pub reason: String,
}

impl SafeFormat for WriteStallBeginInfo {
    fn safe_format(&self, w: &mut SafePrinter<'_>) -> FmtResult {
        write!(w, "write stall beginning: {}", Sensitive(&self.reason))
    }
}

display_stripped!(WriteStallBeginInfo);
