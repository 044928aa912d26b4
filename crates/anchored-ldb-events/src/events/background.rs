use std::fmt::{Result as FmtResult, Write as _};

use crate::{
    error::EventError,
    redact::{SafeFormat, SafePrinter, Sensitive},
};
use super::display_stripped;


/// An error from a background operation which has no narrower event, rendered as
/// `background error: <err>`.
#[derive(Debug, Clone, Copy)]
pub struct BackgroundError<'a>(pub &'a EventError);

impl SafeFormat for BackgroundError<'_> {
    fn safe_format(&self, w: &mut SafePrinter<'_>) -> FmtResult {
        write!(w, "background error: {}", Sensitive(self.0))
    }
}

display_stripped!(BackgroundError<'_>);
