//! Payloads describing what the database did.
//!
//! Each payload is built by the subsystem that produced the event, passed by value to exactly
//! one listener callback, and then dropped. Each renders as a single line via [`SafeFormat`],
//! and its [`Display`] implementation is that line without redaction markers.
//!
//! [`SafeFormat`]: crate::SafeFormat
//! [`Display`]: std::fmt::Display

mod background;
mod compaction;
mod flush;
mod manifest;
mod table;
mod wal;
mod write_stall;


pub use self::{
    background::BackgroundError,
    compaction::CompactionInfo,
    flush::FlushInfo,
    manifest::{ManifestCreateInfo, ManifestDeleteInfo},
    table::{TableCreateInfo, TableCreateReason, TableDeleteInfo, TableIngestInfo, TableStatsInfo},
    wal::{WalCreateInfo, WalDeleteInfo},
    write_stall::WriteStallBeginInfo,
};


use crate::error::EventError;


/// The progress of a two-phase job, such as a compaction or flush.
///
/// The begin event of a job is `InProgress`, and its end event is either `Completed` or `Failed`.
/// An error takes precedence over completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationState {
    InProgress,
    Completed,
    Failed,
}

impl OperationState {
    #[inline]
    #[must_use]
    pub const fn from_outcome(done: bool, err: Option<&EventError>) -> Self {
        match (err, done) {
            (Some(_), _)  => Self::Failed,
            (None, true)  => Self::Completed,
            (None, false) => Self::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Implements `Display` by rendering with `SafeFormat` and stripping the redaction markers.
macro_rules! display_stripped {
    ($($payload:ty),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $payload {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(&$crate::redact::SafeFormat::redactable(self).stripped())
                }
            }
        )+
    };
}

pub(crate) use display_stripped;


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn error_dominates_completion() {
        let err = EventError::msg("boom");
        assert_eq!(OperationState::from_outcome(true,  Some(&err)), OperationState::Failed);
        assert_eq!(OperationState::from_outcome(false, Some(&err)), OperationState::Failed);
        assert_eq!(OperationState::from_outcome(true,  None),       OperationState::Completed);
        assert_eq!(OperationState::from_outcome(false, None),       OperationState::InProgress);
    }

    #[test]
    fn terminal_states() {
        assert!(!OperationState::InProgress.is_terminal());
        assert!(OperationState::Completed.is_terminal());
        assert!(OperationState::Failed.is_terminal());
    }
}
