use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{config_constants::NUM_LEVELS, error::InvalidLevel};


/// Identifies a persisted file: a table file, a write-ahead log, or a `MANIFEST` file.
///
/// File numbers are assigned in increasing order by the database. They render zero-padded to six
/// digits, matching the names of the files themselves (e.g. `000123.ldb`).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FileNumber(pub u64);

impl FileNumber {
    /// Not the number of any file. Used, for instance, when no write-ahead log was recycled.
    pub const ZERO: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Display for FileNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:06}", self.0)
    }
}

/// Correlates the events of a single background job, such as the beginning and end of one
/// compaction.
///
/// Job IDs are opaque; they are intentionally not ordered, and should not be treated as
/// a count of jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct JobId(pub u64);

impl Display for JobId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct SequenceNumber(pub u64);

impl Display for SequenceNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// A level of the LSM tree. Invariant: the inner value is strictly less than [`NUM_LEVELS`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Level(u8);

impl Level {
    pub const ZERO: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        if level < NUM_LEVELS {
            Some(Self(level))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn inner(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn next_level(self) -> Option<Self> {
        // Note that `self.0 < NUM_LEVELS < u8::MAX`, so this doesn't overflow.
        Self::new(self.0 + 1)
    }

    /// Get all the levels in increasing order, from level 0 to level 6.
    #[inline]
    pub fn all_levels() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator {
        (0..NUM_LEVELS).map(Self)
    }
}

impl TryFrom<u8> for Level {
    type Error = InvalidLevel;

    #[inline]
    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or(InvalidLevel(level))
    }
}

impl From<Level> for u8 {
    #[inline]
    fn from(level: Level) -> Self {
        level.0
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "L{}", self.0)
    }
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn file_numbers_are_zero_padded() {
        assert_eq!(FileNumber(100).to_string(), "000100");
        assert_eq!(FileNumber(0).to_string(), "000000");
        assert_eq!(FileNumber(1_234_567).to_string(), "1234567");
        assert!(FileNumber::ZERO.is_zero());
        assert!(!FileNumber(3).is_zero());
    }

    #[test]
    fn level_bounds() {
        assert_eq!(Level::try_from(6).map(Level::inner), Ok(6));
        assert_eq!(Level::try_from(7), Err(InvalidLevel(7)));
        assert_eq!(Level::new(6).and_then(Level::next_level), None);
        assert_eq!(Level::ZERO.next_level(), Level::new(1));
        assert_eq!(Level::all_levels().len(), usize::from(NUM_LEVELS));
    }

    #[test]
    fn level_display() {
        assert_eq!(Level::ZERO.to_string(), "L0");
        assert_eq!(Level::new(3).map(|level| level.to_string()).as_deref(), Some("L3"));
    }
}
