use std::fmt::{Display, Formatter, Result as FmtResult, Write as _};

use crate::{
    format::{FileNumber, Level},
    humanize::Bytes,
    redact::{Safe, SafeFormat, SafePrinter},
};


/// Describes one table file.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableInfo {
    pub file_number: FileNumber,
    /// The size of the table file, in bytes.
    pub size:        u64,
}

/// The tables of one level which were involved in some job, in the order the job lists them.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct LevelInfo {
    pub level:  Level,
    pub tables: Vec<TableInfo>,
}

impl LevelInfo {
    #[must_use]
    pub fn total_size(&self) -> u64 {
        total_size(&self.tables)
    }

    /// The file numbers of the level's tables, separated by spaces, such as `000012 000013`.
    #[must_use]
    pub fn file_numbers(&self) -> impl Display {
        FileNumbers(&self.tables)
    }
}

impl SafeFormat for LevelInfo {
    fn safe_format(&self, w: &mut SafePrinter<'_>) -> FmtResult {
        write!(
            w,
            "{} [{}] ({})",
            Safe(self.level),
            Safe(self.file_numbers()),
            Safe(Bytes(self.total_size())),
        )
    }
}

impl Display for LevelInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.redactable().stripped())
    }
}

/// A table which was ingested into the database, and the level it was placed in.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestedTable {
    pub table: TableInfo,
    pub level: Level,
}

#[must_use]
pub(crate) fn total_size(tables: &[TableInfo]) -> u64 {
    tables
        .iter()
        .fold(0_u64, |total, table| total.saturating_add(table.size))
}

/// Renders the file numbers of some tables separated by spaces.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FileNumbers<'a>(pub(crate) &'a [TableInfo]);

impl Display for FileNumbers<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (idx, table) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_char(' ')?;
            }
            Display::fmt(&table.file_number, f)?;
        }
        Ok(())
    }
}
