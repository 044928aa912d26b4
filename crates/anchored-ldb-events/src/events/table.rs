use std::path::PathBuf;
use std::fmt::{Display, Formatter, Result as FmtResult, Write as _};

use crate::{
    error::EventError,
    format::{FileNumber, JobId, SequenceNumber},
    humanize::Bytes,
    redact::{Safe, SafeFormat, SafePrinter, Sensitive},
    table_info::IngestedTable,
};
use super::display_stripped;


/// Why a table file was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableCreateReason {
    Compacting,
    Flushing,
    Ingesting,
}

impl TableCreateReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compacting => "compacting",
            Self::Flushing   => "flushing",
            Self::Ingesting  => "ingesting",
        }
    }
}

impl Display for TableCreateReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Reported when a table file has been created.
#[derive(Debug, Clone)]
pub struct TableCreateInfo {
    pub job_id:      JobId,
    pub reason:      TableCreateReason,
    /// Not included in the rendered line.
    pub path:        PathBuf,
    pub file_number: FileNumber,
}

impl SafeFormat for TableCreateInfo {
    fn safe_format(&self, w: &mut SafePrinter<'_>) -> FmtResult {
        write!(
            w,
            "[JOB {}] {}: sstable created {}",
            Safe(self.job_id), Safe(self.reason), Safe(self.file_number),
        )
    }
}

/// Reported after an obsolete table file has been deleted, or failed to be deleted.
#[derive(Debug, Clone)]
pub struct TableDeleteInfo {
    pub job_id:      JobId,
    /// Not included in the rendered line.
    pub path:        PathBuf,
    pub file_number: FileNumber,
    pub err:         Option<EventError>,
}

impl SafeFormat for TableDeleteInfo {
    fn safe_format(&self, w: &mut SafePrinter<'_>) -> FmtResult {
        match &self.err {
            Some(err) => write!(
                w,
                "[JOB {}] sstable delete error {}: {}",
                Safe(self.job_id), Safe(self.file_number), Sensitive(err),
            ),
            None => write!(
                w,
                "[JOB {}] sstable deleted {}",
                Safe(self.job_id), Safe(self.file_number),
            ),
        }
    }
}

/// Reported after externally-built tables have been ingested into the database.
#[derive(Debug, Clone)]
pub struct TableIngestInfo {
    pub job_id:         JobId,
    /// The ingested tables, in the order they were ingested.
    pub tables:         Vec<IngestedTable>,
    /// The sequence number assigned to every entry of the ingested tables.
    pub global_seq_num: SequenceNumber,
    pub err:            Option<EventError>,
}

impl SafeFormat for TableIngestInfo {
    fn safe_format(&self, w: &mut SafePrinter<'_>) -> FmtResult {
        if let Some(err) = &self.err {
            return write!(w, "[JOB {}] ingest error: {}", Safe(self.job_id), Sensitive(err));
        }

        write!(w, "[JOB {}] ingested", Safe(self.job_id))?;
        for (idx, ingested) in self.tables.iter().enumerate() {
            if idx > 0 {
                w.write_char(',')?;
            }
            write!(
                w,
                " {}:{} ({})",
                Safe(ingested.level),
                Safe(ingested.table.file_number),
                Safe(Bytes(ingested.table.size)),
            )?;
        }
        Ok(())
    }
}

/// Reported once, after statistics for every table that existed when the database was opened
/// have been loaded.
#[derive(Debug, Clone, Copy)]
pub struct TableStatsInfo {
    pub job_id: JobId,
}

impl SafeFormat for TableStatsInfo {
    fn safe_format(&self, w: &mut SafePrinter<'_>) -> FmtResult {
        write!(w, "[JOB {}] all initial table stats loaded", Safe(self.job_id))
    }
}

display_stripped!(TableCreateInfo, TableDeleteInfo, TableIngestInfo, TableStatsInfo);


#[cfg(test)]
mod tests {
    use crate::format::Level;
    use crate::table_info::TableInfo;
    use super::*;


    #[test]
    fn created() {
        for (reason, expected) in [
            (TableCreateReason::Compacting, "[JOB 4] compacting: sstable created 000020"),
            (TableCreateReason::Flushing,   "[JOB 4] flushing: sstable created 000020"),
            (TableCreateReason::Ingesting,  "[JOB 4] ingesting: sstable created 000020"),
        ] {
            let info = TableCreateInfo {
                job_id:      JobId(4),
                reason,
                path:        PathBuf::from("/db/000020.ldb"),
                file_number: FileNumber(20),
            };
            assert_eq!(info.to_string(), expected);
            assert_eq!(info.redactable().redacted(), expected);
        }
    }

    #[test]
    fn deleted() {
        let mut info = TableDeleteInfo {
            job_id:      JobId(8),
            path:        PathBuf::from("/db/000011.ldb"),
            file_number: FileNumber(11),
            err:         None,
        };
        assert_eq!(info.to_string(), "[JOB 8] sstable deleted 000011");

        info.err = Some(EventError::msg("permission denied"));
        assert_eq!(
            info.redactable().as_marked(),
            "[JOB 8] sstable delete error 000011: ‹permission denied›",
        );
    }

    #[test]
    fn ingested_in_order() {
        let info = TableIngestInfo {
            job_id:         JobId(2),
            tables:         vec![
                IngestedTable {
                    table: TableInfo { file_number: FileNumber(31), size: 2048 },
                    level: Level::new(6).unwrap(),
                },
                IngestedTable {
                    table: TableInfo { file_number: FileNumber(30), size: 100 },
                    level: Level::ZERO,
                },
            ],
            global_seq_num: SequenceNumber(77),
            err:            None,
        };
        assert_eq!(info.to_string(), "[JOB 2] ingested L6:000031 (2.0K), L0:000030 (100B)");

        let failed = TableIngestInfo { err: Some(EventError::msg("overlap")), ..info };
        assert_eq!(failed.redactable().as_marked(), "[JOB 2] ingest error: ‹overlap›");
    }

    #[test]
    fn stats_loaded() {
        let info = TableStatsInfo { job_id: JobId(1) };
        assert_eq!(info.to_string(), "[JOB 1] all initial table stats loaded");
    }
}
