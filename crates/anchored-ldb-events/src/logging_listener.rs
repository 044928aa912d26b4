use std::sync::Arc;

use crate::{
    config_constants::WRITE_STALL_ENDING_MESSAGE,
    listener::{Callback, EventListener, log_background_errors},
    logger::{default_logger, SharedLogger},
    redact::SafeFormat,
};


/// Build an [`EventListener`] which logs every event to `logger` at `INFO` level, or to the
/// [`default_logger`] if `None` is given.
///
/// Each line keeps its redaction markers. The end of a write stall is logged as
/// [`WRITE_STALL_ENDING_MESSAGE`].
#[must_use]
pub fn logging_event_listener(logger: Option<SharedLogger>) -> EventListener {
    let logger = logger.unwrap_or_else(default_logger);

    EventListener {
        background_error:   Some(log_background_errors(&logger)),
        compaction_begin:   Some(log_event(&logger)),
        compaction_end:     Some(log_event(&logger)),
        flush_begin:        Some(log_event(&logger)),
        flush_end:          Some(log_event(&logger)),
        manifest_created:   Some(log_event(&logger)),
        manifest_deleted:   Some(log_event(&logger)),
        table_created:      Some(log_event(&logger)),
        table_deleted:      Some(log_event(&logger)),
        table_ingested:     Some(log_event(&logger)),
        table_stats_loaded: Some(log_event(&logger)),
        wal_created:        Some(log_event(&logger)),
        wal_deleted:        Some(log_event(&logger)),
        write_stall_begin:  Some(log_event(&logger)),
        write_stall_end:    Some(Arc::new(move || {
            logger.infof(format_args!("{WRITE_STALL_ENDING_MESSAGE}"));
        })),
    }
}

fn log_event<Info: SafeFormat + 'static>(logger: &SharedLogger) -> Callback<Info> {
    let logger = Arc::clone(logger);
    Arc::new(move |info: Info| {
        logger.infof(format_args!("{}", info.redactable()));
    })
}


#[cfg(test)]
mod tests {
    use crate::listener::tests::{CapturingLogger, dispatch_all, shared};
    use super::*;


    #[test]
    fn every_slot_logs() {
        let logger = Arc::new(CapturingLogger::default());
        let listener = logging_event_listener(Some(shared(&logger)));
        assert!(listener.is_complete());

        // Normalizing a complete listener changes nothing.
        let mut normalized = listener.clone();
        normalized.ensure_defaults(&shared(&logger));
        assert!(Arc::ptr_eq(
            listener.wal_created.as_ref().unwrap(),
            normalized.wal_created.as_ref().unwrap(),
        ));

        dispatch_all(&listener.into_dispatcher(&shared(&logger)));
        assert_eq!(logger.lines(), [
            "background error: ‹background boom›",
            "[JOB 1] compacting L0 [] (0B)",
            "[JOB 1] compaction to L1 error: ‹boom›",
            "[JOB 2] flushing 1 memtable to L0",
            "[JOB 2] flushed 1 memtable to L0 [] (0B), in 0.0s, output rate n/a",
            "[JOB 3] MANIFEST created 000001",
            "[JOB 3] MANIFEST delete error: ‹boom›",
            "[JOB 4] flushing: sstable created 000001",
            "[JOB 4] sstable deleted 000001",
            "[JOB 5] ingested",
            "[JOB 6] all initial table stats loaded",
            "[JOB 7] WAL created 000001",
            "[JOB 7] WAL deleted 000001",
            "write stall beginning: ‹too many L0›",
            "write stall ending",
        ]);
    }

    #[test]
    fn missing_logger_uses_default() {
        let listener = logging_event_listener(None);
        assert!(listener.is_complete());
        dispatch_all(&listener.into_dispatcher(&default_logger()));
    }
}
