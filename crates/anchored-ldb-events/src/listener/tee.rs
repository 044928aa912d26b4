use std::sync::Arc;

use super::{Callback, EventListener, NotifyCallback};


impl EventListener {
    /// Combine two listeners, so that each event is passed to `first` and then to `second`.
    ///
    /// A slot which is set in only one of the listeners is used as-is, and a slot which is unset
    /// in both remains unset, so its default is still decided by normalization.
    #[must_use]
    pub fn tee(first: Self, second: Self) -> Self {
        tracing::trace!(?first, ?second, "combining event listeners");

        Self {
            background_error:   tee_slot(first.background_error,   second.background_error),
            compaction_begin:   tee_slot(first.compaction_begin,   second.compaction_begin),
            compaction_end:     tee_slot(first.compaction_end,     second.compaction_end),
            flush_begin:        tee_slot(first.flush_begin,        second.flush_begin),
            flush_end:          tee_slot(first.flush_end,          second.flush_end),
            manifest_created:   tee_slot(first.manifest_created,   second.manifest_created),
            manifest_deleted:   tee_slot(first.manifest_deleted,   second.manifest_deleted),
            table_created:      tee_slot(first.table_created,      second.table_created),
            table_deleted:      tee_slot(first.table_deleted,      second.table_deleted),
            table_ingested:     tee_slot(first.table_ingested,     second.table_ingested),
            table_stats_loaded: tee_slot(first.table_stats_loaded, second.table_stats_loaded),
            wal_created:        tee_slot(first.wal_created,        second.wal_created),
            wal_deleted:        tee_slot(first.wal_deleted,        second.wal_deleted),
            write_stall_begin:  tee_slot(first.write_stall_begin,  second.write_stall_begin),
            write_stall_end:    tee_notify(first.write_stall_end,  second.write_stall_end),
        }
    }
}

fn tee_slot<Info: Clone + 'static>(
    first:  Option<Callback<Info>>,
    second: Option<Callback<Info>>,
) -> Option<Callback<Info>> {
    match (first, second) {
        (Some(first), Some(second)) => Some(Arc::new(move |info: Info| {
            first(info.clone());
            second(info);
        })),
        (first, None)  => first,
        (None, second) => second,
    }
}

fn tee_notify(
    first:  Option<NotifyCallback>,
    second: Option<NotifyCallback>,
) -> Option<NotifyCallback> {
    match (first, second) {
        (Some(first), Some(second)) => Some(Arc::new(move || {
            first();
            second();
        })),
        (first, None)  => first,
        (None, second) => second,
    }
}
