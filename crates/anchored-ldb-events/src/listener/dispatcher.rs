use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{
    error::EventError,
    events::{
        CompactionInfo, FlushInfo, ManifestCreateInfo, ManifestDeleteInfo, TableCreateInfo,
        TableDeleteInfo, TableIngestInfo, TableStatsInfo, WalCreateInfo, WalDeleteInfo,
        WriteStallBeginInfo,
    },
    logger::default_logger,
};
use super::{Callback, EventListener, NotifyCallback};


/// An [`EventListener`] whose every slot is populated, through which the database dispatches
/// events.
///
/// Each method invokes the corresponding callback on the calling thread and returns once the
/// callback returns. Nothing is queued, retried, or reordered.
///
/// Cloning a dispatcher is cheap, and clones share the same callbacks.
#[derive(Clone)]
pub struct EventDispatcher {
    pub(super) background_error:   Callback<EventError>,
    pub(super) compaction_begin:   Callback<CompactionInfo>,
    pub(super) compaction_end:     Callback<CompactionInfo>,
    pub(super) flush_begin:        Callback<FlushInfo>,
    pub(super) flush_end:          Callback<FlushInfo>,
    pub(super) manifest_created:   Callback<ManifestCreateInfo>,
    pub(super) manifest_deleted:   Callback<ManifestDeleteInfo>,
    pub(super) table_created:      Callback<TableCreateInfo>,
    pub(super) table_deleted:      Callback<TableDeleteInfo>,
    pub(super) table_ingested:     Callback<TableIngestInfo>,
    pub(super) table_stats_loaded: Callback<TableStatsInfo>,
    pub(super) wal_created:        Callback<WalCreateInfo>,
    pub(super) wal_deleted:        Callback<WalDeleteInfo>,
    pub(super) write_stall_begin:  Callback<WriteStallBeginInfo>,
    pub(super) write_stall_end:    NotifyCallback,
}

impl EventDispatcher {
    #[inline]
    pub fn background_error(&self, err: EventError) {
        (self.background_error)(err);
    }

    #[inline]
    pub fn compaction_begin(&self, info: CompactionInfo) {
        (self.compaction_begin)(info);
    }

    #[inline]
    pub fn compaction_end(&self, info: CompactionInfo) {
        (self.compaction_end)(info);
    }

    #[inline]
    pub fn flush_begin(&self, info: FlushInfo) {
        (self.flush_begin)(info);
    }

    #[inline]
    pub fn flush_end(&self, info: FlushInfo) {
        (self.flush_end)(info);
    }

    #[inline]
    pub fn manifest_created(&self, info: ManifestCreateInfo) {
        (self.manifest_created)(info);
    }

    #[inline]
    pub fn manifest_deleted(&self, info: ManifestDeleteInfo) {
        (self.manifest_deleted)(info);
    }

    #[inline]
    pub fn table_created(&self, info: TableCreateInfo) {
        (self.table_created)(info);
    }

    #[inline]
    pub fn table_deleted(&self, info: TableDeleteInfo) {
        (self.table_deleted)(info);
    }

    #[inline]
    pub fn table_ingested(&self, info: TableIngestInfo) {
        (self.table_ingested)(info);
    }

    #[inline]
    pub fn table_stats_loaded(&self, info: TableStatsInfo) {
        (self.table_stats_loaded)(info);
    }

    #[inline]
    pub fn wal_created(&self, info: WalCreateInfo) {
        (self.wal_created)(info);
    }

    #[inline]
    pub fn wal_deleted(&self, info: WalDeleteInfo) {
        (self.wal_deleted)(info);
    }

    #[inline]
    pub fn write_stall_begin(&self, info: WriteStallBeginInfo) {
        (self.write_stall_begin)(info);
    }

    #[inline]
    pub fn write_stall_end(&self) {
        (self.write_stall_end)();
    }
}

impl Default for EventDispatcher {
    /// Ignores every event except background errors, which are logged to the
    /// [`default_logger`].
    fn default() -> Self {
        EventListener::new().into_dispatcher(&default_logger())
    }
}

impl From<EventListener> for EventDispatcher {
    /// Equivalent to [`EventListener::into_dispatcher`] with the [`default_logger`].
    fn from(listener: EventListener) -> Self {
        listener.into_dispatcher(&default_logger())
    }
}

impl Debug for EventDispatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("EventDispatcher").finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use super::super::tests::dispatch_all;


    #[test]
    fn default_dispatcher_does_not_panic() {
        dispatch_all(&EventDispatcher::default());
        dispatch_all(&EventDispatcher::from(EventListener::new()));
    }

    #[test]
    fn clones_share_callbacks() {
        let flushes = Arc::new(AtomicUsize::new(0));
        let dispatcher = EventDispatcher::from(EventListener::new().on_flush_end({
            let flushes = Arc::clone(&flushes);
            move |_| { flushes.fetch_add(1, Ordering::Relaxed); }
        }));

        dispatch_all(&dispatcher);
        dispatch_all(&dispatcher.clone());
        assert_eq!(flushes.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn dispatch_from_several_threads() {
        let events = Arc::new(AtomicUsize::new(0));
        let counter = || {
            let events = Arc::clone(&events);
            move |_: TableStatsInfo| { events.fetch_add(1, Ordering::Relaxed); }
        };
        let dispatcher = EventDispatcher::from(
            EventListener::new().on_table_stats_loaded(counter()),
        );

        thread::scope(|scope| {
            for job in 0..8 {
                let dispatcher = dispatcher.clone();
                scope.spawn(move || {
                    for _ in 0..100 {
                        dispatcher.table_stats_loaded(TableStatsInfo {
                            job_id: crate::format::JobId(job),
                        });
                    }
                });
            }
        });

        assert_eq!(events.load(Ordering::Relaxed), 800);
    }
}
