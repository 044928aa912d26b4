mod dispatcher;
mod tee;


pub use self::dispatcher::EventDispatcher;


use std::sync::Arc;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{
    error::EventError,
    events::{
        BackgroundError, CompactionInfo, FlushInfo, ManifestCreateInfo, ManifestDeleteInfo,
        TableCreateInfo, TableDeleteInfo, TableIngestInfo, TableStatsInfo, WalCreateInfo,
        WalDeleteInfo, WriteStallBeginInfo,
    },
    logger::SharedLogger,
    redact::SafeFormat as _,
};


/// A callback which receives an event payload.
pub type Callback<Info> = Arc<dyn Fn(Info) + Send + Sync>;
/// A callback for an event which has no payload.
pub type NotifyCallback = Arc<dyn Fn() + Send + Sync>;


/// Callbacks which the database invokes when significant events occur.
///
/// Every slot is optional. Before the database dispatches any event, the listener is normalized
/// with [`ensure_defaults`] or [`into_dispatcher`], which fill each unset slot with a callback that
/// does nothing. The one exception is [`background_error`], which by default logs the error.
///
/// # Callback requirements
///
/// Callbacks are invoked synchronously by the database's background threads, and the calling
/// thread makes no progress until the callback returns; for instance, stalled writes might not
/// be released. Callbacks should therefore return promptly, should not perform long-running I/O,
/// and should not synchronously call back into the database.
///
/// Callbacks may be invoked concurrently from different threads, including the same callback
/// for unrelated jobs. Callbacks which share mutable state must synchronize it themselves.
///
/// [`ensure_defaults`]: EventListener::ensure_defaults
/// [`into_dispatcher`]: EventListener::into_dispatcher
/// [`background_error`]: EventListener::background_error
#[derive(Default, Clone)]
pub struct EventListener {
    /// Invoked whenever a background operation such as a flush or compaction fails, if no
    /// narrower event describes the failure.
    pub background_error:   Option<Callback<EventError>>,
    /// Invoked after the inputs of a compaction have been chosen, before any output is written.
    pub compaction_begin:   Option<Callback<CompactionInfo>>,
    /// Invoked after a compaction has completed and its result has been installed,
    /// or after it failed.
    pub compaction_end:     Option<Callback<CompactionInfo>>,
    /// Invoked after the inputs of a flush have been chosen, before any output is written.
    pub flush_begin:        Option<Callback<FlushInfo>>,
    /// Invoked after a flush has completed and its result has been installed,
    /// or after it failed.
    pub flush_end:          Option<Callback<FlushInfo>>,
    pub manifest_created:   Option<Callback<ManifestCreateInfo>>,
    pub manifest_deleted:   Option<Callback<ManifestDeleteInfo>>,
    pub table_created:      Option<Callback<TableCreateInfo>>,
    pub table_deleted:      Option<Callback<TableDeleteInfo>>,
    /// Invoked after externally-built tables have been ingested.
    pub table_ingested:     Option<Callback<TableIngestInfo>>,
    /// Invoked at most once, when statistics have been loaded for every table that existed
    /// when the database was opened.
    pub table_stats_loaded: Option<Callback<TableStatsInfo>>,
    pub wal_created:        Option<Callback<WalCreateInfo>>,
    pub wal_deleted:        Option<Callback<WalDeleteInfo>>,
    /// Invoked when writes start being intentionally delayed.
    pub write_stall_begin:  Option<Callback<WriteStallBeginInfo>>,
    /// Invoked when delayed writes are released.
    pub write_stall_end:    Option<NotifyCallback>,
}

macro_rules! slot_setters {
    ($($setter:ident => $slot:ident: $info:ty),+ $(,)?) => {
        $(
            #[must_use]
            pub fn $setter<F>(mut self, callback: F) -> Self
            where
                F: Fn($info) + Send + Sync + 'static,
            {
                self.$slot = Some(Arc::new(callback));
                self
            }
        )+
    };
}

impl EventListener {
    /// A listener with every slot unset.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    slot_setters! {
        on_background_error   => background_error:   EventError,
        on_compaction_begin   => compaction_begin:   CompactionInfo,
        on_compaction_end     => compaction_end:     CompactionInfo,
        on_flush_begin        => flush_begin:        FlushInfo,
        on_flush_end          => flush_end:          FlushInfo,
        on_manifest_created   => manifest_created:   ManifestCreateInfo,
        on_manifest_deleted   => manifest_deleted:   ManifestDeleteInfo,
        on_table_created      => table_created:      TableCreateInfo,
        on_table_deleted      => table_deleted:      TableDeleteInfo,
        on_table_ingested     => table_ingested:     TableIngestInfo,
        on_table_stats_loaded => table_stats_loaded: TableStatsInfo,
        on_wal_created        => wal_created:        WalCreateInfo,
        on_wal_deleted        => wal_deleted:        WalDeleteInfo,
        on_write_stall_begin  => write_stall_begin:  WriteStallBeginInfo,
    }

    #[must_use]
    pub fn on_write_stall_end<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.write_stall_end = Some(Arc::new(callback));
        self
    }

    /// Fill every unset slot with its default: background errors are logged to `logger`,
    /// and every other event is ignored.
    ///
    /// Slots which are already set are left untouched, so calling this more than once has
    /// the same effect as calling it once.
    pub fn ensure_defaults(&mut self, logger: &SharedLogger) {
        if self.background_error.is_none() {
            self.background_error = Some(log_background_errors(logger));
        }
        self.compaction_begin.get_or_insert_with(ignore);
        self.compaction_end.get_or_insert_with(ignore);
        self.flush_begin.get_or_insert_with(ignore);
        self.flush_end.get_or_insert_with(ignore);
        self.manifest_created.get_or_insert_with(ignore);
        self.manifest_deleted.get_or_insert_with(ignore);
        self.table_created.get_or_insert_with(ignore);
        self.table_deleted.get_or_insert_with(ignore);
        self.table_ingested.get_or_insert_with(ignore);
        self.table_stats_loaded.get_or_insert_with(ignore);
        self.wal_created.get_or_insert_with(ignore);
        self.wal_deleted.get_or_insert_with(ignore);
        self.write_stall_begin.get_or_insert_with(ignore);
        self.write_stall_end.get_or_insert_with(ignore_notification);
    }

    /// Normalize the listener (see [`ensure_defaults`]) into the form the database dispatches
    /// events through.
    ///
    /// [`ensure_defaults`]: EventListener::ensure_defaults
    #[must_use]
    pub fn into_dispatcher(self, logger: &SharedLogger) -> EventDispatcher {
        tracing::debug!(listener = ?self, "building event dispatcher");

        EventDispatcher {
            background_error:   self.background_error
                .unwrap_or_else(|| log_background_errors(logger)),
            compaction_begin:   self.compaction_begin.unwrap_or_else(ignore),
            compaction_end:     self.compaction_end.unwrap_or_else(ignore),
            flush_begin:        self.flush_begin.unwrap_or_else(ignore),
            flush_end:          self.flush_end.unwrap_or_else(ignore),
            manifest_created:   self.manifest_created.unwrap_or_else(ignore),
            manifest_deleted:   self.manifest_deleted.unwrap_or_else(ignore),
            table_created:      self.table_created.unwrap_or_else(ignore),
            table_deleted:      self.table_deleted.unwrap_or_else(ignore),
            table_ingested:     self.table_ingested.unwrap_or_else(ignore),
            table_stats_loaded: self.table_stats_loaded.unwrap_or_else(ignore),
            wal_created:        self.wal_created.unwrap_or_else(ignore),
            wal_deleted:        self.wal_deleted.unwrap_or_else(ignore),
            write_stall_begin:  self.write_stall_begin.unwrap_or_else(ignore),
            write_stall_end:    self.write_stall_end.unwrap_or_else(ignore_notification),
        }
    }

    /// Whether every slot is set.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.background_error.is_some()
            && self.compaction_begin.is_some()
            && self.compaction_end.is_some()
            && self.flush_begin.is_some()
            && self.flush_end.is_some()
            && self.manifest_created.is_some()
            && self.manifest_deleted.is_some()
            && self.table_created.is_some()
            && self.table_deleted.is_some()
            && self.table_ingested.is_some()
            && self.table_stats_loaded.is_some()
            && self.wal_created.is_some()
            && self.wal_deleted.is_some()
            && self.write_stall_begin.is_some()
            && self.write_stall_end.is_some()
    }
}

impl Debug for EventListener {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("EventListener")
            .field("background_error",   &self.background_error.is_some())
            .field("compaction_begin",   &self.compaction_begin.is_some())
            .field("compaction_end",     &self.compaction_end.is_some())
            .field("flush_begin",        &self.flush_begin.is_some())
            .field("flush_end",          &self.flush_end.is_some())
            .field("manifest_created",   &self.manifest_created.is_some())
            .field("manifest_deleted",   &self.manifest_deleted.is_some())
            .field("table_created",      &self.table_created.is_some())
            .field("table_deleted",      &self.table_deleted.is_some())
            .field("table_ingested",     &self.table_ingested.is_some())
            .field("table_stats_loaded", &self.table_stats_loaded.is_some())
            .field("wal_created",        &self.wal_created.is_some())
            .field("wal_deleted",        &self.wal_deleted.is_some())
            .field("write_stall_begin",  &self.write_stall_begin.is_some())
            .field("write_stall_end",    &self.write_stall_end.is_some())
            .finish()
    }
}

fn ignore<Info: 'static>() -> Callback<Info> {
    Arc::new(|_: Info| {})
}

fn ignore_notification() -> NotifyCallback {
    Arc::new(|| {})
}

/// The default background error callback.
pub(crate) fn log_background_errors(logger: &SharedLogger) -> Callback<EventError> {
    let logger = Arc::clone(logger);
    Arc::new(move |err: EventError| {
        logger.infof(format_args!("{}", BackgroundError(&err).redactable()));
    })
}
