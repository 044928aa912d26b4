#![cfg_attr(test, allow(unused_crate_dependencies, reason = "`tracing-subscriber` is unused"))]

//! Structured lifecycle events for anchored-leveldb.
//!
//! The database reports compactions, flushes, `MANIFEST` and write-ahead log rotation, table
//! creation, deletion and ingestion, and write stalls to an [`EventListener`]. Each event is an
//! immutable payload type (see [`events`]) which renders as a single human-readable line.
//!
//! Rendering is redaction-aware. Identifiers, levels, counts, sizes and rates are [`Safe`];
//! free-form text such as error messages or stall reasons is [`Sensitive`] and is enclosed in
//! markers within a [`RedactableString`], so that external tooling can elide it without
//! reparsing the line.
//!
//! # Delivery
//!
//! Callbacks are invoked synchronously on whichever background thread produced the event, and
//! the producing thread does not make progress until the callback returns. Callbacks should not
//! perform long-running I/O, and must not call back into the database in a way which could wait
//! on the calling thread. Several callbacks may run concurrently on different threads; if
//! callbacks share state, synchronizing that state is up to the caller.
//!
//! Unset callbacks do nothing, except for the background error callback, which logs the error
//! through a [`Logger`]. [`logging_event_listener`] builds a listener which logs every event.

pub mod events;

mod config_constants;
mod error;
mod format;
mod humanize;
mod listener;
mod logger;
mod logging_listener;
mod redact;
mod table_info;


pub use self::{
    config_constants::{NUM_LEVELS, WRITE_STALL_ENDING_MESSAGE},
    error::{EventError, InvalidLevel},
    format::{FileNumber, JobId, Level, SequenceNumber},
    humanize::{Bytes, BytesPerSecond},
    listener::{Callback, EventDispatcher, EventListener, NotifyCallback},
    logger::{default_logger, Logger, SharedLogger, StderrLogger, TracingLogger},
    logging_listener::logging_event_listener,
    redact::{RedactableString, Safe, SafeFormat, SafePrinter, Sensitive},
    table_info::{IngestedTable, LevelInfo, TableInfo},
};
