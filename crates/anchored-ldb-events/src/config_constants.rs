/// The maximum number of levels in the LevelDB database.
pub const NUM_LEVELS: u8 = 7;

/// Opens a span of sensitive text within a [`RedactableString`].
///
/// [`RedactableString`]: crate::RedactableString
pub(crate) const START_SENSITIVE: char = '‹';
/// Closes a span of sensitive text within a [`RedactableString`].
///
/// [`RedactableString`]: crate::RedactableString
pub(crate) const END_SENSITIVE: char = '›';
/// Replaces any marker character which occurs within sensitive text, so that a sensitive value
/// can never close its own span early.
pub(crate) const ESCAPED_MARKER: char = '?';
/// What a sensitive span becomes after redaction.
pub(crate) const REDACTED_SPAN: &str = "‹×›";

/// Logged when delayed writes are released. The write stall end event has no payload.
pub const WRITE_STALL_ENDING_MESSAGE: &str = "write stall ending";

/// The `tracing` target used by [`TracingLogger`](crate::TracingLogger).
pub(crate) const TRACING_TARGET: &str = "anchored_ldb_events";
