use std::{error::Error as StdError, sync::Arc};
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::config_constants::NUM_LEVELS;


/// An error reported by the database as the outcome of some background operation.
///
/// The error is shared rather than owned, so that a payload carrying it can be cloned and so that
/// the same error can be handed to more than one listener. The message text is treated as
/// sensitive when rendered.
#[derive(Clone)]
pub struct EventError(Arc<dyn StdError + Send + Sync + 'static>);

impl EventError {
    #[inline]
    #[must_use]
    pub fn new<E: StdError + Send + Sync + 'static>(error: E) -> Self {
        Self(Arc::new(error))
    }

    /// An error consisting of nothing but a message.
    #[inline]
    #[must_use]
    pub fn msg<S: Into<String>>(message: S) -> Self {
        Self::new(MessageError(message.into()))
    }

    #[inline]
    #[must_use]
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }
}

impl Debug for EventError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_tuple("EventError").field(&self.0).finish()
    }
}

impl Display for EventError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl StdError for EventError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.0)
    }
}

#[derive(Error, Debug)]
#[error("{0}")]
struct MessageError(String);

/// A level number which is not less than [`NUM_LEVELS`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("level {0} is out of range; there are only {max} levels", max = NUM_LEVELS)]
pub struct InvalidLevel(pub u8);
