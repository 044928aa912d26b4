use std::{fmt::Arguments, sync::Arc};

use super::Logger;


impl<L: Logger + ?Sized> Logger for &L {
    #[inline]
    fn infof(&self, args: Arguments<'_>) {
        (**self).infof(args);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    #[inline]
    fn infof(&self, args: Arguments<'_>) {
        self.as_ref().infof(args);
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    #[inline]
    fn infof(&self, args: Arguments<'_>) {
        self.as_ref().infof(args);
    }
}
