use std::{fmt::Arguments, io::{self, Write}};

use super::Logger;


/// Writes each line to standard error, prefixed with `INFO: `.
#[derive(Default, Debug, Clone, Copy)]
pub struct StderrLogger;

impl Logger for StderrLogger {
    fn infof(&self, args: Arguments<'_>) {
        if let Err(err) = write_line(&mut io::stderr().lock(), args) {
            tracing::debug!("could not write an event line to stderr: {err}");
        }
    }
}

fn write_line<W: Write>(writer: &mut W, args: Arguments<'_>) -> io::Result<()> {
    writeln!(writer, "INFO: {args}")
}
