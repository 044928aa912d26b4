use std::fmt::{Display, Formatter, Result as FmtResult, Write};

use crate::config_constants::{END_SENSITIVE, ESCAPED_MARKER, REDACTED_SPAN, START_SENSITIVE};


/// A value which may be disclosed even where logs are redacted, such as a job ID, file number,
/// level, count, size, or rate.
///
/// Any marker characters within the value are replaced with `?`, so the value cannot open or
/// close a sensitive span.
#[derive(Debug, Clone, Copy)]
pub struct Safe<T>(pub T);

impl<T: Display> Display for Safe<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(EscapeMarkers(f), "{}", self.0)
    }
}

/// A value which might contain sensitive data, such as a path, an error message, or other
/// free-form text.
///
/// It is rendered between the markers `‹` and `›`. Any marker characters within the value are
/// replaced with `?`, so the value cannot end its own span.
#[derive(Debug, Clone, Copy)]
pub struct Sensitive<T>(pub T);

impl<T: Display> Display for Sensitive<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char(START_SENSITIVE)?;
        write!(EscapeMarkers(&mut *f), "{}", self.0)?;
        f.write_char(END_SENSITIVE)
    }
}

struct EscapeMarkers<'a, 'f>(&'a mut Formatter<'f>);

impl Write for EscapeMarkers<'_, '_> {
    fn write_str(&mut self, s: &str) -> FmtResult {
        let mut pieces = s.split([START_SENSITIVE, END_SENSITIVE]);
        if let Some(first) = pieces.next() {
            self.0.write_str(first)?;
        }
        for piece in pieces {
            self.0.write_char(ESCAPED_MARKER)?;
            self.0.write_str(piece)?;
        }
        Ok(())
    }
}

/// The sink that [`SafeFormat`] implementations render into.
///
/// Every interpolated value should be wrapped in [`Safe`] or [`Sensitive`]; literal text in
/// format strings is considered safe.
#[derive(Debug)]
pub struct SafePrinter<'a> {
    buf: &'a mut String,
}

impl SafePrinter<'_> {
    #[inline]
    pub fn print_safe<T: Display>(&mut self, value: T) -> FmtResult {
        write!(self, "{}", Safe(value))
    }

    #[inline]
    pub fn print_sensitive<T: Display>(&mut self, value: T) -> FmtResult {
        write!(self, "{}", Sensitive(value))
    }
}

impl Write for SafePrinter<'_> {
    #[inline]
    fn write_str(&mut self, s: &str) -> FmtResult {
        self.buf.push_str(s);
        Ok(())
    }
}

/// Renders a value as a [`RedactableString`].
pub trait SafeFormat {
    fn safe_format(&self, w: &mut SafePrinter<'_>) -> FmtResult;

    #[must_use]
    fn redactable(&self) -> RedactableString {
        RedactableString::from_safe_format(self)
    }
}

impl<T: SafeFormat + ?Sized> SafeFormat for &T {
    #[inline]
    fn safe_format(&self, w: &mut SafePrinter<'_>) -> FmtResult {
        (**self).safe_format(w)
    }
}

/// A rendered line in which sensitive spans are delimited by `‹` and `›`.
///
/// The markers let log redaction replace sensitive data with a placeholder without reparsing
/// free text.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct RedactableString(String);

impl RedactableString {
    #[must_use]
    pub fn from_safe_format<T: SafeFormat + ?Sized>(value: &T) -> Self {
        let mut buf = String::new();
        if let Err(err) = value.safe_format(&mut SafePrinter { buf: &mut buf }) {
            tracing::debug!("a value returned an error while being rendered: {err}");
        }
        Self(buf)
    }

    /// The rendered line with its markers intact.
    #[inline]
    #[must_use]
    pub fn as_marked(&self) -> &str {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn into_marked(self) -> String {
        self.0
    }

    /// The rendered line with every sensitive span replaced by `‹×›`.
    #[must_use]
    pub fn redacted(&self) -> String {
        let mut redacted = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();

        while let Some(start) = rest.find(START_SENSITIVE) {
            let (safe, sensitive) = rest.split_at(start);
            redacted.push_str(safe);
            redacted.push_str(REDACTED_SPAN);

            rest = match sensitive.find(END_SENSITIVE) {
                Some(end) => sensitive.get(end + END_SENSITIVE.len_utf8()..).unwrap_or(""),
                // An unterminated span hides everything after it.
                None      => "",
            };
        }

        redacted.push_str(rest);
        redacted
    }

    /// The rendered line as plain text, without markers.
    #[must_use]
    pub fn stripped(&self) -> String {
        self.0
            .chars()
            .filter(|&c| c != START_SENSITIVE && c != END_SENSITIVE)
            .collect()
    }
}

impl Display for RedactableString {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod tests {
    use super::*;


    struct Greeting<'a> {
        count: u32,
        name:  &'a str,
    }

    impl SafeFormat for Greeting<'_> {
        fn safe_format(&self, w: &mut SafePrinter<'_>) -> FmtResult {
            write!(w, "greeted {} times by {}", Safe(self.count), Sensitive(self.name))
        }
    }

    #[test]
    fn spans_are_marked() {
        let line = Greeting { count: 3, name: "alice" }.redactable();
        assert_eq!(line.as_marked(), "greeted 3 times by ‹alice›");
        assert_eq!(line.stripped(), "greeted 3 times by alice");
        assert_eq!(line.redacted(), "greeted 3 times by ‹×›");
    }

    #[test]
    fn markers_in_sensitive_text_are_escaped() {
        let line = Greeting { count: 1, name: "a›b‹c" }.redactable();
        assert_eq!(line.as_marked(), "greeted 1 times by ‹a?b?c›");
        assert_eq!(line.redacted(), "greeted 1 times by ‹×›");
    }

    #[test]
    fn markers_in_safe_text_are_escaped() {
        struct Forged<'a>(&'a str);

        impl SafeFormat for Forged<'_> {
            fn safe_format(&self, w: &mut SafePrinter<'_>) -> FmtResult {
                write!(w, "{} then {}", Safe(self.0), Sensitive("secret"))?;
                w.print_safe(self.0)
            }
        }

        let line = Forged("‹not secret›").redactable();
        assert_eq!(line.as_marked(), "?not secret? then ‹secret›?not secret?");
        assert_eq!(line.redacted(), "?not secret? then ‹×›?not secret?");
        assert_eq!(Safe("a›b").to_string(), "a?b");
    }

    #[test]
    fn several_spans() {
        let mut buf = String::new();
        let mut w = SafePrinter { buf: &mut buf };
        w.print_sensitive("/tmp/db").unwrap();
        w.write_str(" and ").unwrap();
        w.print_safe(42).unwrap();
        w.write_str(" and ").unwrap();
        w.print_sensitive("secret").unwrap();

        let line = RedactableString(buf);
        assert_eq!(line.redacted(), "‹×› and 42 and ‹×›");
        assert_eq!(line.stripped(), "/tmp/db and 42 and secret");
    }

    #[test]
    fn unterminated_span_is_hidden() {
        let line = RedactableString(String::from("visible ‹hidden"));
        assert_eq!(line.redacted(), "visible ‹×›");
    }
}
