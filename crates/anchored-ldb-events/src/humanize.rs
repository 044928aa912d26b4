use std::{iter, time::Duration};
use std::fmt::{Display, Formatter, Result as FmtResult};


/// IEC units, each 1024 times the previous one. `u64::MAX` is just under 16 exbibytes.
const UNITS: [&str; 7] = ["B", "K", "M", "G", "T", "P", "E"];
const UNIT_BASE: u64 = 1024;


/// Renders a number of bytes in IEC units, such as `900B`, `1.5K`, or `10M`.
///
/// Values are rounded to one decimal place, which is shown only for values less than 10 in the
/// chosen unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bytes(pub u64);

impl Display for Bytes {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let bytes = self.0;
        if bytes < 10 {
            return write!(f, "{bytes}B");
        }

        let divisors = iter::successors(Some(1_u64), |divisor| divisor.checked_mul(UNIT_BASE));
        let (unit, divisor) = UNITS
            .iter()
            .zip(divisors)
            .take_while(|&(_, divisor)| divisor <= bytes)
            .last()
            .unwrap_or((&"B", 1));

        #[expect(
            clippy::as_conversions,
            clippy::cast_precision_loss,
            clippy::float_arithmetic,
            reason = "only one decimal place is displayed",
        )]
        let scaled = ((bytes as f64 / divisor as f64) * 10.0 + 0.5).floor() / 10.0;

        if scaled < 10.0 {
            write!(f, "{scaled:.1}{unit}")
        } else {
            write!(f, "{scaled:.0}{unit}")
        }
    }
}

/// Renders the average rate at which `bytes` were produced over `elapsed`, such as `900B/s`.
///
/// A rate over a zero-length duration is undefined, and renders as `n/a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BytesPerSecond {
    pub bytes:   u64,
    pub elapsed: Duration,
}

impl BytesPerSecond {
    /// The whole number of bytes per second, or `None` if `elapsed` is zero.
    #[must_use]
    pub fn rate(&self) -> Option<u64> {
        if self.elapsed.is_zero() {
            return None;
        }

        #[expect(
            clippy::as_conversions,
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::float_arithmetic,
            reason = "rates are approximate; the float-to-int cast saturates",
        )]
        let rate = (self.bytes as f64 / self.elapsed.as_secs_f64()) as u64;
        Some(rate)
    }
}

impl Display for BytesPerSecond {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.rate() {
            Some(rate) => write!(f, "{}/s", Bytes(rate)),
            None       => f.write_str("n/a"),
        }
    }
}

/// Renders a duration in seconds with one decimal place, such as `1.0s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Seconds(pub(crate) Duration);

impl Display for Seconds {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:.1}s", self.0.as_secs_f64())
    }
}
