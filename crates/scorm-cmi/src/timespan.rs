// SPDX-License-Identifier: Apache-2.0
//! SCORM 1.2 timespan format (`HHHH:MM:SS.SS`).
//!
//! Content reports `cmi.core.session_time` in this format and the host folds
//! it into `cmi.core.total_time` between attempts. The runtime itself never
//! parses or validates stored time strings; this module exists for hosts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parse failure for a SCORM timespan string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimespanError {
    /// Not of the form `HHHH:MM:SS` or `HHHH:MM:SS.SS`.
    #[error("malformed timespan: {input:?}")]
    Malformed {
        /// The rejected input.
        input: String,
    },
    /// Minutes or seconds field out of range (>= 60).
    #[error("timespan field out of range: {input:?}")]
    OutOfRange {
        /// The rejected input.
        input: String,
    },
}

/// A non-negative duration with centisecond resolution.
///
/// SCORM caps the hour field at four digits; additions saturate there
/// rather than wrapping or erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Timespan {
    centis: u64,
}

/// 9999:59:59.99, the largest representable timespan.
const MAX_CENTIS: u64 = ((9999 * 60 + 59) * 60 + 59) * 100 + 99;

impl Timespan {
    /// Zero duration (`0000:00:00.00`).
    pub const ZERO: Self = Self { centis: 0 };

    /// Builds a timespan from whole centiseconds, saturating at the
    /// four-digit hour cap.
    #[must_use]
    pub fn from_centis(centis: u64) -> Self {
        Self {
            centis: centis.min(MAX_CENTIS),
        }
    }

    /// Total centiseconds.
    #[must_use]
    pub fn as_centis(self) -> u64 {
        self.centis
    }

    /// Saturating addition.
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self::from_centis(self.centis.saturating_add(other.centis))
    }
}

impl FromStr for Timespan {
    type Err = TimespanError;

    /// Accepts `HHHH:MM:SS` with an optional `.S` or `.SS` fraction. The
    /// hour field may be 1..=4 digits; content in the wild rarely pads it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimespanError::Malformed {
            input: s.to_string(),
        };

        let mut parts = s.split(':');
        let (hours, minutes, rest) = match (parts.next(), parts.next(), parts.next(), parts.next())
        {
            (Some(h), Some(m), Some(r), None) => (h, m, r),
            _ => return Err(malformed()),
        };

        let (seconds, fraction) = match rest.split_once('.') {
            Some((sec, frac)) => (sec, Some(frac)),
            None => (rest, None),
        };

        if hours.is_empty() || hours.len() > 4 || minutes.len() != 2 || seconds.len() != 2 {
            return Err(malformed());
        }

        let parse_field = |field: &str| field.parse::<u64>().map_err(|_| malformed());
        let h = parse_field(hours)?;
        let m = parse_field(minutes)?;
        let sec = parse_field(seconds)?;
        let frac = match fraction {
            None => 0,
            Some(f) if f.len() == 1 => parse_field(f)? * 10,
            Some(f) if f.len() == 2 => parse_field(f)?,
            Some(_) => return Err(malformed()),
        };

        if m >= 60 || sec >= 60 {
            return Err(TimespanError::OutOfRange {
                input: s.to_string(),
            });
        }

        Ok(Self::from_centis(((h * 60 + m) * 60 + sec) * 100 + frac))
    }
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frac = self.centis % 100;
        let total_secs = self.centis / 100;
        let secs = total_secs % 60;
        let mins = (total_secs / 60) % 60;
        let hours = total_secs / 3600;
        write!(f, "{hours:04}:{mins:02}:{secs:02}.{frac:02}")
    }
}

/// Folds a reported `cmi.core.session_time` into a running
/// `cmi.core.total_time`, returning the new total in canonical form.
///
/// Malformed inputs are treated as zero rather than erroring, matching how
/// lenient the rest of the runtime is about time strings.
#[must_use]
pub fn accumulate_total_time(total: &str, session: &str) -> String {
    let total = Timespan::from_str(total).unwrap_or(Timespan::ZERO);
    let session = Timespan::from_str(session).unwrap_or(Timespan::ZERO);
    total.saturating_add(session).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_canonically() {
        assert_eq!(Timespan::ZERO.to_string(), "0000:00:00.00");
    }

    #[test]
    fn parse_round_trips_canonical_form() {
        for s in ["0000:00:00.00", "0001:02:03.45", "9999:59:59.99"] {
            assert_eq!(s.parse::<Timespan>().unwrap().to_string(), s);
        }
    }

    #[test]
    fn parse_accepts_short_hours_and_missing_fraction() {
        assert_eq!(
            "1:02:03".parse::<Timespan>().unwrap().to_string(),
            "0001:02:03.00"
        );
        assert_eq!(
            "12:00:30.5".parse::<Timespan>().unwrap().to_string(),
            "0012:00:30.50"
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        for s in ["", "abc", "00:00", "0000:60:00.00", "0000:00:60", "0:0:0"] {
            assert!(s.parse::<Timespan>().is_err(), "{s:?}");
        }
    }

    #[test]
    fn addition_saturates_at_hour_cap() {
        let max = "9999:59:59.99".parse::<Timespan>().unwrap();
        let one = "0000:00:00.01".parse::<Timespan>().unwrap();
        assert_eq!(max.saturating_add(one), max);
    }

    #[test]
    fn serde_round_trips_as_centis() {
        let t = "0001:02:03.45".parse::<Timespan>().unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(serde_json::from_str::<Timespan>(&json).unwrap(), t);
    }

    #[test]
    fn accumulate_folds_session_into_total() {
        assert_eq!(
            accumulate_total_time("0000:10:00.00", "0000:05:30.25"),
            "0000:15:30.25"
        );
        // Malformed session time counts as zero.
        assert_eq!(
            accumulate_total_time("0000:10:00.00", "bogus"),
            "0000:10:00.00"
        );
    }
}
