//! Formatting of ISO 8601 durations (e.g. `PT1H2M30S`) as clock strings (e.g. `1:02:30`).
//!
//! Only the `PT[nH][nM][nS]` subset is understood. Parsing is lenient: anything
//! that doesn't match simply counts as zero, so the formatter never fails.

use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;

/// `PT` followed by optional hour, minute and second components, in that order.
/// Digits are ASCII only.
static ISO_DURATION: OnceLock<Regex> = OnceLock::new();

fn pattern() -> &'static Regex {
    ISO_DURATION.get_or_init(|| {
        Regex::new(r"PT(?:([0-9]+)H)?(?:([0-9]+)M)?(?:([0-9]+)S)?")
            .expect("duration pattern is valid")
    })
}

/// Converts an ISO 8601 duration to `M:SS` or `H:MM:SS`.
///
/// Components are rendered from their digits, so values of any size come out as written
/// (minus leading zeros).
///
/// ```
/// use yt_stats::format_duration;
///
/// assert_eq!(format_duration("PT1H2M30S"), "1:02:30");
/// assert_eq!(format_duration("PT5M20S"), "5:20");
/// assert_eq!(format_duration("PT45S"), "0:45");
/// ```
pub fn format_duration(iso_duration: &str) -> String {
    let Some(caps) = pattern().captures(iso_duration) else {
        return IsoDuration::default().to_string();
    };

    // Empty means zero.
    let digits = |idx: usize| {
        caps.get(idx)
            .map_or("", |m| m.as_str().trim_start_matches('0'))
    };
    let (hours, minutes, seconds) = (digits(1), digits(2), digits(3));

    if !hours.is_empty() {
        format!("{hours}:{minutes:0>2}:{seconds:0>2}")
    } else if minutes.is_empty() {
        format!("0:{seconds:0>2}")
    } else {
        format!("{minutes}:{seconds:0>2}")
    }
}

/// The components of a `PT[nH][nM][nS]` duration, taken as given.
///
/// Units are never normalized: `PT90S` stays 90 seconds and displays as `0:90`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsoDuration {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl IsoDuration {
    /// Extracts the components from the first `PT...` match in `input`.
    ///
    /// Missing components are 0, input without a match gives all zeros.
    /// A component too large for a [u64] saturates to [u64::MAX].
    pub fn parse(input: &str) -> Self {
        let Some(caps) = pattern().captures(input) else {
            return Self::default();
        };

        // The pattern only captures ASCII digits, so the only possible failure is overflow.
        let component = |idx: usize| {
            caps.get(idx)
                .map_or(0, |m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
        };

        Self {
            hours: component(1),
            minutes: component(2),
            seconds: component(3),
        }
    }

    /// Length of the duration in seconds. Saturates instead of overflowing.
    pub fn total_seconds(&self) -> u64 {
        self.hours
            .saturating_mul(3600)
            .saturating_add(self.minutes.saturating_mul(60))
            .saturating_add(self.seconds)
    }
}

impl FromStr for IsoDuration {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<IsoDuration> for Duration {
    fn from(iso: IsoDuration) -> Self {
        Duration::from_secs(iso.total_seconds())
    }
}

impl Display for IsoDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let IsoDuration {
            hours,
            minutes,
            seconds,
        } = self;

        if *hours > 0 {
            write!(f, "{hours}:{minutes:02}:{seconds:02}")
        } else {
            write!(f, "{minutes}:{seconds:02}")
        }
    }
}
