/// Pure scheduling rule for the spaced-repetition review scheduler.
///
/// This module holds no I/O and no clock reads: given a rating, the prior
/// interval, and whether this is the card's first review, it deterministically
/// computes the next interval. Everything that varies between deployments
/// (the retry interval, the two first-review intervals, the two growth
/// factors, the cap) is carried on `SchedulingConfig` rather than as module
/// constants, so tests can exercise the rule under alternative constants.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A client-supplied review outcome.
///
/// `Again` resets progress and schedules a short retry; `Good` and `Easy`
/// grow the interval from whatever it was before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum Rating {
    Again = 0,
    Good = 1,
    Easy = 2,
}

/// Error returned when a raw integer does not correspond to a known rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRating(pub i32);

impl fmt::Display for InvalidRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rating must be 0, 1, or 2, got {}", self.0)
    }
}

impl std::error::Error for InvalidRating {}

impl TryFrom<i32> for Rating {
    type Error = InvalidRating;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Rating::Again),
            1 => Ok(Rating::Good),
            2 => Ok(Rating::Easy),
            other => Err(InvalidRating(other)),
        }
    }
}

impl Rating {
    /// The rating's integer wire representation.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// The fixed, bit-exact label shown to clients.
    pub fn label(self) -> &'static str {
        match self {
            Rating::Again => "分からない",
            Rating::Good => "分かる",
            Rating::Easy => "簡単",
        }
    }
}

/// Injectable scheduling constants.
///
/// Modeled as a value rather than bare module constants so alternative
/// constants can be substituted in tests without touching global state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchedulingConfig {
    pub max_interval_seconds: i64,
    pub retry_seconds: i64,
    pub first_interval_good: i64,
    pub first_interval_easy: i64,
    pub growth_good: f64,
    pub growth_easy: f64,
}

impl SchedulingConfig {
    fn first_interval(&self, rating: Rating) -> i64 {
        match rating {
            Rating::Again => 0,
            Rating::Good => self.first_interval_good,
            Rating::Easy => self.first_interval_easy,
        }
    }

    fn growth(&self, rating: Rating) -> f64 {
        match rating {
            Rating::Again => 0.0,
            Rating::Good => self.growth_good,
            Rating::Easy => self.growth_easy,
        }
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            max_interval_seconds: 365 * 24 * 3600,
            retry_seconds: 60,
            first_interval_good: 86_400,
            first_interval_easy: 345_600,
            growth_good: 1.6,
            growth_easy: 2.5,
        }
    }
}

/// Computes the next review interval, in seconds.
///
/// `last_interval_seconds` is the card's interval as of its most recent
/// review; `0` means the card has never been reviewed (`is_first` should be
/// `true` in that case). The result is never smaller than
/// `last_interval_seconds` for a non-zero rating on a card that has already
/// been reviewed, and never exceeds `cfg.max_interval_seconds`.
pub fn schedule_next(
    cfg: &SchedulingConfig,
    rating: Rating,
    last_interval_seconds: i64,
    is_first: bool,
) -> i64 {
    if rating == Rating::Again {
        return cfg.retry_seconds;
    }

    if is_first {
        return cfg.first_interval(rating).min(cfg.max_interval_seconds);
    }

    let proposed = (last_interval_seconds as f64 * cfg.growth(rating)) as i64;
    proposed.min(cfg.max_interval_seconds).max(last_interval_seconds)
}
