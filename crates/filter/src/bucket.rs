//! Fixed duration categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four duration categories a recipe can fall into.
///
/// Bucket membership is decided on the parsed `totalTime` minute count.
/// A count of zero (missing or unparseable duration) belongs to no
/// bucket at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationBucket {
    /// Under 30 minutes.
    Quick,
    /// 30 to 90 minutes inclusive.
    Medium,
    /// Over 90 minutes, up to a day.
    Long,
    /// More than 24 hours.
    Multiday,
}

impl DurationBucket {
    /// True if a nonzero minute count falls into this bucket.
    ///
    /// Zero never matches: recipes without a parseable duration are
    /// excluded from every bucket, not lumped into the shortest one.
    pub fn contains(self, minutes: u32) -> bool {
        if minutes == 0 {
            return false;
        }
        match self {
            Self::Quick => minutes < 30,
            Self::Medium => (30..=90).contains(&minutes),
            Self::Long => minutes > 90 && minutes <= 1440,
            Self::Multiday => minutes > 1440,
        }
    }

    /// All buckets, in ascending duration order.
    pub fn all() -> [Self; 4] {
        [Self::Quick, Self::Medium, Self::Long, Self::Multiday]
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Quick => "quick",
            Self::Medium => "medium",
            Self::Long => "long",
            Self::Multiday => "multiday",
        };
        f.write_str(name)
    }
}

/// Error for an unrecognized bucket name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown duration bucket {0:?} (expected quick, medium, long, or multiday)")]
pub struct ParseBucketError(String);

impl FromStr for DurationBucket {
    type Err = ParseBucketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quick" => Ok(Self::Quick),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            "multiday" => Ok(Self::Multiday),
            other => Err(ParseBucketError(other.to_string())),
        }
    }
}
