// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Severity levels and level-argument resolution.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The severity of a log record.
///
/// Exactly eight levels exist, ranked 1 (most severe) to 8 (least severe).
/// The derived order follows the rank, so `Severity::Emergency <
/// Severity::Debug`.
///
/// # Examples
///
/// ```
/// use logsink::Severity;
///
/// assert_eq!(Severity::from_rank(5).unwrap(), Severity::Warning);
/// assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
/// assert!(Severity::Critical < Severity::Notice);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// System is unusable.
    Emergency = 1,
    /// Action must be taken immediately.
    Alert = 2,
    /// Critical conditions, e.g. an application component is unavailable.
    Critical = 3,
    /// Runtime errors that do not require immediate action but should be
    /// monitored.
    Error = 4,
    /// Exceptional occurrences that are not errors, e.g. use of a
    /// deprecated API.
    Warning = 5,
    /// Normal but significant events.
    Notice = 6,
    /// Interesting events.
    Info = 7,
    /// Detailed debug information.
    Debug = 8,
}

impl Severity {
    /// All levels, most severe first.
    pub const ALL: [Severity; 8] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    /// Resolve a numeric rank.
    ///
    /// # Errors
    ///
    /// Any rank outside `1..=8`, including 0, is rejected with
    /// [`Error::InvalidLevel`].
    pub fn from_rank(rank: u8) -> Result<Severity, Error> {
        match rank {
            1 => Ok(Severity::Emergency),
            2 => Ok(Severity::Alert),
            3 => Ok(Severity::Critical),
            4 => Ok(Severity::Error),
            5 => Ok(Severity::Warning),
            6 => Ok(Severity::Notice),
            7 => Ok(Severity::Info),
            8 => Ok(Severity::Debug),
            _ => Err(Error::InvalidLevel(rank.to_string())),
        }
    }

    /// The numeric rank, 1 to 8.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// The lowercase human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Emergency => "emergency",
            Severity::Alert => "alert",
            Severity::Critical => "critical",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }

    /// A short text token indicating the weight of a message in rendered
    /// output.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Emergency | Severity::Alert | Severity::Critical => "[!!]",
            Severity::Error | Severity::Warning => "[**]",
            Severity::Notice | Severity::Info => "[--]",
            Severity::Debug => "[..]",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = Error;

    /// Case-sensitive exact match against the eight level names.
    fn from_str(s: &str) -> Result<Severity, Error> {
        match s {
            "emergency" => Ok(Severity::Emergency),
            "alert" => Ok(Severity::Alert),
            "critical" => Ok(Severity::Critical),
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "notice" => Ok(Severity::Notice),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            _ => Err(Error::InvalidLevel(s.to_string())),
        }
    }
}

/// A level argument that has not been resolved yet: a numeric rank or a
/// level name.
///
/// [`Logger::log`](crate::Logger::log),
/// [`Logger::set_threshold`](crate::Logger::set_threshold), and threshold
/// configuration all accept `impl Into<LevelSpec>`, so integers, names, and
/// [`Severity`] values can be passed interchangeably.
#[derive(Debug, Clone)]
pub enum LevelSpec {
    /// A rank, valid when in `1..=8`.
    Rank(i64),
    /// A level name, valid when it matches one of the eight names exactly.
    Name(String),
}

impl LevelSpec {
    /// Resolve to a [`Severity`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLevel`] for an out-of-range rank or an
    /// unknown name.
    pub fn resolve(&self) -> Result<Severity, Error> {
        match self {
            LevelSpec::Rank(rank) => u8::try_from(*rank)
                .map_err(|_| Error::InvalidLevel(rank.to_string()))
                .and_then(Severity::from_rank),
            LevelSpec::Name(name) => name.parse(),
        }
    }
}

impl From<Severity> for LevelSpec {
    fn from(severity: Severity) -> LevelSpec {
        LevelSpec::Rank(i64::from(severity.rank()))
    }
}

impl From<u8> for LevelSpec {
    fn from(rank: u8) -> LevelSpec {
        LevelSpec::Rank(i64::from(rank))
    }
}

impl From<i32> for LevelSpec {
    fn from(rank: i32) -> LevelSpec {
        LevelSpec::Rank(i64::from(rank))
    }
}

impl From<i64> for LevelSpec {
    fn from(rank: i64) -> LevelSpec {
        LevelSpec::Rank(rank)
    }
}

impl From<&str> for LevelSpec {
    fn from(name: &str) -> LevelSpec {
        LevelSpec::Name(name.to_string())
    }
}

impl From<String> for LevelSpec {
    fn from(name: String) -> LevelSpec {
        LevelSpec::Name(name)
    }
}
