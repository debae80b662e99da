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

//! Logsink is a small leveled logging library: a threshold-filtered
//! dispatcher that renders each record to one text line and hands it to a
//! single pluggable sink.
//!
//! # Overview
//!
//! A [`Logger`] owns a severity threshold and one sink. Eight severities
//! exist, ranked `emergency` (1, most severe) through `debug` (8); records
//! less severe than the threshold are dropped before any formatting work.
//! Message templates carry `{key}` placeholders substituted from a
//! [`Context`]. Sinks implement [`append::Append`]; files, the standard
//! streams, syslog, the global [`log`] facade, and a null sink are built
//! in, and a [`LoggerFactory`] constructs any of them from configuration.
//!
//! # Examples
//!
//! Log to stderr with the default `warning` threshold:
//!
//! ```
//! use logsink::Context;
//! use logsink::Logger;
//! use logsink::append::Stream;
//!
//! let logger = Logger::new(Stream::stderr());
//!
//! logger.error("disk at {pct}%", &Context::new().with("pct", 98)).unwrap();
//! ```
//!
//! Construct a file logger from configuration:
//!
//! ```no_run
//! use logsink::Config;
//! use logsink::Context;
//! use logsink::LoggerFactory;
//!
//! # fn main() -> Result<(), logsink::Error> {
//! let factory = LoggerFactory::new();
//! let logger = factory.create(Config::new("file").file("app.log").threshold("info"))?;
//!
//! logger.info("user {name} logged in", &Context::new().with("name", "ada"))?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;

mod context;
mod error;
mod factory;
mod interpolate;
mod layout;
mod level;
mod logger;

pub use context::Context;
pub use error::Error;
pub use factory::Config;
pub use factory::LoggerFactory;
pub use level::LevelSpec;
pub use level::Severity;
pub use logger::Logger;
