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

//! Configuration-driven logger construction.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use crate::append::Append;
use crate::append::Null;
use crate::append::Process;
use crate::append::Stream;
use crate::append::Syslog;
use crate::error::Error;
use crate::level::LevelSpec;
use crate::level::Severity;
use crate::logger::Logger;

/// Configuration consumed by [`LoggerFactory::create`].
///
/// A bare type tag converts into a config with every option defaulted, so
/// the two calls below build the same logger:
///
/// ```
/// use logsink::Config;
/// use logsink::LoggerFactory;
///
/// let factory = LoggerFactory::new();
/// let logger = factory.create("null").unwrap();
/// let same = factory.create(Config::new("null")).unwrap();
/// assert_eq!(logger.threshold(), same.threshold());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    kind: String,
    threshold: Option<LevelSpec>,
    file: Option<PathBuf>,
    prefix: Option<String>,
}

impl Config {
    /// Start a config for the given logger type tag.
    pub fn new(kind: impl Into<String>) -> Config {
        Config {
            kind: kind.into(),
            threshold: None,
            file: None,
            prefix: None,
        }
    }

    /// Set the threshold, a rank in `1..=8` or a level name.
    ///
    /// Defaults to `warning` when never called.
    pub fn threshold(mut self, level: impl Into<LevelSpec>) -> Config {
        self.threshold = Some(level.into());
        self
    }

    /// Set the target path. Required by `file` loggers.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Config {
        self.file = Some(path.into());
        self
    }

    /// Set the message prefix used by `syslog` loggers.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Config {
        self.prefix = Some(prefix.into());
        self
    }

    /// The logger type tag.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The target path for `file` loggers, if set.
    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// The message prefix for `syslog` loggers, if set.
    pub fn syslog_prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

impl From<&str> for Config {
    fn from(kind: &str) -> Config {
        Config::new(kind)
    }
}

impl From<String> for Config {
    fn from(kind: String) -> Config {
        Config::new(kind)
    }
}

type Constructor = Box<dyn Fn(&Config) -> Result<Box<dyn Append>, Error> + Send + Sync>;

/// Builds [`Logger`]s from [`Config`]s.
///
/// The factory dispatches on the config's type tag through a registry of
/// sink constructors. Six tags are built in (`process`, `file`, `syslog`,
/// `stderr`, `stdout`, and `null`) and custom constructors can be
/// registered on top, shadowing a built-in when they reuse its tag.
///
/// # Examples
///
/// ```no_run
/// use logsink::Config;
/// use logsink::Context;
/// use logsink::LoggerFactory;
///
/// # fn main() -> Result<(), logsink::Error> {
/// let factory = LoggerFactory::new();
/// let logger = factory.create(Config::new("file").file("app.log").threshold("info"))?;
/// logger.warning("disk at {pct}%", &Context::new().with("pct", 90))?;
/// # Ok(())
/// # }
/// ```
pub struct LoggerFactory {
    registry: HashMap<String, Constructor>,
}

impl Default for LoggerFactory {
    fn default() -> LoggerFactory {
        LoggerFactory::new()
    }
}

impl LoggerFactory {
    /// Create a factory seeded with the six built-in sink constructors.
    pub fn new() -> LoggerFactory {
        let mut factory = LoggerFactory {
            registry: HashMap::new(),
        };
        factory.register("process", |_| Ok(Process));
        factory.register("file", |config| match config.file_path() {
            Some(path) => Stream::file(path),
            None => Err(Error::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "no log file configured",
            ))),
        });
        factory.register("syslog", |config| {
            Syslog::local(config.syslog_prefix().unwrap_or_default())
        });
        factory.register("stderr", |_| Ok(Stream::stderr()));
        factory.register("stdout", |_| Ok(Stream::stdout()));
        factory.register("null", |_| Ok(Null));
        factory
    }

    /// Register a sink constructor for a type tag.
    ///
    /// Registering an existing tag, built-in or not, replaces its
    /// constructor.
    pub fn register<A, F>(&mut self, kind: impl Into<String>, constructor: F)
    where
        A: Append,
        F: Fn(&Config) -> Result<A, Error> + Send + Sync + 'static,
    {
        self.registry.insert(
            kind.into(),
            Box::new(move |config| {
                constructor(config).map(|append| Box::new(append) as Box<dyn Append>)
            }),
        );
    }

    /// Build the logger described by `config`, with its threshold applied.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] for an unrecognized type tag,
    /// [`Error::InvalidLevel`] for an unresolvable threshold, and the sink
    /// constructor's own error when its resource cannot be opened.
    pub fn create(&self, config: impl Into<Config>) -> Result<Logger, Error> {
        let config = config.into();
        let constructor = self
            .registry
            .get(config.kind())
            .ok_or_else(|| Error::Config(format!("invalid logger type: {}", config.kind())))?;
        let append = constructor(&config)?;
        let mut logger = Logger::boxed(append);
        let threshold = config
            .threshold
            .clone()
            .unwrap_or_else(|| Severity::Warning.into());
        logger.set_threshold(threshold)?;
        Ok(logger)
    }
}

impl fmt::Debug for LoggerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.registry.keys().collect();
        kinds.sort();
        f.debug_struct("LoggerFactory")
            .field("registry", &kinds)
            .finish()
    }
}
