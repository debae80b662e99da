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

use crate::append::Append;
use crate::context::Context;
use crate::error::Error;
use crate::layout::format_line;
use crate::level::LevelSpec;
use crate::level::Severity;

/// A leveled logger bound to a single output sink.
///
/// Records strictly less severe than the threshold are dropped before any
/// formatting work happens; everything else is rendered to one text line
/// and handed to the sink. A record exactly at the threshold is emitted.
///
/// The logging methods return `&Self` so calls can be chained:
///
/// ```
/// use logsink::Context;
/// use logsink::Logger;
/// use logsink::append::Null;
///
/// # fn main() -> Result<(), logsink::Error> {
/// let logger = Logger::new(Null);
/// logger
///     .error("boom", &Context::new())?
///     .warning("still here", &Context::new())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Logger {
    threshold: Severity,
    append: Box<dyn Append>,
}

impl Logger {
    /// Create a logger emitting to the given sink.
    ///
    /// The threshold defaults to [`Severity::Warning`].
    pub fn new(append: impl Append) -> Logger {
        Logger::boxed(Box::new(append))
    }

    /// Like [`Logger::new`], for an already boxed sink.
    pub fn boxed(append: Box<dyn Append>) -> Logger {
        Logger {
            threshold: Severity::Warning,
            append,
        }
    }

    /// Set the least severe level that is still emitted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLevel`] when `level` resolves to neither a
    /// rank in `1..=8` nor a level name.
    pub fn set_threshold(&mut self, level: impl Into<LevelSpec>) -> Result<&mut Logger, Error> {
        self.threshold = level.into().resolve()?;
        Ok(self)
    }

    /// The current threshold.
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// System is unusable.
    pub fn emergency(&self, msg: &str, context: &Context) -> Result<&Logger, Error> {
        self.log(Severity::Emergency, msg, context)
    }

    /// Action must be taken immediately.
    ///
    /// Example: entire website down, database unavailable. This is the
    /// level that should wake somebody up.
    pub fn alert(&self, msg: &str, context: &Context) -> Result<&Logger, Error> {
        self.log(Severity::Alert, msg, context)
    }

    /// Critical conditions.
    pub fn critical(&self, msg: &str, context: &Context) -> Result<&Logger, Error> {
        self.log(Severity::Critical, msg, context)
    }

    /// Runtime errors that do not require immediate action but should be
    /// logged and monitored.
    pub fn error(&self, msg: &str, context: &Context) -> Result<&Logger, Error> {
        self.log(Severity::Error, msg, context)
    }

    /// Exceptional occurrences that are not errors.
    pub fn warning(&self, msg: &str, context: &Context) -> Result<&Logger, Error> {
        self.log(Severity::Warning, msg, context)
    }

    /// Normal but significant events.
    pub fn notice(&self, msg: &str, context: &Context) -> Result<&Logger, Error> {
        self.log(Severity::Notice, msg, context)
    }

    /// Interesting events, e.g. a user logs in.
    pub fn info(&self, msg: &str, context: &Context) -> Result<&Logger, Error> {
        self.log(Severity::Info, msg, context)
    }

    /// Detailed debug information.
    pub fn debug(&self, msg: &str, context: &Context) -> Result<&Logger, Error> {
        self.log(Severity::Debug, msg, context)
    }

    /// Log a message at the given level.
    ///
    /// `level` accepts a rank in `1..=8`, a level name, or a [`Severity`].
    /// A record less severe than the threshold returns `Ok` immediately
    /// with no side effects.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLevel`] for an unresolvable level, and
    /// [`Error::Output`] when the sink fails to write the rendered line.
    pub fn log(
        &self,
        level: impl Into<LevelSpec>,
        msg: &str,
        context: &Context,
    ) -> Result<&Logger, Error> {
        let severity = level.into().resolve()?;
        if severity > self.threshold {
            return Ok(self);
        }
        let line = format_line(severity, msg, context);
        self.append
            .append(severity, &line)
            .map_err(Error::Output)?;
        Ok(self)
    }

    /// Flush the sink.
    pub fn flush(&self) {
        self.append.flush();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone, Default)]
    struct Capture {
        lines: Arc<Mutex<Vec<(Severity, String)>>>,
    }

    impl Capture {
        fn lines(&self) -> Vec<(Severity, String)> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl Append for Capture {
        fn append(&self, severity: Severity, line: &str) -> anyhow::Result<()> {
            self.lines.lock().unwrap().push((severity, line.to_string()));
            Ok(())
        }
    }

    #[test]
    fn default_threshold_is_warning() {
        let logger = Logger::new(Capture::default());
        assert_eq!(logger.threshold(), Severity::Warning);
    }

    #[test]
    fn suppresses_below_threshold() {
        let capture = Capture::default();
        let logger = Logger::new(capture.clone());

        logger.notice("quiet", &Context::new()).unwrap();
        logger.info("quiet", &Context::new()).unwrap();
        logger.debug("quiet", &Context::new()).unwrap();
        assert!(capture.lines().is_empty());

        logger.error("loud", &Context::new()).unwrap();
        assert_eq!(capture.lines().len(), 1);
    }

    #[test]
    fn threshold_boundary_emits() {
        let capture = Capture::default();
        let logger = Logger::new(capture.clone());

        logger.warning("at the boundary", &Context::new()).unwrap();
        let lines = capture.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Severity::Warning);
    }

    #[test]
    fn more_severe_thresholds_widen_suppression() {
        let capture = Capture::default();
        let mut logger = Logger::new(capture.clone());
        logger.set_threshold("error").unwrap();

        logger.warning("quiet", &Context::new()).unwrap();
        assert!(capture.lines().is_empty());

        logger.critical("loud", &Context::new()).unwrap();
        assert_eq!(capture.lines().len(), 1);
    }

    #[test]
    fn debug_threshold_emits_everything() {
        let capture = Capture::default();
        let mut logger = Logger::new(capture.clone());
        logger.set_threshold(8).unwrap();

        for severity in Severity::ALL {
            logger.log(severity, "x", &Context::new()).unwrap();
        }
        assert_eq!(capture.lines().len(), 8);
    }

    #[test]
    fn log_accepts_ranks_and_names() {
        let capture = Capture::default();
        let logger = Logger::new(capture.clone());

        logger.log(3, "by rank", &Context::new()).unwrap();
        logger.log("alert", "by name", &Context::new()).unwrap();

        let lines = capture.lines();
        assert_eq!(lines[0].0, Severity::Critical);
        assert_eq!(lines[1].0, Severity::Alert);
    }

    #[test]
    fn invalid_levels_error_out() {
        let capture = Capture::default();
        let mut logger = Logger::new(capture.clone());

        assert!(matches!(
            logger.log(0, "x", &Context::new()),
            Err(Error::InvalidLevel(_))
        ));
        assert!(matches!(
            logger.log("trace", "x", &Context::new()),
            Err(Error::InvalidLevel(_))
        ));
        assert!(matches!(
            logger.set_threshold(9),
            Err(Error::InvalidLevel(_))
        ));
        // an invalid set_threshold leaves the old threshold in place
        assert_eq!(logger.threshold(), Severity::Warning);
        assert!(capture.lines().is_empty());
    }

    #[test]
    fn emitted_lines_carry_context() {
        let capture = Capture::default();
        let logger = Logger::new(capture.clone());

        let context = Context::new().with("pct", 90);
        logger.warning("disk at {pct}%", &context).unwrap();

        let lines = capture.lines();
        assert!(lines[0].1.ends_with(" [**] warning: disk at 90%\n"));
    }

    #[test]
    fn calls_chain() {
        let capture = Capture::default();
        let logger = Logger::new(capture.clone());

        logger
            .error("one", &Context::new())
            .unwrap()
            .critical("two", &Context::new())
            .unwrap();
        assert_eq!(capture.lines().len(), 2);
    }

    #[test]
    fn sink_failures_surface_as_output_errors() {
        #[derive(Debug)]
        struct Failing;

        impl Append for Failing {
            fn append(&self, _severity: Severity, _line: &str) -> anyhow::Result<()> {
                anyhow::bail!("sink is gone")
            }
        }

        let logger = Logger::new(Failing);
        assert!(matches!(
            logger.error("boom", &Context::new()),
            Err(Error::Output(_))
        ));
        // suppressed records never reach the failing sink
        logger.debug("quiet", &Context::new()).unwrap();
    }
}
