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

//! Output sinks for rendered log lines.

use std::fmt;

use crate::level::Severity;

mod null;
mod process;
mod stream;
mod syslog;

pub use self::null::Null;
pub use self::process::Process;
pub use self::stream::Stream;
pub use self::syslog::Syslog;

/// A sink that rendered log lines are dispatched to.
///
/// Implement this trait to route records somewhere the built-in sinks do
/// not cover; register the implementation with
/// [`LoggerFactory::register`](crate::LoggerFactory::register) to make it
/// constructible from configuration.
pub trait Append: fmt::Debug + Send + Sync + 'static {
    /// Write one rendered line.
    fn append(&self, severity: Severity, line: &str) -> anyhow::Result<()>;

    /// Flushes any buffered output.
    fn flush(&self) {}
}
