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
use crate::level::Severity;

/// A sink that forwards records to the process diagnostic log: the global
/// [`log`] facade.
///
/// Whatever logger the host application installed via [`log::set_logger`]
/// receives the line, trimmed of its trailing newline, with the eight
/// severities folded onto the facade's levels.
#[derive(Debug, Clone, Copy, Default)]
pub struct Process;

fn facade_level(severity: Severity) -> log::Level {
    match severity {
        Severity::Emergency | Severity::Alert | Severity::Critical | Severity::Error => {
            log::Level::Error
        }
        Severity::Warning => log::Level::Warn,
        Severity::Notice | Severity::Info => log::Level::Info,
        Severity::Debug => log::Level::Debug,
    }
}

impl Append for Process {
    fn append(&self, severity: Severity, line: &str) -> anyhow::Result<()> {
        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{}", line.trim_end()))
                .level(facade_level(severity))
                .target("logsink")
                .build(),
        );
        Ok(())
    }

    fn flush(&self) {
        log::logger().flush();
    }
}
