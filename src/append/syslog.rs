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

use std::sync::Mutex;
use std::sync::MutexGuard;

use fasyslog::format::SyslogContext;
use fasyslog::sender::SyslogSender;

use crate::append::Append;
use crate::error::Error;
use crate::level::Severity;

/// A sink that forwards records to the syslog facility.
///
/// Messages are sent RFC 3164 formatted, with the record severity mapped
/// onto the matching syslog priority. A non-empty prefix is prepended to
/// every line as `"prefix: "`.
///
/// # Examples
///
/// ```no_run
/// use logsink::Logger;
/// use logsink::append::Syslog;
///
/// let logger = Logger::new(Syslog::local("myapp")?);
/// # Ok::<(), logsink::Error>(())
/// ```
#[derive(Debug)]
pub struct Syslog {
    prefix: String,
    context: SyslogContext,
    sender: Mutex<SyslogSender>,
}

impl Syslog {
    /// Create a syslog sink over a caller-supplied sender, e.g. one of the
    /// tcp/udp/unix senders from [`fasyslog::sender`].
    pub fn new(sender: SyslogSender, prefix: &str) -> Syslog {
        Syslog {
            prefix: normalize_prefix(prefix),
            context: SyslogContext::default(),
            sender: Mutex::new(sender),
        }
    }

    /// Create a syslog sink connected to the local syslog daemon.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when no local daemon socket can be opened.
    pub fn local(prefix: &str) -> Result<Syslog, Error> {
        Ok(Syslog::new(local_sender()?, prefix))
    }

    fn sender(&self) -> MutexGuard<'_, SyslogSender> {
        self.sender
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(unix)]
fn local_sender() -> Result<SyslogSender, Error> {
    // /dev/log on Linux, /var/run/syslog on macOS
    fasyslog::sender::unix("/dev/log")
        .or_else(|_| fasyslog::sender::unix("/var/run/syslog"))
        .map_err(Error::Io)
}

#[cfg(not(unix))]
fn local_sender() -> Result<SyslogSender, Error> {
    fasyslog::sender::udp_well_known()
        .map(SyslogSender::Udp)
        .map_err(Error::Io)
}

fn normalize_prefix(prefix: &str) -> String {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        String::new()
    } else {
        format!("{prefix}: ")
    }
}

fn priority(severity: Severity) -> fasyslog::Severity {
    match severity {
        Severity::Emergency => fasyslog::Severity::EMERGENCY,
        Severity::Alert => fasyslog::Severity::ALERT,
        Severity::Critical => fasyslog::Severity::CRITICAL,
        Severity::Error => fasyslog::Severity::ERROR,
        Severity::Warning => fasyslog::Severity::WARNING,
        Severity::Notice => fasyslog::Severity::NOTICE,
        Severity::Info => fasyslog::Severity::INFORMATIONAL,
        Severity::Debug => fasyslog::Severity::DEBUG,
    }
}

impl Append for Syslog {
    fn append(&self, severity: Severity, line: &str) -> anyhow::Result<()> {
        let message = format!(
            "{}",
            self.context
                .format_rfc3164(priority(severity), Some(format!("{}{line}", self.prefix)))
        );
        self.sender().send_formatted(message.as_bytes())?;
        Ok(())
    }

    fn flush(&self) {
        let _ = self.sender().flush();
    }
}
