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

use jiff::Zoned;

use crate::context::Context;
use crate::interpolate::interpolate;
use crate::level::Severity;

/// Render the line emitted for a record.
///
/// Output format:
///
/// ```text
/// 2024-08-11 22:44:57 [**] warning: disk at 90% is almost full
/// ```
///
/// The timestamp is local time. The message is the template with context
/// placeholders substituted, trimmed of surrounding whitespace. The line is
/// newline-terminated and handed to exactly one sink.
pub(crate) fn format_line(severity: Severity, template: &str, context: &Context) -> String {
    let time = Zoned::now().strftime("%Y-%m-%d %H:%M:%S");
    let message = interpolate(template, context);
    format!(
        "{time} {tag} {name}: {message}\n",
        tag = severity.tag(),
        name = severity.name(),
        message = message.trim(),
    )
}
