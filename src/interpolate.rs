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

use crate::context::Context;

/// Replace every `{key}` placeholder naming a context entry with the
/// entry's rendered value.
///
/// One left-to-right pass: substituted values are never re-scanned,
/// placeholders without a matching key stay verbatim, and context keys that
/// never appear in the template are ignored. This is textual substitution,
/// not a templating language; braces have no escape form.
pub(crate) fn interpolate(template: &str, context: &Context) -> String {
    if context.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let (head, tail) = rest.split_at(start);
        out.push_str(head);
        let Some(end) = tail.find('}') else {
            // unterminated placeholder, nothing left to substitute
            out.push_str(tail);
            return out;
        };
        match context.get(&tail[1..end]) {
            Some(value) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                // unknown key; keep the brace and rescan just past it
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
