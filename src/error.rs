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

use std::io;
use std::path::PathBuf;

/// Errors raised while resolving levels, building loggers, or emitting
/// records.
///
/// All of these are fail-fast: nothing is retried and nothing is downgraded
/// to a silent no-op. A suppressed record (below the threshold) is not an
/// error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A level argument that is neither a rank in `1..=8` nor one of the
    /// eight level names.
    #[error("invalid log level: {0}")]
    InvalidLevel(String),
    /// A logger configuration the factory cannot dispatch on.
    #[error("invalid logger config: {0}")]
    Config(String),
    /// The log file could not be opened for appending.
    #[error("unable to open log file {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A sink resource could not be acquired at construction.
    #[error("failed to perform IO action: {0}")]
    Io(#[from] io::Error),
    /// The sink failed while writing an already formatted record.
    #[error("failed to write log record: {0}")]
    Output(anyhow::Error),
}
