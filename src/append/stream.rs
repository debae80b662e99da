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

use std::fmt;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::append::Append;
use crate::error::Error;
use crate::level::Severity;

/// A sink that writes lines verbatim to an owned byte stream.
///
/// Backs the `file`, `stdout`, and `stderr` logger types. Writes are
/// unbuffered and serialized through a mutex, so one logger can be shared
/// across threads. The stream handle is owned for the sink's lifetime and
/// closed on drop.
///
/// # Examples
///
/// ```no_run
/// use logsink::Logger;
/// use logsink::append::Stream;
///
/// let logger = Logger::new(Stream::file("/var/log/app.log")?);
/// # Ok::<(), logsink::Error>(())
/// ```
pub struct Stream {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Stream {
    /// Create a sink over any open writable stream.
    pub fn new(writer: impl Write + Send + 'static) -> Stream {
        Stream {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// A sink writing to the process standard output.
    pub fn stdout() -> Stream {
        Stream::new(io::stdout())
    }

    /// A sink writing to the process standard error.
    pub fn stderr() -> Stream {
        Stream::new(io::stderr())
    }

    /// A sink appending to the file at `path`, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OpenFile`] wrapping the OS error when the path
    /// cannot be opened for appending.
    pub fn file(path: impl AsRef<Path>) -> Result<Stream, Error> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|source| Error::OpenFile {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Stream::new(file))
    }

    fn writer(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        // a poisoned lock still yields a usable byte stream
        self.writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream").finish_non_exhaustive()
    }
}

impl Append for Stream {
    fn append(&self, _severity: Severity, line: &str) -> anyhow::Result<()> {
        self.writer().write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) {
        let _ = self.writer().flush();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_lines_verbatim() {
        let buf = SharedBuf::default();
        let stream = Stream::new(buf.clone());
        stream.append(Severity::Error, "one\n").unwrap();
        stream.append(Severity::Debug, "two\n").unwrap();
        assert_eq!(&*buf.0.lock().unwrap(), b"one\ntwo\n");
    }

    #[test]
    fn missing_parent_directory_fails_open() {
        let err = Stream::file("/definitely/not/a/real/dir/x.log").unwrap_err();
        assert!(matches!(err, Error::OpenFile { .. }));
    }
}
