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

use std::fs;

use logsink::Config;
use logsink::Context;
use logsink::Error;
use logsink::LoggerFactory;

#[test]
fn writes_one_line_per_emitted_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x.log");

    let factory = LoggerFactory::new();
    let logger = factory
        .create(Config::new("file").file(&path).threshold("info"))
        .unwrap();

    logger
        .warning("disk at {pct}%", &Context::new().with("pct", 90))
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.ends_with(" [**] warning: disk at 90%\n"));
}

#[test]
fn suppressed_records_write_zero_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x.log");

    let factory = LoggerFactory::new();
    let logger = factory
        .create(Config::new("file").file(&path).threshold("error"))
        .unwrap();

    logger.warning("quiet", &Context::new()).unwrap();
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);

    logger.critical("loud", &Context::new()).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains(" [!!] critical: loud\n"));
}

#[test]
fn threshold_boundary_emits_to_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x.log");

    let factory = LoggerFactory::new();
    let logger = factory
        .create(Config::new("file").file(&path).threshold("info"))
        .unwrap();

    logger.info("at the boundary", &Context::new()).unwrap();
    logger.debug("below it", &Context::new()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains(" [--] info: at the boundary\n"));
}

#[test]
fn reopening_appends_instead_of_truncating() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x.log");

    let factory = LoggerFactory::new();

    {
        let logger = factory.create(Config::new("file").file(&path)).unwrap();
        logger.error("first run", &Context::new()).unwrap();
    }
    {
        let logger = factory.create(Config::new("file").file(&path)).unwrap();
        logger.error("second run", &Context::new()).unwrap();
    }

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.contains("first run"));
    assert!(contents.contains("second run"));
}

#[test]
fn unwritable_path_fails_with_the_os_error_attached() {
    let factory = LoggerFactory::new();
    let err = factory
        .create(Config::new("file").file("/definitely/not/a/real/dir/x.log"))
        .unwrap_err();
    match err {
        Error::OpenFile { path, source } => {
            assert!(path.ends_with("x.log"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected OpenFile, got {other:?}"),
    }
}
