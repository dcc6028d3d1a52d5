mod check;
mod completions;
mod generate;
mod list;

pub use self::check::cmd_check;
pub use self::completions::cmd_completions;
pub use self::generate::{cmd_generate, GenerateOptions};
pub use self::list::cmd_list;

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::extract::SourceFile;
use crate::model::{FileError, TestEntry};
use crate::walk::collect_files;

/// Tests and failures gathered from a set of files.
pub(crate) struct Scan {
    pub tests: Vec<TestEntry>,
    pub errors: Vec<FileError>,
    pub files_scanned: usize,
}

/// Extract every file under `paths`. A file that cannot be read or fails to
/// parse is recorded as an error and the scan moves on to the next one.
pub(crate) fn do_scan(paths: &[PathBuf], config: &Config) -> Result<Scan> {
    let default_root = [PathBuf::from(".")];
    let paths = if paths.is_empty() {
        &default_root[..]
    } else {
        paths
    };

    let mut scan = Scan {
        tests: Vec::new(),
        errors: Vec::new(),
        files_scanned: 0,
    };

    for path in collect_files(paths, config)? {
        let file = path.display().to_string();
        let source = match SourceFile::read(&path) {
            Ok(s) => s,
            Err(e) => {
                scan.errors.push(FileError {
                    file,
                    line: 0,
                    message: format!("{:#}", e),
                });
                continue;
            }
        };
        scan.files_scanned += 1;

        match source.extract() {
            Ok(tests) => {
                let index = source.line_index();
                scan.tests.extend(tests.into_iter().map(|extracted| TestEntry {
                    file: file.clone(),
                    line: index.line_of(extracted.absolute_offset()) + 1,
                    name: extracted.test.name,
                    arguments: extracted.test.arguments,
                }));
            }
            Err(e) => {
                log::info!("{}: extraction failed: {}", file, e);
                scan.errors.push(FileError {
                    line: source.locate(&e),
                    message: e.to_string(),
                    file,
                });
            }
        }
    }

    Ok(scan)
}
