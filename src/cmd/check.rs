use std::path::PathBuf;
use std::process;

use anyhow::Result;

use crate::cli::Format;
use crate::config::Config;
use crate::model::CheckResult;
use crate::output::print_check;

use super::do_scan;

pub fn cmd_check(paths: &[PathBuf], config: &Config, format: &Format) -> Result<()> {
    let scan = do_scan(paths, config)?;
    let result = CheckResult {
        passed: scan.errors.is_empty(),
        files_scanned: scan.files_scanned,
        tests_found: scan.tests.len(),
        errors: scan.errors,
    };
    let passed = result.passed;

    print_check(&result, format);

    if !passed {
        process::exit(1);
    }

    Ok(())
}
