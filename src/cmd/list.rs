use std::path::PathBuf;

use anyhow::Result;

use crate::cli::Format;
use crate::config::Config;
use crate::model::ListResult;
use crate::output::print_list;

use super::do_scan;

pub fn cmd_list(paths: &[PathBuf], config: &Config, format: &Format) -> Result<()> {
    let scan = do_scan(paths, config)?;
    let result = ListResult {
        tests: scan.tests,
        errors: scan.errors,
        files_scanned: scan.files_scanned,
    };
    print_list(&result, format);
    Ok(())
}
