use crate::model::*;

/// Escape special characters per GitHub Actions workflow command spec.
fn escape_message(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\n', "%0A")
        .replace('\r', "%0D")
}

/// Escape property values (additionally escape `:` and `,`).
fn escape_property(s: &str) -> String {
    escape_message(s).replace(':', "%3A").replace(',', "%2C")
}

fn format_error_annotation(error: &FileError) -> String {
    format!(
        "::error file={},line={},title=doctestpp::{}",
        escape_property(&error.file),
        error.line,
        escape_message(&error.message)
    )
}

pub fn format_list(result: &ListResult) -> String {
    let mut lines: Vec<String> = result
        .tests
        .iter()
        .map(|entry| {
            format!(
                "::notice file={},line={},title=doctestpp::@test({})",
                escape_property(&entry.file),
                entry.line,
                escape_message(&entry.name)
            )
        })
        .collect();
    lines.extend(result.errors.iter().map(format_error_annotation));
    lines.push(format!(
        "::notice::doctestpp: {} tests in {} files",
        result.tests.len(),
        result.files_scanned
    ));
    lines.push(String::new());
    lines.join("\n")
}

pub fn format_check(result: &CheckResult) -> String {
    let mut lines: Vec<String> = result.errors.iter().map(format_error_annotation).collect();
    if result.passed {
        lines.push(format!(
            "::notice::doctestpp check passed: {} tests in {} files",
            result.tests_found, result.files_scanned
        ));
    } else {
        lines.push(format!(
            "::error::doctestpp check failed: {} files with errors",
            result.errors.len()
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}
