mod github_actions;

use colored::*;

use crate::cli::Format;
use crate::model::*;

fn format_arguments(entry: &TestEntry) -> String {
    entry
        .arguments
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_errors_text(errors: &[FileError]) {
    for error in errors {
        let line = format!("{}:{}: error: {}", error.file, error.line, error.message);
        println!("{}", line.red());
    }
}

pub fn print_list(result: &ListResult, format: &Format) {
    match format {
        Format::Text => {
            let mut current_file: Option<&str> = None;
            for entry in &result.tests {
                if current_file != Some(entry.file.as_str()) {
                    println!("{}", entry.file.bold().underline());
                    current_file = Some(entry.file.as_str());
                }
                let mut line = format!("  L{}: {}", entry.line, entry.name);
                if !entry.arguments.is_empty() {
                    line.push_str(&format!(" ({})", format_arguments(entry)));
                }
                println!("{}", line);
            }

            if !result.errors.is_empty() {
                println!();
                print_errors_text(&result.errors);
            }

            println!(
                "\n{} tests in {} files",
                result.tests.len(),
                result.files_scanned
            );
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(result).expect("failed to serialize");
            println!("{}", json);
        }
        Format::GithubActions => print!("{}", github_actions::format_list(result)),
    }
}

pub fn print_check(result: &CheckResult, format: &Format) {
    match format {
        Format::Text => {
            if result.passed {
                println!("{}", "PASS".green().bold());
            } else {
                println!("{}", "FAIL".red().bold());
                print_errors_text(&result.errors);
            }
            println!(
                "{} tests in {} files",
                result.tests_found, result.files_scanned
            );
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(result).expect("failed to serialize");
            println!("{}", json);
        }
        Format::GithubActions => print!("{}", github_actions::format_check(result)),
    }
}
