use serde::Serialize;
use std::collections::BTreeMap;

/// Half-open byte range `[start, end)` of a block comment in its file.
/// Delimiters are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommentSpan {
    pub start: usize,
    pub end: usize,
}

/// A genuine `/* ... */` comment borrowed from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comment<'a> {
    pub text: &'a str,
    pub span: CommentSpan,
}

/// One `@test(...) ... @endtest` unit. Offsets are relative to the start of
/// the comment text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestDefinition {
    pub name: String,
    pub offset: usize,
    pub arguments: BTreeMap<String, String>,
    pub body: String,
    pub body_offset: usize,
}

impl TestDefinition {
    pub fn suite(&self) -> Option<&str> {
        self.arguments.get("suite").map(String::as_str)
    }

    pub fn fixture(&self) -> Option<&str> {
        self.arguments.get("fixture").map(String::as_str)
    }
}

/// A test paired with the comment it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedTest {
    pub test: TestDefinition,
    pub comment: CommentSpan,
}

impl ExtractedTest {
    /// File offset of the `@test` marker.
    pub fn absolute_offset(&self) -> usize {
        self.comment.start + self.test.offset
    }

    /// File offset of the first body byte.
    pub fn absolute_body_offset(&self) -> usize {
        self.comment.start + self.test.body_offset
    }
}

/// A test as listed by the `list` command.
#[derive(Debug, Clone, Serialize)]
pub struct TestEntry {
    pub file: String,
    pub line: usize,
    pub name: String,
    pub arguments: BTreeMap<String, String>,
}

/// An extraction failure resolved to a file and line.
#[derive(Debug, Clone, Serialize)]
pub struct FileError {
    pub file: String,
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ListResult {
    pub tests: Vec<TestEntry>,
    pub errors: Vec<FileError>,
    pub files_scanned: usize,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub passed: bool,
    pub files_scanned: usize,
    pub tests_found: usize,
    pub errors: Vec<FileError>,
}
