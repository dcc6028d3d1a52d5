use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::error::ExtractError;
use crate::model::TestDefinition;

/// `@test(Name` up to and including whitespace after the name.
static TEST_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@test\s*\(\s*(\w+)\s*").unwrap());

/// One step of an argument list, anchored at the cursor: either
/// `, name = "value"` or the closing `)` with the rest of its line.
static ARGUMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?:\s*,\s*(\w+)\s*=\s*("(?:[^"\\]|(?s:\\.))*"|'(?:[^'\\]|(?s:\\.))*')|\s*\)[ \t\x0B\x0C]*(?:\r\n|\n|\r)?)"#,
    )
    .unwrap()
});

const END_MARKER: &str = "@endtest";

/// Iterate over the `@test ... @endtest` blocks of one comment.
///
/// Offsets in the yielded definitions and errors are relative to the start
/// of `comment`. The iterator stops after the first error.
pub fn test_blocks(comment: &str) -> TestBlocks<'_> {
    TestBlocks {
        comment,
        cursor: 0,
        failed: false,
    }
}

/// Iterator returned by [`test_blocks`].
#[derive(Debug, Clone)]
pub struct TestBlocks<'a> {
    comment: &'a str,
    cursor: usize,
    failed: bool,
}

impl<'a> TestBlocks<'a> {
    fn parse_next(&mut self) -> Option<Result<TestDefinition, ExtractError>> {
        let caps = TEST_MARKER_RE.captures_at(self.comment, self.cursor)?;
        let (Some(marker), Some(name)) = (caps.get(0), caps.get(1)) else {
            return None;
        };
        let offset = marker.start();
        self.cursor = marker.end();

        let arguments = match self.parse_arguments() {
            Ok(arguments) => arguments,
            Err(e) => return Some(Err(e)),
        };

        let body_offset = self.cursor;
        let Some(end) = find_end_marker(self.comment, body_offset) else {
            return Some(Err(ExtractError::UnterminatedTest {
                offset: body_offset,
            }));
        };
        self.cursor = end + END_MARKER.len();

        Some(Ok(TestDefinition {
            name: name.as_str().to_string(),
            offset,
            arguments,
            body: self.comment[body_offset..end].to_string(),
            body_offset,
        }))
    }

    /// Consume `, key="value"` pairs up to and including the closing `)`.
    fn parse_arguments(&mut self) -> Result<BTreeMap<String, String>, ExtractError> {
        let mut arguments = BTreeMap::new();
        loop {
            let rest = &self.comment[self.cursor..];
            let caps = ARGUMENT_RE
                .captures(rest)
                .ok_or(ExtractError::MalformedArgumentList {
                    offset: self.cursor,
                })?;
            self.cursor += caps.get(0).map_or(0, |m| m.end());

            match (caps.get(1), caps.get(2)) {
                (Some(key), Some(value)) => {
                    let quoted = value.as_str();
                    arguments.insert(
                        key.as_str().to_string(),
                        quoted[1..quoted.len() - 1].to_string(),
                    );
                }
                _ => return Ok(arguments),
            }
        }
    }
}

/// Position of the first `@endtest` at or after `from` that is not escaped
/// as `@@endtest`.
fn find_end_marker(text: &str, from: usize) -> Option<usize> {
    let mut search = from;
    while let Some(found) = text[search..].find(END_MARKER) {
        let pos = search + found;
        if pos == 0 || text.as_bytes()[pos - 1] != b'@' {
            return Some(pos);
        }
        search = pos + 1;
    }
    None
}

impl<'a> Iterator for TestBlocks<'a> {
    type Item = Result<TestDefinition, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.parse_next()?;
        if item.is_err() {
            self.failed = true;
        }
        Some(item)
    }
}
