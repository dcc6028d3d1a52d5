use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::error::ExtractError;
use crate::line_index::LineIndex;
use crate::model::{CommentSpan, ExtractedTest};
use crate::parser::{test_blocks, TestBlocks};
use crate::scanner::{comments, Comments};

/// A source file held in memory for extraction.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    contents: String,
}

impl SourceFile {
    /// Read `path` once into memory.
    ///
    /// Bytes that are not valid UTF-8 (e.g. Latin-1 text in a comment) are
    /// replaced with U+FFFD. Delimiters and line breaks are ASCII, so comment
    /// detection and line numbers are unaffected.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("cannot read file: {}", path.display()))?;
        let contents = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                log::info!("{}: not valid UTF-8, decoding lossily", path.display());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        Ok(Self::new(path, contents))
    }

    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Lazily yield every test in the file with its comment span.
    ///
    /// Error offsets are file offsets. Iteration ends at the first error.
    pub fn tests(&self) -> Tests<'_> {
        Tests {
            comments: comments(&self.contents),
            current: None,
            failed: false,
        }
    }

    /// All tests in the file, or the first error. No partial results.
    pub fn extract(&self) -> Result<Vec<ExtractedTest>, ExtractError> {
        let tests = self.tests().collect::<Result<Vec<_>, _>>()?;
        log::debug!("{}: {} tests extracted", self.path.display(), tests.len());
        Ok(tests)
    }

    pub fn line_index(&self) -> LineIndex {
        LineIndex::new(&self.contents)
    }

    /// 1-based line of the offset carried by `err`.
    pub fn locate(&self, err: &ExtractError) -> usize {
        self.line_index().line_of(err.offset()) + 1
    }
}

/// Iterator returned by [`SourceFile::tests`].
pub struct Tests<'a> {
    comments: Comments<'a>,
    current: Option<(CommentSpan, TestBlocks<'a>)>,
    failed: bool,
}

impl<'a> Iterator for Tests<'a> {
    type Item = Result<ExtractedTest, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some((span, blocks)) = self.current.as_mut() {
                match blocks.next() {
                    Some(Ok(test)) => {
                        return Some(Ok(ExtractedTest {
                            test,
                            comment: *span,
                        }))
                    }
                    Some(Err(e)) => {
                        self.failed = true;
                        return Some(Err(e.rebased(span.start)));
                    }
                    None => self.current = None,
                }
            }
            let comment = self.comments.next()?;
            self.current = Some((comment.span, test_blocks(comment.text)));
        }
    }
}
