use crate::model::{Comment, CommentSpan};

/// Iterate over the genuine `/* ... */` comments in `text`, in file order.
///
/// Quoted strings and `//` comments are consumed so that a `/*` inside them
/// is not mistaken for a comment start. They are never yielded. A `/*` with
/// no closing `*/` is not a comment.
pub fn comments(text: &str) -> Comments<'_> {
    Comments { text, cursor: 0 }
}

/// Iterator returned by [`comments`].
#[derive(Debug, Clone)]
pub struct Comments<'a> {
    text: &'a str,
    cursor: usize,
}

enum Token {
    Skipped(usize),
    BlockComment(usize),
}

impl<'a> Comments<'a> {
    /// Classify the token starting at `pos` and return where it ends.
    /// `None` means no token starts here.
    fn token_at(&self, pos: usize) -> Option<Token> {
        let bytes = self.text.as_bytes();
        match bytes[pos] {
            quote @ (b'"' | b'\'') => quoted_end(bytes, pos, quote).map(Token::Skipped),
            b'/' => match bytes.get(pos + 1) {
                Some(b'/') => {
                    let end = bytes[pos..]
                        .iter()
                        .position(|&b| b == b'\n' || b == b'\r')
                        .map_or(bytes.len(), |n| pos + n);
                    Some(Token::Skipped(end))
                }
                Some(b'*') => self.text[pos + 2..]
                    .find("*/")
                    .map(|n| Token::BlockComment(pos + 2 + n + 2)),
                _ => None,
            },
            _ => None,
        }
    }
}

/// End (exclusive) of the quoted string opened at `start`, if it is closed.
fn quoted_end(bytes: &[u8], start: usize, quote: u8) -> Option<usize> {
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b if b == quote => return Some(pos + 1),
            _ => pos += 1,
        }
    }
    None
}

impl<'a> Iterator for Comments<'a> {
    type Item = Comment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.text.len() {
            let start = self.cursor;
            match self.token_at(start) {
                Some(Token::BlockComment(end)) => {
                    self.cursor = end;
                    return Some(Comment {
                        text: &self.text[start..end],
                        span: CommentSpan { start, end },
                    });
                }
                Some(Token::Skipped(end)) => self.cursor = end,
                None => self.cursor += 1,
            }
        }
        None
    }
}
