/// Maps byte offsets in a file to zero-based line numbers.
///
/// The table holds the start offset of every line plus a trailing sentinel,
/// each line contributing its length and one `\n`. For `"a\nb"` that is
/// `[0, 2, 4]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    offsets: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut offsets = vec![0];
        let mut next = 0;
        for line in text.split('\n') {
            next += line.len() + 1;
            offsets.push(next);
        }
        LineIndex { offsets }
    }

    #[cfg(test)]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Zero-based line containing `offset`. Offsets past the end belong to
    /// the last line.
    pub fn line_of(&self, offset: usize) -> usize {
        let after = self.offsets.partition_point(|&start| start <= offset);
        after.saturating_sub(1).min(self.line_count() - 1)
    }
}
