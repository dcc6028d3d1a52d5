//! Common-prefix helpers used to de-indent test bodies.

/// Byte length of the longest prefix shared by every line.
///
/// Lines are compared character by character, so the result always falls on
/// a char boundary. An empty line (or no lines at all) gives 0.
pub fn common_prefix_len<S: AsRef<str>>(lines: &[S]) -> usize {
    let Some((first, rest)) = lines.split_first() else {
        return 0;
    };
    let first = first.as_ref();

    let mut len = 0;
    for (idx, ch) in first.char_indices() {
        let shared = rest
            .iter()
            .all(|line| line.as_ref()[idx..].chars().next() == Some(ch));
        if !shared {
            break;
        }
        len = idx + ch.len_utf8();
    }
    len
}

/// The longest prefix shared by every line.
pub fn common_prefix<S: AsRef<str>>(lines: &[S]) -> &str {
    match lines.first() {
        Some(first) => &first.as_ref()[..common_prefix_len(lines)],
        None => "",
    }
}

/// Length of the leading comment margin of `line`: whitespace and `*`.
pub fn margin_len(line: &str) -> usize {
    line.len() - line.trim_start_matches(|c: char| c.is_whitespace() || c == '*').len()
}
