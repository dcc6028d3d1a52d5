use thiserror::Error;

/// Failure while extracting tests from a single file.
///
/// Offsets are byte offsets. The parser reports them relative to the comment
/// it was given; the extraction pipeline rebases them onto the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("missing argument or closing parenthesis in @test")]
    MalformedArgumentList { offset: usize },

    #[error("did not find a terminating @endtest")]
    UnterminatedTest { offset: usize },
}

impl ExtractError {
    pub fn offset(&self) -> usize {
        match self {
            ExtractError::MalformedArgumentList { offset }
            | ExtractError::UnterminatedTest { offset } => *offset,
        }
    }

    /// Shift the offset by `base`, e.g. from comment to file coordinates.
    pub fn rebased(self, base: usize) -> Self {
        match self {
            ExtractError::MalformedArgumentList { offset } => {
                ExtractError::MalformedArgumentList {
                    offset: offset + base,
                }
            }
            ExtractError::UnterminatedTest { offset } => ExtractError::UnterminatedTest {
                offset: offset + base,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ExtractError::MalformedArgumentList { offset: 3 };
        assert_eq!(
            err.to_string(),
            "missing argument or closing parenthesis in @test"
        );
        let err = ExtractError::UnterminatedTest { offset: 3 };
        assert_eq!(err.to_string(), "did not find a terminating @endtest");
    }

    #[test]
    fn test_rebased_shifts_offset() {
        let err = ExtractError::UnterminatedTest { offset: 7 }.rebased(100);
        assert_eq!(err.offset(), 107);
        assert!(matches!(err, ExtractError::UnterminatedTest { .. }));
    }
}
