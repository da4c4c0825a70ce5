/// A line that does not conform to the grammar.
///
/// `position` is the 0-based character offset of the offending token, or the
/// length of the line when input ended too early.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}. Position: {position}.")]
pub struct SyntaxError {
    /// Human readable description of what was expected.
    pub message:  String,
    /// Character offset of the problem.
    pub position: usize,
}

impl SyntaxError {
    /// Creates a syntax error at `position`.
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        Self { message: message.into(),
               position }
    }

    /// Creates the error reported when the line ends before the grammar is
    /// satisfied.
    pub fn unexpected_end(expected: &str, position: usize) -> Self {
        Self::new(format!("Unexpected end of input, expected {expected}"), position)
    }
}
