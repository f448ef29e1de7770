use std::fmt;

/// An `Error` raised by the lexer or the parser.
///
/// Parsing stops at the first error: either the lexer found a token it could
/// not scan, the parser found a token it did not expect, or the input nested
/// more deeply than the configured limit allows.
///
/// Every error carries the byte offset where it begins in the input, so a
/// caller can render a diagnostic with line/column information:
///
/// ## Example
/// ```rust
/// use graphql_syntax::{location_of, Parser};
///
/// let input = "union SearchResult = Photo | ";
/// let err = Parser::new(input).parse().unwrap_err();
/// let loc = location_of(input, err.index());
///
/// eprintln!("syntax error: {} at {}:{}", err.message(), loc.line, loc.column);
/// ```
#[derive(Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A lexical or syntactic failure.
    #[error("{message}")]
    Syntax {
        message: String,
        /// The offending source fragment, or `"EOF"` at end of input.
        data: String,
        /// Byte offset of the failure in the input.
        index: usize,
    },

    /// The input nested more deeply than the configured `max_depth`.
    #[error("parser recursion limit exceeded")]
    RecursionLimitExceeded {
        /// Byte offset of the token being parsed when the limit tripped.
        index: usize,
    },
}

impl Error {
    /// Create a new syntax error.
    pub(crate) fn syntax<S: Into<String>>(message: S, data: String, index: usize) -> Self {
        Error::Syntax {
            message: message.into(),
            data,
            index,
        }
    }

    /// Create a syntax error at end of input.
    pub(crate) fn eof<S: Into<String>>(message: S, index: usize) -> Self {
        Error::Syntax {
            message: message.into(),
            data: "EOF".to_string(),
            index,
        }
    }

    /// Get a reference to the error's message.
    pub fn message(&self) -> &str {
        match self {
            Error::Syntax { message, .. } => message,
            Error::RecursionLimitExceeded { .. } => "parser recursion limit exceeded",
        }
    }

    /// Get a reference to the error's data. This is the source fragment found
    /// to be lexically or syntactically incorrect, and is empty for a
    /// recursion limit error.
    pub fn data(&self) -> &str {
        match self {
            Error::Syntax { data, .. } => data,
            Error::RecursionLimitExceeded { .. } => "",
        }
    }

    /// Get the error's index. This is where the error begins in a given
    /// input, as a byte offset.
    pub fn index(&self) -> usize {
        match self {
            Error::Syntax { index, .. } => *index,
            Error::RecursionLimitExceeded { index } => *index,
        }
    }

    /// Whether this error is a recursion limit error rather than a malformed
    /// piece of input.
    pub fn is_limit(&self) -> bool {
        matches!(self, Error::RecursionLimitExceeded { .. })
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.index();
        let end = start + self.data().len();

        match self {
            Error::Syntax { message, data, .. } if data == "EOF" => {
                write!(f, "ERROR@{start}:{start} {message:?} {data}")
            }
            Error::Syntax { message, data, .. } => {
                write!(f, "ERROR@{start}:{end} {message:?} {data}")
            }
            Error::RecursionLimitExceeded { .. } => {
                write!(f, "LIMIT@{start}:{start} {:?}", self.message())
            }
        }
    }
}
