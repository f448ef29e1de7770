use std::fmt;

/// A half-open byte range into the parsed source.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A 1-based line/column position, decoded from a byte offset with
/// [`location_of`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

/// Decode a byte offset into a 1-based line/column pair.
///
/// `\n`, `\r`, and `\r\n` each count as a single line terminator. An offset
/// past the end of the input keeps counting columns past the last character,
/// which is where end-of-input errors point.
///
/// ## Example
/// ```rust
/// use graphql_syntax::{location_of, Location};
///
/// let source = "{\n  cat\n}";
/// assert_eq!(location_of(source, 4), Location { line: 2, column: 3 });
/// ```
pub fn location_of(source: &str, offset: usize) -> Location {
    let bytes = source.as_bytes();
    let limit = offset.min(source.len());

    let mut line = 1;
    let mut line_start = 0;
    while let Some(found) = memchr::memchr2(b'\n', b'\r', &bytes[line_start..limit]) {
        let terminator = line_start + found;
        let after = if bytes[terminator] == b'\r' && bytes.get(terminator + 1) == Some(&b'\n') {
            terminator + 2
        } else {
            terminator + 1
        };
        line += 1;
        line_start = after.min(limit);
        if after > limit {
            break;
        }
    }

    let column = source[line_start..limit].chars().count() + 1 + offset.saturating_sub(source.len());
    Location { line, column }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_starts_at_line_one_column_one() {
        assert_eq!(location_of("cat", 0), Location { line: 1, column: 1 });
    }

    #[test]
    fn it_counts_columns_within_a_line() {
        assert_eq!(location_of("query cat", 6), Location { line: 1, column: 7 });
    }

    #[test]
    fn it_counts_lines_for_each_terminator_style() {
        assert_eq!(location_of("a\nb", 2), Location { line: 2, column: 1 });
        assert_eq!(location_of("a\rb", 2), Location { line: 2, column: 1 });
        assert_eq!(location_of("a\r\nb", 3), Location { line: 2, column: 1 });
    }

    #[test]
    fn it_does_not_double_count_crlf() {
        let source = "a\r\nb\r\nc";
        assert_eq!(location_of(source, 6), Location { line: 3, column: 1 });
    }

    #[test]
    fn it_continues_past_the_end_of_input() {
        let source = "{ cat }";
        assert_eq!(
            location_of(source, source.len() + 2),
            Location { line: 1, column: 10 }
        );
    }

    #[test]
    fn it_counts_characters_not_bytes() {
        let source = "# 🐈🐈\ncat";
        let offset = source.find("cat").unwrap();
        assert_eq!(location_of(source, offset), Location { line: 2, column: 1 });
        assert_eq!(
            location_of(source, offset - 1),
            Location { line: 1, column: 5 }
        );
    }
}
