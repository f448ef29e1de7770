mod cursor;
mod string_value;
mod token;
mod token_kind;

pub use token::Token;
pub use token_kind::TokenKind;

use std::borrow::Cow;

use crate::error::Error;
use cursor::Cursor;

/// Scan the next token of `source`, starting at byte offset `offset`.
///
/// Ignored source (the UTF-8 BOM, whitespace, line terminators, and commas)
/// is skipped first; comments are surfaced as [`TokenKind::Comment`] tokens.
/// At the end of input an [`TokenKind::Eof`] token is returned whose span is
/// empty and sits one past the last byte.
///
/// The function is pure: calling it twice with the same arguments returns
/// the same token, and the parser resumes it at the end offset of the token
/// it last consumed.
///
/// ## Example
/// ```rust
/// use graphql_syntax::{lex, TokenKind};
///
/// let token = lex("query cat { name }", 5).unwrap();
/// assert_eq!(token.kind(), TokenKind::Name);
/// assert_eq!(token.data(), "cat");
/// ```
pub fn lex(source: &str, offset: usize) -> Result<Token<'_>, Error> {
    let mut cursor = Cursor::new(source, offset);
    skip_ignored(&mut cursor);

    let start = cursor.offset();
    let Some(c) = cursor.bump() else {
        return Ok(Token::eof(source.len()));
    };

    match c {
        '"' => string_value::scan(source, &mut cursor, start),
        '#' => Ok(comment(source, &mut cursor, start)),
        '.' => spread(source, &mut cursor, start),
        c if is_name_start(c) => Ok(name(source, &mut cursor, start)),
        c @ ('-' | '0'..='9') => number(source, &mut cursor, start, c),
        '!' => Ok(punctuator(TokenKind::Bang, source, &cursor, start)),
        '$' => Ok(punctuator(TokenKind::Dollar, source, &cursor, start)),
        '&' => Ok(punctuator(TokenKind::Amp, source, &cursor, start)),
        '(' => Ok(punctuator(TokenKind::LParen, source, &cursor, start)),
        ')' => Ok(punctuator(TokenKind::RParen, source, &cursor, start)),
        ':' => Ok(punctuator(TokenKind::Colon, source, &cursor, start)),
        '=' => Ok(punctuator(TokenKind::Eq, source, &cursor, start)),
        '@' => Ok(punctuator(TokenKind::At, source, &cursor, start)),
        '[' => Ok(punctuator(TokenKind::LBracket, source, &cursor, start)),
        ']' => Ok(punctuator(TokenKind::RBracket, source, &cursor, start)),
        '{' => Ok(punctuator(TokenKind::LCurly, source, &cursor, start)),
        '|' => Ok(punctuator(TokenKind::Pipe, source, &cursor, start)),
        '}' => Ok(punctuator(TokenKind::RCurly, source, &cursor, start)),
        c => Err(Error::syntax(
            format!("unexpected character {c:?}"),
            c.to_string(),
            start,
        )),
    }
}

/// An iterator over the tokens of a source string, ending with an `Eof`
/// token. Intended for tests and tools; the parser drives [`lex`] directly.
///
/// ## Example
/// ```rust
/// use graphql_syntax::Lexer;
///
/// let tokens: Result<Vec<_>, _> = Lexer::new("union U = A | B").collect();
/// assert_eq!(tokens.unwrap().len(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    offset: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new instance of `Lexer`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            finished: false,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match lex(self.source, self.offset) {
            Ok(token) => {
                self.offset = token.end();
                if token.kind() == TokenKind::Eof {
                    self.finished = true;
                }
                Some(Ok(token))
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

/// Ignored :: UnicodeBOM | WhiteSpace | LineTerminator | Comma
fn skip_ignored(cursor: &mut Cursor<'_>) {
    while let Some(c) = cursor.peek() {
        if matches!(c, ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}') {
            cursor.bump();
        } else {
            break;
        }
    }
}

fn punctuator<'a>(
    kind: TokenKind,
    source: &'a str,
    cursor: &Cursor<'a>,
    start: usize,
) -> Token<'a> {
    Token::new(
        kind,
        Cow::Borrowed(&source[start..cursor.offset()]),
        start,
        cursor.offset(),
    )
}

/// *Name*: `[_A-Za-z][_0-9A-Za-z]*`
fn name<'a>(source: &'a str, cursor: &mut Cursor<'a>, start: usize) -> Token<'a> {
    while let Some(c) = cursor.peek() {
        if is_name_continue(c) {
            cursor.bump();
        } else {
            break;
        }
    }
    Token::new(
        TokenKind::Name,
        Cow::Borrowed(&source[start..cursor.offset()]),
        start,
        cursor.offset(),
    )
}

/// *Comment*: `#` up to but excluding the next line terminator.
fn comment<'a>(source: &'a str, cursor: &mut Cursor<'a>, start: usize) -> Token<'a> {
    while let Some(c) = cursor.peek() {
        if matches!(c, '\n' | '\r') {
            break;
        }
        cursor.bump();
    }
    Token::new(
        TokenKind::Comment,
        Cow::Borrowed(&source[start + 1..cursor.offset()]),
        start,
        cursor.offset(),
    )
}

fn spread<'a>(source: &'a str, cursor: &mut Cursor<'a>, start: usize) -> Result<Token<'a>, Error> {
    if cursor.eat('.') && cursor.eat('.') {
        Ok(Token::new(
            TokenKind::Spread,
            Cow::Borrowed(&source[start..cursor.offset()]),
            start,
            cursor.offset(),
        ))
    } else {
        Err(Error::syntax(
            "unterminated spread operator, expected `...`",
            cursor.slice_from(start).to_string(),
            start,
        ))
    }
}

/// *IntValue* / *FloatValue*.
///
/// `-?(0|[1-9][0-9]*)` optionally followed by a fraction (`.` Digit+) and/or
/// an exponent (`e`/`E` sign? Digit+). A number token must not run straight
/// into a name character, a digit, or a `.`; `01`, `1.`, `1.e1`, and `123abc`
/// are all errors.
fn number<'a>(
    source: &'a str,
    cursor: &mut Cursor<'a>,
    start: usize,
    first: char,
) -> Result<Token<'a>, Error> {
    let int_first = if first == '-' {
        match cursor.peek() {
            Some(c) if c.is_ascii_digit() => cursor.bump().unwrap_or(c),
            _ => {
                return Err(Error::syntax(
                    "expected a digit after `-`",
                    cursor.slice_from(start).to_string(),
                    start,
                ));
            }
        }
    } else {
        first
    };

    if int_first == '0' {
        if let Some(c) = cursor.peek() {
            if c.is_ascii_digit() {
                return Err(Error::syntax(
                    "unexpected digit after a leading zero",
                    format!("{}{c}", cursor.slice_from(start)),
                    start,
                ));
            }
        }
    } else {
        eat_digits(cursor);
    }

    let mut kind = TokenKind::Int;

    if cursor.eat('.') {
        kind = TokenKind::Float;
        if !eat_digits(cursor) {
            return Err(Error::syntax(
                "expected a digit after `.` in a Float Value",
                cursor.slice_from(start).to_string(),
                start,
            ));
        }
    }

    if matches!(cursor.peek(), Some('e' | 'E')) {
        cursor.bump();
        kind = TokenKind::Float;
        if matches!(cursor.peek(), Some('+' | '-')) {
            cursor.bump();
        }
        if !eat_digits(cursor) {
            return Err(Error::syntax(
                "expected a digit in the exponent of a Float Value",
                cursor.slice_from(start).to_string(),
                start,
            ));
        }
    }

    if let Some(c) = cursor.peek() {
        if is_name_start(c) || c == '.' || c.is_ascii_digit() {
            return Err(Error::syntax(
                format!("unexpected character `{c}` after a number"),
                format!("{}{c}", cursor.slice_from(start)),
                start,
            ));
        }
    }

    Ok(Token::new(
        kind,
        Cow::Borrowed(&source[start..cursor.offset()]),
        start,
        cursor.offset(),
    ))
}

fn eat_digits(cursor: &mut Cursor<'_>) -> bool {
    let mut any = false;
    while matches!(cursor.peek(), Some(c) if c.is_ascii_digit()) {
        cursor.bump();
        any = true;
    }
    any
}

fn is_name_start(c: char) -> bool {
    matches!(c, '_' | 'A'..='Z' | 'a'..='z')
}

fn is_name_continue(c: char) -> bool {
    matches!(c, '_' | 'A'..='Z' | 'a'..='z' | '0'..='9')
}

#[cfg(test)]
mod test {
    use super::*;
    use std::borrow::Cow;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .map(|token| token.unwrap().kind())
            .collect()
    }

    fn single(input: &str) -> Token<'_> {
        let token = lex(input, 0).unwrap();
        assert_eq!(lex(input, token.end()).unwrap().kind(), TokenKind::Eof);
        token
    }

    #[test]
    fn it_lexes_names_and_punctuators() {
        assert_eq!(
            kinds("query cat { name }"),
            [
                TokenKind::Name,
                TokenKind::Name,
                TokenKind::LCurly,
                TokenKind::Name,
                TokenKind::RCurly,
                TokenKind::Eof,
            ]
        );
        assert_eq!(single("_Type9").data(), "_Type9");
    }

    #[test]
    fn it_skips_ignored_source() {
        // Commas and the BOM are as insignificant as whitespace.
        let token = lex("\u{FEFF}  ,,\t\r\n , cat", 0).unwrap();
        assert_eq!(token.kind(), TokenKind::Name);
        assert_eq!(token.data(), "cat");
    }

    #[test]
    fn it_is_resumable_at_any_offset() {
        let source = "union U = A | B";
        let first = lex(source, 0).unwrap();
        assert_eq!(first.data(), "union");
        assert_eq!(lex(source, first.end()).unwrap().data(), "U");
        // Re-lexing the same offset yields the same token.
        assert_eq!(lex(source, first.end()).unwrap(), lex(source, 5).unwrap());
    }

    #[test]
    fn it_returns_eof_at_the_end_of_input() {
        let token = lex("cat", 3).unwrap();
        assert_eq!(token.kind(), TokenKind::Eof);
        assert_eq!(token.span().start, 3);
        assert_eq!(token.span().end, 3);
    }

    #[test]
    fn it_lexes_int_and_float_values() {
        assert_eq!(single("4").kind(), TokenKind::Int);
        assert_eq!(single("-4").kind(), TokenKind::Int);
        assert_eq!(single("0").kind(), TokenKind::Int);
        assert_eq!(single("9876").data(), "9876");
        assert_eq!(single("4.123").kind(), TokenKind::Float);
        assert_eq!(single("-4.123").kind(), TokenKind::Float);
        assert_eq!(single("0.123").kind(), TokenKind::Float);
        assert_eq!(single("123e4").kind(), TokenKind::Float);
        assert_eq!(single("123E4").kind(), TokenKind::Float);
        assert_eq!(single("123e-4").kind(), TokenKind::Float);
        assert_eq!(single("123e+4").kind(), TokenKind::Float);
        assert_eq!(single("-1.123e4567").data(), "-1.123e4567");
    }

    #[test]
    fn it_rejects_malformed_numbers() {
        for bad in ["01", "-", "1.", "1.e1", ".5", "1.2.3", "123abc", "1e", "1e+", "0b1"] {
            let err = Lexer::new(bad)
                .find_map(Result::err)
                .unwrap_or_else(|| panic!("expected `{bad}` to fail lexing"));
            assert_eq!(err.index(), 0, "error index for `{bad}`");
        }
    }

    #[test]
    fn it_lexes_strings_without_allocating() {
        let token = single(r#""simple string""#);
        assert_eq!(token.kind(), TokenKind::String);
        assert_eq!(token.data(), "simple string");
        assert!(matches!(token.value, Cow::Borrowed(_)));

        let token = single(r#""""#);
        assert_eq!(token.data(), "");
    }

    #[test]
    fn it_decodes_string_escapes() {
        let token = single(r#""escaped \n\r\b\t\f \"quote\" \\\/""#);
        assert_eq!(token.data(), "escaped \n\r\u{0008}\t\u{000C} \"quote\" \\/");
        assert!(matches!(token.value, Cow::Owned(_)));

        let token = single(r#""unicode \u1234\u5678\u90AB\uCDEF""#);
        assert_eq!(token.data(), "unicode \u{1234}\u{5678}\u{90AB}\u{CDEF}");

        let token = single(r#""unescaped unicode outside BMP 😀""#);
        assert_eq!(token.data(), "unescaped unicode outside BMP 😀");
    }

    #[test]
    fn it_decodes_surrogate_pairs() {
        let token = single(r#""cat \uD83D\uDC31""#);
        assert_eq!(token.data(), "cat \u{1F431}");
    }

    #[test]
    fn it_rejects_invalid_surrogate_pairs() {
        for bad in [
            r#""\uD83D""#,
            r#""\uD83D cat""#,
            r#""\uD83D@""#,
            r#""\uDC31""#,
        ] {
            assert!(lex(bad, 0).is_err(), "expected `{bad}` to fail lexing");
        }
    }

    #[test]
    fn it_rejects_malformed_strings() {
        assert!(lex(r#""unterminated"#, 0).is_err());
        assert!(lex("\"line\nbreak\"", 0).is_err());
        assert!(lex(r#""bad \x escape""#, 0).is_err());
        assert!(lex(r#""short \u12 escape""#, 0).is_err());
        assert!(lex("\"control \u{0007} char\"", 0).is_err());
    }

    #[test]
    fn it_lexes_block_strings() {
        let token = single(r#""""block string""""#);
        assert_eq!(token.kind(), TokenKind::BlockString);
        assert_eq!(token.data(), "block string");

        let token = single("\"\"\"\n    first\n    second\n\"\"\"");
        assert_eq!(token.data(), "first\nsecond");

        let token = single(r#""""escaped \""" quotes""""#);
        assert_eq!(token.data(), r#"escaped """ quotes"#);

        assert!(lex(r#""""unterminated"#, 0).is_err());
    }

    #[test]
    fn it_lexes_comments() {
        let token = lex("# a comment\ncat", 0).unwrap();
        assert_eq!(token.kind(), TokenKind::Comment);
        assert_eq!(token.data(), " a comment");
        assert_eq!(token.end(), "# a comment".len());

        let token = lex("#till the end", 0).unwrap();
        assert_eq!(token.data(), "till the end");
    }

    #[test]
    fn it_lexes_the_spread_operator() {
        assert_eq!(
            kinds("...cat"),
            [TokenKind::Spread, TokenKind::Name, TokenKind::Eof]
        );
        assert!(lex(".", 0).is_err());
        assert!(lex("..", 0).is_err());
    }

    #[test]
    fn it_rejects_unexpected_characters() {
        let err = lex("æ", 0).unwrap_err();
        assert_eq!(err.index(), 0);
        assert!(lex("%", 0).is_err());
    }

    #[test]
    fn it_lexes_a_query_into_a_token_stream() {
        use expect_test::expect;

        let mut stream = String::new();
        for token in Lexer::new("{ cat, lives }") {
            stream.push_str(&format!("{:?}\n", token.unwrap()));
        }
        expect![[r#"
            LCurly@0:1 "{"
            Name@2:5 "cat"
            Name@7:12 "lives"
            RCurly@13:14 "}"
            Eof@14:14 ""
        "#]]
        .assert_eq(&stream);
    }

    #[test]
    fn it_tracks_spans() {
        let source = "query cat";
        let token = lex(source, 5).unwrap();
        assert_eq!(token.span().start, 6);
        assert_eq!(token.span().end, 9);
    }
}
