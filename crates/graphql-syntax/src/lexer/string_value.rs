//! Scanning and decoding of string and block-string values.

use std::borrow::Cow;

use crate::error::Error;
use crate::lexer::cursor::Cursor;
use crate::lexer::{Token, TokenKind};
use crate::location::Span;

const ESCAPED_TRIPLE_QUOTE: &str = r#"\""""#;
const TRIPLE_QUOTE: &str = r#"""""#;

/// Scan a string or block string value. The opening `"` has already been
/// consumed; `start` is its offset.
pub(crate) fn scan<'a>(
    source: &'a str,
    cursor: &mut Cursor<'a>,
    start: usize,
) -> Result<Token<'a>, Error> {
    if cursor.eat('"') {
        if cursor.eat('"') {
            return scan_block_string(source, cursor, start);
        }
        // An empty string, `""`.
        return Ok(Token::new(
            TokenKind::String,
            Cow::Borrowed(""),
            start,
            cursor.offset(),
        ));
    }
    scan_string(source, cursor, start)
}

/// *StringValue*: `"` StringCharacter* `"` on a single line.
///
/// The token value is the decoded string; decoding only allocates when the
/// literal contains at least one escape sequence.
fn scan_string<'a>(
    source: &'a str,
    cursor: &mut Cursor<'a>,
    start: usize,
) -> Result<Token<'a>, Error> {
    let content_start = cursor.offset();
    let mut decoded: Option<String> = None;

    loop {
        let at = cursor.offset();
        match cursor.bump() {
            None | Some('\n') | Some('\r') => {
                return Err(Error::syntax(
                    "unterminated string value",
                    source[start..at].to_string(),
                    start,
                ));
            }
            Some('"') => {
                let value = match decoded {
                    Some(owned) => Cow::Owned(owned),
                    None => Cow::Borrowed(&source[content_start..at]),
                };
                return Ok(Token::new(TokenKind::String, value, start, cursor.offset()));
            }
            Some('\\') => {
                let buf = decoded.get_or_insert_with(|| source[content_start..at].to_string());
                scan_escape(cursor, buf, at)?;
            }
            Some(c) if is_forbidden_in_string(c) => {
                return Err(Error::syntax(
                    format!("unexpected character {c:?} within a string value"),
                    c.to_string(),
                    at,
                ));
            }
            Some(c) => {
                if let Some(buf) = decoded.as_mut() {
                    buf.push(c);
                }
            }
        }
    }
}

/// StringCharacter excludes control characters other than horizontal tab.
fn is_forbidden_in_string(c: char) -> bool {
    c.is_control() && c != '\t'
}

/// Decode one escape sequence after a `\` at `escape_start` and push the
/// result onto `buf`.
fn scan_escape(cursor: &mut Cursor<'_>, buf: &mut String, escape_start: usize) -> Result<(), Error> {
    match cursor.bump() {
        Some('"') => buf.push('"'),
        Some('\\') => buf.push('\\'),
        Some('/') => buf.push('/'),
        Some('b') => buf.push('\u{0008}'),
        Some('f') => buf.push('\u{000C}'),
        Some('n') => buf.push('\n'),
        Some('r') => buf.push('\r'),
        Some('t') => buf.push('\t'),
        Some('u') => buf.push(scan_unicode_escape(cursor, escape_start)?),
        Some(c) => {
            return Err(Error::syntax(
                format!("invalid escape sequence `\\{c}`"),
                format!("\\{c}"),
                escape_start,
            ));
        }
        None => {
            return Err(Error::syntax(
                "unterminated string value",
                "\\".to_string(),
                escape_start,
            ));
        }
    }
    Ok(())
}

/// `\uXXXX`, possibly the leading half of a surrogate pair. A leading
/// surrogate must be followed by a `\u` escape of a trailing surrogate; any
/// other combination is an error.
fn scan_unicode_escape(cursor: &mut Cursor<'_>, escape_start: usize) -> Result<char, Error> {
    let unit = hex4(cursor, escape_start)?;

    if let 0xDC00..=0xDFFF = unit {
        return Err(Error::syntax(
            "invalid surrogate pair: unexpected trailing surrogate",
            format!("\\u{unit:04X}"),
            escape_start,
        ));
    }

    if let 0xD800..=0xDBFF = unit {
        if !(cursor.eat('\\') && cursor.eat('u')) {
            return Err(Error::syntax(
                "invalid surrogate pair: a leading surrogate must be followed by `\\u`",
                format!("\\u{unit:04X}"),
                escape_start,
            ));
        }
        let trailing = hex4(cursor, escape_start)?;
        if !matches!(trailing, 0xDC00..=0xDFFF) {
            return Err(Error::syntax(
                "invalid surrogate pair: expected a trailing surrogate",
                format!("\\u{unit:04X}\\u{trailing:04X}"),
                escape_start,
            ));
        }
        let code_point = 0x10000 + ((unit - 0xD800) << 10) + (trailing - 0xDC00);
        // Pairing a leading with a trailing surrogate always lands in
        // 0x10000..=0x10FFFF.
        return Ok(char::from_u32(code_point).expect("paired surrogates form a scalar value"));
    }

    // Surrogates were rejected above, and no other value below 0x10000 fails
    // the conversion.
    Ok(char::from_u32(unit).expect("non-surrogate BMP value is a scalar value"))
}

/// The four hex digits of an `\uXXXX` escape.
fn hex4(cursor: &mut Cursor<'_>, escape_start: usize) -> Result<u32, Error> {
    let mut value = 0;
    for _ in 0..4 {
        let digit = cursor
            .bump()
            .and_then(|c| c.to_digit(16))
            .ok_or_else(|| {
                Error::syntax(
                    "invalid unicode escape sequence: expected four hex digits",
                    cursor.slice_from(escape_start).to_string(),
                    escape_start,
                )
            })?;
        value = (value << 4) + digit;
    }
    Ok(value)
}

/// *BlockString*: `"""` BlockStringCharacter* `"""`. The opening `"""` has
/// been consumed; `start` is the offset of its first quote.
fn scan_block_string<'a>(
    source: &'a str,
    cursor: &mut Cursor<'a>,
    start: usize,
) -> Result<Token<'a>, Error> {
    let content_start = cursor.offset();

    loop {
        let at = cursor.offset();
        match cursor.bump() {
            None => {
                return Err(Error::syntax(
                    "unterminated block string value",
                    source[start..at].to_string(),
                    start,
                ));
            }
            Some('"') => {
                if cursor.rest().starts_with("\"\"") {
                    cursor.bump();
                    cursor.bump();
                    let raw = &source[content_start..at];
                    return Ok(Token::new(
                        TokenKind::BlockString,
                        Cow::Owned(block_string_value(raw)),
                        start,
                        cursor.offset(),
                    ));
                }
            }
            Some('\\') => {
                // `\"""` stays raw here and is rewritten by
                // `block_string_value`; skipping it keeps the terminator
                // check from firing on its quotes.
                if cursor.rest().starts_with(TRIPLE_QUOTE) {
                    cursor.bump();
                    cursor.bump();
                    cursor.bump();
                }
            }
            Some(c) if c.is_control() && !matches!(c, '\t' | '\n' | '\r') => {
                return Err(Error::syntax(
                    format!("unexpected character {c:?} within a block string value"),
                    c.to_string(),
                    at,
                ));
            }
            Some(_) => {}
        }
    }
}

/// The block string value algorithm: normalize line terminators to `\n`,
/// strip the shared indent from every line after the first, drop blank lines
/// at either edge, and rewrite `\"""` to `"""`.
///
/// Spec: https://spec.graphql.org/October2021/#BlockStringValue()
pub(crate) fn block_string_value(raw: &str) -> String {
    let lines = line_spans(raw);

    // The shared indent is taken over the lines after the first, skipping
    // blank ones; the first line begins right after `"""` and never counts.
    let mut indent = usize::MAX;
    for &span in &lines[1..] {
        let line = &raw[span.start..span.end];
        let leading = indent_of(line);
        if leading < line.len() {
            indent = indent.min(leading);
        }
    }
    if indent == usize::MAX {
        indent = 0;
    }

    let dedented = |index: usize| {
        let span = lines[index];
        let line = &raw[span.start..span.end];
        if index == 0 {
            line
        } else {
            // `indent` only ever counts one-byte whitespace, so slicing by it
            // cannot split a character.
            &line[indent.min(line.len())..]
        }
    };

    let Some(first) = (0..lines.len()).find(|&index| !is_blank(dedented(index))) else {
        return String::new();
    };
    let last = (0..lines.len())
        .rfind(|&index| !is_blank(dedented(index)))
        .unwrap_or(first);

    let mut value = String::with_capacity(raw.len());
    for index in first..=last {
        if index > first {
            value.push('\n');
        }
        push_unescaped(dedented(index), &mut value);
    }
    value
}

/// Byte spans of the lines of `raw`; `\r\n`, `\n`, and `\r` each end a line.
/// The spans exclude their terminators, and an empty input is one empty line.
fn line_spans(raw: &str) -> Vec<Span> {
    let mut cursor = Cursor::new(raw, 0);
    let mut spans = Vec::new();
    let mut line_start = 0;
    while let Some(c) = cursor.bump() {
        if matches!(c, '\n' | '\r') {
            spans.push(Span::new(line_start, cursor.offset() - 1));
            if c == '\r' {
                cursor.eat('\n');
            }
            line_start = cursor.offset();
        }
    }
    spans.push(Span::new(line_start, raw.len()));
    spans
}

/// Leading count of WhiteSpace (horizontal tab or space) bytes in a line.
fn indent_of(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ' || b == b'\t').count()
}

fn is_blank(line: &str) -> bool {
    indent_of(line) == line.len()
}

/// Append `line` to `out`, rewriting the `\"""` escape to `"""`.
fn push_unescaped(line: &str, out: &mut String) {
    let mut rest = line;
    while let Some(found) = rest.find(ESCAPED_TRIPLE_QUOTE) {
        out.push_str(&rest[..found]);
        out.push_str(TRIPLE_QUOTE);
        rest = &rest[found + ESCAPED_TRIPLE_QUOTE.len()..];
    }
    out.push_str(rest);
}
