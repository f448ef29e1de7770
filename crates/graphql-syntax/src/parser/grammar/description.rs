use crate::ast::Description;
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#Description
///
/// *Description*:
///     StringValue
///
/// Returns `None` when the current token is not a string.
pub(crate) fn description<'a>(p: &mut Parser<'a>) -> Result<Option<Description<'a>>, Error> {
    if !p.at(TokenKind::String) && !p.at(TokenKind::BlockString) {
        return Ok(None);
    }
    let token = p.take_current()?;
    Ok(Some(Description {
        span: p.span_from(token.start()),
        value: token.into_data(),
    }))
}
