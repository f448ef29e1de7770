use crate::ast::Name;
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#Name
///
/// *Name*:
///     `[_A-Za-z][_0-9A-Za-z]*`
pub(crate) fn name<'a>(p: &mut Parser<'a>) -> Result<Name<'a>, Error> {
    p.descend()?;
    let token = p.expect(TokenKind::Name)?;
    p.ascend();
    Ok(Name {
        span: p.span_from(token.start()),
        value: p.text_of(&token),
    })
}
