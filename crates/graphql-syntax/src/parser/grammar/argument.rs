use crate::ast::{Argument, Arguments};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::{self, Constness};
use crate::parser::grammar::name;
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#Argument
///
/// *Argument[Const]*:
///    Name **:** Value[?Const]
pub(crate) fn argument<'a>(p: &mut Parser<'a>, constness: Constness) -> Result<Argument<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    let name = name::name(p)?;
    p.expect(TokenKind::Colon)?;
    let value = value::value(p, constness)?;

    p.ascend();
    Ok(Argument {
        span: p.span_from(start),
        comment,
        name,
        value,
    })
}

/// See: https://spec.graphql.org/October2021/#Arguments
///
/// *Arguments[Const]*:
///    **(** Argument[?Const]+ **)**
pub(crate) fn arguments<'a>(p: &mut Parser<'a>, constness: Constness) -> Result<Arguments<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();
    p.expect(TokenKind::LParen)?;

    if !p.at(TokenKind::Name) {
        return Err(p.err_expected("an Argument"));
    }
    let mut items = Vec::new();
    while p.at(TokenKind::Name) {
        items.push(argument(p, constness)?);
    }
    p.expect(TokenKind::RParen)?;

    p.ascend();
    Ok(Arguments {
        span: p.span_from(start),
        comment,
        items,
    })
}
