use crate::ast::{ListType, NamedType, NonNullType, Type};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::name;
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#Type
///
/// *Type*:
///     NamedType
///     ListType
///         **[** Type **]**
///     NonNullType
///         NamedType **!**
///         ListType **!**
///
/// A trailing `!` wraps whatever was parsed in a `NonNullType`; since the
/// wrapping happens at most once per level, a non-null type can never
/// directly contain another one.
pub(crate) fn ty<'a>(p: &mut Parser<'a>) -> Result<Type<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    let inner = match p.current().kind() {
        TokenKind::LBracket => {
            p.advance()?;
            let item = ty(p)?;
            p.expect(TokenKind::RBracket)?;
            Type::List(ListType {
                span: p.span_from(start),
                comment,
                ty: Box::new(item),
            })
        }
        TokenKind::Name => {
            let name = name::name(p)?;
            Type::Named(NamedType {
                span: p.span_from(start),
                comment,
                name,
            })
        }
        _ => return Err(p.err_expected("a Type")),
    };

    let result = if p.skip(TokenKind::Bang)? {
        Type::NonNull(NonNullType {
            span: p.span_from(start),
            comment: None,
            ty: Box::new(inner),
        })
    } else {
        inner
    };

    p.ascend();
    Ok(result)
}

/// See: https://spec.graphql.org/October2021/#NamedType
///
/// *NamedType*:
///     Name
pub(crate) fn named_type<'a>(p: &mut Parser<'a>) -> Result<NamedType<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();
    let name = name::name(p)?;
    p.ascend();
    Ok(NamedType {
        span: p.span_from(start),
        comment,
        name,
    })
}
