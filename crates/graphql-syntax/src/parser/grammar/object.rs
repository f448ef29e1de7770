use crate::ast::{Comment, ImplementsInterfaces, ObjectTypeDefinition, ObjectTypeExtension};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{description, directive, field, name, ty};
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#ObjectTypeDefinition
///
/// *ObjectTypeDefinition*:
///     Description? **type** Name ImplementsInterfaces? Directives[Const]? FieldsDefinition?
pub(crate) fn object_type_definition<'a>(p: &mut Parser<'a>) -> Result<ObjectTypeDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    let description = description::description(p)?;
    p.expect_keyword("type")?;
    let name = name::name(p)?;
    let implements_interfaces = implements_interfaces_opt(p)?;
    let directives = directive::directives_opt(p, Constness::Const)?;
    let fields = if p.at(TokenKind::LCurly) {
        Some(field::fields_definition(p)?)
    } else {
        None
    };

    p.ascend();
    Ok(ObjectTypeDefinition {
        span: p.span_from(start),
        comment,
        description,
        name,
        implements_interfaces,
        directives,
        fields,
    })
}

/// See: https://spec.graphql.org/October2021/#ImplementsInterfaces
///
/// *ImplementsInterfaces*:
///     **implements** **&**? NamedType (**&** NamedType)*
pub(crate) fn implements_interfaces<'a>(p: &mut Parser<'a>) -> Result<ImplementsInterfaces<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    p.expect_keyword("implements")?;
    p.skip(TokenKind::Amp)?;
    let mut items = vec![ty::named_type(p)?];
    while p.skip(TokenKind::Amp)? {
        items.push(ty::named_type(p)?);
    }

    p.ascend();
    Ok(ImplementsInterfaces {
        span: p.span_from(start),
        comment,
        items,
    })
}

/// Parse an implements-interfaces clause when the keyword is next.
pub(crate) fn implements_interfaces_opt<'a>(
    p: &mut Parser<'a>,
) -> Result<Option<ImplementsInterfaces<'a>>, Error> {
    if p.at_keyword("implements") {
        implements_interfaces(p).map(Some)
    } else {
        Ok(None)
    }
}

/// See: https://spec.graphql.org/October2021/#ObjectTypeExtension
///
/// *ObjectTypeExtension*:
///     **extend** **type** Name ImplementsInterfaces? Directives[Const]? FieldsDefinition
///     **extend** **type** Name ImplementsInterfaces? Directives[Const]
///     **extend** **type** Name ImplementsInterfaces
pub(crate) fn object_type_extension<'a>(
    p: &mut Parser<'a>,
    start: usize,
    comment: Option<Comment<'a>>,
) -> Result<ObjectTypeExtension<'a>, Error> {
    p.descend()?;

    p.expect_keyword("type")?;
    let name = name::name(p)?;
    let implements_interfaces = implements_interfaces_opt(p)?;
    let directives = directive::directives_opt(p, Constness::Const)?;
    let fields = if p.at(TokenKind::LCurly) {
        Some(field::fields_definition(p)?)
    } else {
        None
    };

    if implements_interfaces.is_none() && directives.is_none() && fields.is_none() {
        return Err(p.err_expected(
            "Implements Interfaces, Directives or a Fields Definition",
        ));
    }

    p.ascend();
    Ok(ObjectTypeExtension {
        span: p.span_from(start),
        comment,
        name,
        implements_interfaces,
        directives,
        fields,
    })
}
