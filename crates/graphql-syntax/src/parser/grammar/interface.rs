use crate::ast::{Comment, InterfaceTypeDefinition, InterfaceTypeExtension};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{description, directive, field, name, object};
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#InterfaceTypeDefinition
///
/// *InterfaceTypeDefinition*:
///     Description? **interface** Name ImplementsInterfaces? Directives[Const]? FieldsDefinition?
pub(crate) fn interface_type_definition<'a>(
    p: &mut Parser<'a>,
) -> Result<InterfaceTypeDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    let description = description::description(p)?;
    p.expect_keyword("interface")?;
    let name = name::name(p)?;
    let implements_interfaces = object::implements_interfaces_opt(p)?;
    let directives = directive::directives_opt(p, Constness::Const)?;
    let fields = if p.at(TokenKind::LCurly) {
        Some(field::fields_definition(p)?)
    } else {
        None
    };

    p.ascend();
    Ok(InterfaceTypeDefinition {
        span: p.span_from(start),
        comment,
        description,
        name,
        implements_interfaces,
        directives,
        fields,
    })
}

/// See: https://spec.graphql.org/October2021/#InterfaceTypeExtension
///
/// *InterfaceTypeExtension*:
///     **extend** **interface** Name ImplementsInterfaces? Directives[Const]? FieldsDefinition
///     **extend** **interface** Name ImplementsInterfaces? Directives[Const]
///     **extend** **interface** Name ImplementsInterfaces
pub(crate) fn interface_type_extension<'a>(
    p: &mut Parser<'a>,
    start: usize,
    comment: Option<Comment<'a>>,
) -> Result<InterfaceTypeExtension<'a>, Error> {
    p.descend()?;

    p.expect_keyword("interface")?;
    let name = name::name(p)?;
    let implements_interfaces = object::implements_interfaces_opt(p)?;
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
    Ok(InterfaceTypeExtension {
        span: p.span_from(start),
        comment,
        name,
        implements_interfaces,
        directives,
        fields,
    })
}
