use crate::ast::{Comment, EnumTypeDefinition, EnumTypeExtension, EnumValueDefinition, EnumValuesDefinition};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::{self, Constness};
use crate::parser::grammar::{description, directive, name};
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#EnumTypeDefinition
///
/// *EnumTypeDefinition*:
///     Description? **enum** Name Directives[Const]? EnumValuesDefinition?
pub(crate) fn enum_type_definition<'a>(p: &mut Parser<'a>) -> Result<EnumTypeDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    let description = description::description(p)?;
    p.expect_keyword("enum")?;
    let name = name::name(p)?;
    let directives = directive::directives_opt(p, Constness::Const)?;
    let values = if p.at(TokenKind::LCurly) {
        Some(enum_values_definition(p)?)
    } else {
        None
    };

    p.ascend();
    Ok(EnumTypeDefinition {
        span: p.span_from(start),
        comment,
        description,
        name,
        directives,
        values,
    })
}

/// See: https://spec.graphql.org/October2021/#EnumValuesDefinition
///
/// *EnumValuesDefinition*:
///     **{** EnumValueDefinition+ **}**
pub(crate) fn enum_values_definition<'a>(p: &mut Parser<'a>) -> Result<EnumValuesDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();
    p.expect(TokenKind::LCurly)?;

    if !at_enum_value_definition(p) {
        return Err(p.err_expected("an Enum Value Definition"));
    }
    let mut items = Vec::new();
    while at_enum_value_definition(p) {
        items.push(enum_value_definition(p)?);
    }
    p.expect(TokenKind::RCurly)?;

    p.ascend();
    Ok(EnumValuesDefinition {
        span: p.span_from(start),
        comment,
        items,
    })
}

/// See: https://spec.graphql.org/October2021/#EnumValueDefinition
///
/// *EnumValueDefinition*:
///     Description? EnumValue Directives[Const]?
pub(crate) fn enum_value_definition<'a>(p: &mut Parser<'a>) -> Result<EnumValueDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    let description = description::description(p)?;
    if p.at(TokenKind::Name) && matches!(p.current_text(), "true" | "false" | "null") {
        return Err(p.err_at_current(format!("Enum Value cannot be `{}`", p.current_text())));
    }
    let value = value::enum_value(p)?;
    let directives = directive::directives_opt(p, Constness::Const)?;

    p.ascend();
    Ok(EnumValueDefinition {
        span: p.span_from(start),
        comment,
        description,
        value,
        directives,
    })
}

fn at_enum_value_definition(p: &Parser<'_>) -> bool {
    matches!(
        p.current().kind(),
        TokenKind::Name | TokenKind::String | TokenKind::BlockString
    )
}

/// See: https://spec.graphql.org/October2021/#EnumTypeExtension
///
/// *EnumTypeExtension*:
///     **extend** **enum** Name Directives[Const]? EnumValuesDefinition
///     **extend** **enum** Name Directives[Const]
pub(crate) fn enum_type_extension<'a>(
    p: &mut Parser<'a>,
    start: usize,
    comment: Option<Comment<'a>>,
) -> Result<EnumTypeExtension<'a>, Error> {
    p.descend()?;

    p.expect_keyword("enum")?;
    let name = name::name(p)?;
    let directives = directive::directives_opt(p, Constness::Const)?;
    let values = if p.at(TokenKind::LCurly) {
        Some(enum_values_definition(p)?)
    } else {
        None
    };

    if directives.is_none() && values.is_none() {
        return Err(p.err_expected("Directives or an Enum Values Definition"));
    }

    p.ascend();
    Ok(EnumTypeExtension {
        span: p.span_from(start),
        comment,
        name,
        directives,
        values,
    })
}
