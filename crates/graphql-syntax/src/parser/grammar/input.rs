use crate::ast::{
    ArgumentsDefinition, Comment, InputFieldsDefinition, InputObjectTypeDefinition,
    InputObjectTypeExtension, InputValueDefinition,
};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::{self, Constness};
use crate::parser::grammar::{description, directive, name, ty};
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#InputValueDefinition
///
/// *InputValueDefinition*:
///     Description? Name **:** Type DefaultValue? Directives[Const]?
pub(crate) fn input_value_definition<'a>(p: &mut Parser<'a>) -> Result<InputValueDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    let description = description::description(p)?;
    let name = name::name(p)?;
    p.expect(TokenKind::Colon)?;
    let ty = ty::ty(p)?;
    let default_value = if p.skip(TokenKind::Eq)? {
        Some(value::value(p, Constness::Const)?)
    } else {
        None
    };
    let directives = directive::directives_opt(p, Constness::Const)?;

    p.ascend();
    Ok(InputValueDefinition {
        span: p.span_from(start),
        comment,
        description,
        name,
        ty,
        default_value,
        directives,
    })
}

/// See: https://spec.graphql.org/October2021/#ArgumentsDefinition
///
/// *ArgumentsDefinition*:
///     **(** InputValueDefinition+ **)**
pub(crate) fn arguments_definition<'a>(p: &mut Parser<'a>) -> Result<ArgumentsDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();
    p.expect(TokenKind::LParen)?;

    if !at_input_value_definition(p) {
        return Err(p.err_expected("an Input Value Definition"));
    }
    let mut items = Vec::new();
    while at_input_value_definition(p) {
        items.push(input_value_definition(p)?);
    }
    p.expect(TokenKind::RParen)?;

    p.ascend();
    Ok(ArgumentsDefinition {
        span: p.span_from(start),
        comment,
        items,
    })
}

/// See: https://spec.graphql.org/October2021/#InputFieldsDefinition
///
/// *InputFieldsDefinition*:
///     **{** InputValueDefinition+ **}**
pub(crate) fn input_fields_definition<'a>(p: &mut Parser<'a>) -> Result<InputFieldsDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();
    p.expect(TokenKind::LCurly)?;

    if !at_input_value_definition(p) {
        return Err(p.err_expected("an Input Value Definition"));
    }
    let mut items = Vec::new();
    while at_input_value_definition(p) {
        items.push(input_value_definition(p)?);
    }
    p.expect(TokenKind::RCurly)?;

    p.ascend();
    Ok(InputFieldsDefinition {
        span: p.span_from(start),
        comment,
        items,
    })
}

fn at_input_value_definition(p: &Parser<'_>) -> bool {
    matches!(
        p.current().kind(),
        TokenKind::Name | TokenKind::String | TokenKind::BlockString
    )
}

/// See: https://spec.graphql.org/October2021/#InputObjectTypeDefinition
///
/// *InputObjectTypeDefinition*:
///     Description? **input** Name Directives[Const]? InputFieldsDefinition?
pub(crate) fn input_object_type_definition<'a>(
    p: &mut Parser<'a>,
) -> Result<InputObjectTypeDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    let description = description::description(p)?;
    p.expect_keyword("input")?;
    let name = name::name(p)?;
    let directives = directive::directives_opt(p, Constness::Const)?;
    let fields = if p.at(TokenKind::LCurly) {
        Some(input_fields_definition(p)?)
    } else {
        None
    };

    p.ascend();
    Ok(InputObjectTypeDefinition {
        span: p.span_from(start),
        comment,
        description,
        name,
        directives,
        fields,
    })
}

/// See: https://spec.graphql.org/October2021/#InputObjectTypeExtension
///
/// *InputObjectTypeExtension*:
///     **extend** **input** Name Directives[Const]? InputFieldsDefinition
///     **extend** **input** Name Directives[Const]
pub(crate) fn input_object_type_extension<'a>(
    p: &mut Parser<'a>,
    start: usize,
    comment: Option<Comment<'a>>,
) -> Result<InputObjectTypeExtension<'a>, Error> {
    p.descend()?;

    p.expect_keyword("input")?;
    let name = name::name(p)?;
    let directives = directive::directives_opt(p, Constness::Const)?;
    let fields = if p.at(TokenKind::LCurly) {
        Some(input_fields_definition(p)?)
    } else {
        None
    };

    if directives.is_none() && fields.is_none() {
        return Err(p.err_expected("Directives or an Input Fields Definition"));
    }

    p.ascend();
    Ok(InputObjectTypeExtension {
        span: p.span_from(start),
        comment,
        name,
        directives,
        fields,
    })
}

#[cfg(test)]
mod test {
    use crate::ast;
    use crate::Parser;

    #[test]
    fn it_parses_an_input_object_type_definition() {
        let doc = Parser::new(
            r#"
input Point2D {
  "horizontal"
  x: Float = 0.0
  y: Float @lenient
}
"#,
        )
        .parse()
        .unwrap();
        let ast::Definition::InputObjectTypeDefinition(input) = &doc.definitions[0] else {
            panic!("expected an input object type definition");
        };
        assert_eq!(input.name.value, "Point2D");
        let fields = input.fields.as_ref().unwrap();
        assert_eq!(fields.items.len(), 2);
        assert_eq!(fields.items[0].name.value, "x");
        assert_eq!(
            fields.items[0].description.as_ref().unwrap().value,
            "horizontal"
        );
        let ast::Value::Float(default) = fields.items[0].default_value.as_ref().unwrap() else {
            panic!("expected a Float Value default");
        };
        assert_eq!(default.value, "0.0");
        assert!(fields.items[1].directives.is_some());
    }

    #[test]
    fn it_parses_an_input_extension_with_directives_only() {
        let doc = Parser::new(r#"extend input First @include(if: true)"#).parse().unwrap();
        let ast::Definition::InputObjectTypeExtension(extension) = &doc.definitions[0] else {
            panic!("expected an input object type extension");
        };
        assert_eq!(extension.name.value, "First");
        assert!(extension.directives.is_some());
        assert_eq!(extension.fields, None);
    }

    #[test]
    fn it_rejects_an_input_extension_without_clauses() {
        let err = Parser::new("extend input First").parse().unwrap_err();
        assert_eq!(
            err.message(),
            "expected Directives or an Input Fields Definition, got EOF"
        );
    }

    #[test]
    fn it_rejects_an_empty_input_fields_definition() {
        let err = Parser::new("input Point2D { }").parse().unwrap_err();
        assert_eq!(err.message(), "expected an Input Value Definition, got `}`");
    }
}
