use crate::ast::{Directive, DirectiveDefinition, DirectiveLocation, DirectiveLocations, Directives};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{argument, description, input, name};
use crate::parser::Parser;

const LOCATIONS: &[&str] = &[
    "QUERY",
    "MUTATION",
    "SUBSCRIPTION",
    "FIELD",
    "FRAGMENT_DEFINITION",
    "FRAGMENT_SPREAD",
    "INLINE_FRAGMENT",
    "VARIABLE_DEFINITION",
    "SCHEMA",
    "SCALAR",
    "OBJECT",
    "FIELD_DEFINITION",
    "ARGUMENT_DEFINITION",
    "INTERFACE",
    "UNION",
    "ENUM",
    "ENUM_VALUE",
    "INPUT_OBJECT",
    "INPUT_FIELD_DEFINITION",
];

/// See: https://spec.graphql.org/October2021/#Directive
///
/// *Directive[Const]*:
///     **@** Name Arguments[?Const]?
pub(crate) fn directive<'a>(p: &mut Parser<'a>, constness: Constness) -> Result<Directive<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    p.expect(TokenKind::At)?;
    let name = name::name(p)?;
    let arguments = if p.at(TokenKind::LParen) {
        Some(argument::arguments(p, constness)?)
    } else {
        None
    };

    p.ascend();
    Ok(Directive {
        span: p.span_from(start),
        comment,
        name,
        arguments,
    })
}

/// See: https://spec.graphql.org/October2021/#Directives
///
/// *Directives[Const]*:
///     Directive[?Const]+
pub(crate) fn directives<'a>(p: &mut Parser<'a>, constness: Constness) -> Result<Directives<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    let mut items = vec![directive(p, constness)?];
    while p.at(TokenKind::At) {
        items.push(directive(p, constness)?);
    }

    p.ascend();
    Ok(Directives {
        span: p.span_from(start),
        comment,
        items,
    })
}

/// Parse directives when an `@` is next, `None` otherwise.
pub(crate) fn directives_opt<'a>(
    p: &mut Parser<'a>,
    constness: Constness,
) -> Result<Option<Directives<'a>>, Error> {
    if p.at(TokenKind::At) {
        directives(p, constness).map(Some)
    } else {
        Ok(None)
    }
}

/// See: https://spec.graphql.org/October2021/#DirectiveDefinition
///
/// *DirectiveDefinition*:
///     Description? **directive @** Name ArgumentsDefinition? **repeatable**? **on** DirectiveLocations
pub(crate) fn directive_definition<'a>(p: &mut Parser<'a>) -> Result<DirectiveDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    let description = description::description(p)?;
    p.expect_keyword("directive")?;
    p.expect(TokenKind::At)?;
    let name = name::name(p)?;
    let arguments = if p.at(TokenKind::LParen) {
        Some(input::arguments_definition(p)?)
    } else {
        None
    };
    let repeatable = if p.at_keyword("repeatable") {
        p.advance()?;
        true
    } else {
        false
    };
    p.expect_keyword("on")?;
    let locations = directive_locations(p)?;

    p.ascend();
    Ok(DirectiveDefinition {
        span: p.span_from(start),
        comment,
        description,
        name,
        arguments,
        repeatable,
        locations,
    })
}

/// See: https://spec.graphql.org/October2021/#DirectiveLocations
///
/// *DirectiveLocations*:
///     **|**? DirectiveLocation (**|** DirectiveLocation)*
fn directive_locations(p: &mut Parser<'_>) -> Result<DirectiveLocations, Error> {
    p.descend()?;
    let start = p.start();

    p.skip(TokenKind::Pipe)?;
    let mut items = vec![directive_location(p)?];
    while p.skip(TokenKind::Pipe)? {
        items.push(directive_location(p)?);
    }

    p.ascend();
    Ok(DirectiveLocations {
        span: p.span_from(start),
        items,
    })
}

fn directive_location(p: &mut Parser<'_>) -> Result<DirectiveLocation, Error> {
    let token = p.expect_one_of(LOCATIONS)?;
    let text = p.text_of(&token);
    DirectiveLocation::from_name(text)
        .ok_or_else(|| Error::syntax("expected a Directive Location", text.to_string(), token.start()))
}

#[cfg(test)]
mod tests {
    use crate::ast::{self, DirectiveLocation};
    use crate::Parser;

    fn directive_definition<'v, 'a>(
        doc: &'v ast::Document<'a>,
    ) -> &'v ast::DirectiveDefinition<'a> {
        let ast::Definition::DirectiveDefinition(definition) = &doc.definitions[0] else {
            panic!("expected a directive definition");
        };
        definition
    }

    #[test]
    fn it_parses_a_directive_definition_with_arguments() {
        let doc = Parser::new(
            "directive @example(isTreat: Boolean, treatKind: String) repeatable on FIELD | MUTATION",
        )
        .parse()
        .unwrap();
        let definition = directive_definition(&doc);
        assert_eq!(definition.name.value, "example");
        assert!(definition.repeatable);
        assert_eq!(definition.arguments.as_ref().unwrap().items.len(), 2);
        assert_eq!(
            definition.locations.items,
            [DirectiveLocation::Field, DirectiveLocation::Mutation]
        );
    }

    #[test]
    fn it_parses_multiline_directive_locations_with_a_leading_pipe() {
        let doc = Parser::new(
            "directive @example on
| FIELD
| FRAGMENT_SPREAD
| INLINE_FRAGMENT",
        )
        .parse()
        .unwrap();
        let definition = directive_definition(&doc);
        assert!(!definition.repeatable);
        assert_eq!(
            definition.locations.items,
            [
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ]
        );
    }

    #[test]
    fn it_rejects_malformed_directive_locations() {
        for source in [
            "directive @example on FIELD |",
            "directive @example on || FIELD",
            "directive @example on SOMEWHERE",
            "directive @example on",
        ] {
            let err = Parser::new(source).parse().unwrap_err();
            assert!(
                err.message().starts_with("expected one of"),
                "for source {source:?}: {}",
                err.message()
            );
        }
    }

    #[test]
    fn it_rejects_repeatable_after_on() {
        let err = Parser::new("directive @example on repeatable FIELD")
            .parse()
            .unwrap_err();
        assert!(err.message().starts_with("expected one of"));
    }

    #[test]
    fn it_parses_directive_applications_with_const_arguments() {
        let doc = Parser::new(r#"scalar UUID @specifiedBy(url: "https://tools.ietf.org/html/rfc4122")"#)
            .parse()
            .unwrap();
        let ast::Definition::ScalarTypeDefinition(scalar) = &doc.definitions[0] else {
            panic!("expected a scalar type definition");
        };
        let directive = &scalar.directives.as_ref().unwrap().items[0];
        assert_eq!(directive.name.value, "specifiedBy");
        let argument = &directive.arguments.as_ref().unwrap().items[0];
        let ast::Value::String(url) = &argument.value else {
            panic!("expected a String Value");
        };
        assert_eq!(url.value, "https://tools.ietf.org/html/rfc4122");
    }

    #[test]
    fn it_rejects_variables_in_const_directive_arguments() {
        let err = Parser::new("scalar UUID @tag(name: $var)").parse().unwrap_err();
        assert_eq!(err.message(), "unexpected variable in a constant value");
    }
}
