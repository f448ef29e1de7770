use crate::ast::{Comment, ScalarTypeDefinition, ScalarTypeExtension};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{description, directive, name};
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#ScalarTypeDefinition
///
/// *ScalarTypeDefinition*:
///     Description? **scalar** Name Directives[Const]?
pub(crate) fn scalar_type_definition<'a>(p: &mut Parser<'a>) -> Result<ScalarTypeDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    let description = description::description(p)?;
    p.expect_keyword("scalar")?;
    let name = name::name(p)?;
    let directives = directive::directives_opt(p, Constness::Const)?;

    p.ascend();
    Ok(ScalarTypeDefinition {
        span: p.span_from(start),
        comment,
        description,
        name,
        directives,
    })
}

/// See: https://spec.graphql.org/October2021/#ScalarTypeExtension
///
/// *ScalarTypeExtension*:
///     **extend** **scalar** Name Directives[Const]
pub(crate) fn scalar_type_extension<'a>(
    p: &mut Parser<'a>,
    start: usize,
    comment: Option<Comment<'a>>,
) -> Result<ScalarTypeExtension<'a>, Error> {
    p.descend()?;

    p.expect_keyword("scalar")?;
    let name = name::name(p)?;
    if !p.at(TokenKind::At) {
        return Err(p.err_expected("Directives"));
    }
    let directives = directive::directives(p, Constness::Const)?;

    p.ascend();
    Ok(ScalarTypeExtension {
        span: p.span_from(start),
        comment,
        name,
        directives,
    })
}

#[cfg(test)]
mod test {
    use crate::ast;
    use crate::Parser;

    #[test]
    fn it_parses_a_scalar_type_definition() {
        let doc = Parser::new(r#""a date" scalar Date @tag(name: "temporal")"#)
            .parse()
            .unwrap();
        let ast::Definition::ScalarTypeDefinition(scalar) = &doc.definitions[0] else {
            panic!("expected a scalar type definition");
        };
        assert_eq!(scalar.name.value, "Date");
        assert_eq!(scalar.description.as_ref().unwrap().value, "a date");
        assert_eq!(scalar.directives.as_ref().unwrap().items.len(), 1);
    }

    #[test]
    fn it_parses_a_bare_scalar_type_definition() {
        let doc = Parser::new("scalar UUID").parse().unwrap();
        let ast::Definition::ScalarTypeDefinition(scalar) = &doc.definitions[0] else {
            panic!("expected a scalar type definition");
        };
        assert_eq!(scalar.directives, None);
    }

    #[test]
    fn it_requires_directives_on_a_scalar_extension() {
        let err = Parser::new("extend scalar UUID").parse().unwrap_err();
        assert_eq!(err.message(), "expected Directives, got EOF");
    }
}
