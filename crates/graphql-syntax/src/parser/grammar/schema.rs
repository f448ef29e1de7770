use crate::ast::{Comment, RootOperationTypeDefinition, SchemaDefinition, SchemaExtension};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{description, directive, operation, ty};
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#SchemaDefinition
///
/// *SchemaDefinition*:
///     Description? **schema** Directives[Const]? **{** RootOperationTypeDefinition+ **}**
pub(crate) fn schema_definition<'a>(p: &mut Parser<'a>) -> Result<SchemaDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    let description = description::description(p)?;
    p.expect_keyword("schema")?;
    let directives = directive::directives_opt(p, Constness::Const)?;
    let root_operation_types = root_operation_type_block(p)?;

    p.ascend();
    Ok(SchemaDefinition {
        span: p.span_from(start),
        comment,
        description,
        directives,
        root_operation_types,
    })
}

/// See: https://spec.graphql.org/October2021/#SchemaExtension
///
/// *SchemaExtension*:
///     **extend** **schema** Directives[Const]? **{** RootOperationTypeDefinition+ **}**
///     **extend** **schema** Directives[Const]
pub(crate) fn schema_extension<'a>(
    p: &mut Parser<'a>,
    start: usize,
    comment: Option<Comment<'a>>,
) -> Result<SchemaExtension<'a>, Error> {
    p.descend()?;

    p.expect_keyword("schema")?;
    let directives = directive::directives_opt(p, Constness::Const)?;
    let root_operation_types = if p.at(TokenKind::LCurly) {
        root_operation_type_block(p)?
    } else {
        if directives.is_none() {
            return Err(p.err_expected("Directives or a Root Operation Type Definition block"));
        }
        Vec::new()
    };

    p.ascend();
    Ok(SchemaExtension {
        span: p.span_from(start),
        comment,
        directives,
        root_operation_types,
    })
}

/// `{ RootOperationTypeDefinition+ }`
fn root_operation_type_block<'a>(
    p: &mut Parser<'a>,
) -> Result<Vec<RootOperationTypeDefinition<'a>>, Error> {
    p.expect(TokenKind::LCurly)?;
    if !p.at(TokenKind::Name) {
        return Err(p.err_expected("a Root Operation Type Definition"));
    }
    let mut items = Vec::new();
    while p.at(TokenKind::Name) {
        items.push(root_operation_type_definition(p)?);
    }
    p.expect(TokenKind::RCurly)?;
    Ok(items)
}

/// RootOperationTypeDefinition is used in a SchemaDefinition. Not to be
/// confused with OperationDefinition.
///
/// See: https://spec.graphql.org/October2021/#RootOperationTypeDefinition
///
/// *RootOperationTypeDefinition*:
///    OperationType **:** NamedType
fn root_operation_type_definition<'a>(
    p: &mut Parser<'a>,
) -> Result<RootOperationTypeDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    let operation = operation::operation_type(p)?;
    p.expect(TokenKind::Colon)?;
    let named_type = ty::named_type(p)?;

    p.ascend();
    Ok(RootOperationTypeDefinition {
        span: p.span_from(start),
        comment,
        operation,
        named_type,
    })
}

#[cfg(test)]
mod test {
    use crate::ast::{self, OperationType};
    use crate::Parser;

    #[test]
    fn it_parses_a_schema_definition_with_directives() {
        let doc = Parser::new("schema @x { query: Q mutation: M }").parse().unwrap();
        let ast::Definition::SchemaDefinition(schema) = &doc.definitions[0] else {
            panic!("expected a schema definition");
        };
        assert_eq!(schema.directives.as_ref().unwrap().items[0].name.value, "x");
        assert_eq!(schema.root_operation_types.len(), 2);
        assert_eq!(schema.root_operation_types[0].operation, OperationType::Query);
        assert_eq!(schema.root_operation_types[0].named_type.name.value, "Q");
        assert_eq!(
            schema.root_operation_types[1].operation,
            OperationType::Mutation
        );
        assert_eq!(schema.root_operation_types[1].named_type.name.value, "M");
    }

    #[test]
    fn it_parses_a_described_schema_definition() {
        let doc = Parser::new(r#""the schema" schema { query: Query }"#).parse().unwrap();
        let ast::Definition::SchemaDefinition(schema) = &doc.definitions[0] else {
            panic!("expected a schema definition");
        };
        assert_eq!(schema.description.as_ref().unwrap().value, "the schema");
    }

    #[test]
    fn it_rejects_a_schema_definition_without_root_operation_types() {
        let err = Parser::new("schema { }").parse().unwrap_err();
        assert_eq!(
            err.message(),
            "expected a Root Operation Type Definition, got `}`"
        );

        let err = Parser::new("schema @x").parse().unwrap_err();
        assert_eq!(err.message(), "expected `{`, got EOF");
    }

    #[test]
    fn it_rejects_unknown_root_operation_types() {
        let err = Parser::new("schema { subscriptions: S }").parse().unwrap_err();
        assert!(err.message().starts_with("expected one of"));
    }
}
