use crate::ast::{Alias, Field, FieldDefinition, FieldsDefinition};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{argument, description, directive, input, name, selection, ty};
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#Field
///
/// *Field*:
///     Alias? Name Arguments? Directives? SelectionSet?
pub(crate) fn field<'a>(p: &mut Parser<'a>) -> Result<Field<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    // An alias is only distinguishable from the field name once the colon
    // shows up.
    let first = name::name(p)?;
    let (alias, name) = if p.skip(TokenKind::Colon)? {
        let alias = Alias {
            span: p.span_from(start),
            comment: None,
            name: first,
        };
        (Some(alias), name::name(p)?)
    } else {
        (None, first)
    };

    let arguments = if p.at(TokenKind::LParen) {
        Some(argument::arguments(p, Constness::NotConst)?)
    } else {
        None
    };
    let directives = directive::directives_opt(p, Constness::NotConst)?;
    let selection_set = if p.at(TokenKind::LCurly) {
        Some(selection::selection_set(p)?)
    } else {
        None
    };

    p.ascend();
    Ok(Field {
        span: p.span_from(start),
        comment,
        alias,
        name,
        arguments,
        directives,
        selection_set,
    })
}

/// See: https://spec.graphql.org/October2021/#FieldsDefinition
///
/// *FieldsDefinition*:
///     **{** FieldDefinition+ **}**
pub(crate) fn fields_definition<'a>(p: &mut Parser<'a>) -> Result<FieldsDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();
    p.expect(TokenKind::LCurly)?;

    if !at_field_definition(p) {
        return Err(p.err_expected("a Field Definition"));
    }
    let mut items = Vec::new();
    while at_field_definition(p) {
        items.push(field_definition(p)?);
    }
    p.expect(TokenKind::RCurly)?;

    p.ascend();
    Ok(FieldsDefinition {
        span: p.span_from(start),
        comment,
        items,
    })
}

/// See: https://spec.graphql.org/October2021/#FieldDefinition
///
/// *FieldDefinition*:
///     Description? Name ArgumentsDefinition? **:** Type Directives[Const]?
pub(crate) fn field_definition<'a>(p: &mut Parser<'a>) -> Result<FieldDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    let description = description::description(p)?;
    let name = name::name(p)?;
    let arguments = if p.at(TokenKind::LParen) {
        Some(input::arguments_definition(p)?)
    } else {
        None
    };
    p.expect(TokenKind::Colon)?;
    let ty = ty::ty(p)?;
    let directives = directive::directives_opt(p, Constness::Const)?;

    p.ascend();
    Ok(FieldDefinition {
        span: p.span_from(start),
        comment,
        description,
        name,
        arguments,
        ty,
        directives,
    })
}

fn at_field_definition(p: &Parser<'_>) -> bool {
    matches!(
        p.current().kind(),
        TokenKind::Name | TokenKind::String | TokenKind::BlockString
    )
}

#[cfg(test)]
mod test {
    use crate::ast;
    use crate::Parser;

    #[test]
    fn it_parses_aliased_fields_with_arguments() {
        let doc = Parser::new("{ big: profilePic(size: 1024) @include(if: $wide) { url } }")
            .parse()
            .unwrap();
        let ast::Definition::OperationDefinition(op) = &doc.definitions[0] else {
            panic!("expected an operation definition");
        };
        let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
            panic!("expected a field");
        };
        assert_eq!(field.alias.as_ref().unwrap().name.value, "big");
        assert_eq!(field.name.value, "profilePic");
        assert_eq!(field.arguments.as_ref().unwrap().items.len(), 1);
        assert_eq!(field.directives.as_ref().unwrap().items.len(), 1);
        assert!(field.selection_set.is_some());
    }

    #[test]
    fn it_requires_a_name_after_an_alias_colon() {
        let err = Parser::new("{ alias: }").parse().unwrap_err();
        assert_eq!(err.message(), "expected a Name, got `}`");
    }

    #[test]
    fn it_parses_field_definitions_with_arguments_and_directives() {
        let doc = Parser::new(
            r#"
type Query {
  bestSellers(category: ProductCategory = ALL): [Product] @join__field(graph: PRODUCTS)
  categories: [Department]
  "describes the product lookup"
  product(id: ID!): Product
}
"#,
        )
        .parse()
        .unwrap();

        let ast::Definition::ObjectTypeDefinition(object) = &doc.definitions[0] else {
            panic!("expected an object type definition");
        };
        let fields = object.fields.as_ref().unwrap();
        assert_eq!(fields.items.len(), 3);

        let best_sellers = &fields.items[0];
        assert_eq!(best_sellers.name.value, "bestSellers");
        let arg = &best_sellers.arguments.as_ref().unwrap().items[0];
        assert_eq!(arg.name.value, "category");
        let ast::Value::Enum(default) = arg.default_value.as_ref().unwrap() else {
            panic!("expected an Enum Value default");
        };
        assert_eq!(default.name.value, "ALL");
        assert_eq!(
            best_sellers.directives.as_ref().unwrap().items[0].name.value,
            "join__field"
        );

        assert_eq!(
            fields.items[2].description.as_ref().unwrap().value,
            "describes the product lookup"
        );
    }

    #[test]
    fn it_rejects_a_field_definition_without_a_type() {
        let err = Parser::new("type T { f }").parse().unwrap_err();
        assert_eq!(err.message(), "expected `:`, got `}`");

        let err = Parser::new("type T { f: }").parse().unwrap_err();
        assert_eq!(err.message(), "expected a Type, got `}`");
    }
}
