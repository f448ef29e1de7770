use crate::ast::{Definition, Document};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::{
    directive, enum_, extensions, fragment, input, interface, object, operation, scalar, schema,
    union_,
};
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#Document
///
/// *Document*:
///     Definition*
pub(crate) fn document<'a>(p: &mut Parser<'a>) -> Result<Document<'a>, Error> {
    let mut definitions = Vec::new();
    while !p.at(TokenKind::Eof) {
        definitions.push(definition(p)?);
    }
    Ok(Document {
        span: p.document_span(),
        definitions,
        unattached_comments: p.drain_unattached(),
    })
}

/// See: https://spec.graphql.org/October2021/#Definition
///
/// *Definition*:
///     ExecutableDefinition | TypeSystemDefinition | TypeSystemExtension
fn definition<'a>(p: &mut Parser<'a>) -> Result<Definition<'a>, Error> {
    match p.current().kind() {
        TokenKind::LCurly => {
            operation::operation_definition(p).map(Definition::OperationDefinition)
        }
        TokenKind::Name => select_definition(p.current_text(), p),
        // A description pins the definition that follows to the type system;
        // peek past it to find out which production to take.
        TokenKind::String | TokenKind::BlockString => match p.lookahead_keyword()? {
            Some(
                keyword @ ("schema" | "scalar" | "type" | "interface" | "union" | "enum"
                | "input" | "directive"),
            ) => select_definition(keyword, p),
            _ => Err(p.err_at_current(
                "a description can only precede a Type System Definition",
            )),
        },
        _ => Err(p.err_expected("a Definition")),
    }
}

fn select_definition<'a>(keyword: &str, p: &mut Parser<'a>) -> Result<Definition<'a>, Error> {
    match keyword {
        "query" | "mutation" | "subscription" => {
            operation::operation_definition(p).map(Definition::OperationDefinition)
        }
        "fragment" => fragment::fragment_definition(p).map(Definition::FragmentDefinition),
        "directive" => directive::directive_definition(p).map(Definition::DirectiveDefinition),
        "schema" => schema::schema_definition(p).map(Definition::SchemaDefinition),
        "scalar" => scalar::scalar_type_definition(p).map(Definition::ScalarTypeDefinition),
        "type" => object::object_type_definition(p).map(Definition::ObjectTypeDefinition),
        "interface" => {
            interface::interface_type_definition(p).map(Definition::InterfaceTypeDefinition)
        }
        "union" => union_::union_type_definition(p).map(Definition::UnionTypeDefinition),
        "enum" => enum_::enum_type_definition(p).map(Definition::EnumTypeDefinition),
        "input" => input::input_object_type_definition(p).map(Definition::InputObjectTypeDefinition),
        "extend" => extensions::extensions(p),
        _ => Err(p.err_expected("a Definition")),
    }
}

#[cfg(test)]
mod test {
    use crate::ast;
    use crate::Parser;

    #[test]
    fn it_parses_a_mixed_document() {
        let source = r#"
query withFragments {
  user(id: 4) {
    friends(first: 10) {
      ...friendFields
    }
  }
}

fragment friendFields on User {
  id
  name
  profilePic(size: 50)
}

"The root query type."
type Query {
  user(id: ID!): User
}

extend type Query @cacheControl
"#;
        let doc = Parser::new(source).parse().unwrap();
        assert_eq!(doc.definitions.len(), 4);
        assert!(doc.definitions[0].is_executable_definition());
        assert!(doc.definitions[1].is_executable_definition());
        assert!(!doc.definitions[2].is_executable_definition());
        assert!(doc.definitions[3].is_extension_definition());
    }

    #[test]
    fn it_dispatches_description_prefixed_definitions() {
        let source = r#"
"scalar description" scalar UUID
"type description" type T { f: Int }
"#;
        let doc = Parser::new(source).parse().unwrap();
        let ast::Definition::ScalarTypeDefinition(scalar) = &doc.definitions[0] else {
            panic!("expected a scalar type definition");
        };
        assert_eq!(scalar.description.as_ref().unwrap().value, "scalar description");
        let ast::Definition::ObjectTypeDefinition(object) = &doc.definitions[1] else {
            panic!("expected an object type definition");
        };
        assert_eq!(object.description.as_ref().unwrap().value, "type description");
    }

    #[test]
    fn it_dispatches_block_string_descriptions() {
        let source = "\"\"\"\n  Multiline.\n\"\"\"\nenum Pet { CAT DOG }";
        let doc = Parser::new(source).parse().unwrap();
        let ast::Definition::EnumTypeDefinition(enum_def) = &doc.definitions[0] else {
            panic!("expected an enum type definition");
        };
        assert_eq!(enum_def.description.as_ref().unwrap().value, "Multiline.");
    }

    #[test]
    fn it_skips_comments_in_the_description_lookahead() {
        let source = "\"described\"\n# comment between\nscalar S";
        let doc = Parser::new(source).parse().unwrap();
        let ast::Definition::ScalarTypeDefinition(scalar) = &doc.definitions[0] else {
            panic!("expected a scalar type definition");
        };
        assert_eq!(scalar.description.as_ref().unwrap().value, "described");
    }

    #[test]
    fn it_rejects_descriptions_on_executable_definitions() {
        for source in [
            r#""no descriptions here" query q { cat }"#,
            r#""nor here" fragment F on T { cat }"#,
            r#""nor on extensions" extend type T @d"#,
            r#""dangling""#,
            r#""dangling" 5"#,
        ] {
            let err = Parser::new(source).parse().unwrap_err();
            assert_eq!(
                err.message(),
                "a description can only precede a Type System Definition",
                "for source {source:?}"
            );
        }
    }

    #[test]
    fn it_rejects_a_stray_token_at_top_level() {
        let err = Parser::new("5").parse().unwrap_err();
        assert_eq!(err.message(), "expected a Definition, got `5`");

        let err = Parser::new("cat").parse().unwrap_err();
        assert_eq!(err.message(), "expected a Definition, got `cat`");
    }
}
