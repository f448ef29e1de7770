use crate::ast::Definition;
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::{enum_, input, interface, object, scalar, schema, union_};
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#TypeSystemExtension
///
/// *TypeSystemExtension*:
///     SchemaExtension
///     TypeExtension
///
/// The `extend` keyword is consumed here; the keyword after it picks the
/// extension to parse, which receives the recorded start offset and comment
/// so the resulting node covers the whole `extend …` text.
pub(crate) fn extensions<'a>(p: &mut Parser<'a>) -> Result<Definition<'a>, Error> {
    let start = p.start();
    let comment = p.take_comment();
    p.expect_keyword("extend")?;

    if !p.at(TokenKind::Name) {
        return Err(p.err_expected(
            "`schema`, `scalar`, `type`, `interface`, `union`, `enum` or `input`",
        ));
    }
    match p.current_text() {
        "schema" => schema::schema_extension(p, start, comment).map(Definition::SchemaExtension),
        "scalar" => {
            scalar::scalar_type_extension(p, start, comment).map(Definition::ScalarTypeExtension)
        }
        "type" => {
            object::object_type_extension(p, start, comment).map(Definition::ObjectTypeExtension)
        }
        "interface" => interface::interface_type_extension(p, start, comment)
            .map(Definition::InterfaceTypeExtension),
        "union" => {
            union_::union_type_extension(p, start, comment).map(Definition::UnionTypeExtension)
        }
        "enum" => enum_::enum_type_extension(p, start, comment).map(Definition::EnumTypeExtension),
        "input" => input::input_object_type_extension(p, start, comment)
            .map(Definition::InputObjectTypeExtension),
        _ => Err(p.err_expected(
            "`schema`, `scalar`, `type`, `interface`, `union`, `enum` or `input`",
        )),
    }
}

#[cfg(test)]
mod test {
    use crate::ast;
    use crate::Parser;
    use crate::Span;

    #[test]
    fn it_parses_every_extension_kind() {
        let source = r#"
extend schema {
    mutation: MyMutationType
}
extend scalar UUID @specifiedBy(url: "https://tools.ietf.org/html/rfc4122")
extend type Business implements NamedEntity
extend interface NamedEntity {
    name: String
}
extend union SearchResult = Pet
extend enum Pet {
    GuineaPig
    Cat
}
extend input First @include(if: true)
        "#;

        let doc = Parser::new(source).parse().unwrap();
        assert_eq!(doc.definitions.len(), 7);

        for definition in &doc.definitions {
            assert!(definition.is_extension_definition());
        }

        let ast::Definition::SchemaExtension(schema_ext) = &doc.definitions[0] else {
            panic!("expected a schema extension");
        };
        assert_eq!(
            schema_ext.root_operation_types[0].named_type.name.value,
            "MyMutationType"
        );

        let names: Vec<_> = doc.definitions[1..]
            .iter()
            .map(|definition| definition.name().unwrap().value)
            .collect();
        assert_eq!(
            names,
            ["UUID", "Business", "NamedEntity", "SearchResult", "Pet", "First"]
        );
    }

    #[test]
    fn it_spans_extensions_from_the_extend_keyword() {
        let source = "extend scalar UUID @tag";
        let doc = Parser::new(source).parse().unwrap();
        let ast::Definition::ScalarTypeExtension(extension) = &doc.definitions[0] else {
            panic!("expected a scalar type extension");
        };
        assert_eq!(
            extension.span,
            Some(Span {
                start: 0,
                end: source.len(),
            })
        );
    }

    #[test]
    fn it_rejects_an_unknown_extension_target() {
        let err = Parser::new("extend Cat").parse().unwrap_err();
        assert_eq!(
            err.message(),
            "expected `schema`, `scalar`, `type`, `interface`, `union`, `enum` or `input`, got `Cat`"
        );
    }
}
