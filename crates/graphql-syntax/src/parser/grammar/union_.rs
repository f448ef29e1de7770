use crate::ast::{Comment, UnionMemberTypes, UnionTypeDefinition, UnionTypeExtension};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{description, directive, name, ty};
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#UnionTypeDefinition
///
/// *UnionTypeDefinition*:
///     Description? **union** Name Directives[Const]? UnionMemberTypes?
pub(crate) fn union_type_definition<'a>(p: &mut Parser<'a>) -> Result<UnionTypeDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    let description = description::description(p)?;
    p.expect_keyword("union")?;
    let name = name::name(p)?;
    let directives = directive::directives_opt(p, Constness::Const)?;
    let members = union_member_types_opt(p)?;

    p.ascend();
    Ok(UnionTypeDefinition {
        span: p.span_from(start),
        comment,
        description,
        name,
        directives,
        members,
    })
}

/// See: https://spec.graphql.org/October2021/#UnionMemberTypes
///
/// *UnionMemberTypes*:
///     **=** **|**? NamedType (**|** NamedType)*
pub(crate) fn union_member_types<'a>(p: &mut Parser<'a>) -> Result<UnionMemberTypes<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    p.expect(TokenKind::Eq)?;
    p.skip(TokenKind::Pipe)?;
    let mut items = vec![ty::named_type(p)?];
    while p.skip(TokenKind::Pipe)? {
        items.push(ty::named_type(p)?);
    }

    p.ascend();
    Ok(UnionMemberTypes {
        span: p.span_from(start),
        comment,
        items,
    })
}

fn union_member_types_opt<'a>(p: &mut Parser<'a>) -> Result<Option<UnionMemberTypes<'a>>, Error> {
    if p.at(TokenKind::Eq) {
        union_member_types(p).map(Some)
    } else {
        Ok(None)
    }
}

/// See: https://spec.graphql.org/October2021/#UnionTypeExtension
///
/// *UnionTypeExtension*:
///     **extend** **union** Name Directives[Const]? UnionMemberTypes
///     **extend** **union** Name Directives[Const]
pub(crate) fn union_type_extension<'a>(
    p: &mut Parser<'a>,
    start: usize,
    comment: Option<Comment<'a>>,
) -> Result<UnionTypeExtension<'a>, Error> {
    p.descend()?;

    p.expect_keyword("union")?;
    let name = name::name(p)?;
    let directives = directive::directives_opt(p, Constness::Const)?;
    let members = union_member_types_opt(p)?;

    if directives.is_none() && members.is_none() {
        return Err(p.err_expected("Directives or Union Member Types"));
    }

    p.ascend();
    Ok(UnionTypeExtension {
        span: p.span_from(start),
        comment,
        name,
        directives,
        members,
    })
}

#[cfg(test)]
mod test {
    use crate::ast;
    use crate::Parser;

    fn member_names<'a>(members: &ast::UnionMemberTypes<'a>) -> Vec<&'a str> {
        members.items.iter().map(|member| member.name.value).collect()
    }

    #[test]
    fn it_parses_union_member_types() {
        let doc = Parser::new("union U = A | B | C").parse().unwrap();
        let ast::Definition::UnionTypeDefinition(union) = &doc.definitions[0] else {
            panic!("expected a union type definition");
        };
        assert_eq!(union.name.value, "U");
        assert_eq!(member_names(union.members.as_ref().unwrap()), ["A", "B", "C"]);
    }

    #[test]
    fn it_parses_union_member_types_with_a_leading_pipe() {
        let doc = Parser::new(
            "union SearchResult =
            | Photo
            | Person",
        )
        .parse()
        .unwrap();
        let ast::Definition::UnionTypeDefinition(union) = &doc.definitions[0] else {
            panic!("expected a union type definition");
        };
        assert_eq!(
            member_names(union.members.as_ref().unwrap()),
            ["Photo", "Person"]
        );
    }

    #[test]
    fn it_parses_a_union_extension_with_members() {
        let doc = Parser::new("extend union SearchResult = Pet").parse().unwrap();
        let ast::Definition::UnionTypeExtension(extension) = &doc.definitions[0] else {
            panic!("expected a union type extension");
        };
        assert_eq!(extension.name.value, "SearchResult");
        assert_eq!(member_names(extension.members.as_ref().unwrap()), ["Pet"]);
    }

    #[test]
    fn it_rejects_a_union_extension_without_clauses() {
        let err = Parser::new("extend union SearchResult").parse().unwrap_err();
        assert_eq!(err.message(), "expected Directives or Union Member Types, got EOF");
    }

    #[test]
    fn it_rejects_a_trailing_pipe() {
        let err = Parser::new("union U = A | B |").parse().unwrap_err();
        assert_eq!(err.message(), "expected a Name, got EOF");
    }
}
