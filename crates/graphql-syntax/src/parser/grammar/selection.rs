use crate::ast::{Selection, SelectionSet};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::{field, fragment};
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#SelectionSet
///
/// *SelectionSet*:
///     **{** Selection+ **}**
pub(crate) fn selection_set<'a>(p: &mut Parser<'a>) -> Result<SelectionSet<'a>, Error> {
    if !p.at(TokenKind::LCurly) {
        return Err(p.err_expected("a Selection Set"));
    }

    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();
    p.advance()?;

    if p.at(TokenKind::RCurly) {
        return Err(p.err_expected("a Selection"));
    }
    let mut selections = Vec::new();
    while !p.at(TokenKind::RCurly) {
        selections.push(selection(p)?);
    }
    p.expect(TokenKind::RCurly)?;

    p.ascend();
    Ok(SelectionSet {
        span: p.span_from(start),
        comment,
        selections,
    })
}

/// See: https://spec.graphql.org/October2021/#Selection
///
/// *Selection*:
///     Field
///     FragmentSpread
///     InlineFragment
fn selection<'a>(p: &mut Parser<'a>) -> Result<Selection<'a>, Error> {
    match p.current().kind() {
        TokenKind::Spread => fragment::fragment(p),
        TokenKind::Name => field::field(p).map(Selection::Field),
        _ => Err(p.err_expected("a Selection")),
    }
}

#[cfg(test)]
mod test {
    use crate::ast;
    use crate::Parser;

    #[test]
    fn it_parses_nested_selection_sets() {
        let doc = Parser::new(
            "{
                animal: cat
                dog {
                    panda {
                        anotherCat
                    }
                }
                lion
            }",
        )
        .parse()
        .unwrap();

        let ast::Definition::OperationDefinition(op) = &doc.definitions[0] else {
            panic!("expected an operation definition");
        };
        assert_eq!(op.selection_set.selections.len(), 3);

        let ast::Selection::Field(animal) = &op.selection_set.selections[0] else {
            panic!("expected a field");
        };
        assert_eq!(animal.alias.as_ref().unwrap().name.value, "animal");
        assert_eq!(animal.name.value, "cat");

        let ast::Selection::Field(dog) = &op.selection_set.selections[1] else {
            panic!("expected a field");
        };
        let ast::Selection::Field(panda) = &dog.selection_set.as_ref().unwrap().selections[0]
        else {
            panic!("expected a field");
        };
        assert_eq!(panda.name.value, "panda");
        assert_eq!(panda.selection_set.as_ref().unwrap().selections.len(), 1);
    }

    #[test]
    fn it_parses_spreads_and_inline_fragments_in_a_selection_set() {
        let doc = Parser::new(
            "{
                pet
                ...snackSelection
                ... on Nap {
                    cozyLocation
                }
            }",
        )
        .parse()
        .unwrap();

        let ast::Definition::OperationDefinition(op) = &doc.definitions[0] else {
            panic!("expected an operation definition");
        };
        assert!(matches!(op.selection_set.selections[0], ast::Selection::Field(_)));
        assert!(matches!(
            op.selection_set.selections[1],
            ast::Selection::FragmentSpread(_)
        ));
        assert!(matches!(
            op.selection_set.selections[2],
            ast::Selection::InlineFragment(_)
        ));
    }

    #[test]
    fn it_rejects_an_empty_selection_set() {
        let err = Parser::new("{ }").parse().unwrap_err();
        assert_eq!(err.message(), "expected a Selection, got `}`");
    }

    #[test]
    fn it_rejects_a_selection_set_left_open() {
        let err = Parser::new("{ cat ").parse().unwrap_err();
        assert_eq!(err.message(), "expected a Selection, got EOF");
    }
}
