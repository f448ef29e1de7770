use crate::ast::{OperationDefinition, OperationType};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{directive, name, selection, variable};
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#OperationDefinition
///
/// *OperationDefinition*:
///    OperationType Name? VariableDefinitions? Directives? SelectionSet
///    SelectionSet
pub(crate) fn operation_definition<'a>(
    p: &mut Parser<'a>,
) -> Result<OperationDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    // The anonymous shorthand form is a bare selection set.
    if p.at(TokenKind::LCurly) {
        let selection_set = selection::selection_set(p)?;
        p.ascend();
        return Ok(OperationDefinition {
            span: p.span_from(start),
            comment,
            operation: OperationType::Query,
            name: None,
            variables: None,
            directives: None,
            selection_set,
        });
    }

    let operation = operation_type(p)?;
    let name = if p.at(TokenKind::Name) {
        Some(name::name(p)?)
    } else {
        None
    };
    let variables = if p.at(TokenKind::LParen) {
        Some(variable::variable_definitions(p)?)
    } else {
        None
    };
    let directives = directive::directives_opt(p, Constness::NotConst)?;
    let selection_set = selection::selection_set(p)?;

    p.ascend();
    Ok(OperationDefinition {
        span: p.span_from(start),
        comment,
        operation,
        name,
        variables,
        directives,
        selection_set,
    })
}

/// See: https://spec.graphql.org/October2021/#OperationType
///
/// *OperationType*: one of
///    **query**    **mutation**    **subscription**
pub(crate) fn operation_type(p: &mut Parser<'_>) -> Result<OperationType, Error> {
    let token = p.expect_one_of(&["query", "mutation", "subscription"])?;
    Ok(match p.text_of(&token) {
        "query" => OperationType::Query,
        "mutation" => OperationType::Mutation,
        _ => OperationType::Subscription,
    })
}

#[cfg(test)]
mod test {
    use crate::ast::{self, OperationType};
    use crate::Parser;

    #[test]
    fn it_parses_a_named_query_with_nested_fields() {
        let doc = Parser::new("query test { field1 field2(id: 5) { name address } field3 }")
            .parse()
            .unwrap();

        assert_eq!(doc.definitions.len(), 1);
        let ast::Definition::OperationDefinition(op) = &doc.definitions[0] else {
            panic!("expected an operation definition");
        };
        assert_eq!(op.operation, OperationType::Query);
        assert_eq!(op.name.as_ref().unwrap().value, "test");
        assert_eq!(op.selection_set.selections.len(), 3);

        let ast::Selection::Field(field2) = &op.selection_set.selections[1] else {
            panic!("expected a field");
        };
        assert_eq!(field2.name.value, "field2");
        let arguments = field2.arguments.as_ref().unwrap();
        assert_eq!(arguments.items.len(), 1);
        assert_eq!(arguments.items[0].name.value, "id");
        let ast::Value::Int(int) = &arguments.items[0].value else {
            panic!("expected an Int Value argument");
        };
        assert_eq!(int.value, "5");
        assert_eq!(
            field2.selection_set.as_ref().unwrap().selections.len(),
            2
        );
    }

    #[test]
    fn it_parses_the_anonymous_shorthand() {
        let doc = Parser::new("{ hello }").parse().unwrap();
        let ast::Definition::OperationDefinition(op) = &doc.definitions[0] else {
            panic!("expected an operation definition");
        };
        assert_eq!(op.operation, OperationType::Query);
        assert_eq!(op.name, None);
        assert_eq!(op.variables, None);
        let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
            panic!("expected a field");
        };
        assert_eq!(field.name.value, "hello");
        assert_eq!(field.arguments, None);
    }

    #[test]
    fn it_parses_mutations_and_subscriptions() {
        let doc = Parser::new("mutation doIt { go } subscription watchIt { updates }")
            .parse()
            .unwrap();
        let ast::Definition::OperationDefinition(mutation) = &doc.definitions[0] else {
            panic!("expected an operation definition");
        };
        assert_eq!(mutation.operation, OperationType::Mutation);
        let ast::Definition::OperationDefinition(subscription) = &doc.definitions[1] else {
            panic!("expected an operation definition");
        };
        assert_eq!(subscription.operation, OperationType::Subscription);
    }

    #[test]
    fn it_parses_operation_directives() {
        let doc = Parser::new("query q @skip(if: $no) @other { cat }")
            .parse()
            .unwrap();
        let ast::Definition::OperationDefinition(op) = &doc.definitions[0] else {
            panic!("expected an operation definition");
        };
        let directives = op.directives.as_ref().unwrap();
        let names: Vec<_> = directives
            .items
            .iter()
            .map(|directive| directive.name.value)
            .collect();
        assert_eq!(names, ["skip", "other"]);
    }

    #[test]
    fn it_requires_a_selection_set() {
        let err = Parser::new("query test").parse().unwrap_err();
        assert_eq!(err.message(), "expected a Selection Set, got EOF");

        let err = Parser::new("subscription s(").parse().unwrap_err();
        assert_eq!(err.message(), "expected a Variable Definition, got EOF");
    }

    #[test]
    fn it_rejects_unknown_operation_types() {
        let err = Parser::new("operation q { cat }").parse().unwrap_err();
        assert_eq!(err.message(), "expected a Definition, got `operation`");
    }
}
