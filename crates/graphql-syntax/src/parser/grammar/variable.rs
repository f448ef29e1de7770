use crate::ast::{Variable, VariableDefinition, VariablesDefinition};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::{self, Constness};
use crate::parser::grammar::{directive, name, ty};
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#VariableDefinitions
///
/// *VariableDefinitions*:
///     **(** VariableDefinition+ **)**
pub(crate) fn variable_definitions<'a>(
    p: &mut Parser<'a>,
) -> Result<VariablesDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();
    p.expect(TokenKind::LParen)?;

    if !p.at(TokenKind::Dollar) {
        return Err(p.err_expected("a Variable Definition"));
    }
    let mut items = Vec::new();
    while p.at(TokenKind::Dollar) {
        items.push(variable_definition(p)?);
    }
    p.expect(TokenKind::RParen)?;

    p.ascend();
    Ok(VariablesDefinition {
        span: p.span_from(start),
        comment,
        items,
    })
}

/// See: https://spec.graphql.org/October2021/#VariableDefinition
///
/// *VariableDefinition*:
///     Variable **:** Type DefaultValue? Directives[Const]?
pub(crate) fn variable_definition<'a>(p: &mut Parser<'a>) -> Result<VariableDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    let variable = variable(p)?;
    p.expect(TokenKind::Colon)?;
    let ty = ty::ty(p)?;
    let default_value = if p.skip(TokenKind::Eq)? {
        Some(value::value(p, Constness::Const)?)
    } else {
        None
    };
    let directives = directive::directives_opt(p, Constness::Const)?;

    p.ascend();
    Ok(VariableDefinition {
        span: p.span_from(start),
        comment,
        variable,
        ty,
        default_value,
        directives,
    })
}

/// See: https://spec.graphql.org/October2021/#Variable
///
/// *Variable*:
///     **$** Name
pub(crate) fn variable<'a>(p: &mut Parser<'a>) -> Result<Variable<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    p.expect(TokenKind::Dollar)?;
    let name = name::name(p)?;

    p.ascend();
    Ok(Variable {
        span: p.span_from(start),
        comment,
        name,
    })
}

#[cfg(test)]
mod test {
    use crate::ast;
    use crate::Parser;

    fn variables<'v, 'a>(doc: &'v ast::Document<'a>) -> &'v ast::VariablesDefinition<'a> {
        let ast::Definition::OperationDefinition(op) = &doc.definitions[0] else {
            panic!("expected an operation definition");
        };
        op.variables.as_ref().unwrap()
    }

    #[test]
    fn it_parses_variable_definitions() {
        let doc = Parser::new("query GroceryStoreTrip($budget: Int, $trips: [Int!]) { name }")
            .parse()
            .unwrap();
        let vars = variables(&doc);
        assert_eq!(vars.items.len(), 2);
        assert_eq!(vars.items[0].variable.name.value, "budget");
        let ast::Type::Named(named) = &vars.items[0].ty else {
            panic!("expected a named type");
        };
        assert_eq!(named.name.value, "Int");
        assert!(matches!(vars.items[1].ty, ast::Type::List(_)));
    }

    #[test]
    fn it_parses_default_values_and_directives() {
        let doc = Parser::new("query Q($budget: Int = 5 @lowerBound(min: 0)) { name }")
            .parse()
            .unwrap();
        let vars = variables(&doc);
        let definition = &vars.items[0];
        let ast::Value::Int(default) = definition.default_value.as_ref().unwrap() else {
            panic!("expected an Int Value default");
        };
        assert_eq!(default.value, "5");
        assert_eq!(
            definition.directives.as_ref().unwrap().items[0].name.value,
            "lowerBound"
        );
    }

    #[test]
    fn it_rejects_variables_in_default_values() {
        let err = Parser::new("query Q($a: Int = $b) { name }").parse().unwrap_err();
        assert_eq!(err.message(), "unexpected variable in a constant value");
    }

    #[test]
    fn it_rejects_a_variable_without_a_dollar_sign() {
        let err = Parser::new("query Q(budget: Int) { name }").parse().unwrap_err();
        assert_eq!(err.message(), "expected a Variable Definition, got `budget`");
    }
}
