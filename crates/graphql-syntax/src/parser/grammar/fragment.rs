use crate::ast::{FragmentDefinition, FragmentSpread, InlineFragment, Name, Selection, TypeCondition};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{directive, name, selection, ty};
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#FragmentDefinition
///
/// *FragmentDefinition*:
///     **fragment** FragmentName TypeCondition Directives? SelectionSet
pub(crate) fn fragment_definition<'a>(p: &mut Parser<'a>) -> Result<FragmentDefinition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    p.expect_keyword("fragment")?;
    let name = fragment_name(p)?;
    let type_condition = type_condition(p)?;
    let directives = directive::directives_opt(p, Constness::NotConst)?;
    let selection_set = selection::selection_set(p)?;

    p.ascend();
    Ok(FragmentDefinition {
        span: p.span_from(start),
        comment,
        name,
        type_condition,
        directives,
        selection_set,
    })
}

/// See: https://spec.graphql.org/October2021/#FragmentName
///
/// *FragmentName*:
///     Name *but not* **on**
pub(crate) fn fragment_name<'a>(p: &mut Parser<'a>) -> Result<Name<'a>, Error> {
    if p.at_keyword("on") {
        return Err(p.err_at_current("Fragment Name cannot be `on`"));
    }
    name::name(p)
}

/// See: https://spec.graphql.org/October2021/#TypeCondition
///
/// *TypeCondition*:
///     **on** NamedType
pub(crate) fn type_condition<'a>(p: &mut Parser<'a>) -> Result<TypeCondition<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    p.expect_keyword("on")?;
    let ty = ty::named_type(p)?;

    p.ascend();
    Ok(TypeCondition {
        span: p.span_from(start),
        comment,
        ty,
    })
}

/// See: https://spec.graphql.org/October2021/#FragmentSpread
/// See: https://spec.graphql.org/October2021/#InlineFragment
///
/// *FragmentSpread*:
///     **...** FragmentName Directives?
///
/// *InlineFragment*:
///     **...** TypeCondition? Directives? SelectionSet
///
/// Which one a `...` begins depends on the token after it: a Name other than
/// **on** makes it a spread, everything else an inline fragment.
pub(crate) fn fragment<'a>(p: &mut Parser<'a>) -> Result<Selection<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();
    p.expect(TokenKind::Spread)?;

    if p.at(TokenKind::Name) && !p.at_keyword("on") {
        let name = fragment_name(p)?;
        let directives = directive::directives_opt(p, Constness::NotConst)?;
        p.ascend();
        return Ok(Selection::FragmentSpread(FragmentSpread {
            span: p.span_from(start),
            comment,
            name,
            directives,
        }));
    }

    let type_condition = if p.at_keyword("on") {
        Some(type_condition(p)?)
    } else {
        None
    };
    let directives = directive::directives_opt(p, Constness::NotConst)?;
    let selection_set = selection::selection_set(p)?;

    p.ascend();
    Ok(Selection::InlineFragment(InlineFragment {
        span: p.span_from(start),
        comment,
        type_condition,
        directives,
        selection_set,
    }))
}
