use crate::ast::{
    BooleanValue, EnumValue, FloatValue, IntValue, ListValue, NullValue, ObjectField, ObjectValue,
    StringValue, Value,
};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::{name, variable};
use crate::parser::Parser;

/// Whether a value sits in a const context, where variables are not allowed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Constness {
    Const,
    NotConst,
}

/// See: https://spec.graphql.org/October2021/#Value
///
/// *Value[Const]*:
///     [if not Const] Variable
///     IntValue
///     FloatValue
///     StringValue
///     BooleanValue
///     NullValue
///     EnumValue
///     ListValue[?Const]
///     ObjectValue[?Const]
pub(crate) fn value<'a>(p: &mut Parser<'a>, constness: Constness) -> Result<Value<'a>, Error> {
    p.descend()?;
    let value = match p.current().kind() {
        TokenKind::Dollar => {
            if constness == Constness::Const {
                return Err(p.err_at_current("unexpected variable in a constant value"));
            }
            Value::Variable(variable::variable(p)?)
        }
        TokenKind::Int => Value::Int(int_value(p)?),
        TokenKind::Float => Value::Float(float_value(p)?),
        TokenKind::String | TokenKind::BlockString => Value::String(string_value(p)?),
        TokenKind::Name => match p.current_text() {
            "true" | "false" => Value::Boolean(boolean_value(p)?),
            "null" => Value::Null(null_value(p)?),
            _ => Value::Enum(enum_value(p)?),
        },
        TokenKind::LBracket => list_value(p, constness)?,
        TokenKind::LCurly => object_value(p, constness)?,
        _ => return Err(p.err_expected("a Value")),
    };
    p.ascend();
    Ok(value)
}

fn int_value<'a>(p: &mut Parser<'a>) -> Result<IntValue<'a>, Error> {
    let comment = p.take_comment();
    let token = p.expect(TokenKind::Int)?;
    Ok(IntValue {
        span: p.span_from(token.start()),
        comment,
        value: p.text_of(&token),
    })
}

fn float_value<'a>(p: &mut Parser<'a>) -> Result<FloatValue<'a>, Error> {
    let comment = p.take_comment();
    let token = p.expect(TokenKind::Float)?;
    Ok(FloatValue {
        span: p.span_from(token.start()),
        comment,
        value: p.text_of(&token),
    })
}

fn string_value<'a>(p: &mut Parser<'a>) -> Result<StringValue<'a>, Error> {
    let comment = p.take_comment();
    let block = p.at(TokenKind::BlockString);
    let token = p.take_current()?;
    Ok(StringValue {
        span: p.span_from(token.start()),
        comment,
        value: token.into_data(),
        block,
    })
}

fn boolean_value<'a>(p: &mut Parser<'a>) -> Result<BooleanValue<'a>, Error> {
    let comment = p.take_comment();
    let token = p.take_current()?;
    Ok(BooleanValue {
        span: p.span_from(token.start()),
        comment,
        value: token.data() == "true",
    })
}

fn null_value<'a>(p: &mut Parser<'a>) -> Result<NullValue<'a>, Error> {
    let comment = p.take_comment();
    let token = p.take_current()?;
    Ok(NullValue {
        span: p.span_from(token.start()),
        comment,
    })
}

/// See: https://spec.graphql.org/October2021/#EnumValue
///
/// *EnumValue*:
///     Name *but not* **true**, **false** *or* **null**
pub(crate) fn enum_value<'a>(p: &mut Parser<'a>) -> Result<EnumValue<'a>, Error> {
    let start = p.start();
    let comment = p.take_comment();
    let name = name::name(p)?;
    Ok(EnumValue {
        span: p.span_from(start),
        comment,
        name,
    })
}

/// See: https://spec.graphql.org/October2021/#ListValue
///
/// *ListValue[Const]*:
///     **[** **]**
///     **[** Value[?Const]+ **]**
fn list_value<'a>(p: &mut Parser<'a>, constness: Constness) -> Result<Value<'a>, Error> {
    let start = p.start();
    let comment = p.take_comment();
    p.expect(TokenKind::LBracket)?;

    let mut values = Vec::new();
    while !p.at(TokenKind::RBracket) {
        if p.at(TokenKind::Eof) {
            return Err(p.err_expected("`]`"));
        }
        values.push(value(p, constness)?);
    }
    p.expect(TokenKind::RBracket)?;

    Ok(Value::List(ListValue {
        span: p.span_from(start),
        comment,
        values,
    }))
}

/// See: https://spec.graphql.org/October2021/#ObjectValue
///
/// *ObjectValue[Const]*:
///     **{** **}**
///     **{** ObjectField[?Const]+ **}**
fn object_value<'a>(p: &mut Parser<'a>, constness: Constness) -> Result<Value<'a>, Error> {
    let start = p.start();
    let comment = p.take_comment();
    p.expect(TokenKind::LCurly)?;

    let mut fields = Vec::new();
    while !p.at(TokenKind::RCurly) {
        fields.push(object_field(p, constness)?);
    }
    p.expect(TokenKind::RCurly)?;

    Ok(Value::Object(ObjectValue {
        span: p.span_from(start),
        comment,
        fields,
    }))
}

/// See: https://spec.graphql.org/October2021/#ObjectField
///
/// *ObjectField[Const]*:
///     Name **:** Value[?Const]
fn object_field<'a>(p: &mut Parser<'a>, constness: Constness) -> Result<ObjectField<'a>, Error> {
    p.descend()?;
    let start = p.start();
    let comment = p.take_comment();

    let name = name::name(p)?;
    p.expect(TokenKind::Colon)?;
    let value = value(p, constness)?;

    p.ascend();
    Ok(ObjectField {
        span: p.span_from(start),
        comment,
        name,
        value,
    })
}

#[cfg(test)]
mod test {
    use crate::ast;
    use crate::Parser;

    fn argument_values<'v, 'a>(doc: &'v ast::Document<'a>) -> Vec<&'v ast::Value<'a>> {
        let ast::Definition::OperationDefinition(op) = &doc.definitions[0] else {
            panic!("expected an operation definition");
        };
        let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
            panic!("expected a field");
        };
        field
            .arguments
            .as_ref()
            .unwrap()
            .items
            .iter()
            .map(|argument| &argument.value)
            .collect()
    }

    #[test]
    fn it_parses_every_value_kind() {
        let doc = Parser::new(
            r#"{
              user(id: 4, size: $size, value: "string", pi: 3.14,
                   input: [ "one", 1.34 ], tag: LARGE, active: true,
                   missing: null, other: { key: false, output: null })
            }"#,
        )
        .parse()
        .unwrap();

        let values = argument_values(&doc);
        assert!(matches!(values[0], ast::Value::Int(_)));
        assert!(matches!(values[1], ast::Value::Variable(_)));
        assert!(matches!(values[2], ast::Value::String(_)));
        assert!(matches!(values[3], ast::Value::Float(_)));
        let ast::Value::List(list) = values[4] else {
            panic!("expected a List Value");
        };
        assert_eq!(list.values.len(), 2);
        let ast::Value::Enum(tag) = values[5] else {
            panic!("expected an Enum Value");
        };
        assert_eq!(tag.name.value, "LARGE");
        let ast::Value::Boolean(active) = values[6] else {
            panic!("expected a Boolean Value");
        };
        assert!(active.value);
        assert!(matches!(values[7], ast::Value::Null(_)));
        let ast::Value::Object(object) = values[8] else {
            panic!("expected an Object Value");
        };
        assert_eq!(object.fields.len(), 2);
        assert_eq!(object.fields[0].name.value, "key");
    }

    #[test]
    fn it_parses_empty_list_and_object_values() {
        let doc = Parser::new("{ field(list: [], object: {}) }").parse().unwrap();
        let values = argument_values(&doc);
        let ast::Value::List(list) = values[0] else {
            panic!("expected a List Value");
        };
        assert_eq!(list.values, []);
        let ast::Value::Object(object) = values[1] else {
            panic!("expected an Object Value");
        };
        assert_eq!(object.fields, []);
    }

    #[test]
    fn it_parses_block_string_values() {
        let doc = Parser::new("{ field(text: \"\"\"\n  dedented\n  \"\"\") }")
            .parse()
            .unwrap();
        let values = argument_values(&doc);
        let ast::Value::String(string) = values[0] else {
            panic!("expected a String Value");
        };
        assert!(string.block);
        assert_eq!(string.value, "dedented");
    }

    #[test]
    fn it_rejects_a_missing_value() {
        let err = Parser::new("{ field(id: ) }").parse().unwrap_err();
        assert_eq!(err.message(), "expected a Value, got `)`");
    }

    #[test]
    fn it_rejects_an_unterminated_list_value() {
        let err = Parser::new("{ field(id: [1, 2) }").parse().unwrap_err();
        assert_eq!(err.message(), "expected a Value, got `)`");

        let err = Parser::new("{ field(id: [1, 2").parse().unwrap_err();
        assert_eq!(err.message(), "expected `]`, got EOF");
    }
}
