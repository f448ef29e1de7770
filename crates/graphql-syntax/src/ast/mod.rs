//! # AST node model
//!
//! Owned data structures for documents matching the GraphQL grammar. The
//! [`Document`] exclusively owns its subtree; string payloads borrow from the
//! parsed source, so the source must outlive the document.
//!
//! Every node carries its source [`Span`] (`None` when the parser was
//! configured with `ignore_locations`) and the leading [`Comment`] cluster it
//! claimed during the parse (`None` when there was none, or with
//! `ignore_comments`).

mod node_ext;
pub mod visit;

use std::borrow::Cow;

use crate::location::Span;

pub use visit::{visit, NodeRef, VisitContext, Visitor};

/// An identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Name<'a> {
    pub span: Option<Span>,
    pub value: &'a str,
}

/// A contiguous run of `#` comment lines, joined with `\n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment<'a> {
    pub span: Option<Span>,
    pub text: Cow<'a, str>,
}

/// The description string preceding a type-system definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Description<'a> {
    pub span: Option<Span>,
    pub value: Cow<'a, str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Document<'a> {
    pub span: Option<Span>,
    pub definitions: Vec<Definition<'a>>,
    /// Comment clusters that no node claimed, in source order.
    pub unattached_comments: Vec<Comment<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'a> {
    OperationDefinition(OperationDefinition<'a>),
    FragmentDefinition(FragmentDefinition<'a>),
    DirectiveDefinition(DirectiveDefinition<'a>),
    SchemaDefinition(SchemaDefinition<'a>),
    ScalarTypeDefinition(ScalarTypeDefinition<'a>),
    ObjectTypeDefinition(ObjectTypeDefinition<'a>),
    InterfaceTypeDefinition(InterfaceTypeDefinition<'a>),
    UnionTypeDefinition(UnionTypeDefinition<'a>),
    EnumTypeDefinition(EnumTypeDefinition<'a>),
    InputObjectTypeDefinition(InputObjectTypeDefinition<'a>),
    SchemaExtension(SchemaExtension<'a>),
    ScalarTypeExtension(ScalarTypeExtension<'a>),
    ObjectTypeExtension(ObjectTypeExtension<'a>),
    InterfaceTypeExtension(InterfaceTypeExtension<'a>),
    UnionTypeExtension(UnionTypeExtension<'a>),
    EnumTypeExtension(EnumTypeExtension<'a>),
    InputObjectTypeExtension(InputObjectTypeExtension<'a>),
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    /// Get the name of this operation type as it appears in GraphQL source.
    pub fn name(self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name().fmt(f)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub operation: OperationType,
    /// `None` for the anonymous shorthand form.
    pub name: Option<Name<'a>>,
    pub variables: Option<VariablesDefinition<'a>>,
    pub directives: Option<Directives<'a>>,
    pub selection_set: SelectionSet<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub name: Name<'a>,
    pub type_condition: TypeCondition<'a>,
    pub directives: Option<Directives<'a>>,
    pub selection_set: SelectionSet<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub selections: Vec<Selection<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'a> {
    Field(Field<'a>),
    FragmentSpread(FragmentSpread<'a>),
    InlineFragment(InlineFragment<'a>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub alias: Option<Alias<'a>>,
    pub name: Name<'a>,
    pub arguments: Option<Arguments<'a>>,
    pub directives: Option<Directives<'a>>,
    pub selection_set: Option<SelectionSet<'a>>,
}

/// `Name :` in front of a field name.
#[derive(Clone, Debug, PartialEq)]
pub struct Alias<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub name: Name<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub name: Name<'a>,
    pub directives: Option<Directives<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub type_condition: Option<TypeCondition<'a>>,
    pub directives: Option<Directives<'a>>,
    pub selection_set: SelectionSet<'a>,
}

/// `on NamedType`.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeCondition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub ty: NamedType<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Arguments<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub items: Vec<Argument<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub name: Name<'a>,
    pub value: Value<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariablesDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub items: Vec<VariableDefinition<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub variable: Variable<'a>,
    pub ty: Type<'a>,
    pub default_value: Option<Value<'a>>,
    pub directives: Option<Directives<'a>>,
}

/// `$ Name`.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub name: Name<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Type<'a> {
    Named(NamedType<'a>),
    List(ListType<'a>),
    NonNull(NonNullType<'a>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedType<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub name: Name<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListType<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub ty: Box<Type<'a>>,
}

/// A `!`-wrapped type. The inner type is never itself a `NonNullType`; the
/// grammar has no way to produce one.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub ty: Box<Type<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value<'a> {
    Variable(Variable<'a>),
    Int(IntValue<'a>),
    Float(FloatValue<'a>),
    String(StringValue<'a>),
    Boolean(BooleanValue<'a>),
    Null(NullValue<'a>),
    Enum(EnumValue<'a>),
    List(ListValue<'a>),
    Object(ObjectValue<'a>),
}

/// An integer literal, kept as its source lexeme. Convert with
/// `i32::try_from(&value)` or `f64::try_from(&value)`.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub value: &'a str,
}

/// A float literal, kept as its source lexeme.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub value: &'a str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StringValue<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    /// The value after escape sequences are resolved, or the dedented value
    /// for a block string.
    pub value: Cow<'a, str>,
    /// Whether the literal was written in `"""` block form.
    pub block: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub value: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NullValue<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
}

/// *EnumValue*: Name but not `true`, `false` or `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub name: Name<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListValue<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub values: Vec<Value<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub fields: Vec<ObjectField<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub name: Name<'a>,
    pub value: Value<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Directives<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub items: Vec<Directive<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Directive<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub name: Name<'a>,
    pub arguments: Option<Arguments<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub description: Option<Description<'a>>,
    pub name: Name<'a>,
    pub arguments: Option<ArgumentsDefinition<'a>>,
    pub repeatable: bool,
    pub locations: DirectiveLocations,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveLocations {
    pub span: Option<Span>,
    pub items: Vec<DirectiveLocation>,
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    /// Get the name of this directive location as it would appear in GraphQL
    /// source code.
    pub fn name(self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    /// The directive location spelled `name`, if there is one.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "QUERY" => DirectiveLocation::Query,
            "MUTATION" => DirectiveLocation::Mutation,
            "SUBSCRIPTION" => DirectiveLocation::Subscription,
            "FIELD" => DirectiveLocation::Field,
            "FRAGMENT_DEFINITION" => DirectiveLocation::FragmentDefinition,
            "FRAGMENT_SPREAD" => DirectiveLocation::FragmentSpread,
            "INLINE_FRAGMENT" => DirectiveLocation::InlineFragment,
            "VARIABLE_DEFINITION" => DirectiveLocation::VariableDefinition,
            "SCHEMA" => DirectiveLocation::Schema,
            "SCALAR" => DirectiveLocation::Scalar,
            "OBJECT" => DirectiveLocation::Object,
            "FIELD_DEFINITION" => DirectiveLocation::FieldDefinition,
            "ARGUMENT_DEFINITION" => DirectiveLocation::ArgumentDefinition,
            "INTERFACE" => DirectiveLocation::Interface,
            "UNION" => DirectiveLocation::Union,
            "ENUM" => DirectiveLocation::Enum,
            "ENUM_VALUE" => DirectiveLocation::EnumValue,
            "INPUT_OBJECT" => DirectiveLocation::InputObject,
            "INPUT_FIELD_DEFINITION" => DirectiveLocation::InputFieldDefinition,
            _ => return None,
        })
    }
}

impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name().fmt(f)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub description: Option<Description<'a>>,
    pub directives: Option<Directives<'a>>,
    pub root_operation_types: Vec<RootOperationTypeDefinition<'a>>,
}

/// `query: Q` inside a schema definition. Not to be confused with
/// `OperationDefinition`.
#[derive(Clone, Debug, PartialEq)]
pub struct RootOperationTypeDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub operation: OperationType,
    pub named_type: NamedType<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub description: Option<Description<'a>>,
    pub name: Name<'a>,
    pub directives: Option<Directives<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub description: Option<Description<'a>>,
    pub name: Name<'a>,
    pub implements_interfaces: Option<ImplementsInterfaces<'a>>,
    pub directives: Option<Directives<'a>>,
    pub fields: Option<FieldsDefinition<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub description: Option<Description<'a>>,
    pub name: Name<'a>,
    pub implements_interfaces: Option<ImplementsInterfaces<'a>>,
    pub directives: Option<Directives<'a>>,
    pub fields: Option<FieldsDefinition<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub description: Option<Description<'a>>,
    pub name: Name<'a>,
    pub directives: Option<Directives<'a>>,
    pub members: Option<UnionMemberTypes<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub description: Option<Description<'a>>,
    pub name: Name<'a>,
    pub directives: Option<Directives<'a>>,
    pub values: Option<EnumValuesDefinition<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValuesDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub items: Vec<EnumValueDefinition<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub description: Option<Description<'a>>,
    pub value: EnumValue<'a>,
    pub directives: Option<Directives<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub description: Option<Description<'a>>,
    pub name: Name<'a>,
    pub directives: Option<Directives<'a>>,
    pub fields: Option<InputFieldsDefinition<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldsDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub items: Vec<FieldDefinition<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub description: Option<Description<'a>>,
    pub name: Name<'a>,
    pub arguments: Option<ArgumentsDefinition<'a>>,
    pub ty: Type<'a>,
    pub directives: Option<Directives<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentsDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub items: Vec<InputValueDefinition<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub description: Option<Description<'a>>,
    pub name: Name<'a>,
    pub ty: Type<'a>,
    pub default_value: Option<Value<'a>>,
    pub directives: Option<Directives<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputFieldsDefinition<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub items: Vec<InputValueDefinition<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionMemberTypes<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub items: Vec<NamedType<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImplementsInterfaces<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub items: Vec<NamedType<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SchemaExtension<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub directives: Option<Directives<'a>>,
    pub root_operation_types: Vec<RootOperationTypeDefinition<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeExtension<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub name: Name<'a>,
    pub directives: Directives<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeExtension<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub name: Name<'a>,
    pub implements_interfaces: Option<ImplementsInterfaces<'a>>,
    pub directives: Option<Directives<'a>>,
    pub fields: Option<FieldsDefinition<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeExtension<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub name: Name<'a>,
    pub implements_interfaces: Option<ImplementsInterfaces<'a>>,
    pub directives: Option<Directives<'a>>,
    pub fields: Option<FieldsDefinition<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeExtension<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub name: Name<'a>,
    pub directives: Option<Directives<'a>>,
    pub members: Option<UnionMemberTypes<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeExtension<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub name: Name<'a>,
    pub directives: Option<Directives<'a>>,
    pub values: Option<EnumValuesDefinition<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeExtension<'a> {
    pub span: Option<Span>,
    pub comment: Option<Comment<'a>>,
    pub name: Name<'a>,
    pub directives: Option<Directives<'a>>,
    pub fields: Option<InputFieldsDefinition<'a>>,
}

/// Flat discriminator over every node variant, exposed through
/// [`NodeRef::kind`].
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum NodeKind {
    Name,
    Comment,
    Description,
    Document,
    OperationDefinition,
    FragmentDefinition,
    SelectionSet,
    Field,
    Alias,
    FragmentSpread,
    InlineFragment,
    TypeCondition,
    Arguments,
    Argument,
    VariablesDefinition,
    VariableDefinition,
    Variable,
    NamedType,
    ListType,
    NonNullType,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Directives,
    Directive,
    DirectiveDefinition,
    DirectiveLocations,
    SchemaDefinition,
    RootOperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValuesDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    FieldsDefinition,
    FieldDefinition,
    ArgumentsDefinition,
    InputValueDefinition,
    InputFieldsDefinition,
    UnionMemberTypes,
    ImplementsInterfaces,
    SchemaExtension,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
}
