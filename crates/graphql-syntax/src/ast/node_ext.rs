use std::num::{ParseFloatError, ParseIntError};

use crate::ast;

impl<'a> ast::Definition<'a> {
    /// Return the name of this definition, if any. Operation definitions may
    /// be anonymous, and schema definitions/extensions are always unnamed.
    pub fn name(&self) -> Option<&ast::Name<'a>> {
        match self {
            Self::OperationDefinition(it) => it.name.as_ref(),
            Self::FragmentDefinition(it) => Some(&it.name),
            Self::DirectiveDefinition(it) => Some(&it.name),
            Self::SchemaDefinition(_) => None,
            Self::ScalarTypeDefinition(it) => Some(&it.name),
            Self::ObjectTypeDefinition(it) => Some(&it.name),
            Self::InterfaceTypeDefinition(it) => Some(&it.name),
            Self::UnionTypeDefinition(it) => Some(&it.name),
            Self::EnumTypeDefinition(it) => Some(&it.name),
            Self::InputObjectTypeDefinition(it) => Some(&it.name),
            Self::SchemaExtension(_) => None,
            Self::ScalarTypeExtension(it) => Some(&it.name),
            Self::ObjectTypeExtension(it) => Some(&it.name),
            Self::InterfaceTypeExtension(it) => Some(&it.name),
            Self::UnionTypeExtension(it) => Some(&it.name),
            Self::EnumTypeExtension(it) => Some(&it.name),
            Self::InputObjectTypeExtension(it) => Some(&it.name),
        }
    }

    pub fn is_executable_definition(&self) -> bool {
        matches!(
            self,
            Self::OperationDefinition(_) | Self::FragmentDefinition(_)
        )
    }

    pub fn is_extension_definition(&self) -> bool {
        matches!(
            self,
            Self::SchemaExtension(_)
                | Self::ScalarTypeExtension(_)
                | Self::ObjectTypeExtension(_)
                | Self::InterfaceTypeExtension(_)
                | Self::UnionTypeExtension(_)
                | Self::EnumTypeExtension(_)
                | Self::InputObjectTypeExtension(_)
        )
    }
}

impl<'a> ast::Type<'a> {
    /// The named type at the core of this type, however deeply wrapped in
    /// list and non-null types.
    pub fn inner_named_type(&self) -> &ast::NamedType<'a> {
        match self {
            ast::Type::Named(named) => named,
            ast::Type::List(list) => list.ty.inner_named_type(),
            ast::Type::NonNull(non_null) => non_null.ty.inner_named_type(),
        }
    }
}

impl ast::StringValue<'_> {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl ast::Description<'_> {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl From<&'_ ast::StringValue<'_>> for String {
    fn from(value: &'_ ast::StringValue<'_>) -> Self {
        value.value.clone().into_owned()
    }
}

impl TryFrom<&'_ ast::IntValue<'_>> for i32 {
    type Error = ParseIntError;

    fn try_from(value: &'_ ast::IntValue<'_>) -> Result<Self, Self::Error> {
        value.value.parse()
    }
}

impl TryFrom<&'_ ast::IntValue<'_>> for i64 {
    type Error = ParseIntError;

    fn try_from(value: &'_ ast::IntValue<'_>) -> Result<Self, Self::Error> {
        value.value.parse()
    }
}

/// Integer syntax that overflows the integer types is still usable where the
/// expected GraphQL type is Float.
impl TryFrom<&'_ ast::IntValue<'_>> for f64 {
    type Error = ParseFloatError;

    fn try_from(value: &'_ ast::IntValue<'_>) -> Result<Self, Self::Error> {
        value.value.parse()
    }
}

impl TryFrom<&'_ ast::FloatValue<'_>> for f64 {
    type Error = ParseFloatError;

    fn try_from(value: &'_ ast::FloatValue<'_>) -> Result<Self, Self::Error> {
        value.value.parse()
    }
}
