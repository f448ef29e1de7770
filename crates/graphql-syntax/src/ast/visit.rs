//! Pre-order traversal over a parsed [`Document`].
//!
//! Printers and other read-only consumers implement [`Visitor`] and call
//! [`visit`]; the traversal carries a [`VisitContext`] with the stack of
//! ancestor nodes, so a visitor can ask where in the tree it currently is
//! without keeping its own bookkeeping.

use crate::ast::*;
use crate::location::Span;

/// A shared reference to any node in the tree.
#[derive(Copy, Clone, Debug)]
pub enum NodeRef<'v, 'a> {
    Name(&'v Name<'a>),
    Comment(&'v Comment<'a>),
    Description(&'v Description<'a>),
    Document(&'v Document<'a>),
    OperationDefinition(&'v OperationDefinition<'a>),
    FragmentDefinition(&'v FragmentDefinition<'a>),
    SelectionSet(&'v SelectionSet<'a>),
    Field(&'v Field<'a>),
    Alias(&'v Alias<'a>),
    FragmentSpread(&'v FragmentSpread<'a>),
    InlineFragment(&'v InlineFragment<'a>),
    TypeCondition(&'v TypeCondition<'a>),
    Arguments(&'v Arguments<'a>),
    Argument(&'v Argument<'a>),
    VariablesDefinition(&'v VariablesDefinition<'a>),
    VariableDefinition(&'v VariableDefinition<'a>),
    Variable(&'v Variable<'a>),
    NamedType(&'v NamedType<'a>),
    ListType(&'v ListType<'a>),
    NonNullType(&'v NonNullType<'a>),
    IntValue(&'v IntValue<'a>),
    FloatValue(&'v FloatValue<'a>),
    StringValue(&'v StringValue<'a>),
    BooleanValue(&'v BooleanValue<'a>),
    NullValue(&'v NullValue<'a>),
    EnumValue(&'v EnumValue<'a>),
    ListValue(&'v ListValue<'a>),
    ObjectValue(&'v ObjectValue<'a>),
    ObjectField(&'v ObjectField<'a>),
    Directives(&'v Directives<'a>),
    Directive(&'v Directive<'a>),
    DirectiveDefinition(&'v DirectiveDefinition<'a>),
    DirectiveLocations(&'v DirectiveLocations),
    SchemaDefinition(&'v SchemaDefinition<'a>),
    RootOperationTypeDefinition(&'v RootOperationTypeDefinition<'a>),
    ScalarTypeDefinition(&'v ScalarTypeDefinition<'a>),
    ObjectTypeDefinition(&'v ObjectTypeDefinition<'a>),
    InterfaceTypeDefinition(&'v InterfaceTypeDefinition<'a>),
    UnionTypeDefinition(&'v UnionTypeDefinition<'a>),
    EnumTypeDefinition(&'v EnumTypeDefinition<'a>),
    EnumValuesDefinition(&'v EnumValuesDefinition<'a>),
    EnumValueDefinition(&'v EnumValueDefinition<'a>),
    InputObjectTypeDefinition(&'v InputObjectTypeDefinition<'a>),
    FieldsDefinition(&'v FieldsDefinition<'a>),
    FieldDefinition(&'v FieldDefinition<'a>),
    ArgumentsDefinition(&'v ArgumentsDefinition<'a>),
    InputValueDefinition(&'v InputValueDefinition<'a>),
    InputFieldsDefinition(&'v InputFieldsDefinition<'a>),
    UnionMemberTypes(&'v UnionMemberTypes<'a>),
    ImplementsInterfaces(&'v ImplementsInterfaces<'a>),
    SchemaExtension(&'v SchemaExtension<'a>),
    ScalarTypeExtension(&'v ScalarTypeExtension<'a>),
    ObjectTypeExtension(&'v ObjectTypeExtension<'a>),
    InterfaceTypeExtension(&'v InterfaceTypeExtension<'a>),
    UnionTypeExtension(&'v UnionTypeExtension<'a>),
    EnumTypeExtension(&'v EnumTypeExtension<'a>),
    InputObjectTypeExtension(&'v InputObjectTypeExtension<'a>),
}

/// Traversal state handed to every [`Visitor`] hook.
#[derive(Debug, Default)]
pub struct VisitContext<'v, 'a> {
    ancestors: Vec<NodeRef<'v, 'a>>,
}

impl<'v, 'a> VisitContext<'v, 'a> {
    /// The node whose children are being visited.
    pub fn parent(&self) -> Option<&NodeRef<'v, 'a>> {
        self.ancestors.last()
    }

    /// All ancestors of the current node, outermost first.
    pub fn ancestors(&self) -> &[NodeRef<'v, 'a>] {
        &self.ancestors
    }

    /// How many ancestors the current node has; 0 for the document.
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }
}

/// Read-only hooks called during [`visit`]. Both default to no-ops.
pub trait Visitor<'v, 'a> {
    fn enter(&mut self, node: NodeRef<'v, 'a>, ctx: &VisitContext<'v, 'a>) {
        let _ = (node, ctx);
    }

    fn leave(&mut self, node: NodeRef<'v, 'a>, ctx: &VisitContext<'v, 'a>) {
        let _ = (node, ctx);
    }
}

/// Walk `document` in pre-order, calling `enter` before a node's children and
/// `leave` after them.
pub fn visit<'v, 'a, V: Visitor<'v, 'a>>(document: &'v Document<'a>, visitor: &mut V) {
    let mut ctx = VisitContext {
        ancestors: Vec::new(),
    };
    walk(NodeRef::Document(document), visitor, &mut ctx);
}

fn walk<'v, 'a, V: Visitor<'v, 'a>>(
    node: NodeRef<'v, 'a>,
    visitor: &mut V,
    ctx: &mut VisitContext<'v, 'a>,
) {
    visitor.enter(node, ctx);
    ctx.ancestors.push(node);
    for child in node.children() {
        walk(child, visitor, ctx);
    }
    ctx.ancestors.pop();
    visitor.leave(node, ctx);
}

impl<'v, 'a> NodeRef<'v, 'a> {
    /// The discriminator for this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Name(_) => NodeKind::Name,
            NodeRef::Comment(_) => NodeKind::Comment,
            NodeRef::Description(_) => NodeKind::Description,
            NodeRef::Document(_) => NodeKind::Document,
            NodeRef::OperationDefinition(_) => NodeKind::OperationDefinition,
            NodeRef::FragmentDefinition(_) => NodeKind::FragmentDefinition,
            NodeRef::SelectionSet(_) => NodeKind::SelectionSet,
            NodeRef::Field(_) => NodeKind::Field,
            NodeRef::Alias(_) => NodeKind::Alias,
            NodeRef::FragmentSpread(_) => NodeKind::FragmentSpread,
            NodeRef::InlineFragment(_) => NodeKind::InlineFragment,
            NodeRef::TypeCondition(_) => NodeKind::TypeCondition,
            NodeRef::Arguments(_) => NodeKind::Arguments,
            NodeRef::Argument(_) => NodeKind::Argument,
            NodeRef::VariablesDefinition(_) => NodeKind::VariablesDefinition,
            NodeRef::VariableDefinition(_) => NodeKind::VariableDefinition,
            NodeRef::Variable(_) => NodeKind::Variable,
            NodeRef::NamedType(_) => NodeKind::NamedType,
            NodeRef::ListType(_) => NodeKind::ListType,
            NodeRef::NonNullType(_) => NodeKind::NonNullType,
            NodeRef::IntValue(_) => NodeKind::IntValue,
            NodeRef::FloatValue(_) => NodeKind::FloatValue,
            NodeRef::StringValue(_) => NodeKind::StringValue,
            NodeRef::BooleanValue(_) => NodeKind::BooleanValue,
            NodeRef::NullValue(_) => NodeKind::NullValue,
            NodeRef::EnumValue(_) => NodeKind::EnumValue,
            NodeRef::ListValue(_) => NodeKind::ListValue,
            NodeRef::ObjectValue(_) => NodeKind::ObjectValue,
            NodeRef::ObjectField(_) => NodeKind::ObjectField,
            NodeRef::Directives(_) => NodeKind::Directives,
            NodeRef::Directive(_) => NodeKind::Directive,
            NodeRef::DirectiveDefinition(_) => NodeKind::DirectiveDefinition,
            NodeRef::DirectiveLocations(_) => NodeKind::DirectiveLocations,
            NodeRef::SchemaDefinition(_) => NodeKind::SchemaDefinition,
            NodeRef::RootOperationTypeDefinition(_) => NodeKind::RootOperationTypeDefinition,
            NodeRef::ScalarTypeDefinition(_) => NodeKind::ScalarTypeDefinition,
            NodeRef::ObjectTypeDefinition(_) => NodeKind::ObjectTypeDefinition,
            NodeRef::InterfaceTypeDefinition(_) => NodeKind::InterfaceTypeDefinition,
            NodeRef::UnionTypeDefinition(_) => NodeKind::UnionTypeDefinition,
            NodeRef::EnumTypeDefinition(_) => NodeKind::EnumTypeDefinition,
            NodeRef::EnumValuesDefinition(_) => NodeKind::EnumValuesDefinition,
            NodeRef::EnumValueDefinition(_) => NodeKind::EnumValueDefinition,
            NodeRef::InputObjectTypeDefinition(_) => NodeKind::InputObjectTypeDefinition,
            NodeRef::FieldsDefinition(_) => NodeKind::FieldsDefinition,
            NodeRef::FieldDefinition(_) => NodeKind::FieldDefinition,
            NodeRef::ArgumentsDefinition(_) => NodeKind::ArgumentsDefinition,
            NodeRef::InputValueDefinition(_) => NodeKind::InputValueDefinition,
            NodeRef::InputFieldsDefinition(_) => NodeKind::InputFieldsDefinition,
            NodeRef::UnionMemberTypes(_) => NodeKind::UnionMemberTypes,
            NodeRef::ImplementsInterfaces(_) => NodeKind::ImplementsInterfaces,
            NodeRef::SchemaExtension(_) => NodeKind::SchemaExtension,
            NodeRef::ScalarTypeExtension(_) => NodeKind::ScalarTypeExtension,
            NodeRef::ObjectTypeExtension(_) => NodeKind::ObjectTypeExtension,
            NodeRef::InterfaceTypeExtension(_) => NodeKind::InterfaceTypeExtension,
            NodeRef::UnionTypeExtension(_) => NodeKind::UnionTypeExtension,
            NodeRef::EnumTypeExtension(_) => NodeKind::EnumTypeExtension,
            NodeRef::InputObjectTypeExtension(_) => NodeKind::InputObjectTypeExtension,
        }
    }

    /// This node's source span, if locations were recorded.
    pub fn span(&self) -> Option<Span> {
        match self {
            NodeRef::Name(it) => it.span,
            NodeRef::Comment(it) => it.span,
            NodeRef::Description(it) => it.span,
            NodeRef::Document(it) => it.span,
            NodeRef::OperationDefinition(it) => it.span,
            NodeRef::FragmentDefinition(it) => it.span,
            NodeRef::SelectionSet(it) => it.span,
            NodeRef::Field(it) => it.span,
            NodeRef::Alias(it) => it.span,
            NodeRef::FragmentSpread(it) => it.span,
            NodeRef::InlineFragment(it) => it.span,
            NodeRef::TypeCondition(it) => it.span,
            NodeRef::Arguments(it) => it.span,
            NodeRef::Argument(it) => it.span,
            NodeRef::VariablesDefinition(it) => it.span,
            NodeRef::VariableDefinition(it) => it.span,
            NodeRef::Variable(it) => it.span,
            NodeRef::NamedType(it) => it.span,
            NodeRef::ListType(it) => it.span,
            NodeRef::NonNullType(it) => it.span,
            NodeRef::IntValue(it) => it.span,
            NodeRef::FloatValue(it) => it.span,
            NodeRef::StringValue(it) => it.span,
            NodeRef::BooleanValue(it) => it.span,
            NodeRef::NullValue(it) => it.span,
            NodeRef::EnumValue(it) => it.span,
            NodeRef::ListValue(it) => it.span,
            NodeRef::ObjectValue(it) => it.span,
            NodeRef::ObjectField(it) => it.span,
            NodeRef::Directives(it) => it.span,
            NodeRef::Directive(it) => it.span,
            NodeRef::DirectiveDefinition(it) => it.span,
            NodeRef::DirectiveLocations(it) => it.span,
            NodeRef::SchemaDefinition(it) => it.span,
            NodeRef::RootOperationTypeDefinition(it) => it.span,
            NodeRef::ScalarTypeDefinition(it) => it.span,
            NodeRef::ObjectTypeDefinition(it) => it.span,
            NodeRef::InterfaceTypeDefinition(it) => it.span,
            NodeRef::UnionTypeDefinition(it) => it.span,
            NodeRef::EnumTypeDefinition(it) => it.span,
            NodeRef::EnumValuesDefinition(it) => it.span,
            NodeRef::EnumValueDefinition(it) => it.span,
            NodeRef::InputObjectTypeDefinition(it) => it.span,
            NodeRef::FieldsDefinition(it) => it.span,
            NodeRef::FieldDefinition(it) => it.span,
            NodeRef::ArgumentsDefinition(it) => it.span,
            NodeRef::InputValueDefinition(it) => it.span,
            NodeRef::InputFieldsDefinition(it) => it.span,
            NodeRef::UnionMemberTypes(it) => it.span,
            NodeRef::ImplementsInterfaces(it) => it.span,
            NodeRef::SchemaExtension(it) => it.span,
            NodeRef::ScalarTypeExtension(it) => it.span,
            NodeRef::ObjectTypeExtension(it) => it.span,
            NodeRef::InterfaceTypeExtension(it) => it.span,
            NodeRef::UnionTypeExtension(it) => it.span,
            NodeRef::EnumTypeExtension(it) => it.span,
            NodeRef::InputObjectTypeExtension(it) => it.span,
        }
    }

    /// The node's children in source order. Claimed comments and descriptions
    /// come first, so a printer replaying the tree sees them before the node
    /// content they belong to.
    fn children(&self) -> Vec<NodeRef<'v, 'a>> {
        let mut out = Vec::new();
        match self {
            NodeRef::Name(_) | NodeRef::Comment(_) | NodeRef::Description(_) => {}
            NodeRef::Document(it) => {
                out.extend(it.definitions.iter().map(definition_ref));
                out.extend(it.unattached_comments.iter().map(NodeRef::Comment));
            }
            NodeRef::OperationDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.name.iter().map(NodeRef::Name));
                out.extend(it.variables.iter().map(NodeRef::VariablesDefinition));
                out.extend(it.directives.iter().map(NodeRef::Directives));
                out.push(NodeRef::SelectionSet(&it.selection_set));
            }
            NodeRef::FragmentDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(NodeRef::Name(&it.name));
                out.push(NodeRef::TypeCondition(&it.type_condition));
                out.extend(it.directives.iter().map(NodeRef::Directives));
                out.push(NodeRef::SelectionSet(&it.selection_set));
            }
            NodeRef::SelectionSet(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.selections.iter().map(selection_ref));
            }
            NodeRef::Field(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.alias.iter().map(NodeRef::Alias));
                out.push(NodeRef::Name(&it.name));
                out.extend(it.arguments.iter().map(NodeRef::Arguments));
                out.extend(it.directives.iter().map(NodeRef::Directives));
                out.extend(it.selection_set.iter().map(NodeRef::SelectionSet));
            }
            NodeRef::Alias(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(NodeRef::Name(&it.name));
            }
            NodeRef::FragmentSpread(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(NodeRef::Name(&it.name));
                out.extend(it.directives.iter().map(NodeRef::Directives));
            }
            NodeRef::InlineFragment(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.type_condition.iter().map(NodeRef::TypeCondition));
                out.extend(it.directives.iter().map(NodeRef::Directives));
                out.push(NodeRef::SelectionSet(&it.selection_set));
            }
            NodeRef::TypeCondition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(NodeRef::NamedType(&it.ty));
            }
            NodeRef::Arguments(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.items.iter().map(NodeRef::Argument));
            }
            NodeRef::Argument(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(NodeRef::Name(&it.name));
                out.push(value_ref(&it.value));
            }
            NodeRef::VariablesDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.items.iter().map(NodeRef::VariableDefinition));
            }
            NodeRef::VariableDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(NodeRef::Variable(&it.variable));
                out.push(type_ref(&it.ty));
                out.extend(it.default_value.iter().map(value_ref));
                out.extend(it.directives.iter().map(NodeRef::Directives));
            }
            NodeRef::Variable(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(NodeRef::Name(&it.name));
            }
            NodeRef::NamedType(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(NodeRef::Name(&it.name));
            }
            NodeRef::ListType(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(type_ref(&it.ty));
            }
            NodeRef::NonNullType(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(type_ref(&it.ty));
            }
            NodeRef::IntValue(it) => out.extend(it.comment.iter().map(NodeRef::Comment)),
            NodeRef::FloatValue(it) => out.extend(it.comment.iter().map(NodeRef::Comment)),
            NodeRef::StringValue(it) => out.extend(it.comment.iter().map(NodeRef::Comment)),
            NodeRef::BooleanValue(it) => out.extend(it.comment.iter().map(NodeRef::Comment)),
            NodeRef::NullValue(it) => out.extend(it.comment.iter().map(NodeRef::Comment)),
            NodeRef::EnumValue(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(NodeRef::Name(&it.name));
            }
            NodeRef::ListValue(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.values.iter().map(value_ref));
            }
            NodeRef::ObjectValue(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.fields.iter().map(NodeRef::ObjectField));
            }
            NodeRef::ObjectField(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(NodeRef::Name(&it.name));
                out.push(value_ref(&it.value));
            }
            NodeRef::Directives(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.items.iter().map(NodeRef::Directive));
            }
            NodeRef::Directive(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(NodeRef::Name(&it.name));
                out.extend(it.arguments.iter().map(NodeRef::Arguments));
            }
            NodeRef::DirectiveDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.description.iter().map(NodeRef::Description));
                out.push(NodeRef::Name(&it.name));
                out.extend(it.arguments.iter().map(NodeRef::ArgumentsDefinition));
                out.push(NodeRef::DirectiveLocations(&it.locations));
            }
            NodeRef::DirectiveLocations(_) => {}
            NodeRef::SchemaDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.description.iter().map(NodeRef::Description));
                out.extend(it.directives.iter().map(NodeRef::Directives));
                out.extend(
                    it.root_operation_types
                        .iter()
                        .map(NodeRef::RootOperationTypeDefinition),
                );
            }
            NodeRef::RootOperationTypeDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(NodeRef::NamedType(&it.named_type));
            }
            NodeRef::ScalarTypeDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.description.iter().map(NodeRef::Description));
                out.push(NodeRef::Name(&it.name));
                out.extend(it.directives.iter().map(NodeRef::Directives));
            }
            NodeRef::ObjectTypeDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.description.iter().map(NodeRef::Description));
                out.push(NodeRef::Name(&it.name));
                out.extend(
                    it.implements_interfaces
                        .iter()
                        .map(NodeRef::ImplementsInterfaces),
                );
                out.extend(it.directives.iter().map(NodeRef::Directives));
                out.extend(it.fields.iter().map(NodeRef::FieldsDefinition));
            }
            NodeRef::InterfaceTypeDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.description.iter().map(NodeRef::Description));
                out.push(NodeRef::Name(&it.name));
                out.extend(
                    it.implements_interfaces
                        .iter()
                        .map(NodeRef::ImplementsInterfaces),
                );
                out.extend(it.directives.iter().map(NodeRef::Directives));
                out.extend(it.fields.iter().map(NodeRef::FieldsDefinition));
            }
            NodeRef::UnionTypeDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.description.iter().map(NodeRef::Description));
                out.push(NodeRef::Name(&it.name));
                out.extend(it.directives.iter().map(NodeRef::Directives));
                out.extend(it.members.iter().map(NodeRef::UnionMemberTypes));
            }
            NodeRef::EnumTypeDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.description.iter().map(NodeRef::Description));
                out.push(NodeRef::Name(&it.name));
                out.extend(it.directives.iter().map(NodeRef::Directives));
                out.extend(it.values.iter().map(NodeRef::EnumValuesDefinition));
            }
            NodeRef::EnumValuesDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.items.iter().map(NodeRef::EnumValueDefinition));
            }
            NodeRef::EnumValueDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.description.iter().map(NodeRef::Description));
                out.push(NodeRef::EnumValue(&it.value));
                out.extend(it.directives.iter().map(NodeRef::Directives));
            }
            NodeRef::InputObjectTypeDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.description.iter().map(NodeRef::Description));
                out.push(NodeRef::Name(&it.name));
                out.extend(it.directives.iter().map(NodeRef::Directives));
                out.extend(it.fields.iter().map(NodeRef::InputFieldsDefinition));
            }
            NodeRef::FieldsDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.items.iter().map(NodeRef::FieldDefinition));
            }
            NodeRef::FieldDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.description.iter().map(NodeRef::Description));
                out.push(NodeRef::Name(&it.name));
                out.extend(it.arguments.iter().map(NodeRef::ArgumentsDefinition));
                out.push(type_ref(&it.ty));
                out.extend(it.directives.iter().map(NodeRef::Directives));
            }
            NodeRef::ArgumentsDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.items.iter().map(NodeRef::InputValueDefinition));
            }
            NodeRef::InputValueDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.description.iter().map(NodeRef::Description));
                out.push(NodeRef::Name(&it.name));
                out.push(type_ref(&it.ty));
                out.extend(it.default_value.iter().map(value_ref));
                out.extend(it.directives.iter().map(NodeRef::Directives));
            }
            NodeRef::InputFieldsDefinition(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.items.iter().map(NodeRef::InputValueDefinition));
            }
            NodeRef::UnionMemberTypes(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.items.iter().map(NodeRef::NamedType));
            }
            NodeRef::ImplementsInterfaces(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.items.iter().map(NodeRef::NamedType));
            }
            NodeRef::SchemaExtension(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.extend(it.directives.iter().map(NodeRef::Directives));
                out.extend(
                    it.root_operation_types
                        .iter()
                        .map(NodeRef::RootOperationTypeDefinition),
                );
            }
            NodeRef::ScalarTypeExtension(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(NodeRef::Name(&it.name));
                out.push(NodeRef::Directives(&it.directives));
            }
            NodeRef::ObjectTypeExtension(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(NodeRef::Name(&it.name));
                out.extend(
                    it.implements_interfaces
                        .iter()
                        .map(NodeRef::ImplementsInterfaces),
                );
                out.extend(it.directives.iter().map(NodeRef::Directives));
                out.extend(it.fields.iter().map(NodeRef::FieldsDefinition));
            }
            NodeRef::InterfaceTypeExtension(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(NodeRef::Name(&it.name));
                out.extend(
                    it.implements_interfaces
                        .iter()
                        .map(NodeRef::ImplementsInterfaces),
                );
                out.extend(it.directives.iter().map(NodeRef::Directives));
                out.extend(it.fields.iter().map(NodeRef::FieldsDefinition));
            }
            NodeRef::UnionTypeExtension(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(NodeRef::Name(&it.name));
                out.extend(it.directives.iter().map(NodeRef::Directives));
                out.extend(it.members.iter().map(NodeRef::UnionMemberTypes));
            }
            NodeRef::EnumTypeExtension(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(NodeRef::Name(&it.name));
                out.extend(it.directives.iter().map(NodeRef::Directives));
                out.extend(it.values.iter().map(NodeRef::EnumValuesDefinition));
            }
            NodeRef::InputObjectTypeExtension(it) => {
                out.extend(it.comment.iter().map(NodeRef::Comment));
                out.push(NodeRef::Name(&it.name));
                out.extend(it.directives.iter().map(NodeRef::Directives));
                out.extend(it.fields.iter().map(NodeRef::InputFieldsDefinition));
            }
        }
        out
    }
}

fn definition_ref<'v, 'a>(definition: &'v Definition<'a>) -> NodeRef<'v, 'a> {
    match definition {
        Definition::OperationDefinition(it) => NodeRef::OperationDefinition(it),
        Definition::FragmentDefinition(it) => NodeRef::FragmentDefinition(it),
        Definition::DirectiveDefinition(it) => NodeRef::DirectiveDefinition(it),
        Definition::SchemaDefinition(it) => NodeRef::SchemaDefinition(it),
        Definition::ScalarTypeDefinition(it) => NodeRef::ScalarTypeDefinition(it),
        Definition::ObjectTypeDefinition(it) => NodeRef::ObjectTypeDefinition(it),
        Definition::InterfaceTypeDefinition(it) => NodeRef::InterfaceTypeDefinition(it),
        Definition::UnionTypeDefinition(it) => NodeRef::UnionTypeDefinition(it),
        Definition::EnumTypeDefinition(it) => NodeRef::EnumTypeDefinition(it),
        Definition::InputObjectTypeDefinition(it) => NodeRef::InputObjectTypeDefinition(it),
        Definition::SchemaExtension(it) => NodeRef::SchemaExtension(it),
        Definition::ScalarTypeExtension(it) => NodeRef::ScalarTypeExtension(it),
        Definition::ObjectTypeExtension(it) => NodeRef::ObjectTypeExtension(it),
        Definition::InterfaceTypeExtension(it) => NodeRef::InterfaceTypeExtension(it),
        Definition::UnionTypeExtension(it) => NodeRef::UnionTypeExtension(it),
        Definition::EnumTypeExtension(it) => NodeRef::EnumTypeExtension(it),
        Definition::InputObjectTypeExtension(it) => NodeRef::InputObjectTypeExtension(it),
    }
}

fn selection_ref<'v, 'a>(selection: &'v Selection<'a>) -> NodeRef<'v, 'a> {
    match selection {
        Selection::Field(it) => NodeRef::Field(it),
        Selection::FragmentSpread(it) => NodeRef::FragmentSpread(it),
        Selection::InlineFragment(it) => NodeRef::InlineFragment(it),
    }
}

fn type_ref<'v, 'a>(ty: &'v Type<'a>) -> NodeRef<'v, 'a> {
    match ty {
        Type::Named(it) => NodeRef::NamedType(it),
        Type::List(it) => NodeRef::ListType(it),
        Type::NonNull(it) => NodeRef::NonNullType(it),
    }
}

fn value_ref<'v, 'a>(value: &'v Value<'a>) -> NodeRef<'v, 'a> {
    match value {
        Value::Variable(it) => NodeRef::Variable(it),
        Value::Int(it) => NodeRef::IntValue(it),
        Value::Float(it) => NodeRef::FloatValue(it),
        Value::String(it) => NodeRef::StringValue(it),
        Value::Boolean(it) => NodeRef::BooleanValue(it),
        Value::Null(it) => NodeRef::NullValue(it),
        Value::Enum(it) => NodeRef::EnumValue(it),
        Value::List(it) => NodeRef::ListValue(it),
        Value::Object(it) => NodeRef::ObjectValue(it),
    }
}
