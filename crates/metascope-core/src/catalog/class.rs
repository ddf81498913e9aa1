//! Class metadata.

use std::any::Any;
use std::borrow::Cow;

use super::accessor::FieldAccessor;
use super::entity::Entity;
use super::types::TypeIdentity;
use crate::attribute::{Attribute, Attributes};
use crate::kind::EntityKind;
use crate::sequence::Sequence;

/// Structural description of one registered class.
///
/// `base_classes` keeps the inheritance-list order and `members` keeps source
/// declaration order (nested enums and classes, variables, and functions
/// interleaved as declared). Once registered in a
/// [`Catalog`](super::Catalog) the metadata is never mutated.
#[derive(Debug, Clone)]
pub struct ClassMetadata {
    identity: TypeIdentity,
    namespace: Option<String>,
    attributes: Attributes,
    base_classes: Sequence<Entity>,
    members: Sequence<Entity>,
}

impl ClassMetadata {
    /// Create empty metadata for `T`.
    pub fn new<T: Any>() -> Self {
        Self::from_identity(TypeIdentity::of::<T>())
    }

    /// Create empty metadata for `T`, reported under `name`.
    pub fn named<T: Any>(name: impl Into<Cow<'static, str>>) -> Self {
        Self::from_identity(TypeIdentity::named::<T>(name))
    }

    fn from_identity(identity: TypeIdentity) -> Self {
        Self {
            identity,
            namespace: None,
            attributes: Attributes::new(),
            base_classes: Sequence::empty(),
            members: Sequence::empty(),
        }
    }

    /// Set the enclosing namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Attach a class-level attribute tag.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.insert(attribute);
        self
    }

    /// Append a base class, reached through `accessor`.
    pub fn with_base<C: Any, B: Any>(mut self, accessor: FieldAccessor<C, B>) -> Self {
        self.base_classes.push(Entity::base_class(accessor));
        self
    }

    /// Append a base class reported under `name`.
    pub fn with_base_named<C: Any, B: Any>(
        mut self,
        name: impl Into<Cow<'static, str>>,
        accessor: FieldAccessor<C, B>,
    ) -> Self {
        self.base_classes
            .push(Entity::base_class(accessor).with_type_name(name));
        self
    }

    /// Append a member in declaration order.
    pub fn with_member(mut self, entity: Entity) -> Self {
        self.members.push(entity);
        self
    }

    /// Append several members in declaration order.
    pub fn with_members(mut self, entities: impl IntoIterator<Item = Entity>) -> Self {
        for entity in entities {
            self.members.push(entity);
        }
        self
    }

    /// Type identity of the class.
    pub fn identity(&self) -> &TypeIdentity {
        &self.identity
    }

    /// Display name of the class.
    pub fn name(&self) -> &str {
        self.identity.name()
    }

    /// Enclosing namespace, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Name including the namespace.
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}::{}", self.identity.name()),
            None => self.identity.name().to_string(),
        }
    }

    /// Class-level attribute tags.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Check if a class-level attribute tag is present.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.has(name)
    }

    /// Base classes, in inheritance-list order.
    pub fn base_classes(&self) -> &Sequence<Entity> {
        &self.base_classes
    }

    /// Type identities of the base classes, in order.
    pub fn base_types(&self) -> Sequence<TypeIdentity> {
        self.base_classes
            .iter()
            .map(|b| b.declared_type().clone())
            .collect()
    }

    /// Direct members, in declaration order.
    pub fn members(&self) -> &Sequence<Entity> {
        &self.members
    }

    /// First member with the given name.
    pub fn member(&self, name: &str) -> Option<&Entity> {
        self.members.iter().find(|m| m.name() == name)
    }

    /// All members of one kind, in declaration order.
    pub fn members_of_kind(&self, kind: EntityKind) -> Sequence<Entity> {
        self.members.filter(|m| m.kind() == kind)
    }

    /// Member variables, in declaration order.
    pub fn member_variables(&self) -> Sequence<Entity> {
        self.members_of_kind(EntityKind::MemberVariable)
    }

    /// Member functions, in declaration order.
    pub fn member_functions(&self) -> Sequence<Entity> {
        self.members_of_kind(EntityKind::MemberFunction)
    }

    /// All callables sharing `name` (overload set).
    pub fn overloads(&self, name: &str) -> Sequence<Entity> {
        self.members
            .filter(|m| m.kind().is_callable() && m.name() == name)
    }
}
