//! Enum metadata.

use std::any::Any;
use std::borrow::Cow;

use super::entity::Entity;
use super::types::TypeIdentity;
use crate::attribute::{Attribute, Attributes};
use crate::sequence::Sequence;

/// Description of one registered enum: its values in declaration order.
#[derive(Debug, Clone)]
pub struct EnumMetadata {
    identity: TypeIdentity,
    attributes: Attributes,
    values: Sequence<Entity>,
}

impl EnumMetadata {
    /// Create empty metadata for enum `E`.
    pub fn new<E: Any>() -> Self {
        Self {
            identity: TypeIdentity::of::<E>(),
            attributes: Attributes::new(),
            values: Sequence::empty(),
        }
    }

    /// Create empty metadata for enum `E`, reported under `name`.
    pub fn named<E: Any>(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            identity: TypeIdentity::named::<E>(name),
            attributes: Attributes::new(),
            values: Sequence::empty(),
        }
    }

    /// Append a value.
    pub fn with_value<E: Any + Send + Sync>(
        self,
        name: impl Into<String>,
        value: E,
        discriminant: i64,
    ) -> Self {
        self.with_value_entity(Entity::enum_value(name, value, discriminant))
    }

    /// Append a prebuilt value entity, e.g. one carrying attributes.
    pub fn with_value_entity(mut self, entity: Entity) -> Self {
        self.values.push(entity);
        self
    }

    /// Attach an enum-level attribute tag.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.insert(attribute);
        self
    }

    /// Type identity of the enum.
    pub fn identity(&self) -> &TypeIdentity {
        &self.identity
    }

    /// Display name of the enum.
    pub fn name(&self) -> &str {
        self.identity.name()
    }

    /// Enum-level attribute tags.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Check if an enum-level attribute tag is present.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.has(name)
    }

    /// Values in declaration order.
    pub fn values(&self) -> &Sequence<Entity> {
        &self.values
    }

    /// Value entity by name.
    pub fn value(&self, name: &str) -> Option<&Entity> {
        self.values.iter().find(|v| v.name() == name)
    }

    /// Name of `value`.
    pub fn name_of<E: Any + PartialEq>(&self, value: &E) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.payload::<E>() == Some(value))
            .map(|v| v.name())
    }

    /// Discriminant of `value`.
    pub fn discriminant_of<E: Any + PartialEq>(&self, value: &E) -> Option<i64> {
        self.values
            .iter()
            .find(|v| v.payload::<E>() == Some(value))
            .and_then(|v| v.discriminant())
    }

    /// Value with the given name.
    pub fn from_name<E: Any + Clone>(&self, name: &str) -> Option<E> {
        self.value(name).and_then(|v| v.payload::<E>()).cloned()
    }

    /// Value with the given discriminant.
    pub fn from_discriminant<E: Any + Clone>(&self, discriminant: i64) -> Option<E> {
        self.values
            .iter()
            .find(|v| v.discriminant() == Some(discriminant))
            .and_then(|v| v.payload::<E>())
            .cloned()
    }
}
