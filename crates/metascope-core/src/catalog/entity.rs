//! Entity definitions.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::accessor::{FieldAccessor, MemberAccess};
use super::types::TypeIdentity;
use crate::attribute::{Attribute, Attributes};
use crate::kind::EntityKind;

/// One declared member of a class, one base class relationship, or one enum value.
///
/// The kind is fixed at construction. Entities are built through the
/// per-kind constructors, which guarantee that variables and base classes
/// carry an accessor and that callables carry their function value.
#[derive(Clone)]
pub struct Entity {
    name: String,
    kind: EntityKind,
    declared_type: TypeIdentity,
    accessor: Option<Arc<dyn MemberAccess>>,
    payload: Option<Arc<dyn Any + Send + Sync>>,
    discriminant: Option<i64>,
    attributes: Attributes,
}

impl Entity {
    fn bare(name: impl Into<String>, kind: EntityKind, declared_type: TypeIdentity) -> Self {
        Self {
            name: name.into(),
            kind,
            declared_type,
            accessor: None,
            payload: None,
            discriminant: None,
            attributes: Attributes::new(),
        }
    }

    /// A data member of class `C` with type `F`.
    pub fn member_variable<C: Any, F: Any>(
        name: impl Into<String>,
        accessor: FieldAccessor<C, F>,
    ) -> Self {
        let mut entity = Self::bare(name, EntityKind::MemberVariable, TypeIdentity::of::<F>());
        entity.accessor = Some(Arc::new(accessor));
        entity
    }

    /// A member function. `function` is the function pointer itself, e.g.
    /// `MyClass::area as fn(&MyClass) -> f64`.
    pub fn member_function<F: Any + Send + Sync>(name: impl Into<String>, function: F) -> Self {
        let mut entity = Self::bare(name, EntityKind::MemberFunction, TypeIdentity::of::<F>());
        entity.payload = Some(Arc::new(function));
        entity
    }

    /// A constructor. A zero-argument constructor of `T` has type `fn() -> T`.
    pub fn constructor<F: Any + Send + Sync>(name: impl Into<String>, function: F) -> Self {
        let mut entity = Self::bare(name, EntityKind::Constructor, TypeIdentity::of::<F>());
        entity.payload = Some(Arc::new(function));
        entity
    }

    /// An enum type declared inside the class.
    pub fn member_enum<E: ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self::bare(name, EntityKind::MemberEnum, TypeIdentity::of::<E>())
    }

    /// A class type declared inside the class.
    pub fn member_class<N: ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self::bare(name, EntityKind::MemberClass, TypeIdentity::of::<N>())
    }

    /// A base class `B` of `C`, reached through `accessor`.
    ///
    /// The entity is named after the base type; use
    /// [`with_type_name`](Self::with_type_name) to report a source spelling.
    pub fn base_class<C: Any, B: Any>(accessor: FieldAccessor<C, B>) -> Self {
        let identity = TypeIdentity::of::<B>();
        let mut entity = Self::bare(identity.name().to_string(), EntityKind::BaseClass, identity);
        entity.accessor = Some(Arc::new(accessor));
        entity
    }

    /// One value of enum `E`.
    pub fn enum_value<E: Any + Send + Sync>(
        name: impl Into<String>,
        value: E,
        discriminant: i64,
    ) -> Self {
        let mut entity = Self::bare(name, EntityKind::EnumValue, TypeIdentity::of::<E>());
        entity.payload = Some(Arc::new(value));
        entity.discriminant = Some(discriminant);
        entity
    }

    /// Report the declared type under `name`.
    ///
    /// Base classes are named after their type, so for them the entity name
    /// changes too.
    pub fn with_type_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        if self.kind == EntityKind::BaseClass {
            self.name = name.to_string();
        }
        self.declared_type.rename(name);
        self
    }

    /// Attach an attribute tag.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.insert(attribute);
        self
    }

    /// Entity name. For base classes this is the base type's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entity kind.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Declared type.
    pub fn declared_type(&self) -> &TypeIdentity {
        &self.declared_type
    }

    /// Attribute tags.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Check if an attribute tag is present.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.has(name)
    }

    /// Accessor, for member variables and base classes.
    pub fn accessor(&self) -> Option<&dyn MemberAccess> {
        self.accessor.as_deref()
    }

    /// Enum discriminant, for enum values.
    pub fn discriminant(&self) -> Option<i64> {
        self.discriminant
    }

    /// Check if this is a member variable.
    pub fn is_variable(&self) -> bool {
        self.kind == EntityKind::MemberVariable
    }

    /// Borrow this entity's live value from `instance`.
    pub fn value<'a>(&self, instance: &'a dyn Any) -> Option<&'a dyn Any> {
        self.accessor.as_ref()?.get(instance)
    }

    /// Mutably borrow this entity's live value from `instance`.
    pub fn value_mut<'a>(&self, instance: &'a mut dyn Any) -> Option<&'a mut dyn Any> {
        self.accessor.as_ref()?.get_mut(instance)
    }

    /// The stored function pointer or enum constant, if it has type `F`.
    pub fn payload<F: Any>(&self) -> Option<&F> {
        self.payload.as_deref()?.downcast_ref::<F>()
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("declared_type", &self.declared_type.name())
            .field("has_accessor", &self.accessor.is_some())
            .field("discriminant", &self.discriminant)
            .field("attributes", &self.attributes)
            .finish()
    }
}
