//! Type identities.

use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a Rust type plus the name it is reported under.
///
/// Equality and hashing consider only the [`TypeId`]; the display name is
/// informational. Generated metadata may override the name so that entities
/// are reported with their source spelling (`my_namespace::BaseClass`).
#[derive(Debug, Clone)]
pub struct TypeIdentity {
    id: TypeId,
    name: Cow<'static, str>,
}

impl TypeIdentity {
    /// Identity of `T`, named by [`std::any::type_name`].
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: Cow::Borrowed(std::any::type_name::<T>()),
        }
    }

    /// Identity of `T` under an explicit display name.
    pub fn named<T: ?Sized + 'static>(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: name.into(),
        }
    }

    /// The underlying type id.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if this identity denotes `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    pub(crate) fn rename(&mut self, name: impl Into<Cow<'static, str>>) {
        self.name = name.into();
    }
}

impl PartialEq for TypeIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeIdentity {}

impl Hash for TypeIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
