//! Metadata catalog.
//!
//! The catalog stores, per registered class, its base classes and direct
//! members in declaration order, each tagged with a kind and attributes.
//! Registration happens once, before the catalog is frozen; afterwards it is
//! a read-only lookup table keyed by type identity.

mod accessor;
#[allow(clippy::module_inception)]
mod catalog;
mod class;
mod entity;
mod enumeration;
mod types;

pub use accessor::{FieldAccessor, MemberAccess};
pub use catalog::{Catalog, CatalogBuilder};
pub use class::ClassMetadata;
pub use entity::Entity;
pub use enumeration::EnumMetadata;
pub use types::TypeIdentity;

use std::any::Any;

/// Implemented by generated code for every reflectable class.
pub trait Reflect: Any {
    /// Build this class's metadata.
    fn class_metadata() -> ClassMetadata;
}

/// Implemented by generated code for every reflectable enum.
pub trait ReflectEnum: Any {
    /// Build this enum's metadata.
    fn enum_metadata() -> EnumMetadata;
}
