//! metascope core - class metadata catalog and visitor engine.
//!
//! For every registered class the catalog records its base classes and direct
//! members (nested enums and classes, member variables, member functions,
//! constructors) in declaration order, each tagged with an [`EntityKind`] and
//! optional attributes. The visitor engine walks that description either at
//! the type level or against a live instance, dispatching each entity to the
//! caller's handler for its `(kind, value type)` pair.
//!
//! # Example
//!
//! ```ignore
//! use metascope_core::{field_accessor, CatalogBuilder, ClassMetadata, Entity, ObjectHandlers};
//!
//! struct Point { x: f64, y: f64 }
//!
//! let mut builder = CatalogBuilder::new();
//! builder.register_class(
//!     ClassMetadata::named::<Point>("Point")
//!         .with_member(Entity::member_variable("x", field_accessor!(Point, x: f64)))
//!         .with_member(Entity::member_variable("y", field_accessor!(Point, y: f64))),
//! )?;
//! let catalog = builder.build();
//!
//! let mut point = Point { x: 1.0, y: 2.0 };
//! catalog.visit_object(&mut point, ObjectHandlers::new().on_member(|_, _, v: &mut f64, _| *v *= 2.0))?;
//! assert_eq!(point.y, 4.0);
//! ```

pub mod attribute;
pub mod catalog;
pub mod config;
pub mod error;
pub mod kind;
pub mod sequence;
pub mod snapshot;
pub mod visitor;

pub use attribute::{Attribute, Attributes};
pub use catalog::{
    Catalog, CatalogBuilder, ClassMetadata, Entity, EnumMetadata, FieldAccessor, MemberAccess,
    Reflect, ReflectEnum, TypeIdentity,
};
pub use config::CatalogConfig;
pub use error::{Error, Result};
pub use kind::EntityKind;
pub use sequence::Sequence;
pub use snapshot::{AttributeSnapshot, CatalogSnapshot, ClassSnapshot, EntitySnapshot, EnumSnapshot};
pub use visitor::{HandlerKey, ObjectHandlers, TypeHandlers, VisitSummary};
