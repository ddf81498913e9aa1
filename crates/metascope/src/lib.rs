//! metascope - static class metadata and visitors for Rust types.
//!
//! This crate re-exports [`metascope_core`] and adds a process-wide catalog.
//! Register every reflected type during start-up, then read through
//! [`catalog`]; the first read freezes the registrations.
//!
//! ```ignore
//! metascope::register::<Sensor>()?;
//!
//! let mut sensor = Sensor::default();
//! metascope::visit_object(
//!     &mut sensor,
//!     ObjectHandlers::new().on_member(|name, _, value: &mut f64, _| {
//!         println!("{name} = {value}");
//!     }),
//! )?;
//! ```

pub mod registry;

use std::any::Any;

use once_cell::sync::Lazy;

pub use metascope_core::*;
pub use registry::Registry;

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// The process-wide registry.
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Replace the configuration used for later registrations.
pub fn configure(config: CatalogConfig) -> Result<()> {
    GLOBAL.configure(config)
}

/// Register class `T` in the process-wide catalog.
pub fn register<T: Reflect>() -> Result<()> {
    GLOBAL.register::<T>()
}

/// Register enum `E` in the process-wide catalog.
pub fn register_enum<E: ReflectEnum>() -> Result<()> {
    GLOBAL.register_enum::<E>()
}

/// The process-wide catalog, frozen on first call.
pub fn catalog() -> &'static Catalog {
    GLOBAL.catalog()
}

/// Metadata for class `T`.
pub fn lookup<T: ?Sized + 'static>() -> Result<&'static ClassMetadata> {
    catalog().lookup::<T>()
}

/// Check if class `T` carries the attribute tag.
pub fn has_attribute<T: ?Sized + 'static>(tag: &str) -> bool {
    catalog().has_attribute::<T>(tag)
}

/// Type-level traversal of class `T`.
pub fn visit<T: ?Sized + 'static>(handlers: TypeHandlers<'_>) -> Result<VisitSummary> {
    catalog().visit::<T>(handlers)
}

/// Object-level traversal of `instance`.
pub fn visit_object<T: Any>(instance: &mut T, handlers: ObjectHandlers<'_>) -> Result<VisitSummary> {
    catalog().visit_object(instance, handlers)
}
