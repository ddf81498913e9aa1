//! Registration-then-freeze catalog holder.
//!
//! Classes are registered while the program initializes. The first read
//! freezes the pending registrations into an immutable [`Catalog`]; from then
//! on lookups take no lock and further registration fails with
//! [`Error::CatalogFrozen`].

use std::any::type_name;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing::{debug, info};

use metascope_core::{
    Catalog, CatalogBuilder, CatalogConfig, Error, Reflect, ReflectEnum, Result,
};

/// A catalog that accepts registrations until its first read.
#[derive(Debug)]
pub struct Registry {
    pending: Mutex<Option<CatalogBuilder>>,
    frozen: OnceCell<Catalog>,
}

impl Registry {
    /// Create an empty, unfrozen registry.
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    /// Create an empty registry whose builder uses `config`.
    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            pending: Mutex::new(Some(CatalogBuilder::with_config(config))),
            frozen: OnceCell::new(),
        }
    }

    /// Replace the builder configuration for later registrations.
    pub fn configure(&self, config: CatalogConfig) -> Result<()> {
        self.with_builder(
            || Error::ConfigurationFrozen,
            |builder| {
                builder.set_config(config);
                Ok(())
            },
        )
    }

    /// Register class `T`.
    ///
    /// The metadata is built before the registry is locked, so a `Reflect`
    /// impl may itself register the types it depends on.
    pub fn register<T: Reflect>(&self) -> Result<()> {
        let metadata = T::class_metadata();
        self.with_builder(frozen::<T>, |builder| {
            builder.register_class(metadata)?;
            Ok(())
        })
    }

    /// Register enum `E`.
    pub fn register_enum<E: ReflectEnum>(&self) -> Result<()> {
        let metadata = E::enum_metadata();
        self.with_builder(frozen::<E>, |builder| {
            builder.register_enum_metadata(metadata)?;
            Ok(())
        })
    }

    /// Check if the catalog has been frozen.
    pub fn is_frozen(&self) -> bool {
        self.frozen.get().is_some()
    }

    /// The frozen catalog. Freezes pending registrations on first call.
    pub fn catalog(&self) -> &Catalog {
        self.frozen.get_or_init(|| {
            let builder = self.pending.lock().take().unwrap_or_default();
            let catalog = builder.build();
            info!(classes = catalog.len(), "Catalog frozen");
            catalog
        })
    }

    fn with_builder<E, F>(&self, on_frozen: E, f: F) -> Result<()>
    where
        E: FnOnce() -> Error,
        F: FnOnce(&mut CatalogBuilder) -> Result<()>,
    {
        let mut pending = self.pending.lock();
        let builder = pending.as_mut().ok_or_else(on_frozen)?;
        f(builder)?;
        debug!(pending = builder.class_count(), "Registry updated");
        Ok(())
    }
}

fn frozen<T: ?Sized>() -> Error {
    Error::CatalogFrozen {
        type_name: type_name::<T>().to_string(),
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
