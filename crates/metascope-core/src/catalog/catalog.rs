//! Catalog: the immutable lookup table of registered classes and enums.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::{ClassMetadata, EnumMetadata, Entity, Reflect, ReflectEnum};
use crate::config::CatalogConfig;
use crate::error::{Error, Result};
use crate::kind::EntityKind;
use crate::sequence::Sequence;

/// Collects registrations and validates them before the catalog is frozen.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    config: CatalogConfig,
    classes: Vec<ClassMetadata>,
    enums: Vec<EnumMetadata>,
}

impl CatalogBuilder {
    /// Create a builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the given configuration.
    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            config,
            classes: Vec::new(),
            enums: Vec::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Replace the configuration. Applies to later registrations only.
    pub fn set_config(&mut self, config: CatalogConfig) {
        self.config = config;
    }

    /// Number of classes registered so far.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Register a class through its generated [`Reflect`] impl.
    pub fn register<T: Reflect>(&mut self) -> Result<&mut Self> {
        self.register_class(T::class_metadata())
    }

    /// Register an enum through its generated [`ReflectEnum`] impl.
    pub fn register_enum<E: ReflectEnum>(&mut self) -> Result<&mut Self> {
        self.register_enum_metadata(E::enum_metadata())
    }

    /// Register prebuilt class metadata.
    pub fn register_class(&mut self, metadata: ClassMetadata) -> Result<&mut Self> {
        self.validate_class(&metadata)?;

        let id = metadata.identity().id();
        if self
            .classes
            .iter()
            .any(|c| c.name() == metadata.name() && c.identity().id() != id)
        {
            return Err(Error::DuplicateName {
                name: metadata.name().to_string(),
            });
        }

        match self.classes.iter().position(|c| c.identity().id() == id) {
            Some(_) if !self.config.allow_reregistration => {
                return Err(Error::DuplicateClass {
                    type_name: metadata.name().to_string(),
                });
            }
            Some(index) => {
                warn!(class = metadata.name(), "Replacing previously registered class");
                self.classes[index] = metadata;
            }
            None => {
                debug!(
                    class = metadata.name(),
                    bases = metadata.base_classes().size(),
                    members = metadata.members().size(),
                    "Registered class"
                );
                self.classes.push(metadata);
            }
        }

        Ok(self)
    }

    /// Register prebuilt enum metadata.
    pub fn register_enum_metadata(&mut self, metadata: EnumMetadata) -> Result<&mut Self> {
        self.validate_enum(&metadata)?;

        let id = metadata.identity().id();
        if self
            .enums
            .iter()
            .any(|e| e.name() == metadata.name() && e.identity().id() != id)
        {
            return Err(Error::DuplicateName {
                name: metadata.name().to_string(),
            });
        }

        match self.enums.iter().position(|e| e.identity().id() == id) {
            Some(_) if !self.config.allow_reregistration => {
                return Err(Error::DuplicateClass {
                    type_name: metadata.name().to_string(),
                });
            }
            Some(index) => {
                warn!(enum_name = metadata.name(), "Replacing previously registered enum");
                self.enums[index] = metadata;
            }
            None => {
                debug!(
                    enum_name = metadata.name(),
                    values = metadata.values().size(),
                    "Registered enum"
                );
                self.enums.push(metadata);
            }
        }

        Ok(self)
    }

    /// Freeze the registrations into an immutable catalog.
    pub fn build(self) -> Catalog {
        let class_index = self
            .classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.identity().id(), i))
            .collect();
        let name_index = self
            .classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name().to_string(), i))
            .collect();
        let enum_index = self
            .enums
            .iter()
            .enumerate()
            .map(|(i, e)| (e.identity().id(), i))
            .collect();

        debug!(
            classes = self.classes.len(),
            enums = self.enums.len(),
            "Catalog built"
        );

        Catalog {
            classes: self.classes,
            enums: self.enums,
            class_index,
            name_index,
            enum_index,
        }
    }

    fn validate_class(&self, metadata: &ClassMetadata) -> Result<()> {
        let class = metadata.name();
        let owner = metadata.identity().id();

        let mut bases = HashSet::new();
        for base in metadata.base_classes() {
            if base.kind() != EntityKind::BaseClass {
                return Err(invalid_entity(class, base));
            }
            check_accessor_owner(class, owner, base)?;
            if !bases.insert(base.declared_type().id()) {
                return Err(Error::DuplicateBase {
                    class: class.to_string(),
                    base: base.name().to_string(),
                });
            }
        }

        for member in metadata.members() {
            if !member.kind().is_member() {
                return Err(invalid_entity(class, member));
            }
            if member.is_variable() {
                check_accessor_owner(class, owner, member)?;
            }
        }

        check_unique_names(class, metadata.members())?;

        Ok(())
    }

    fn validate_enum(&self, metadata: &EnumMetadata) -> Result<()> {
        let name = metadata.name();

        for value in metadata.values() {
            if value.kind() != EntityKind::EnumValue
                || value.declared_type().id() != metadata.identity().id()
            {
                return Err(invalid_entity(name, value));
            }
        }

        check_unique_names(name, metadata.values())?;

        Ok(())
    }
}

fn invalid_entity(class: &str, entity: &Entity) -> Error {
    Error::InvalidEntity {
        class: class.to_string(),
        entity: entity.name().to_string(),
        kind: entity.kind(),
    }
}

fn check_accessor_owner(class: &str, owner: TypeId, entity: &Entity) -> Result<()> {
    match entity.accessor() {
        Some(accessor) if accessor.owner_type() == owner => Ok(()),
        Some(accessor) => Err(Error::AccessorMismatch {
            class: class.to_string(),
            entity: entity.name().to_string(),
            accessor_owner: accessor.owner_name().to_string(),
        }),
        None => Err(invalid_entity(class, entity)),
    }
}

/// Names may repeat only across callables with distinct signatures (overloads).
fn check_unique_names(class: &str, entities: &Sequence<Entity>) -> Result<()> {
    let mut seen: HashMap<&str, Vec<&Entity>> = HashMap::new();

    for entity in entities {
        let previous = seen.entry(entity.name()).or_default();
        let clash = previous.iter().any(|prev| {
            !(prev.kind().is_callable() && entity.kind().is_callable())
                || prev.declared_type() == entity.declared_type()
        });
        if clash {
            return Err(Error::DuplicateMember {
                class: class.to_string(),
                member: entity.name().to_string(),
            });
        }
        previous.push(entity);
    }

    Ok(())
}

/// Immutable table of class and enum metadata keyed by type identity.
#[derive(Debug)]
pub struct Catalog {
    classes: Vec<ClassMetadata>,
    enums: Vec<EnumMetadata>,
    class_index: HashMap<TypeId, usize>,
    name_index: HashMap<String, usize>,
    enum_index: HashMap<TypeId, usize>,
}

impl Catalog {
    /// Start building a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Metadata for class `T`.
    pub fn lookup<T: ?Sized + 'static>(&self) -> Result<&ClassMetadata> {
        self.lookup_type(TypeId::of::<T>())
            .ok_or_else(|| Error::UnregisteredType {
                type_name: std::any::type_name::<T>().to_string(),
            })
    }

    /// Metadata for the class with the given type id.
    pub fn lookup_type(&self, id: TypeId) -> Option<&ClassMetadata> {
        self.class_index.get(&id).map(|&i| &self.classes[i])
    }

    /// Metadata for the class reported under `name`.
    pub fn lookup_by_name(&self, name: &str) -> Option<&ClassMetadata> {
        self.name_index.get(name).map(|&i| &self.classes[i])
    }

    /// Metadata for enum `E`.
    pub fn lookup_enum<E: ?Sized + 'static>(&self) -> Result<&EnumMetadata> {
        self.enum_index
            .get(&TypeId::of::<E>())
            .map(|&i| &self.enums[i])
            .ok_or_else(|| Error::UnregisteredEnum {
                type_name: std::any::type_name::<E>().to_string(),
            })
    }

    /// Check if class `T` is registered.
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.class_index.contains_key(&TypeId::of::<T>())
    }

    /// Check if class `T` carries the attribute tag. False for unknown classes.
    pub fn has_attribute<T: ?Sized + 'static>(&self, tag: &str) -> bool {
        self.lookup::<T>()
            .map(|meta| meta.has_attribute(tag))
            .unwrap_or(false)
    }

    /// Check if member `member` of class `T` carries the attribute tag.
    /// False for unknown classes or members.
    pub fn member_has_attribute<T: ?Sized + 'static>(&self, member: &str, tag: &str) -> bool {
        self.lookup::<T>()
            .ok()
            .and_then(|meta| meta.member(member))
            .map(|m| m.has_attribute(tag))
            .unwrap_or(false)
    }

    /// Member variables of class `T`, in declaration order.
    pub fn member_variables<T: ?Sized + 'static>(&self) -> Result<Sequence<Entity>> {
        Ok(self.lookup::<T>()?.member_variables())
    }

    /// Build a `T` through its registered zero-argument constructor.
    pub fn construct<T: Any>(&self) -> Result<T> {
        let meta = self.lookup::<T>()?;
        meta.members()
            .iter()
            .filter(|m| m.kind() == EntityKind::Constructor)
            .find_map(|m| m.payload::<fn() -> T>())
            .map(|ctor| ctor())
            .ok_or_else(|| Error::NoDefaultConstructor {
                type_name: meta.name().to_string(),
            })
    }

    /// Registered classes, in registration order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassMetadata> {
        self.classes.iter()
    }

    /// Registered enums, in registration order.
    pub fn enums(&self) -> impl Iterator<Item = &EnumMetadata> {
        self.enums.iter()
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if no classes are registered.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
