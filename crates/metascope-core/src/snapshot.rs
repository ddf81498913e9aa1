//! Catalog snapshots - a serializable, type-erased copy of the catalog.
//!
//! Snapshots drop accessors and function pointers and keep what tooling
//! needs: names, kinds, type names, discriminants, and attributes.

use rkyv::{Archive, Deserialize, Serialize};

use crate::attribute::Attributes;
use crate::catalog::{Catalog, ClassMetadata, Entity, EnumMetadata};
use crate::error::Error;
use crate::kind::EntityKind;

/// Snapshot of one attribute tag.
#[derive(
    Debug, Clone, PartialEq, Archive, Serialize, Deserialize, serde::Serialize, serde::Deserialize,
)]
pub struct AttributeSnapshot {
    /// Tag name.
    pub name: String,
    /// Optional value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Positional arguments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

/// Snapshot of one entity.
#[derive(
    Debug, Clone, PartialEq, Archive, Serialize, Deserialize, serde::Serialize, serde::Deserialize,
)]
pub struct EntitySnapshot {
    /// Entity name.
    pub name: String,
    /// Entity kind.
    pub kind: EntityKind,
    /// Display name of the declared type.
    pub type_name: String,
    /// Enum discriminant, for enum values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminant: Option<i64>,
    /// Attribute tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSnapshot>,
}

/// Snapshot of one class.
#[derive(
    Debug, Clone, PartialEq, Archive, Serialize, Deserialize, serde::Serialize, serde::Deserialize,
)]
pub struct ClassSnapshot {
    /// Class name.
    pub name: String,
    /// Enclosing namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Class-level attribute tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSnapshot>,
    /// Base classes, in order.
    pub base_classes: Vec<EntitySnapshot>,
    /// Members, in declaration order.
    pub members: Vec<EntitySnapshot>,
}

/// Snapshot of one enum.
#[derive(
    Debug, Clone, PartialEq, Archive, Serialize, Deserialize, serde::Serialize, serde::Deserialize,
)]
pub struct EnumSnapshot {
    /// Enum name.
    pub name: String,
    /// Enum-level attribute tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSnapshot>,
    /// Values, in order.
    pub values: Vec<EntitySnapshot>,
}

/// Snapshot of a whole catalog.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Archive,
    Serialize,
    Deserialize,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct CatalogSnapshot {
    /// Classes, in registration order.
    pub classes: Vec<ClassSnapshot>,
    /// Enums, in registration order.
    pub enums: Vec<EnumSnapshot>,
}

fn attributes_snapshot(attributes: &Attributes) -> Vec<AttributeSnapshot> {
    attributes
        .iter()
        .map(|a| AttributeSnapshot {
            name: a.name.clone(),
            value: a.value.clone(),
            args: a.args.clone(),
        })
        .collect()
}

impl From<&Entity> for EntitySnapshot {
    fn from(entity: &Entity) -> Self {
        Self {
            name: entity.name().to_string(),
            kind: entity.kind(),
            type_name: entity.declared_type().name().to_string(),
            discriminant: entity.discriminant(),
            attributes: attributes_snapshot(entity.attributes()),
        }
    }
}

impl From<&ClassMetadata> for ClassSnapshot {
    fn from(meta: &ClassMetadata) -> Self {
        Self {
            name: meta.name().to_string(),
            namespace: meta.namespace().map(String::from),
            attributes: attributes_snapshot(meta.attributes()),
            base_classes: meta.base_classes().iter().map(EntitySnapshot::from).collect(),
            members: meta.members().iter().map(EntitySnapshot::from).collect(),
        }
    }
}

impl From<&EnumMetadata> for EnumSnapshot {
    fn from(meta: &EnumMetadata) -> Self {
        Self {
            name: meta.name().to_string(),
            attributes: attributes_snapshot(meta.attributes()),
            values: meta.values().iter().map(EntitySnapshot::from).collect(),
        }
    }
}

impl ClassSnapshot {
    /// Members of one kind.
    pub fn members_of_kind(&self, kind: EntityKind) -> impl Iterator<Item = &EntitySnapshot> {
        self.members.iter().filter(move |m| m.kind == kind)
    }
}

impl CatalogSnapshot {
    /// Get a class by name.
    pub fn get_class(&self, name: &str) -> Option<&ClassSnapshot> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Get an enum by name.
    pub fn get_enum(&self, name: &str) -> Option<&EnumSnapshot> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Serialize the snapshot to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        rkyv::to_bytes::<rkyv::rancor::Error>(self)
            .map(|v| v.to_vec())
            .map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Deserialize a snapshot from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        rkyv::from_bytes::<Self, rkyv::rancor::Error>(bytes)
            .map_err(|e| Error::Deserialization(e.to_string()))
    }

    /// Render the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Parse a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::Deserialization(e.to_string()))
    }
}

impl Catalog {
    /// Take a serializable snapshot of every registered class and enum.
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            classes: self.classes().map(ClassSnapshot::from).collect(),
            enums: self.enums().map(EnumSnapshot::from).collect(),
        }
    }
}
