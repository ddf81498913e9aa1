//! Core error types.

use thiserror::Error;

use crate::kind::EntityKind;

/// Catalog and traversal errors.
///
/// Every variant is raised while the catalog is being built or while a
/// traversal is being set up. A traversal that starts never fails partway.
#[derive(Debug, Error)]
pub enum Error {
    /// Lookup of a class that was never registered.
    #[error("type `{type_name}` is not registered in the catalog")]
    UnregisteredType {
        /// Display name of the requested type.
        type_name: String,
    },

    /// Lookup of an enum that was never registered.
    #[error("enum `{type_name}` is not registered in the catalog")]
    UnregisteredEnum {
        /// Display name of the requested enum.
        type_name: String,
    },

    /// Construction requested for a class without a zero-argument constructor.
    #[error("type `{type_name}` has no registered zero-argument constructor")]
    NoDefaultConstructor {
        /// Display name of the class.
        type_name: String,
    },

    /// The same class was registered twice.
    #[error("type `{type_name}` is already registered")]
    DuplicateClass {
        /// Display name of the class.
        type_name: String,
    },

    /// Two members of a class share a name without being distinct overloads.
    #[error("class `{class}` declares member `{member}` more than once")]
    DuplicateMember {
        /// Owning class.
        class: String,
        /// Offending member name.
        member: String,
    },

    /// Two different types were registered under one display name.
    #[error("name `{name}` is already used by another registered type")]
    DuplicateName {
        /// Contested display name.
        name: String,
    },

    /// A class lists the same base type more than once.
    #[error("class `{class}` lists base `{base}` more than once")]
    DuplicateBase {
        /// Owning class.
        class: String,
        /// Repeated base.
        base: String,
    },

    /// An entity of a kind that cannot appear in static metadata.
    #[error("class `{class}` contains entity `{entity}` of kind {kind}, which is not allowed here")]
    InvalidEntity {
        /// Owning class.
        class: String,
        /// Entity name.
        entity: String,
        /// Rejected kind.
        kind: EntityKind,
    },

    /// An accessor was built for a different class than the one it is attached to.
    #[error("accessor for `{entity}` reads from `{accessor_owner}`, not `{class}`")]
    AccessorMismatch {
        /// Class the entity was registered on.
        class: String,
        /// Entity name.
        entity: String,
        /// Class the accessor was built for.
        accessor_owner: String,
    },

    /// Two handlers claim the same (kind, value type) pair.
    #[error("ambiguous handlers: more than one handler registered for {signature}")]
    AmbiguousHandler {
        /// Rendered handler signature.
        signature: String,
    },

    /// Registration attempted after the catalog was frozen.
    #[error("catalog is frozen; `{type_name}` must be registered before first use")]
    CatalogFrozen {
        /// Type that arrived too late.
        type_name: String,
    },

    /// Configuration change attempted after the catalog was frozen.
    #[error("catalog is frozen; configuration must be applied before first use")]
    ConfigurationFrozen,

    /// Snapshot serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Snapshot deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Result alias for catalog operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
