//! Type-level and object-level traversal.

use std::any::Any;

use tracing::{debug, instrument, trace, warn};

use super::handler::{ObjectHandlers, TypeHandlers};
use super::VisitSummary;
use crate::catalog::{Catalog, ClassMetadata, Entity, EnumMetadata};
use crate::error::Result;
use crate::kind::EntityKind;

/// Walk `entities` at `depth`, dispatching each to the matching type handler.
fn walk_entities<'e>(
    entities: impl Iterator<Item = &'e Entity>,
    depth: usize,
    handlers: &mut TypeHandlers<'_>,
    summary: &mut VisitSummary,
) {
    for entity in entities {
        summary.visited += 1;
        match handlers.set.select(entity.kind(), entity.declared_type().id()) {
            Some(handler) => {
                trace!(entity = entity.name(), kind = %entity.kind(), depth, "Dispatching entity");
                handler(entity.name(), depth, entity, entity.kind());
                summary.dispatched += 1;
            }
            None => summary.skipped += 1,
        }
    }
}

/// Type-level traversal of one class description.
///
/// Base classes are reported first as `BASE_CLASS`, then every member in
/// declaration order. Neither nested classes nor bases are descended into.
pub fn visit_class(
    metadata: &ClassMetadata,
    depth: usize,
    handlers: &mut TypeHandlers<'_>,
) -> Result<VisitSummary> {
    handlers.validate()?;

    let mut summary = VisitSummary::default();
    walk_entities(
        metadata
            .base_classes()
            .iter()
            .chain(metadata.members().iter()),
        depth,
        handlers,
        &mut summary,
    );

    debug!(
        class = metadata.name(),
        visited = summary.visited,
        dispatched = summary.dispatched,
        "Type-level traversal completed"
    );
    Ok(summary)
}

/// Type-level traversal of an enum's values.
pub fn visit_enum_values(
    metadata: &EnumMetadata,
    depth: usize,
    handlers: &mut TypeHandlers<'_>,
) -> Result<VisitSummary> {
    handlers.validate()?;

    let mut summary = VisitSummary::default();
    walk_entities(metadata.values().iter(), depth, handlers, &mut summary);
    Ok(summary)
}

/// Object-level traversal of a live instance described by `metadata`.
///
/// Emits one `OBJECT` per base-class subobject, then one `MEMBER_VARIABLE`
/// per member variable. Handlers receive references into `instance`.
/// Class-typed members are reported once and not flattened.
pub fn visit_instance(
    metadata: &ClassMetadata,
    depth: usize,
    instance: &mut dyn Any,
    handlers: &mut ObjectHandlers<'_>,
) -> Result<VisitSummary> {
    handlers.validate()?;

    let mut summary = VisitSummary::default();
    let bases = metadata
        .base_classes()
        .iter()
        .map(|base| (base, EntityKind::Object));
    let variables = metadata
        .members()
        .iter()
        .filter(|m| m.is_variable())
        .map(|m| (m, EntityKind::MemberVariable));

    for (entity, kind) in bases.chain(variables) {
        summary.visited += 1;

        let Some(handler) = handlers.set.select(kind, entity.declared_type().id()) else {
            summary.skipped += 1;
            continue;
        };

        match entity.value_mut(&mut *instance) {
            Some(value) => {
                trace!(entity = entity.name(), kind = %kind, depth, "Dispatching live entity");
                handler(entity.name(), depth, value, kind);
                summary.dispatched += 1;
            }
            None => {
                warn!(
                    class = metadata.name(),
                    entity = entity.name(),
                    "Accessor did not resolve against instance"
                );
                summary.skipped += 1;
            }
        }
    }

    debug!(
        class = metadata.name(),
        visited = summary.visited,
        dispatched = summary.dispatched,
        "Object-level traversal completed"
    );
    Ok(summary)
}

impl Catalog {
    /// Type-level traversal of class `T`.
    #[instrument(level = "debug", skip_all, fields(class = std::any::type_name::<T>()))]
    pub fn visit<T: ?Sized + 'static>(&self, mut handlers: TypeHandlers<'_>) -> Result<VisitSummary> {
        self.visit_with::<T>(&mut handlers)
    }

    /// Type-level traversal of class `T` with a reusable handler set.
    pub fn visit_with<T: ?Sized + 'static>(
        &self,
        handlers: &mut TypeHandlers<'_>,
    ) -> Result<VisitSummary> {
        visit_class(self.lookup::<T>()?, 0, handlers)
    }

    /// Type-level traversal of enum `E`'s values.
    pub fn visit_enum<E: ?Sized + 'static>(
        &self,
        mut handlers: TypeHandlers<'_>,
    ) -> Result<VisitSummary> {
        visit_enum_values(self.lookup_enum::<E>()?, 0, &mut handlers)
    }

    /// Object-level traversal of `instance`.
    #[instrument(level = "debug", skip_all, fields(class = std::any::type_name::<T>()))]
    pub fn visit_object<T: Any>(
        &self,
        instance: &mut T,
        mut handlers: ObjectHandlers<'_>,
    ) -> Result<VisitSummary> {
        self.visit_object_at(0, instance, &mut handlers)
    }

    /// Object-level traversal of `instance` with a reusable handler set.
    pub fn visit_object_with<T: Any>(
        &self,
        instance: &mut T,
        handlers: &mut ObjectHandlers<'_>,
    ) -> Result<VisitSummary> {
        self.visit_object_at(0, instance, handlers)
    }

    /// Object-level traversal at an explicit depth.
    ///
    /// Traversal never recurses on its own. A handler that wants to descend
    /// into a class-typed member calls this with `depth + 1` and its own
    /// handler set.
    pub fn visit_object_at<T: Any>(
        &self,
        depth: usize,
        instance: &mut T,
        handlers: &mut ObjectHandlers<'_>,
    ) -> Result<VisitSummary> {
        visit_instance(self.lookup::<T>()?, depth, instance, handlers)
    }

    /// Object-level traversal of a type-erased instance, resolved by its
    /// runtime type.
    pub fn visit_dyn(
        &self,
        depth: usize,
        instance: &mut dyn Any,
        handlers: &mut ObjectHandlers<'_>,
    ) -> Result<VisitSummary> {
        let id = (*instance).type_id();
        let metadata = self
            .lookup_type(id)
            .ok_or_else(|| crate::error::Error::UnregisteredType {
                type_name: format!("{id:?}"),
            })?;
        visit_instance(metadata, depth, instance, handlers)
    }
}
