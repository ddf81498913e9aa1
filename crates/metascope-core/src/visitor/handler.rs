//! Handler sets and signature-based dispatch.
//!
//! A handler declares which entities it accepts: one `(kind, value type)`
//! pair, every entity of one kind, or everything. For each visited entity the
//! most specific registered handler wins (exact, then kind-only, then
//! catch-all). Two handlers with the same signature are ambiguous.

use std::any::{Any, TypeId};
use std::collections::HashSet;

use crate::catalog::Entity;
use crate::error::{Error, Result};
use crate::kind::EntityKind;

/// Which entities a handler accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKey {
    /// Exactly one kind and one value type.
    Exact(EntityKind, TypeId),
    /// Every entity of one kind.
    Kind(EntityKind),
    /// Every entity.
    Any,
}

struct Registered<H> {
    key: HandlerKey,
    signature: String,
    handler: H,
}

/// Ordered list of handlers with dispatch lookup.
pub(crate) struct HandlerSet<H> {
    entries: Vec<Registered<H>>,
}

impl<H> HandlerSet<H> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add(&mut self, key: HandlerKey, signature: String, handler: H) {
        self.entries.push(Registered {
            key,
            signature,
            handler,
        });
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.key) {
                return Err(Error::AmbiguousHandler {
                    signature: entry.signature.clone(),
                });
            }
        }
        Ok(())
    }

    fn position(&self, key: HandlerKey) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    /// Most specific handler accepting `(kind, ty)`.
    pub(crate) fn select(&mut self, kind: EntityKind, ty: TypeId) -> Option<&mut H> {
        let index = self
            .position(HandlerKey::Exact(kind, ty))
            .or_else(|| self.position(HandlerKey::Kind(kind)))
            .or_else(|| self.position(HandlerKey::Any))?;
        Some(&mut self.entries[index].handler)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

fn exact_signature<T: ?Sized + 'static>(kind: EntityKind) -> String {
    format!("({kind}, {})", std::any::type_name::<T>())
}

pub(crate) type TypeHandlerFn<'h> = Box<dyn FnMut(&str, usize, &Entity, EntityKind) + 'h>;

/// Handlers for type-level traversal.
///
/// Each handler is called as `(name, depth, entity, kind)`.
pub struct TypeHandlers<'h> {
    pub(crate) set: HandlerSet<TypeHandlerFn<'h>>,
}

impl<'h> TypeHandlers<'h> {
    /// Create an empty handler set. Every entity is skipped.
    pub fn new() -> Self {
        Self {
            set: HandlerSet::new(),
        }
    }

    /// Handle entities of `kind` whose declared type is `T`.
    pub fn on<T: ?Sized + 'static>(
        mut self,
        kind: EntityKind,
        handler: impl FnMut(&str, usize, &Entity, EntityKind) + 'h,
    ) -> Self {
        self.set.add(
            HandlerKey::Exact(kind, TypeId::of::<T>()),
            exact_signature::<T>(kind),
            Box::new(handler),
        );
        self
    }

    /// Handle every entity of `kind`.
    pub fn on_kind(
        mut self,
        kind: EntityKind,
        handler: impl FnMut(&str, usize, &Entity, EntityKind) + 'h,
    ) -> Self {
        self.set
            .add(HandlerKey::Kind(kind), format!("({kind}, _)"), Box::new(handler));
        self
    }

    /// Handle every entity not claimed by a more specific handler.
    pub fn on_any(mut self, handler: impl FnMut(&str, usize, &Entity, EntityKind) + 'h) -> Self {
        self.set
            .add(HandlerKey::Any, "(_, _)".to_string(), Box::new(handler));
        self
    }

    /// Check that no two handlers share a signature.
    pub fn validate(&self) -> Result<()> {
        self.set.validate()
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Check if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.set.len() == 0
    }
}

impl Default for TypeHandlers<'_> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) type ObjectHandlerFn<'h> = Box<dyn FnMut(&str, usize, &mut dyn Any, EntityKind) + 'h>;

/// Handlers for object-level traversal.
///
/// Each handler is called as `(name, depth, value, kind)`, where `value`
/// aliases the visited instance's storage.
pub struct ObjectHandlers<'h> {
    pub(crate) set: HandlerSet<ObjectHandlerFn<'h>>,
}

impl<'h> ObjectHandlers<'h> {
    /// Create an empty handler set. Every entity is skipped.
    pub fn new() -> Self {
        Self {
            set: HandlerSet::new(),
        }
    }

    /// Handle entities of `kind` whose value has type `F`.
    pub fn on<F: Any>(
        mut self,
        kind: EntityKind,
        mut handler: impl FnMut(&str, usize, &mut F, EntityKind) + 'h,
    ) -> Self {
        let erased = move |name: &str, depth: usize, value: &mut dyn Any, kind: EntityKind| {
            if let Some(value) = value.downcast_mut::<F>() {
                handler(name, depth, value, kind);
            }
        };
        self.set.add(
            HandlerKey::Exact(kind, TypeId::of::<F>()),
            exact_signature::<F>(kind),
            Box::new(erased),
        );
        self
    }

    /// Handle member variables of type `F`.
    pub fn on_member<F: Any>(
        self,
        handler: impl FnMut(&str, usize, &mut F, EntityKind) + 'h,
    ) -> Self {
        self.on(EntityKind::MemberVariable, handler)
    }

    /// Handle base-class subobjects of type `B`.
    pub fn on_subobject<B: Any>(
        self,
        handler: impl FnMut(&str, usize, &mut B, EntityKind) + 'h,
    ) -> Self {
        self.on(EntityKind::Object, handler)
    }

    /// Handle every entity of `kind`, whatever its value type.
    pub fn on_kind(
        mut self,
        kind: EntityKind,
        handler: impl FnMut(&str, usize, &mut dyn Any, EntityKind) + 'h,
    ) -> Self {
        self.set
            .add(HandlerKey::Kind(kind), format!("({kind}, _)"), Box::new(handler));
        self
    }

    /// Handle every entity not claimed by a more specific handler.
    pub fn on_any(
        mut self,
        handler: impl FnMut(&str, usize, &mut dyn Any, EntityKind) + 'h,
    ) -> Self {
        self.set
            .add(HandlerKey::Any, "(_, _)".to_string(), Box::new(handler));
        self
    }

    /// Check that no two handlers share a signature.
    pub fn validate(&self) -> Result<()> {
        self.set.validate()
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Check if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.set.len() == 0
    }
}

impl Default for ObjectHandlers<'_> {
    fn default() -> Self {
        Self::new()
    }
}
