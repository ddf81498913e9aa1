//! Visitor engine.
//!
//! Two traversals are built on the catalog: type-level ([`Catalog::visit`])
//! walks a class description, object-level ([`Catalog::visit_object`]) walks
//! a live instance and hands out references into it. Both are single-pass,
//! follow declaration order, and never recurse on their own.
//!
//! [`Catalog::visit`]: crate::catalog::Catalog::visit
//! [`Catalog::visit_object`]: crate::catalog::Catalog::visit_object

mod handler;
mod traverse;

pub use handler::{HandlerKey, ObjectHandlers, TypeHandlers};
pub use traverse::{visit_class, visit_enum_values, visit_instance};

/// Counts from one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitSummary {
    /// Entities walked.
    pub visited: usize,
    /// Entities handed to a handler.
    pub dispatched: usize,
    /// Entities with no matching handler.
    pub skipped: usize,
}

impl VisitSummary {
    /// Check if every visited entity was dispatched.
    pub fn all_dispatched(&self) -> bool {
        self.skipped == 0
    }
}
