//! Accessors: how a member's live value is reached from an instance.

use std::any::{Any, TypeId};

/// Type-erased access to one member of an instance.
///
/// Returned references alias the instance's own storage. An accessor applied
/// to an instance of any other type yields `None`.
pub trait MemberAccess: Send + Sync {
    /// Type the accessor reads from.
    fn owner_type(&self) -> TypeId;

    /// Display name of the owner type.
    fn owner_name(&self) -> &'static str;

    /// Type of the value the accessor yields.
    fn value_type(&self) -> TypeId;

    /// Borrow the member.
    fn get<'a>(&self, instance: &'a dyn Any) -> Option<&'a dyn Any>;

    /// Borrow the member mutably.
    fn get_mut<'a>(&self, instance: &'a mut dyn Any) -> Option<&'a mut dyn Any>;
}

/// Accessor backed by a pair of projection functions.
///
/// Usually built with [`field_accessor!`](crate::field_accessor).
pub struct FieldAccessor<C, F> {
    get: fn(&C) -> &F,
    get_mut: fn(&mut C) -> &mut F,
}

impl<C: 'static, F: 'static> FieldAccessor<C, F> {
    /// Create an accessor from shared and mutable projections.
    pub fn new(get: fn(&C) -> &F, get_mut: fn(&mut C) -> &mut F) -> Self {
        Self { get, get_mut }
    }

    /// Borrow the member from a concretely typed instance.
    pub fn project<'a>(&self, instance: &'a C) -> &'a F {
        (self.get)(instance)
    }

    /// Mutably borrow the member from a concretely typed instance.
    pub fn project_mut<'a>(&self, instance: &'a mut C) -> &'a mut F {
        (self.get_mut)(instance)
    }
}

impl<C, F> Clone for FieldAccessor<C, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, F> Copy for FieldAccessor<C, F> {}

impl<C: Any, F: Any> MemberAccess for FieldAccessor<C, F> {
    fn owner_type(&self) -> TypeId {
        TypeId::of::<C>()
    }

    fn owner_name(&self) -> &'static str {
        std::any::type_name::<C>()
    }

    fn value_type(&self) -> TypeId {
        TypeId::of::<F>()
    }

    fn get<'a>(&self, instance: &'a dyn Any) -> Option<&'a dyn Any> {
        let owner = instance.downcast_ref::<C>()?;
        Some((self.get)(owner) as &dyn Any)
    }

    fn get_mut<'a>(&self, instance: &'a mut dyn Any) -> Option<&'a mut dyn Any> {
        let owner = instance.downcast_mut::<C>()?;
        Some((self.get_mut)(owner) as &mut dyn Any)
    }
}

/// Build a [`FieldAccessor`] for a named field.
///
/// ```ignore
/// let accessor = field_accessor!(Point, x: f64);
/// ```
#[macro_export]
macro_rules! field_accessor {
    ($class:ty, $field:tt : $ty:ty) => {{
        fn get(instance: &$class) -> &$ty {
            &instance.$field
        }
        fn get_mut(instance: &mut $class) -> &mut $ty {
            &mut instance.$field
        }
        $crate::catalog::FieldAccessor::<$class, $ty>::new(get, get_mut)
    }};
}
