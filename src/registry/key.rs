use std::any::{self, Any, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use super::erased::{self, ErasedTracker};

/// Typed descriptor for the values of type `T`.
///
/// The phantom parameter ties a deposit's value to the tracker it lands in,
/// so the registry never has to trust a caller-supplied cast.
pub struct TypeKey<T: ?Sized>(PhantomData<fn() -> T>);

impl<T: ?Sized> TypeKey<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    pub fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }
}

impl<T: ?Sized + 'static> TypeKey<T> {
    pub fn type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }
}

impl<T: ?Sized> Clone for TypeKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for TypeKey<T> {}

impl<T: ?Sized> Default for TypeKey<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> PartialEq for TypeKey<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T: ?Sized> Eq for TypeKey<T> {}

impl<T: ?Sized> fmt::Debug for TypeKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey<{}>", self.type_name())
    }
}

/// Descriptor for callers that only hold `Box<dyn Any>` values.
///
/// Carries the erased intrinsic ordering of the type, if it has one, and
/// how to build an empty tracker for it.
#[derive(Clone, Copy)]
pub struct DynKey {
    pub(crate) type_id: TypeId,
    pub(crate) type_name: &'static str,
    pub(crate) ordering: Option<fn(&dyn Any, &dyn Any) -> Ordering>,
    pub(crate) new_tracker: fn() -> Box<dyn ErasedTracker>,
}

impl DynKey {
    /// Key for a type ordered by its own `Ord` impl.
    pub fn of<T: Ord + 'static>() -> Self {
        Self {
            ordering: Some(erased::natural_ordering::<T>),
            ..Self::unordered::<T>()
        }
    }

    /// Key for a type with no intrinsic ordering; deposits under it must
    /// supply one.
    pub fn unordered<T: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: any::type_name::<T>(),
            ordering: None,
            new_tracker: erased::new_tracker::<T>,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is_ordered(&self) -> bool {
        self.ordering.is_some()
    }
}

impl<T: Ord + 'static> From<TypeKey<T>> for DynKey {
    fn from(_: TypeKey<T>) -> Self {
        DynKey::of::<T>()
    }
}

impl PartialEq for DynKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for DynKey {}

impl fmt::Debug for DynKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynKey")
            .field("type_name", &self.type_name)
            .field("ordered", &self.is_ordered())
            .finish()
    }
}
