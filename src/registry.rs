//! Per-type maxima kept side by side in one container.
//!
//! [`MaxRegistry`] maps each value type to its own [`MaxTracker`]. Values are
//! deposited under a [`TypeKey`], whose type parameter must match the value,
//! so one type's deposits can never land in another type's tracker. Callers
//! that only have `Box<dyn Any>` values use a [`DynKey`] instead and get a
//! [`RegistryError::TypeMismatch`] where the compiler can no longer help.

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::comparator::ByFn;
use crate::error::{RegistryError, Result};
use crate::tracker::{MaxTracker, Offer};

use self::erased::ErasedTracker;

pub use self::key::{DynKey, TypeKey};

mod erased;
mod key;


#[derive(Default)]
pub struct MaxRegistry {
    trackers: FxHashMap<TypeId, Box<dyn ErasedTracker>>,
}

impl MaxRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            trackers: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Number of types that have received at least one deposit.
    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }

    pub fn contains<T: ?Sized + 'static>(&self, key: TypeKey<T>) -> bool {
        self.trackers.contains_key(&key.type_id())
    }

    /// Names of the tracked types, in no particular order.
    pub fn tracked_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.trackers.values().map(|t| t.value_type_name())
    }

    /// Deposits `value` under `T`'s natural ordering.
    ///
    /// Returns `None` if this was the first value for `T`, the displaced
    /// maximum if `value` was strictly greater, and `value` itself otherwise.
    pub fn deposit<T: Ord + 'static>(&mut self, key: TypeKey<T>, value: T) -> Result<Option<T>> {
        let offer = self.tracker_mut(key)?.offer(value);
        Ok(Self::report(key.type_name(), offer))
    }

    /// Deposits `value` under `compare` instead of any natural ordering.
    ///
    /// `compare` is only ever called with two present values: the first
    /// deposit for `T` is accepted without consulting it.
    pub fn deposit_with<T, F>(&mut self, key: TypeKey<T>, value: T, compare: F) -> Result<Option<T>>
    where
        T: 'static,
        F: Fn(&T, &T) -> Ordering,
    {
        let offer = self.tracker_mut(key)?.offer_with(value, &ByFn(compare));
        Ok(Self::report(key.type_name(), offer))
    }

    /// Current maximum for `T`. Never creates a tracker.
    pub fn get_max<T: 'static>(&self, key: TypeKey<T>) -> Result<Option<&T>> {
        match self.trackers.get(&key.type_id()) {
            Some(tracker) => tracker
                .as_any()
                .downcast_ref::<MaxTracker<T>>()
                .map(MaxTracker::current)
                .ok_or_else(RegistryError::type_mismatch::<T>),
            None => Ok(None),
        }
    }

    /// Deposits an erased value under the key type's natural ordering.
    ///
    /// Fails with [`RegistryError::InvalidArgument`] if `key` was built with
    /// [`DynKey::unordered`].
    pub fn deposit_dyn(
        &mut self,
        key: &DynKey,
        value: Box<dyn Any>,
    ) -> Result<Option<Box<dyn Any>>> {
        let Some(ordering) = key.ordering else {
            debug!(type_name = key.type_name, "refusing deposit without an ordering");
            return Err(RegistryError::InvalidArgument {
                name: "ordering",
                reason: format!(
                    "`{}` has no natural ordering, deposit it with an explicit one",
                    key.type_name
                ),
            });
        };
        self.deposit_erased(key, value, &ordering)
    }

    pub fn deposit_dyn_with<F>(
        &mut self,
        key: &DynKey,
        value: Box<dyn Any>,
        compare: F,
    ) -> Result<Option<Box<dyn Any>>>
    where
        F: Fn(&dyn Any, &dyn Any) -> Ordering,
    {
        self.deposit_erased(key, value, &compare)
    }

    pub fn get_max_dyn(&self, key: &DynKey) -> Option<&dyn Any> {
        self.trackers
            .get(&key.type_id)
            .and_then(|tracker| tracker.current_any())
    }

    fn deposit_erased(
        &mut self,
        key: &DynKey,
        value: Box<dyn Any>,
        compare: &dyn Fn(&dyn Any, &dyn Any) -> Ordering,
    ) -> Result<Option<Box<dyn Any>>> {
        if (*value).type_id() != key.type_id {
            debug!(expected = key.type_name, "refusing deposit of a foreign value");
            return Err(RegistryError::TypeMismatch {
                expected: key.type_name,
            });
        }
        let tracker = self.trackers.entry(key.type_id).or_insert_with(|| {
            trace!(type_name = key.type_name, "creating tracker");
            (key.new_tracker)()
        });
        let offer = tracker.offer_any(value, compare)?;
        Ok(Self::report(key.type_name, offer))
    }

    fn tracker_mut<T: 'static>(&mut self, key: TypeKey<T>) -> Result<&mut MaxTracker<T>> {
        self.trackers
            .entry(key.type_id())
            .or_insert_with(|| {
                trace!(type_name = key.type_name(), "creating tracker");
                Box::new(MaxTracker::<T>::new()) as Box<dyn ErasedTracker>
            })
            .as_any_mut()
            .downcast_mut::<MaxTracker<T>>()
            .ok_or_else(RegistryError::type_mismatch::<T>)
    }

    fn report<T>(type_name: &'static str, offer: Offer<T>) -> Option<T> {
        if let Offer::Displaced(_) = offer {
            trace!(type_name, "maximum displaced");
        }
        offer.into_returned()
    }
}

impl fmt::Debug for MaxRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.tracked_types()).finish()
    }
}
