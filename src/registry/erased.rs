use std::any::{self, Any};
use std::cmp::Ordering;

use tracing::warn;

use crate::comparator::ByFn;
use crate::error::{RegistryError, Result};
use crate::tracker::{MaxTracker, Offer};

/// A [`MaxTracker`] with its value type erased, as stored in the registry.
pub(crate) trait ErasedTracker {
    fn value_type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn current_any(&self) -> Option<&dyn Any>;

    fn offer_any(
        &mut self,
        value: Box<dyn Any>,
        compare: &dyn Fn(&dyn Any, &dyn Any) -> Ordering,
    ) -> Result<Offer<Box<dyn Any>>>;
}

impl<T: 'static> ErasedTracker for MaxTracker<T> {
    fn value_type_name(&self) -> &'static str {
        any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn current_any(&self) -> Option<&dyn Any> {
        self.current().map(|value| value as &dyn Any)
    }

    fn offer_any(
        &mut self,
        value: Box<dyn Any>,
        compare: &dyn Fn(&dyn Any, &dyn Any) -> Ordering,
    ) -> Result<Offer<Box<dyn Any>>> {
        let value = value
            .downcast::<T>()
            .map_err(|_| RegistryError::type_mismatch::<T>())?;
        let compare = ByFn(|a: &T, b: &T| compare(a as &dyn Any, b as &dyn Any));
        Ok(self
            .offer_with(*value, &compare)
            .map(|v| Box::new(v) as Box<dyn Any>))
    }
}

pub(crate) fn new_tracker<T: 'static>() -> Box<dyn ErasedTracker> {
    Box::new(MaxTracker::<T>::new())
}

pub(crate) fn natural_ordering<T: Ord + 'static>(a: &dyn Any, b: &dyn Any) -> Ordering {
    match (a.downcast_ref::<T>(), b.downcast_ref::<T>()) {
        (Some(a), Some(b)) => a.cmp(b),
        _ => {
            warn!(
                expected = any::type_name::<T>(),
                "erased ordering called with a foreign value"
            );
            Ordering::Equal
        }
    }
}
