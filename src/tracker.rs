use crate::comparator::{Comparator, Max};
use crate::find_max::absorb;

#[cfg(test)]
mod tests;

/// What happened to a value offered to a [`MaxTracker`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Offer<T> {
    /// The tracker was empty; the candidate is now the maximum.
    Accepted,
    /// The candidate was strictly greater and replaced this value.
    Displaced(T),
    /// The candidate did not beat the current maximum and is handed back.
    Rejected(T),
}

impl<T> Offer<T> {
    /// The value handed back to the caller: nothing when the tracker was
    /// empty, the displaced maximum, or the rejected candidate.
    pub fn into_returned(self) -> Option<T> {
        match self {
            Offer::Accepted => None,
            Offer::Displaced(previous) => Some(previous),
            Offer::Rejected(candidate) => Some(candidate),
        }
    }

    /// Whether the offered candidate became the maximum.
    pub fn is_retained(&self) -> bool {
        !matches!(self, Offer::Rejected(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Offer<U> {
        match self {
            Offer::Accepted => Offer::Accepted,
            Offer::Displaced(previous) => Offer::Displaced(f(previous)),
            Offer::Rejected(candidate) => Offer::Rejected(f(candidate)),
        }
    }
}

/// Running maximum of a stream of values under a fixed ordering.
#[derive(Debug, Clone)]
pub struct MaxTracker<T, C = Max<T>> {
    max: Option<T>,
    compare: C,
}

impl<T, C: Default> Default for MaxTracker<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T> MaxTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts out holding `value`, as if it had been offered first.
    pub fn with_initial(value: T) -> Self {
        Self {
            max: Some(value),
            compare: Max::default(),
        }
    }
}

impl<T, C> MaxTracker<T, C> {
    pub fn with_comparator(compare: C) -> Self {
        Self { max: None, compare }
    }

    pub fn current(&self) -> Option<&T> {
        self.max.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.max.is_none()
    }

    pub fn into_inner(self) -> Option<T> {
        self.max
    }

    pub fn offer(&mut self, candidate: T) -> Offer<T>
    where
        C: Comparator<T>,
    {
        absorb(&mut self.max, candidate, &self.compare)
    }

    /// Offers `candidate` under `compare` instead of the tracker's own
    /// ordering. The first value offered always wins, whatever `compare` is.
    pub fn offer_with<D>(&mut self, candidate: T, compare: &D) -> Offer<T>
    where
        D: Comparator<T> + ?Sized,
    {
        absorb(&mut self.max, candidate, compare)
    }
}

impl<T, C: Comparator<T>> Extend<T> for MaxTracker<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for candidate in iter {
            let _ = self.offer(candidate);
        }
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for MaxTracker<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tracker = Self::default();
        tracker.extend(iter);
        tracker
    }
}
