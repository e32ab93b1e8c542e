//! Maximum of a finite sequence under an ordering.
//!
//! Unlike [`Iterator::max_by`], ties keep the first element seen: a later
//! element only replaces the running maximum when it is strictly greater.

use std::cmp::Ordering;
use std::mem;

use crate::comparator::{ByFn, Comparator, Max};
use crate::error::MaxError;
use crate::tracker::Offer;


/// Folds `candidate` into `slot`, the running maximum under `compare`.
///
/// An empty slot always takes the candidate; `compare` is only consulted
/// when there is a present value to compare against.
pub(crate) fn absorb<T, C>(slot: &mut Option<T>, candidate: T, compare: &C) -> Offer<T>
where
    C: Comparator<T> + ?Sized,
{
    match slot {
        Some(current) => {
            if compare.favors(&candidate, current) {
                Offer::Displaced(mem::replace(current, candidate))
            } else {
                Offer::Rejected(candidate)
            }
        }
        None => {
            *slot = Some(candidate);
            Offer::Accepted
        }
    }
}

pub fn find_max_with<I, C>(iter: I, compare: &C) -> Option<I::Item>
where
    I: IntoIterator,
    C: Comparator<I::Item> + ?Sized,
{
    let mut max = None;
    for item in iter {
        let _ = absorb(&mut max, item, compare);
    }
    max
}

/// Returns the first greatest element of `iter` under `compare`, or `None`
/// when `iter` is empty.
pub fn find_max_by<I, F>(iter: I, compare: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: Fn(&I::Item, &I::Item) -> Ordering,
{
    find_max_with(iter, &ByFn(compare))
}

pub fn find_max<I>(iter: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    find_max_with(iter, &Max::default())
}

pub fn find_max_by_key<I, K, F>(iter: I, key: F) -> Option<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: Fn(&I::Item) -> K,
{
    find_max_by(iter, |a, b| key(a).cmp(&key(b)))
}

/// Like [`find_max_by`], but treats an empty sequence as an error.
pub fn require_max_by<I, F>(iter: I, compare: F) -> Result<I::Item, MaxError>
where
    I: IntoIterator,
    F: Fn(&I::Item, &I::Item) -> Ordering,
{
    find_max_by(iter, compare).ok_or(MaxError::EmptySequence)
}
