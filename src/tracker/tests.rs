use std::cmp::Ordering;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::comparator::{ByFn, Min};

#[test]
fn starts_empty() {
    let tracker = MaxTracker::<i32>::new();
    assert!(tracker.is_empty());
    assert_eq!(tracker.current(), None);
}

#[test]
fn reports_displaced_or_rejected() {
    let mut tracker = MaxTracker::new();
    let offers: Vec<_> = [5, 3, 9, 1].into_iter().map(|v| tracker.offer(v)).collect();
    assert_eq!(
        offers,
        vec![
            Offer::Accepted,
            Offer::Rejected(3),
            Offer::Displaced(5),
            Offer::Rejected(1),
        ]
    );
    assert_eq!(
        offers.into_iter().map(Offer::into_returned).collect::<Vec<_>>(),
        vec![None, Some(3), Some(5), Some(1)]
    );
    assert_eq!(tracker.current(), Some(&9));
}

#[test]
fn equal_candidate_is_rejected() {
    let by_first = ByFn(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
    let mut tracker = MaxTracker::with_comparator(by_first);
    assert_eq!(tracker.offer((1, 'a')), Offer::Accepted);
    assert_eq!(tracker.offer((1, 'b')), Offer::Rejected((1, 'b')));
    assert_eq!(tracker.current(), Some(&(1, 'a')));
}

#[test]
fn seeded_tracker_holds_initial() {
    let mut tracker = MaxTracker::with_initial(10);
    assert_eq!(tracker.offer(4), Offer::Rejected(4));
    assert_eq!(tracker.offer(11), Offer::Displaced(10));
    assert_eq!(tracker.into_inner(), Some(11));
}

#[test]
fn min_comparator_tracks_smallest() {
    let tracker: MaxTracker<i32, Min<i32>> = [3, -2, 8].into_iter().collect();
    assert_eq!(tracker.current(), Some(&-2));
}

#[test]
fn offer_with_never_compares_against_nothing() {
    let mut tracker = MaxTracker::<&str>::new();
    let calls = std::cell::Cell::new(0);
    let counting = ByFn(|a: &&str, b: &&str| {
        calls.set(calls.get() + 1);
        a.len().cmp(&b.len())
    });

    assert_eq!(tracker.offer_with("abc", &counting), Offer::Accepted);
    assert_eq!(calls.get(), 0);
    assert_eq!(tracker.offer_with("z", &counting), Offer::Rejected("z"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn offer_with_overrides_natural_ordering() {
    let mut tracker = MaxTracker::new();
    let _ = tracker.offer(7);
    let reversed = ByFn(|a: &i32, b: &i32| b.cmp(a));
    assert_eq!(tracker.offer_with(2, &reversed), Offer::Displaced(7));
    assert_eq!(tracker.offer(5), Offer::Displaced(2));
}

#[test]
fn offer_helpers() {
    assert!(Offer::<u8>::Accepted.is_retained());
    assert!(Offer::Displaced(1).is_retained());
    assert!(!Offer::Rejected(1).is_retained());
    assert_eq!(Offer::Rejected(2).map(|v| v * 10), Offer::Rejected(20));
}

proptest! {
    #[test]
    fn maximum_never_decreases(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut tracker = MaxTracker::new();
        let mut last = None;
        for value in values {
            let _ = tracker.offer(value);
            let now = tracker.current().copied();
            prop_assert!(last.cmp(&now) != Ordering::Greater);
            last = now;
        }
    }

    #[test]
    fn returned_value_is_never_the_new_max(a in any::<i64>(), b in any::<i64>()) {
        let mut tracker = MaxTracker::new();
        let _ = tracker.offer(a);
        let returned = tracker.offer(b).into_returned();
        prop_assert_eq!(returned, Some(a.min(b)));
        prop_assert_eq!(tracker.current(), Some(&a.max(b)));
    }
}
