use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// Natural ordering, largest value favored.
pub struct Max<T>(PhantomData<fn() -> T>);

impl<T> Default for Max<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T> Clone for Max<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Max<T> {}

impl<T> fmt::Debug for Max<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Max")
    }
}

/// Natural ordering reversed, smallest value favored.
pub struct Min<T>(PhantomData<fn() -> T>);

impl<T> Default for Min<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T> Clone for Min<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Min<T> {}

impl<T> fmt::Debug for Min<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Min")
    }
}

/// Injected ordering: `a` is favored over `b` when the function says `a > b`.
#[derive(Clone, Copy)]
pub struct ByFn<F>(pub F);

impl<F> fmt::Debug for ByFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ByFn(..)")
    }
}

/// Decides which of two values outranks the other.
///
/// `favors` must be strict: a value never favors something equal to it.
pub trait Comparator<T: ?Sized> {
    fn favors(&self, a: &T, b: &T) -> bool;

    fn favored<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if self.favors(b, a) {
            b
        } else {
            a
        }
    }
}

impl<T: PartialOrd> Comparator<T> for Max<T> {
    fn favors(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: PartialOrd> Comparator<T> for Min<T> {
    fn favors(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: ?Sized, F> Comparator<T> for ByFn<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn favors(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b) == Ordering::Greater
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    fn favors(&self, a: &T, b: &T) -> bool {
        (**self).favors(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_and_min_are_strict() {
        assert!(Max::default().favors(&2, &1));
        assert!(!Max::default().favors(&1, &1));
        assert!(Min::default().favors(&1, &2));
        assert!(!Min::default().favors(&1, &1));
    }

    #[test]
    fn favored_keeps_left_on_ties() {
        let by_len = ByFn(|a: &&str, b: &&str| a.len().cmp(&b.len()));
        let (a, b) = ("ab", "cd");
        assert!(std::ptr::eq(by_len.favored(&a, &b), &a));
        assert_eq!(*by_len.favored(&"a", &"xyz"), "xyz");
    }

    #[test]
    fn by_fn_only_favors_greater() {
        let reversed = ByFn(|a: &i32, b: &i32| b.cmp(a));
        assert!(reversed.favors(&1, &2));
        assert!(!reversed.favors(&2, &1));
        assert!(!reversed.favors(&2, &2));
    }
}
