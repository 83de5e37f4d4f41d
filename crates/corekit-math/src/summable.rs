//! Owned, ordered sequence with sum and average
//!
//! [`Summable`] copies its input, so mutating the source afterwards never
//! affects the aggregable view.

use std::ops::Deref;

use crate::numeric::Numeric;

/// An ordered sequence of one numeric kind offering [`sum`](Summable::sum)
/// and [`average`](Summable::average).
///
/// ```rust
/// use corekit_math::Summable;
///
/// let values = Summable::from(vec![2, 4, 6]);
/// assert_eq!(values.sum(), 12);
/// assert_eq!(values.average(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Summable<T> {
    items: Vec<T>,
}

impl<T: Numeric> Summable<T> {
    /// Build from anything iterable, copying the elements.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Summable {
            items: items.into_iter().collect(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Fold by addition, seeded at the kind's zero. An empty sequence
    /// yields zero.
    pub fn sum(&self) -> T {
        self.items.iter().fold(T::zero(), |acc, &x| T::add(acc, x))
    }

    /// The sum divided by the element count, via integer-divisor
    /// division. An empty sequence divides by zero and so follows the
    /// kind's native policy: fatal for the integer kinds, NaN for the
    /// float kinds.
    pub fn average(&self) -> T {
        T::div_int(self.sum(), self.items.len() as i32)
    }
}

impl<T> Deref for Summable<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T: Numeric> From<Vec<T>> for Summable<T> {
    fn from(items: Vec<T>) -> Self {
        Summable { items }
    }
}

impl<'a, T: Numeric> From<&'a [T]> for Summable<T> {
    fn from(items: &'a [T]) -> Self {
        Summable {
            items: items.to_vec(),
        }
    }
}

impl<T: Numeric> FromIterator<T> for Summable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Summable {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Numeric> Extend<T> for Summable<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
