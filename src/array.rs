use std::slice;

#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::closed::Closed;
use crate::endpoint::Endpoint;
use crate::error::{IntervalError, Result};
use crate::interval::Interval;
use crate::query::Query;

/// `Send + Sync` when the `rayon` feature is enabled, nothing otherwise.
#[cfg(feature = "rayon")]
pub trait MaybeSync: Send + Sync {}
#[cfg(feature = "rayon")]
impl<T: Send + Sync> MaybeSync for T {}

/// `Send + Sync` when the `rayon` feature is enabled, nothing otherwise.
#[cfg(not(feature = "rayon"))]
pub trait MaybeSync {}
#[cfg(not(feature = "rayon"))]
impl<T> MaybeSync for T {}

/// An ordered sequence of intervals sharing one closure mode, where any
/// position may be missing.
///
/// Queries broadcast one scalar interval or point against every position and
/// return one boolean per position; missing positions always answer `false`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "ArrayParts<T>",
        bound(deserialize = "T: Endpoint + Deserialize<'de>")
    )
)]
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalArray<T> {
    closed: Closed,
    intervals: Vec<Option<Interval<T>>>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Endpoint + Deserialize<'de>"))]
struct ArrayParts<T> {
    closed: Closed,
    intervals: Vec<Option<Interval<T>>>,
}

#[cfg(feature = "serde")]
impl<T: Endpoint> TryFrom<ArrayParts<T>> for IntervalArray<T> {
    type Error = IntervalError;

    fn try_from(parts: ArrayParts<T>) -> Result<Self> {
        IntervalArray::from_intervals(parts.intervals, parts.closed)
    }
}

impl<T> IntervalArray<T> {
    pub fn closed(&self) -> Closed {
        self.closed
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The interval at `index`, or `None` if it is missing or out of range.
    pub fn get(&self, index: usize) -> Option<&Interval<T>> {
        self.intervals.get(index).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.intervals.iter(),
        }
    }

    /// The missing mask: `true` where a position holds no interval.
    pub fn isna(&self) -> Vec<bool> {
        self.intervals.iter().map(Option::is_none).collect()
    }
}

impl<T: Endpoint> IntervalArray<T> {
    /// Builds an array from `(left, right)` pairs.
    ///
    /// `None`, or a pair whose endpoints are both missing, becomes a missing
    /// position. A pair with exactly one missing endpoint is an error.
    ///
    /// ```
    /// use interval_ops::{Closed, IntervalArray, Query};
    ///
    /// let array = IntervalArray::from_tuples(
    ///     vec![Some((0, 2)), None, Some((4, 6))],
    ///     Closed::Right,
    /// ).unwrap();
    /// assert_eq!(array.contains(Query::Point(&2)).unwrap(), vec![true, false, false]);
    /// ```
    pub fn from_tuples<I>(tuples: I, closed: Closed) -> Result<IntervalArray<T>>
    where
        I: IntoIterator<Item = Option<(T, T)>>,
    {
        let intervals = tuples
            .into_iter()
            .map(|tuple| match tuple {
                None => Ok(None),
                Some((left, right)) => match (left.is_missing(), right.is_missing()) {
                    (true, true) => Ok(None),
                    (false, false) => Interval::new(left, right, closed).map(Some),
                    _ => {
                        debug!("rejected tuple with one missing endpoint");
                        Err(IntervalError::Value(String::from(
                            "missing values must be missing in the same location both left and right sides",
                        )))
                    }
                },
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(IntervalArray { closed, intervals })
    }

    /// Builds adjacent intervals from consecutive breaks: `n` breaks give
    /// `n - 1` intervals.
    pub fn from_breaks<I>(breaks: I, closed: Closed) -> Result<IntervalArray<T>>
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        let mut breaks = breaks.into_iter();
        let mut intervals = Vec::new();
        if let Some(mut previous) = breaks.next() {
            for next in breaks {
                intervals.push(Some(Interval::new(previous, next.clone(), closed)?));
                previous = next;
            }
        }

        Ok(IntervalArray { closed, intervals })
    }

    /// Collects prebuilt intervals. Every one of them must be closed like `closed`.
    pub fn from_intervals<I>(intervals: I, closed: Closed) -> Result<IntervalArray<T>>
    where
        I: IntoIterator<Item = Option<Interval<T>>>,
    {
        let intervals: Vec<_> = intervals.into_iter().collect();
        if let Some(mismatch) = intervals.iter().flatten().find(|iv| iv.closed() != closed) {
            debug!(expected = %closed, got = %mismatch.closed(), "rejected mixed closure modes");
            return Err(IntervalError::Value(format!(
                "intervals must all be closed on the same side: expected '{}', got '{}'",
                closed,
                mismatch.closed()
            )));
        }

        Ok(IntervalArray { closed, intervals })
    }
}

impl<T: Endpoint + MaybeSync> IntervalArray<T> {
    /// Elementwise [`Interval::overlaps`] against a single interval.
    ///
    /// A point is a type error; another array is not supported.
    pub fn overlaps(&self, query: Query<'_, T>) -> Result<Vec<bool>> {
        let other = match query {
            Query::Interval(other) => other,
            Query::Point(_) => {
                let got = query.type_name();
                debug!(got = %got, "rejected overlaps query");
                return Err(IntervalError::expected_interval(got));
            }
            Query::Array(_) => {
                debug!("rejected array-vs-array overlaps");
                return Err(IntervalError::NotSupported(String::from("overlaps")));
            }
        };

        trace!(len = self.len(), "overlaps");
        Ok(self.elementwise(|interval| interval.overlaps(other)))
    }

    /// Elementwise [`Interval::contains`] or [`Interval::contains_interval`].
    ///
    /// Another array is not supported.
    pub fn contains(&self, query: Query<'_, T>) -> Result<Vec<bool>> {
        match query {
            Query::Point(point) => {
                trace!(len = self.len(), "contains point");
                Ok(self.elementwise(|interval| interval.contains(point)))
            }
            Query::Interval(other) => {
                trace!(len = self.len(), "contains interval");
                Ok(self.elementwise(|interval| interval.contains_interval(other)))
            }
            Query::Array(_) => {
                debug!("rejected array-vs-array contains");
                Err(IntervalError::NotSupported(String::from("contains")))
            }
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn elementwise<F>(&self, op: F) -> Vec<bool>
    where
        F: Fn(&Interval<T>) -> bool,
    {
        self.intervals
            .iter()
            .map(|slot| slot.as_ref().map_or(false, &op))
            .collect()
    }

    #[cfg(feature = "rayon")]
    fn elementwise<F>(&self, op: F) -> Vec<bool>
    where
        F: Fn(&Interval<T>) -> bool + Send + Sync,
    {
        self.intervals
            .par_iter()
            .map(|slot| slot.as_ref().map_or(false, &op))
            .collect()
    }
}

/// Iterator over the positions of an [`IntervalArray`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Option<Interval<T>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Option<&'a Interval<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a IntervalArray<T> {
    type Item = Option<&'a Interval<T>>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
