use std::fmt;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::closed::Closed;
use crate::endpoint::Endpoint;
use crate::error::{IntervalError, Result};
use crate::query::Query;

/// A range between two endpoints of one ordered domain, with a closure mode.
///
/// Invariant: `left <= right`, and neither endpoint is missing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "IntervalParts<T>",
        bound(deserialize = "T: Endpoint + Deserialize<'de>")
    )
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    left: T,
    right: T,
    closed: Closed,
}

// Unvalidated wire form; deserialization goes through `Interval::new`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct IntervalParts<T> {
    left: T,
    right: T,
    closed: Closed,
}

#[cfg(feature = "serde")]
impl<T: Endpoint> TryFrom<IntervalParts<T>> for Interval<T> {
    type Error = IntervalError;

    fn try_from(parts: IntervalParts<T>) -> Result<Self> {
        Interval::new(parts.left, parts.right, parts.closed)
    }
}

impl<T> fmt::Display for Interval<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let start = if self.closed_left() { "[" } else { "(" };
        let end = if self.closed_right() { "]" } else { ")" };
        write!(f, "{}{}, {}{}", start, self.left, self.right, end)
    }
}

impl<T> Interval<T> {
    pub fn left(&self) -> &T {
        &self.left
    }

    pub fn right(&self) -> &T {
        &self.right
    }

    pub fn closed(&self) -> Closed {
        self.closed
    }

    pub fn closed_left(&self) -> bool {
        self.closed.closed_left()
    }

    pub fn closed_right(&self) -> bool {
        self.closed.closed_right()
    }

    pub fn open_left(&self) -> bool {
        self.closed.open_left()
    }

    pub fn open_right(&self) -> bool {
        self.closed.open_right()
    }

    pub fn into_inner(self) -> (T, T, Closed) {
        (self.left, self.right, self.closed)
    }
}

impl<T: Endpoint> Interval<T> {
    /// Builds an interval, rejecting missing or unordered endpoints.
    ///
    /// ```
    /// use interval_ops::{Closed, Interval};
    ///
    /// let interval = Interval::new(0, 3, Closed::Right).unwrap();
    /// assert!(interval.contains(&3));
    /// assert!(Interval::new(3, 0, Closed::Right).is_err());
    /// ```
    pub fn new(left: T, right: T, closed: Closed) -> Result<Interval<T>> {
        if left.is_missing() || right.is_missing() {
            debug!("rejected interval with a missing endpoint");
            return Err(IntervalError::Value(String::from(
                "missing values are not valid interval endpoints",
            )));
        }
        // Also catches incomparable endpoints.
        if !(left <= right) {
            debug!("rejected interval with left > right");
            return Err(IntervalError::Value(String::from(
                "left side of interval must be <= right side",
            )));
        }

        Ok(Interval {
            left,
            right,
            closed,
        })
    }

    /// A degenerate interval that excludes its single candidate point.
    pub fn is_empty(&self) -> bool {
        self.left == self.right && !(self.closed_left() && self.closed_right())
    }

    /// Whether the two intervals share at least one point.
    ///
    /// Empty intervals never overlap anything, themselves included.
    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        // A shared endpoint only counts if both sides touching it include it.
        let self_starts_first = if self.closed_left() && other.closed_right() {
            self.left <= other.right
        } else {
            self.left < other.right
        };
        let other_starts_first = if other.closed_left() && self.closed_right() {
            other.left <= self.right
        } else {
            other.left < self.right
        };

        self_starts_first && other_starts_first
    }

    /// Whether `point` lies in the interval. A missing point never does.
    pub fn contains(&self, point: &T) -> bool {
        if point.is_missing() {
            return false;
        }

        let after_left = if self.closed_left() {
            self.left <= *point
        } else {
            self.left < *point
        };
        let before_right = if self.closed_right() {
            *point <= self.right
        } else {
            *point < self.right
        };

        after_left && before_right
    }

    /// Whether every point of `other` is a point of `self`.
    ///
    /// An empty `other` is contained by everything, whatever its coordinates.
    pub fn contains_interval(&self, other: &Interval<T>) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.is_empty() {
            return false;
        }

        let left_ok = self.left < other.left
            || (self.left == other.left && (self.closed_left() || other.open_left()));
        let right_ok = self.right > other.right
            || (self.right == other.right && (self.closed_right() || other.open_right()));

        left_ok && right_ok
    }

    /// [`Interval::overlaps`] for a query of unknown shape.
    ///
    /// Anything but an interval is a type error.
    pub fn overlaps_query(&self, query: Query<'_, T>) -> Result<bool> {
        match query {
            Query::Interval(other) => Ok(self.overlaps(other)),
            Query::Point(_) | Query::Array(_) => {
                let got = query.type_name();
                debug!(got = %got, "rejected overlaps query");
                Err(IntervalError::expected_interval(got))
            }
        }
    }

    /// [`Interval::contains`] or [`Interval::contains_interval`], depending on
    /// the query shape.
    pub fn contains_query(&self, query: Query<'_, T>) -> Result<bool> {
        match query {
            Query::Point(point) => Ok(self.contains(point)),
            Query::Interval(other) => Ok(self.contains_interval(other)),
            Query::Array(_) => {
                let got = query.type_name();
                debug!(got = %got, "rejected contains query");
                Err(IntervalError::expected_interval_or_point(got))
            }
        }
    }

    /// Translates both endpoints by `by`, keeping the closure mode.
    pub fn shift<D>(&self, by: D) -> Result<Interval<T>>
    where
        T: Clone + Add<D, Output = T>,
        D: Clone,
    {
        Interval::new(
            self.left.clone() + by.clone(),
            self.right.clone() + by,
            self.closed,
        )
    }

    pub fn length<D>(&self) -> D
    where
        T: Clone + Sub<Output = D>,
    {
        self.right.clone() - self.left.clone()
    }
}
