#![allow(dead_code)]

use std::fmt::Debug;

use interval_ops::{Closed, Endpoint, Interval, IntervalArray};

/// An endpoint domain for fixtures: a start value, a shift, and the domain's
/// missing value if it has one.
pub struct Domain<T> {
    pub name: &'static str,
    half_shift: Box<dyn Fn(i32) -> T>,
    pub missing: Option<T>,
}

impl<T: Endpoint + Clone + Debug> Domain<T> {
    /// `start + shifts * shift`.
    pub fn at(&self, shifts: i32) -> T {
        (self.half_shift)(2 * shifts)
    }

    /// `start + (halves / 2) * shift`, for midpoints.
    pub fn half(&self, halves: i32) -> T {
        (self.half_shift)(halves)
    }

    pub fn interval(&self, left: i32, right: i32, closed: Closed) -> Interval<T> {
        iv(self.at(left), self.at(right), closed)
    }

    pub fn array(&self, tuples: &[Option<(i32, i32)>], closed: Closed) -> IntervalArray<T> {
        IntervalArray::from_tuples(
            tuples
                .iter()
                .map(|tuple| tuple.map(|(left, right)| (self.at(left), self.at(right)))),
            closed,
        )
        .unwrap()
    }
}

pub fn iv<T: Endpoint>(left: T, right: T, closed: Closed) -> Interval<T> {
    Interval::new(left, right, closed).unwrap()
}

pub fn integers() -> Domain<i64> {
    Domain {
        name: "i64",
        half_shift: Box::new(|h| 10 + 5 * i64::from(h)),
        missing: None,
    }
}

pub fn floats() -> Domain<f64> {
    Domain {
        name: "f64",
        half_shift: Box::new(|h| -1.0 + 0.25 * f64::from(h)),
        missing: Some(f64::NAN),
    }
}

pub fn nullable() -> Domain<Option<i32>> {
    Domain {
        name: "Option<i32>",
        half_shift: Box::new(|h| Some(2 * h)),
        missing: Some(None),
    }
}

#[cfg(feature = "chrono")]
pub fn timestamps() -> Domain<Option<chrono::NaiveDateTime>> {
    let start = chrono::NaiveDate::from_ymd_opt(2018, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    Domain {
        name: "Option<NaiveDateTime>",
        half_shift: Box::new(move |h| Some(start + chrono::Duration::hours(12 * i64::from(h)))),
        missing: Some(None),
    }
}

#[cfg(feature = "chrono")]
pub fn timedeltas() -> Domain<chrono::Duration> {
    Domain {
        name: "Duration",
        half_shift: Box::new(|h| chrono::Duration::hours(12 * i64::from(h))),
        missing: None,
    }
}

/// Runs a generic check against every fixture domain.
macro_rules! for_each_domain {
    ($check:ident) => {
        $check(&common::integers());
        $check(&common::floats());
        $check(&common::nullable());
        #[cfg(feature = "chrono")]
        {
            $check(&common::timestamps());
            $check(&common::timedeltas());
        }
    };
}

pub fn pairs() -> impl Iterator<Item = (Closed, Closed)> {
    Closed::ALL
        .into_iter()
        .flat_map(|closed| Closed::ALL.into_iter().map(move |other| (closed, other)))
}
