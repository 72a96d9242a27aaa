//! Relational queries over intervals with left/right/both/neither closure
//! ([`Interval`]), and their elementwise versions over arrays of possibly
//! missing intervals ([`IntervalArray`]). It answers "does interval `a` overlap
//! interval `b`?" and "is point `p` (or interval `i`) contained in `a`?",
//! getting shared endpoints and degenerate (`left == right`) intervals right
//! for every pair of closure modes.
//!
//! Any type satisfying [`PartialOrd`] can be used as an endpoint once it
//! implements [`Endpoint`], which also tells the crate what the domain's
//! missing value is (`NaN` for floats, `None` for `Option<T>`).
//!
//! ```
//! use interval_ops::{Closed, Interval, IntervalArray, Query};
//!
//! let a = Interval::new(0, 3, Closed::Right).unwrap();
//! let b = Interval::new(3, 5, Closed::Left).unwrap();
//! assert!(a.overlaps(&b));
//!
//! let array = IntervalArray::from_breaks(0..4, Closed::Left).unwrap();
//! assert_eq!(array.overlaps(Query::from(&b)).unwrap(), vec![false, false, false]);
//! assert_eq!(array.contains(Query::Point(&1)).unwrap(), vec![false, true, false]);
//! ```
//!
//! ## Crate features
//!
//! - **serde**: `Serialize`/`Deserialize` for [`Closed`], [`Interval`] and
//!   [`IntervalArray`]. Deserialized values are validated like constructed ones.
//! - **chrono**: [`Endpoint`] for chrono's dates, datetimes and durations.
//! - **rayon**: array queries are evaluated in parallel.

pub mod array;
pub mod closed;
pub mod endpoint;
pub mod error;
pub mod interval;
pub mod query;

pub use array::{IntervalArray, MaybeSync};
pub use closed::Closed;
pub use endpoint::Endpoint;
pub use error::{IntervalError, Result};
pub use interval::Interval;
pub use query::Query;
