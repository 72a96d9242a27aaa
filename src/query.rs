use crate::array::IntervalArray;
use crate::interval::Interval;

/// The shape of a relational query argument.
///
/// Callers that only ever hold one shape should use the typed methods on
/// [`Interval`] directly; this is for call sites that dispatch on what they
/// were handed.
#[derive(Debug)]
pub enum Query<'a, T> {
    Point(&'a T),
    Interval(&'a Interval<T>),
    Array(&'a IntervalArray<T>),
}

// Not derived: the derive would require `T: Clone`.
impl<'a, T> Clone for Query<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Query<'a, T> {}

impl<'a, T> Query<'a, T> {
    /// Human-readable type name, for error messages only.
    pub fn type_name(&self) -> String {
        match self {
            Query::Point(_) => short_type_name::<T>(),
            Query::Interval(_) => String::from("Interval"),
            Query::Array(_) => String::from("IntervalArray"),
        }
    }
}

impl<'a, T> From<&'a Interval<T>> for Query<'a, T> {
    fn from(interval: &'a Interval<T>) -> Self {
        Query::Interval(interval)
    }
}

impl<'a, T> From<&'a IntervalArray<T>> for Query<'a, T> {
    fn from(array: &'a IntervalArray<T>) -> Self {
        Query::Array(array)
    }
}

/// `std::any::type_name` with module paths stripped from every segment,
/// e.g. `core::option::Option<chrono::naive::date::NaiveDate>` becomes
/// `Option<NaiveDate>`.
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    strip_paths(std::any::type_name::<T>())
}

fn strip_paths(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut ident = String::new();
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            ident.clear();
        } else if c.is_alphanumeric() || c == '_' {
            ident.push(c);
        } else {
            out.push_str(&ident);
            ident.clear();
            out.push(c);
        }
    }
    out.push_str(&ident);
    out
}
