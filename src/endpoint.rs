/// A value that can bound an interval or be queried as a point.
///
/// Only [`PartialOrd`] is required so that floats qualify; every relational
/// rule in this crate goes through `<`, `<=` and `==`.
pub trait Endpoint: PartialOrd {
    /// Whether this value is the domain's missing sentinel (NaN, NaT, ...).
    fn is_missing(&self) -> bool {
        false
    }
}

macro_rules! never_missing {
    ($($t:ty),* $(,)?) => {
        $(impl Endpoint for $t {})*
    };
}

never_missing!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Endpoint for f32 {
    fn is_missing(&self) -> bool {
        self.is_nan()
    }
}

impl Endpoint for f64 {
    fn is_missing(&self) -> bool {
        self.is_nan()
    }
}

// `None` is the sentinel: `Option<NaiveDateTime>` models a timestamp column with NaT.
impl<T: Endpoint> Endpoint for Option<T> {
    fn is_missing(&self) -> bool {
        match self {
            Some(x) => x.is_missing(),
            None => true,
        }
    }
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::Endpoint;
    use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone};

    impl Endpoint for NaiveDate {}
    impl Endpoint for NaiveDateTime {}
    impl Endpoint for Duration {}
    impl<Tz: TimeZone> Endpoint for DateTime<Tz> {}
}
