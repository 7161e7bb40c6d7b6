// src/models/month_key.rs
use std::fmt;

/// The `YYYYMM` prefix of a date token. Names both the grouping bucket and
/// the digest file written for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey(String);

impl MonthKey {
    /// Takes the first six characters of `date`. Returns `None` when the
    /// token is shorter than that or the prefix is not all ASCII digits.
    #[inline]
    #[must_use]
    pub fn from_date(date: &str) -> Option<Self> {
        date.get(..6)
            .filter(|month| month.bytes().all(|b| b.is_ascii_digit()))
            .map(|month| Self(month.to_owned()))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn year(&self) -> &str {
        &self.0[..4]
    }

    #[inline]
    #[must_use]
    pub fn month(&self) -> &str {
        &self.0[4..]
    }

    /// Name of the digest file for this month, e.g. `202301.md`.
    #[inline]
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.md", self.0)
    }

    /// Numeric `year * 100 + month` value used for month comparisons.
    #[inline]
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
            .bytes()
            .fold(0, |acc, digit| acc * 10 + u32::from(digit - b'0'))
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
