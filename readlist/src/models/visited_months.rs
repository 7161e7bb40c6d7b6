// src/models/visited_months.rs
use crate::models::MonthKey;
use std::collections::BTreeSet;

/// Months whose digest file already got its header during the current run.
#[derive(Debug, Default, Clone)]
pub struct VisitedMonths {
    months: BTreeSet<MonthKey>,
}

impl VisitedMonths {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            months: BTreeSet::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, month: &MonthKey) -> bool {
        self.months.contains(month)
    }

    /// Marks `month` as initialised. Returns `false` if it already was.
    #[inline]
    pub fn insert(&mut self, month: MonthKey) -> bool {
        self.months.insert(month)
    }
}
