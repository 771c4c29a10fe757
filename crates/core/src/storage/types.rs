use chrono::{Duration, NaiveDate};

/// Default window, in days, for the expiring-soon listing.
pub const DEFAULT_EXPIRING_WINDOW_DAYS: i64 = 7;

/// Optional predicates for listing items.
///
/// Supplied predicates narrow the result set together (logical AND); absent
/// predicates impose no constraint. The name match is a case-sensitive
/// substring containment check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Substring that must occur in the item name.
    pub q: Option<String>,
    /// Required value of the opened flag.
    pub opened: Option<bool>,
    /// Inclusive upper bound on the best-before date.
    pub expires_before: Option<NaiveDate>,
}

impl ItemFilter {
    /// Creates a filter with no constraints; lists everything.
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates the filter behind the expiring-soon listing: items whose
    /// best-before date falls on or before `today + days`.
    ///
    /// `days` may be negative, which selects only already-expired items.
    pub fn expiring_within(today: NaiveDate, days: i64) -> Self {
        Self {
            expires_before: Some(today + Duration::days(days)),
            ..Self::default()
        }
    }

    /// Sets the name substring predicate.
    pub fn with_name_containing(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Sets the opened flag predicate.
    pub fn with_opened(mut self, opened: bool) -> Self {
        self.opened = Some(opened);
        self
    }

    /// Sets the inclusive best-before upper bound.
    pub fn with_expires_before(mut self, date: NaiveDate) -> Self {
        self.expires_before = Some(date);
        self
    }
}
