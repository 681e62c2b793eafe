use chrono::{Local, NaiveDate};

/// A simple clock abstraction so the form's default date is deterministic in tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(NaiveDate),
}

impl Clock {
    /// Returns a clock that uses the local calendar date.
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    /// Returns a clock fixed at the given date.
    #[must_use]
    pub fn fixed(on: NaiveDate) -> Self {
        Self::Fixed(on)
    }

    /// Today's date according to the clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::Default => Local::now().date_naive(),
            Clock::Fixed(d) => *d,
        }
    }

    /// Returns true if this clock is fixed.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Clock::Fixed(_))
    }
}

/// Returns a deterministic date (2024-01-01) for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed date cannot be represented.
#[must_use]
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("fixed date should be valid")
}

/// Returns a `Clock` fixed at the deterministic test date.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_today())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_date() {
        let clock = fixed_clock();
        assert!(clock.is_fixed());
        assert_eq!(clock.today(), fixed_today());
    }

    #[test]
    fn default_clock_is_not_fixed() {
        assert!(!Clock::default_clock().is_fixed());
    }
}
