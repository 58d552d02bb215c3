//! Daily affirmations.

use chrono::{Datelike, NaiveDate};

/// Built-in affirmations.
pub const AFFIRMATIONS: [&str; 5] = [
    "I am worthy of love and respect.",
    "I am capable of achieving my goals.",
    "I am grateful for the good in my life.",
    "I am strong and resilient.",
    "I am at peace with myself.",
];

/// Every affirmation in display order.
#[must_use]
pub fn all() -> &'static [&'static str] {
    &AFFIRMATIONS
}

/// The affirmation for a given day.
///
/// Rotates through the list by day of year, so everyone sees the same one
/// on the same date.
#[must_use]
pub fn for_date(date: NaiveDate) -> &'static str {
    let index = date.ordinal0() as usize % AFFIRMATIONS.len();
    AFFIRMATIONS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotates_daily() {
        let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let jan2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let jan6 = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();

        assert_eq!(for_date(jan1), AFFIRMATIONS[0]);
        assert_eq!(for_date(jan2), AFFIRMATIONS[1]);
        assert_eq!(for_date(jan6), AFFIRMATIONS[0]);
    }

    #[test]
    fn test_all() {
        assert_eq!(all().len(), 5);
    }
}
