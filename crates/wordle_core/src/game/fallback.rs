//! Deterministic answer selection for days with no configured answer.

use chrono::{Datelike, NaiveDate};

/// Ordered candidate words used when a date has no stored answer.
///
/// The list is never empty; constructors return `None` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackWordList {
    words: Vec<String>,
}

impl FallbackWordList {
    /// Wraps `words`, preserving order. Returns `None` for an empty list.
    pub fn new(words: Vec<String>) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        Some(Self { words })
    }

    /// Word for `date`: `words[ordinal(date) mod len]`.
    pub fn pick(&self, date: NaiveDate) -> &str {
        let index = date_ordinal(date).rem_euclid(self.words.len() as i64) as usize;
        &self.words[index]
    }

    /// Builds a list from a constant that is known to be non-empty.
    pub(crate) fn from_static(words: &[&str]) -> Self {
        debug_assert!(!words.is_empty());
        Self {
            words: words.iter().map(|word| (*word).to_string()).collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Proleptic Gregorian day number where 0001-01-01 is day 1.
pub fn date_ordinal(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

#[cfg(test)]
mod tests {
    use super::{date_ordinal, FallbackWordList};
    use chrono::NaiveDate;

    fn list(words: &[&str]) -> FallbackWordList {
        FallbackWordList::new(words.iter().map(|word| word.to_string()).collect()).unwrap()
    }

    #[test]
    fn ordinal_starts_at_one_on_first_day_of_common_era() {
        assert_eq!(date_ordinal(NaiveDate::from_ymd_opt(1, 1, 1).unwrap()), 1);
        assert_eq!(
            date_ordinal(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            738_886
        );
    }

    #[test]
    fn pick_uses_ordinal_modulo_length() {
        let words = list(&["apple", "trace", "sugar"]);
        // 738_886 % 3 == 1
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(words.pick(date), "trace");
        assert_eq!(words.pick(date.succ_opt().unwrap()), "sugar");
    }

    #[test]
    fn pick_is_stable_for_the_same_date() {
        let words = list(&["apple", "trace", "sugar", "candy"]);
        let date = NaiveDate::from_ymd_opt(2031, 7, 14).unwrap();
        assert_eq!(words.pick(date), words.pick(date));
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(FallbackWordList::new(Vec::new()).is_none());
    }
}
