use std::fmt;

use crate::model::call::CallRecord;
use crate::model::store::CallStore;

pub const ALL_DAYS: &str = "All days";

/// What the dashboard is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    AllDays,
    Day(String),
}

impl Selection {
    pub fn label(&self) -> &str {
        match self {
            Selection::AllDays => ALL_DAYS,
            Selection::Day(key) => key,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Records feeding one dashboard render.
#[derive(Debug, Clone, Default)]
pub struct Period {
    pub current: Vec<CallRecord>,
    /// `None` when no comparison is defined and trends are hidden
    pub previous: Option<Vec<CallRecord>>,
}

/// Resolves selections against the ordered day keys of a store.
///
/// "Previous" means the key right before the selected one in store order,
/// so stores list their days oldest first.
#[derive(Debug, Clone)]
pub struct PeriodSelector {
    day_keys: Vec<String>,
}

impl PeriodSelector {
    pub fn new(day_keys: Vec<String>) -> Self {
        Self { day_keys }
    }

    pub fn for_store(store: &CallStore) -> Self {
        Self::new(store.day_keys())
    }

    pub fn day_keys(&self) -> &[String] {
        &self.day_keys
    }

    /// `All days` followed by every day key.
    pub fn options(&self) -> Vec<Selection> {
        std::iter::once(Selection::AllDays)
            .chain(self.day_keys.iter().cloned().map(Selection::Day))
            .collect()
    }

    pub fn previous_key(&self, key: &str) -> Option<&str> {
        let index = self.day_keys.iter().position(|k| k == key)?;
        if index == 0 {
            return None;
        }
        self.day_keys.get(index - 1).map(|k| k.as_str())
    }

    pub fn resolve(&self, store: &CallStore, selection: &Selection) -> Period {
        match selection {
            Selection::AllDays => Period {
                current: store.all_calls(),
                previous: None,
            },
            Selection::Day(key) => Period {
                current: store.calls_for(key).to_vec(),
                previous: self
                    .previous_key(key)
                    .map(|prev| store.calls_for(prev).to_vec()),
            },
        }
    }

    /// Next option, wrapping back to `All days` after the last day.
    pub fn next(&self, selection: &Selection) -> Selection {
        let options = self.options();
        let index = self.index_of(&options, selection);
        options[(index + 1) % options.len()].clone()
    }

    /// Previous option, wrapping from `All days` to the last day.
    pub fn previous(&self, selection: &Selection) -> Selection {
        let options = self.options();
        let index = self.index_of(&options, selection);
        options[(index + options.len() - 1) % options.len()].clone()
    }

    // Unknown selections behave like `All days` for cycling.
    fn index_of(&self, options: &[Selection], selection: &Selection) -> usize {
        options.iter().position(|o| o == selection).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::call::CallStatus;
    use crate::model::store::DayPartition;

    fn store() -> CallStore {
        let day = |key: &str, date: &str, n: u64| {
            DayPartition::new(
                key,
                (0..n)
                    .map(|i| CallRecord::new(i, date, CallStatus::Busy))
                    .collect(),
            )
        };
        CallStore::from_days(vec![
            day("2nd dec", "12/2/25", 2),
            day("3rd dec", "12/3/25", 3),
            day("4th dec", "12/4/25", 4),
        ])
    }

    #[test]
    fn test_all_days_has_no_previous() {
        let store = store();
        let selector = PeriodSelector::for_store(&store);
        let period = selector.resolve(&store, &Selection::AllDays);
        assert_eq!(period.current.len(), 9);
        assert!(period.previous.is_none());
    }

    #[test]
    fn test_day_compares_with_preceding_key() {
        let store = store();
        let selector = PeriodSelector::for_store(&store);
        let period = selector.resolve(&store, &Selection::Day("4th dec".to_string()));
        assert_eq!(period.current.len(), 4);
        assert_eq!(period.previous.map(|p| p.len()), Some(3));
    }

    #[test]
    fn test_first_day_has_no_previous() {
        let store = store();
        let selector = PeriodSelector::for_store(&store);
        let period = selector.resolve(&store, &Selection::Day("2nd dec".to_string()));
        assert_eq!(period.current.len(), 2);
        assert!(period.previous.is_none());
    }

    #[test]
    fn test_unknown_day_is_empty() {
        let store = store();
        let selector = PeriodSelector::for_store(&store);
        let period = selector.resolve(&store, &Selection::Day("1st dec".to_string()));
        assert!(period.current.is_empty());
        assert!(period.previous.is_none());
    }

    #[test]
    fn test_cycling_wraps() {
        let selector = PeriodSelector::for_store(&store());
        let last = Selection::Day("4th dec".to_string());

        assert_eq!(selector.options().len(), 4);
        assert_eq!(selector.next(&Selection::AllDays), Selection::Day("2nd dec".to_string()));
        assert_eq!(selector.next(&last), Selection::AllDays);
        assert_eq!(selector.previous(&Selection::AllDays), last);
    }

    #[test]
    fn test_selection_label() {
        assert_eq!(Selection::AllDays.to_string(), "All days");
        assert_eq!(Selection::Day("3rd dec".to_string()).label(), "3rd dec");
    }
}
