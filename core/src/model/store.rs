use serde::Deserialize;

use crate::model::call::CallRecord;

/// One day's worth of calls.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DayPartition {
    pub key: String,
    pub calls: Vec<CallRecord>,
}

impl DayPartition {
    pub fn new(key: impl Into<String>, calls: Vec<CallRecord>) -> Self {
        Self {
            key: key.into(),
            calls,
        }
    }
}

/// Day-partitioned call records, in the order the source lists the days.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CallStore {
    days: Vec<DayPartition>,
}

impl CallStore {
    pub fn from_days(days: Vec<DayPartition>) -> Self {
        Self { days }
    }

    pub fn day_keys(&self) -> Vec<String> {
        self.days.iter().map(|d| d.key.clone()).collect()
    }

    pub fn days(&self) -> &[DayPartition] {
        &self.days
    }

    /// Records for `key`, or an empty slice when no such day exists.
    pub fn calls_for(&self, key: &str) -> &[CallRecord] {
        self.days
            .iter()
            .find(|d| d.key == key)
            .map(|d| d.calls.as_slice())
            .unwrap_or(&[])
    }

    /// Every day's records concatenated in day order.
    pub fn all_calls(&self) -> Vec<CallRecord> {
        self.days.iter().flat_map(|d| d.calls.iter().cloned()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::call::CallStatus;

    fn store() -> CallStore {
        CallStore::from_days(vec![
            DayPartition::new(
                "2nd dec",
                vec![
                    CallRecord::new(1, "12/2/25", CallStatus::Completed),
                    CallRecord::new(2, "12/2/25", CallStatus::Busy),
                ],
            ),
            DayPartition::new("3rd dec", vec![CallRecord::new(1, "12/3/25", CallStatus::Failed)]),
        ])
    }

    #[test]
    fn test_day_keys_keep_source_order() {
        assert_eq!(store().day_keys(), vec!["2nd dec", "3rd dec"]);
    }

    #[test]
    fn test_calls_for_unknown_day_is_empty() {
        let store = store();
        assert_eq!(store.calls_for("2nd dec").len(), 2);
        assert!(store.calls_for("9th dec").is_empty());
    }

    #[test]
    fn test_all_calls_concatenates() {
        let all = store().all_calls();
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].call_date, "12/3/25");
    }
}
