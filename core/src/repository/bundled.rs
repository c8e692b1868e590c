use crate::error::Result;
use crate::model::store::CallStore;
use crate::repository::traits::CallRepository;

const BUNDLED_CALLS: &str = include_str!("../../data/calls.json");

/// The campaign dataset compiled into the binary.
#[derive(Clone, Copy, Default)]
pub struct BundledCallRepository;

impl CallRepository for BundledCallRepository {
    fn load(&self) -> Result<CallStore> {
        let store: CallStore = serde_json::from_str(BUNDLED_CALLS)?;
        tracing::debug!(days = store.days().len(), "Loaded bundled call data");
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_data_loads() {
        let store = BundledCallRepository.load().unwrap();
        assert_eq!(
            store.day_keys(),
            vec!["2nd dec", "3rd dec", "4th dec", "5th dec"]
        );
        for day in store.days() {
            assert!(!day.calls.is_empty(), "{} has no calls", day.key);
        }
    }

    #[test]
    fn test_bundled_optional_fields_only_on_completed_calls() {
        let store = BundledCallRepository.load().unwrap();
        for call in store.all_calls() {
            if !call.is_completed() {
                assert!(call.sentiment.is_none(), "call {} has sentiment", call.call_id);
                assert!(call.final_interest_flag.is_none());
            }
        }
    }
}
