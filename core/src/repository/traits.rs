use crate::error::Result;
use crate::model::store::CallStore;

/// Source of the day-partitioned call records.
pub trait CallRepository {
    fn load(&self) -> Result<CallStore>;
}
