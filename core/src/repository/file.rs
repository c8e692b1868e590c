use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::model::store::CallStore;
use crate::repository::traits::CallRepository;

/// Reads a JSON dataset shaped like the bundled one:
/// `{ "days": [ { "key": "...", "calls": [ ... ] } ] }`.
#[derive(Clone)]
pub struct FileCallRepository {
    file_path: PathBuf,
}

impl FileCallRepository {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}

impl CallRepository for FileCallRepository {
    fn load(&self) -> Result<CallStore> {
        let file = File::open(&self.file_path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", self.file_path.display(), e),
            ))
        })?;
        let reader = BufReader::new(file);
        let store: CallStore = serde_json::from_reader(reader)?;
        tracing::info!(
            path = %self.file_path.display(),
            days = store.days().len(),
            "Loaded call data from file"
        );
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file_keeps_day_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"days": [
                {{"key": "9th jan", "calls": [
                    {{"call_id": 1, "call_date": "1/9/26", "call_status": "busy", "call_direction": "outbound"}}
                ]}},
                {{"key": "8th jan", "calls": []}}
            ]}}"#
        )
        .unwrap();

        let store = FileCallRepository::new(file.path().to_path_buf()).load().unwrap();
        assert_eq!(store.day_keys(), vec!["9th jan", "8th jan"]);
        assert_eq!(store.calls_for("9th jan").len(), 1);
        assert!(store.calls_for("8th jan").is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let repo = FileCallRepository::new(PathBuf::from("/nonexistent/calls.json"));
        assert!(matches!(repo.load(), Err(Error::Io(_))));
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"days\": [").unwrap();
        let repo = FileCallRepository::new(file.path().to_path_buf());
        assert!(matches!(repo.load(), Err(Error::Json(_))));
    }
}
