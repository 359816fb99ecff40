use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::errors::{LoanError, Result};
use crate::types::LoanApplication;

/// fixed namespace key the collection is stored under
pub const STORAGE_KEY: &str = "loan-applications";

/// durable key-value store capability
///
/// load-all / save-all semantics: the whole collection is read or written as
/// one document under [`STORAGE_KEY`], never partial entries. Missing or
/// malformed stored data loads as an empty collection; only writes can fail.
pub trait LoanStore {
    fn load(&self) -> Result<Vec<LoanApplication>>;
    fn save(&mut self, loans: &[LoanApplication]) -> Result<()>;
}

fn decode(document: &str) -> Vec<LoanApplication> {
    // malformed data degrades to an empty collection, never a fatal error
    serde_json::from_str(document).unwrap_or_default()
}

fn encode(loans: &[LoanApplication]) -> Result<String> {
    serde_json::to_string_pretty(loans).map_err(|e| LoanError::Persistence {
        message: e.to_string(),
    })
}

/// in-memory key-value store, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// start from an already-stored document, valid or not
    pub fn from_document(document: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(STORAGE_KEY.to_string(), document.into());
        Self { entries }
    }

    /// raw stored document, if any
    pub fn document(&self) -> Option<&str> {
        self.entries.get(STORAGE_KEY).map(String::as_str)
    }
}

impl LoanStore for MemoryStore {
    fn load(&self) -> Result<Vec<LoanApplication>> {
        Ok(self
            .entries
            .get(STORAGE_KEY)
            .map(|document| decode(document))
            .unwrap_or_default())
    }

    fn save(&mut self, loans: &[LoanApplication]) -> Result<()> {
        let document = encode(loans)?;
        self.entries.insert(STORAGE_KEY.to_string(), document);
        Ok(())
    }
}

/// file-backed store for production use
///
/// persists the collection as one JSON document named after [`STORAGE_KEY`]
/// inside the given directory
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        let path = directory.into().join(format!("{STORAGE_KEY}.json"));
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl LoanStore for JsonFileStore {
    fn load(&self) -> Result<Vec<LoanApplication>> {
        match fs::read_to_string(&self.path) {
            Ok(document) => Ok(decode(&document)),
            // no entry yet, or unreadable: start empty
            Err(_) => Ok(Vec::new()),
        }
    }

    fn save(&mut self, loans: &[LoanApplication]) -> Result<()> {
        let document = encode(loans)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| LoanError::Persistence {
                message: e.to_string(),
            })?;
        }
        fs::write(&self.path, document).map_err(|e| LoanError::Persistence {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use crate::types::LoanStatus;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn sample_loans() -> Vec<LoanApplication> {
        vec![
            LoanApplication {
                id: Uuid::new_v4(),
                applicant_name: "John Doe".to_string(),
                amount: Money::from_major(50_000),
                term_months: 24,
                interest_rate: Rate::from_decimal(dec!(0.08)),
                status: LoanStatus::Pending,
                created_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            },
            LoanApplication {
                id: Uuid::new_v4(),
                applicant_name: "Jane Smith".to_string(),
                amount: Money::from_major(75_000),
                term_months: 36,
                interest_rate: Rate::from_decimal(dec!(0.06)),
                status: LoanStatus::Approved,
                created_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
            },
        ]
    }

    #[test]
    fn test_memory_store_round_trip() {
        let loans = sample_loans();
        let mut store = MemoryStore::new();
        store.save(&loans).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, loans);
    }

    #[test]
    fn test_memory_store_empty_on_missing_entry() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_memory_store_empty_on_malformed_document() {
        let store = MemoryStore::from_document("{not valid json");
        assert!(store.load().unwrap().is_empty());

        let store = MemoryStore::from_document(r#"{"wrong": "shape"}"#);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!("loan-store-{}", Uuid::new_v4()));
        let loans = sample_loans();

        let mut store = JsonFileStore::new(&dir);
        store.save(&loans).unwrap();

        let reopened = JsonFileStore::new(&dir);
        assert_eq!(reopened.load().unwrap(), loans);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_file_store_empty_on_missing_file() {
        let store = JsonFileStore::new(std::env::temp_dir().join("does-not-exist"));
        assert!(store.load().unwrap().is_empty());
    }
}
