use std::collections::HashMap;

use parking_lot::RwLock;

use crate::shared_types::{Record, StoreError};

/// In-memory record store. Reads share the lock, writes take it exclusively.
#[derive(Debug, Default)]
pub struct Store {
    records: RwLock<HashMap<String, Record>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the record for `key`. Last write wins.
    pub fn submit(&self, key: String, value: String) -> Result<(), StoreError> {
        if key.is_empty() || value.is_empty() {
            return Err(StoreError::InvalidArgument(
                "key and value are required".to_string(),
            ));
        }

        let record = Record {
            key: key.clone(),
            value,
        };
        self.records.write().insert(key, record);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Record, StoreError> {
        self.records
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("message not found for key: {key}")))
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn submit_then_get_returns_value() {
        let store = Store::new();
        store.submit("N250".into(), "Gatotkaca".into()).unwrap();

        let record = store.get("N250").unwrap();
        assert_eq!(record.key, "N250");
        assert_eq!(record.value, "Gatotkaca");
    }

    #[test]
    fn get_unknown_key_is_not_found() {
        let store = Store::new();
        let err = store.get("unknown").unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound("message not found for key: unknown".into())
        );
        assert!(store.is_empty());
    }

    #[test]
    fn empty_key_or_value_is_rejected_without_mutation() {
        let store = Store::new();
        store.submit("a".into(), "kept".into()).unwrap();

        assert!(matches!(
            store.submit(String::new(), "x".into()),
            Err(StoreError::InvalidArgument(_))
        ));
        assert!(matches!(
            store.submit("a".into(), String::new()),
            Err(StoreError::InvalidArgument(_))
        ));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").unwrap().value, "kept");
    }

    #[test]
    fn second_submit_overwrites_first() {
        let store = Store::new();
        store.submit("k".into(), "first".into()).unwrap();
        store.submit("k".into(), "second".into()).unwrap();

        assert_eq!(store.get("k").unwrap().value, "second");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn concurrent_submits_to_distinct_keys_are_all_kept() {
        let store = Arc::new(Store::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..100 {
                        store
                            .submit(format!("t{t}-{i}"), format!("v{t}-{i}"))
                            .unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(store.len(), 800);
        assert_eq!(store.get("t3-42").unwrap().value, "v3-42");
    }

    #[test]
    fn instances_are_independent() {
        let a = Store::new();
        let b = Store::new();
        a.submit("k".into(), "v".into()).unwrap();
        assert!(b.get("k").is_err());
    }
}
