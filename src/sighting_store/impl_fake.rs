use crate::sighting_store::interface::{SightingRecord, SightingStore};
use std::sync::Mutex;

/// In-memory store.
pub struct SightingStoreFake {
    records: Mutex<Vec<SightingRecord>>,
}

impl SightingStoreFake {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(vec![]),
        }
    }
}

impl SightingStore for SightingStoreFake {
    fn save(&self, record: SightingRecord) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut records = self.records.lock().map_err(|e| e.to_string())?;
        records.retain(|existing| existing.id != record.id);
        records.push(record);
        Ok(())
    }

    fn list(&self) -> Result<Vec<SightingRecord>, Box<dyn std::error::Error + Send + Sync>> {
        let records = self.records.lock().map_err(|e| e.to_string())?;
        let mut listed = records.clone();
        listed.sort_by(|a, b| b.captured_at.cmp(&a.captured_at));
        Ok(listed)
    }

    fn delete(&self, id: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut records = self.records.lock().map_err(|e| e.to_string())?;
        records.retain(|existing| existing.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: &str, label: &str, hour: u32) -> SightingRecord {
        SightingRecord {
            id: id.to_string(),
            label: label.to_string(),
            scientific: "Unknown".to_string(),
            captured_at: Utc.with_ymd_and_hms(2026, 8, 29, hour, 0, 0).unwrap(),
            image_path: None,
            confidence: 0.9,
        }
    }

    #[test]
    fn test_save_and_list_newest_first() {
        let store = SightingStoreFake::new();
        store.save(record("a", "Morel", 8)).unwrap();
        store.save(record("b", "Chanterelle", 12)).unwrap();
        store.save(record("c", "Fly Agaric", 10)).unwrap();

        let listed = store.list().unwrap();
        let ids: Vec<&str> = listed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_save_replaces_by_id() {
        let store = SightingStoreFake::new();
        store.save(record("a", "Morel", 8)).unwrap();
        store.save(record("a", "Death Cap", 9)).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].label, "Death Cap");
    }

    #[test]
    fn test_delete() {
        let store = SightingStoreFake::new();
        store.save(record("a", "Morel", 8)).unwrap();
        store.delete("a").unwrap();
        assert!(store.list().unwrap().is_empty());

        // Deleting an unknown id is not an error.
        store.delete("missing").unwrap();
    }
}
