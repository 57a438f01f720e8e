use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// A finalized identification: the classification result plus whatever
/// image the capture cycle produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SightingRecord {
    pub id: String,
    pub label: String,
    pub scientific: String,
    pub captured_at: DateTime<Utc>,
    pub image_path: Option<PathBuf>,
    pub confidence: f32,
}

pub trait SightingStore: Send + Sync {
    /// Insert or replace by id.
    fn save(&self, record: SightingRecord) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    /// Newest first.
    fn list(&self) -> Result<Vec<SightingRecord>, Box<dyn std::error::Error + Send + Sync>>;
    fn delete(&self, id: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
