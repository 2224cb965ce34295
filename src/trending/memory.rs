use crate::trending::{NewSearchRecord, SearchRecord, SearchRecordUpdate, SearchStore, StoreError};
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

/// Process-local search store
///
/// Used when no Appwrite project is configured, and by tests. Records are
/// kept in insertion order, which is also the tie-break order for
/// `get_trending`.
#[derive(Default)]
pub struct MemorySearchStore {
    records: Mutex<Vec<SearchRecord>>,
}

impl MemorySearchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored record
    pub fn records(&self) -> Vec<SearchRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SearchStore for MemorySearchStore {
    async fn find_by_term(&self, term: &str) -> Result<Option<SearchRecord>, StoreError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.term == term)
            .cloned())
    }

    async fn create_record(&self, record: NewSearchRecord) -> Result<SearchRecord, StoreError> {
        let now = Utc::now();
        let record = SearchRecord {
            id: Uuid::new_v4().simple().to_string(),
            term: record.term,
            count: record.count,
            poster_url: record.poster_url,
            movie_id: record.movie_id,
            created_at: Some(now),
            updated_at: Some(now),
        };

        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update_record(
        &self,
        id: &str,
        update: SearchRecordUpdate,
    ) -> Result<SearchRecord, StoreError> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        record.count = update.count;
        record.poster_url = update.poster_url;
        record.movie_id = update.movie_id;
        record.updated_at = Some(Utc::now());

        Ok(record.clone())
    }

    async fn get_trending(&self, limit: usize) -> Result<Vec<SearchRecord>, StoreError> {
        let mut records = self.records();
        // Stable sort keeps insertion order among equal counts
        records.sort_by(|a, b| b.count.cmp(&a.count));
        records.truncate(limit);
        Ok(records)
    }
}
