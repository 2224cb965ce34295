use marquee::tmdb::Movie;
use marquee::trending::{
    MemorySearchStore, NewSearchRecord, SearchRecord, SearchRecordUpdate, SearchStore, StoreError,
};
use tokio::sync::mpsc;

/// In-memory store that reports every `record_search` call and can be told to fail
pub struct RecordingStore {
    pub inner: MemorySearchStore,
    recorded_tx: mpsc::UnboundedSender<(String, Movie)>,
    fail_writes: bool,
    fail_trending: bool,
}

impl RecordingStore {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(String, Movie)>) {
        let (recorded_tx, recorded_rx) = mpsc::unbounded_channel();
        let store = Self {
            inner: MemorySearchStore::new(),
            recorded_tx,
            fail_writes: false,
            fail_trending: false,
        };
        (store, recorded_rx)
    }

    pub fn failing(mut self) -> Self {
        self.fail_writes = true;
        self.fail_trending = true;
        self
    }

    fn denied() -> StoreError {
        StoreError::Permission("collection is read-only".to_string())
    }
}

#[async_trait::async_trait]
impl SearchStore for RecordingStore {
    async fn find_by_term(&self, term: &str) -> Result<Option<SearchRecord>, StoreError> {
        self.inner.find_by_term(term).await
    }

    async fn create_record(&self, record: NewSearchRecord) -> Result<SearchRecord, StoreError> {
        if self.fail_writes {
            return Err(Self::denied());
        }
        self.inner.create_record(record).await
    }

    async fn update_record(
        &self,
        id: &str,
        update: SearchRecordUpdate,
    ) -> Result<SearchRecord, StoreError> {
        if self.fail_writes {
            return Err(Self::denied());
        }
        self.inner.update_record(id, update).await
    }

    async fn get_trending(&self, limit: usize) -> Result<Vec<SearchRecord>, StoreError> {
        if self.fail_trending {
            return Err(Self::denied());
        }
        self.inner.get_trending(limit).await
    }

    async fn record_search(&self, term: &str, movie: &Movie) -> Result<SearchRecord, StoreError> {
        let _ = self.recorded_tx.send((term.to_string(), movie.clone()));

        if self.fail_writes {
            return Err(Self::denied());
        }
        self.inner.record_search(term, movie).await
    }
}
