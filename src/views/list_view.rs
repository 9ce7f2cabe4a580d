use crate::config::ViewsConfig;
use crate::constants::{
    LOG_CREATED_RECORD, LOG_DELETED_RECORD, LOG_ERROR_CREATE_RECORD, LOG_ERROR_DELETE_RECORD, LOG_ERROR_LOAD_RECORDS,
    LOG_ERROR_UPDATE_RECORD, LOG_LOADED_RECORDS, LOG_STALE_SNAPSHOT, LOG_UPDATED_RECORD,
};
use crate::derive::{derive_board, derive_list, Board, CategoryFilter, FilterState, Record, SortKey};
use crate::source::{Capabilities, Operation, RecordSource, SourceError};
use log::{error, info, warn};

/// State of one list or board view: a snapshot of records plus the filter,
/// search and sort the user picked.
///
/// Dropping the view drops its filter state; a new view starts from the
/// default sort with no query or category.
#[derive(Debug, Clone)]
pub struct ListView<R> {
    records: Vec<R>,
    state: FilterState,
    default_sort: SortKey,
    capabilities: Capabilities,
}

impl<R> Default for ListView<R> {
    fn default() -> Self {
        Self::new(SortKey::default())
    }
}

impl<R> ListView<R> {
    pub fn new(default_sort: SortKey) -> Self {
        Self {
            records: Vec::new(),
            state: FilterState::new(default_sort),
            default_sort,
            capabilities: Capabilities::READ_ONLY,
        }
    }

    pub fn from_config(config: &ViewsConfig) -> Self {
        Self::new(config.default_sort)
    }

    /// A view over records supplied directly by the caller
    pub fn with_records(records: Vec<R>, default_sort: SortKey) -> Self {
        Self {
            records,
            ..Self::new(default_sort)
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.state
    }

    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
    }

    pub fn set_query(&mut self, query: &str) {
        self.state.set_query(query);
    }

    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.state.set_category(category);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.state.set_sort(sort);
    }

    /// Back to the default sort with no query and no category
    pub fn reset_filters(&mut self) {
        self.state.reset(self.default_sort);
    }

    /// Mutations offered by the source this view last loaded from
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn can(&self, operation: Operation) -> bool {
        self.capabilities.supports(operation)
    }
}

impl<R: Record> ListView<R> {
    /// The derived rows to render
    pub fn rows(&self) -> Vec<&R> {
        derive_list(&self.records, &self.state)
    }

    pub fn board<K, F>(&self, bucket_keys: &[K], aggregate: F) -> Board<'_, R>
    where
        K: AsRef<str>,
        F: Fn(&R) -> f64,
    {
        derive_board(&self.records, &self.state, bucket_keys, aggregate)
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }
}

impl<R> ListView<R>
where
    R: Record + Send + Sync + 'static,
{
    /// Replace the snapshot with everything the source currently holds.
    pub async fn load<S>(&mut self, source: &S) -> Result<usize, SourceError>
    where
        S: RecordSource<R> + ?Sized,
    {
        match source.fetch_all().await {
            Ok(records) => {
                info!("{}: {} from '{}'", LOG_LOADED_RECORDS, records.len(), source.source_name());
                self.records = records;
                self.capabilities = source.capabilities();
                Ok(self.records.len())
            }
            Err(e) => {
                error!("{} from '{}': {}", LOG_ERROR_LOAD_RECORDS, source.source_name(), e);
                Err(e)
            }
        }
    }

    /// Create a record through the source, then reload.
    ///
    /// A failed mutation is logged and returned with the snapshot left as it
    /// was. Once the source has accepted the mutation the result is `Ok`, even
    /// if the reload that follows fails.
    pub async fn create<S>(&mut self, source: &S, record: R) -> Result<R, SourceError>
    where
        S: RecordSource<R> + ?Sized,
    {
        require::<R, S>(source, Operation::Create)?;
        let created = source.create(record).await.inspect_err(|e| {
            error!("{} in '{}': {}", LOG_ERROR_CREATE_RECORD, source.source_name(), e);
        })?;
        info!("{} {} in '{}'", LOG_CREATED_RECORD, created.id(), source.source_name());
        self.refresh(source).await;
        Ok(created)
    }

    /// Update a record through the source, then reload.
    pub async fn update<S>(&mut self, source: &S, record: R) -> Result<R, SourceError>
    where
        S: RecordSource<R> + ?Sized,
    {
        require::<R, S>(source, Operation::Update)?;
        let updated = source.update(record).await.inspect_err(|e| {
            error!("{} in '{}': {}", LOG_ERROR_UPDATE_RECORD, source.source_name(), e);
        })?;
        info!("{} {} in '{}'", LOG_UPDATED_RECORD, updated.id(), source.source_name());
        self.refresh(source).await;
        Ok(updated)
    }

    /// Delete a record through the source, then reload.
    pub async fn delete<S>(&mut self, source: &S, id: &str) -> Result<(), SourceError>
    where
        S: RecordSource<R> + ?Sized,
    {
        require::<R, S>(source, Operation::Delete)?;
        source.delete(id).await.inspect_err(|e| {
            error!("{} {} in '{}': {}", LOG_ERROR_DELETE_RECORD, id, source.source_name(), e);
        })?;
        info!("{} {} in '{}'", LOG_DELETED_RECORD, id, source.source_name());
        self.refresh(source).await;
        Ok(())
    }

    /// Reload after a mutation; on failure keep the current snapshot
    async fn refresh<S>(&mut self, source: &S)
    where
        S: RecordSource<R> + ?Sized,
    {
        if let Err(e) = self.load(source).await {
            warn!("{} from '{}': {}", LOG_STALE_SNAPSHOT, source.source_name(), e);
        }
    }
}

/// Refuse a mutation the source does not offer, without calling it
fn require<R, S>(source: &S, operation: Operation) -> Result<(), SourceError>
where
    R: Send + Sync + 'static,
    S: RecordSource<R> + ?Sized,
{
    if source.capabilities().supports(operation) {
        Ok(())
    } else {
        error!("'{}' does not support {}", source.source_name(), operation.as_str());
        Err(SourceError::Unsupported(operation.as_str()))
    }
}
