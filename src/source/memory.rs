//! In-process record source, used for fixtures, demos and tests.

use super::{AssignId, Capabilities, Operation, RecordSource, SourceError};
use crate::derive::Record;
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct InMemorySource<R> {
    name: String,
    capabilities: Capabilities,
    records: RwLock<Vec<R>>,
}

impl<R> InMemorySource<R> {
    /// A source with every mutation enabled
    pub fn new(name: impl Into<String>, records: Vec<R>) -> Self {
        Self {
            name: name.into(),
            capabilities: Capabilities::FULL,
            records: RwLock::new(records),
        }
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn ensure(&self, operation: Operation) -> Result<(), SourceError> {
        if self.capabilities.supports(operation) {
            Ok(())
        } else {
            Err(SourceError::Unsupported(operation.as_str()))
        }
    }
}

impl<R: DeserializeOwned> InMemorySource<R> {
    /// Load records from a JSON array
    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self> {
        let name = name.into();
        let records: Vec<R> =
            serde_json::from_str(json).with_context(|| format!("Failed to parse records for source '{}'", name))?;
        info!("Source '{}': loaded {} records from JSON", name, records.len());
        Ok(Self::new(name, records))
    }
}

#[async_trait]
impl<R> RecordSource<R> for InMemorySource<R>
where
    R: Record + AssignId + Clone + Send + Sync + 'static,
{
    fn source_name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    async fn fetch_all(&self) -> Result<Vec<R>, SourceError> {
        Ok(self.records.read().await.clone())
    }

    async fn create(&self, mut record: R) -> Result<R, SourceError> {
        self.ensure(Operation::Create)?;
        if record.id().is_empty() {
            record.assign_id(Uuid::new_v4().to_string());
        }

        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(SourceError::Invalid(format!("duplicate id {}", record.id())));
        }
        debug!("Source '{}': created {}", self.name, record.id());
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, record: R) -> Result<R, SourceError> {
        self.ensure(Operation::Update)?;
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| SourceError::NotFound(record.id().to_string()))?;
        *slot = record.clone();
        debug!("Source '{}': updated {}", self.name, record.id());
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<(), SourceError> {
        self.ensure(Operation::Delete)?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(SourceError::NotFound(id.to_string()));
        }
        debug!("Source '{}': deleted {}", self.name, id);
        Ok(())
    }
}
