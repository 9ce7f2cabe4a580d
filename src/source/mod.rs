//! Data-source abstraction.
//!
//! Records are owned by an external data layer. Views only see it through
//! [`RecordSource`]: a required fetch plus optional create, update and delete
//! operations. Which mutations a source supports is reported up front as
//! [`Capabilities`], so views offer an action only when the source has it.

use async_trait::async_trait;

pub mod memory;

pub use memory::InMemorySource;

/// Error types for data-source operations.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Invalid record: {0}")]
    Invalid(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// The mutations a source supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub create: bool,
    pub update: bool,
    pub delete: bool,
}

impl Capabilities {
    /// Fetch only
    pub const READ_ONLY: Capabilities = Capabilities {
        create: false,
        update: false,
        delete: false,
    };

    pub const FULL: Capabilities = Capabilities {
        create: true,
        update: true,
        delete: true,
    };

    pub fn supports(&self, operation: Operation) -> bool {
        match operation {
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
        }
    }
}

/// A mutation a view may ask a source for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

/// Records whose identifier is assigned by the source on creation.
pub trait AssignId {
    fn assign_id(&mut self, id: String);
}

/// The external data layer a view loads from and writes through.
///
/// Only `fetch_all` is required. Mutations default to
/// [`SourceError::Unsupported`]; implementors that override one must also
/// report it in [`RecordSource::capabilities`].
#[async_trait]
pub trait RecordSource<R>: Send + Sync
where
    R: Send + Sync + 'static,
{
    /// Returns the source identifier used in log lines.
    fn source_name(&self) -> &str;

    fn capabilities(&self) -> Capabilities {
        Capabilities::READ_ONLY
    }

    async fn fetch_all(&self) -> Result<Vec<R>, SourceError>;

    /// Create a record from a partial one. Returns the stored record.
    async fn create(&self, _record: R) -> Result<R, SourceError> {
        Err(SourceError::Unsupported(Operation::Create.as_str()))
    }

    /// Replace the record with the same id. Returns the stored record.
    async fn update(&self, _record: R) -> Result<R, SourceError> {
        Err(SourceError::Unsupported(Operation::Update.as_str()))
    }

    async fn delete(&self, _id: &str) -> Result<(), SourceError> {
        Err(SourceError::Unsupported(Operation::Delete.as_str()))
    }
}
