use thiserror::Error;

pub use crate::schema::{SchemaError, SchemaResult};

/// Boxed error returned by a database backend.
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// fastmigration Error type
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
    /// The backend rejected or failed to execute the generated statement.
    #[error("Failed to execute statement for table '{table}': {source}")]
    StatementExecution {
        table: String,
        #[source]
        source: BackendError,
    },
    /// The migrator configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MigrationError {
    /// Wraps a backend error raised while executing the statement for `table`.
    pub fn statement_execution<E>(table: impl Into<String>, source: E) -> Self
    where
        E: Into<BackendError>,
    {
        Self::StatementExecution {
            table: table.into(),
            source: source.into(),
        }
    }
}

/// fastmigration Result type
pub type MigrationResult<T> = Result<T, MigrationError>;
