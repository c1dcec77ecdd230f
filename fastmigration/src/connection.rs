//! The database handle statements are executed against.

use std::convert::Infallible;

/// A handle capable of executing a raw DDL statement.
///
/// Implement this trait for the driver of your database. The handle is owned by
/// the caller and only borrowed for the duration of an execution.
pub trait Connection {
    /// The error returned by the backend.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Executes `statement`, without retrying.
    fn execute(&mut self, statement: &str) -> Result<(), Self::Error>;
}

impl<C> Connection for &mut C
where
    C: Connection + ?Sized,
{
    type Error = C::Error;

    fn execute(&mut self, statement: &str) -> Result<(), Self::Error> {
        (**self).execute(statement)
    }
}

impl<C> Connection for Box<C>
where
    C: Connection + ?Sized,
{
    type Error = C::Error;

    fn execute(&mut self, statement: &str) -> Result<(), Self::Error> {
        (**self).execute(statement)
    }
}

/// A [`Connection`] which doesn't reach any database.
///
/// Statements are logged and recorded, so they can be reviewed or written elsewhere.
#[derive(Debug, Default, Clone)]
pub struct DryRunConnection {
    statements: Vec<String>,
}

impl DryRunConnection {
    /// The statements received so far, in execution order.
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// Consumes the connection, returning the received statements.
    pub fn into_statements(self) -> Vec<String> {
        self.statements
    }
}

impl Connection for DryRunConnection {
    type Error = Infallible;

    fn execute(&mut self, statement: &str) -> Result<(), Self::Error> {
        tracing::info!("dry run:\n{statement}");
        self.statements.push(statement.to_string());
        Ok(())
    }
}
