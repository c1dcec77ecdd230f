//! Executes rendered statements against a [`Connection`].

use fastmigration_api::prelude::{MigrationError, MigrationResult, Table};

use crate::blueprint::Blueprint;
use crate::connection::Connection;

/// Renders tables with a [`Blueprint`] and executes the statements on a borrowed [`Connection`].
///
/// Each statement is executed exactly once; failures are returned to the caller
/// as [`MigrationError::StatementExecution`].
pub struct Executor<'c, C>
where
    C: Connection,
{
    connection: &'c mut C,
    blueprint: Blueprint,
}

impl<'c, C> Executor<'c, C>
where
    C: Connection,
{
    /// Creates an executor rendering with the default [`Blueprint`].
    pub fn new(connection: &'c mut C) -> Self {
        Self::with_blueprint(connection, Blueprint::default())
    }

    /// Creates an executor rendering with the given [`Blueprint`].
    pub fn with_blueprint(connection: &'c mut C, blueprint: Blueprint) -> Self {
        Self {
            connection,
            blueprint,
        }
    }

    /// Executes an already rendered `statement` creating `table`.
    pub fn execute(&mut self, table: &str, statement: &str) -> MigrationResult<()> {
        tracing::debug!("executing statement for table {table}:\n{statement}");
        self.connection.execute(statement).map_err(|err| {
            tracing::error!("failed to create table {table}: {err}");
            MigrationError::statement_execution(table, err)
        })
    }

    /// Renders `table` and executes the resulting statement.
    ///
    /// Validation errors are returned before the connection is used.
    /// Returns the executed statement.
    pub fn blueprint(&mut self, table: &Table) -> MigrationResult<String> {
        let statement = self.blueprint.render(table)?;
        self.execute(table.name(), &statement)?;
        tracing::info!("table {} created", table.name());

        Ok(statement)
    }
}
