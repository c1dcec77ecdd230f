//! Migrations and the [`Migrator`] running them.

use fastmigration_api::prelude::{MigrationResult, SchemaResult, Table};

use crate::blueprint::{Blueprint, RenderOptions};
use crate::config::MigratorConfig;
use crate::connection::Connection;
use crate::executor::Executor;

/// A migration creating a single table.
pub trait Migration {
    /// Name of the migration, used in logs.
    fn name(&self) -> &str;

    /// Describes the table to create.
    fn table(&self) -> SchemaResult<Table>;
}

impl Migration for Table {
    fn name(&self) -> &str {
        Table::name(self)
    }

    fn table(&self) -> SchemaResult<Table> {
        Ok(self.clone())
    }
}

/// Runs migrations strictly in the order they were added.
///
/// The first failing migration stops the run and its error is returned; tables
/// created before it are not rolled back.
#[derive(Default)]
pub struct Migrator {
    migrations: Vec<Box<dyn Migration>>,
    blueprint: Blueprint,
    dry_run: bool,
}

impl Migrator {
    /// Creates an empty [`Migrator`] with default rendering options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty [`Migrator`] configured by `config`.
    pub fn from_config(config: &MigratorConfig) -> Self {
        Self {
            migrations: Vec::new(),
            blueprint: Blueprint::with_options(RenderOptions::from(config)),
            dry_run: config.dry_run,
        }
    }

    /// Appends a migration.
    pub fn add(mut self, migration: impl Migration + 'static) -> Self {
        self.migrations.push(Box::new(migration));
        self
    }

    /// Returns the number of registered migrations.
    pub fn len(&self) -> usize {
        self.migrations.len()
    }

    /// Returns whether no migration is registered.
    pub fn is_empty(&self) -> bool {
        self.migrations.is_empty()
    }

    /// Renders the statement of every migration without executing them.
    pub fn render_all(&self) -> MigrationResult<Vec<String>> {
        self.migrations
            .iter()
            .map(|migration| -> MigrationResult<String> {
                let table = migration.table()?;
                Ok(self.blueprint.render(&table)?)
            })
            .collect()
    }

    /// Runs every migration against `connection`, returning the executed statements.
    ///
    /// In dry run mode statements are only rendered and the connection is never used.
    pub fn run<C>(&self, connection: &mut C) -> MigrationResult<Vec<String>>
    where
        C: Connection,
    {
        if self.dry_run {
            tracing::info!("dry run: rendering {} migrations", self.migrations.len());
            return self.render_all();
        }

        let mut executor = Executor::with_blueprint(connection, self.blueprint);
        let mut statements = Vec::with_capacity(self.migrations.len());
        for migration in &self.migrations {
            tracing::info!("running migration {}", migration.name());
            let table = migration.table()?;
            let statement = executor.blueprint(&table).inspect_err(|err| {
                tracing::error!("migration {} failed: {err}", migration.name());
            })?;
            statements.push(statement);
        }

        Ok(statements)
    }
}
