//! Fixtures shared by the unit tests.

use std::fmt;

use fastmigration_api::prelude::{Column, Constraint, SchemaResult, Table};

use crate::connection::Connection;
use crate::migration::Migration;

/// `id INT(11) NOT NULL PRIMARY KEY AUTO_INCREMENT`
pub fn id_column() -> Column {
    Column::create()
        .column("id")
        .data_type("INT")
        .nullable(false)
        .length(11)
        .primary_key()
        .auto_increment()
}

pub fn genders_table() -> Table {
    Table::new("genders").column(id_column()).column(
        Column::create()
            .column("gender")
            .data_type("enum")
            .enum_values(["Men", "Women"])
            .nullable_enum(),
    )
}

pub fn users_table() -> Table {
    let constraint = Constraint::add()
        .foreign_key(["gender"])
        .references(["id"])
        .on(["genders"])
        .expect("should build constraint");

    Table::new("users")
        .columns([
            id_column(),
            Column::create()
                .column("name")
                .data_type("VARCHAR")
                .nullable(true)
                .length(75),
            Column::create().column("gender").data_type("INT").length(11),
            Column::create()
                .column("created_at")
                .data_type("TIMESTAMP")
                .default_current_timestamp(),
            Column::create()
                .column("updated_at")
                .data_type("TIMESTAMP")
                .nullable_timestamp(),
        ])
        .constraint(constraint)
}

/// A migration returning a fixed table.
pub struct TableMigration {
    pub name: &'static str,
    pub table: fn() -> Table,
}

impl Migration for TableMigration {
    fn name(&self) -> &str {
        self.name
    }

    fn table(&self) -> SchemaResult<Table> {
        Ok((self.table)())
    }
}

#[derive(Debug)]
pub struct BackendError(pub String);

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BackendError {}

/// A connection recording the executed statements, failing on statements
/// which contain `fail_on`.
#[derive(Debug, Default)]
pub struct ScriptedConnection {
    pub executed: Vec<String>,
    pub fail_on: Option<&'static str>,
}

impl ScriptedConnection {
    pub fn failing_on(pattern: &'static str) -> Self {
        Self {
            executed: Vec::new(),
            fail_on: Some(pattern),
        }
    }
}

impl Connection for ScriptedConnection {
    type Error = BackendError;

    fn execute(&mut self, statement: &str) -> Result<(), Self::Error> {
        if let Some(pattern) = self.fail_on.filter(|pattern| statement.contains(pattern)) {
            return Err(BackendError(format!(
                "Error 1146: table '{pattern}' doesn't exist"
            )));
        }
        self.executed.push(statement.to_string());
        Ok(())
    }
}
