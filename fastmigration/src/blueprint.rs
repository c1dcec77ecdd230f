//! Renders a [`Table`] into a `CREATE TABLE IF NOT EXISTS` statement.

use std::borrow::Cow;

use fastmigration_api::prelude::{Charset, ColumnDef, Constraint, Engine, SchemaResult, Table};

/// A rendering step, producing one fragment of a column clause.
type ColumnStep = for<'a> fn(&'a ColumnDef) -> Option<Cow<'a, str>>;

/// Steps producing a column clause, in rendering order.
const COLUMN_STEPS: [ColumnStep; 6] = [
    quoted_name,
    data_type,
    null_clause,
    default_clause,
    primary_key,
    auto_increment,
];

fn quoted_name(column: &ColumnDef) -> Option<Cow<'_, str>> {
    Some(Cow::Owned(format!("`{}`", column.name())))
}

fn data_type(column: &ColumnDef) -> Option<Cow<'_, str>> {
    if column.length().is_none() && column.enum_values().is_empty() {
        return Some(Cow::Borrowed(column.data_type()));
    }

    let mut data_type = column.data_type().to_string();
    if let Some(length) = column.length() {
        data_type.push_str(&format!("({length})"));
    }
    if !column.enum_values().is_empty() {
        let values = column
            .enum_values()
            .iter()
            .map(|value| format!("'{value}'"))
            .collect::<Vec<_>>()
            .join(",");
        data_type.push_str(&format!("({values})"));
    }

    Some(Cow::Owned(data_type))
}

fn null_clause(column: &ColumnDef) -> Option<Cow<'_, str>> {
    column.nullability().as_sql().map(Cow::Borrowed)
}

fn default_clause(column: &ColumnDef) -> Option<Cow<'_, str>> {
    column.default_value().map(|default| default.as_sql())
}

fn primary_key(column: &ColumnDef) -> Option<Cow<'_, str>> {
    column.primary_key().then_some(Cow::Borrowed("PRIMARY KEY"))
}

fn auto_increment(column: &ColumnDef) -> Option<Cow<'_, str>> {
    column
        .auto_increment()
        .then_some(Cow::Borrowed("AUTO_INCREMENT"))
}

/// Engine and charset used when the [`Table`] doesn't override them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub default_engine: Engine,
    pub default_charset: Charset,
}

/// The statement renderer.
///
/// Rendering is pure: the same [`Table`] always yields the same text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Blueprint {
    options: RenderOptions,
}

impl Blueprint {
    /// Creates a [`Blueprint`] with the given [`RenderOptions`].
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Returns the [`RenderOptions`] of this blueprint.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders the clause of a single column, e.g. `` `id` INT(11) NOT NULL ``.
    pub fn render_column(column: &ColumnDef) -> String {
        COLUMN_STEPS
            .iter()
            .filter_map(|step| step(column))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Renders the `CREATE TABLE IF NOT EXISTS` statement for `table`.
    ///
    /// The table is validated first with [`Table::build_columns`]: a table without
    /// name or columns, or the first invalid column, aborts the render.
    pub fn render(&self, table: &Table) -> SchemaResult<String> {
        let columns: Vec<String> = table
            .build_columns()?
            .iter()
            .map(Self::render_column)
            .collect();
        let constraint = table
            .get_constraint()
            .map(Constraint::clause)
            .filter(|clause| !clause.is_empty());

        let mut statement = format!("CREATE TABLE IF NOT EXISTS {} (\n", table.name());
        statement.push_str(&columns.join(",\n"));
        match constraint {
            Some(clause) => {
                statement.push_str(",\n");
                statement.push_str(clause);
            }
            None => statement.push('\n'),
        }

        let engine = table
            .get_engine()
            .unwrap_or(self.options.default_engine.as_str());
        let charset = table
            .get_charset()
            .unwrap_or(self.options.default_charset.as_str());
        statement.push_str(&format!(") ENGINE={engine} CHARACTER SET={charset};"));

        Ok(statement)
    }
}
