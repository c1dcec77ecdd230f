use crate::schema::{SchemaError, SchemaResult};

/// Defines a foreign key relationship for a column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForeignKeyDef {
    /// Name of the local column that holds the foreign key (e.g., "gender")
    pub local_column: String,
    /// Name of the foreign table (e.g., "genders")
    pub foreign_table: String,
    /// Name of the foreign column that the FK points to (e.g., "id")
    pub foreign_column: String,
}

impl ForeignKeyDef {
    /// Renders the `FOREIGN KEY ... REFERENCES ...` clause.
    pub fn as_sql(&self) -> String {
        format!(
            "FOREIGN KEY ({}) REFERENCES {}({})",
            self.local_column, self.foreign_table, self.foreign_column
        )
    }
}

/// Foreign key constraints of a table.
///
/// Built with [`Constraint::add`]:
///
/// ```rust
/// use fastmigration_api::prelude::Constraint;
///
/// let constraint = Constraint::add()
///     .foreign_key(["gender"])
///     .references(["id"])
///     .on(["genders"])
///     .unwrap();
///
/// assert_eq!(constraint.clause(), "FOREIGN KEY (gender) REFERENCES genders(id)\n");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Constraint {
    foreign_keys: Vec<ForeignKeyDef>,
    clause: String,
}

impl Constraint {
    /// Creates a new [`ConstraintBuilder`].
    pub fn add() -> ConstraintBuilder {
        ConstraintBuilder::default()
    }

    /// The foreign keys, in declaration order.
    pub fn foreign_keys(&self) -> &[ForeignKeyDef] {
        &self.foreign_keys
    }

    /// The rendered constraint block, newline terminated; empty when there are no foreign keys.
    pub fn clause(&self) -> &str {
        &self.clause
    }

    /// Returns whether the constraint holds no foreign key.
    pub fn is_empty(&self) -> bool {
        self.clause.is_empty()
    }
}

/// A builder for a [`Constraint`].
///
/// Local columns, referenced columns and referenced tables are paired by position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstraintBuilder {
    foreign_keys: Vec<String>,
    references: Vec<String>,
}

impl ConstraintBuilder {
    /// Sets the local columns holding the foreign keys.
    pub fn foreign_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.foreign_keys = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the referenced columns.
    pub fn references<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.references = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the referenced tables and finalizes the [`Constraint`].
    ///
    /// Fails with [`SchemaError::ConstraintArityMismatch`] unless foreign keys,
    /// references and tables have the same length.
    pub fn on<I, S>(self, tables: I) -> SchemaResult<Constraint>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tables: Vec<String> = tables.into_iter().map(Into::into).collect();
        if self.foreign_keys.len() != self.references.len()
            || self.foreign_keys.len() != tables.len()
        {
            return Err(SchemaError::ConstraintArityMismatch {
                foreign_keys: self.foreign_keys.len(),
                references: self.references.len(),
                tables: tables.len(),
            });
        }

        let foreign_keys: Vec<ForeignKeyDef> = self
            .foreign_keys
            .into_iter()
            .zip(self.references)
            .zip(tables)
            .map(|((local_column, foreign_column), foreign_table)| ForeignKeyDef {
                local_column,
                foreign_table,
                foreign_column,
            })
            .collect();

        let mut clause = foreign_keys
            .iter()
            .map(ForeignKeyDef::as_sql)
            .collect::<Vec<_>>()
            .join(",\n");
        if !clause.is_empty() {
            clause.push('\n');
        }

        Ok(Constraint {
            foreign_keys,
            clause,
        })
    }
}
