use crate::schema::{Column, ColumnDef, Constraint, SchemaError, SchemaResult};

/// Describes a table to create.
///
/// Columns are rendered in the order they are added. Column names are not
/// checked for uniqueness.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
    constraint: Option<Constraint>,
    engine: Option<String>,
    charset: Option<String>,
}

impl Table {
    /// Creates a new table with the given name and no columns.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Appends a column.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Appends multiple columns.
    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = Column>,
    {
        self.columns.extend(columns);
        self
    }

    /// Attaches the foreign key [`Constraint`], replacing any existing one.
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    /// Overrides the storage engine.
    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        let engine = engine.into();
        if !engine.is_empty() {
            self.engine = Some(engine);
        }
        self
    }

    /// Overrides the character set.
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        let charset = charset.into();
        if !charset.is_empty() {
            self.charset = Some(charset);
        }
        self
    }

    /// The name of the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The columns of the table, in declaration order.
    pub fn get_columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn get_constraint(&self) -> Option<&Constraint> {
        self.constraint.as_ref()
    }

    pub fn get_engine(&self) -> Option<&str> {
        self.engine.as_deref()
    }

    pub fn get_charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    /// Validates the table and builds its columns in declaration order.
    ///
    /// Fails when the table has no name or no columns, or at the first column
    /// which doesn't build. A column missing its name is reported with the
    /// table name and its zero-based position.
    pub fn build_columns(&self) -> SchemaResult<Vec<ColumnDef>> {
        if self.name.is_empty() {
            return Err(SchemaError::TableNameEmpty);
        }
        if self.columns.is_empty() {
            return Err(SchemaError::NoColumns {
                table: self.name.clone(),
            });
        }

        self.columns
            .iter()
            .enumerate()
            .map(|(position, column)| {
                column.build().map_err(|err| match err {
                    SchemaError::ColumnNameEmpty { .. } => SchemaError::ColumnNameEmpty {
                        table: Some(self.name.clone()),
                        position: Some(position),
                    },
                    err => err,
                })
            })
            .collect()
    }
}
