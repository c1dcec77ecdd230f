use std::borrow::Cow;

use crate::schema::{SchemaError, SchemaResult};

/// Null clause of a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Nullability {
    /// No null clause is rendered.
    #[default]
    Unset,
    /// `NOT NULL`
    NotNull,
    /// `NULL`
    Null,
    /// `DEFAULT NULL`, used by nullable enum columns.
    DefaultNull,
}

impl Nullability {
    /// Returns the SQL fragment for this null clause, if any.
    pub fn as_sql(&self) -> Option<&'static str> {
        match self {
            Self::Unset => None,
            Self::NotNull => Some("NOT NULL"),
            Self::Null => Some("NULL"),
            Self::DefaultNull => Some("DEFAULT NULL"),
        }
    }
}

/// Default clause of a column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefaultValue {
    /// `DEFAULT '<value>'`
    Literal(String),
    /// `DEFAULT CURRENT_TIMESTAMP`
    CurrentTimestamp,
    /// `NULL DEFAULT NULL`, used by nullable timestamp columns.
    NullTimestamp,
}

impl DefaultValue {
    /// Returns the SQL fragment for this default clause.
    ///
    /// Literal values are quoted but not escaped.
    pub fn as_sql(&self) -> Cow<'_, str> {
        match self {
            Self::Literal(value) => Cow::Owned(format!("DEFAULT '{value}'")),
            Self::CurrentTimestamp => Cow::Borrowed("DEFAULT CURRENT_TIMESTAMP"),
            Self::NullTimestamp => Cow::Borrowed("NULL DEFAULT NULL"),
        }
    }
}

/// A builder describing a column of a table.
///
/// Every setter consumes the builder and returns it, so calls can be chained.
/// Setters given an empty or non-positive value leave the current value untouched.
///
/// The column is validated by [`Column::build`], which yields a [`ColumnDef`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Column {
    name: Option<String>,
    data_type: Option<String>,
    length: Option<u32>,
    enum_values: Vec<String>,
    nullability: Nullability,
    default: Option<DefaultValue>,
    primary_key: bool,
    auto_increment: bool,
}

impl Column {
    /// Creates an empty column builder.
    pub fn create() -> Self {
        <Self as Default>::default()
    }

    /// Sets the column name.
    pub fn column(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() {
            self.name = Some(name);
        }
        self
    }

    /// Sets the raw SQL data type (e.g. `INT`, `VARCHAR`, `enum`).
    pub fn data_type(mut self, data_type: impl Into<String>) -> Self {
        let data_type = data_type.into();
        if !data_type.is_empty() {
            self.data_type = Some(data_type);
        }
        self
    }

    /// Sets the column length, rendered as `(N)` after the data type.
    ///
    /// Zero, negative and lengths above `u32::MAX` are ignored.
    pub fn length(mut self, length: i64) -> Self {
        if let Some(length) = u32::try_from(length).ok().filter(|length| *length > 0) {
            self.length = Some(length);
        }
        self
    }

    /// Sets the values of an enum column.
    pub fn enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if !values.is_empty() {
            self.enum_values = values;
        }
        self
    }

    /// Sets whether the column accepts `NULL`.
    ///
    /// Has no effect once [`Column::nullable_enum`] has been called.
    pub fn nullable(mut self, nullable: bool) -> Self {
        if self.nullability != Nullability::DefaultNull {
            self.nullability = if nullable {
                Nullability::Null
            } else {
                Nullability::NotNull
            };
        }
        self
    }

    /// Marks the column as a nullable enum, rendered as `DEFAULT NULL`.
    pub fn nullable_enum(mut self) -> Self {
        self.nullability = Nullability::DefaultNull;
        self
    }

    /// Marks the column as primary key.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Marks the column as `AUTO_INCREMENT`.
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Sets a literal default value.
    pub fn default(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.default = Some(DefaultValue::Literal(value));
        }
        self
    }

    /// Defaults the column to `CURRENT_TIMESTAMP`.
    pub fn default_current_timestamp(mut self) -> Self {
        self.default = Some(DefaultValue::CurrentTimestamp);
        self
    }

    /// Declares a nullable timestamp defaulting to `NULL`.
    pub fn nullable_timestamp(mut self) -> Self {
        self.default = Some(DefaultValue::NullTimestamp);
        self
    }

    /// Validates the column and returns its immutable [`ColumnDef`].
    pub fn build(&self) -> SchemaResult<ColumnDef> {
        let name = self
            .name
            .clone()
            .ok_or(SchemaError::ColumnNameEmpty {
                table: None,
                position: None,
            })?;
        let data_type = self
            .data_type
            .clone()
            .ok_or_else(|| SchemaError::DataTypeEmpty {
                column: name.clone(),
            })?;

        Ok(ColumnDef {
            name,
            data_type,
            length: self.length,
            enum_values: self.enum_values.clone(),
            nullability: self.nullability,
            default: self.default.clone(),
            primary_key: self.primary_key,
            auto_increment: self.auto_increment,
        })
    }
}

/// Defines a validated column of a table.
///
/// Name and data type are always non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    name: String,
    data_type: String,
    length: Option<u32>,
    enum_values: Vec<String>,
    nullability: Nullability,
    default: Option<DefaultValue>,
    primary_key: bool,
    auto_increment: bool,
}

impl ColumnDef {
    /// The name of the column.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw SQL data type of the column.
    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    /// The length of the column, if any.
    pub fn length(&self) -> Option<u32> {
        self.length
    }

    /// The values of an enum column; empty for other columns.
    pub fn enum_values(&self) -> &[String] {
        &self.enum_values
    }

    /// The null clause of the column.
    pub fn nullability(&self) -> Nullability {
        self.nullability
    }

    /// The default clause of the column, if any.
    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    /// Indicates if this column is the primary key.
    pub fn primary_key(&self) -> bool {
        self.primary_key
    }

    /// Indicates if this column is `AUTO_INCREMENT`.
    pub fn auto_increment(&self) -> bool {
        self.auto_increment
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_build_column() {
        let column = Column::create()
            .column("id")
            .data_type("INT")
            .nullable(false)
            .length(11)
            .primary_key()
            .auto_increment()
            .build()
            .expect("should build");

        assert_eq!(column.name(), "id");
        assert_eq!(column.data_type(), "INT");
        assert_eq!(column.length(), Some(11));
        assert_eq!(column.nullability(), Nullability::NotNull);
        assert!(column.primary_key());
        assert!(column.auto_increment());
        assert!(column.default_value().is_none());
        assert!(column.enum_values().is_empty());
    }

    #[test]
    fn test_should_fail_without_name() {
        let err = Column::create().data_type("INT").build().unwrap_err();
        assert_eq!(
            err,
            SchemaError::ColumnNameEmpty {
                table: None,
                position: None,
            }
        );
    }

    #[test]
    fn test_should_fail_without_data_type() {
        let err = Column::create().column("name").build().unwrap_err();
        assert_eq!(
            err,
            SchemaError::DataTypeEmpty {
                column: "name".to_string()
            }
        );
    }

    #[test]
    fn test_should_report_missing_name_before_data_type() {
        let err = Column::create().build().unwrap_err();
        assert_eq!(
            err,
            SchemaError::ColumnNameEmpty {
                table: None,
                position: None,
            }
        );
    }

    #[test]
    fn test_should_ignore_empty_name_and_type() {
        let column = Column::create()
            .column("email")
            .column("")
            .data_type("VARCHAR")
            .data_type("")
            .build()
            .expect("should build");

        assert_eq!(column.name(), "email");
        assert_eq!(column.data_type(), "VARCHAR");
    }

    #[test]
    fn test_should_ignore_non_positive_length() {
        let column = Column::create()
            .column("name")
            .data_type("VARCHAR")
            .length(75)
            .length(0)
            .length(-3)
            .build()
            .expect("should build");
        assert_eq!(column.length(), Some(75));

        let column = Column::create()
            .column("name")
            .data_type("VARCHAR")
            .length(-1)
            .build()
            .expect("should build");
        assert_eq!(column.length(), None);
    }

    #[test]
    fn test_should_ignore_length_out_of_range() {
        let column = Column::create()
            .column("body")
            .data_type("LONGTEXT")
            .length(i64::from(u32::MAX))
            .length(i64::from(u32::MAX) + 1)
            .build()
            .expect("should build");
        assert_eq!(column.length(), Some(u32::MAX));
    }

    #[test]
    fn test_should_keep_primary_key_idempotent() {
        let once = Column::create().column("id").data_type("INT").primary_key();
        let twice = once.clone().primary_key();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_should_toggle_nullable() {
        let column = Column::create().nullable(true);
        assert_eq!(column.nullability, Nullability::Null);
        let column = column.nullable(false);
        assert_eq!(column.nullability, Nullability::NotNull);
    }

    #[test]
    fn test_nullable_enum_should_win_over_toggle() {
        let column = Column::create().nullable(false).nullable_enum().nullable(false);
        assert_eq!(column.nullability, Nullability::DefaultNull);
    }

    #[test]
    fn test_last_default_should_win() {
        let column = Column::create().default("guest").default_current_timestamp();
        assert_eq!(column.default, Some(DefaultValue::CurrentTimestamp));

        let column = column.nullable_timestamp();
        assert_eq!(column.default, Some(DefaultValue::NullTimestamp));

        let column = column.default("guest");
        assert_eq!(column.default, Some(DefaultValue::Literal("guest".to_string())));

        let column = column.default("");
        assert_eq!(column.default, Some(DefaultValue::Literal("guest".to_string())));
    }

    #[test]
    fn test_should_ignore_empty_enum_values() {
        let column = Column::create()
            .enum_values(["Men", "Women"])
            .enum_values(Vec::<String>::new());
        assert_eq!(column.enum_values, vec!["Men", "Women"]);
    }

    #[test]
    fn test_should_render_clause_fragments() {
        assert_eq!(Nullability::Unset.as_sql(), None);
        assert_eq!(Nullability::NotNull.as_sql(), Some("NOT NULL"));
        assert_eq!(Nullability::Null.as_sql(), Some("NULL"));
        assert_eq!(Nullability::DefaultNull.as_sql(), Some("DEFAULT NULL"));
        assert_eq!(
            DefaultValue::Literal("guest".to_string()).as_sql(),
            "DEFAULT 'guest'"
        );
        assert_eq!(
            DefaultValue::CurrentTimestamp.as_sql(),
            "DEFAULT CURRENT_TIMESTAMP"
        );
        assert_eq!(DefaultValue::NullTimestamp.as_sql(), "NULL DEFAULT NULL");
    }
}
