//! This module contains the descriptors used to declare a table.

/// Declares an enum of SQL names, each variant mapped verbatim to its DDL string.
macro_rules! sql_names {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($unknown:ident) {
            default: $default:ident,
            $($variant:ident => $sql:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $(
                #[doc = concat!("`", $sql, "`")]
                $variant,
            )+
        }

        impl $name {
            /// All the known names, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Returns the name as written in the DDL statement.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $sql,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::schema::SchemaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|name| name.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| crate::schema::SchemaError::$unknown(s.to_string()))
            }
        }

        impl TryFrom<String> for $name {
            type Error = crate::schema::SchemaError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for String {
            fn from(name: $name) -> Self {
                name.as_str().to_string()
            }
        }
    };
}

mod charset;
mod column;
mod constraint;
mod engine;
mod table;

use thiserror::Error;

pub use self::charset::Charset;
pub use self::column::{Column, ColumnDef, DefaultValue, Nullability};
pub use self::constraint::{Constraint, ConstraintBuilder, ForeignKeyDef};
pub use self::engine::Engine;
pub use self::table::Table;

/// The result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// An enum representing the validation errors raised while describing a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A column reached the build step without a name.
    ///
    /// `position` is the zero-based index of the column in its table. Both fields
    /// are `None` when the column is built outside of a table.
    #[error("Column name is empty{}", column_location(.table, .position))]
    ColumnNameEmpty {
        table: Option<String>,
        position: Option<usize>,
    },

    /// A column reached the build step without a data type.
    #[error("Data type is empty for column '{column}'")]
    DataTypeEmpty { column: String },

    /// The table has no name.
    #[error("Table name is empty")]
    TableNameEmpty,

    /// The table has no columns.
    #[error("Table '{table}' has no columns")]
    NoColumns { table: String },

    /// Foreign key, reference and table lists have different lengths.
    #[error(
        "Constraint length not match (foreign keys: {foreign_keys}, references: {references}, tables: {tables})"
    )]
    ConstraintArityMismatch {
        foreign_keys: usize,
        references: usize,
        tables: usize,
    },

    /// The name doesn't match any known storage engine.
    #[error("Unknown engine: {0}")]
    UnknownEngine(String),

    /// The name doesn't match any known character set.
    #[error("Unknown charset: {0}")]
    UnknownCharset(String),
}

fn column_location(table: &Option<String>, position: &Option<usize>) -> String {
    match (table, position) {
        (Some(table), Some(position)) => format!(" at position {position} of table '{table}'"),
        (Some(table), None) => format!(" in table '{table}'"),
        (None, Some(position)) => format!(" at position {position}"),
        (None, None) => String::new(),
    }
}
