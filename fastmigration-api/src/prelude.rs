//! Prelude exposes all the types for `fastmigration-api` crate.

pub use crate::error::{BackendError, MigrationError, MigrationResult};
pub use crate::schema::{
    Charset, Column, ColumnDef, Constraint, ConstraintBuilder, DefaultValue, Engine,
    ForeignKeyDef, Nullability, SchemaError, SchemaResult, Table,
};
