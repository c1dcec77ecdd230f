//! Re-exports all the most commonly used items from this crate.

pub use fastmigration_api::prelude::*;

pub use crate::blueprint::{Blueprint, RenderOptions};
pub use crate::config::MigratorConfig;
pub use crate::connection::{Connection, DryRunConnection};
pub use crate::executor::Executor;
pub use crate::migration::{Migration, Migrator};
