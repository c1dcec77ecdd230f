//! Configuration of the [`Migrator`](crate::migration::Migrator).

use std::env;

use fastmigration_api::prelude::{Charset, Engine, MigrationError, MigrationResult};
use serde::{Deserialize, Serialize};

use crate::blueprint::RenderOptions;

/// Environment variable overriding the default engine.
pub const ENGINE_ENV: &str = "FASTMIGRATION_ENGINE";
/// Environment variable overriding the default charset.
pub const CHARSET_ENV: &str = "FASTMIGRATION_CHARSET";
/// Environment variable enabling the dry run mode.
pub const DRY_RUN_ENV: &str = "FASTMIGRATION_DRY_RUN";

/// Migrator configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigratorConfig {
    /// Engine used by tables which don't set one.
    pub engine: Engine,
    /// Charset used by tables which don't set one.
    pub charset: Charset,
    /// Render the statements without executing them.
    pub dry_run: bool,
}

impl MigratorConfig {
    /// Loads the configuration from the environment.
    ///
    /// Unset variables keep their default value.
    pub fn from_env() -> MigrationResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> MigrationResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(engine) = lookup(ENGINE_ENV) {
            config.engine = engine
                .parse::<Engine>()
                .map_err(|err| MigrationError::Config(format!("{ENGINE_ENV}: {err}")))?;
        }
        if let Some(charset) = lookup(CHARSET_ENV) {
            config.charset = charset
                .parse::<Charset>()
                .map_err(|err| MigrationError::Config(format!("{CHARSET_ENV}: {err}")))?;
        }
        if let Some(dry_run) = lookup(DRY_RUN_ENV) {
            config.dry_run = match dry_run.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                other => {
                    return Err(MigrationError::Config(format!(
                        "{DRY_RUN_ENV}: invalid boolean '{other}'"
                    )));
                }
            };
        }

        Ok(config)
    }
}

impl From<&MigratorConfig> for RenderOptions {
    fn from(config: &MigratorConfig) -> Self {
        Self {
            default_engine: config.engine,
            default_charset: config.charset,
        }
    }
}
