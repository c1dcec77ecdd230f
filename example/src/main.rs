//! Runs the example migrations against a dry run connection and prints the statements.
//!
//! Configure it with `FASTMIGRATION_ENGINE`, `FASTMIGRATION_CHARSET`, `FASTMIGRATION_DRY_RUN`
//! and `RUST_LOG`.

mod migrations;

use fastmigration::prelude::{DryRunConnection, Migrator, MigratorConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fastmigration=debug,example=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = MigratorConfig::from_env()?;
    tracing::info!("starting migrations with config: {config:?}");

    let migrator = migrations::container(Migrator::from_config(&config));
    let mut connection = DryRunConnection::default();
    let statements = migrator.run(&mut connection)?;

    for statement in statements {
        println!("{statement}\n");
    }

    Ok(())
}
