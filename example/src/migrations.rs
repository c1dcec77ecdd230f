//! Migrations of the example database.

mod genders;
mod users;

use fastmigration::prelude::Migrator;

pub use self::genders::GendersMigration;
pub use self::users::UsersMigration;

/// Registers every migration, referenced tables first.
pub fn container(migrator: Migrator) -> Migrator {
    migrator.add(GendersMigration).add(UsersMigration)
}
