#![crate_name = "fastmigration"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # fastmigration
//!
//! Renders `CREATE TABLE IF NOT EXISTS` statements from declarative [`Table`](prelude::Table)
//! descriptors and executes them against a [`Connection`](prelude::Connection).
//!
//! ```rust
//! use fastmigration::prelude::*;
//!
//! let users = Table::new("users")
//!     .column(
//!         Column::create()
//!             .column("id")
//!             .data_type("INT")
//!             .nullable(false)
//!             .length(11)
//!             .primary_key()
//!             .auto_increment(),
//!     )
//!     .column(Column::create().column("name").data_type("VARCHAR").length(75));
//!
//! let mut connection = DryRunConnection::default();
//! let statement = Executor::new(&mut connection).blueprint(&users).unwrap();
//!
//! assert_eq!(
//!     statement,
//!     "CREATE TABLE IF NOT EXISTS users (\n\
//!      `id` INT(11) NOT NULL PRIMARY KEY AUTO_INCREMENT,\n\
//!      `name` VARCHAR(75)\n\
//!      ) ENGINE=InnoDB CHARACTER SET=utf8;"
//! );
//! assert_eq!(connection.statements(), &[statement]);
//! ```

#![doc(html_playground_url = "https://play.rust-lang.org")]

pub mod blueprint;
pub mod config;
pub mod connection;
pub mod executor;
pub mod migration;
pub mod prelude;
#[cfg(test)]
mod tests;
