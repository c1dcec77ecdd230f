#![crate_name = "fastmigration_api"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # fastmigration API
//!
//! This crate exposes the descriptors used to declare a table for fastmigration:
//! columns, foreign key constraints, tables, and the engine and charset names
//! accepted by the `CREATE TABLE` statement.
//!
//! ```rust
//! use fastmigration_api::prelude::*;
//!
//! let table = Table::new("genders")
//!     .column(
//!         Column::create()
//!             .column("id")
//!             .data_type("INT")
//!             .nullable(false)
//!             .length(11)
//!             .primary_key()
//!             .auto_increment(),
//!     )
//!     .engine(Engine::InnoDB);
//!
//! assert_eq!(table.get_columns().len(), 1);
//! ```

#![doc(html_playground_url = "https://play.rust-lang.org")]

pub mod error;
pub mod prelude;
pub mod schema;
