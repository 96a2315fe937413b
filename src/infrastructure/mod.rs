//! Infrastructure layer: storage backends.
//!
//! Two implementations of the domain repository traits:
//!
//! - [`persistence`] - PostgreSQL via sqlx (hex token identifiers)
//! - [`memory`] - in-process catalog behind a `RwLock` (serial identifiers)
//!
//! The backend is chosen at startup from configuration; handlers only ever
//! see the traits.

pub mod memory;
pub mod persistence;
