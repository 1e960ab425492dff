//! Storage layer for the MLB roster service
//!
//! A thin layer over a single SQLite file:
//! - `models`: Row structures
//! - `schema`: Connection and schema management
//! - `queries`: Upserts and the read queries served over HTTP

pub mod models;
pub mod queries;
pub mod schema;


pub use models::*;
pub use schema::{default_database_path, resolve_database_path, RosterDatabase};
