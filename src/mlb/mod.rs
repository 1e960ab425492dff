//! MLB Stats API client and wire types

pub mod http;
pub mod types;
