//! Data Source Module
//!
//! Name-routed access to shared tables.

mod shared;
mod source;

pub use shared::{share, SharedTable};
pub use source::{DataSource, DataSourceBuilder};
