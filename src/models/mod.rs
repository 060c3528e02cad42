//! Record models
//!
//! Concrete entity types stored in tables by the demo binary and the tests.

pub mod user;

pub use user::{User, UserPatch};
