//! Test helpers shared across crates in the workspace.
//!
//! [`models`] provides sample payload records with and without the
//! `to_array` capability; [`jail`] wraps `figment::Jail` for tests touching
//! files or environment variables.

pub mod jail;
pub mod models;

pub use jail::{figment_error, with_jail};
pub use models::{TestModel, TestModelArrayable, TestModelChild};
