//! Configuration loading for the wage computation engine.
//!
//! This module provides functionality to assemble a
//! [`crate::models::ReferenceSnapshot`] from a directory of YAML fixture
//! files, for tests and local tooling. Production callers build the
//! snapshot from the relational schema directly (§6) and never touch this
//! module.
//!
//! # Example
//!
//! ```no_run
//! use guide_wage_engine::config::ConfigLoader;
//!
//! let snapshot = ConfigLoader::load("./config/fixtures").unwrap();
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
