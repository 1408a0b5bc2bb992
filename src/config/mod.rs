// src/config/mod.rs

//! Configuration loading and validation for dsep.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file through the [`crate::fs::FileSystem`] seam (`loader.rs`).
//! - Validate basic invariants before anything else runs (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_or_default};
pub use model::{ConfigFile, ConfigSection, QueryConfig, RawConfigFile};
