//! apimodel-gen: default cluster API models with user overrides
//!
//! Builds a `vlabs` API model (Kubernetes orchestrator, master and agent
//! pools, Linux and Windows profiles) from built-in defaults, then applies a
//! simplified user config loaded from a file, the environment and CLI flags.

pub mod cli;
pub mod config;
pub mod domain;
pub mod model;
pub mod render;

pub use domain::{ApiModel, UserConfig};
pub use model::{apply_overrides, default_model, OverrideError};
