//! API model construction
//!
//! Builds the built-in default model and layers a [`UserConfig`] on top of it.
//!
//! [`UserConfig`]: crate::domain::UserConfig

pub mod defaults;
pub mod error;
pub mod overrides;

pub use defaults::default_model;
pub use error::OverrideError;
pub use overrides::apply_overrides;
