//! apimodel-gen: generate default cluster API models
//!
//! Emits a `vlabs` API model with user overrides from a config file,
//! `APIMODEL_*` environment variables, or command-line flags applied.

use anyhow::Result;

fn main() -> Result<()> {
    apimodel_gen::cli::run()
}
