//! generate-defaults command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::config::{resolve_user_config, CliOverrides};
use crate::model::{apply_overrides, default_model};
use crate::render::{render_model, OutputFormat, RenderOptions};

#[derive(Args)]
pub struct GenerateArgs {
    /// User config file (.toml, .yaml, .yml or .json)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore APIMODEL_* environment variables
    #[arg(long)]
    pub no_env: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write the model to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Mask the Windows admin password in the output
    #[arg(long)]
    pub redact_secrets: bool,

    /// Number of master nodes
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub leader_count: Option<i32>,

    /// VM size of the master nodes
    #[arg(long, value_name = "SKU")]
    pub leader_sku: Option<String>,

    /// Number of Linux agent nodes
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub linux_count: Option<i32>,

    /// VM size of the Linux agent pool
    #[arg(long, value_name = "SKU")]
    pub linux_sku: Option<String>,

    /// Number of Windows agent nodes
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub windows_count: Option<i32>,

    /// VM size of the Windows agent pool
    #[arg(long, value_name = "SKU")]
    pub windows_sku: Option<String>,

    /// Linux admin username
    #[arg(long, value_name = "USER")]
    pub linux_user: Option<String>,

    /// SSH public key file appended to the Linux profile
    #[arg(long, value_name = "PATH")]
    pub ssh_public_key_file: Option<PathBuf>,

    /// Windows admin username
    #[arg(long, value_name = "USER")]
    pub windows_user: Option<String>,

    /// File holding the Windows admin password
    #[arg(long, value_name = "PATH")]
    pub windows_password_file: Option<PathBuf>,

    /// Kubernetes release (e.g. 1.11)
    #[arg(long, value_name = "VERSION")]
    pub kubernetes_version: Option<String>,

    /// Kubernetes network plugin
    #[arg(long, value_name = "NAME")]
    pub network_plugin: Option<String>,

    /// Kubernetes network policy
    #[arg(long, value_name = "NAME")]
    pub network_policy: Option<String>,
}

impl GenerateArgs {
    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            leader_count: self.leader_count,
            leader_sku: self.leader_sku.clone(),
            linux_count: self.linux_count,
            linux_sku: self.linux_sku.clone(),
            windows_count: self.windows_count,
            windows_sku: self.windows_sku.clone(),
            linux_user: self.linux_user.clone(),
            ssh_public_key_file: self.ssh_public_key_file.clone(),
            windows_user: self.windows_user.clone(),
            windows_password_file: self.windows_password_file.clone(),
            kubernetes_version: self.kubernetes_version.clone(),
            network_plugin: self.network_plugin.clone(),
            network_policy: self.network_policy.clone(),
        }
    }
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let user_config =
        resolve_user_config(&cwd, args.config.as_deref(), !args.no_env, &args.cli_overrides())
            .context("Failed to load user config")?;
    tracing::debug!("effective user config: {:?}", user_config);

    let mut model = default_model();
    apply_overrides(&mut model, Some(&user_config)).context("Failed to apply user overrides")?;

    let options = RenderOptions { format: args.format, redact_secrets: args.redact_secrets };
    let rendered = render_model(&model, options)?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered.as_bytes())
                .with_context(|| format!("Failed writing API model to {}", path.display()))?;
            tracing::info!("wrote API model to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes()).context("Failed writing API model to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
