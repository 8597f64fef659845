//! Merge CLI flags over the loaded config

use std::path::PathBuf;

use crate::domain::UserConfig;

/// Override values taken from command-line flags. `None` means the flag was
/// not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub leader_count: Option<i32>,
    pub leader_sku: Option<String>,
    pub linux_count: Option<i32>,
    pub linux_sku: Option<String>,
    pub windows_count: Option<i32>,
    pub windows_sku: Option<String>,
    pub linux_user: Option<String>,
    pub ssh_public_key_file: Option<PathBuf>,
    pub windows_user: Option<String>,
    pub windows_password_file: Option<PathBuf>,
    pub kubernetes_version: Option<String>,
    pub network_plugin: Option<String>,
    pub network_policy: Option<String>,
}

/// Layer `cli` over `config`; any flag that was given wins.
pub fn merge_cli_with_config(mut config: UserConfig, cli: &CliOverrides) -> UserConfig {
    let profile = &mut config.profile;

    overlay(&mut profile.leader.linux.count, &cli.leader_count);
    overlay(&mut profile.leader.linux.sku, &cli.leader_sku);
    overlay(&mut profile.agent.linux.count, &cli.linux_count);
    overlay(&mut profile.agent.linux.sku, &cli.linux_sku);
    overlay(&mut profile.agent.windows.count, &cli.windows_count);
    overlay(&mut profile.agent.windows.sku, &cli.windows_sku);
    overlay(&mut profile.auth.linux.user, &cli.linux_user);
    overlay(&mut profile.auth.linux.public_key_file, &cli.ssh_public_key_file);
    overlay(&mut profile.auth.windows.user, &cli.windows_user);
    overlay(&mut profile.auth.windows.password_file, &cli.windows_password_file);
    overlay(&mut profile.kubernetes.version, &cli.kubernetes_version);
    overlay(&mut profile.kubernetes.network_plugin, &cli.network_plugin);
    overlay(&mut profile.kubernetes.network_policy, &cli.network_policy);

    config
}

fn overlay<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
    if let Some(value) = value {
        *slot = Some(value.clone());
    }
}
