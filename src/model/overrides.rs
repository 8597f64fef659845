//! Apply a user override config onto a generated API model

use std::fs;
use std::io;
use std::path::Path;

use super::error::OverrideError;
use crate::domain::{
    ApiModel, KubernetesConfig, LinuxProfile, NodePoolConfig, OsType, Properties, SecretString, SshKey,
    UserConfig, WindowsProfile,
};

/// Copy every present field of `cfg` into `model`.
///
/// A `None` config leaves the model untouched. Overrides are applied in a
/// fixed order (leader, Linux pool, Windows pool, Linux auth, Windows auth,
/// Kubernetes) and the first file read failure aborts the remaining steps;
/// fields already written stay written.
pub fn apply_overrides(model: &mut ApiModel, cfg: Option<&UserConfig>) -> Result<(), OverrideError> {
    let Some(cfg) = cfg else {
        return Ok(());
    };
    let profile = &cfg.profile;
    let props = &mut model.properties;

    let leader = &profile.leader.linux;
    if let Some(count) = leader.count {
        props.master_profile.count = count;
        tracing::debug!(field = "masterProfile.count", count, "override applied");
    }
    if let Some(sku) = non_empty(&leader.sku) {
        props.master_profile.vm_size = sku.to_string();
        tracing::debug!(field = "masterProfile.vmSize", sku, "override applied");
    }

    apply_pool_overrides(props, OsType::Linux, &profile.agent.linux)?;
    apply_pool_overrides(props, OsType::Windows, &profile.agent.windows)?;

    let linux_auth = &profile.auth.linux;
    if let Some(user) = non_empty(&linux_auth.user) {
        linux_profile(&mut props.linux_profile).admin_username = user.to_string();
        tracing::debug!(field = "linuxProfile.adminUsername", user, "override applied");
    }
    if let Some(path) = non_empty_path(linux_auth.public_key_file.as_deref()) {
        let key_data = read_text(path).map_err(|source| OverrideError::ReadPublicKey {
            path: path.to_path_buf(),
            source,
        })?;
        let ssh = &mut linux_profile(&mut props.linux_profile).ssh;
        ssh.public_keys.push(SshKey { key_data });
        tracing::debug!(
            field = "linuxProfile.ssh.publicKeys",
            path = %path.display(),
            keys = ssh.public_keys.len(),
            "ssh public key appended"
        );
    }

    let windows_auth = &profile.auth.windows;
    if let Some(user) = non_empty(&windows_auth.user) {
        windows_profile(&mut props.windows_profile).admin_username = user.to_string();
        tracing::debug!(field = "windowsProfile.adminUsername", user, "override applied");
    }
    if let Some(path) = non_empty_path(windows_auth.password_file.as_deref()) {
        let password = read_text(path).map_err(|source| OverrideError::ReadWindowsPassword {
            path: path.to_path_buf(),
            source,
        })?;
        windows_profile(&mut props.windows_profile).admin_password = SecretString::from(password);
        tracing::debug!(
            field = "windowsProfile.adminPassword",
            path = %path.display(),
            "admin password read from file"
        );
    }

    let kubernetes = &profile.kubernetes;
    let orchestrator = &mut props.orchestrator_profile;
    if let Some(version) = non_empty(&kubernetes.version) {
        orchestrator.orchestrator_release = version.to_string();
        tracing::debug!(field = "orchestratorProfile.orchestratorRelease", version, "override applied");
    }
    if let Some(plugin) = non_empty(&kubernetes.network_plugin) {
        kubernetes_config(&mut orchestrator.kubernetes_config).network_plugin = plugin.to_string();
        tracing::debug!(field = "kubernetesConfig.networkPlugin", plugin, "override applied");
    }
    if let Some(policy) = non_empty(&kubernetes.network_policy) {
        kubernetes_config(&mut orchestrator.kubernetes_config).network_policy = policy.to_string();
        tracing::debug!(field = "kubernetesConfig.networkPolicy", policy, "override applied");
    }

    Ok(())
}

fn apply_pool_overrides(
    props: &mut Properties,
    os_type: OsType,
    overrides: &NodePoolConfig,
) -> Result<(), OverrideError> {
    let sku = non_empty(&overrides.sku);
    if overrides.count.is_none() && sku.is_none() {
        return Ok(());
    }

    let pool = props.agent_pool_mut(os_type).ok_or(OverrideError::MissingAgentPool(os_type))?;

    if let Some(count) = overrides.count {
        pool.count = count;
        tracing::debug!(pool = %pool.name, count, "agent pool count override applied");
    }
    if let Some(sku) = sku {
        pool.vm_size = sku.to_string();
        tracing::debug!(pool = %pool.name, sku, "agent pool vmSize override applied");
    }
    Ok(())
}

fn linux_profile(slot: &mut Option<LinuxProfile>) -> &mut LinuxProfile {
    slot.get_or_insert_with(LinuxProfile::default)
}

fn windows_profile(slot: &mut Option<WindowsProfile>) -> &mut WindowsProfile {
    slot.get_or_insert_with(WindowsProfile::default)
}

fn kubernetes_config(slot: &mut Option<KubernetesConfig>) -> &mut KubernetesConfig {
    slot.get_or_insert_with(KubernetesConfig::default)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn non_empty_path(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}

/// Whole-file read; bytes are kept as-is, invalid UTF-8 is replaced.
fn read_text(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}
