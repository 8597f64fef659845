//! `APIMODEL_*` environment overrides

use std::path::PathBuf;

use super::error::ConfigError;
use crate::domain::UserConfig;

pub const LEADER_COUNT: &str = "APIMODEL_LEADER_COUNT";
pub const LEADER_SKU: &str = "APIMODEL_LEADER_SKU";
pub const LINUX_COUNT: &str = "APIMODEL_LINUX_COUNT";
pub const LINUX_SKU: &str = "APIMODEL_LINUX_SKU";
pub const WINDOWS_COUNT: &str = "APIMODEL_WINDOWS_COUNT";
pub const WINDOWS_SKU: &str = "APIMODEL_WINDOWS_SKU";
pub const LINUX_USER: &str = "APIMODEL_LINUX_USER";
pub const SSH_PUBLIC_KEY_FILE: &str = "APIMODEL_SSH_PUBLIC_KEY_FILE";
pub const WINDOWS_USER: &str = "APIMODEL_WINDOWS_USER";
pub const WINDOWS_PASSWORD_FILE: &str = "APIMODEL_WINDOWS_PASSWORD_FILE";
pub const KUBERNETES_VERSION: &str = "APIMODEL_KUBERNETES_VERSION";
pub const NETWORK_PLUGIN: &str = "APIMODEL_NETWORK_PLUGIN";
pub const NETWORK_POLICY: &str = "APIMODEL_NETWORK_POLICY";

/// Overwrite fields of `config` with the matching `APIMODEL_*` variables.
///
/// Variables that are unset or empty are skipped. `env_lookup` is
/// `std::env::var(..).ok()` outside of tests.
pub fn apply_env_overrides(
    config: &mut UserConfig,
    env_lookup: &impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    let profile = &mut config.profile;

    env_count(LEADER_COUNT, env_lookup, &mut profile.leader.linux.count)?;
    env_string(LEADER_SKU, env_lookup, &mut profile.leader.linux.sku);
    env_count(LINUX_COUNT, env_lookup, &mut profile.agent.linux.count)?;
    env_string(LINUX_SKU, env_lookup, &mut profile.agent.linux.sku);
    env_count(WINDOWS_COUNT, env_lookup, &mut profile.agent.windows.count)?;
    env_string(WINDOWS_SKU, env_lookup, &mut profile.agent.windows.sku);

    env_string(LINUX_USER, env_lookup, &mut profile.auth.linux.user);
    env_path(SSH_PUBLIC_KEY_FILE, env_lookup, &mut profile.auth.linux.public_key_file);
    env_string(WINDOWS_USER, env_lookup, &mut profile.auth.windows.user);
    env_path(WINDOWS_PASSWORD_FILE, env_lookup, &mut profile.auth.windows.password_file);

    env_string(KUBERNETES_VERSION, env_lookup, &mut profile.kubernetes.version);
    env_string(NETWORK_PLUGIN, env_lookup, &mut profile.kubernetes.network_plugin);
    env_string(NETWORK_POLICY, env_lookup, &mut profile.kubernetes.network_policy);

    Ok(())
}

fn lookup_non_empty(key: &str, env_lookup: &impl Fn(&str) -> Option<String>) -> Option<String> {
    env_lookup(key).filter(|value| !value.trim().is_empty())
}

fn env_string(key: &str, env_lookup: &impl Fn(&str) -> Option<String>, slot: &mut Option<String>) {
    if let Some(value) = lookup_non_empty(key, env_lookup) {
        tracing::debug!("{} set from environment", key);
        *slot = Some(value);
    }
}

fn env_path(key: &str, env_lookup: &impl Fn(&str) -> Option<String>, slot: &mut Option<PathBuf>) {
    if let Some(value) = lookup_non_empty(key, env_lookup) {
        tracing::debug!("{} set from environment", key);
        *slot = Some(PathBuf::from(value));
    }
}

fn env_count(
    key: &str,
    env_lookup: &impl Fn(&str) -> Option<String>,
    slot: &mut Option<i32>,
) -> Result<(), ConfigError> {
    if let Some(raw) = lookup_non_empty(key, env_lookup) {
        let parsed = raw.trim().parse::<i32>().map_err(|_| ConfigError::EnvParse {
            key: key.to_string(),
            value: raw.clone(),
            reason: "expected integer".to_string(),
        })?;
        tracing::debug!("{} set from environment", key);
        *slot = Some(parsed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn map_lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn no_variables_leave_config_untouched() {
        let mut cfg = UserConfig::default();
        cfg.profile.leader.linux.count = Some(1);
        apply_env_overrides(&mut cfg, &map_lookup(&[])).expect("env");
        assert_eq!(cfg.profile.leader.linux.count, Some(1));
    }

    #[test]
    fn every_variable_maps_to_its_field() {
        let env = map_lookup(&[
            (LEADER_COUNT, "5"),
            (LEADER_SKU, "Standard_D4s_v3"),
            (LINUX_COUNT, " 4 "),
            (LINUX_SKU, "Standard_F8s"),
            (WINDOWS_COUNT, "0"),
            (WINDOWS_SKU, "Standard_D2_v3"),
            (LINUX_USER, "ops"),
            (SSH_PUBLIC_KEY_FILE, "/keys/id.pub"),
            (WINDOWS_USER, "winops"),
            (WINDOWS_PASSWORD_FILE, "/keys/pw"),
            (KUBERNETES_VERSION, "1.11"),
            (NETWORK_PLUGIN, "kubenet"),
            (NETWORK_POLICY, "calico"),
        ]);

        let mut cfg = UserConfig::default();
        apply_env_overrides(&mut cfg, &env).expect("env");
        let p = &cfg.profile;
        assert_eq!(p.leader.linux.count, Some(5));
        assert_eq!(p.leader.linux.sku.as_deref(), Some("Standard_D4s_v3"));
        assert_eq!(p.agent.linux.count, Some(4));
        assert_eq!(p.agent.linux.sku.as_deref(), Some("Standard_F8s"));
        assert_eq!(p.agent.windows.count, Some(0));
        assert_eq!(p.agent.windows.sku.as_deref(), Some("Standard_D2_v3"));
        assert_eq!(p.auth.linux.user.as_deref(), Some("ops"));
        assert_eq!(p.auth.linux.public_key_file, Some(PathBuf::from("/keys/id.pub")));
        assert_eq!(p.auth.windows.user.as_deref(), Some("winops"));
        assert_eq!(p.auth.windows.password_file, Some(PathBuf::from("/keys/pw")));
        assert_eq!(p.kubernetes.version.as_deref(), Some("1.11"));
        assert_eq!(p.kubernetes.network_plugin.as_deref(), Some("kubenet"));
        assert_eq!(p.kubernetes.network_policy.as_deref(), Some("calico"));
    }

    #[test]
    fn env_overrides_file_values() {
        let mut cfg = UserConfig::default();
        cfg.profile.kubernetes.version = Some("1.10".to_string());
        apply_env_overrides(&mut cfg, &map_lookup(&[(KUBERNETES_VERSION, "1.12")])).expect("env");
        assert_eq!(cfg.profile.kubernetes.version.as_deref(), Some("1.12"));
    }

    #[test]
    fn empty_variables_are_skipped() {
        let mut cfg = UserConfig::default();
        cfg.profile.auth.linux.user = Some("ops".to_string());
        apply_env_overrides(&mut cfg, &map_lookup(&[(LINUX_USER, ""), (LEADER_COUNT, "  ")]))
            .expect("env");
        assert_eq!(cfg.profile.auth.linux.user.as_deref(), Some("ops"));
        assert_eq!(cfg.profile.leader.linux.count, None);
    }

    #[test]
    fn negative_count_is_passed_through() {
        let mut cfg = UserConfig::default();
        apply_env_overrides(&mut cfg, &map_lookup(&[(LINUX_COUNT, "-2")])).expect("env");
        assert_eq!(cfg.profile.agent.linux.count, Some(-2));
    }

    #[test]
    fn invalid_count_names_the_variable() {
        let mut cfg = UserConfig::default();
        let err = apply_env_overrides(&mut cfg, &map_lookup(&[(WINDOWS_COUNT, "two")]))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains(WINDOWS_COUNT));
        assert!(message.contains("two"));
    }
}
