//! User-facing override configuration
//!
//! A simplified view of the cluster that users fill in through a config
//! file, `APIMODEL_*` environment variables, or CLI flags. Every field is
//! optional; absent fields leave the generated defaults untouched.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub profile: ProfileConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub leader: LeaderConfig,
    pub agent: AgentConfig,
    pub auth: AuthConfig,
    pub kubernetes: KubernetesSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderConfig {
    pub linux: NodePoolConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub linux: NodePoolConfig,
    pub windows: NodePoolConfig,
}

/// Size of a node group. `count: Some(0)` is an explicit zero, not "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodePoolConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub linux: LinuxAuthConfig,
    pub windows: WindowsAuthConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinuxAuthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowsAuthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KubernetesSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_plugin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_policy: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_fills_missing_sections_with_defaults() {
        let cfg: UserConfig = toml::from_str(
            r#"
            [profile.agent.windows]
            count = 0

            [profile.kubernetes]
            version = "1.11"
            "#,
        )
        .expect("parse");

        assert_eq!(cfg.profile.agent.windows.count, Some(0));
        assert_eq!(cfg.profile.agent.linux.count, None);
        assert_eq!(cfg.profile.kubernetes.version.as_deref(), Some("1.11"));
        assert_eq!(cfg.profile.leader, LeaderConfig::default());
    }

    #[test]
    fn yaml_paths_deserialize() {
        let cfg: UserConfig = serde_yaml::from_str(
            "profile:\n  auth:\n    linux:\n      user: ops\n      public_key_file: /tmp/id.pub\n",
        )
        .expect("parse");
        assert_eq!(cfg.profile.auth.linux.user.as_deref(), Some("ops"));
        assert_eq!(cfg.profile.auth.linux.public_key_file, Some(PathBuf::from("/tmp/id.pub")));
    }
}
