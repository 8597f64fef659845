//! API model document types
//!
//! Field names follow the `vlabs` JSON layout: camelCase keys, with empty
//! optional fields left out of the serialized document.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::secret::SecretString;

fn is_zero(value: &u32) -> bool {
    *value == 0
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Root of the cluster deployment descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiModel {
    pub api_version: String,
    pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    pub orchestrator_profile: OrchestratorProfile,
    pub master_profile: MasterProfile,
    pub agent_pool_profiles: Vec<AgentPoolProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linux_profile: Option<LinuxProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows_profile: Option<WindowsProfile>,
}

impl Properties {
    /// First agent pool running `os_type`.
    pub fn agent_pool(&self, os_type: OsType) -> Option<&AgentPoolProfile> {
        self.agent_pool_profiles.iter().find(|pool| pool.os_type == os_type)
    }

    pub fn agent_pool_mut(&mut self, os_type: OsType) -> Option<&mut AgentPoolProfile> {
        self.agent_pool_profiles.iter_mut().find(|pool| pool.os_type == os_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestratorProfile {
    pub orchestrator_type: String,
    pub orchestrator_release: String,
    pub kubernetes_config: Option<KubernetesConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KubernetesConfig {
    #[serde(skip_serializing_if = "is_false")]
    pub use_managed_identity: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub network_plugin: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub network_policy: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub container_runtime: String,
}

/// Control-plane node group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterProfile {
    pub count: i32,
    pub vm_size: String,
    #[serde(rename = "osDiskSizeGB", default, skip_serializing_if = "is_zero")]
    pub os_disk_size_gb: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub storage_profile: String,
    #[serde(default)]
    pub dns_prefix: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub distro: String,
}

/// Named, homogeneous group of worker nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPoolProfile {
    pub name: String,
    pub count: i32,
    pub vm_size: String,
    #[serde(rename = "osDiskSizeGB", default, skip_serializing_if = "is_zero")]
    pub os_disk_size_gb: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub storage_profile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accelerated_networking_enabled: Option<bool>,
    pub os_type: OsType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub availability_profile: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub distro: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OsType {
    Linux,
    Windows,
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsType::Linux => f.write_str("Linux"),
            OsType::Windows => f.write_str("Windows"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinuxProfile {
    pub admin_username: String,
    #[serde(default)]
    pub ssh: SshConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshConfig {
    #[serde(default)]
    pub public_keys: Vec<SshKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshKey {
    pub key_data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowsProfile {
    pub admin_username: String,
    #[serde(default)]
    pub admin_password: SecretString,
}
