//! Built-in default API model

use crate::domain::{
    AgentPoolProfile, ApiModel, KubernetesConfig, LinuxProfile, MasterProfile,
    OrchestratorProfile, OsType, Properties, SecretString, SshConfig, WindowsProfile,
};

pub const API_VERSION: &str = "vlabs";
pub const ORCHESTRATOR_TYPE: &str = "Kubernetes";
pub const ORCHESTRATOR_RELEASE: &str = "1.10";
pub const NETWORK_PLUGIN: &str = "azure";
pub const NETWORK_POLICY: &str = "azure";

pub const MASTER_COUNT: i32 = 3;
pub const MASTER_VM_SIZE: &str = "Standard_DS2_v2";
pub const LINUX_POOL_NAME: &str = "linuxpool1";
pub const LINUX_POOL_COUNT: i32 = 3;
pub const LINUX_POOL_VM_SIZE: &str = "Standard_DS2_v2";
pub const WINDOWS_POOL_NAME: &str = "windowspool1";
pub const WINDOWS_POOL_COUNT: i32 = 0;
pub const WINDOWS_POOL_VM_SIZE: &str = "Standard_DS2_v3";

pub const OS_DISK_SIZE_GB: u32 = 200;
pub const STORAGE_PROFILE: &str = "ManagedDisks";
pub const AVAILABILITY_PROFILE: &str = "VirtualMachineScaleSets";
pub const ADMIN_USERNAME: &str = "azureuser";

/// Build a fresh default API model: Kubernetes 1.10 with managed identity and
/// azure networking, three masters, a three-node Linux pool and an empty
/// Windows pool.
pub fn default_model() -> ApiModel {
    ApiModel {
        api_version: API_VERSION.to_string(),
        properties: Properties {
            orchestrator_profile: OrchestratorProfile {
                orchestrator_type: ORCHESTRATOR_TYPE.to_string(),
                orchestrator_release: ORCHESTRATOR_RELEASE.to_string(),
                kubernetes_config: Some(KubernetesConfig {
                    use_managed_identity: true,
                    network_plugin: NETWORK_PLUGIN.to_string(),
                    network_policy: NETWORK_POLICY.to_string(),
                    container_runtime: String::new(),
                }),
            },
            master_profile: MasterProfile {
                count: MASTER_COUNT,
                vm_size: MASTER_VM_SIZE.to_string(),
                os_disk_size_gb: OS_DISK_SIZE_GB,
                storage_profile: STORAGE_PROFILE.to_string(),
                dns_prefix: String::new(),
                distro: String::new(),
            },
            agent_pool_profiles: vec![
                AgentPoolProfile {
                    name: LINUX_POOL_NAME.to_string(),
                    count: LINUX_POOL_COUNT,
                    vm_size: LINUX_POOL_VM_SIZE.to_string(),
                    os_disk_size_gb: OS_DISK_SIZE_GB,
                    storage_profile: STORAGE_PROFILE.to_string(),
                    accelerated_networking_enabled: Some(true),
                    os_type: OsType::Linux,
                    availability_profile: AVAILABILITY_PROFILE.to_string(),
                    distro: String::new(),
                },
                AgentPoolProfile {
                    name: WINDOWS_POOL_NAME.to_string(),
                    count: WINDOWS_POOL_COUNT,
                    vm_size: WINDOWS_POOL_VM_SIZE.to_string(),
                    os_disk_size_gb: OS_DISK_SIZE_GB,
                    storage_profile: STORAGE_PROFILE.to_string(),
                    accelerated_networking_enabled: None,
                    os_type: OsType::Windows,
                    availability_profile: AVAILABILITY_PROFILE.to_string(),
                    distro: String::new(),
                },
            ],
            linux_profile: Some(LinuxProfile {
                admin_username: ADMIN_USERNAME.to_string(),
                ssh: SshConfig::default(),
            }),
            windows_profile: Some(WindowsProfile {
                admin_username: ADMIN_USERNAME.to_string(),
                admin_password: SecretString::default(),
            }),
        },
    }
}
