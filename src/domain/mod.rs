//! Core data types: the generated API model and the user override config

pub mod api_model;
pub mod secret;
pub mod user_config;

pub use api_model::{
    AgentPoolProfile, ApiModel, KubernetesConfig, LinuxProfile, MasterProfile,
    OrchestratorProfile, OsType, Properties, SshConfig, SshKey, WindowsProfile,
};
pub use secret::SecretString;
pub use user_config::{
    AgentConfig, AuthConfig, KubernetesSettings, LeaderConfig, LinuxAuthConfig, NodePoolConfig,
    ProfileConfig, UserConfig, WindowsAuthConfig,
};
