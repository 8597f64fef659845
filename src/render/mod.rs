//! API model output rendering

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::domain::{ApiModel, SecretString};

/// Replacement written for secrets when redaction is on.
pub const PASSWORD_REDACTED: &str = "[PASSWORD_REDACTED]";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub redact_secrets: bool,
}

/// Serialize `model` to a newline-terminated document.
pub fn render_model(model: &ApiModel, options: RenderOptions) -> Result<String> {
    let redacted;
    let model = if options.redact_secrets {
        redacted = redact_secrets(model);
        &redacted
    } else {
        model
    };

    match options.format {
        OutputFormat::Json => {
            let mut out =
                serde_json::to_string_pretty(model).context("Failed to serialize API model as JSON")?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(model).context("Failed to serialize API model as YAML")
        }
    }
}

/// Copy of `model` with non-empty passwords masked.
pub fn redact_secrets(model: &ApiModel) -> ApiModel {
    let mut model = model.clone();
    if let Some(windows) = model.properties.windows_profile.as_mut() {
        if !windows.admin_password.is_empty() {
            windows.admin_password = SecretString::new(PASSWORD_REDACTED);
        }
    }
    model
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_model;

    fn model_with_password() -> ApiModel {
        let mut model = default_model();
        if let Some(windows) = model.properties.windows_profile.as_mut() {
            windows.admin_password = SecretString::new("Sup3rSecret!");
        }
        model
    }

    #[test]
    fn json_output_is_pretty_and_terminated() {
        let out = render_model(&default_model(), RenderOptions::default()).expect("render");
        assert!(out.starts_with("{\n  \"apiVersion\": \"vlabs\""));
        assert!(out.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(value["properties"]["masterProfile"]["count"], 3);
    }

    #[test]
    fn json_output_round_trips() {
        let model = model_with_password();
        let out = render_model(&model, RenderOptions::default()).expect("render");
        let back: ApiModel = serde_json::from_str(&out).expect("parse");
        assert_eq!(back, model);
    }

    #[test]
    fn yaml_output_uses_json_field_names() {
        let options = RenderOptions { format: OutputFormat::Yaml, redact_secrets: false };
        let out = render_model(&default_model(), options).expect("render");
        assert!(out.contains("apiVersion: vlabs"));
        assert!(out.contains("agentPoolProfiles:"));
        assert!(out.contains("osDiskSizeGB: 200"));
    }

    #[test]
    fn password_is_emitted_unless_redacted() {
        let model = model_with_password();

        let plain = render_model(&model, RenderOptions::default()).expect("render");
        assert!(plain.contains("Sup3rSecret!"));

        let options = RenderOptions { format: OutputFormat::Json, redact_secrets: true };
        let masked = render_model(&model, options).expect("render");
        assert!(!masked.contains("Sup3rSecret!"));
        assert!(masked.contains(PASSWORD_REDACTED));
    }

    #[test]
    fn empty_password_is_not_masked() {
        let redacted = redact_secrets(&default_model());
        assert_eq!(redacted, default_model());
    }
}
