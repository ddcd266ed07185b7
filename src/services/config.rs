// Shell integration settings, stored by the application shell as JSON

use serde::{Deserialize, Serialize};

use super::error::Result;

/// Environment variable the folder dialog reads its title from.
pub const DEFAULT_TITLE_ENV_VAR: &str = "NATIVE_BRIDGE_DIALOG_TITLE";

/// How aggressively `..` segments are rejected before revealing a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalPolicy {
    /// Reject any `..` segment in the input as written, then apply the
    /// cleaned-path check.
    #[default]
    Strict,
    /// Only reject `..` segments that survive lexical cleaning.
    Cleaned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Dialog host override. Looked up on `PATH` when unset.
    pub powershell_program: Option<String>,
    /// Shell used to hand a directory to the file manager.
    pub reveal_program: String,
    pub title_env_var: String,
    /// Exit status the dialog host uses for "user cancelled".
    pub cancel_exit_code: i32,
    pub traversal_policy: TraversalPolicy,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            powershell_program: None,
            reveal_program: "cmd".to_string(),
            title_env_var: DEFAULT_TITLE_ENV_VAR.to_string(),
            cancel_exit_code: 1,
            traversal_policy: TraversalPolicy::default(),
        }
    }
}

impl ShellConfig {
    /// Parse settings, filling anything missing with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.powershell_program, None);
        assert_eq!(config.reveal_program, "cmd");
        assert_eq!(config.title_env_var, DEFAULT_TITLE_ENV_VAR);
        assert_eq!(config.cancel_exit_code, 1);
        assert_eq!(config.traversal_policy, TraversalPolicy::Strict);
    }

    #[test]
    fn test_from_json_partial() {
        let config = ShellConfig::from_json(
            r#"{ "powershell_program": "pwsh", "traversal_policy": "cleaned" }"#,
        )
        .unwrap();

        assert_eq!(config.powershell_program.as_deref(), Some("pwsh"));
        assert_eq!(config.traversal_policy, TraversalPolicy::Cleaned);
        assert_eq!(config.reveal_program, "cmd");
        assert_eq!(config.cancel_exit_code, 1);
    }

    #[test]
    fn test_from_json_empty_object() {
        assert_eq!(ShellConfig::from_json("{}").unwrap(), ShellConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = ShellConfig::from_json(r#"{ "traversal_policy": "lenient" }"#).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
        assert!(ShellConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_roundtrip_through_settings_value() {
        let config = ShellConfig {
            cancel_exit_code: 2,
            ..Default::default()
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["traversal_policy"], "strict");
        assert_eq!(value["cancel_exit_code"], 2);
    }
}
