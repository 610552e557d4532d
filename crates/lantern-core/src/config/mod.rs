mod naming;
mod paths;

pub use naming::NamingConfig;
pub use paths::PathsConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LanternError, Result};

/// Root configuration for lantern, usually loaded from `lantern.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LanternConfig {
    /// Target framework flavor.
    #[serde(default)]
    pub framework: Framework,

    /// Directory layout of the project and the generated output.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Naming conventions for generated type names.
    #[serde(default)]
    pub naming: NamingConfig,
}

impl LanternConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| LanternError::Config(format!("Failed to read config file: {}", e)))?;

        tracing::debug!(path = %path.as_ref().display(), "loaded configuration");
        Self::parse_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = substitute_env_vars(content);

        toml::from_str(&content)
            .map_err(|e| LanternError::Config(format!("Failed to parse config: {}", e)))
    }
}

/// Supported host frameworks. Route type generation only runs for kit;
/// plain svelte projects have no file-based route tree to augment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    Kit,
    Svelte,
}

/// Substitute environment variables in the format ${VAR_NAME}.
fn substitute_env_vars(content: &str) -> String {
    let mut result = content.to_string();
    let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

    for cap in re.captures_iter(content) {
        let var_name = &cap[1];
        if let Ok(value) = std::env::var(var_name) {
            result = result.replace(&cap[0], &value);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LanternConfig::default();
        assert_eq!(config.framework, Framework::Kit);
        assert_eq!(config.paths.routes_dir, "src/routes");
        assert_eq!(config.naming.store_suffix, "Store");
    }

    #[test]
    fn test_parse_empty_config() {
        let config = LanternConfig::parse_toml("").unwrap();
        assert_eq!(config.framework, Framework::Kit);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            framework = "svelte"

            [paths]
            routes_dir = "app/routes"
            artifact_dir = "generated"

            [naming]
            store_suffix = "Query"
        "#;

        let config = LanternConfig::parse_toml(toml).unwrap();
        assert_eq!(config.framework, Framework::Svelte);
        assert_eq!(config.paths.routes_dir, "app/routes");
        assert_eq!(config.paths.artifact_dir, "generated");
        assert_eq!(config.paths.stores_dir, "stores");
        assert_eq!(config.naming.store_suffix, "Query");
    }

    #[test]
    fn test_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("lantern.toml");
        std::fs::write(&path, "framework = \"kit\"\n").unwrap();

        let config = LanternConfig::from_file(&path).unwrap();
        assert_eq!(config.framework, Framework::Kit);

        let err = LanternConfig::from_file(tmp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, LanternError::Config(_)));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LANTERN_TEST_ROUTES", "web/src/routes");

        let toml = r#"
            [paths]
            routes_dir = "${LANTERN_TEST_ROUTES}"
        "#;

        let config = LanternConfig::parse_toml(toml).unwrap();
        assert_eq!(config.paths.routes_dir, "web/src/routes");

        std::env::remove_var("LANTERN_TEST_ROUTES");
    }
}
