use serde::{Deserialize, Serialize};

/// Naming conventions for generated type names.
///
/// These were ambient globals in earlier iterations; they are explicit
/// configuration so two projects can generate side by side without
/// clashing conventions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Suffix appended to an operation name to form its store accessor type.
    #[serde(default = "default_store_suffix")]
    pub store_suffix: String,

    /// Suffix appended to a capitalized operation name to form the name of
    /// its load-variables function type.
    #[serde(default = "default_variables_suffix")]
    pub variables_suffix: String,

    /// Module alias the augmented types are published under; references to
    /// the framework's own `$types.js` module are rewritten to this.
    #[serde(default = "default_module_alias")]
    pub module_alias: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            store_suffix: default_store_suffix(),
            variables_suffix: default_variables_suffix(),
            module_alias: default_module_alias(),
        }
    }
}

impl NamingConfig {
    /// Store accessor type name for an operation, e.g. `UserInfo` -> `UserInfoStore`.
    pub fn store_name(&self, operation: &str) -> String {
        format!("{}{}", operation, self.store_suffix)
    }

    /// Variables-function type name for an operation,
    /// e.g. `userInfo` -> `UserInfoVariables`.
    pub fn variable_function_name(&self, operation: &str) -> String {
        format!("{}{}", capitalize(operation), self.variables_suffix)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn default_store_suffix() -> String {
    "Store".to_string()
}

fn default_variables_suffix() -> String {
    "Variables".to_string()
}

fn default_module_alias() -> String {
    "$lantern".to_string()
}
