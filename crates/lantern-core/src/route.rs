//! Per-route input to the generator.

use std::path::PathBuf;

use crate::document::OperationDefinition;

/// Everything the generator needs to know about a single route directory.
///
/// Built once by the walker, consumed once by the generator, then discarded.
/// Routes share no state, so they can be processed in any order.
#[derive(Debug, Clone)]
pub struct RouteContext {
    /// Route directory inside the routes tree.
    pub dir: PathBuf,

    /// Route directory relative to the routes root.
    pub relative: PathBuf,

    /// Path to the framework-generated type stub for this route.
    pub stub_path: PathBuf,

    /// Operations attached to the layout level.
    pub layout_queries: Vec<OperationDefinition>,

    /// Operations attached to the page level.
    pub page_queries: Vec<OperationDefinition>,

    /// Names exported from the layout module.
    pub layout_exports: Vec<String>,

    /// Names exported from the page module.
    pub page_exports: Vec<String>,
}

impl RouteContext {
    /// Whether the route carries anything worth generating for.
    pub fn is_empty(&self) -> bool {
        self.layout_queries.is_empty()
            && self.page_queries.is_empty()
            && self.layout_exports.is_empty()
            && self.page_exports.is_empty()
    }
}

/// Hook presence flags for one route level, derived from its export names.
///
/// No generated fragment is ever emitted for an absent hook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HookFlags {
    pub before_load: bool,
    pub after_load: bool,
    pub on_error: bool,
    pub variables: bool,
}

impl HookFlags {
    /// Derive flags by membership tests over an export-name list.
    pub fn from_exports(exports: &[String]) -> Self {
        Self {
            before_load: exports.iter().any(|e| e == "beforeLoad"),
            after_load: exports.iter().any(|e| e == "afterLoad"),
            on_error: exports.iter().any(|e| e == "onError"),
            variables: exports.iter().any(|e| e.ends_with("Variables")),
        }
    }

    /// Whether any load hook (before/after) or variables function is present.
    pub fn any_load_hook(&self) -> bool {
        self.before_load || self.after_load || self.variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exports(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_hook_flags_from_exports() {
        let flags = HookFlags::from_exports(&exports(&["afterLoad", "UserInfoVariables"]));
        assert!(flags.after_load);
        assert!(flags.variables);
        assert!(!flags.before_load);
        assert!(!flags.on_error);
    }

    #[test]
    fn test_hook_flags_exact_names() {
        // "beforeLoadSomething" is not the beforeLoad hook
        let flags = HookFlags::from_exports(&exports(&["beforeLoadSomething", "load"]));
        assert!(!flags.before_load);
        assert!(!flags.any_load_hook());
    }

    #[test]
    fn test_variables_suffix_match() {
        let flags = HookFlags::from_exports(&exports(&["FeedVariables"]));
        assert!(flags.variables);
        assert!(flags.any_load_hook());
    }
}
