use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory layout configuration.
///
/// All paths are relative to the project root the CLI runs in. The generated
/// route types mirror the route tree: a route at `src/routes/user/[id]`
/// produces `$lantern/types/src/routes/user/[id]/$types.d.ts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Application route tree.
    #[serde(default = "default_routes_dir")]
    pub routes_dir: String,

    /// Root of the framework-generated type stubs, mirroring the route tree.
    #[serde(default = "default_framework_types_dir")]
    pub framework_types_dir: String,

    /// Root of the generated per-route type files.
    #[serde(default = "default_route_types_dir")]
    pub route_types_dir: String,

    /// Shared generated-types root that relative imports resolve against.
    #[serde(default = "default_type_root_dir")]
    pub type_root_dir: String,

    /// File name of the per-route type stub.
    #[serde(default = "default_stub_file_name")]
    pub stub_file_name: String,

    /// Directory (under the type root) holding operation artifacts.
    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: String,

    /// Directory (under the type root) holding generated store files.
    #[serde(default = "default_stores_dir")]
    pub stores_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            routes_dir: default_routes_dir(),
            framework_types_dir: default_framework_types_dir(),
            route_types_dir: default_route_types_dir(),
            type_root_dir: default_type_root_dir(),
            stub_file_name: default_stub_file_name(),
            artifact_dir: default_artifact_dir(),
            stores_dir: default_stores_dir(),
        }
    }
}

impl PathsConfig {
    /// Stub file path for a route, given its path relative to the routes dir.
    pub fn stub_path(&self, route_relative: &Path) -> PathBuf {
        Path::new(&self.framework_types_dir)
            .join(route_relative)
            .join(&self.stub_file_name)
    }

    /// Output file path for a route, given its path relative to the routes dir.
    pub fn target_path(&self, route_relative: &Path) -> PathBuf {
        Path::new(&self.route_types_dir)
            .join(route_relative)
            .join(&self.stub_file_name)
    }
}

fn default_routes_dir() -> String {
    "src/routes".to_string()
}

fn default_framework_types_dir() -> String {
    ".svelte-kit/types/src/routes".to_string()
}

fn default_route_types_dir() -> String {
    "$lantern/types/src/routes".to_string()
}

fn default_type_root_dir() -> String {
    "$lantern".to_string()
}

fn default_stub_file_name() -> String {
    "$types.d.ts".to_string()
}

fn default_artifact_dir() -> String {
    "artifacts".to_string()
}

fn default_stores_dir() -> String {
    "stores".to_string()
}
