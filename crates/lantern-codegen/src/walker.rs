//! Route discovery.
//!
//! Walks the routes directory and builds one [`RouteContext`] per route
//! directory that carries GraphQL operations or hook exports. Routes are
//! independent of each other; the collected list can be processed in any
//! order.

use std::path::Path;

use walkdir::WalkDir;

use lantern_core::config::LanternConfig;
use lantern_core::document::OperationDefinition;
use lantern_core::error::{LanternError, Result};
use lantern_core::route::RouteContext;

use crate::parser::{parse_operations, scan_exports};

/// Candidate module file names for each route level.
const LAYOUT_MODULES: [&str; 2] = ["+layout.ts", "+layout.js"];
const PAGE_MODULES: [&str; 2] = ["+page.ts", "+page.js"];

/// Walks a project's route tree and collects generator inputs.
pub struct RouteWalker<'a> {
    config: &'a LanternConfig,
}

impl<'a> RouteWalker<'a> {
    /// Create a walker over the configured routes directory.
    pub fn new(config: &'a LanternConfig) -> Self {
        Self { config }
    }

    /// Collect a route context for every route directory worth generating
    /// for. Directories with neither queries nor module exports are skipped.
    pub fn collect(&self) -> Result<Vec<RouteContext>> {
        let routes_dir = Path::new(&self.config.paths.routes_dir);
        if !routes_dir.exists() {
            return Err(LanternError::Config(format!(
                "routes directory not found: {}",
                routes_dir.display()
            )));
        }

        let mut routes = Vec::new();

        for entry in WalkDir::new(routes_dir) {
            let entry = entry.map_err(|e| LanternError::Io(e.into()))?;
            if !entry.file_type().is_dir() {
                continue;
            }

            let dir = entry.path();
            let relative = dir
                .strip_prefix(routes_dir)
                .map_err(|e| LanternError::Internal(e.to_string()))?
                .to_path_buf();

            let route = RouteContext {
                dir: dir.to_path_buf(),
                stub_path: self.config.paths.stub_path(&relative),
                layout_queries: self.read_operations(dir, "+layout.gql")?,
                page_queries: self.read_operations(dir, "+page.gql")?,
                layout_exports: self.read_exports(dir, &LAYOUT_MODULES)?,
                page_exports: self.read_exports(dir, &PAGE_MODULES)?,
                relative,
            };

            if route.is_empty() {
                continue;
            }

            tracing::debug!(
                route = %route.relative.display(),
                dir = %route.dir.display(),
                layout_queries = route.layout_queries.len(),
                page_queries = route.page_queries.len(),
                "discovered route"
            );
            routes.push(route);
        }

        Ok(routes)
    }

    /// Parse the operations of a route-level GraphQL file, if present.
    fn read_operations(&self, dir: &Path, file_name: &str) -> Result<Vec<OperationDefinition>> {
        let path = dir.join(file_name);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let source = std::fs::read_to_string(&path)?;
        parse_operations(&source, &path)
    }

    /// Scan the first existing module file of a route level for exports.
    fn read_exports(&self, dir: &Path, candidates: &[&str]) -> Result<Vec<String>> {
        for file_name in candidates {
            let path = dir.join(file_name);
            if path.exists() {
                let source = std::fs::read_to_string(&path)?;
                return Ok(scan_exports(&source));
            }
        }

        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_for(root: &Path) -> LanternConfig {
        let mut config = LanternConfig::default();
        config.paths.routes_dir = root.join("src/routes").display().to_string();
        config.paths.framework_types_dir = root
            .join(".svelte-kit/types/src/routes")
            .display()
            .to_string();
        config
    }

    #[test]
    fn test_collect_discovers_queries_and_exports() {
        let tmp = tempfile::tempdir().unwrap();
        let route_dir = tmp.path().join("src/routes/user");
        fs::create_dir_all(&route_dir).unwrap();

        fs::write(
            route_dir.join("+page.gql"),
            "query UserInfo($id: ID!) { user(id: $id) { name } }",
        )
        .unwrap();
        fs::write(
            route_dir.join("+page.ts"),
            "export function afterLoad() {}\nexport const UserInfoVariables = () => ({});",
        )
        .unwrap();

        let config = config_for(tmp.path());
        let routes = RouteWalker::new(&config).collect().unwrap();

        assert_eq!(routes.len(), 1);
        let route = &routes[0];
        assert_eq!(route.relative, Path::new("user"));
        assert_eq!(route.dir, tmp.path().join("src/routes/user"));
        assert_eq!(route.page_queries.len(), 1);
        assert_eq!(route.page_queries[0].name, "UserInfo");
        assert_eq!(route.page_exports, vec!["afterLoad", "UserInfoVariables"]);
        assert!(route.layout_queries.is_empty());
        assert!(route
            .stub_path
            .ends_with(".svelte-kit/types/src/routes/user/$types.d.ts"));
    }

    #[test]
    fn test_collect_skips_empty_directories() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("src/routes/empty/nested")).unwrap();

        let config = config_for(tmp.path());
        let routes = RouteWalker::new(&config).collect().unwrap();
        assert!(routes.is_empty());
    }

    #[test]
    fn test_collect_prefers_ts_module_over_js() {
        let tmp = tempfile::tempdir().unwrap();
        let route_dir = tmp.path().join("src/routes");
        fs::create_dir_all(&route_dir).unwrap();

        fs::write(route_dir.join("+layout.ts"), "export function beforeLoad() {}").unwrap();
        fs::write(route_dir.join("+layout.js"), "export function onError() {}").unwrap();

        let config = config_for(tmp.path());
        let routes = RouteWalker::new(&config).collect().unwrap();

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].layout_exports, vec!["beforeLoad"]);
    }

    #[test]
    #[cfg(unix)]
    fn test_unreadable_directory_propagates_error() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let locked = tmp.path().join("src/routes/locked");
        fs::create_dir_all(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits don't restrict root; nothing to assert then.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let config = config_for(tmp.path());
        let err = RouteWalker::new(&config).collect().unwrap_err();
        assert!(matches!(err, LanternError::Io(_)));

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_missing_routes_dir_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = LanternConfig::default();
        config.paths.routes_dir = tmp.path().join("nope").display().to_string();

        let err = RouteWalker::new(&config).collect().unwrap_err();
        assert!(matches!(err, LanternError::Config(_)));
    }
}
