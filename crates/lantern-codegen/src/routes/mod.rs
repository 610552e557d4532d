//! Route type augmentation.
//!
//! Takes the framework-generated `$types.d.ts` stub of each route and
//! rewrites it with the GraphQL types a load needs: operation result/input
//! imports, store accessors merged into `LayoutData`/`PageData`, and the
//! before/after/error hook signatures the route exports.

mod fragments;
mod stub;

use std::path::{Path, PathBuf};

use lantern_core::config::{Framework, LanternConfig};
use lantern_core::document::{any_has_variables, dedupe_operations};
use lantern_core::error::Result;
use lantern_core::route::{HookFlags, RouteContext};

use fragments::Level;
use stub::StubSections;

/// Generates augmented type files for a set of routes.
///
/// Every route writes only to its own target path and shares no state with
/// other routes, so generation is idempotent and order-independent.
pub struct RouteTypeGenerator<'a> {
    config: &'a LanternConfig,
}

/// Counters reported after a generation run.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenerateSummary {
    /// Routes considered.
    pub routes: usize,
    /// Augmented type files written.
    pub written: usize,
    /// Proxy files copied alongside outputs.
    pub proxies_copied: usize,
}

impl<'a> RouteTypeGenerator<'a> {
    /// Create a generator for the given configuration.
    pub fn new(config: &'a LanternConfig) -> Self {
        Self { config }
    }

    /// Generate type files for all routes. No-op unless the configured
    /// framework is kit.
    pub async fn generate(&self, routes: &[RouteContext]) -> Result<GenerateSummary> {
        if self.config.framework != Framework::Kit {
            tracing::debug!("framework is not kit, skipping route type generation");
            return Ok(GenerateSummary::default());
        }

        let mut summary = GenerateSummary {
            routes: routes.len(),
            ..Default::default()
        };

        for route in routes {
            if let Some(copied) = self.generate_route(route).await? {
                summary.written += 1;
                summary.proxies_copied += copied;
            }
        }

        Ok(summary)
    }

    /// Generate the type file for one route. Returns the number of proxy
    /// files copied, or `None` when the route was skipped.
    async fn generate_route(&self, route: &RouteContext) -> Result<Option<usize>> {
        let stub_text = match tokio::fs::read_to_string(&route.stub_path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(route = %route.relative.display(), "no type stub, skipping");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        if stub_text.trim().is_empty() {
            tracing::debug!(route = %route.relative.display(), "empty type stub, skipping");
            return Ok(None);
        }

        let target = self.config.paths.target_path(&route.relative);
        let target_dir = target
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let relative =
            relative_import_path(&target_dir, Path::new(&self.config.paths.type_root_dir));

        let layout_queries = dedupe_operations(&route.layout_queries);
        let page_queries = dedupe_operations(&route.page_queries);
        let layout_flags = HookFlags::from_exports(&route.layout_exports);
        let page_flags = HookFlags::from_exports(&route.page_exports);

        let mut sections = StubSections::parse(&stub_text, &route.stub_path)?;

        let naming = &self.config.naming;
        let paths = &self.config.paths;

        // Imports: shared hook-function types first, then per-operation
        // artifact and store imports, layout level before page level.
        sections.imports.push_str(&fragments::function_imports(
            &relative,
            layout_flags.variables || page_flags.variables,
            layout_flags.after_load || page_flags.after_load,
            layout_flags.before_load || page_flags.before_load,
        ));
        sections.imports.push_str(&fragments::operation_imports(
            &relative,
            paths,
            naming,
            &layout_queries,
        ));
        sections.imports.push_str(&fragments::operation_imports(
            &relative,
            paths,
            naming,
            &page_queries,
        ));

        // Utility types: params aliases (checked against the pristine
        // section so an existing declaration is never duplicated), then
        // rewrite framework type-module references to our module alias.
        let layout_params = fragments::params_alias(
            Level::Layout,
            !layout_queries.is_empty(),
            &sections.utility,
        );
        let page_params =
            fragments::params_alias(Level::Page, !page_queries.is_empty(), &sections.utility);
        sections.utility.push_str(&layout_params);
        sections.utility.push_str(&page_params);
        sections.utility = sections.utility.replace("$types.js", &naming.module_alias);

        // Exports, fixed order, layout before page.
        sections
            .exports
            .push_str(&fragments::load_input(&layout_queries, &page_queries));
        sections
            .exports
            .push_str(&fragments::before_load(Level::Layout, layout_flags.before_load));
        sections
            .exports
            .push_str(&fragments::before_load(Level::Page, page_flags.before_load));
        sections.exports.push_str(&fragments::after_load(
            Level::Layout,
            layout_flags.after_load,
            &layout_queries,
        ));
        sections.exports.push_str(&fragments::after_load(
            Level::Page,
            page_flags.after_load,
            &page_queries,
        ));
        // The error events reference the file's single LoadInput alias, so
        // the has-variables rule spans both levels of the route.
        let has_load_input =
            any_has_variables(&layout_queries) || any_has_variables(&page_queries);
        sections.exports.push_str(&fragments::on_error(
            Level::Layout,
            layout_flags.on_error,
            has_load_input,
        ));
        sections.exports.push_str(&fragments::on_error(
            Level::Page,
            page_flags.on_error,
            has_load_input,
        ));
        sections.exports.push_str(&fragments::variable_functions(
            Level::Layout,
            naming,
            &layout_queries,
        ));
        sections.exports.push_str(&fragments::variable_functions(
            Level::Page,
            naming,
            &page_queries,
        ));
        sections.exports = fragments::patch_data_alias(
            &sections.exports,
            Level::Layout,
            &layout_queries,
            &layout_flags,
            naming,
        );
        sections.exports = fragments::patch_data_alias(
            &sections.exports,
            Level::Page,
            &page_queries,
            &page_flags,
            naming,
        );

        tokio::fs::create_dir_all(&target_dir).await?;
        tokio::fs::write(&target, sections.render()).await?;
        tracing::debug!(target = %target.display(), "wrote route types");

        let copied = if sections.exports.contains("proxy") {
            self.copy_proxy_files(&route.stub_path, &target_dir).await?
        } else {
            0
        };

        Ok(Some(copied))
    }

    /// Copy every sibling of the stub whose file name contains "proxy" next
    /// to the generated output.
    async fn copy_proxy_files(&self, stub_path: &Path, target_dir: &Path) -> Result<usize> {
        let Some(stub_dir) = stub_path.parent() else {
            return Ok(0);
        };

        let mut copied = 0;
        let mut entries = tokio::fs::read_dir(stub_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            if name.to_string_lossy().contains("proxy") {
                tokio::fs::copy(entry.path(), target_dir.join(&name)).await?;
                copied += 1;
            }
        }

        Ok(copied)
    }
}

/// Relative import path from one directory to another, with forward slashes
/// regardless of platform.
fn relative_import_path(from: &Path, to: &Path) -> String {
    let from: Vec<_> = from.components().collect();
    let to: Vec<_> = to.components().collect();

    let mut shared = 0;
    while shared < from.len() && shared < to.len() && from[shared] == to[shared] {
        shared += 1;
    }

    let mut parts: Vec<String> = from[shared..].iter().map(|_| "..".to_string()).collect();
    parts.extend(
        to[shared..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
