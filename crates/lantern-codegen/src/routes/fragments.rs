//! Text fragment builders.
//!
//! Each function builds one independent fragment of the augmented stub from
//! the route's operations and hook flags. Fragments for an absent hook are
//! empty strings, so callers can concatenate unconditionally.

use lantern_core::config::{NamingConfig, PathsConfig};
use lantern_core::document::{any_has_variables, OperationDefinition};
use lantern_core::route::HookFlags;

/// The two nested data-loading scopes of a route. Layouts wrap pages, and
/// layout fragments are always emitted before page fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    Layout,
    Page,
}

impl Level {
    fn module(&self) -> &'static str {
        match self {
            Level::Layout => "+layout",
            Level::Page => "+page",
        }
    }

    fn load_event(&self) -> &'static str {
        match self {
            Level::Layout => "LayoutLoadEvent",
            Level::Page => "PageLoadEvent",
        }
    }

    fn params(&self) -> &'static str {
        match self {
            Level::Layout => "LayoutParams",
            Level::Page => "PageParams",
        }
    }

    fn data_marker(&self) -> &'static str {
        match self {
            Level::Layout => "LayoutData = ",
            Level::Page => "PageData = ",
        }
    }
}

/// Shared hook-function type import, emitted once per file iff any level
/// needs at least one of the imported types.
pub(crate) fn function_imports(
    relative: &str,
    variables: bool,
    after_load: bool,
    before_load: bool,
) -> String {
    let mut names = Vec::new();
    if variables {
        names.push("VariableFunction");
    }
    if after_load {
        names.push("AfterLoadFunction");
    }
    if before_load {
        names.push("BeforeLoadFunction");
    }

    if names.is_empty() {
        return String::new();
    }

    format!(
        "\nimport type {{ {} }} from '{}/runtime/types';",
        names.join(", "),
        relative
    )
}

/// Per-operation imports of the result/input artifact types and the store
/// accessor type.
pub(crate) fn operation_imports(
    relative: &str,
    paths: &PathsConfig,
    naming: &NamingConfig,
    operations: &[OperationDefinition],
) -> String {
    let mut out = String::new();
    for op in operations {
        out.push_str(&format!(
            "\nimport {{ {name}$result, {name}$input }} from '{rel}/{artifacts}/{name}';\nimport {{ {store} }} from '{rel}/{stores}/{name}';",
            name = op.name,
            rel = relative,
            artifacts = paths.artifact_dir,
            stores = paths.stores_dir,
            store = naming.store_name(&op.name),
        ));
    }
    out
}

/// `LayoutParams`/`PageParams` alias, unless the utility section already
/// declares it or the level has no queries.
pub(crate) fn params_alias(level: Level, has_queries: bool, utility: &str) -> String {
    if !has_queries || utility.contains(level.params()) {
        return String::new();
    }

    format!(
        "\ntype {} = {}['params'];",
        level.params(),
        level.load_event()
    )
}

/// Single `LoadInput` alias mapping each variable-declaring operation to its
/// input type. Omitted entirely when no operation declares variables.
/// Layout entries come first; duplicate names keep their first occurrence.
pub(crate) fn load_input(
    layout_queries: &[OperationDefinition],
    page_queries: &[OperationDefinition],
) -> String {
    let mut seen: Vec<&str> = Vec::new();
    let mut entries = Vec::new();

    for op in layout_queries.iter().chain(page_queries) {
        if !op.has_variables() || seen.contains(&op.name.as_str()) {
            continue;
        }
        seen.push(&op.name);
        entries.push(format!("{name}: {name}$input", name = op.name));
    }

    if entries.is_empty() {
        return String::new();
    }

    format!("\ntype LoadInput = {{ {} }};", entries.join("; "))
}

/// Before-load event and return aliases for one level.
pub(crate) fn before_load(level: Level, enabled: bool) -> String {
    if !enabled {
        return String::new();
    }

    format!(
        "\nexport type BeforeLoadEvent = {event};\ntype BeforeLoadReturn = ReturnType<typeof import('./{module}').beforeLoad>;\n",
        event = level.load_event(),
        module = level.module(),
    )
}

/// After-load event, data, and return aliases for one level. `input` is
/// `LoadInput` iff the level has a variable-declaring operation.
pub(crate) fn after_load(
    level: Level,
    enabled: bool,
    queries: &[OperationDefinition],
) -> String {
    if !enabled {
        return String::new();
    }

    let data_entries = queries
        .iter()
        .map(|op| format!("{name}: {name}$result", name = op.name))
        .collect::<Vec<_>>()
        .join(";\n\t");

    format!(
        "\ntype AfterLoadReturn = ReturnType<typeof import('./{module}').afterLoad>;\ntype AfterLoadData = {{\n\t{data}\n}};\n\nexport type AfterLoadEvent = {{\n\tevent: {event}\n\tdata: AfterLoadData\n\tinput: {input}\n}};\n",
        module = level.module(),
        data = data_entries,
        event = level.load_event(),
        input = load_input_ref(queries),
    )
}

/// Error-hook event and return aliases for one level. `has_input` reflects
/// whether any operation in the whole route declares variables; the error
/// event references the file's single `LoadInput` alias, so both levels
/// share the route-wide rule.
pub(crate) fn on_error(level: Level, enabled: bool, has_input: bool) -> String {
    if !enabled {
        return String::new();
    }

    let input = if has_input { "LoadInput" } else { "{}" };

    format!(
        "\ntype OnErrorReturn = ReturnType<typeof import('./{module}').onError>;\nexport type OnErrorEvent = {{ event: Kit.LoadEvent, input: {input}, error: Error | Error[] }};\n",
        module = level.module(),
        input = input,
    )
}

/// Per-operation variables-function alias, for operations that declare
/// variables.
pub(crate) fn variable_functions(
    level: Level,
    naming: &NamingConfig,
    operations: &[OperationDefinition],
) -> String {
    let mut out = String::new();
    for op in operations {
        if !op.has_variables() {
            continue;
        }
        out.push_str(&format!(
            "\nexport type {alias} = VariableFunction<{params}, {name}$input>;",
            alias = naming.variable_function_name(&op.name),
            params = level.params(),
            name = op.name,
        ));
    }
    out
}

/// Wrap the existing `LayoutData`/`PageData` alias body in an intersection
/// that adds the store accessor map and the hook return types, in the order
/// before / after / error. Left untouched when the level has nothing to add
/// or the marker is absent.
pub(crate) fn patch_data_alias(
    exports: &str,
    level: Level,
    queries: &[OperationDefinition],
    flags: &HookFlags,
    naming: &NamingConfig,
) -> String {
    let adds_hooks = flags.before_load || flags.after_load || flags.on_error;
    if queries.is_empty() && !adds_hooks {
        return exports.to_string();
    }

    let marker = level.data_marker();
    let Some(start) = exports.find(marker) else {
        return exports.to_string();
    };
    let body_start = start + marker.len();
    let Some(body_len) = exports[body_start..].find(';') else {
        return exports.to_string();
    };
    let body = &exports[body_start..body_start + body_len];

    let mut parts = vec![body.to_string()];
    if !queries.is_empty() {
        let map = queries
            .iter()
            .map(|op| format!("{}: {}", op.name, naming.store_name(&op.name)))
            .collect::<Vec<_>>()
            .join("; ");
        parts.push(format!("{{ {} }}", map));
    }
    if flags.before_load {
        parts.push("BeforeLoadReturn".to_string());
    }
    if flags.after_load {
        parts.push("AfterLoadReturn".to_string());
    }
    if flags.on_error {
        parts.push("OnErrorReturn".to_string());
    }

    format!(
        "{}Expand<{}>{}",
        &exports[..body_start],
        parts.join(" & "),
        &exports[body_start + body_len..]
    )
}

/// `LoadInput` when the operation list has variables, the empty object type
/// otherwise.
fn load_input_ref(queries: &[OperationDefinition]) -> &'static str {
    if any_has_variables(queries) {
        "LoadInput"
    } else {
        "{}"
    }
}
