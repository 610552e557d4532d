//! Source introspection for route files.
//!
//! This module extracts the two inputs the generator needs from a route
//! directory: the GraphQL operations defined in `+page.gql`/`+layout.gql`,
//! and the names exported from `+page.ts`/`+layout.ts` (hooks and variables
//! functions). Module exports are scanned textually; the generator only
//! cares about names, not bodies.

use std::path::Path;

use async_graphql_parser::parse_query;
use async_graphql_parser::types::{DocumentOperations, OperationType};

use lantern_core::document::{OperationDefinition, VariableDefinition};
use lantern_core::error::{LanternError, Result};

/// Parse the query operations out of a GraphQL document.
///
/// Anonymous operations are rejected: the generated type names are derived
/// from the operation name, so there is nothing sensible to emit for an
/// unnamed one. Non-query operations (mutations, subscriptions) are ignored.
pub fn parse_operations(source: &str, path: &Path) -> Result<Vec<OperationDefinition>> {
    let document = parse_query(source).map_err(|e| LanternError::Graphql {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut operations = Vec::new();

    match &document.operations {
        DocumentOperations::Single(_) => {
            return Err(LanternError::AnonymousOperation {
                path: path.to_path_buf(),
            });
        }
        DocumentOperations::Multiple(named) => {
            // Named operations come back as a HashMap with arbitrary
            // iteration order; restore source order so generated output is
            // stable across runs.
            let mut ordered: Vec<_> = named.iter().collect();
            ordered.sort_by_key(|(_, operation)| (operation.pos.line, operation.pos.column));

            for (name, operation) in ordered {
                if operation.node.ty != OperationType::Query {
                    tracing::debug!(operation = %name, "skipping non-query operation");
                    continue;
                }

                let variables = operation
                    .node
                    .variable_definitions
                    .iter()
                    .map(|var| VariableDefinition {
                        name: var.node.name.node.to_string(),
                        ty: var.node.var_type.node.to_string(),
                    })
                    .collect();

                tracing::debug!(operation = %name, variables = ?variables, "parsed operation");
                operations.push(OperationDefinition {
                    name: name.to_string(),
                    variables,
                });
            }
        }
    }

    Ok(operations)
}

/// Scan a JS/TS module for its exported names.
///
/// Textual scan over `export [async] function|const|let|var <name>`
/// declarations. Re-exports and `export { ... }` lists are not load hooks in
/// practice, so they are not considered.
pub fn scan_exports(source: &str) -> Vec<String> {
    let re = regex_lite::Regex::new(
        r"(?m)^\s*export\s+(?:async\s+)?(?:function|const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)",
    )
    .unwrap();

    re.captures_iter(source)
        .map(|cap| cap[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_query_with_variables() {
        let source = r#"
            query UserInfo($id: ID!, $limit: Int) {
                user(id: $id) { name }
            }
        "#;

        let ops = parse_operations(source, Path::new("+page.gql")).unwrap();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].name, "UserInfo");
        assert_eq!(ops[0].variables.len(), 2);
        assert_eq!(ops[0].variables[0].name, "id");
        assert_eq!(ops[0].variables[0].ty, "ID!");
        assert!(ops[0].has_variables());
    }

    #[test]
    fn test_parse_query_without_variables() {
        let source = "query Feed { posts { id } }";

        let ops = parse_operations(source, Path::new("+page.gql")).unwrap();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].name, "Feed");
        assert!(!ops[0].has_variables());
    }

    #[test]
    fn test_operations_preserve_source_order() {
        let source = r#"
            query Zebra { a }
            query Alpha { b }
            query Mango($id: ID!) { c(id: $id) }
            query Kiwi { d }
            query Echo { e }
            query Tango { f }
            query Lima { g }
            query Quart { h }
        "#;

        let ops = parse_operations(source, Path::new("+page.gql")).unwrap();
        let names: Vec<_> = ops.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Zebra", "Alpha", "Mango", "Kiwi", "Echo", "Tango", "Lima", "Quart"]
        );

        // same input, same order
        let again = parse_operations(source, Path::new("+page.gql")).unwrap();
        assert_eq!(ops, again);
    }

    #[test]
    fn test_anonymous_operation_is_rejected() {
        let source = "{ user { name } }";

        let err = parse_operations(source, Path::new("+page.gql")).unwrap_err();
        assert!(matches!(err, LanternError::AnonymousOperation { .. }));
    }

    #[test]
    fn test_mutations_are_skipped() {
        let source = r#"
            query Feed { posts { id } }
            mutation AddPost($title: String!) { addPost(title: $title) { id } }
        "#;

        let ops = parse_operations(source, Path::new("+page.gql")).unwrap();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].name, "Feed");
    }

    #[test]
    fn test_invalid_document_is_an_error() {
        let err = parse_operations("query {", Path::new("+page.gql")).unwrap_err();
        assert!(matches!(err, LanternError::Graphql { .. }));
    }

    #[test]
    fn test_scan_exports() {
        let source = r#"
            import { something } from './somewhere';

            export async function afterLoad() {}
            export function onError() {}
            export const UserInfoVariables = () => ({});
            const internal = 1;
        "#;

        let exports = scan_exports(source);
        assert_eq!(exports, vec!["afterLoad", "onError", "UserInfoVariables"]);
    }

    #[test]
    fn test_scan_exports_empty_module() {
        assert!(scan_exports("const a = 1;").is_empty());
    }
}
