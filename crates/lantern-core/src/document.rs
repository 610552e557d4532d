//! Lightweight model of the GraphQL operations attached to a route.
//!
//! Operations are lowered out of the parsed GraphQL AST into this form so the
//! generator only carries what it needs: the operation name and the declared
//! variables.

/// A named GraphQL operation (query) attached to a route level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDefinition {
    /// Operation name. Anonymous operations are rejected at parse time.
    pub name: String,

    /// Declared variables, in declaration order.
    pub variables: Vec<VariableDefinition>,
}

impl OperationDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
        }
    }

    /// Whether the operation declares at least one variable.
    pub fn has_variables(&self) -> bool {
        !self.variables.is_empty()
    }
}

/// A single variable declaration on an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDefinition {
    /// Variable name without the leading `$`.
    pub name: String,

    /// GraphQL type as written, e.g. `ID!` or `[String]`.
    pub ty: String,
}

/// Deduplicate operations by name, keeping the first occurrence of each name
/// and preserving order.
pub fn dedupe_operations(operations: &[OperationDefinition]) -> Vec<OperationDefinition> {
    let mut seen: Vec<&str> = Vec::new();
    let mut unique = Vec::new();

    for op in operations {
        if !seen.contains(&op.name.as_str()) {
            seen.push(&op.name);
            unique.push(op.clone());
        }
    }

    unique
}

/// Whether any operation in the list declares variables.
pub fn any_has_variables(operations: &[OperationDefinition]) -> bool {
    operations.iter().any(|op| op.has_variables())
}
