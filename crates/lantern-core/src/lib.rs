pub mod config;
pub mod document;
pub mod error;
pub mod route;

pub use config::{Framework, LanternConfig, NamingConfig, PathsConfig};
pub use document::{dedupe_operations, OperationDefinition, VariableDefinition};
pub use error::{LanternError, Result};
pub use route::{HookFlags, RouteContext};
