//! Code generation for lantern.
//!
//! Discovers routes in a SvelteKit project, introspects their GraphQL
//! operations and hook exports, and augments the framework-generated type
//! stubs with the types a GraphQL load needs.

pub mod parser;
pub mod routes;
pub mod walker;

pub use routes::{GenerateSummary, RouteTypeGenerator};
pub use walker::RouteWalker;
