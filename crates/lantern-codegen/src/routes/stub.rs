//! Host stub sectioning.
//!
//! The framework writes each route stub as three blank-line separated
//! sections: imports, utility types, exports. The split is a positional
//! contract with the framework generator, so a stub that does not have
//! exactly three sections is rejected instead of sliced blindly.

use std::path::Path;

use lantern_core::error::{LanternError, Result};

/// The three ordered sections of a route type stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubSections {
    pub imports: String,
    pub utility: String,
    pub exports: String,
}

impl StubSections {
    /// Split a stub into its sections. Errors unless the blank-line split
    /// yields exactly three parts.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let parts: Vec<&str> = text.split("\n\n").collect();
        if parts.len() != 3 {
            return Err(LanternError::MalformedStub {
                path: path.to_path_buf(),
                sections: parts.len(),
            });
        }

        Ok(Self {
            imports: parts[0].to_string(),
            utility: parts[1].to_string(),
            exports: parts[2].to_string(),
        })
    }

    /// Reassemble the sections into file content.
    pub fn render(&self) -> String {
        [
            self.imports.as_str(),
            self.utility.as_str(),
            self.exports.as_str(),
        ]
        .join("\n\n")
    }
}
