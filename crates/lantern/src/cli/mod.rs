mod generate;

pub use generate::GenerateCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// lantern - GraphQL route types for SvelteKit
#[derive(Parser)]
#[command(name = "lantern")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate augmented route type files.
    Generate(GenerateCommand),
}

impl Cli {
    /// Execute the CLI command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Generate(cmd) => cmd.execute().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_generate() {
        let cli = Cli::try_parse_from(["lantern", "generate"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_parse_generate_with_flags() {
        let cli = Cli::try_parse_from([
            "lantern",
            "generate",
            "--config",
            "custom.toml",
            "--routes-dir",
            "app/routes",
            "--verbose",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        let cli = Cli::try_parse_from(["lantern"]);
        assert!(cli.is_err());
    }
}
