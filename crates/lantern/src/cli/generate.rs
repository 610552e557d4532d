use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use lantern_codegen::{RouteTypeGenerator, RouteWalker};
use lantern_core::LanternConfig;

/// Generate augmented route type files.
#[derive(Parser)]
pub struct GenerateCommand {
    /// Configuration file path.
    #[arg(short, long, default_value = "lantern.toml")]
    pub config: String,

    /// Routes directory (overrides config).
    #[arg(long)]
    pub routes_dir: Option<String>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateCommand {
    /// Execute the generate command.
    pub async fn execute(self) -> Result<()> {
        // Initialize tracing
        let log_level = if self.verbose { "debug" } else { "warn" };
        tracing_subscriber::fmt()
            .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()))
            .init();

        // Load configuration, falling back to defaults when no file exists
        let config_path = Path::new(&self.config);
        let mut config = if config_path.exists() {
            info!("Loading configuration from {}", self.config);
            LanternConfig::from_file(config_path)?
        } else {
            LanternConfig::default()
        };

        if let Some(routes_dir) = self.routes_dir {
            config.paths.routes_dir = routes_dir;
        }

        let pb = ProgressBar::new(2);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));

        pb.set_message("Scanning routes...");
        let routes = RouteWalker::new(&config).collect()?;
        pb.inc(1);

        pb.set_message("Generating route types...");
        let generator = RouteTypeGenerator::new(&config);
        let summary = generator.generate(&routes).await?;
        pb.inc(1);

        pb.finish_and_clear();

        println!();
        println!(
            "  {} Scanned {} routes",
            style("✓").green(),
            style(summary.routes).cyan()
        );
        println!(
            "  {} Wrote {} type files",
            style("✓").green(),
            style(summary.written).cyan()
        );
        if summary.proxies_copied > 0 {
            println!(
                "  {} Copied {} proxy files",
                style("✓").green(),
                style(summary.proxies_copied).cyan()
            );
        }
        println!(
            "  {} Output: {}",
            style("📁").dim(),
            style(&config.paths.route_types_dir).cyan()
        );
        println!();

        Ok(())
    }
}
