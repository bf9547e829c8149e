//! Example demonstrating the configuration system
//!
//! Run with: cargo run --example config_demo

use revision_diff::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== revision-diff Configuration Demo ===\n");

    // Load or create default config
    let config = Config::load()?;

    println!("Current settings:");
    println!("  Context lines: {}", config.settings.context_lines);
    println!("  Max table cells: {}", config.settings.max_table_cells);

    println!("\nRevision store: {}", config.data_dir().display());
    println!("Config file: {}", Config::config_path()?.display());

    Ok(())
}
