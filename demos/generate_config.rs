//! Generate the default analysis configuration file
//!
//! Creates a JSON config with all default parameters

use season_scan::AnalysisConfig;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} config/season.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = AnalysisConfig::default();

    match config.to_json_file(output_path) {
        Ok(_) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!("  White balance: {}", if config.white_balance.enabled { "on" } else { "off" });
            eprintln!("  Drape border: {:.0}% of width, fallback {}",
                     config.drape.border_fraction * 100.0,
                     config.drape.default_color);
            eprintln!("  Report output: {}", config.report.output_dir.display());
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
