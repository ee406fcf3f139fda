//! Command-line interface for season_scan
//!
//! Analyzes a portrait with precomputed face landmarks and writes the
//! report and a drape preview.

use season_scan::{
    AnalysisConfig, DirectoryPresenter, DrapeSelection, FaceLandmarks, SeasonAnalysis,
    SeasonAnalyzer, StaticLandmarks,
};
use std::{env, path::{Path, PathBuf}, process};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut drape_color = None;
    let mut config_path = None;
    let mut output_dir = None;
    let mut positional = Vec::new();

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--drape" | "--config" | "--out" => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("Error: {} requires a value", args[i]);
                    process::exit(1);
                };
                match args[i].as_str() {
                    "--drape" => drape_color = Some(value.clone()),
                    "--config" => config_path = Some(PathBuf::from(value)),
                    _ => output_dir = Some(PathBuf::from(value)),
                }
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => positional.push(arg.to_string()),
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let [image_path, landmarks_path] = positional.as_slice() else {
        print_help(&args[0]);
        process::exit(1);
    };

    let config = match config_path {
        Some(path) => AnalysisConfig::from_json_file(&path).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }),
        None => AnalysisConfig::default(),
    };

    let landmarks = FaceLandmarks::from_json_file(Path::new(landmarks_path)).unwrap_or_else(|e| {
        eprintln!("Error loading landmarks: {}", e);
        process::exit(1);
    });

    let analyzer = SeasonAnalyzer::with_config(StaticLandmarks::new(landmarks), &config)
        .unwrap_or_else(|e| {
            eprintln!("Invalid configuration: {}", e);
            process::exit(1);
        });

    let analysis = match analyzer.analyze_path(Path::new(image_path)) {
        Ok(analysis) => analysis,
        Err(error) => {
            eprintln!("Analysis failed: {}", error);
            eprintln!("{}", error.user_message());
            process::exit(1);
        }
    };

    let mut selection = DrapeSelection::new();
    if let Some(color) = drape_color {
        if let Err(error) = selection.select(&color) {
            eprintln!("Warning: {}", error.user_message());
        }
    }

    let output_dir = output_dir.unwrap_or_else(|| config.report.output_dir.clone());
    let mut presenter = DirectoryPresenter::new(output_dir);
    if let Some(format) = analysis.format {
        presenter = presenter.with_format(format);
    }
    if let Err(error) = analysis.present(&mut presenter, &selection) {
        eprintln!("Failed to write report: {}", error);
        process::exit(1);
    }

    print_result(&analysis, &selection);
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path> <landmarks.json>", program_name);
    eprintln!();
    eprintln!("Classify the color season of a portrait and render a drape preview.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --drape <#RRGGBB>   Swatch color for the preview (default: white)");
    eprintln!("  --config <FILE>     JSON configuration (see generate_config)");
    eprintln!("  --out <DIR>         Output directory for report.json and preview");
    eprintln!("  --help, -h          Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} portrait.jpg landmarks.json", program_name);
    eprintln!("  {} --drape \"#800020\" --out report/ portrait.png landmarks.json", program_name);
}

fn print_result(analysis: &SeasonAnalysis, selection: &DrapeSelection) {
    // JSON to stdout for programmatic use
    match analysis.report().to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }

    // Summary to stderr for human reading
    eprintln!();
    eprintln!("Season Analysis Summary:");
    eprintln!("  Season: {}", analysis.season);
    let lab = analysis.skin_tone().lab();
    eprintln!("  Sampled Skin: {}", analysis.skin_tone().hex());
    eprintln!("  Skin Lab: L={:.2}, a={:.2}, b={:.2}", lab.l, lab.a, lab.b);
    eprintln!("  Best: {}", analysis.best().join(" "));
    eprintln!("  Avoid: {}", analysis.avoid().join(" "));
    eprintln!("  Drape: {}", selection.color());

    if analysis.skin.used_fallback {
        eprintln!("  Warning: face outline was degenerate; the whole image was sampled.");
    }
}
