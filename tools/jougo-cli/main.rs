use clap::Parser;
use jougo::prelude::*;
use std::fs;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// A funnel graph validation CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the funnel JSON file
    funnel_path: String,

    /// Emit issues as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Exit successfully even when error-severity issues are present
    #[arg(long)]
    lenient: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let funnel_json = fs::read_to_string(&cli.funnel_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read funnel file '{}': {}",
            &cli.funnel_path, e
        ))
    });
    let load_duration = load_start.elapsed();

    // --- 2. Parsing and Conversion ---
    let parse_start = Instant::now();
    let ui_funnel = UiFunnel::from_json(&funnel_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse funnel JSON: {}", e)));
    let funnel = ui_funnel
        .into_funnel()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert funnel: {}", e)));
    let parse_duration = parse_start.elapsed();

    // --- 3. Validation ---
    let validate_start = Instant::now();
    let issues = validate(&funnel.nodes, &funnel.edges);
    let validate_duration = validate_start.elapsed();

    // --- 4. Results ---
    if cli.json {
        let json = serde_json::to_string_pretty(&issues)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize issues: {}", e)));
        println!("{}", json);
    } else {
        println!(
            "Validated '{}': {} node(s), {} edge(s)\n",
            cli.funnel_path,
            funnel.nodes.len(),
            funnel.edges.len()
        );
        println!("{}", IssueFormatter::format_report(&issues));

        let total_duration = total_start.elapsed();
        println!("\n--- Performance Summary ---");
        println!("File Loading:  {:?}", load_duration);
        println!("Parsing:       {:?}", parse_duration);
        println!("Validation:    {:?}", validate_duration);
        println!("---------------------------");
        println!("Total:         {:?}", total_duration);
    }

    let has_errors = issues.iter().any(|i| i.severity == Severity::Error);
    if has_errors && !cli.lenient {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
