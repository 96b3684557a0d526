use clap::Parser;
use jougo::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate random funnel files for testing the validator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_funnel.json")]
    output: String,

    /// The number of pages to place on the canvas
    #[arg(long, default_value_t = 8)]
    pages: usize,

    /// The number of connection attempts to make between random pages
    #[arg(long, default_value_t = 12)]
    connections: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.pages == 0 {
        eprintln!("Error: --pages must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating a funnel with {} page(s) and up to {} connection(s)...",
        cli.pages, cli.connections
    );

    // Building through the real store keeps every generated file consistent
    // with the connection legality rules.
    let mut store = FunnelStore::new();
    populate_pages(&mut store, &mut rng, cli.pages);
    let accepted = wire_random_connections(&mut store, &mut rng, cli.connections);
    println!(
        "-> Accepted {} of {} connection attempt(s).",
        accepted, cli.connections
    );

    let issues = store.validate();
    println!("-> Generated funnel has {} validation issue(s).", issues.len());

    let ui_funnel = UiFunnel::from(store.funnel());
    let json_output = ui_funnel.to_json_pretty()?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved funnel to '{}'",
        cli.output
    );

    Ok(())
}

/// Places pages on a loose grid. The first page is always a sales page so
/// most generated funnels have a plausible entry point.
fn populate_pages(store: &mut FunnelStore, rng: &mut ThreadRng, pages: usize) {
    for i in 0..pages {
        let page_type = if i == 0 {
            PageType::SalesPage
        } else {
            PageType::ALL[rng.random_range(0..PageType::ALL.len())]
        };
        let position = Position::new(
            (i % 4) as f64 * 280.0 + rng.random_range(-40.0..40.0),
            (i / 4) as f64 * 180.0 + rng.random_range(-30.0..30.0),
        );
        let node = store.add_node(page_type, position);
        println!("-> Placed '{}' ({}).", node.label, page_type);
    }
}

/// Attempts random connections between existing pages; rejected attempts are
/// simply skipped.
fn wire_random_connections(store: &mut FunnelStore, rng: &mut ThreadRng, attempts: usize) -> usize {
    let ids: Vec<String> = store.nodes().iter().map(|n| n.id.clone()).collect();
    let mut accepted = 0;
    for _ in 0..attempts {
        let source = &ids[rng.random_range(0..ids.len())];
        let target = &ids[rng.random_range(0..ids.len())];
        if store.connect(source, target).is_ok() {
            accepted += 1;
        }
    }
    accepted
}
