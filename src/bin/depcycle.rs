//! Orders a JSON graph document from the command line.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use depcycle::{CycleDetector, DetectorConfig, DuplicateEdges, GraphDocument};

#[derive(Parser)]
#[command(name = "depcycle")]
#[command(about = "Detect dependency cycles and print an execution order", long_about = None)]
struct Cli {
    /// Graph document: `{"nodes": [...], "dependencies": [{"node": .., "prerequisite": ..}]}`
    graph: PathBuf,

    /// Merge identical dependencies before ordering
    #[arg(long, default_value_t = false)]
    collapse_duplicates: bool,

    /// Only report whether the graph is acyclic
    #[arg(long, default_value_t = false)]
    check: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.graph)
        .with_context(|| format!("failed to read {}", cli.graph.display()))?;
    let doc: GraphDocument<String> = GraphDocument::from_json(&raw)
        .with_context(|| format!("invalid graph document {}", cli.graph.display()))?;

    let policy = if cli.collapse_duplicates {
        DuplicateEdges::Collapse
    } else {
        DuplicateEdges::Count
    };
    let detector = CycleDetector::with_config(DetectorConfig::new().duplicate_edges(policy));

    let order = doc
        .try_find_order(&detector)
        .with_context(|| format!("no execution order for {}", cli.graph.display()))?;

    if cli.check {
        println!(
            "acyclic: {} nodes, {} dependencies",
            doc.node_count(),
            doc.edge_count()
        );
    } else {
        println!("{}", serde_json::to_string_pretty(&order)?);
    }

    Ok(())
}
