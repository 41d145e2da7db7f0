use anyhow::{Context, Result};
use clap::Parser;
use eccentricity::*;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ecc-cli")]
#[command(about = "Shortest paths and eccentricity over a symmetric weight matrix")]
#[command(version)]
struct Cli {
    /// JSON graph snapshot: {"weights": [[...], ...]}
    #[arg(long)]
    graph_file: Option<PathBuf>,

    /// Vertex count of the generated graph
    #[arg(long, default_value_t = 12)]
    n: usize,

    /// Edge probability of the generated graph
    #[arg(long, default_value_t = 0.3)]
    p: f64,

    /// Maximum edge weight of the generated graph
    #[arg(long, default_value_t = 9)]
    maxw: u32,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Source vertex
    #[arg(long, default_value_t = 0)]
    source: Node,

    /// Compute eccentricity, radius and diameter for every vertex
    #[arg(long)]
    all: bool,

    /// Include the relaxation trace in the output row
    #[arg(long)]
    trace: bool,

    #[arg(long, default_value_t = 1)]
    trials: usize,
}

#[derive(Serialize)]
struct OutputRow<T: Serialize> {
    n: usize,
    m: usize,
    time_ns: u128,
    #[serde(flatten)]
    result: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<Vec<TraceEvent>>,
}

fn read_graph_from_file(path: &PathBuf) -> Result<Graph> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(f)).with_context(|| format!("parsing {}", path.display()))
}

fn emit<T: Serialize>(row: &OutputRow<T>) -> Result<()> {
    println!("{}", serde_json::to_string(row)?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eccentricity=info,ecc_cli=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let g = match cli.graph_file.as_ref() {
        Some(path) => read_graph_from_file(path)?,
        None => Graph::random(cli.n, cli.p, cli.maxw, &mut StdRng::seed_from_u64(cli.seed)),
    };
    let (n, m) = (g.len(), g.edge_count());
    info!(n, m, "graph loaded");
    tracing::debug!("adjacency lists:\n{}", AdjacencyList::from_graph(&g)?);

    let mut best: Option<u128> = None;
    for _ in 0..cli.trials.max(1) {
        let start = Instant::now();
        let elapsed;
        if cli.all {
            let metrics = graph_eccentricities(&g)?;
            elapsed = start.elapsed().as_nanos();
            emit(&OutputRow { n, m, time_ns: elapsed, result: metrics, trace: None })?;
        } else if cli.trace {
            let mut events: Vec<TraceEvent> = Vec::new();
            let paths = compute_shortest_paths_traced(&g, cli.source, &mut events)?;
            elapsed = start.elapsed().as_nanos();
            emit(&OutputRow { n, m, time_ns: elapsed, result: paths, trace: Some(events) })?;
        } else {
            let paths = compute_shortest_paths_traced(&g, cli.source, &mut LogSink)?;
            elapsed = start.elapsed().as_nanos();
            emit(&OutputRow { n, m, time_ns: elapsed, result: paths, trace: None })?;
        }
        if best.map_or(true, |b| elapsed < b) { best = Some(elapsed); }
    }
    if let Some(b) = best { eprintln!("best ns={} n={} m={}", b, n, m); }
    Ok(())
}
