use bitmask_dag::{
    error::GraphError,
    fs::GraphSource,
    search::{BitsetGraph, DetectorMode, graph_algo::MemoizedDfs},
    statistics::TraversalStats,
};
use clap::Parser;
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Decides whether each digraph file describes a DAG
#[derive(Parser, Debug)]
#[command(name = "is_dag", version)]
#[command(about = "Checks whether bitmask digraphs (at most 32 vertices) are acyclic", long_about = None)]
struct Args {
    /// Digraph files; `.json` files are read as JSON, anything else as the text format
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Which cycle detector to run
    #[arg(short, long, value_enum, default_value_t = DetectorMode::Memoized)]
    detector: DetectorMode,

    /// Print each graph before its result line
    #[arg(short, long)]
    print: bool,

    /// Print the full reachability table after each result line
    #[arg(short, long)]
    reachability: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_reachability(graph: &BitsetGraph) {
    let memo = MemoizedDfs::reachability(graph);
    let width = graph.len();
    for vertex in graph.vertices() {
        println!("  {vertex} -> {:0width$b}", memo.reachable_from(vertex));
    }
}

fn check_file(args: &Args, file: &Path) -> Result<(), GraphError> {
    info!(file = %file.display(), detector = ?args.detector, "checking digraph");
    let graph = BitsetGraph::load_from_path(file)?;

    if args.print {
        print!("{graph}");
    }

    let mut stats = TraversalStats::new();
    let verdict = args.detector.run(&graph, &mut stats)?;
    debug!(
        file = %file.display(),
        roots = stats.get_roots(),
        expansions = stats.get_expansions(),
        memo_hits = stats.get_memo_hits(),
        "traversal statistics"
    );

    println!("{} is a dag? {}", file.display(), u8::from(verdict));

    if args.reachability {
        print_reachability(&graph);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // usage errors exit with 1; --help and --version are not errors
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };
    init_tracing(args.verbose);

    for file in &args.files {
        if let Err(err) = check_file(&args, file) {
            match err {
                GraphError::LoadFailure { source, .. } => {
                    eprintln!("Error reading digraph from file {}: {source}", file.display())
                }
                other => eprintln!("Error checking digraph from file {}: {other}", file.display()),
            }
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
