use clap::Parser;
use contest_graphs::graph::{find_cycle, maximum_spanning_tree};
use contest_graphs::error::GraphError;
use contest_graphs::logging::init_logging;
use contest_graphs::utils::random_graph::{
    generate_network_instance, generate_railway_instance, DEFAULT_MAX_WEIGHT,
};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

struct BenchmarkResult {
    problem: Problem,
    nodes: u32,
    edges: u64,
    samples: u32,
    mean_time: Duration,
    min_time: Duration,
    max_time: Duration,
    positive: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Problem {
    Network,
    Railways,
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Problem::Network => write!(f, "Network"),
            Problem::Railways => write!(f, "Railways"),
        }
    }
}

impl std::str::FromStr for Problem {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "network" | "a" => Ok(Problem::Network),
            "railways" | "b" => Ok(Problem::Railways),
            other => Err(format!("unknown problem '{other}'")),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Benchmark runner for the spanning tree and railway solvers"
)]
struct BenchmarkCli {
    /// Comma-separated list of node counts to benchmark (e.g. 100,1000,5000)
    #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(u32))]
    nodes: Option<Vec<u32>>,
    /// Comma-separated list of problems (network,railways)
    #[arg(long, value_delimiter = ',')]
    problems: Option<Vec<Problem>>,
    /// Edges per node for network instances (default: 4)
    #[arg(long)]
    density: Option<u32>,
    /// Random instances per configuration (default: 8)
    #[arg(long)]
    samples: Option<u32>,
    /// Base seed; sample `k` uses `seed + k`
    #[arg(long)]
    seed: Option<u64>,
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = BenchmarkCli::parse();
    init_logging(cli.verbose, false);
    println!("=== Contest Graph Solver Benchmark Suite ===\n");

    let node_sizes = cli.nodes.unwrap_or_else(|| vec![100, 1_000, 5_000]);
    let problems = cli
        .problems
        .unwrap_or_else(|| vec![Problem::Network, Problem::Railways]);
    let density = cli.density.unwrap_or(4);
    let samples = cli.samples.unwrap_or(8);
    let seed = cli.seed.unwrap_or(0x5eed);

    if samples == 0 {
        eprintln!("Error: samples must be greater than zero");
        std::process::exit(1);
    }

    let progress = ProgressBar::new((node_sizes.len() * problems.len()) as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut all_results = Vec::new();
    for &nodes in &node_sizes {
        for &problem in &problems {
            progress.set_message(format!("{problem} n={nodes}"));
            match run_benchmark(problem, nodes, density, samples, seed) {
                Ok(result) => all_results.push(result),
                Err(e) => progress.println(format!("  ✗ {problem} n={nodes} failed: {e}")),
            }
            progress.inc(1);
        }
    }
    progress.finish_and_clear();

    println!("=== Summary Report ===\n");
    print_summary_table(&all_results);
}

fn run_benchmark(
    problem: Problem,
    nodes: u32,
    density: u32,
    samples: u32,
    seed: u64,
) -> Result<BenchmarkResult, GraphError> {
    let runs: Vec<(Duration, u64, bool)> = (0..samples)
        .into_par_iter()
        .map(|sample| {
            let sample_seed = Some(seed.wrapping_add(sample as u64));
            match problem {
                Problem::Network => {
                    let (graph, _) = generate_network_instance(
                        nodes,
                        nodes.saturating_mul(density),
                        DEFAULT_MAX_WEIGHT,
                        true,
                        sample_seed,
                    )?;
                    let start = Instant::now();
                    let tree = maximum_spanning_tree(&graph);
                    Ok((start.elapsed(), graph.edge_count() as u64, tree.is_some()))
                }
                Problem::Railways => {
                    // half the samples are acyclic so both outcomes are timed
                    let (map, _) = generate_railway_instance(nodes, sample % 2 == 0, sample_seed)?;
                    let start = Instant::now();
                    let cycle = find_cycle(&map);
                    Ok((start.elapsed(), map.road_count() as u64, cycle.is_none()))
                }
            }
        })
        .collect::<Result<_, GraphError>>()?;

    let total: Duration = runs.iter().map(|(time, _, _)| *time).sum();
    Ok(BenchmarkResult {
        problem,
        nodes,
        edges: runs.first().map(|(_, edges, _)| *edges).unwrap_or(0),
        samples,
        mean_time: total / samples,
        min_time: runs.iter().map(|(time, _, _)| *time).min().unwrap_or_default(),
        max_time: runs.iter().map(|(time, _, _)| *time).max().unwrap_or_default(),
        positive: runs.iter().filter(|(_, _, ok)| *ok).count() as u32,
    })
}

fn print_summary_table(results: &[BenchmarkResult]) {
    println!(
        "{:<10} {:>8} {:>12} {:>8} {:>12} {:>12} {:>12} {:>10}",
        "Problem", "Nodes", "Edges", "Samples", "Mean (ms)", "Min (ms)", "Max (ms)", "Positive"
    );
    println!("{}", "-".repeat(92));
    for result in results {
        println!(
            "{:<10} {:>8} {:>12} {:>8} {:>12.3} {:>12.3} {:>12.3} {:>10}",
            result.problem,
            result.nodes,
            result.edges,
            result.samples,
            duration_ms(result.mean_time),
            duration_ms(result.min_time),
            duration_ms(result.max_time),
            format!("{}/{}", result.positive, result.samples)
        );
    }
    println!();
    println!("Positive = spanning tree found (Network) or map acyclic (Railways)");
}

fn duration_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}
