use clap::{Parser, Subcommand};
use contest_graphs::config::Config;
use contest_graphs::logging::init_logging;
use contest_graphs::report::{render, NetworkAnswer, OutputFormat, RailwayAnswer};
use contest_graphs::utils::parse::{format_network, format_railways, parse_network, parse_railways};
use contest_graphs::utils::random_graph::{generate_network_instance, generate_railway_instance};
use contest_graphs::utils::serialization::{
    load_instance, save_instance, ProblemInstance, ProblemKind,
};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::info;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(author, version, about = "Maximum spanning trees and railway cycle checks", long_about = None)]
struct Cli {
    /// TOML file with output and generator defaults
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Log algorithm progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Weight of the maximum spanning tree of a weighted graph
    Network {
        /// Contest input file (stdin when omitted)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
        #[arg(long, help = "Output format: text or json")]
        format: Option<OutputFormat>,
    },
    /// Whether a railway road map is free of cycles
    Railways {
        /// Contest input file (stdin when omitted)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
        #[arg(long, help = "Output format: text or json")]
        format: Option<OutputFormat>,
    },
    /// Generate a random instance and write it to disk
    Generate {
        #[arg(help = "Problem to generate: network or railways")]
        problem: ProblemArg,
        #[arg(long)]
        nodes: Option<u32>,
        #[arg(long, help = "Edge count for network instances")]
        edges: Option<u32>,
        #[arg(long)]
        max_weight: Option<i64>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, help = "Railways: rank cities so the map has no cycle")]
        acyclic: bool,
        #[arg(long, help = "Network: skip the random spanning tree backbone")]
        disconnected: bool,
        #[arg(long, help = "Write contest input text instead of an instance file")]
        text: bool,
        /// Destination (stdout for --text when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Solve a stored instance file
    Solve {
        #[arg(short, long, value_name = "FILE")]
        instance: PathBuf,
        #[arg(long, help = "Output format: text or json")]
        format: Option<OutputFormat>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ProblemArg {
    Network,
    Railways,
}

impl std::str::FromStr for ProblemArg {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "network" | "a" => Ok(ProblemArg::Network),
            "railways" | "b" => Ok(ProblemArg::Railways),
            other => Err(format!("unknown problem '{other}'")),
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let config = Config::load_or_default(cli.config.as_ref())?;

    match cli.command {
        Commands::Network { input, format } => {
            let text = read_input(input)?;
            let graph = parse_network(&text)?;
            let answer = NetworkAnswer::solve(&graph);
            print_answer(&answer, format.unwrap_or(config.output.format))?
        }
        Commands::Railways { input, format } => {
            let text = read_input(input)?;
            let map = parse_railways(&text)?;
            let answer = RailwayAnswer::solve(&map);
            print_answer(&answer, format.unwrap_or(config.output.format))?
        }
        Commands::Generate {
            problem,
            nodes,
            edges,
            max_weight,
            seed,
            acyclic,
            disconnected,
            text,
            output,
        } => {
            let defaults = &config.generator;
            let nodes = nodes.unwrap_or(defaults.nodes);
            let seed = seed.or(defaults.seed);
            let instance = match problem {
                ProblemArg::Network => {
                    let (graph, params) = generate_network_instance(
                        nodes,
                        edges.unwrap_or(defaults.edges),
                        max_weight.unwrap_or(defaults.max_weight),
                        !disconnected,
                        seed,
                    )?;
                    ProblemInstance::with_metadata(ProblemKind::Network(graph), params)
                }
                ProblemArg::Railways => {
                    let (map, params) = generate_railway_instance(nodes, acyclic, seed)?;
                    ProblemInstance::with_metadata(ProblemKind::Railways(map), params)
                }
            };
            run_generate(&instance, text, output)?
        }
        Commands::Solve { instance, format } => {
            let instance = load_instance(&instance)?;
            let format = format.unwrap_or(config.output.format);
            match &instance.problem {
                ProblemKind::Network(graph) => print_answer(&NetworkAnswer::solve(graph), format)?,
                ProblemKind::Railways(map) => print_answer(&RailwayAnswer::solve(map), format)?,
            }
        }
    }
    Ok(())
}

fn run_generate(instance: &ProblemInstance, text: bool, output: Option<PathBuf>) -> CliResult<()> {
    if text {
        let body = match &instance.problem {
            ProblemKind::Network(graph) => format_network(graph),
            ProblemKind::Railways(map) => format_railways(map),
        };
        match output {
            Some(path) => fs::write(&path, body)?,
            None => io::stdout().write_all(body.as_bytes())?,
        }
        return Ok(());
    }

    let output = output.ok_or("an --output file is required unless --text is set")?;
    save_instance(&output, instance)?;
    if let Some(params) = &instance.metadata {
        info!(
            nodes = params.nodes,
            edges = params.edges,
            seed = ?params.seed,
            "{} instance generated",
            instance.label()
        );
    }
    println!("Instance saved to {}", output.display());
    Ok(())
}

fn read_input(input: Option<PathBuf>) -> CliResult<String> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn print_answer<T>(answer: &T, format: OutputFormat) -> CliResult<()>
where
    T: serde::Serialize + std::fmt::Display,
{
    let rendered = render(answer, format)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{rendered}")?;
    Ok(())
}
