//! fleet-plan — plan collision-free routes for a fleet on a graph.
//!
//! ```text
//! fleet-plan --graph map.txt --agents agents.csv --out output/
//! fleet-plan --grid 4x4 --agents "1,16;4,13" --paths 5
//! ```
//!
//! The graph is either an adjacency file (`1: [2, 3],` per line) or a
//! generated 4-connected grid.  Agents come from a CSV file
//! (`id,start_node,end_node[,priority]`) or an inline `start,end` list
//! separated by `;`, most important first.
//! A second, restricted request may be planned in the same invocation with
//! `--restricted-graph` and `--restricted-agents`.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{info, warn};

use fleet_agent::{AgentSpec, load_agents_csv, parse_agent_pairs};
use fleet_core::PlanConfig;
use fleet_graph::{Graph, GridLayout, load_adjacency};
use fleet_output::{CsvWriter, ScheduleOutputObserver};
use fleet_schedule::{Planner, ScheduleReport};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "fleet-plan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,

    /// Adjacency file describing the graph
    #[arg(short, long, conflicts_with = "grid")]
    graph: Option<PathBuf>,

    /// Generate a ROWSxCOLS grid instead of reading a graph file
    #[arg(long, value_parser = parse_grid)]
    grid: Option<GridLayout>,

    /// Agent CSV file, or an inline list like "1,4;2,3"
    #[arg(short, long)]
    agents: String,

    /// Planner settings (TOML)
    #[arg(short, long, env = "FLEET_PLAN_CONFIG")]
    config: Option<PathBuf>,

    /// Candidate paths per agent
    #[arg(long)]
    paths: Option<usize>,

    /// Time to traverse one edge
    #[arg(long)]
    edge_duration: Option<f64>,

    /// Resolution iteration cap
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Write assignments.csv, waypoints.csv and iterations.csv here
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print the final schedule as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Adjacency file for a second, restricted request
    #[arg(long, requires = "restricted_agents")]
    restricted_graph: Option<PathBuf>,

    /// Agents for the restricted request (same forms as --agents)
    #[arg(long, requires = "restricted_graph")]
    restricted_agents: Option<String>,
}

fn parse_grid(s: &str) -> Result<GridLayout, String> {
    let (rows, cols) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got `{s}`"))?;
    let rows: u32 = rows.trim().parse().map_err(|e| format!("rows: {e}"))?;
    let cols: u32 = cols.trim().parse().map_err(|e| format!("cols: {e}"))?;
    GridLayout::checked(rows, cols)
        .ok_or_else(|| format!("a {rows}x{cols} grid is empty or has too many cells"))
}

// ── Inputs ────────────────────────────────────────────────────────────────────

fn load_config(cli: &Cli) -> Result<PlanConfig> {
    let mut config = match &cli.config {
        Some(path) => PlanConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => PlanConfig::default(),
    };
    if let Some(k) = cli.paths {
        config = config.with_paths_per_agent(k);
    }
    if let Some(ed) = cli.edge_duration {
        config = config.with_edge_duration(ed);
    }
    if let Some(max) = cli.max_iterations {
        config = config.with_max_iterations(max);
    }
    config.validate()?;
    Ok(config)
}

/// A path to an existing file is read as CSV; anything else is parsed as an
/// inline pair list with `;` between pairs.
fn load_agents(arg: &str) -> Result<Vec<AgentSpec>> {
    let path = Path::new(arg);
    let specs = if path.is_file() {
        load_agents_csv(path).with_context(|| format!("reading agents {arg}"))?
    } else {
        parse_agent_pairs(&arg.replace(';', "\n")).context("parsing inline agent list")?
    };
    Ok(specs)
}

fn load_graph(cli: &Cli) -> Result<Graph> {
    match (&cli.graph, &cli.grid) {
        (Some(path), _) => load_adjacency(path)
            .with_context(|| format!("reading graph {}", path.display())),
        (None, Some(layout)) => Ok(layout.build_graph()),
        (None, None) => bail!("one of --graph or --grid is required"),
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_table(report: &ScheduleReport, edge_duration: f64) {
    println!("{:<8} {:>8} {:>8}  {}", "Agent", "Start", "Arrive", "Path");
    println!("{}", "-".repeat(48));
    for (id, a) in &report.schedule {
        println!(
            "{:<8} {:>8.2} {:>8.2}  {}",
            id.0,
            a.start_time,
            a.arrival_time(edge_duration),
            a.path,
        );
    }
}

fn print_report(label: &str, report: &ScheduleReport, edge_duration: f64, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&report.schedule)?);
        return Ok(());
    }
    println!("=== {label} ===");
    print_table(report, edge_duration);
    println!(
        "{} agents, {} iterations, makespan {:.2}",
        report.schedule.len(),
        report.iterations,
        report.schedule.makespan(edge_duration),
    );
    println!();
    Ok(())
}

fn plan(
    graph:  &Graph,
    specs:  &[AgentSpec],
    config: &PlanConfig,
    out:    Option<&Path>,
    layout: Option<GridLayout>,
) -> Result<ScheduleReport> {
    let planner = Planner::new(graph, config.clone())?;

    let Some(dir) = out else {
        return Ok(planner.plan_report(specs)?);
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;
    let writer = CsvWriter::new(dir)?;
    let mut obs = ScheduleOutputObserver::new(writer, config.edge_duration);
    if let Some(layout) = layout {
        obs = obs.with_layout(layout);
    }
    let report = planner.plan_with_observer(specs, &mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing schedule output");
    }
    Ok(report)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    let graph = load_graph(&cli)?;
    let specs = load_agents(&cli.agents)?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        agents = specs.len(),
        "inputs loaded"
    );

    let t0 = Instant::now();
    let report = plan(&graph, &specs, &config, cli.out.as_deref(), cli.grid)?;
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "planning finished");
    if !report.is_converged() {
        warn!(remaining = report.remaining.len(), "schedule still has collisions");
    }
    print_report("Schedule", &report, config.edge_duration, cli.json)?;

    if let (Some(graph_path), Some(agents_arg)) = (&cli.restricted_graph, &cli.restricted_agents) {
        let restricted = load_adjacency(graph_path)
            .with_context(|| format!("reading restricted graph {}", graph_path.display()))?;
        let specs = load_agents(agents_arg)?;
        let out = cli.out.as_ref().map(|dir| dir.join("restricted"));
        let report = plan(&restricted, &specs, &config, out.as_deref(), None)?;
        print_report("Restricted schedule", &report, config.edge_duration, cli.json)?;
    }

    Ok(())
}
