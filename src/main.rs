//! src/main.rs
//!
//! Benchmark-adapter rond de MMAS-bibliotheek. Eén bestand wordt direct
//! opgelost (de negatieve beste grootte op stdout, zodat externe tuners
//! kunnen minimaliseren); een directory wordt per dichtheidsgroep
//! geaggregeerd tot CSV. De kern parset zelf geen paden of vlaggen.

use amis::{run_mmas, Graph, Params};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::error::Error;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

/// MMAS benchmark for the Maximum Independent Set Problem.
#[derive(Parser, Debug)]
#[command(name = "amis", version, about)]
struct Cli {
    /// Path to graph instance file/directory
    #[arg(short = 'i', long = "instance")]
    instance: PathBuf,

    /// Time limit in seconds
    #[arg(short = 't', long = "time", default_value_t = 10.0)]
    time: f64,

    /// Number of ants per iteration
    #[arg(short = 'm', long = "ants", default_value_t = 10)]
    ants: usize,

    /// Pheromone influence exponent
    #[arg(short = 'a', long = "alpha", default_value_t = 1.0)]
    alpha: f64,

    /// Degree heuristic exponent
    #[arg(short = 'b', long = "beta", default_value_t = 2.0)]
    beta: f64,

    /// Degeneracy heuristic exponent
    #[arg(short = 'g', long = "gamma", default_value_t = 0.0)]
    gamma: f64,

    /// Conflict heuristic exponent
    #[arg(short = 'd', long = "delta", default_value_t = 0.0)]
    delta: f64,

    /// Evaporation rate, in (0, 1]
    #[arg(short = 'r', long = "rho", default_value_t = 0.02)]
    rho: f64,

    /// Minimum pheromone level
    #[arg(long = "min", default_value_t = 1.0)]
    tau_min: f64,

    /// Maximum pheromone level
    #[arg(long = "max", default_value_t = 100.0)]
    tau_max: f64,

    /// Local search budget (0 disables)
    #[arg(short = 'l', long = "local-search", default_value_t = 0)]
    ls_budget: usize,

    /// Random seed
    #[arg(short = 's', long = "seed", default_value_t = 42)]
    seed: u64,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let params = Params {
        time_limit: cli.time,
        ants: cli.ants,
        alpha: cli.alpha,
        beta: cli.beta,
        gamma: cli.gamma,
        delta: cli.delta,
        rho: cli.rho,
        tau_min: cli.tau_min,
        tau_max: cli.tau_max,
        ls_budget: cli.ls_budget,
        seed: cli.seed,
        verbose: cli.verbose,
    };
    params.validate()?;

    let meta = fs::metadata(&cli.instance)?;
    if meta.is_dir() {
        run_directory(&cli.instance, &params)
    } else {
        run_single(&cli.instance, &params)
    }
}

/// Laadt één instantie en lost haar op.
fn run_single(path: &Path, params: &Params) -> Result<(), Box<dyn Error>> {
    let graph = load_graph(path, params)?;
    let mut rng = StdRng::seed_from_u64(params.seed);
    let result = run_mmas(&graph, params, &mut rng)?;

    // Negatief voor externe minimalisatie; verbose drukt zelf een
    // samenvatting af.
    if !params.verbose {
        println!("{}", -(result.best_size as i64));
    }
    Ok(())
}

/// Lost alle instanties in een directory op en aggregeert per
/// dichtheidsgroep tot CSV.
fn run_directory(dir: &Path, params: &Params) -> Result<(), Box<dyn Error>> {
    // Dichtheidsgroepen in oplopende volgorde; binnen een groep bepalen de
    // gesorteerde bestandsnamen de volgorde, zodat runs reproduceerbaar zijn.
    let mut groups: BTreeMap<u32, Vec<PathBuf>> = BTreeMap::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some(density) = parse_density(&name) {
            groups.entry(density).or_default().push(entry.path());
        }
    }

    if groups.is_empty() {
        return Err(format!("No instance files found in directory: {}", dir.display()).into());
    }

    println!("Density,Tests,Avg_MISP_Size,Avg_Time(s),Avg_Iterations");

    let silent = Params {
        verbose: false,
        ..params.clone()
    };

    for (density, mut files) in groups {
        files.sort();

        let tests = files.len();
        let mut sum_size = 0.0f64;
        let mut sum_time = 0.0f64;
        let mut sum_iterations = 0.0f64;

        for path in &files {
            let graph = load_graph(path, &silent)?;
            let mut rng = StdRng::seed_from_u64(silent.seed);

            let start = Instant::now();
            let result = run_mmas(&graph, &silent, &mut rng)?;
            let elapsed = start.elapsed().as_secs_f64();

            sum_size += result.best_size as f64;
            sum_time += elapsed;
            sum_iterations += result.iterations as f64;
        }

        println!(
            "0.{},{},{:.2},{:.4},{:.0}",
            density,
            tests,
            sum_size / tests as f64,
            sum_time / tests as f64,
            sum_iterations / tests as f64
        );
    }

    Ok(())
}

/// Parset een graafbestand en bouwt degeneracy op wanneer de γ-heuristiek
/// erom vraagt.
fn load_graph(path: &Path, params: &Params) -> Result<Graph, Box<dyn Error>> {
    let file = File::open(path)
        .map_err(|e| format!("Could not open graph file {}: {}", path.display(), e))?;
    let mut graph = Graph::parse_dimacs(BufReader::new(file))
        .map_err(|e| format!("Could not load graph from file {}: {}", path.display(), e))?;
    if params.gamma != 0.0 {
        graph.build_degeneracy();
    }
    Ok(graph)
}

/// Leest het dichtheidscijfer uit bestandsnamen van de vorm `*.D_*`, met D
/// één decimaal cijfer. Andere namen horen niet bij de benchmarkset.
fn parse_density(name: &str) -> Option<u32> {
    let after_dot = &name[name.find('.')? + 1..];
    let mut chars = after_dot.chars();
    let digit = chars.next()?.to_digit(10)?;
    if chars.next()? == '_' {
        Some(digit)
    } else {
        None
    }
}
