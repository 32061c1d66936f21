//! src/colony.rs
//!
//! De MMAS-hoofdlus (Max-Min Ant System) voor het Maximum Independent Set
//! Probleem: binnen de tijdslimiet construeert elke mier een oplossing,
//! verbetert de lokale zoektocht haar optioneel, legt uitsluitend de
//! iteratie-beste mier feromoon, en verdampt daarna het globale geheugen.
//! De [τ_min, τ_max]-klemming voorkomt stagnatie: geen knoop raakt ooit
//! definitief gedomineerd of uitgesloten.

use crate::ant::Ant;
use crate::graph::Graph;
use crate::neighbour;
use crate::params::{ConfigError, Params};
use crate::pheromone::{PheromoneArray, PheromoneStore};
use crate::pheromone_tree::PheromoneTree;
use rand::Rng;
use std::time::Instant;

#[cfg(feature = "parallel_ants")]
use rand::{rngs::StdRng, SeedableRng};
#[cfg(feature = "parallel_ants")]
use rayon::prelude::*;

/// Vanaf dit aantal knopen krijgt het globale geheugen de segmentboom-backend;
/// daaronder wint de vlakke array het van de propagate-overhead.
pub const TREE_BACKEND_THRESHOLD: usize = 1024;

/// Uitkomst van één MMAS-run.
#[derive(Clone, Debug)]
pub struct MmasResult {
    /// Grootte van de beste gevonden onafhankelijke verzameling.
    pub best_size: usize,
    /// De leden van die verzameling.
    pub best_members: Vec<usize>,
    /// Aantal voltooide iteraties.
    pub iterations: usize,
    /// Iteratie waarin de beste oplossing werd gevonden.
    pub best_iteration: usize,
}

/// Valideert de parameters en draait de MMAS-lus met de backend die bij de
/// graafgrootte past.
pub fn run_mmas<R>(graph: &Graph, p: &Params, rng: &mut R) -> Result<MmasResult, ConfigError>
where
    R: Rng + ?Sized,
{
    p.validate()?;

    let n = graph.n();
    if n >= TREE_BACKEND_THRESHOLD {
        let global = PheromoneTree::new(n, p.rho, p.tau_min, p.tau_max);
        Ok(run_with_store(graph, p, global, rng))
    } else {
        let global = PheromoneArray::new(n, p.rho, p.tau_min, p.tau_max);
        Ok(run_with_store(graph, p, global, rng))
    }
}

/// De eigenlijke lus, generiek over de feromoon-backend. Publiek zodat een
/// specifieke backend ook expliciet gekozen kan worden.
pub fn run_with_store<P, R>(graph: &Graph, p: &Params, mut global: P, rng: &mut R) -> MmasResult
where
    P: PheromoneStore + Send + Sync,
    R: Rng + ?Sized,
{
    let start = Instant::now();

    let mut best_size = 0usize;
    let mut best_members: Vec<usize> = Vec::new();
    let mut iterations = 0usize;
    let mut best_iteration = 0usize;

    // Zonder knopen valt er niets te construeren; meteen klaar in plaats
    // van de tijdslimiet uit te zitten.
    if graph.n() == 0 {
        return MmasResult {
            best_size,
            best_members,
            iterations,
            best_iteration,
        };
    }

    let mut colony: Vec<Ant<'_, P>> = (0..p.ants).map(|_| Ant::new(graph, &global, p)).collect();

    while start.elapsed().as_secs_f64() < p.time_limit {
        construct_phase(&mut colony, p, rng);

        // Iteratie-beste; bij gelijke grootte wint de kleinste index.
        let mut iteration_best_size = 0usize;
        let mut iteration_best_ant = 0usize;
        for (i, ant) in colony.iter().enumerate() {
            if ant.size() > iteration_best_size {
                iteration_best_size = ant.size();
                iteration_best_ant = i;
            }
        }

        if iteration_best_size > best_size {
            best_size = iteration_best_size;
            best_members = colony[iteration_best_ant].solution().members().to_vec();
            best_iteration = iterations;
            if p.verbose {
                println!("New best size: {} at iteration {}", best_size, iterations);
            }
        }

        // MMAS: alleen de iteratie-beste mier legt feromoon. Grotere
        // verzamelingen verdienen meer: amount = |S|.
        colony[iteration_best_ant].deposit_into(&mut global, iteration_best_size as f64);

        for ant in colony.iter_mut() {
            ant.reset(&global);
        }
        global.evaporate();

        iterations += 1;
    }

    if p.verbose {
        println!("Best size found: {} in {} iterations", best_size, iterations);
    }

    MmasResult {
        best_size,
        best_members,
        iterations,
        best_iteration,
    }
}

/// Constructiefase van één iteratie: elke mier bouwt een oplossing en de
/// lokale zoektocht verbetert haar binnen het budget.
#[cfg(not(feature = "parallel_ants"))]
fn construct_phase<P, R>(colony: &mut [Ant<'_, P>], p: &Params, rng: &mut R)
where
    P: PheromoneStore + Send + Sync,
    R: Rng + ?Sized,
{
    for ant in colony.iter_mut() {
        ant.construct_solution(rng);
        if p.ls_budget > 0 {
            neighbour::improve(ant.solution_mut(), p.ls_budget);
        }
    }
}

/// Parallelle constructiefase: het globale geheugen is tijdens de
/// constructie alleen-lezen en elke mier krijgt een eigen, deterministisch
/// uit de hoofdstroom gezaaide generator, zodat het resultaat
/// reproduceerbaar blijft.
#[cfg(feature = "parallel_ants")]
fn construct_phase<P, R>(colony: &mut [Ant<'_, P>], p: &Params, rng: &mut R)
where
    P: PheromoneStore + Send + Sync,
    R: Rng + ?Sized,
{
    let seeds: Vec<u64> = (0..colony.len()).map(|_| rng.gen()).collect();
    colony
        .par_iter_mut()
        .zip(seeds.par_iter())
        .for_each(|(ant, &seed)| {
            let mut ant_rng = StdRng::seed_from_u64(seed);
            ant.construct_solution(&mut ant_rng);
            if p.ls_budget > 0 {
                neighbour::improve(ant.solution_mut(), p.ls_budget);
            }
        });
}
