//! src/lib.rs
//!
//! Hoofdbestand van de Rust-bibliotheek: een Max-Min Ant System (MMAS)
//! heuristiek voor het Maximum Independent Set Probleem. Definieert de
//! publieke modules en, achter de `python`-feature, de PyO3-bindings om de
//! oplosser vanuit Python aan te roepen.

// Publieke modules voor gebruik binnen de Rust-crate
pub mod ant;
pub mod colony;
pub mod graph;
pub mod neighbour;
pub mod params;
pub mod pheromone;
pub mod pheromone_tree;
pub mod solution;

// Her-exporteer de belangrijkste types voor Rust-gebruikers
pub use ant::Ant;
pub use colony::{run_mmas, run_with_store, MmasResult, TREE_BACKEND_THRESHOLD};
pub use graph::Graph;
pub use params::{ConfigError, Params};
pub use pheromone::{PheromoneArray, PheromoneStore};
pub use pheromone_tree::PheromoneTree;
pub use solution::Solution;

#[cfg(feature = "python")]
mod python {
    use crate::{colony, Graph, Params};
    use pyo3::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs::File;
    use std::io::BufReader;

    /// Python-binding voor de MMAS-oplosser.
    #[pyfunction]
    #[pyo3(signature = (
        instance_path, time_limit=10.0, ants=10, alpha=1.0, beta=2.0,
        rho=0.02, tau_min=1.0, tau_max=100.0, gamma=0.0, delta=0.0,
        ls_budget=0, seed=42, verbose=false
    ))]
    #[allow(clippy::too_many_arguments)]
    fn solve_misp_py(
        instance_path: String,
        time_limit: f64,
        ants: usize,
        alpha: f64,
        beta: f64,
        rho: f64,
        tau_min: f64,
        tau_max: f64,
        gamma: f64,
        delta: f64,
        ls_budget: usize,
        seed: u64,
        verbose: bool,
    ) -> PyResult<(usize, Vec<usize>, usize)> {
        let file = File::open(&instance_path)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyIOError, _>(e.to_string()))?;
        let mut graph = Graph::parse_dimacs(BufReader::new(file))
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

        let p = Params {
            time_limit,
            ants,
            alpha,
            beta,
            gamma,
            delta,
            rho,
            tau_min,
            tau_max,
            ls_budget,
            seed,
            verbose,
        };
        if p.gamma != 0.0 {
            graph.build_degeneracy();
        }

        let mut rng = StdRng::seed_from_u64(p.seed);
        let result = colony::run_mmas(&graph, &p, &mut rng)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

        Ok((result.best_size, result.best_members, result.iterations))
    }

    /// Helperfunctie om een DIMACS-bestand te parsen en (n, m) terug te geven.
    #[pyfunction]
    fn parse_dimacs_py(instance_path: String) -> PyResult<(usize, usize)> {
        let file = File::open(&instance_path)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyIOError, _>(e.to_string()))?;
        let graph = Graph::parse_dimacs(BufReader::new(file))
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok((graph.n(), graph.m()))
    }

    /// Definieert de Python-module `_native`.
    #[pymodule]
    fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(solve_misp_py, m)?)?;
        m.add_function(wrap_pyfunction!(parse_dimacs_py, m)?)?;
        Ok(())
    }
}
