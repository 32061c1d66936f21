//! src/ant.rs
//!
//! De mier: eigenaar van een lokale feromoonkopie, een oplossing-in-opbouw
//! en vooraf berekende heuristiekcaches. Eén aanroep van
//! `construct_solution` bouwt per roulette-selectie een maximale
//! onafhankelijke verzameling: na elke keuze worden de gekozen knoop en
//! zijn buren lokaal geïnvalideerd, zodat onafhankelijkheid per constructie
//! is gegarandeerd en geen reparatie achteraf nodig is.

use crate::graph::Graph;
use crate::params::Params;
use crate::pheromone::PheromoneStore;
use crate::solution::Solution;
use rand::Rng;

/// Eén mier uit de kolonie. `P` is de feromoon-backend; de lokale kopie
/// heeft hetzelfde type als het globale geheugen waaruit ze wordt gereset.
pub struct Ant<'g, P: PheromoneStore> {
    graph: &'g Graph,
    local: P,
    sol: Solution<'g>,
    alpha: f64,
    beta: f64,
    gamma: f64,
    delta: f64,
    /// `1 / (1 + degree)^β` per knoop; allemaal 1 bij β = 0.
    h_deg: Vec<f64>,
    /// `1 / (1 + degeneracy)^γ` per knoop; allemaal 1 bij γ = 0 of zonder
    /// opgebouwde degeneracy.
    h_core: Vec<f64>,
}

impl<'g, P: PheromoneStore> Ant<'g, P> {
    /// Creëert een mier met een verse kopie van het globale geheugen en
    /// bouwt de statische heuristiekcaches eenmalig op.
    pub fn new(graph: &'g Graph, global: &P, p: &Params) -> Self {
        let n = graph.n();

        // Lage graad maakt een knoop aantrekkelijker voor een MIS.
        let h_deg = if p.beta != 0.0 {
            (0..n)
                .map(|v| 1.0 / (1.0 + graph.degree(v) as f64).powf(p.beta))
                .collect()
        } else {
            vec![1.0; n]
        };

        let h_core = match graph.degeneracy() {
            Some(core) if p.gamma != 0.0 => core
                .iter()
                .map(|&c| 1.0 / (1.0 + c as f64).powf(p.gamma))
                .collect(),
            _ => vec![1.0; n],
        };

        Self {
            graph,
            local: global.clone(),
            sol: Solution::new(graph),
            alpha: p.alpha,
            beta: p.beta,
            gamma: p.gamma,
            delta: p.delta,
            h_deg,
            h_core,
        }
    }

    /*────────── Queries ──────────*/

    /// De oplossing van de laatste constructie.
    #[inline]
    pub fn solution(&self) -> &Solution<'g> {
        &self.sol
    }

    /// Veranderlijke toegang tot de oplossing, voor de lokale zoektocht.
    #[inline]
    pub fn solution_mut(&mut self) -> &mut Solution<'g> {
        &mut self.sol
    }

    /// Grootte van de huidige oplossing.
    #[inline]
    pub fn size(&self) -> usize {
        self.sol.size()
    }

    /// De lokale feromoonkopie (voor tests van het reset-contract).
    #[inline]
    pub fn local_pheromones(&self) -> &P {
        &self.local
    }

    /// Selectiegewicht `τ^α · h_deg · h_core · h_conf`. Alleen zinvol voor
    /// knopen met positieve lokale τ.
    fn selection_weight(&self, v: usize) -> f64 {
        let tau = self.local.get(v);
        let h_conf = if self.delta != 0.0 {
            1.0 / (1.0 + self.sol.conflict(v) as f64).powf(self.delta)
        } else {
            1.0
        };
        tau.powf(self.alpha) * self.h_deg[v] * self.h_core[v] * h_conf
    }

    /*────────── Constructie ──────────*/

    /// Bouwt één kandidaat-oplossing en geeft haar grootte terug.
    ///
    /// De kandidatenlijst wordt na elke keuze gefilterd uit de *vorige*
    /// lijst, niet opnieuw uit alle knopen; het krimpende bereik is wat de
    /// constructie snel houdt.
    pub fn construct_solution<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        // Wanneer het gewicht tot kale τ reduceert, trekt de mier direct
        // uit het geheugen zelf. Voor de boom-backend is dat de
        // O(log n)-trekking waarvoor die backend bestaat.
        if self.alpha == 1.0 && self.beta == 0.0 && self.gamma == 0.0 && self.delta == 0.0 {
            while let Some(v) = self.local.weighted_sample(rng) {
                self.sol.add(v);
                self.local.invalidate(v);
                self.local.invalidate_many(self.graph.neighbours(v));
            }
            return self.sol.size();
        }

        let mut candidates: Vec<usize> =
            (0..self.graph.n()).filter(|&v| self.local.get(v) > 0.0).collect();
        let mut weights: Vec<f64> =
            candidates.iter().map(|&v| self.selection_weight(v)).collect();

        while !candidates.is_empty() {
            let total: f64 = weights.iter().sum();
            if total <= 0.0 {
                break;
            }

            // Roulette: de eerste index waar het cumulatieve gewicht de
            // trekking kruist, wint.
            let draw = rng.gen_range(0.0..total);
            let mut selected = candidates.len() - 1;
            let mut cumulative = 0.0;
            for (i, &w) in weights.iter().enumerate() {
                cumulative += w;
                if cumulative >= draw {
                    selected = i;
                    break;
                }
            }

            let chosen = candidates[selected];
            self.sol.add(chosen);
            self.local.invalidate(chosen);
            self.local.invalidate_many(self.graph.neighbours(chosen));

            // Filter de vorige kandidatenlijst in place; de gewichten
            // worden herrekend omdat de conflict-heuristiek dynamisch is.
            candidates.retain(|&v| self.local.get(v) > 0.0);
            weights.clear();
            weights.extend(candidates.iter().map(|&v| self.selection_weight(v)));
        }

        self.sol.size()
    }

    /*────────── Iteratie-overgangen ──────────*/

    /// Zet de mier klaar voor de volgende iteratie: lokale τ wordt een
    /// verse kopie van het globale geheugen, de oplossing wordt leeg.
    pub fn reset(&mut self, global: &P) {
        self.local.clone_from(global);
        self.sol = Solution::new(self.graph);
    }

    /// Legt `amount` feromoon op elke knoop van de eigen oplossing. Dit is
    /// het enige schrijfkanaal van een mier naar het globale geheugen.
    pub fn deposit_into(&self, global: &mut P, amount: f64) {
        for &v in self.sol.members() {
            global.deposit(v, amount);
        }
    }
}
