//! src/pheromone.rs
//!
//! Het feromoon-contract van de MMAS-zoektocht plus de vlakke
//! array-backend. Elke knoop draagt een feromoonniveau τ; het globale
//! geheugen klemt τ na elke verdamping binnen [τ_min, τ_max], terwijl
//! lokale (per-mier) kopieën knopen mogen *invalideren* (τ = 0) om ze
//! binnen één constructie van selectie uit te sluiten.

use rand::Rng;

/// Gemeenschappelijk contract van de twee feromoon-backends.
///
/// `Clone` is onderdeel van het contract: elke mier werkt op een diepe
/// kopie van het globale geheugen en wordt daar bij `reset` opnieuw mee
/// gevuld.
pub trait PheromoneStore: Clone {
    /// Aantal knopen waarvoor het geheugen een τ bijhoudt.
    fn vertices(&self) -> usize;

    /// Huidig feromoonniveau van knoop `v`.
    fn get(&self, v: usize) -> f64;

    /// Klemt `value` binnen [τ_min, τ_max] en kent het toe aan `v`.
    fn set(&mut self, v: usize, value: f64);

    /// Verhoogt τ van `v` met `amount`, afgekapt op τ_max.
    fn deposit(&mut self, v: usize, amount: f64);

    /// Verdampt alle niveaus: `τ ← max(τ · (1 − ρ), τ_min)`.
    /// Alleen het globale geheugen verdampt.
    fn evaporate(&mut self);

    /// Maskeert `v` voor verdere selectie door τ op 0 te zetten.
    /// Uitsluitend bedoeld voor lokale kopieën.
    fn invalidate(&mut self, v: usize);

    /// Maskeert een reeks knopen in één keer.
    fn invalidate_many(&mut self, vs: &[usize]);

    /// Som van alle niveaus.
    fn total(&self) -> f64;

    /// Trekt een knoop met kans evenredig aan zijn τ, of `None` wanneer
    /// alle niveaus 0 zijn.
    fn weighted_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize>;
}

/// Vlakke backend: τ in een array van lengte n. Een gewogen trekking is
/// een O(n) roulette-scan; voor kleine grafen verslaat dat de boom-backend
/// ruimschoots.
#[derive(Clone, Debug)]
pub struct PheromoneArray {
    levels: Vec<f64>,
    rho: f64,
    tau_min: f64,
    tau_max: f64,
}

impl PheromoneArray {
    /// Initialiseert alle niveaus op τ_max, zoals MMAS voorschrijft.
    pub fn new(n: usize, rho: f64, tau_min: f64, tau_max: f64) -> Self {
        Self {
            levels: vec![tau_max; n],
            rho,
            tau_min,
            tau_max,
        }
    }
}

impl PheromoneStore for PheromoneArray {
    #[inline]
    fn vertices(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    fn get(&self, v: usize) -> f64 {
        self.levels[v]
    }

    fn set(&mut self, v: usize, value: f64) {
        self.levels[v] = value.clamp(self.tau_min, self.tau_max);
    }

    fn deposit(&mut self, v: usize, amount: f64) {
        self.levels[v] = (self.levels[v] + amount).min(self.tau_max);
    }

    fn evaporate(&mut self) {
        for level in &mut self.levels {
            *level = (*level * (1.0 - self.rho)).max(self.tau_min);
        }
    }

    #[inline]
    fn invalidate(&mut self, v: usize) {
        self.levels[v] = 0.0;
    }

    fn invalidate_many(&mut self, vs: &[usize]) {
        for &v in vs {
            self.levels[v] = 0.0;
        }
    }

    fn total(&self) -> f64 {
        self.levels.iter().sum()
    }

    fn weighted_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let total = self.total();
        if total <= 0.0 {
            return None;
        }

        let draw = rng.gen_range(0.0..total);
        let mut cumulative = 0.0;
        for (v, &level) in self.levels.iter().enumerate() {
            cumulative += level;
            // Strikt groter: een geïnvalideerde knoop (τ = 0) mag ook bij
            // draw == 0.0 nooit gekozen worden.
            if cumulative > draw {
                return Some(v);
            }
        }
        None
    }
}
