//! src/params.rs
//!
//! Alle instelbare parameters van de MMAS-zoektocht, met de standaardwaarden
//! van de benchmark en een validatie die ongeldige configuraties vóór de
//! start van een run afvangt.

use thiserror::Error;

/// Configuratie van één MMAS-run.
#[derive(Clone, Debug)]
pub struct Params {
    /// Tijdslimiet in seconden; de lus stopt zodra de wandklok erover gaat.
    pub time_limit: f64,
    /// Aantal mieren per iteratie.
    pub ants: usize,
    /// Feromoon-exponent α.
    pub alpha: f64,
    /// Graad-exponent β.
    pub beta: f64,
    /// Degeneracy-exponent γ; 0 schakelt de core-heuristiek uit.
    pub gamma: f64,
    /// Conflict-exponent δ; 0 schakelt de dynamische heuristiek uit.
    pub delta: f64,
    /// Verdampingssnelheid ρ ∈ (0, 1].
    pub rho: f64,
    /// Ondergrens τ_min van het globale feromoongeheugen.
    pub tau_min: f64,
    /// Bovengrens τ_max van het globale feromoongeheugen.
    pub tau_max: f64,
    /// Budget van de lokale zoektocht; 0 schakelt haar uit, 1 staat 1-adds
    /// en 1-1 swaps toe, elk punt daarboven één extra 2-1 swap.
    pub ls_budget: usize,
    /// Zaad voor de random generator.
    pub seed: u64,
    /// Druk voortgangsregels af bij elke verbetering.
    pub verbose: bool,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            time_limit: 10.0,
            ants: 10,
            alpha: 1.0,
            beta: 2.0,
            gamma: 0.0,
            delta: 0.0,
            rho: 0.02,
            tau_min: 1.0,
            tau_max: 100.0,
            ls_budget: 0,
            seed: 42,
            verbose: false,
        }
    }
}

/// Ongeldige configuratie; de run begint niet.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("time limit must be positive, got {0}")]
    TimeLimit(f64),
    #[error("number of ants must be positive")]
    Ants,
    #[error("heuristic exponents must be non-negative")]
    Exponents,
    #[error("rho must be in (0, 1], got {0}")]
    Rho(f64),
    #[error("tau_min must be positive, got {0}")]
    TauMin(f64),
    #[error("tau_min must be less than tau_max, got [{0}, {1}]")]
    TauBounds(f64, f64),
}

impl Params {
    /// Controleert alle parametergrenzen in één keer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.time_limit > 0.0) {
            return Err(ConfigError::TimeLimit(self.time_limit));
        }
        if self.ants == 0 {
            return Err(ConfigError::Ants);
        }
        if self.alpha < 0.0 || self.beta < 0.0 || self.gamma < 0.0 || self.delta < 0.0 {
            return Err(ConfigError::Exponents);
        }
        if !(self.rho > 0.0 && self.rho <= 1.0) {
            return Err(ConfigError::Rho(self.rho));
        }
        if !(self.tau_min > 0.0) {
            return Err(ConfigError::TauMin(self.tau_min));
        }
        if !(self.tau_min < self.tau_max) {
            return Err(ConfigError::TauBounds(self.tau_min, self.tau_max));
        }
        Ok(())
    }
}
