//! Initial population generation

use podium_core::limits::{DEFAULT_NAME_POOL, DEFAULT_POPULATION, DEFAULT_RATING_RANGE};
use podium_core::{Participant, ScoreRange};
use rand::Rng;

/// Parameters for seeding the index population.
///
/// Seeding happens once at startup; the population never grows or shrinks
/// afterwards.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Number of records to create.
    pub population: usize,
    /// Base names drawn with repetition for usernames. Must be non-empty.
    pub name_pool: Vec<String>,
    /// Rating bounds for the initial draw and later perturbation.
    pub rating_range: ScoreRange,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            population: DEFAULT_POPULATION,
            name_pool: DEFAULT_NAME_POOL.iter().map(|s| s.to_string()).collect(),
            rating_range: DEFAULT_RATING_RANGE,
        }
    }
}

/// Generate `config.population` records named `<base>_<i>` with a uniform
/// rating draw. The sequence suffix keeps usernames unique even when base
/// names repeat across draws.
pub(crate) fn generate<R: Rng>(config: &SeedConfig, rng: &mut R) -> Vec<Participant> {
    assert!(
        !config.name_pool.is_empty(),
        "seed name pool must not be empty"
    );
    let mut records = Vec::with_capacity(config.population);
    for i in 0..config.population {
        let base = &config.name_pool[rng.gen_range(0..config.name_pool.len())];
        let rating = rng.gen_range(config.rating_range.min..=config.rating_range.max);
        records.push(Participant::new(format!("{}_{}", base, i), rating));
    }
    records
}
