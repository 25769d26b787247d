use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::RunnerError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub num_generations: usize,
    pub genome_length: usize,
    pub mutation_rate: f64,
    /// Chance per breeding round of shuffling instead of elite selection
    pub exploration_rate: f64,
    pub seed: u64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            num_generations: 3000,
            genome_length: 1000,
            mutation_rate: 0.005,
            exploration_rate: 0.2,
            seed: 5_467_890,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), RunnerError> {
        if self.population_size == 0 {
            return Err(RunnerError::InvalidConfiguration(
                "Population size must be positive".to_string(),
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(RunnerError::InvalidConfiguration(format!(
                "Population size must be even, got {}",
                self.population_size
            )));
        }
        if self.genome_length == 0 {
            return Err(RunnerError::InvalidConfiguration(
                "Genome length must be positive".to_string(),
            ));
        }
        if self.num_generations == 0 {
            return Err(RunnerError::InvalidConfiguration(
                "Generation count must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(RunnerError::InvalidConfiguration(
                "Mutation rate must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.exploration_rate) {
            return Err(RunnerError::InvalidConfiguration(
                "Exploration rate must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Evolution".to_string(),
            fields: vec![
                FieldManifest::new(
                    "population_size",
                    "integer",
                    serde_json::json!(self.population_size),
                    "Genomes per generation (even)",
                )
                .bounded(2.0, 10000.0),
                FieldManifest::new(
                    "num_generations",
                    "integer",
                    serde_json::json!(self.num_generations),
                    "Number of generations to run",
                )
                .bounded(1.0, 1_000_000.0),
                FieldManifest::new(
                    "genome_length",
                    "integer",
                    serde_json::json!(self.genome_length),
                    "Actions per genome",
                )
                .bounded(1.0, 1_000_000.0),
                FieldManifest::new(
                    "mutation_rate",
                    "float",
                    serde_json::json!(self.mutation_rate),
                    "Per-action resampling probability",
                )
                .bounded(0.0, 1.0),
                FieldManifest::new(
                    "exploration_rate",
                    "float",
                    serde_json::json!(self.exploration_rate),
                    "Probability of random parent order per breeding round",
                )
                .bounded(0.0, 1.0),
                FieldManifest::new(
                    "seed",
                    "integer",
                    serde_json::json!(self.seed),
                    "Random seed; equal seeds reproduce a run",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EvolutionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_odd_population_rejected() {
        let config = EvolutionConfig {
            population_size: 7,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, RunnerError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("even"));
    }

    #[test]
    fn test_zero_sizes_rejected() {
        for config in [
            EvolutionConfig { population_size: 0, ..Default::default() },
            EvolutionConfig { genome_length: 0, ..Default::default() },
            EvolutionConfig { num_generations: 0, ..Default::default() },
            EvolutionConfig { mutation_rate: 1.5, ..Default::default() },
        ] {
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_manifest_lists_every_field() {
        let manifest = EvolutionConfig::default().to_manifest();
        assert_eq!(manifest.fields.len(), 6);
        assert_eq!(manifest.fields[0].default, serde_json::json!(20));
    }
}
