use crate::config::{ConfigSection, EvolutionConfig};
use crate::course::Course;
use crate::engines::evaluation::evaluate_fitness;
use crate::engines::generation::{
    genome::Genome,
    hall_of_fame::{Champion, HallOfFame},
    operators::{next_generation, random_population},
};
use crate::engines::simulation::RunState;
use crate::error::RunnerError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Fitness summary of one evaluated generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: usize,
    pub best: i64,
    pub worst: i64,
    pub mean: f64,
    pub goal_reached: usize,
}

impl GenerationStats {
    fn collect(generation: usize, population: &[Genome], goal_reached: usize) -> Self {
        let best = population.iter().map(Genome::fitness).max().unwrap_or(0);
        let worst = population.iter().map(Genome::fitness).min().unwrap_or(0);
        let total: i64 = population.iter().map(Genome::fitness).sum();
        let mean = if population.is_empty() {
            0.0
        } else {
            total as f64 / population.len() as f64
        };

        Self {
            generation,
            best,
            worst,
            mean,
            goal_reached,
        }
    }
}

/// Best-ever genome plus per-generation history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionResult {
    pub best_genome: Genome,
    pub best_score: i64,
    pub best_generation: usize,
    pub history: Vec<GenerationStats>,
}

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_genome_evaluated(&mut self, genome_num: usize, total: usize);
    fn on_generation_complete(&mut self, stats: &GenerationStats, best_ever: i64);
}

pub struct EvolutionEngine {
    config: EvolutionConfig,
    hall_of_fame: HallOfFame,
    rng: StdRng,
}

impl EvolutionEngine {
    /// Validates the configuration up front; a constructed engine cannot fail.
    pub fn new(config: EvolutionConfig) -> Result<Self, RunnerError> {
        config.validate()?;
        let rng = StdRng::seed_from_u64(config.seed);

        Ok(Self {
            config,
            hall_of_fame: HallOfFame::new(),
            rng,
        })
    }

    /// Run the evolution process
    ///
    /// Every generation is fully evaluated, folded into the best-ever record,
    /// then replaced by a bred population. Equal seeds give equal results.
    pub fn run<C: ProgressCallback>(mut self, course: &Course, mut callback: C) -> EvolutionResult {
        let mut population = self.initialize_population();
        let mut history = Vec::with_capacity(self.config.num_generations);

        log::info!(
            "Evolving {} genomes of {} actions for {} generations (seed {})",
            self.config.population_size,
            self.config.genome_length,
            self.config.num_generations,
            self.config.seed
        );

        for generation in 0..self.config.num_generations {
            callback.on_generation_start(generation);

            let goal_reached = self.evaluate_population(&mut population, course, &mut callback);
            self.hall_of_fame.update(generation, &population);

            let stats = GenerationStats::collect(generation, &population, goal_reached);
            let best_ever = self.hall_of_fame.best_score().unwrap_or(stats.best);
            callback.on_generation_complete(&stats, best_ever);
            history.push(stats);

            if generation + 1 == self.config.num_generations {
                break;
            }

            population = next_generation(
                &mut population,
                self.config.exploration_rate,
                self.config.mutation_rate,
                &mut self.rng,
            );
        }

        // num_generations >= 1 and population_size >= 2, so a champion exists.
        let Champion {
            genome,
            score,
            generation,
        } = self
            .hall_of_fame
            .into_champion()
            .unwrap_or_else(|| unreachable!("validated run evaluated no genomes"));

        EvolutionResult {
            best_genome: genome,
            best_score: score,
            best_generation: generation,
            history,
        }
    }

    fn initialize_population(&mut self) -> Vec<Genome> {
        random_population(
            self.config.population_size,
            self.config.genome_length,
            &mut self.rng,
        )
    }

    fn evaluate_population<C: ProgressCallback>(
        &self,
        population: &mut [Genome],
        course: &Course,
        callback: &mut C,
    ) -> usize {
        let total = population.len();
        let mut goal_reached = 0;

        for (i, genome) in population.iter_mut().enumerate() {
            let evaluation = evaluate_fitness(genome, course);
            log::trace!(
                "  [{}] score {} after {} ticks ({:?})",
                i + 1,
                evaluation.score,
                evaluation.ticks,
                evaluation.state
            );
            if evaluation.state == RunState::GoalReached {
                goal_reached += 1;
            }
            callback.on_genome_evaluated(i + 1, total);
        }

        goal_reached
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }
}
