use runnerga::config::EvolutionConfig;
use runnerga::engines::evaluation::evaluate_fitness;
use runnerga::engines::generation::{
    ChannelProgressCallback, EvolutionEngine, EvolutionResult, GenerationStats, ProgressCallback,
    ProgressMessage,
};
use runnerga::engines::simulation::RunState;
use runnerga::{Course, RunnerError};
use std::sync::mpsc::channel;

/// Progress callback that ignores everything
struct SilentProgress;

impl ProgressCallback for SilentProgress {
    fn on_generation_start(&mut self, _generation: usize) {}
    fn on_genome_evaluated(&mut self, _genome_num: usize, _total: usize) {}
    fn on_generation_complete(&mut self, _stats: &GenerationStats, _best_ever: i64) {}
}

/// Create a minimal evolution config for fast testing
fn create_test_evolution_config(seed: u64) -> EvolutionConfig {
    EvolutionConfig {
        population_size: 10,
        num_generations: 12,
        genome_length: 60,
        mutation_rate: 0.01,
        exploration_rate: 0.2,
        seed,
    }
}

fn run(course: &Course, config: EvolutionConfig) -> EvolutionResult {
    EvolutionEngine::new(config)
        .expect("valid config")
        .run(course, SilentProgress)
}

#[test]
fn test_same_seed_same_result() {
    let course = Course::from_file("levels/field1.txt").unwrap();

    let first = run(&course, create_test_evolution_config(42));
    let second = run(&course, create_test_evolution_config(42));

    assert_eq!(first.best_score, second.best_score);
    assert_eq!(first.best_genome.actions(), second.best_genome.actions());
    assert_eq!(first.best_generation, second.best_generation);
    assert_eq!(first.history, second.history);
}

#[test]
fn test_best_ever_is_max_over_history() {
    let course = Course::parse("   #      \n###### ###\n          ").unwrap();
    let result = run(&course, create_test_evolution_config(7));

    assert_eq!(result.history.len(), 12);
    let max_best = result.history.iter().map(|s| s.best).max().unwrap();
    assert_eq!(result.best_score, max_best);
    assert_eq!(result.history[result.best_generation].best, result.best_score);

    // The first generation reaching the record is the one credited.
    assert!(result.history[..result.best_generation]
        .iter()
        .all(|s| s.best < result.best_score));
}

#[test]
fn test_champion_replays_to_its_score() {
    let course = Course::from_file("levels/field1.txt").unwrap();
    let result = run(&course, create_test_evolution_config(1234));

    let mut genome = result.best_genome.clone();
    let eval = evaluate_fitness(&mut genome, &course);

    assert_eq!(eval.score, result.best_score);
    assert_eq!(genome.len(), 60);
}

#[test]
fn test_flat_course_is_solved() {
    let course = Course::parse("          \n##########").unwrap();
    let config = EvolutionConfig {
        num_generations: 3,
        genome_length: 50,
        ..create_test_evolution_config(99)
    };

    let result = run(&course, config);
    let mut genome = result.best_genome.clone();
    let eval = evaluate_fitness(&mut genome, &course);

    assert_eq!(eval.state, RunState::GoalReached);
    assert!(result.best_score > 900 && result.best_score <= 1000);
    assert!(result.history.iter().all(|s| s.goal_reached > 0));
}

#[test]
fn test_odd_population_rejected_before_run() {
    let config = EvolutionConfig {
        population_size: 9,
        ..create_test_evolution_config(1)
    };

    assert!(matches!(
        EvolutionEngine::new(config),
        Err(RunnerError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_channel_progress_messages() {
    let course = Course::parse("    \n####").unwrap();
    let (tx, rx) = channel();
    let config = EvolutionConfig {
        population_size: 4,
        num_generations: 3,
        genome_length: 8,
        ..create_test_evolution_config(5)
    };

    let result = EvolutionEngine::new(config)
        .unwrap()
        .run(&course, ChannelProgressCallback::new(tx));
    let messages: Vec<ProgressMessage> = rx.try_iter().collect();

    // start + 4 evaluations + complete, per generation
    assert_eq!(messages.len(), 3 * 6);
    assert_eq!(messages[0], ProgressMessage::GenerationStart(0));
    assert_eq!(
        messages[4],
        ProgressMessage::GenomeEvaluated { current: 4, total: 4 }
    );
    match messages.last() {
        Some(ProgressMessage::GenerationComplete { stats, best_ever }) => {
            assert_eq!(stats.generation, 2);
            assert_eq!(*best_ever, result.best_score);
        }
        other => panic!("unexpected final message {:?}", other),
    }
}
