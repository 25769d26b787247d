use crate::engines::generation::genome::Genome;
use rand::seq::SliceRandom;
use rand::Rng;

/// Parent selection: shuffle (exploration) or elite pick (exploitation)
///
/// With probability `exploration_rate` the population is shuffled, otherwise
/// it is sorted ascending by fitness. Either way the last two genomes become
/// the parents. The reordering is left in place and carries over to the next
/// call, the same population slice being reused for every pair of children.
pub fn select_parents<'a, R: Rng + ?Sized>(
    population: &'a mut [Genome],
    exploration_rate: f64,
    rng: &mut R,
) -> (&'a Genome, &'a Genome) {
    assert!(
        population.len() >= 2,
        "parent selection needs at least two genomes, got {}",
        population.len()
    );

    if rng.gen_bool(exploration_rate) {
        population.shuffle(rng);
    } else {
        population.sort_by_key(Genome::fitness);
    }

    let n = population.len();
    (&population[n - 1], &population[n - 2])
}

/// Uniform crossover: a fair coin per index decides which parent feeds child A;
/// child B takes the other parent's action at that index.
pub fn crossover<R: Rng + ?Sized>(
    parent1: &Genome,
    parent2: &Genome,
    rng: &mut R,
) -> (Genome, Genome) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "crossover parents differ in length"
    );

    let (child1, child2) = parent1
        .actions()
        .iter()
        .zip(parent2.actions())
        .map(|(&a, &b)| if rng.gen::<bool>() { (a, b) } else { (b, a) })
        .unzip();

    (Genome::from_actions(child1), Genome::from_actions(child2))
}

/// Mutation: resample each position with probability `mutation_rate`
pub fn mutate<R: Rng + ?Sized>(genome: &mut Genome, mutation_rate: f64, rng: &mut R) {
    for action in genome.actions_mut() {
        if rng.gen::<f64>() < mutation_rate {
            *action = rng.gen();
        }
    }
}

/// Generate a random population of equal-length genomes
pub fn random_population<R: Rng + ?Sized>(
    population_size: usize,
    genome_length: usize,
    rng: &mut R,
) -> Vec<Genome> {
    (0..population_size)
        .map(|_| Genome::random(genome_length, rng))
        .collect()
}

/// Breed a replacement population of the same (even) size.
///
/// Selection is re-rolled for every pair of children.
pub fn next_generation<R: Rng + ?Sized>(
    population: &mut [Genome],
    exploration_rate: f64,
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<Genome> {
    let target = population.len();
    let mut children = Vec::with_capacity(target);

    while children.len() < target {
        let (parent1, parent2) = select_parents(population, exploration_rate, rng);
        let (mut child1, mut child2) = crossover(parent1, parent2, rng);

        mutate(&mut child1, mutation_rate, rng);
        mutate(&mut child2, mutation_rate, rng);

        children.push(child1);
        children.push(child2);
    }

    children
}
