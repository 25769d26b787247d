use crate::types::Action;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Genome representation for the action-sequence search
///
/// A genome is a fixed-length sequence of [`Action`]s that is fed to an
/// `AgentSimulator` one action per tick. It carries a read cursor so the same
/// allocation can be replayed many times (evaluation, then any replay pass),
/// and the fitness assigned by its most recent evaluation.
///
/// # Why a flat action list?
///
/// - **Crossover**: per-index mixing of two parents is trivial
/// - **Mutation**: any position can be resampled independently
/// - **No invalid states**: every sequence is a playable run
///
/// # Example
///
/// ```
/// use runnerga::engines::generation::Genome;
///
/// let mut genome: Genome = "GGJ".parse().unwrap();
/// assert_eq!(genome.next_action().symbol(), 'G');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    actions: Vec<Action>,
    #[serde(skip)]
    cursor: usize,
    fitness: i64,
}

impl Genome {
    pub fn from_actions(actions: Vec<Action>) -> Self {
        Self {
            actions,
            cursor: 0,
            fitness: 0,
        }
    }

    /// Independent uniform choice over the three actions at every position
    pub fn random<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        Self::from_actions((0..length).map(|_| rng.gen()).collect())
    }

    /// Return the action under the cursor and advance.
    ///
    /// Panics once the sequence is exhausted; check [`Genome::at_end`] first.
    pub fn next_action(&mut self) -> Action {
        assert!(
            !self.at_end(),
            "next_action past the end of a {}-action genome",
            self.actions.len()
        );
        let action = self.actions[self.cursor];
        self.cursor += 1;
        action
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.actions.len()
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub(crate) fn actions_mut(&mut self) -> &mut [Action] {
        &mut self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn fitness(&self) -> i64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: i64) {
        self.fitness = fitness;
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for action in &self.actions {
            write!(f, "{}", action)?;
        }
        Ok(())
    }
}

impl FromStr for Genome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Action::from_symbol(c).ok_or_else(|| format!("unknown action '{}'", c)))
            .collect::<Result<Vec<_>, _>>()
            .map(Genome::from_actions)
    }
}
