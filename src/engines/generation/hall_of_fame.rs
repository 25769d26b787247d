use crate::engines::generation::genome::Genome;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Champion {
    pub genome: Genome,
    pub score: i64,
    pub generation: usize,
}

/// Best-ever genome across all generations.
///
/// Updated once per generation by reducing over the evaluated population, so
/// evaluation order within a generation never races with the record.
#[derive(Debug, Default)]
pub struct HallOfFame {
    champion: Option<Champion>,
}

impl HallOfFame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a scored population into the record. Only a strictly greater
    /// score replaces the champion, so the earliest of equal scores wins.
    /// Returns true if the record changed.
    pub fn update(&mut self, generation: usize, population: &[Genome]) -> bool {
        let mut improved = false;

        for genome in population {
            let beats = self
                .champion
                .as_ref()
                .map_or(true, |c| genome.fitness() > c.score);

            if beats {
                let mut kept = genome.clone();
                kept.reset_cursor();
                self.champion = Some(Champion {
                    score: genome.fitness(),
                    genome: kept,
                    generation,
                });
                improved = true;
            }
        }

        if improved {
            if let Some(champion) = &self.champion {
                log::info!(
                    "New best score {} in generation {}",
                    champion.score,
                    generation + 1
                );
            }
        }

        improved
    }

    pub fn champion(&self) -> Option<&Champion> {
        self.champion.as_ref()
    }

    pub fn best_score(&self) -> Option<i64> {
        self.champion.as_ref().map(|c| c.score)
    }

    pub fn into_champion(self) -> Option<Champion> {
        self.champion
    }

    pub fn is_empty(&self) -> bool {
        self.champion.is_none()
    }
}
