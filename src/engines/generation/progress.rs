use super::evolution_engine::{GenerationStats, ProgressCallback};

/// Reports progress through the `log` facade
pub struct LogProgressCallback {
    total_generations: usize,
}

impl LogProgressCallback {
    pub fn new(total_generations: usize) -> Self {
        Self { total_generations }
    }
}

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("Generation {}/{} starting...", generation + 1, self.total_generations);
    }

    fn on_genome_evaluated(&mut self, genome_num: usize, total: usize) {
        if genome_num % 10 == 0 || genome_num == total {
            log::trace!("  Evaluated {}/{} genomes", genome_num, total);
        }
    }

    fn on_generation_complete(&mut self, stats: &GenerationStats, best_ever: i64) {
        log::info!(
            "Generation {}/{}: best {}, mean {:.1}, goals {}, best ever {}",
            stats.generation + 1,
            self.total_generations,
            stats.best,
            stats.mean,
            stats.goal_reached,
            best_ever
        );
    }
}

// For embedding callers running the engine on another thread
pub struct ChannelProgressCallback {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenomeEvaluated { current: usize, total: usize },
    GenerationComplete { stats: GenerationStats, best_ever: i64 },
}

impl ChannelProgressCallback {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_genome_evaluated(&mut self, genome_num: usize, total: usize) {
        let _ = self.sender.send(ProgressMessage::GenomeEvaluated {
            current: genome_num,
            total,
        });
    }

    fn on_generation_complete(&mut self, stats: &GenerationStats, best_ever: i64) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            stats: stats.clone(),
            best_ever,
        });
    }
}
