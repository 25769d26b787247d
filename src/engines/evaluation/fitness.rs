use crate::course::Course;
use crate::engines::generation::Genome;
use crate::engines::simulation::{AgentSimulator, RunState};
use crate::types::Position;
use serde::{Deserialize, Serialize};

/// Outcome of simulating one genome to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: i64,
    pub ticks: u64,
    pub state: RunState,
    pub final_position: Position,
}

/// Run a genome from a fresh simulator until the run ends or the actions
/// run out, and store the final score as the genome's fitness.
///
/// An exhausted genome that never hit GOAL or DEATH keeps its last score.
pub fn evaluate_fitness(genome: &mut Genome, course: &Course) -> Evaluation {
    genome.reset_cursor();
    let mut simulator = AgentSimulator::new(course);

    while simulator.is_running() && !genome.at_end() {
        simulator.step(genome.next_action());
    }

    genome.set_fitness(simulator.score());

    Evaluation {
        score: simulator.score(),
        ticks: simulator.tick(),
        state: simulator.state(),
        final_position: simulator.position(),
    }
}
