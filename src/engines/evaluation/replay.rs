use crate::course::Course;
use crate::engines::generation::Genome;
use crate::engines::simulation::{AgentSimulator, RunState};
use crate::types::Position;
use serde::{Deserialize, Serialize};

/// Snapshot of a run after a given tick, with its viewport window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub position: Position,
    pub score: i64,
    pub state: RunState,
    pub screen: Vec<String>,
}

impl Frame {
    fn capture(simulator: &AgentSimulator<'_>, viewport_width: usize) -> Self {
        Self {
            tick: simulator.tick(),
            position: simulator.position(),
            score: simulator.score(),
            state: simulator.state(),
            screen: simulator.screen(viewport_width).lines(),
        }
    }
}

/// Replay a genome from the start, capturing the initial frame and one
/// frame per tick. Feeds a renderer; does not touch the genome's fitness.
pub fn replay(genome: &mut Genome, course: &Course, viewport_width: usize) -> Vec<Frame> {
    genome.reset_cursor();
    let mut simulator = AgentSimulator::new(course);
    let mut frames = vec![Frame::capture(&simulator, viewport_width)];

    while simulator.is_running() && !genome.at_end() {
        simulator.step(genome.next_action());
        frames.push(Frame::capture(&simulator, viewport_width));
    }

    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::evaluation::evaluate_fitness;
    use crate::types::PLAYER_SYMBOL;

    #[test]
    fn test_replay_matches_evaluation() {
        let course = Course::parse("    \n### ").unwrap();
        let mut genome: Genome = "GGGGG".parse().unwrap();

        let eval = evaluate_fitness(&mut genome, &course);
        let frames = replay(&mut genome, &course, 3);
        let last = frames.last().unwrap();

        assert_eq!(frames[0].tick, 0);
        assert_eq!(frames.len() as u64, eval.ticks + 1);
        assert_eq!(last.score, eval.score);
        assert_eq!(last.state, eval.state);
        assert_eq!(last.position, eval.final_position);
    }

    #[test]
    fn test_frames_mark_the_agent() {
        let course = Course::parse("   \n###").unwrap();
        let mut genome: Genome = "G".parse().unwrap();

        let frames = replay(&mut genome, &course, 4);

        assert_eq!(frames[0].screen[0].chars().next(), Some(PLAYER_SYMBOL));
        assert_eq!(frames[1].screen[0], format!(" {} |", PLAYER_SYMBOL));
    }
}
