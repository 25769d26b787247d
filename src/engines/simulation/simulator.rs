use super::viewport::Screen;
use crate::course::Course;
use crate::types::{Action, Position, Tile};
use serde::{Deserialize, Serialize};

/// Bonus added to the x coordinate when the agent reaches a GOAL tile
pub const GOAL_BONUS: i64 = 1000;

/// Maximum number of tiles a single jump can rise
pub const JUMP_HEIGHT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Running,
    GoalReached,
    Dead,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        self != RunState::Running
    }
}

/// Drives one agent through a shared [`Course`], one tick per action.
///
/// The agent starts at the top-left cell. Each `step` moves it according to
/// the action, applies one tile of gravity, records the x coordinate as the
/// running score, resolves teleports, and finally checks for GOAL or DEATH.
#[derive(Debug, Clone)]
pub struct AgentSimulator<'a> {
    course: &'a Course,
    position: Position,
    score: i64,
    tick: u64,
    state: RunState,
}

impl<'a> AgentSimulator<'a> {
    pub fn new(course: &'a Course) -> Self {
        Self {
            course,
            position: Position::ORIGIN,
            score: 0,
            tick: 0,
            state: RunState::Running,
        }
    }

    /// Advance one tick. Panics if the run has already ended.
    pub fn step(&mut self, action: Action) -> RunState {
        assert!(
            self.state == RunState::Running,
            "step({}) applied after run ended in state {:?}",
            action,
            self.state
        );

        self.tick += 1;

        match action {
            Action::Stay => {}
            Action::Go => {
                let Position { x, y } = self.position;
                if self.course.tile_at(x + 1, y) != Tile::Wall {
                    self.position.x += 1;
                }
            }
            Action::Jump => {
                if self.is_grounded() {
                    self.rise();
                }
            }
        }

        if !self.is_grounded() {
            self.position.y += 1;
        }

        self.score = self.position.x as i64;

        if let Tile::Teleport(_) = self.course.tile(self.position) {
            let from = self.position;
            self.position = self.course.teleport_target(from.x, from.y);
            log::trace!("tick {}: teleport {} -> {}", self.tick, from, self.position);
        }

        match self.course.tile(self.position) {
            Tile::Goal => {
                self.score = self.position.x as i64 + GOAL_BONUS - self.tick as i64;
                self.state = RunState::GoalReached;
            }
            Tile::Death => {
                self.state = RunState::Dead;
            }
            _ => {}
        }

        self.state
    }

    fn is_grounded(&self) -> bool {
        let Position { x, y } = self.position;
        self.course.tile_at(x, y + 1) == Tile::Wall
    }

    fn rise(&mut self) {
        for _ in 0..JUMP_HEIGHT {
            let Position { x, y } = self.position;
            if y == 0 {
                break;
            }
            match self.course.tile_at(x, y - 1) {
                Tile::Wall | Tile::Death => break,
                _ => self.position.y -= 1,
            }
        }
    }

    /// Viewport window around the agent, `width` columns wide
    pub fn screen(&self, width: usize) -> Screen {
        Screen::capture(self.course, self.position, width)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let course = Course::parse("   \n###").unwrap();
        let sim = AgentSimulator::new(&course);

        assert_eq!(sim.position(), Position::ORIGIN);
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.tick(), 0);
        assert!(sim.is_running());
    }

    #[test]
    fn test_stay_on_ground() {
        let course = Course::parse("   \n###").unwrap();
        let mut sim = AgentSimulator::new(&course);

        assert_eq!(sim.step(Action::Stay), RunState::Running);
        assert_eq!(sim.position(), Position::ORIGIN);
        assert_eq!(sim.tick(), 1);
    }

    #[test]
    fn test_gravity_one_tile_per_tick() {
        let course = Course::parse("  \n  \n  \n##").unwrap();
        let mut sim = AgentSimulator::new(&course);

        sim.step(Action::Stay);
        assert_eq!(sim.position().y, 1);
        sim.step(Action::Stay);
        assert_eq!(sim.position().y, 2);
        sim.step(Action::Stay);
        assert_eq!(sim.position().y, 2);
    }

    #[test]
    fn test_jump_rises_exactly_three() {
        // Five rows of air above the floor; the agent settles on y = 4.
        let course = Course::parse("  \n  \n  \n  \n  \n##").unwrap();
        let mut sim = AgentSimulator::new(&course);
        for _ in 0..4 {
            sim.step(Action::Stay);
        }
        assert_eq!(sim.position().y, 4);

        sim.step(Action::Jump);
        // Rose to y = 1, then one tile of gravity in the same tick.
        assert_eq!(sim.position().y, 2);
    }

    #[test]
    fn test_fall_into_death_row() {
        let course = Course::parse(" \n ").unwrap();
        let mut sim = AgentSimulator::new(&course);

        assert_eq!(sim.step(Action::Stay), RunState::Running);
        assert_eq!(sim.step(Action::Stay), RunState::Dead);
        assert_eq!(sim.position(), Position::new(0, 2));
        assert_eq!(sim.score(), 0);
    }

    #[test]
    #[should_panic(expected = "after run ended")]
    fn test_step_after_end_panics() {
        let course = Course::parse(" ").unwrap();
        let mut sim = AgentSimulator::new(&course);
        assert_eq!(sim.step(Action::Stay), RunState::Dead);
        sim.step(Action::Go);
    }
}
