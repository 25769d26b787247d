use crate::course::Course;
use crate::types::{Position, PLAYER_SYMBOL};
use serde::{Deserialize, Serialize};

/// A full-height, horizontally scrolled window over the course with the
/// agent drawn as [`PLAYER_SYMBOL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    /// Course column shown in the leftmost screen column
    pub left: usize,
    pub rows: Vec<Vec<char>>,
}

impl Screen {
    /// Keeps the agent centered, clamping the window at the course edges.
    /// A `width` wider than the course shows the whole course.
    pub fn capture(course: &Course, agent: Position, width: usize) -> Self {
        let visible = width.min(course.width());
        let max_left = course.width() - visible;
        let left = agent.x.saturating_sub(visible / 2).min(max_left);

        let mut rows: Vec<Vec<char>> = (0..course.height())
            .map(|y| {
                (left..left + visible)
                    .map(|x| course.tile_at(x, y).symbol())
                    .collect()
            })
            .collect();

        if agent.x >= left && agent.x < left + visible {
            rows[agent.y][agent.x - left] = PLAYER_SYMBOL;
        }

        Self { left, rows }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.iter().collect()).collect()
    }
}
