use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbol drawn over the agent's cell in a viewport window
pub const PLAYER_SYMBOL: char = '&';

/// One move fed to the simulator per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Stay,
    Go,
    Jump,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Stay, Action::Go, Action::Jump];

    pub fn symbol(self) -> char {
        match self {
            Action::Stay => 'S',
            Action::Go => 'G',
            Action::Jump => 'J',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Action> {
        match symbol.to_ascii_uppercase() {
            'S' => Some(Action::Stay),
            'G' => Some(Action::Go),
            'J' => Some(Action::Jump),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Uniform over the three actions, so `rng.gen::<Action>()` works anywhere.
impl Distribution<Action> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Action {
        Action::ALL[rng.gen_range(0..Action::ALL.len())]
    }
}

/// Terrain of a single course cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Space,
    Wall,
    Death,
    Goal,
    /// Paired teleporter, `0`-`9`
    Teleport(u8),
    /// Any other printable symbol. Behaves like `Space`.
    Filler(char),
}

impl Tile {
    pub const SPACE: char = ' ';
    pub const WALL: char = '#';
    pub const DEATH: char = 'v';
    pub const GOAL: char = '|';

    pub fn from_symbol(symbol: char) -> Tile {
        match symbol {
            Self::SPACE => Tile::Space,
            Self::WALL => Tile::Wall,
            Self::DEATH => Tile::Death,
            Self::GOAL => Tile::Goal,
            '0'..='9' => Tile::Teleport(symbol as u8 - b'0'),
            c if c.is_control() => Tile::Space,
            c => Tile::Filler(c),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Tile::Space => Self::SPACE,
            Tile::Wall => Self::WALL,
            Tile::Death => Self::DEATH,
            Tile::Goal => Self::GOAL,
            Tile::Teleport(digit) => (b'0' + digit) as char,
            Tile::Filler(c) => c,
        }
    }
}

/// Grid coordinate; `y` grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tile_symbols() {
        for symbol in [' ', '#', 'v', '|', '0', '7', '9', '.'] {
            assert_eq!(Tile::from_symbol(symbol).symbol(), symbol);
        }
        assert_eq!(Tile::from_symbol('3'), Tile::Teleport(3));
        assert_eq!(Tile::from_symbol('\t'), Tile::Space);
    }

    #[test]
    fn test_random_action_covers_all() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..100 {
            let action: Action = rng.gen();
            seen[Action::ALL.iter().position(|a| *a == action).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_action_symbols() {
        assert_eq!(Action::from_symbol('g'), Some(Action::Go));
        assert_eq!(Action::from_symbol('x'), None);
        assert_eq!(Action::Jump.to_string(), "J");
    }
}
