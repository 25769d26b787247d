use crate::error::{Result, RunnerError};
use crate::types::{Position, Tile};
use std::collections::{BTreeMap, HashMap};

/// Precomputed partner lookup for the `0`-`9` teleport tiles
#[derive(Debug, Clone, Default)]
pub struct TeleportMap {
    partners: HashMap<Position, Position>,
}

impl TeleportMap {
    /// Scan the grid once and pair every digit with its single twin.
    pub fn build(rows: &[Vec<Tile>]) -> Result<Self> {
        let mut occurrences: BTreeMap<u8, Vec<Position>> = BTreeMap::new();

        for (y, row) in rows.iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                if let Tile::Teleport(digit) = tile {
                    occurrences.entry(*digit).or_default().push(Position::new(x, y));
                }
            }
        }

        let mut partners = HashMap::with_capacity(occurrences.len() * 2);
        for (digit, positions) in occurrences {
            match positions.as_slice() {
                [a, b] => {
                    partners.insert(*a, *b);
                    partners.insert(*b, *a);
                }
                other => {
                    return Err(RunnerError::MalformedLevel(format!(
                        "teleport tile '{}' appears {} time(s), expected exactly 2",
                        digit,
                        other.len()
                    )));
                }
            }
        }

        Ok(Self { partners })
    }

    pub fn partner(&self, at: Position) -> Option<Position> {
        self.partners.get(&at).copied()
    }

    /// Number of teleport pairs
    pub fn len(&self) -> usize {
        self.partners.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(s: &str) -> Vec<Tile> {
        s.chars().map(Tile::from_symbol).collect()
    }

    #[test]
    fn test_pairs_are_bidirectional() {
        let rows = vec![row("1  2"), row("2 1 ")];
        let map = TeleportMap::build(&rows).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.partner(Position::new(0, 0)), Some(Position::new(2, 1)));
        assert_eq!(map.partner(Position::new(2, 1)), Some(Position::new(0, 0)));
        assert_eq!(map.partner(Position::new(3, 0)), Some(Position::new(0, 1)));
        assert_eq!(map.partner(Position::new(1, 0)), None);
    }

    #[test]
    fn test_unpaired_digit_rejected() {
        let err = TeleportMap::build(&[row("  5  ")]).unwrap_err();
        assert!(matches!(err, RunnerError::MalformedLevel(_)));
    }

    #[test]
    fn test_triple_digit_rejected() {
        let err = TeleportMap::build(&[row("4 4"), row("4")]).unwrap_err();
        assert!(err.to_string().contains("3 time(s)"));
    }
}
