use std::fmt;
use std::str::FromStr;

use super::Direction;
use crate::error::ParseError;

/// Corridor openings of one cell, one bit per direction in
/// (UP, RIGHT, DOWN, LEFT) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile {
    openings: u8,
}

impl Tile {
    pub fn can_go(self, dir: Direction) -> bool {
        self.openings & (1 << dir.index()) != 0
    }
}

impl FromStr for Tile {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidTile {
            token: s.to_string(),
        };
        if s.len() != 4 {
            return Err(invalid());
        }
        let mut openings = 0u8;
        for (i, c) in s.chars().enumerate() {
            match c {
                '1' => openings |= 1 << i,
                '0' => {}
                _ => return Err(invalid()),
            }
        }
        Ok(Tile { openings })
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dir in Direction::ALL {
            f.write_str(if self.can_go(dir) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_go() {
        let t: Tile = "1010".parse().unwrap();
        assert!(t.can_go(Direction::Up));
        assert!(!t.can_go(Direction::Right));
        assert!(t.can_go(Direction::Down));
        assert!(!t.can_go(Direction::Left));
    }

    #[test]
    fn test_can_go_matches_pattern_bit_for_every_tile() {
        for bits in 0u8..16 {
            let pattern: String = (0..4)
                .map(|i| if bits & (1 << i) != 0 { '1' } else { '0' })
                .collect();
            let tile: Tile = pattern.parse().unwrap();
            for dir in Direction::ALL {
                let expected = pattern.as_bytes()[dir.index()] == b'1';
                assert_eq!(tile.can_go(dir), expected, "{pattern} {dir}");
            }
            assert_eq!(tile.to_string(), pattern);
        }
    }

    #[test]
    fn test_rejects_malformed_pattern() {
        assert!("101".parse::<Tile>().is_err());
        assert!("10101".parse::<Tile>().is_err());
        assert!("10a1".parse::<Tile>().is_err());
    }
}
