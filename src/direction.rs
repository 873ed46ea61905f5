use crate::error::SimulationError;
use std::fmt;
use std::str::FromStr;

/// Compass headings, declared clockwise so turning is index arithmetic
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    N = 0,
    E = 1,
    S = 2,
    W = 3,
}

impl FromStr for Direction {
    type Err = SimulationError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            b"N" => Ok(Direction::N),
            b"E" => Ok(Direction::E),
            b"S" => Ok(Direction::S),
            b"W" => Ok(Direction::W),
            _ => Err(SimulationError::InvalidInput(format!(
                "Unknown direction string : {}",
                s
            ))),
        }
    }
}

impl Direction {
    /// All headings in clockwise order
    pub const ALL: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    /// Position of this heading in the clockwise cycle
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Heading after a quarter turn counter-clockwise
    #[inline]
    pub const fn turn_left(self) -> Direction {
        Self::ALL[(self.index() + 3) % 4]
    }

    /// Heading after a quarter turn clockwise
    #[inline]
    pub const fn turn_right(self) -> Direction {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Get heading name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::E => "E",
            Direction::S => "S",
            Direction::W => "W",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for direction in Direction::ALL {
            let parsed: Direction = direction.as_str().parse().unwrap();
            assert_eq!(parsed, direction);
            assert_eq!(parsed.to_string(), direction.as_str());
        }
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        for bad in ["n", "north", "X", "", " N", "NE"] {
            let err = bad.parse::<Direction>().unwrap_err();
            assert!(matches!(err, SimulationError::InvalidInput(_)), "{bad:?}");
        }
    }

    #[test]
    fn test_turn_right_cycles_clockwise() {
        let mut heading = Direction::N;
        let mut seen = Vec::new();
        for _ in 0..4 {
            heading = heading.turn_right();
            seen.push(heading);
        }
        assert_eq!(seen, [Direction::E, Direction::S, Direction::W, Direction::N]);
    }

    #[test]
    fn test_turn_left_cycles_counter_clockwise() {
        assert_eq!(Direction::N.turn_left(), Direction::W);
        assert_eq!(Direction::W.turn_left(), Direction::S);
        assert_eq!(Direction::S.turn_left(), Direction::E);
        assert_eq!(Direction::E.turn_left(), Direction::N);
    }

    #[test]
    fn test_turns_are_inverse() {
        for direction in Direction::ALL {
            assert_eq!(direction.turn_left().turn_right(), direction);
            assert_eq!(direction.turn_right().turn_left(), direction);
        }
    }

    #[test]
    fn test_random_turn_sequences_track_net_rotation() {
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..200 {
            let start = Direction::ALL[rng.usize(..4)];
            let mut heading = start;
            let mut quarter_turns: i32 = 0;
            for _ in 0..rng.usize(0..32) {
                if rng.bool() {
                    heading = heading.turn_right();
                    quarter_turns += 1;
                } else {
                    heading = heading.turn_left();
                    quarter_turns -= 1;
                }
            }
            let expected = (start.index() as i32 + quarter_turns).rem_euclid(4) as usize;
            assert_eq!(heading, Direction::ALL[expected]);
        }
    }
}
