use crate::direction::Direction;
use crate::plateau::coordinate::Coordinate;
use std::fmt;

/// One square on the plateau
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    x: Coordinate,
    y: Coordinate,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            x: Coordinate::new(x),
            y: Coordinate::new(y),
        }
    }

    /// Bottom-left corner of every plateau
    #[inline]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    #[inline]
    pub const fn x(&self) -> Coordinate {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> Coordinate {
        self.y
    }

    /// Step one square in `direction`, touching only that axis
    pub fn move_towards(&mut self, direction: Direction) {
        match direction {
            Direction::N => self.y.up(),
            Direction::E => self.x.up(),
            Direction::S => self.y.down(),
            Direction::W => self.x.down(),
        }
    }

    /// Copy of this position stepped one square in `direction`
    #[must_use]
    pub fn moved(mut self, direction: Direction) -> Self {
        self.move_towards(direction);
        self
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_changes_one_axis() {
        let start = Position::new(2, 2);

        assert_eq!(start.moved(Direction::N), Position::new(2, 3));
        assert_eq!(start.moved(Direction::E), Position::new(3, 2));
        assert_eq!(start.moved(Direction::S), Position::new(2, 1));
        assert_eq!(start.moved(Direction::W), Position::new(1, 2));
    }

    #[test]
    fn test_move_towards_in_place() {
        let mut p = Position::origin();

        p.move_towards(Direction::E);
        p.move_towards(Direction::E);
        p.move_towards(Direction::N);
        assert_eq!(p.x().value(), 2);
        assert_eq!(p.y().value(), 1);

        p.move_towards(Direction::W);
        p.move_towards(Direction::S);
        p.move_towards(Direction::S);
        assert_eq!(p, Position::new(1, -1));
    }

    #[test]
    fn test_copy_does_not_alias() {
        let mut current = Position::new(1, 2);
        let recorded = current;

        current.move_towards(Direction::N);

        assert_eq!(recorded, Position::new(1, 2));
        assert_ne!(recorded, current);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Position::new(3, 4), Position::new(3, 4));
        assert_ne!(Position::new(3, 4), Position::new(4, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(5, -1).to_string(), "5 -1");
    }
}
