use crate::plateau::position::Position;
use std::fmt;

/// Rectangular grid with inclusive bounds and the squares rovers currently hold
#[derive(Clone, Debug)]
pub struct Plateau {
    min: Position,
    max: Position,
    /// One entry per deployed rover; never deduplicated here
    unavailable: Vec<Position>,
}

impl Plateau {
    /// Create a plateau spanning `min..=max` on both axes
    pub fn new(min: Position, max: Position) -> Self {
        Self {
            min,
            max,
            unavailable: Vec::new(),
        }
    }

    /// Create a plateau whose bottom-left corner is the origin
    pub fn with_upper_right(max: Position) -> Self {
        Self::new(Position::origin(), max)
    }

    #[inline]
    pub fn min(&self) -> Position {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Position {
        self.max
    }

    /// Squares currently held by rovers, in registration order
    #[inline]
    pub fn unavailable(&self) -> &[Position] {
        &self.unavailable
    }

    /// Check whether `position` lies inside the bounds
    pub fn is_reachable(&self, position: Position) -> bool {
        (self.min.x()..=self.max.x()).contains(&position.x())
            && (self.min.y()..=self.max.y()).contains(&position.y())
    }

    /// Check whether no rover holds `position`
    pub fn is_available(&self, position: Position) -> bool {
        !self.unavailable.contains(&position)
    }

    /// Mark `position` as held. Callers check availability first.
    pub fn add_unavailable(&mut self, position: Position) {
        self.unavailable.push(position);
    }

    /// Move a held square from `prev` to `next`
    ///
    /// # Panics
    /// Panics if `prev` was never marked as held; that means the occupancy
    /// list is out of sync with the rovers.
    pub fn update_unavailable(&mut self, prev: Position, next: Position) {
        let Some(slot) = self.unavailable.iter_mut().find(|p| **p == prev) else {
            panic!(
                "Invalid state of plateau. Previous position is not present in \
                 unavailable position list. Previous position: {}",
                prev
            );
        };
        *slot = next;
    }
}

impl fmt::Display for Plateau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ({}) ... ({}) ]", self.min, self.max)
    }
}
