use crate::error::{Result, SimulationError};
use crate::plateau::{Plateau, Position};

/// Check that rover `ordinal` may stand on `position`.
///
/// Bounds are checked before occupancy, so a square that is both off the
/// plateau and held reports a fall.
pub fn validate_position(plateau: &Plateau, position: Position, ordinal: usize) -> Result<()> {
    if !plateau.is_reachable(position) {
        return Err(SimulationError::RoverFallAndCrash {
            rover: ordinal,
            position,
            plateau: plateau.to_string(),
        });
    }
    if !plateau.is_available(position) {
        return Err(SimulationError::RoverCollision {
            rover: ordinal,
            position,
        });
    }
    Ok(())
}
