use crate::plateau::Position;
use std::fmt;

/// Errors raised while loading or running a rover mission
#[derive(Debug)]
pub enum SimulationError {
    /// Reading the mission input or writing results failed
    Io(std::io::Error),
    /// Malformed plateau, rover or command line
    InvalidInput(String),
    /// Command character outside of L, R and M
    UnknownCommand(char),
    /// A rover was placed or moved outside the plateau bounds
    RoverFallAndCrash {
        rover: usize,
        position: Position,
        plateau: String,
    },
    /// A rover was placed or moved onto a square held by another rover
    RoverCollision { rover: usize, position: Position },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Io(err) => write!(f, "IO error: {}", err),
            SimulationError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            SimulationError::UnknownCommand(c) => write!(f, "Wrong command : {}", c),
            SimulationError::RoverFallAndCrash {
                rover,
                position,
                plateau,
            } => write!(
                f,
                "Rover #{} fell off the plateau. Rover's new position: {}, Plateau : {}",
                rover, position, plateau
            ),
            SimulationError::RoverCollision { rover, position } => write!(
                f,
                "Rover #{} collided with another rover. Position: {}",
                rover, position
            ),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimulationError {
    fn from(err: std::io::Error) -> Self {
        SimulationError::Io(err)
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SimulationError>;
