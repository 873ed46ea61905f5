//! # Mars Rover
//!
//! A squad of rovers exploring a rectangular plateau on Mars.
//!
//! This library loads a mission (plateau bounds, rover start states and
//! command strings), replays every rover's commands in declaration order,
//! and reports where each rover ended up. Rovers that would leave the
//! plateau or drive into each other abort the mission.

pub mod cli;
pub mod direction;
pub mod error;
pub mod plateau;
pub mod rover;
pub mod simulation;

pub use cli::Args;
pub use direction::Direction;
pub use error::{Result, SimulationError};
pub use plateau::{Coordinate, Plateau, Position};
pub use rover::{Command, Rover};
pub use simulation::Simulator;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Args, Command, Coordinate, Direction, Plateau, Position, Result, Rover, SimulationError,
        Simulator,
    };
}
