use crate::direction::Direction;
use crate::error::{Result, SimulationError};
use crate::plateau::Position;
use std::fmt;

/// Single-character rover instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TurnLeft,
    TurnRight,
    Move,
}

impl TryFrom<char> for Command {
    type Error = SimulationError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'L' => Ok(Command::TurnLeft),
            'R' => Ok(Command::TurnRight),
            'M' => Ok(Command::Move),
            other => Err(SimulationError::UnknownCommand(other)),
        }
    }
}

/// Rover: where it stands and where it faces
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rover {
    position: Position,
    heading: Direction,
}

impl Rover {
    pub fn new(position: Position, heading: Direction) -> Self {
        Self { position, heading }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Run one command character and report which command it was.
    ///
    /// The plateau is not consulted; a move always succeeds here.
    pub fn execute(&mut self, c: char) -> Result<Command> {
        let command = Command::try_from(c)?;
        match command {
            Command::TurnLeft => self.heading = self.heading.turn_left(),
            Command::TurnRight => self.heading = self.heading.turn_right(),
            Command::Move => self.position.move_towards(self.heading),
        }
        Ok(command)
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position, self.heading)
    }
}
