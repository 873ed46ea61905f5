pub mod collision;
pub mod engine;
pub mod parser;

pub use engine::{Phase, RoverProgram, Simulator};
