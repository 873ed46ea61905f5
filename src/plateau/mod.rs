pub mod coordinate;
pub mod plateau;
pub mod position;

pub use coordinate::Coordinate;
pub use plateau::Plateau;
pub use position::Position;
