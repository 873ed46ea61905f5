use crate::direction::Direction;
use crate::error::{Result, SimulationError};
use crate::plateau::{Plateau, Position};
use crate::rover::Rover;

/// Parse the first input line (`<maxX> <maxY>`) into a plateau anchored at the origin
pub fn parse_plateau_line(line: Option<&str>) -> Result<Plateau> {
    let line = match line {
        Some(l) if !l.is_empty() => l,
        _ => {
            return Err(SimulationError::InvalidInput(
                "Line to define plateau is null or empty.".to_string(),
            ))
        }
    };

    let parts: Vec<&str> = line.split_whitespace().collect();
    let [x, y] = parts[..] else {
        return Err(SimulationError::InvalidInput(format!(
            "Invalid values of upper right coordinates: {}",
            line
        )));
    };

    let max_x = parse_integer(x, "upper right coordinates")?;
    let max_y = parse_integer(y, "upper right coordinates")?;

    Ok(Plateau::with_upper_right(Position::new(max_x, max_y)))
}

/// Parse a rover line (`<x> <y> <DIR>`); `ordinal` is the 1-based rover number
pub fn parse_rover_line(line: &str, ordinal: usize) -> Result<Rover> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [x, y, heading] = parts[..] else {
        return Err(SimulationError::InvalidInput(format!(
            "Invalid information to initialize rover #{}. Info provided: {}",
            ordinal, line
        )));
    };

    let what = format!("rover #{} position", ordinal);
    let x = parse_integer(x, &what)?;
    let y = parse_integer(y, &what)?;
    let heading: Direction = heading.parse().map_err(|err| match err {
        SimulationError::InvalidInput(msg) => {
            SimulationError::InvalidInput(format!("Rover #{}: {}", ordinal, msg))
        }
        other => other,
    })?;

    Ok(Rover::new(Position::new(x, y), heading))
}

/// Check a command line read for rover `ordinal` and take ownership of it
pub fn validate_command_line(line: Option<String>, ordinal: usize) -> Result<String> {
    match line {
        Some(commands) if !commands.chars().any(char::is_whitespace) => Ok(commands),
        other => Err(SimulationError::InvalidInput(format!(
            "Invalid commands for rover#{}. Command: {}",
            ordinal,
            other.as_deref().unwrap_or("<missing>")
        ))),
    }
}

fn parse_integer(token: &str, what: &str) -> Result<i32> {
    token.parse().map_err(|err| {
        SimulationError::InvalidInput(format!(
            "Invalid values of {}: {:?} ({})",
            what, token, err
        ))
    })
}
