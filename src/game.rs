use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::BOAT_CAPACITY;
use crate::errors::SolverError;

pub mod state;

pub(crate) mod display;

#[cfg(test)]
mod tests;

pub use state::PuzzleState;

#[derive(Eq, PartialEq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum Entity {
    Missionary,
    Cannibal,
}

#[derive(Eq, PartialEq, Copy, Clone, Hash, Debug, Serialize, Deserialize)]
pub enum Position {
    LeftBank,
    RightBank,
}

impl Position {
    pub(crate) fn opposite(&self) -> Position {
        match self {
            Position::LeftBank => Position::RightBank,
            Position::RightBank => Position::LeftBank,
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// the bank a ferry in this direction departs from
    pub(crate) fn departs_from(&self) -> Position {
        match self {
            Direction::LeftToRight => Position::LeftBank,
            Direction::RightToLeft => Position::RightBank,
        }
    }
}

/// a proposed ferry trip: a direction and the one or two people aboard
#[derive(Eq, PartialEq, Clone, Serialize, Deserialize)]
pub struct Move {
    direction: Direction,
    people: SmallVec<[Entity; 2]>,
}

impl Move {
    pub fn new(direction: Direction, people: &[Entity]) -> Result<Move, SolverError> {
        if people.is_empty() || people.len() > BOAT_CAPACITY {
            return Err(SolverError::InvalidMove(format!(
                "a move must ferry 1 to {} people, got {}",
                BOAT_CAPACITY,
                people.len()
            )));
        }
        return Ok(Move {
            direction,
            people: SmallVec::from_slice(people),
        });
    }
    pub fn direction(&self) -> Direction {
        self.direction
    }
    pub fn people(&self) -> &[Entity] {
        &self.people
    }
}

pub(crate) fn count(bank: &[Entity], kind: Entity) -> usize {
    bank.iter().filter(|&&person| person == kind).count()
}
