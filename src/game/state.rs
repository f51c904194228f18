use serde::{Deserialize, Serialize};

use super::{count, Entity, Position};
use crate::constants::*;
use crate::errors::SolverError;

/// a snapshot of the puzzle: who stands on which bank and where the boat is
#[derive(Clone, Serialize, Deserialize)]
pub struct PuzzleState {
    pub(crate) left_bank: Vec<Entity>,
    pub(crate) right_bank: Vec<Entity>,
    pub(crate) boat_position: Position,
}

impl PuzzleState {
    pub fn new(
        left_bank: Vec<Entity>,
        right_bank: Vec<Entity>,
        boat_position: Position,
    ) -> Result<PuzzleState, SolverError> {
        let state = PuzzleState {
            left_bank,
            right_bank,
            boat_position,
        };
        state.validate()?;
        return Ok(state);
    }

    pub fn left_bank(&self) -> &[Entity] {
        &self.left_bank
    }
    pub fn right_bank(&self) -> &[Entity] {
        &self.right_bank
    }
    pub fn boat_position(&self) -> Position {
        self.boat_position
    }

    /// whether the cannibals are behaving: a bank that holds at least one
    /// missionary must not hold more cannibals than missionaries
    pub fn is_valid(&self) -> Result<bool, SolverError> {
        // if this fails there is a serious problem with generating or applying moves
        self.validate()?;

        let left_missionaries = count(&self.left_bank, MISSIONARY);
        let left_cannibals = count(&self.left_bank, CANNIBAL);
        if left_cannibals > left_missionaries && left_missionaries > 0 {
            return Ok(false);
        }

        let right_missionaries = count(&self.right_bank, MISSIONARY);
        let right_cannibals = count(&self.right_bank, CANNIBAL);
        if right_cannibals > right_missionaries && right_missionaries > 0 {
            return Ok(false);
        }

        return Ok(true);
    }

    /// whether everyone has made it across
    pub fn is_final(&self) -> bool {
        return self.left_bank.is_empty() && self.right_bank.len() == POPULATION;
    }

    fn validate(&self) -> Result<(), SolverError> {
        if self.left_bank.len() > POPULATION {
            return Err(SolverError::InvalidState(
                "too many people on the left bank".to_string(),
            ));
        }
        if self.right_bank.len() > POPULATION {
            return Err(SolverError::InvalidState(
                "too many people on the right bank".to_string(),
            ));
        }
        if self.left_bank.len() + self.right_bank.len() > POPULATION {
            return Err(SolverError::InvalidState(
                "too many people on the board".to_string(),
            ));
        }
        if count(&self.left_bank, MISSIONARY) + count(&self.right_bank, MISSIONARY) > MISSIONARIES {
            return Err(SolverError::InvalidState(
                "too many missionaries on the board".to_string(),
            ));
        }
        if count(&self.left_bank, CANNIBAL) + count(&self.right_bank, CANNIBAL) > CANNIBALS {
            return Err(SolverError::InvalidState(
                "too many cannibals on the board".to_string(),
            ));
        }
        return Ok(());
    }
}

impl PartialEq for PuzzleState {
    // people of one kind are interchangeable: two states match when the per
    // bank headcounts match, regardless of the order people stand in
    fn eq(&self, other: &PuzzleState) -> bool {
        if count(&self.left_bank, CANNIBAL) != count(&other.left_bank, CANNIBAL) {
            return false;
        }
        if count(&self.right_bank, CANNIBAL) != count(&other.right_bank, CANNIBAL) {
            return false;
        }
        if count(&self.left_bank, MISSIONARY) != count(&other.left_bank, MISSIONARY) {
            return false;
        }
        if count(&self.right_bank, MISSIONARY) != count(&other.right_bank, MISSIONARY) {
            return false;
        }
        return self.boat_position == other.boat_position;
    }
}

impl Eq for PuzzleState {}
