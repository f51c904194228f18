use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::{CANNIBAL, MISSIONARY};
use crate::errors::SolverError;
use crate::game::{count, Direction, Move, Position, PuzzleState};

/// one entry of the solution path: the state reached and the ferry trip that
/// got us there (the initial state has no trip)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub state: PuzzleState,
    pub ferried: Option<Move>,
}

/// the bookkeeping one search owns: every (state, move) pair ever tried, and
/// the path of the branch currently being explored
pub(crate) struct SearchContext {
    played: Vec<(PuzzleState, Move)>,
    path: Vec<Step>,
}

/// depth first search from `initial`, returning the cleaned path from the
/// initial to the final state, or `None` when every branch is exhausted
pub fn backtrack(initial: PuzzleState) -> Result<Option<Vec<Step>>, SolverError> {
    let mut search = SearchContext::new(&initial);
    if search.try_moves(&initial)? {
        return Ok(Some(clean_path(search.path)));
    }
    return Ok(None);
}

impl SearchContext {
    fn new(initial: &PuzzleState) -> SearchContext {
        SearchContext {
            played: Vec::new(),
            path: vec![Step {
                state: initial.clone(),
                ferried: None,
            }],
        }
    }

    /// recursively try every candidate move from `state`, in priority order.
    /// recursion depth is bounded by the number of distinct (state, move)
    /// pairs the trail can hold, small for the fixed six person population.
    fn try_moves(&mut self, state: &PuzzleState) -> Result<bool, SolverError> {
        let moves = available_moves(state)?;
        log::debug!(
            "available moves: {} board state: {}, stack size: {}",
            moves.len(),
            state,
            self.path.len()
        );
        for ferry in moves {
            log::debug!("trying: {}", ferry);
            if self.already_played(state, &ferry) {
                log::debug!("(already played)");
                continue;
            }

            let next = apply(state, &ferry)?;
            // recorded even when the move leads nowhere, so it is never retried
            self.played.push((state.clone(), ferry.clone()));

            if next.is_valid()? {
                self.path.push(Step {
                    state: next.clone(),
                    ferried: Some(ferry),
                });
                if next.is_final() {
                    log::debug!("solved: {}", next);
                    return Ok(true);
                }
                if self.try_moves(&next)? {
                    return Ok(true);
                }
                log::debug!("popped back... board state: {}", state);
            } else {
                log::debug!("move leads to a state that isn't valid: {}", next);
            }
        }
        // nothing from here reached the final state, drop this branch
        self.path.pop();
        return Ok(false);
    }

    /// whether this exact transition was tried before, anywhere in the search
    fn already_played(&self, state: &PuzzleState, ferry: &Move) -> bool {
        for (played_state, played_move) in self.played.iter() {
            if played_state == state && played_move == ferry {
                return true;
            }
        }
        return false;
    }
}

/// every move the bank under the boat can offer, in the fixed priority order
/// the search explores: 1C, 2C, 1M, 2M, 1C1M
pub fn available_moves(state: &PuzzleState) -> Result<SmallVec<[Move; 5]>, SolverError> {
    let (direction, bank) = match state.boat_position() {
        Position::LeftBank => (Direction::LeftToRight, state.left_bank()),
        Position::RightBank => (Direction::RightToLeft, state.right_bank()),
    };

    let num_cannibals = count(bank, CANNIBAL);
    let num_missionaries = count(bank, MISSIONARY);

    let mut moves = SmallVec::new();
    if num_cannibals >= 1 {
        moves.push(Move::new(direction, &[CANNIBAL])?);
    }
    if num_cannibals >= 2 {
        moves.push(Move::new(direction, &[CANNIBAL, CANNIBAL])?);
    }
    if num_missionaries >= 1 {
        moves.push(Move::new(direction, &[MISSIONARY])?);
    }
    if num_missionaries >= 2 {
        moves.push(Move::new(direction, &[MISSIONARY, MISSIONARY])?);
    }
    if num_cannibals >= 1 && num_missionaries >= 1 {
        moves.push(Move::new(direction, &[CANNIBAL, MISSIONARY])?);
    }
    return Ok(moves);
}

/// apply a ferry trip to a state, producing the state after the crossing.
/// the given state is never touched.
pub fn apply(state: &PuzzleState, ferry: &Move) -> Result<PuzzleState, SolverError> {
    let boat_is_at = state.boat_position();
    if ferry.direction().departs_from() != boat_is_at {
        return Err(SolverError::IllegalMove(format!(
            "move {} cannot be applied while the boat is at the {}",
            ferry, boat_is_at
        )));
    }

    let mut next = state.clone();
    {
        let (from, to) = match boat_is_at {
            Position::LeftBank => (&mut next.left_bank, &mut next.right_bank),
            Position::RightBank => (&mut next.right_bank, &mut next.left_bank),
        };
        for &person in ferry.people() {
            // first occurrence by value, people of one kind are interchangeable
            let seat = from
                .iter()
                .position(|&candidate| candidate == person)
                .ok_or_else(|| {
                    SolverError::IllegalMove(format!(
                        "no {:?} left on the departure bank for move {}",
                        person, ferry
                    ))
                })?;
            from.remove(seat);
            to.push(person);
        }
    }
    next.boat_position = boat_is_at.opposite();
    return Ok(next);
}

/// collapse wasted round trips out of a raw solution path: walking from the
/// final state toward the start, a state already present in the output pops
/// the output back to before its first appearance. the result reads from the
/// initial state to the final one.
pub(crate) fn clean_path(mut raw: Vec<Step>) -> Vec<Step> {
    let mut cleaned: Vec<Step> = Vec::new();
    while let Some(step) = raw.pop() {
        if cleaned.iter().any(|kept| kept.state == step.state) {
            while let Some(dropped) = cleaned.pop() {
                if dropped.state == step.state {
                    break;
                }
            }
        }
        cleaned.push(step);
    }
    cleaned.reverse();
    return cleaned;
}
