use once_cell::sync::OnceCell;

use crate::game::{Entity, Position, PuzzleState};

pub const MISSIONARY: Entity = Entity::Missionary;
pub const CANNIBAL: Entity = Entity::Cannibal;

/// seats in the boat
pub const BOAT_CAPACITY: usize = 2;
/// everyone in the puzzle, across both banks
pub const POPULATION: usize = 6;
pub const MISSIONARIES: usize = 3;
pub const CANNIBALS: usize = 3;

/// ferry moves in the puzzle's known shortest crossing
pub(crate) const MINIMAL_SOLUTION_MOVES: usize = 11;

/// everyone on the left bank, boat on the left bank
pub fn canonical_start() -> &'static PuzzleState {
    static CANONICAL_START: OnceCell<PuzzleState> = OnceCell::new();
    CANONICAL_START.get_or_init(|| {
        PuzzleState::new(
            vec![
                MISSIONARY, MISSIONARY, MISSIONARY, CANNIBAL, CANNIBAL, CANNIBAL,
            ],
            Vec::new(),
            Position::LeftBank,
        )
        .expect("the canonical starting state is structurally sound")
    })
}
