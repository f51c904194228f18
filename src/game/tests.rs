use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::constants::*;
use crate::errors::SolverError;
use crate::game::{Direction, Move, Position, PuzzleState};

#[test]
fn test_too_many_cannibals() {
    let state = PuzzleState::new(
        vec![CANNIBAL, MISSIONARY, CANNIBAL],
        vec![MISSIONARY, CANNIBAL, CANNIBAL],
        Position::LeftBank,
    );
    assert!(matches!(state, Err(SolverError::InvalidState(_))));
}

#[test]
fn test_too_many_actors() {
    let state = PuzzleState::new(
        vec![CANNIBAL, MISSIONARY, CANNIBAL],
        vec![MISSIONARY, CANNIBAL, MISSIONARY, CANNIBAL],
        Position::LeftBank,
    );
    assert!(matches!(state, Err(SolverError::InvalidState(_))));
}

#[test]
fn test_overcrowded_bank() {
    let state = PuzzleState::new(
        vec![
            MISSIONARY, MISSIONARY, MISSIONARY, CANNIBAL, CANNIBAL, CANNIBAL, CANNIBAL,
        ],
        Vec::new(),
        Position::LeftBank,
    );
    assert!(matches!(state, Err(SolverError::InvalidState(_))));
}

#[test]
fn test_cannibal_horde_alone() {
    let state = PuzzleState::new(
        vec![CANNIBAL, CANNIBAL, CANNIBAL, CANNIBAL, CANNIBAL],
        Vec::new(),
        Position::LeftBank,
    );
    assert!(matches!(state, Err(SolverError::InvalidState(_))));
}

#[test]
fn test_dead_missionaries() {
    let state = PuzzleState::new(
        vec![CANNIBAL, MISSIONARY, CANNIBAL],
        vec![MISSIONARY, CANNIBAL, MISSIONARY],
        Position::LeftBank,
    )
    .unwrap();
    assert_eq!(false, state.is_valid().unwrap());
}

#[test]
fn test_cannibals_alone_are_safe() {
    let state = PuzzleState::new(
        vec![CANNIBAL, CANNIBAL, CANNIBAL],
        vec![MISSIONARY, MISSIONARY, MISSIONARY],
        Position::LeftBank,
    )
    .unwrap();
    assert_eq!(true, state.is_valid().unwrap());
}

#[test]
fn test_is_final_ignores_the_boat() {
    let everyone = vec![
        MISSIONARY, MISSIONARY, MISSIONARY, CANNIBAL, CANNIBAL, CANNIBAL,
    ];
    let crossed = PuzzleState::new(Vec::new(), everyone.clone(), Position::RightBank).unwrap();
    assert!(crossed.is_final());
    let boat_left_behind = PuzzleState::new(Vec::new(), everyone, Position::LeftBank).unwrap();
    assert!(boat_left_behind.is_final());
    assert!(!canonical_start().is_final());
}

#[test]
fn test_equals() {
    let state1 = PuzzleState::new(
        vec![CANNIBAL, MISSIONARY, CANNIBAL],
        vec![MISSIONARY, MISSIONARY, CANNIBAL],
        Position::LeftBank,
    )
    .unwrap();
    let state2 = PuzzleState::new(
        vec![CANNIBAL, CANNIBAL, MISSIONARY],
        vec![CANNIBAL, MISSIONARY, MISSIONARY],
        Position::LeftBank,
    )
    .unwrap();
    assert_eq!(state1, state2);
}

#[test]
fn test_equals_shuffled_banks() {
    let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(42);
    let mut left = vec![MISSIONARY, MISSIONARY, CANNIBAL];
    let mut right = vec![CANNIBAL, CANNIBAL, MISSIONARY];
    let reference =
        PuzzleState::new(left.clone(), right.clone(), Position::RightBank).unwrap();
    for _ in 0..8 {
        left.shuffle(&mut rng);
        right.shuffle(&mut rng);
        let shuffled =
            PuzzleState::new(left.clone(), right.clone(), Position::RightBank).unwrap();
        assert_eq!(reference, shuffled);
    }
}

#[test]
fn test_boat_position_breaks_equality() {
    let banks = (
        vec![MISSIONARY, CANNIBAL],
        vec![MISSIONARY, MISSIONARY, CANNIBAL, CANNIBAL],
    );
    let boat_left =
        PuzzleState::new(banks.0.clone(), banks.1.clone(), Position::LeftBank).unwrap();
    let boat_right = PuzzleState::new(banks.0, banks.1, Position::RightBank).unwrap();
    assert_ne!(boat_left, boat_right);
}

#[test]
fn test_move_must_carry_someone() {
    let ferry = Move::new(Direction::LeftToRight, &[]);
    assert!(matches!(ferry, Err(SolverError::InvalidMove(_))));
}

#[test]
fn test_move_cannot_overload_the_boat() {
    let ferry = Move::new(Direction::LeftToRight, &[CANNIBAL, CANNIBAL, MISSIONARY]);
    assert!(matches!(ferry, Err(SolverError::InvalidMove(_))));
}

#[test]
fn test_move_equality_is_positional() {
    let cannibal_first = Move::new(Direction::LeftToRight, &[CANNIBAL, MISSIONARY]).unwrap();
    let missionary_first = Move::new(Direction::LeftToRight, &[MISSIONARY, CANNIBAL]).unwrap();
    let other_way = Move::new(Direction::RightToLeft, &[CANNIBAL, MISSIONARY]).unwrap();
    assert_eq!(
        cannibal_first,
        Move::new(Direction::LeftToRight, &[CANNIBAL, MISSIONARY]).unwrap()
    );
    assert_ne!(cannibal_first, missionary_first);
    assert_ne!(cannibal_first, other_way);
}

#[test]
fn test_display_forms() {
    colored::control::set_override(false);
    let pair = Move::new(Direction::LeftToRight, &[CANNIBAL, MISSIONARY]).unwrap();
    assert_eq!("---> [CM]", format!("{}", pair));
    let lone = Move::new(Direction::RightToLeft, &[CANNIBAL]).unwrap();
    assert_eq!("<--- [C]", format!("{}", lone));
    let state = PuzzleState::new(
        vec![MISSIONARY, CANNIBAL],
        Vec::new(),
        Position::LeftBank,
    )
    .unwrap();
    assert_eq!(
        "left bank=[MC], right bank=[], boat at the left bank",
        format!("{}", state)
    );
}
