use std::fmt::{Debug, Display, Error, Formatter};

use colored::Colorize;

use crate::solver::backtrack::Step;

use super::state::PuzzleState;
use super::{Direction, Entity, Move, Position};

impl Display for Entity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            Entity::Missionary => write!(f, "{}", "M".bright_white()),
            Entity::Cannibal => write!(f, "{}", "C".red()),
        }
    }
}

impl Debug for Entity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            Entity::Missionary => write!(f, "M"),
            Entity::Cannibal => write!(f, "C"),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            Position::LeftBank => write!(f, "left bank"),
            Position::RightBank => write!(f, "right bank"),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            Direction::LeftToRight => write!(f, "--->"),
            Direction::RightToLeft => write!(f, "<---"),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{} [", self.direction)?;
        for person in self.people.iter() {
            write!(f, "{}", person)?;
        }
        write!(f, "]")
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self)
    }
}

impl Display for PuzzleState {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "left bank=[")?;
        for person in self.left_bank.iter() {
            write!(f, "{}", person)?;
        }
        write!(f, "], right bank=[")?;
        for person in self.right_bank.iter() {
            write!(f, "{}", person)?;
        }
        write!(f, "], boat at the {}", self.boat_position)
    }
}

impl Debug for PuzzleState {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self)
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match &self.ferried {
            Some(ferry) => write!(f, "({}) {}", ferry, self.state),
            None => write!(f, "(start) {}", self.state),
        }
    }
}
