use crate::constants::canonical_start;
use crate::errors::SolverError;

use backtrack::{backtrack, Step};

pub mod backtrack;
pub mod solutions;

/// run the full search from the canonical six person start
pub fn solve() -> Result<Option<Vec<Step>>, SolverError> {
    return backtrack(canonical_start().clone());
}
