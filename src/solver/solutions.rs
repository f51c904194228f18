use std::fs;
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::SolverError;
use crate::solver::backtrack::Step;

pub fn read_solution_from_file() -> Result<Vec<Step>, SolverError> {
    File::options()
        .read(true)
        .open(solution_path())
        .map_err(SolverError::IOError)
        .and_then(|mut file| {
            let mut string = String::new();
            file.read_to_string(&mut string)?;
            let solution = serde_json::from_str::<Vec<Step>>(&string).map_err(SolverError::Serde)?;
            return Ok(solution);
        })
}

pub fn store_solution_locally(solution: &[Step]) -> Result<(), SolverError> {
    fs::create_dir_all("data")?;
    let mut file = File::create(solution_path())?;
    file.write_all(serde_json::to_string(solution)?.as_bytes())?;
    return Ok(());
}

pub fn remove_solution_file() -> Result<(), SolverError> {
    fs::remove_file(solution_path())?;
    return Ok(());
}

fn solution_path() -> PathBuf {
    let mut path = PathBuf::from_str("data").expect("unable to create solution pathbuf");
    path.push("solution.json");
    return path;
}
