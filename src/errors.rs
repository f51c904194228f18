use std::io;

#[derive(Debug)]
pub enum SolverError {
    InvalidState(String),
    InvalidMove(String),
    IllegalMove(String),
    IOError(io::Error),
    Serde(serde_json::Error),
}

impl From<io::Error> for SolverError {
    fn from(err: io::Error) -> Self {
        SolverError::IOError(err)
    }
}

impl From<serde_json::Error> for SolverError {
    fn from(err: serde_json::Error) -> Self {
        SolverError::Serde(err)
    }
}
