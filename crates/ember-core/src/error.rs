//! Error types for the Ember protocol.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashParseError {
    #[error("invalid length: expected 64 hex chars, got {0}")] InvalidLength(usize),
    #[error("invalid hex character: {0}")] InvalidCharacter(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckpointTableError {
    #[error("checkpoint heights not strictly ascending: {prev} then {next}")] UnsortedHeights { prev: u64, next: u64 },
    #[error("duplicate checkpoint height: {0}")] DuplicateHeight(u64),
}
