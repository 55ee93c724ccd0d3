use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum EnvError {
    #[error("Board must be at least 1x1")]
    EmptyBoard,
    #[error("Board has {cells} cells, the maximum is {max}")]
    BoardTooLarge { cells: usize, max: usize },
    #[error("Mine probability must be within [0, 1], got {0}")]
    MineProbOutOfRange(f64),
    #[error("Context radius must be at least 1")]
    ZeroRadius,
    #[error("Batch size must be at least 1")]
    EmptyBatch,
    #[error("Expected {expected} actions for the batch, got {got}")]
    ActionCountMismatch { expected: usize, got: usize },
    #[error("Action {action} on board {board} is outside the {cells}-cell grid")]
    ActionOutOfRange {
        board: usize,
        action: usize,
        cells: usize,
    },
    #[error("Action {action} on board {board} targets an already revealed cell")]
    ActionAlreadyRevealed { board: usize, action: usize },
}

pub type Result<T> = core::result::Result<T, EnvError>;
