use crate::cube::Color;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown turn {0:?}")]
pub struct TurnParseError(pub String);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("unknown notation token {0:?}")]
    UnknownToken(String),
    #[error("unsupported move {0}")]
    Unsupported(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// No face center shows the color the first layer is built around.
    #[error("no face center is {0:?}")]
    MissingCrossCenter(Color),
    #[error("cube still unsolved after {0} ticks")]
    TickBudgetExhausted(usize),
}
