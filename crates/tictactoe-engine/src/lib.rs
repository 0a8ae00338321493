pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Reason a placement was ignored.
///
/// None of these are surfaced to the players; an ignored placement leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    #[display("game has not been started")]
    NotStarted,
    #[display("game is already over")]
    GameOver,
    #[display("cell {_0} is already occupied")]
    Occupied(#[error(not(source))] usize),
    #[display("cell {_0} is out of range")]
    OutOfRange(#[error(not(source))] usize),
}
