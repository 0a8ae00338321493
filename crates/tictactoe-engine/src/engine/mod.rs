//! Game flow built on top of [`crate::core`].
//!
//! - [`Game`] - Board, turn indicator and hover preview for one game at a time
//! - [`Turn`] - Tri-state turn indicator (unstarted, or the mark to move)
//! - [`Phase`] - Which screen the game is on, derived from the turn and the board
//! - [`StartChoice`] - Fixed or random starting player
//! - [`Coin`] - Source of the random starting-player draw
//! - [`Tally`] - Count of finished games across restarts
//!
//! # Game Flow
//!
//! 1. A new [`Game`] is unstarted
//! 2. [`Game::start`] resets the board and picks who moves first
//! 3. [`Game::place`] commits marks, alternating turns
//! 4. Once the board is won or tied, only [`Game::start`] has an effect
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, Mark, Outcome};
//!
//! let mut game = Game::new();
//! game.start(Mark::X);
//!
//! for index in [0, 1, 3, 4, 6] {
//!     game.place(index).unwrap();
//! }
//!
//! assert_eq!(game.outcome(), Outcome::Won(Mark::X));
//! assert!(game.place(8).is_err());
//! ```

pub use self::{coin::*, game::*, tally::*};

mod coin;
mod game;
mod tally;
