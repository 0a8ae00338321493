//! Core board data structures.
//!
//! - [`Mark`] - Player symbol (X or O)
//! - [`Board`] - Nine cells in row-major order
//! - [`Outcome`] - Result derived from a board snapshot
//!
//! Everything here is a plain value type; nothing in this module tracks whose turn it is.
//! See [`crate::engine`] for the game flow built on top of these types.

pub use self::{board::*, mark::*, outcome::*};

mod board;
mod mark;
mod outcome;
