pub mod board;
pub mod movegen;
pub mod seed;
pub mod selection;

use crate::board::BOARD_SIZE;
use crate::selection::PointerSample;

/// Trait for sampling pointer state once per logic tick.
///
/// Abstracts over the windowing collaborator and mock/scripted inputs,
/// providing a uniform interface for
/// [`SelectionController`](selection::SelectionController). Samples arrive
/// already quantized to board cells; the coordinate may lie outside the
/// board.
pub trait PointerInput {
    /// Error type for input sampling failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Sample the current pointer state.
    fn sample(&mut self) -> Result<PointerSample, Self::Error>;
}

/// Trait for presenting the board to the player.
///
/// Abstracts over the rendering collaborator and terminal output, mirroring
/// [`PointerInput`] on the input side. Consumes the row-major byte snapshot
/// produced by [`Board::export`](board::Board::export).
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show the given board snapshot.
    fn show(&mut self, cells: &[u8; BOARD_SIZE]) -> Result<(), Self::Error>;
}

pub mod mock;
