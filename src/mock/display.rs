use std::io::{self, Write};

use crate::BoardDisplay;
use crate::board::{BOARD_SIZE, BOARD_WIDTH, Cell, PieceKind, Team};

/// Terminal-based board display for development and testing.
///
/// Renders the exported board snapshot as an 8×8 grid with letter-coded
/// pieces and an ANSI background on highlighted cells.
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    /// Create a new terminal display.
    pub fn new() -> Self {
        Self
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl BoardDisplay for TerminalDisplay {
    type Error = DisplayError;

    fn show(&mut self, cells: &[u8; BOARD_SIZE]) -> Result<(), Self::Error> {
        render_board(&mut io::stdout(), cells)
    }
}

/// Render a board snapshot to any writer. Extracted for testability.
fn render_board(w: &mut impl Write, cells: &[u8; BOARD_SIZE]) -> Result<(), DisplayError> {
    for y in 0..BOARD_WIDTH {
        write!(w, " {y} ")?;
        for x in 0..BOARD_WIDTH {
            let cell = Cell::from_byte(cells[(x + y * BOARD_WIDTH) as usize]);
            write!(w, "{}", format_cell(cell))?;
        }
        writeln!(w)?;
    }
    writeln!(w, "    0  1  2  3  4  5  6  7")?;
    w.flush()?;
    Ok(())
}

/// Format one cell, blue background while highlighted.
fn format_cell(cell: Cell) -> String {
    let glyph = piece_glyph(cell);
    if cell.highlighted() {
        format!("\x1b[44m {glyph} \x1b[0m")
    } else {
        format!(" {glyph} ")
    }
}

/// Letter for a piece: uppercase white, lowercase black, dot for empty.
fn piece_glyph(cell: Cell) -> char {
    let Some(team) = cell.team() else {
        return '·';
    };
    let letter = match cell.kind() {
        Some(PieceKind::King) => 'k',
        Some(PieceKind::Queen) => 'q',
        Some(PieceKind::Rook) => 'r',
        Some(PieceKind::Knight) => 'n',
        Some(PieceKind::Bishop) => 'b',
        Some(PieceKind::Pawn) => 'p',
        None => '?',
    };
    match team {
        Team::White => letter.to_ascii_uppercase(),
        Team::Black => letter,
    }
}
