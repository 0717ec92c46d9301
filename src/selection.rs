use crate::board::{Board, Cell, Coord};
use crate::movegen;

/// One pointer input sample, taken once per logic tick.
///
/// The windowing collaborator quantizes the cursor into board cells and
/// applies the current camera pan/zoom before handing it over; `cell` may
/// lie outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerSample {
    /// Whether the pointer button is currently down.
    pub pressed: bool,
    /// Board cell under the pointer.
    pub cell: Coord,
}

/// Selection progress across ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Selection {
    Idle,
    Selected { source: Coord, moves: Vec<Coord> },
}

/// Two-state machine turning edge-triggered pointer presses into board
/// mutations and highlight updates.
///
/// Holds no state besides the current selection and the previous button
/// state; all side effects go through the [`Board`] passed into
/// [`tick`](SelectionController::tick).
#[derive(Debug)]
pub struct SelectionController {
    selection: Selection,
    was_pressed: bool,
}

impl SelectionController {
    pub fn new() -> SelectionController {
        SelectionController {
            selection: Selection::Idle,
            was_pressed: false,
        }
    }

    /// Source cell of the current selection, if any.
    pub fn selection(&self) -> Option<Coord> {
        match &self.selection {
            Selection::Idle => None,
            Selection::Selected { source, .. } => Some(*source),
        }
    }

    /// Advance one logic tick.
    ///
    /// Only the rising edge of the button (released on the previous tick,
    /// pressed on this one) triggers a transition; holding or releasing the
    /// button does nothing. A rising edge outside the board is consumed as
    /// a no-op, leaving state and highlights untouched.
    pub fn tick(&mut self, board: &mut Board, input: PointerSample) {
        let rising = input.pressed && !self.was_pressed;
        self.was_pressed = input.pressed;

        if !rising || !input.cell.in_bounds() {
            return;
        }

        match std::mem::replace(&mut self.selection, Selection::Idle) {
            Selection::Idle => self.begin_selection(board, input.cell),
            Selection::Selected { source, moves } => {
                Self::finish_selection(board, source, &moves, input.cell);
            }
        }
    }

    /// Pressing on a piece (either team; no turn check) highlights it and
    /// its pseudo-legal destinations. Pressing anywhere else stays idle.
    fn begin_selection(&mut self, board: &mut Board, at: Coord) {
        if board.get(at).team().is_none() {
            return;
        }

        let moves = movegen::pseudo_legal_moves(board, at);
        for &dest in &moves {
            board.set(dest, board.get(dest).with_highlight());
        }
        board.set(at, board.get(at).with_highlight());

        self.selection = Selection::Selected { source: at, moves };
    }

    /// Any in-bounds press while selected ends the selection: highlights
    /// come off, and if the pressed cell is a generated destination the
    /// piece moves there (overwriting any occupant). An illegal destination
    /// just cancels.
    fn finish_selection(board: &mut Board, source: Coord, moves: &[Coord], target: Coord) {
        board.set(source, board.get(source).without_highlight());
        for &dest in moves {
            board.set(dest, board.get(dest).without_highlight());
        }

        if moves.contains(&target) {
            board.set(target, board.get(source).without_highlight());
            board.set(source, Cell::EMPTY);
        }
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceKind, Team};
    use crate::mock::ScriptedPointer;
    use crate::seed::STARTING_POSITION;

    fn starting_board() -> Board {
        Board::from_seed(&STARTING_POSITION)
    }

    /// Helper to execute a pointer script against a board.
    fn run_script(board: &mut Board, controller: &mut SelectionController, script: &str) {
        let mut pointer = ScriptedPointer::new();
        pointer
            .push_script(script)
            .expect("test script should be valid");
        pointer.drain(|sample| controller.tick(board, sample));
    }

    fn highlighted(board: &Board, x: i32, y: i32) -> bool {
        board.get(Coord::new(x, y)).highlighted()
    }

    #[test]
    fn selecting_a_pawn_highlights_source_and_destinations() {
        let mut board = starting_board();
        let mut controller = SelectionController::new();

        run_script(&mut board, &mut controller, "4,6");

        assert_eq!(controller.selection(), Some(Coord::new(4, 6)));
        assert!(highlighted(&board, 4, 6), "source highlighted");
        assert!(highlighted(&board, 4, 5), "single step highlighted");
        assert!(highlighted(&board, 4, 4), "double step highlighted");
        assert!(!highlighted(&board, 3, 6), "unrelated cell untouched");
    }

    #[test]
    fn pressing_an_empty_cell_stays_idle() {
        let mut board = starting_board();
        let mut controller = SelectionController::new();
        let before = board.export();

        run_script(&mut board, &mut controller, "4,4");

        assert_eq!(controller.selection(), None);
        assert_eq!(board.export(), before);
    }

    #[test]
    fn holding_the_button_is_a_single_edge() {
        let mut board = starting_board();
        let mut controller = SelectionController::new();

        // Press on the pawn, then drag onto its destination while held.
        run_script(&mut board, &mut controller, "4,6 4,4");

        assert_eq!(controller.selection(), Some(Coord::new(4, 6)));
        assert_eq!(
            board.get(Coord::new(4, 6)).kind(),
            Some(PieceKind::Pawn),
            "no move without a new edge"
        );
    }

    #[test]
    fn click_then_click_destination_moves_the_piece() {
        let mut board = starting_board();
        let mut controller = SelectionController::new();
        let pawn = board.get(Coord::new(4, 1));

        run_script(&mut board, &mut controller, "4,1 _ 4,3");

        assert_eq!(controller.selection(), None);
        assert_eq!(board.get(Coord::new(4, 3)), pawn.without_highlight());
        assert_eq!(board.get(Coord::new(4, 1)), Cell::EMPTY);
    }

    #[test]
    fn illegal_destination_cancels_without_mutating_pieces() {
        let mut board = starting_board();
        let mut controller = SelectionController::new();
        let before = board.export();

        // (0,4) is empty and not reachable by the pawn on (4,1).
        run_script(&mut board, &mut controller, "4,1 _ 0,4");

        assert_eq!(controller.selection(), None);
        assert_eq!(board.export(), before, "highlights cleared, pieces intact");
    }

    #[test]
    fn pressing_own_piece_while_selected_deselects_without_reselecting() {
        let mut board = starting_board();
        let mut controller = SelectionController::new();
        let before = board.export();

        run_script(&mut board, &mut controller, "4,1 _ 3,1");

        assert_eq!(controller.selection(), None);
        assert_eq!(board.export(), before);
    }

    #[test]
    fn out_of_bounds_press_preserves_selection_and_highlights() {
        let mut board = starting_board();
        let mut controller = SelectionController::new();

        run_script(&mut board, &mut controller, "4,6 _ 8,8");

        assert_eq!(controller.selection(), Some(Coord::new(4, 6)));
        assert!(highlighted(&board, 4, 6));
        assert!(highlighted(&board, 4, 4));

        // The selection is still live; the next in-bounds press completes it.
        run_script(&mut board, &mut controller, "_ 4,4");
        assert_eq!(board.get(Coord::new(4, 4)).kind(), Some(PieceKind::Pawn));
        assert_eq!(board.get(Coord::new(4, 6)), Cell::EMPTY);
    }

    #[test]
    fn capture_overwrites_the_destination() {
        let mut board = Board::new();
        board.set(Coord::new(0, 4), Cell::piece(Team::White, PieceKind::Rook));
        board.set(Coord::new(0, 1), Cell::piece(Team::Black, PieceKind::Pawn));
        let mut controller = SelectionController::new();

        run_script(&mut board, &mut controller, "0,4 _ 0,1");

        assert_eq!(
            board.get(Coord::new(0, 1)),
            Cell::piece(Team::White, PieceKind::Rook)
        );
        assert_eq!(board.get(Coord::new(0, 4)), Cell::EMPTY);
    }

    #[test]
    fn either_team_may_move() {
        let mut board = starting_board();
        let mut controller = SelectionController::new();

        // Black first, then white; no turn enforcement.
        run_script(&mut board, &mut controller, "0,1 _ 0,3 _ 0,6 _ 0,4");

        assert_eq!(board.get(Coord::new(0, 3)).team(), Some(Team::Black));
        assert_eq!(board.get(Coord::new(0, 4)).team(), Some(Team::White));
        assert_eq!(board.get(Coord::new(0, 1)), Cell::EMPTY);
        assert_eq!(board.get(Coord::new(0, 6)), Cell::EMPTY);
    }

    #[test]
    fn moved_piece_never_carries_the_highlight_bit() {
        let mut board = starting_board();
        let mut controller = SelectionController::new();

        run_script(&mut board, &mut controller, "4,1 _ 4,3");

        let landed = board.get(Coord::new(4, 3));
        assert!(!landed.highlighted());
        assert_eq!(landed.to_byte(), 0x54);
    }
}
