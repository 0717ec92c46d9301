use crate::board::{Board, Coord, PieceKind, Team};

/// Movement pattern for a piece kind: a fixed list of direction vectors,
/// and whether they repeat along the direction until blocked (sliding) or
/// apply once (stepping).
#[derive(Debug, Clone, Copy)]
pub struct MoveTemplate {
    pub vectors: &'static [(i32, i32)],
    pub sliding: bool,
}

const ROYAL_VECTORS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

const ROOK_VECTORS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const KNIGHT_VECTORS: [(i32, i32); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

const BISHOP_VECTORS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Movement template for `kind`, or `None` for the pawn, which follows its
/// own rule set in [`pseudo_legal_moves`].
pub const fn template(kind: PieceKind) -> Option<MoveTemplate> {
    let template = match kind {
        PieceKind::King => MoveTemplate {
            vectors: &ROYAL_VECTORS,
            sliding: false,
        },
        PieceKind::Queen => MoveTemplate {
            vectors: &ROYAL_VECTORS,
            sliding: true,
        },
        PieceKind::Rook => MoveTemplate {
            vectors: &ROOK_VECTORS,
            sliding: true,
        },
        PieceKind::Knight => MoveTemplate {
            vectors: &KNIGHT_VECTORS,
            sliding: false,
        },
        PieceKind::Bishop => MoveTemplate {
            vectors: &BISHOP_VECTORS,
            sliding: true,
        },
        PieceKind::Pawn => return None,
    };
    Some(template)
}

/// Rank a side's pawns start on, where the double-step applies.
const fn pawn_home_rank(team: Team) -> i32 {
    match team {
        Team::White => 6,
        Team::Black => 1,
    }
}

/// Destinations the piece on `from` may move to, ignoring check safety.
///
/// Returns the empty sequence when `from` holds no piece. The order is
/// deterministic: template order, distance ascending for sliders; pawns
/// yield forward, the two diagonal captures, then the double-step. Purely a
/// function of the current board; no state accumulates between calls.
pub fn pseudo_legal_moves(board: &Board, from: Coord) -> Vec<Coord> {
    let cell = board.get(from);
    let (Some(team), Some(kind)) = (cell.team(), cell.kind()) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match template(kind) {
        Some(template) => template_moves(board, from, team, &template, &mut moves),
        None => pawn_moves(board, from, team, &mut moves),
    }
    moves
}

fn pawn_moves(board: &Board, from: Coord, team: Team, out: &mut Vec<Coord>) {
    let dir = team.sign();

    let ahead = from.offset(0, dir);
    let stepped = ahead.in_bounds() && board.get(ahead).team().is_none();
    if stepped {
        out.push(ahead);
    }

    // Diagonal squares are capture-only; pawns never move onto an empty
    // diagonal (no en passant).
    for dx in [dir, -dir] {
        let diag = from.offset(dx, dir);
        if diag.in_bounds() && board.get(diag).team().is_some_and(|t| t != team) {
            out.push(diag);
        }
    }

    // The double-step rides on the single step: a blocked pawn cannot jump.
    let double = from.offset(0, dir * 2);
    if stepped
        && from.y == pawn_home_rank(team)
        && double.in_bounds()
        && board.get(double).team().is_none()
    {
        out.push(double);
    }
}

fn template_moves(
    board: &Board,
    from: Coord,
    team: Team,
    template: &MoveTemplate,
    out: &mut Vec<Coord>,
) {
    let reach = if template.sliding { 7 } else { 1 };
    for &(dx, dy) in template.vectors {
        for distance in 1..=reach {
            let target = from.offset(dx * distance, dy * distance);
            if !target.in_bounds() {
                break;
            }

            let occupant = board.get(target).team();
            if occupant == Some(team) {
                break;
            }

            out.push(target);

            // A capture ends the slide.
            if occupant.is_some() {
                break;
            }
        }
    }
}
