use crate::game::moves::BoardMove;
use crate::game::pieces::Color;
use crate::game::square::Square;
use strum::EnumCount;

/// Everything needed to take a move back. Undo restores these fields
/// verbatim instead of recomputing them.
#[derive(Debug, Clone, Copy)]
pub struct HistoryEntry {
    pub board_move: BoardMove,
    pub kings: [Option<Square>; Color::COUNT],
    pub side: Color,
    pub castling: [u8; Color::COUNT],
    pub en_passant_square: Option<Square>,
    pub halfmove_clock: u64,
    pub fullmove_number: u64,
    pub zobrist_key: u64,
}
