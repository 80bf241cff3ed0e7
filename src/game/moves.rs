use crate::game::pieces::{Color, Piece};
use crate::game::square::{Square, SquareExt};

/// Move flag bits. Castling flags double as the per-color castling right
/// bits stored on the game.
pub mod flags {
    pub const NORMAL: u8 = 0;
    pub const CAPTURE: u8 = 1;
    pub const BIG_PAWN: u8 = 2; // pawn double push
    pub const EP_CAPTURE: u8 = 4;
    pub const PROMOTION: u8 = 8;
    pub const KSIDE_CASTLE: u8 = 16;
    pub const QSIDE_CASTLE: u8 = 32;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub color: Color,
    pub captured: Option<Piece>, // stays empty for en passant, the pawn is implied
    pub promotion: Option<Piece>,
    pub flags: u8,
}

impl BoardMove {
    pub fn is_capture(&self) -> bool {
        self.flags & (flags::CAPTURE | flags::EP_CAPTURE) != 0
    }

    pub fn is_promotion(&self) -> bool {
        self.flags & flags::PROMOTION != 0
    }

    pub fn is_castle(&self) -> bool {
        self.flags & (flags::KSIDE_CASTLE | flags::QSIDE_CASTLE) != 0
    }

    /// Long algebraic notation, e.g. `e2e4` or `e7e8q`.
    pub fn unparse(&self) -> String {
        format!(
            "{}{}{}",
            self.from.unparse(),
            self.to.unparse(),
            self.promotion
                .map(|p| p.to_char().to_string())
                .unwrap_or_default()
        )
    }
}
