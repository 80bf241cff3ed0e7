use std::ops::Not;
use strum_macros::EnumCount;

// discriminants double as bit positions in the attack capability table
#[derive(Copy, Clone, Debug, PartialEq, EnumCount)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

#[derive(Copy, Clone, Debug, PartialEq, EnumCount)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl Color {
    /// Row of this color's pawn home rank (double pushes start here).
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::Black => 1,
            Color::White => 6,
        }
    }
}

impl Piece {
    pub const PROMOTIONS: [Piece; 4] = [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen];

    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// FEN piece letter plus its color: uppercase white, lowercase black.
    pub fn from_fen_char(c: char) -> Option<(Piece, Color)> {
        let piece = Piece::from_char(c.to_ascii_lowercase())?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some((piece, color))
    }

    pub fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    pub fn to_fen_char(self, color: Color) -> char {
        match color {
            Color::Black => self.to_char(),
            Color::White => self.to_char().to_ascii_uppercase(),
        }
    }

    pub fn to_emoji(self) -> char {
        // We change the color via Ansi codes
        match self {
            Piece::Pawn => '♟',
            Piece::Knight => '♞',
            Piece::Bishop => '♝',
            Piece::Rook => '♜',
            Piece::Queen => '♛',
            Piece::King => '♚',
        }
    }

    /// This piece's bit in the attack capability table.
    pub const fn attack_bit(self) -> u8 {
        1 << self as u8
    }

    pub const fn is_slider(self) -> bool {
        matches!(self, Piece::Bishop | Piece::Rook | Piece::Queen)
    }
}
