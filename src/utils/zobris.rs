use crate::game::square::{BOARD_SIZE, Square, SquareExt};
use crate::game::{Color, Piece};
use strum::EnumCount;

pub struct LCG {
    state: u64,
}

impl LCG {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub const fn next_u64(mut self) -> (u64, Self) {
        // https://en.wikipedia.org/wiki/Linear_congruential_generator
        const A: u64 = 1664525;
        const C: u64 = 1013904223;

        self.state = self.state.wrapping_mul(A).wrapping_add(C);

        (self.state, self)
    }
}

/// Position hashing keys. Piece keys are indexed by the padded square
/// directly; the slots on padding squares simply never get used.
pub struct ZobristKeys {
    pieces: [[[u64; BOARD_SIZE]; Piece::COUNT]; Color::COUNT],
    castling: [u64; 16],
    en_passant: [u64; 8 + 1], // by file, [0] no state
    side_to_move: u64,
}

impl ZobristKeys {
    pub const fn new() -> Self {
        let mut rng = LCG::new(0xd1ce5eed);

        let mut pieces = [[[0u64; BOARD_SIZE]; Piece::COUNT]; Color::COUNT];
        let mut color = 0;
        while color < Color::COUNT {
            let mut piece = 0;
            while piece < Piece::COUNT {
                let mut square = 0;
                while square < BOARD_SIZE {
                    let (value, new_rng) = rng.next_u64();
                    pieces[color][piece][square] = value;
                    rng = new_rng;
                    square += 1;
                }

                piece += 1;
            }

            color += 1;
        }

        let mut castling = [0u64; 16];
        let mut castle_idx = 0;
        while castle_idx < 16 {
            let (value, new_rng) = rng.next_u64();
            castling[castle_idx] = value;
            rng = new_rng;
            castle_idx += 1;
        }

        let mut en_passant = [0u64; 8 + 1];
        let mut ep_idx = 0;
        while ep_idx < 8 {
            let (value, new_rng) = rng.next_u64();
            en_passant[ep_idx + 1] = value;
            rng = new_rng;
            ep_idx += 1;
        }

        let (side_to_move, _) = rng.next_u64();

        Self {
            pieces,
            castling,
            en_passant,
            side_to_move,
        }
    }

    pub fn piece(&self, color: Color, piece: Piece, square: Square) -> u64 {
        self.pieces[color as usize][piece as usize][square as usize]
    }

    /// Keyed by the combined right bits of both colors.
    pub fn castling(&self, index: usize) -> u64 {
        self.castling[index]
    }

    /// Keyed by file + 1, or 0 when there is no en passant square.
    pub fn en_passant(&self, square: Option<Square>) -> u64 {
        self.en_passant[square.map_or(0, |sq| sq.file() as usize + 1)]
    }

    pub fn side_to_move(&self) -> u64 {
        self.side_to_move
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::new();
