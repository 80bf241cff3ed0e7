use crate::game::history::HistoryEntry;
use crate::game::moves::{BoardMove, flags};
use crate::game::pieces::{Color, Piece};
use crate::game::square::{BOARD_SIZE, Square, SquareExt};
use crate::utils::zobris::ZOBRIST;
use strum::EnumCount;

pub const STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub type PieceBoard = [Option<(Piece, Color)>; BOARD_SIZE];

// rook home squares and the castling right each one guards
const ROOKS: [[(Square, u8); 2]; Color::COUNT] = [
    [
        (Square::A8, flags::QSIDE_CASTLE),
        (Square::H8, flags::KSIDE_CASTLE),
    ],
    [
        (Square::A1, flags::QSIDE_CASTLE),
        (Square::H1, flags::KSIDE_CASTLE),
    ],
];

#[derive(Debug, Clone)]
pub struct Game {
    pub pieces: PieceBoard,
    pub kings: [Option<Square>; Color::COUNT], // authoritative king squares, None when absent
    pub side: Color,
    pub castling: [u8; Color::COUNT], // castle flag bits per color
    pub en_passant_square: Option<Square>,
    pub halfmove_clock: u64, // halfmoves since the last capture or pawn advance
    pub fullmove_number: u64, // incremented after black's move
    pub zobrist_key: u64,
    pub history: Vec<HistoryEntry>,
}

impl Game {
    pub fn new() -> Game {
        Game::from_fen(STARTING_POSITION).expect("the starting position parses")
    }

    /// Parse a FEN string. Anything malformed yields None; four-field
    /// strings are accepted with the clocks defaulting to 0 and 1.
    pub fn from_fen(fen: &str) -> Option<Game> {
        let mut parts = fen.split_whitespace();

        let placement = parts.next()?;

        let side = match parts.next()? {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return None,
        };

        let mut castling = [0u8; Color::COUNT];
        let castling_part = parts.next()?;
        if castling_part != "-" {
            for c in castling_part.chars() {
                match c {
                    'K' => castling[Color::White as usize] |= flags::KSIDE_CASTLE,
                    'Q' => castling[Color::White as usize] |= flags::QSIDE_CASTLE,
                    'k' => castling[Color::Black as usize] |= flags::KSIDE_CASTLE,
                    'q' => castling[Color::Black as usize] |= flags::QSIDE_CASTLE,
                    _ => return None,
                }
            }
        }

        let en_passant_square = match parts.next()? {
            "-" => None,
            square => Some(Square::parse(square)?),
        };

        let halfmove_clock = parts.next().unwrap_or("0").parse().ok()?;
        let fullmove_number = parts.next().unwrap_or("1").parse().ok()?;

        let mut game = Game {
            pieces: [None; BOARD_SIZE],
            kings: [None; Color::COUNT],
            side,
            castling,
            en_passant_square,
            halfmove_clock,
            fullmove_number,
            zobrist_key: 0,
            history: Vec::new(),
        };

        let mut square = 0;
        for c in placement.chars() {
            match c {
                '/' => {
                    // each rank has to fill exactly eight files
                    if square & 0xf != 8 {
                        return None;
                    }
                    square += 8;
                }
                '1'..='8' => square += c as usize - '0' as usize,
                _ => {
                    let (piece, color) = Piece::from_fen_char(c)?;
                    if square & 0x88 != 0 || !game.put_piece(piece, color, square as Square) {
                        return None;
                    }
                    square += 1;
                }
            }
        }
        if square != 120 {
            return None;
        }

        game.zobrist_key = game.compute_zobrist();
        Some(game)
    }

    pub fn get_fen(&self) -> String {
        let mut placement = String::new();

        for rank in 0..8 {
            let mut empty = 0;

            for file in 0..8 {
                let square = Square::from_position(file, rank);

                match self.pieces[square as usize] {
                    Some((piece, color)) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }

            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if rank != 7 {
                placement.push('/');
            }
        }

        let mut castling = String::new();
        if self.castling[Color::White as usize] & flags::KSIDE_CASTLE != 0 {
            castling.push('K');
        }
        if self.castling[Color::White as usize] & flags::QSIDE_CASTLE != 0 {
            castling.push('Q');
        }
        if self.castling[Color::Black as usize] & flags::KSIDE_CASTLE != 0 {
            castling.push('k');
        }
        if self.castling[Color::Black as usize] & flags::QSIDE_CASTLE != 0 {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        format!(
            "{} {} {} {} {} {}",
            placement,
            match self.side {
                Color::White => 'w',
                Color::Black => 'b',
            },
            castling,
            self.en_passant_square
                .map_or("-".to_string(), |square| square.unparse()),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Wipe the position down to an empty board, white to move.
    pub fn clear(&mut self) {
        self.pieces = [None; BOARD_SIZE];
        self.kings = [None; Color::COUNT];
        self.side = Color::White;
        self.castling = [0; Color::COUNT];
        self.en_passant_square = None;
        self.halfmove_clock = 0;
        self.fullmove_number = 1;
        self.history.clear();
        self.zobrist_key = self.compute_zobrist();
    }

    pub fn get(&self, square: &str) -> Option<(Piece, Color)> {
        let square = Square::parse(square)?;
        self.pieces[square as usize]
    }

    /// Place a piece. Refuses unknown squares and a second king of the
    /// same color on a different square; the position stays untouched on
    /// failure.
    pub fn put(&mut self, piece: Piece, color: Color, square: &str) -> bool {
        match Square::parse(square) {
            Some(square) => self.put_piece(piece, color, square),
            None => false,
        }
    }

    pub(crate) fn put_piece(&mut self, piece: Piece, color: Color, square: Square) -> bool {
        if piece == Piece::King && self.kings[color as usize].is_some_and(|king| king != square) {
            return false;
        }

        // overwriting a cached king square invalidates that cache entry
        if let Some((Piece::King, old_color)) = self.pieces[square as usize] {
            self.kings[old_color as usize] = None;
        }

        self.pieces[square as usize] = Some((piece, color));
        if piece == Piece::King {
            self.kings[color as usize] = Some(square);
        }

        self.zobrist_key = self.compute_zobrist();
        true
    }

    pub fn remove(&mut self, square: &str) -> Option<(Piece, Color)> {
        let square = Square::parse(square)?;
        let removed = self.pieces[square as usize].take()?;

        if let (Piece::King, color) = removed {
            self.kings[color as usize] = None;
        }

        self.zobrist_key = self.compute_zobrist();
        Some(removed)
    }

    /// Apply a move produced by this position's generator.
    pub fn make_move(&mut self, board_move: BoardMove) {
        debug_assert_eq!(board_move.color, self.side);

        let us = self.side;
        let them = !us;

        self.history.push(HistoryEntry {
            board_move,
            kings: self.kings,
            side: self.side,
            castling: self.castling,
            en_passant_square: self.en_passant_square,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            zobrist_key: self.zobrist_key,
        });

        let old_castling_index = self.castling_index();
        let old_en_passant_square = self.en_passant_square;
        let mut key = self.zobrist_key;

        self.pieces[board_move.from as usize] = None;
        key ^= ZOBRIST.piece(us, board_move.piece, board_move.from);

        // en passant takes the pawn behind the arrival square
        if board_move.flags & flags::EP_CAPTURE != 0 {
            let captured_square = match us {
                Color::Black => board_move.to - 16,
                Color::White => board_move.to + 16,
            };
            self.pieces[captured_square as usize] = None;
            key ^= ZOBRIST.piece(them, Piece::Pawn, captured_square);
        } else if let Some(captured) = board_move.captured {
            key ^= ZOBRIST.piece(them, captured, board_move.to);
        }

        let placed = board_move.promotion.unwrap_or(board_move.piece);
        self.pieces[board_move.to as usize] = Some((placed, us));
        key ^= ZOBRIST.piece(us, placed, board_move.to);

        if board_move.piece == Piece::King {
            self.kings[us as usize] = Some(board_move.to);

            // the rook jumps over on castles
            if board_move.is_castle() {
                let (castling_from, castling_to) = if board_move.flags & flags::KSIDE_CASTLE != 0 {
                    (board_move.to + 1, board_move.to - 1)
                } else {
                    (board_move.to - 2, board_move.to + 1)
                };

                if let Some(rook) = self.pieces[castling_from as usize].take() {
                    self.pieces[castling_to as usize] = Some(rook);
                    key ^= ZOBRIST.piece(us, Piece::Rook, castling_from);
                    key ^= ZOBRIST.piece(us, Piece::Rook, castling_to);
                }
            }

            self.castling[us as usize] = 0;
        }

        // moving a rook off its home square drops the matching right,
        // capturing one on its home square drops the opponent's
        if self.castling[us as usize] != 0 {
            for (home, right) in ROOKS[us as usize] {
                if board_move.from == home {
                    self.castling[us as usize] &= !right;
                    break;
                }
            }
        }
        if self.castling[them as usize] != 0 {
            for (home, right) in ROOKS[them as usize] {
                if board_move.to == home {
                    self.castling[them as usize] &= !right;
                    break;
                }
            }
        }

        // a double push opens the square behind the pawn
        self.en_passant_square = if board_move.flags & flags::BIG_PAWN != 0 {
            match us {
                Color::Black => Some(board_move.to - 16),
                Color::White => Some(board_move.to + 16),
            }
        } else {
            None
        };

        if board_move.piece == Piece::Pawn || board_move.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        if us == Color::Black {
            self.fullmove_number += 1;
        }

        self.side = them;

        key ^= ZOBRIST.castling(old_castling_index);
        key ^= ZOBRIST.castling(self.castling_index());
        key ^= ZOBRIST.en_passant(old_en_passant_square);
        key ^= ZOBRIST.en_passant(self.en_passant_square);
        key ^= ZOBRIST.side_to_move();
        self.zobrist_key = key;
    }

    /// Take back the last move, restoring the scalar state straight from
    /// the history snapshot. Returns None when there is nothing to undo.
    pub fn unmake_move(&mut self) -> Option<BoardMove> {
        let entry = self.history.pop()?;
        let board_move = entry.board_move;

        self.kings = entry.kings;
        self.side = entry.side;
        self.castling = entry.castling;
        self.en_passant_square = entry.en_passant_square;
        self.halfmove_clock = entry.halfmove_clock;
        self.fullmove_number = entry.fullmove_number;
        self.zobrist_key = entry.zobrist_key;

        let us = self.side;
        let them = !us;

        // the mover returns home, shedding any promotion
        self.pieces[board_move.from as usize] = Some((board_move.piece, us));
        self.pieces[board_move.to as usize] = None;

        if board_move.flags & flags::EP_CAPTURE != 0 {
            let captured_square = match us {
                Color::Black => board_move.to - 16,
                Color::White => board_move.to + 16,
            };
            self.pieces[captured_square as usize] = Some((Piece::Pawn, them));
        } else if let Some(captured) = board_move.captured {
            self.pieces[board_move.to as usize] = Some((captured, them));
        }

        if board_move.is_castle() {
            let (castling_from, castling_to) = if board_move.flags & flags::KSIDE_CASTLE != 0 {
                (board_move.to - 1, board_move.to + 1)
            } else {
                (board_move.to + 1, board_move.to - 2)
            };

            if let Some(rook) = self.pieces[castling_from as usize].take() {
                self.pieces[castling_to as usize] = Some(rook);
            }
        }

        Some(board_move)
    }

    /// Hash the position from scratch. Setup mutations use this; make and
    /// unmake maintain the key incrementally and by snapshot.
    pub fn compute_zobrist(&self) -> u64 {
        let mut key = 0;

        for square in 0..BOARD_SIZE {
            if let Some((piece, color)) = self.pieces[square] {
                key ^= ZOBRIST.piece(color, piece, square as Square);
            }
        }

        key ^= ZOBRIST.castling(self.castling_index());
        key ^= ZOBRIST.en_passant(self.en_passant_square);

        if self.side == Color::White {
            key ^= ZOBRIST.side_to_move();
        }

        key
    }

    fn castling_index(&self) -> usize {
        let white = self.castling[Color::White as usize];
        let black = self.castling[Color::Black as usize];

        let mut index = 0;
        if white & flags::KSIDE_CASTLE != 0 {
            index |= 1;
        }
        if white & flags::QSIDE_CASTLE != 0 {
            index |= 2;
        }
        if black & flags::KSIDE_CASTLE != 0 {
            index |= 4;
        }
        if black & flags::QSIDE_CASTLE != 0 {
            index |= 8;
        }
        index
    }
}
