use crate::game::board::Game;
use crate::game::moves::BoardMove;
use crate::game::notation::parse_long_algebraic;
use crate::game::pieces::Color;
use crate::game::square::{Square, SquareExt};

use fxhash::FxHashMap;
use rayon::prelude::*;
use std::collections::HashSet;

pub struct GameController {
    pub game: Game,
}

#[derive(Debug, PartialEq)]
pub enum MoveResultType {
    Success,         // successful move
    InvalidNotation, // wrong algebraic notation
    InvalidMove,     // not a legal move in this position
    NoHistory,       // nothing left to take back
}

type PerftTable = FxHashMap<u64, usize>;

impl GameController {
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    pub fn new_game(&mut self) {
        self.game = Game::new();
    }

    /// Replace the position, keeping the old one when the FEN is bad.
    pub fn new_game_from_fen(&mut self, fen: &str) -> bool {
        match Game::from_fen(fen) {
            Some(game) => {
                self.game = game;
                true
            }
            None => false,
        }
    }

    pub fn try_move_piece(&mut self, long_algebraic_notation: &str) -> MoveResultType {
        match parse_long_algebraic(long_algebraic_notation) {
            Some((from, to, promotion)) => {
                match self.game.find_move(from, to, promotion) {
                    Some(board_move) => {
                        self.game.make_move(board_move);
                        MoveResultType::Success
                    }
                    None => MoveResultType::InvalidMove,
                }
            }
            None => MoveResultType::InvalidNotation,
        }
    }

    pub fn try_unmove_piece(&mut self) -> MoveResultType {
        match self.game.history.len() {
            0 => MoveResultType::NoHistory,
            _ => {
                self.game.unmake_move();
                MoveResultType::Success
            }
        }
    }

    /// Node counts per root move at the given depth.
    pub fn perft(&mut self, depth: usize) -> Vec<(BoardMove, usize)> {
        let mut move_breakdown = vec![];

        for board_move in self.game.legal_moves(None) {
            let count = if depth > 1 {
                self.game.make_move(board_move);
                let count = self.game.perft(depth - 1);
                self.game.unmake_move();
                count
            } else {
                1
            };
            move_breakdown.push((board_move, count));
        }

        move_breakdown
    }

    /// Like `perft`, but caches subtree counts keyed by position and
    /// remaining depth. Pays off on positions with many transpositions.
    pub fn perft_hashed(&mut self, depth: usize) -> Vec<(BoardMove, usize)> {
        let mut table: PerftTable = FxHashMap::default();
        let mut move_breakdown = vec![];

        for board_move in self.game.legal_moves(None) {
            let count = self.count_moves_hashed(board_move, depth, &mut table);
            move_breakdown.push((board_move, count));
        }

        move_breakdown
    }

    fn count_moves_hashed(
        &mut self,
        initial_move: BoardMove,
        depth: usize,
        table: &mut PerftTable,
    ) -> usize {
        if depth <= 1 {
            return 1;
        }

        self.game.make_move(initial_move);

        if let Some(count) = table.get(&(self.game.zobrist_key ^ depth as u64)) {
            self.game.unmake_move();
            return *count;
        }

        let mut total_count = 0;

        // Bulk counting
        if depth == 2 {
            total_count = self.game.legal_moves(None).len();
        } else {
            for board_move in self.game.legal_moves(None) {
                total_count += self.count_moves_hashed(board_move, depth - 1, table);
            }
        }

        table.insert(self.game.zobrist_key ^ depth as u64, total_count);

        self.game.unmake_move();

        total_count
    }

    /// Total node count with the root moves fanned out across threads,
    /// each worker walking its own copy of the game.
    pub fn perft_parallel(&mut self, depth: usize) -> usize {
        if depth == 0 {
            return 1;
        }

        let root_moves = self.game.legal_moves(None);

        root_moves
            .into_par_iter()
            .map(|board_move| {
                let mut game = self.game.clone();
                game.make_move(board_move);
                game.perft(depth - 1)
            })
            .sum()
    }

    pub fn print_with_moves(&self, possible_moves: &[Square]) {
        const RESET: &str = "\x1b[0m";
        const LIGHT_SQUARE_BG: &str = "\x1b[48;5;172m";
        const DARK_SQUARE_BG: &str = "\x1b[48;5;130m";
        const WHITE_PIECE: &str = "\x1b[1;97m";
        const BLACK_PIECE: &str = "\x1b[1;30m";
        const MOVE_HIGHLIGHT: &str = "\x1b[1;34m";
        const HEADING_BG: &str = "\x1b[48;5;240m"; // Neutral gray background

        // Print centered heading with background
        let heading_text = match self.game.side {
            Color::White => "White to move",
            Color::Black => "Black to move",
        };
        let heading_color = match self.game.side {
            Color::White => WHITE_PIECE,
            Color::Black => BLACK_PIECE,
        };

        // Board width is 8 squares * 3 chars each = 24 chars
        let board_width = 24;
        let padding = (board_width - heading_text.len()) / 2;
        let total_padding = board_width - heading_text.len();
        let right_padding = total_padding - padding;

        println!(
            "{}{}{}{}{}{}",
            HEADING_BG,
            " ".repeat(padding),
            heading_color,
            heading_text,
            " ".repeat(right_padding),
            RESET
        );

        let move_squares: HashSet<Square> = possible_moves.iter().copied().collect();

        // Rank 8 sits in row zero, so top-down iteration is in order
        for y in 0..8 {
            let mut line = String::new();
            for x in 0..8 {
                let is_light_square = (x + y) % 2 == 0;
                let bg_color = if is_light_square {
                    LIGHT_SQUARE_BG
                } else {
                    DARK_SQUARE_BG
                };
                line.push_str(bg_color);

                let square = Square::from_position(x, y);

                match self.game.pieces[square as usize] {
                    Some((piece, color)) => {
                        let piece_color = match color {
                            Color::White => WHITE_PIECE,
                            Color::Black => BLACK_PIECE,
                        };
                        line.push_str(&format!("{} {} {}", piece_color, piece.to_emoji(), RESET));
                    }
                    None => {
                        // Check if this square is a possible move
                        if move_squares.contains(&square) {
                            line.push_str(&format!("{} ● {}", MOVE_HIGHLIGHT, RESET));
                        } else {
                            line.push_str("   ");
                        }
                    }
                }

                line.push_str(RESET);
            }
            println!("{}", line);
        }
    }

    pub fn print(&self) {
        self.print_with_moves(&[]);
    }

    pub fn print_fen(&self) {
        println!("{}", self.game.get_fen());
    }

    pub fn print_status(&mut self) {
        if self.game.in_checkmate() {
            println!("checkmate");
        } else if self.game.in_stalemate() {
            println!("stalemate");
        } else if self.game.in_check() {
            println!("check");
        } else {
            println!("ongoing");
        }
    }
}
