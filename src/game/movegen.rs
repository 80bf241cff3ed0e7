use crate::game::board::Game;
use crate::game::moves::{BoardMove, flags};
use crate::game::notation::to_san;
use crate::game::pieces::{Color, Piece};
use crate::game::square::{BOARD_SIZE, RANK_1, RANK_8, Square, SquareExt};
use crate::game::tables::{ATTACKS, RAYS, attack_index, piece_directions};

impl Game {
    /// Does any piece of `color` attack `square`?
    pub fn attacks(&self, color: Color, square: Square) -> bool {
        debug_assert!(!square.is_off_board());

        for index in 0..BOARD_SIZE {
            let Some((piece, piece_color)) = self.pieces[index] else {
                continue;
            };
            if piece_color != color {
                continue;
            }

            let attacker = index as Square;
            if ATTACKS[attack_index(attacker, square)] & piece.attack_bit() == 0 {
                continue;
            }

            match piece {
                Piece::Pawn => {
                    // white pawns attack toward the lower indices
                    if (attacker > square) == (color == Color::White) {
                        return true;
                    }
                }
                Piece::Knight | Piece::King => return true,
                _ => {
                    // slider, walk toward the target looking for blockers
                    let offset = RAYS[attack_index(attacker, square)] as i16;
                    let mut next = attacker as i16 + offset;
                    let mut blocked = false;

                    while next != square as i16 {
                        if self.pieces[next as usize].is_some() {
                            blocked = true;
                            break;
                        }
                        next += offset;
                    }

                    if !blocked {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Vacuously false when the king is absent.
    pub fn is_king_attacked(&self, color: Color) -> bool {
        match self.kings[color as usize] {
            Some(square) => self.attacks(!color, square),
            None => false,
        }
    }

    pub fn in_check(&self) -> bool {
        self.is_king_attacked(self.side)
    }

    pub fn in_checkmate(&mut self) -> bool {
        self.in_check() && self.legal_moves(None).is_empty()
    }

    pub fn in_stalemate(&mut self) -> bool {
        !self.in_check() && self.legal_moves(None).is_empty()
    }

    /// Pseudo-legal moves for the side to move, optionally from a single
    /// origin square. King safety is not considered here.
    pub fn generate_moves(&self, square: Option<Square>) -> Vec<BoardMove> {
        let mut moves = Vec::with_capacity(48);

        match square {
            Some(square) => self.square_moves(&mut moves, square),
            None => {
                for square in 0..BOARD_SIZE as Square {
                    if !square.is_off_board() {
                        self.square_moves(&mut moves, square);
                    }
                }
            }
        }

        moves
    }

    /// The generated moves that leave the own king unattacked.
    pub fn legal_moves(&mut self, square: Option<Square>) -> Vec<BoardMove> {
        let us = self.side;
        let candidates = self.generate_moves(square);
        let mut moves = Vec::with_capacity(candidates.len());

        for board_move in candidates {
            self.make_move(board_move);
            if !self.is_king_attacked(us) {
                moves.push(board_move);
            }
            self.unmake_move();
        }

        moves
    }

    /// Move listing over textual squares; an unknown square yields an
    /// empty listing rather than an error.
    pub fn moves(&mut self, square: Option<&str>, legal: bool) -> Vec<BoardMove> {
        let square = match square {
            Some(string) => match Square::parse(string) {
                Some(square) => Some(square),
                None => return Vec::new(),
            },
            None => None,
        };

        if legal {
            self.legal_moves(square)
        } else {
            self.generate_moves(square)
        }
    }

    pub fn san_moves(&mut self, square: Option<&str>) -> Vec<String> {
        let moves = self.moves(square, true);
        moves
            .into_iter()
            .map(|board_move| to_san(self, board_move))
            .collect()
    }

    /// Look a legal move up by its coordinates.
    pub fn find_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Option<BoardMove> {
        self.legal_moves(Some(from))
            .into_iter()
            .find(|board_move| board_move.to == to && board_move.promotion == promotion)
    }

    /// Count the move tree to a fixed depth, testing king safety on the
    /// way down. Depth 1 counts one node per legal move.
    pub fn perft(&mut self, depth: usize) -> usize {
        if depth == 0 {
            return 1;
        }

        let us = self.side;
        let mut nodes = 0;

        for board_move in self.generate_moves(None) {
            self.make_move(board_move);
            if !self.is_king_attacked(us) {
                nodes += if depth > 1 { self.perft(depth - 1) } else { 1 };
            }
            self.unmake_move();
        }

        nodes
    }

    fn square_moves(&self, moves: &mut Vec<BoardMove>, square: Square) {
        if square.is_off_board() {
            return;
        }

        let us = self.side;
        let them = !us;

        let Some((piece, color)) = self.pieces[square as usize] else {
            return;
        };
        if color != us {
            return;
        }

        if piece == Piece::Pawn {
            let direction = match us {
                Color::Black => 1,
                Color::White => -1,
            };
            let directions = piece_directions(Piece::Pawn);

            // single push, and the double from the home rank
            if let Some(next) = square.offset(directions[0] * direction) {
                if self.pieces[next as usize].is_none() {
                    self.add_move(moves, piece, square, next, flags::NORMAL);

                    if square.rank() == us.home_rank() {
                        if let Some(jump) = next.offset(directions[0] * direction) {
                            if self.pieces[jump as usize].is_none() {
                                self.add_move(moves, piece, square, jump, flags::BIG_PAWN);
                            }
                        }
                    }
                }
            }

            // diagonal captures, en passant included
            for &capture_direction in &directions[1..] {
                let Some(next) = square.offset(capture_direction * direction) else {
                    continue;
                };

                match self.pieces[next as usize] {
                    Some((_, color)) if color == them => {
                        self.add_move(moves, piece, square, next, flags::CAPTURE);
                    }
                    Some(_) => {}
                    None => {
                        if Some(next) == self.en_passant_square {
                            self.add_move(moves, piece, square, next, flags::EP_CAPTURE);
                        }
                    }
                }
            }

            return;
        }

        for &direction in piece_directions(piece) {
            let mut current = square;

            while let Some(next) = current.offset(direction) {
                match self.pieces[next as usize] {
                    Some((_, color)) => {
                        if color == them {
                            self.add_move(moves, piece, square, next, flags::CAPTURE);
                        }
                        break;
                    }
                    None => self.add_move(moves, piece, square, next, flags::NORMAL),
                }

                if !piece.is_slider() {
                    break;
                }

                current = next;
            }
        }

        // castling candidates, only ever from the king's square
        if Some(square) == self.kings[us as usize] {
            if self.castling[us as usize] & flags::KSIDE_CASTLE != 0 {
                if let (Some(passing), Some(target)) = (square.offset(1), square.offset(2)) {
                    if self.pieces[passing as usize].is_none()
                        && self.pieces[target as usize].is_none()
                        && !self.attacks(them, square)
                        && !self.attacks(them, passing)
                        && !self.attacks(them, target)
                    {
                        self.add_move(moves, piece, square, target, flags::KSIDE_CASTLE);
                    }
                }
            }

            if self.castling[us as usize] & flags::QSIDE_CASTLE != 0 {
                if let (Some(passing), Some(target), Some(rook_path)) =
                    (square.offset(-1), square.offset(-2), square.offset(-3))
                {
                    if self.pieces[passing as usize].is_none()
                        && self.pieces[target as usize].is_none()
                        && self.pieces[rook_path as usize].is_none()
                        && !self.attacks(them, square)
                        && !self.attacks(them, passing)
                        && !self.attacks(them, target)
                    {
                        self.add_move(moves, piece, square, target, flags::QSIDE_CASTLE);
                    }
                }
            }
        }
    }

    /// Record a candidate move, expanding pawn moves onto the last rank
    /// into the four promotion variants.
    fn add_move(
        &self,
        moves: &mut Vec<BoardMove>,
        piece: Piece,
        from: Square,
        to: Square,
        move_flags: u8,
    ) {
        // stays None for en passant, the target square is empty
        let captured = self.pieces[to as usize].map(|(captured, _)| captured);

        if piece == Piece::Pawn && (to.rank() == RANK_8 || to.rank() == RANK_1) {
            for promotion in Piece::PROMOTIONS {
                moves.push(BoardMove {
                    from,
                    to,
                    piece,
                    color: self.side,
                    captured,
                    promotion: Some(promotion),
                    flags: move_flags | flags::PROMOTION,
                });
            }
        } else {
            moves.push(BoardMove {
                from,
                to,
                piece,
                color: self.side,
                captured,
                promotion: None,
                flags: move_flags,
            });
        }
    }
}
