use crate::game::board::Game;
use crate::game::moves::{BoardMove, flags};
use crate::game::pieces::Piece;
use crate::game::square::{Square, SquareExt};

/// Coordinate notation: source square, target square and an optional
/// promotion piece, e.g. `e2e4` or `a7a8q`.
pub fn parse_long_algebraic(notation: &str) -> Option<(Square, Square, Option<Piece>)> {
    if !notation.is_ascii() || !(4..=5).contains(&notation.len()) {
        return None;
    }

    let from = Square::parse(&notation[0..2])?;
    let to = Square::parse(&notation[2..4])?;

    let promotion = match notation.len() {
        5 => {
            let piece = Piece::from_char(notation[4..].chars().next()?.to_ascii_lowercase())?;
            if !Piece::PROMOTIONS.contains(&piece) {
                return None;
            }
            Some(piece)
        }
        _ => None,
    };

    Some((from, to, promotion))
}

/// Standard algebraic notation for a legal move in the current position.
/// The game is borrowed mutably to probe for check and checkmate.
pub fn to_san(game: &mut Game, board_move: BoardMove) -> String {
    let mut output = String::new();

    if board_move.flags & flags::KSIDE_CASTLE != 0 {
        output.push_str("O-O");
    } else if board_move.flags & flags::QSIDE_CASTLE != 0 {
        output.push_str("O-O-O");
    } else {
        if board_move.piece != Piece::Pawn {
            output.push(board_move.piece.to_char().to_ascii_uppercase());
            output.push_str(&disambiguator(game, board_move));
        }

        if board_move.is_capture() {
            if board_move.piece == Piece::Pawn {
                output.push((b'a' + board_move.from.file()) as char);
            }
            output.push('x');
        }

        output.push_str(&board_move.to.unparse());

        if let Some(promotion) = board_move.promotion {
            output.push('=');
            output.push(promotion.to_char().to_ascii_uppercase());
        }
    }

    game.make_move(board_move);
    if game.in_check() {
        output.push(if game.in_checkmate() { '#' } else { '+' });
    }
    game.unmake_move();

    output
}

/// The from-square fragment telling two identical pieces that can reach
/// the same square apart. Empty when the move is unambiguous; prefers
/// the file letter, falls back to the rank digit, and spells the whole
/// square when neither alone settles it.
fn disambiguator(game: &mut Game, board_move: BoardMove) -> String {
    let mut ambiguities = 0;
    let mut same_rank = 0;
    let mut same_file = 0;

    for other in game.legal_moves(None) {
        if other.piece != board_move.piece
            || other.from == board_move.from
            || other.to != board_move.to
        {
            continue;
        }

        ambiguities += 1;
        if other.from.rank() == board_move.from.rank() {
            same_rank += 1;
        }
        if other.from.file() == board_move.from.file() {
            same_file += 1;
        }
    }

    if ambiguities == 0 {
        return String::new();
    }

    let from = board_move.from.unparse();

    if same_rank > 0 && same_file > 0 {
        from
    } else if same_file > 0 {
        from[1..].to_string()
    } else {
        from[..1].to_string()
    }
}
