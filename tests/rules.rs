use rokada::controller::GameController;
use rokada::game::{Color, Game, Piece, Square, SquareExt, flags};

#[test]
fn test_put_get_remove() {
    let mut game = Game::new();
    game.clear();

    assert!(game.put(Piece::Rook, Color::Black, "a1"));
    assert_eq!(game.get("a1"), Some((Piece::Rook, Color::Black)));

    // squares are case-insensitive
    assert!(game.put(Piece::Knight, Color::White, "B2"));
    assert_eq!(game.get("b2"), Some((Piece::Knight, Color::White)));

    // bad squares are refused
    assert!(!game.put(Piece::Pawn, Color::White, "a9"));
    assert!(!game.put(Piece::Pawn, Color::White, "bad_square"));

    let mut game = Game::new();
    assert_eq!(game.remove("d1"), Some((Piece::Queen, Color::White)));
    assert_eq!(game.get("d1"), None);
    assert_eq!(game.remove("D8"), Some((Piece::Queen, Color::Black)));

    // empty and invalid squares remove nothing
    assert_eq!(game.remove("e4"), None);
    assert_eq!(game.remove("bad_square"), None);
}

#[test]
fn test_put_second_king_refused() {
    let mut game = Game::new();
    game.clear();

    assert!(game.put(Piece::King, Color::White, "a2"));
    let before = game.get_fen();

    // a second white king somewhere else must fail without touching the board
    assert!(!game.put(Piece::King, Color::White, "a3"));
    assert_eq!(game.get_fen(), before);

    // overwriting the king on its own square is fine
    assert!(game.put(Piece::King, Color::White, "a2"));

    assert!(game.put(Piece::King, Color::Black, "e8"));
    assert!(!game.put(Piece::King, Color::Black, "d8"));
}

#[test]
fn test_put_over_king_clears_cache() {
    let mut game = Game::new();
    game.clear();

    assert!(game.put(Piece::King, Color::Black, "e8"));
    assert!(game.put(Piece::Rook, Color::White, "e8"));

    // the black king is gone, so another one may be placed anywhere
    assert!(game.put(Piece::King, Color::Black, "a8"));
}

#[test]
fn test_from_fen_rejects_malformed_input() {
    for fen in [
        "",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",       // missing fields
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1", // bad side
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KXkq - 0 1", // bad castling
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1", // bad en passant
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1", // bad clock
        "rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", // nine pawns
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN w KQkq - 0 1", // short rank
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR/8 w KQkq - 0 1", // extra rank
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNJ w KQkq - 0 1", // unknown piece
        "KK6/8/8/8/8/8/8/k7 w - - 0 1",                      // two white kings
    ] {
        assert!(Game::from_fen(fen).is_none(), "accepted bad FEN: {}", fen);
    }

    // clock-less FENs are fine, the clocks just default
    let game = Game::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
        .expect("four-field FEN parses");
    assert!(game.get_fen().ends_with("0 1"));
}

#[test]
fn test_clear() {
    let mut game = Game::new();
    game.clear();

    assert_eq!(game.get_fen(), "8/8/8/8/8/8/8/8 w - - 0 1");

    // attack queries against a missing king hold vacuously
    assert!(!game.in_check());
    assert!(!game.is_king_attacked(Color::White));
    assert!(!game.is_king_attacked(Color::Black));
}

#[test]
fn test_in_check() {
    let mut game = Game::new();
    assert!(!game.in_check());

    let mut game =
        Game::from_fen("rnb1kbnr/pppp1ppp/8/8/4Pp1q/2N5/PPPP2PP/R1BQKBNR w KQkq - 2 4")
            .expect("position parses");
    assert!(game.in_check());
    assert!(!game.in_checkmate());
}

#[test]
fn test_checkmates() {
    for fen in [
        "8/5r2/4K1q1/4p3/3k4/8/8/8 w - - 0 7",
        "4r2r/p6p/1pnN2p1/kQp5/3pPq2/3P4/PPP3PP/R5K1 b - - 0 2",
        "r3k2r/ppp2p1p/2n1p1p1/8/2B2P1q/2NPb1n1/PP4PP/R2Q3K w kq - 0 8",
        "8/6R1/pp1r3p/6p1/P3R1Pk/1P4P1/7K/8 b - - 0 4",
    ] {
        let mut game = Game::from_fen(fen).expect("position parses");

        assert!(game.in_checkmate(), "expected checkmate: {}", fen);
        assert!(game.in_check(), "checkmate implies check: {}", fen);
        assert!(!game.in_stalemate(), "checkmate excludes stalemate: {}", fen);
        assert!(game.legal_moves(None).is_empty());
    }
}

#[test]
fn test_stalemates() {
    for fen in [
        "1R6/8/8/8/8/8/7R/k6K b - - 0 1",
        "8/8/5k2/p4p1p/P4K1P/1r6/8/8 w - - 0 2",
    ] {
        let mut game = Game::from_fen(fen).expect("position parses");

        assert!(game.in_stalemate(), "expected stalemate: {}", fen);
        assert!(!game.in_check(), "stalemate excludes check: {}", fen);
        assert!(!game.in_checkmate(), "stalemate excludes checkmate: {}", fen);
        assert!(game.legal_moves(None).is_empty());
    }
}

#[test]
fn test_en_passant_capture_cannot_expose_king() {
    // Taking en passant would clear the fourth rank and leave the black
    // king staring at the queen; pushing the pawn keeps the line shut.
    let mut game =
        Game::from_fen("8/8/8/8/k2Pp2Q/8/8/4K3 b - d3 0 1").expect("position parses");

    let pseudo = game.generate_moves(Some(Square::E4));
    assert_eq!(pseudo.len(), 2);
    assert!(
        pseudo
            .iter()
            .any(|board_move| board_move.flags & flags::EP_CAPTURE != 0)
    );

    let legal = game.legal_moves(Some(Square::E4));
    assert_eq!(legal.len(), 1);
    assert_eq!(legal[0].to, Square::E3);
}

#[test]
fn test_legal_moves_leave_king_safe() {
    let positions = [
        "rnb1kbnr/pppp1ppp/8/8/4Pp1q/2N5/PPPP2PP/R1BQKBNR w KQkq - 2 4",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ];

    for fen in positions {
        let mut game = Game::from_fen(fen).expect("position parses");
        let us = game.side;

        for board_move in game.legal_moves(None) {
            game.make_move(board_move);
            assert!(
                !game.is_king_attacked(us),
                "move {} leaves the king hanging in {}",
                board_move.unparse(),
                fen
            );
            game.unmake_move();
        }
    }
}

#[test]
fn test_castling_both_sides() {
    let mut game =
        Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("position parses");

    let kside = game
        .find_move(Square::E1, Square::G1, None)
        .expect("king-side castle is legal");
    assert!(kside.flags & flags::KSIDE_CASTLE != 0);

    let qside = game
        .find_move(Square::E1, Square::C1, None)
        .expect("queen-side castle is legal");
    assert!(qside.flags & flags::QSIDE_CASTLE != 0);

    // castling moves the rook along with the king
    game.make_move(kside);
    assert_eq!(game.get("g1"), Some((Piece::King, Color::White)));
    assert_eq!(game.get("f1"), Some((Piece::Rook, Color::White)));
    assert_eq!(game.get("h1"), None);

    let fen = game.get_fen();
    assert!(fen.contains(" kq "), "white rights are spent: {}", fen);

    game.unmake_move();
    assert_eq!(game.get_fen(), "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
}

#[test]
fn test_castling_through_attacked_square_refused() {
    // the rook on f3 covers f1, which the king would pass through
    let mut game =
        Game::from_fen("4k3/8/8/8/8/5r2/8/4K2R w K - 0 1").expect("position parses");
    assert!(game.find_move(Square::E1, Square::G1, None).is_none());

    // an attacked castling rook is no obstacle
    let mut game =
        Game::from_fen("4k3/8/8/8/8/7r/8/4K2R w K - 0 1").expect("position parses");
    assert!(game.find_move(Square::E1, Square::G1, None).is_some());
}

#[test]
fn test_rook_moves_drop_castling_rights() {
    let mut game =
        Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("position parses");

    let rook_up = game
        .find_move(Square::A1, Square::A3, None)
        .expect("rook move is legal");
    game.make_move(rook_up);

    let fen = game.get_fen();
    assert!(fen.contains(" Kkq "), "queen-side right is spent: {}", fen);

    game.unmake_move();

    // capturing the opponent's rook on its home square takes their right
    let take_rook = game
        .find_move(Square::A1, Square::A8, None)
        .expect("rook capture is legal");
    game.make_move(take_rook);

    let fen = game.get_fen();
    assert!(fen.contains(" Kk "), "both queen-side rights are spent: {}", fen);
}

#[test]
fn test_double_push_sets_en_passant() {
    let mut game = Game::new();

    let double = game
        .find_move(Square::E2, Square::E4, None)
        .expect("e2e4 is legal");
    assert!(double.flags & flags::BIG_PAWN != 0);

    game.make_move(double);
    let fen = game.get_fen();
    assert_eq!(fen.split_whitespace().nth(3), Some("e3"));

    // any reply that is not a double push clears it again
    let knight = game
        .find_move(Square::G8, Square::F6, None)
        .expect("Nf6 is legal");
    game.make_move(knight);
    assert_eq!(game.get_fen().split_whitespace().nth(3), Some("-"));
}

#[test]
fn test_en_passant_capture_removes_pawn() {
    let mut controller = GameController::new();

    for notation in ["e2e4", "d7d5", "e4e5", "f7f5"] {
        assert_eq!(
            controller.try_move_piece(notation),
            rokada::controller::MoveResultType::Success
        );
    }

    let capture = controller
        .game
        .find_move(Square::E5, Square::F6, None)
        .expect("en passant is available");
    assert!(capture.flags & flags::EP_CAPTURE != 0);

    controller.game.make_move(capture);
    assert_eq!(controller.game.get("f5"), None, "the passed pawn is gone");
    assert_eq!(
        controller.game.get("f6"),
        Some((Piece::Pawn, Color::White))
    );

    controller.game.unmake_move();
    assert_eq!(
        controller.game.get("f5"),
        Some((Piece::Pawn, Color::Black))
    );
    assert_eq!(controller.game.get("f6"), None);
}

#[test]
fn test_move_counts_and_square_filter() {
    let mut game = Game::new();

    assert_eq!(game.legal_moves(None).len(), 20);
    assert_eq!(game.moves(Some("e2"), true).len(), 2);
    assert_eq!(game.moves(Some("e1"), true).len(), 0);

    // unknown squares yield an empty listing instead of an error
    assert!(game.moves(Some("z9"), true).is_empty());
    assert!(game.moves(Some("nonsense"), true).is_empty());
}

#[test]
fn test_promotion_expands_to_four_moves() {
    let mut game = Game::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").expect("position parses");

    let moves = game.legal_moves(Some(Square::A7));
    assert_eq!(moves.len(), 4);

    for board_move in &moves {
        assert!(board_move.flags & flags::PROMOTION != 0);
    }

    let mut promotions: Vec<Piece> = moves
        .iter()
        .filter_map(|board_move| board_move.promotion)
        .collect();
    promotions.dedup();
    assert_eq!(promotions.len(), 4);

    // promoting swaps the pawn for the chosen piece
    let queen = game
        .find_move(Square::A7, Square::A8, Some(Piece::Queen))
        .expect("promotion to queen is legal");
    game.make_move(queen);
    assert_eq!(game.get("a8"), Some((Piece::Queen, Color::White)));
    assert_eq!(game.get("a7"), None);

    game.unmake_move();
    assert_eq!(game.get("a7"), Some((Piece::Pawn, Color::White)));
    assert_eq!(game.get("a8"), None);
}

#[test]
fn test_halfmove_and_fullmove_bookkeeping() {
    let mut controller = GameController::new();

    for notation in ["g1f3", "g8f6"] {
        controller.try_move_piece(notation);
    }
    assert_eq!(controller.game.halfmove_clock, 2);
    assert_eq!(controller.game.fullmove_number, 2);

    // a pawn push resets the clock
    controller.try_move_piece("e2e4");
    assert_eq!(controller.game.halfmove_clock, 0);
    assert_eq!(controller.game.fullmove_number, 2);

    controller.try_move_piece("f6e4");
    assert_eq!(controller.game.halfmove_clock, 0);
    assert_eq!(controller.game.fullmove_number, 3);
}

#[test]
fn test_random_playouts_unwind_exactly() {
    use rand::Rng;

    let mut rng = rand::rng();
    let mut game = Game::new();

    for _ in 0..20 {
        let mut fens = vec![game.get_fen()];
        let mut keys = vec![game.zobrist_key];

        for _ in 0..60 {
            let moves = game.legal_moves(None);
            if moves.is_empty() {
                break;
            }

            let board_move = moves[rng.random_range(0..moves.len())];
            game.make_move(board_move);

            fens.push(game.get_fen());
            keys.push(game.zobrist_key);
        }

        while game.history.len() > 0 {
            assert_eq!(game.get_fen(), fens.pop().expect("stack tracks history"));
            assert_eq!(game.zobrist_key, keys.pop().expect("stack tracks history"));
            game.unmake_move();
        }

        assert_eq!(game.get_fen(), fens.pop().expect("the root remains"));
        assert_eq!(game.zobrist_key, keys.pop().expect("the root remains"));

        game = Game::new();
    }
}
