use rokada::game::{Game, Piece, Square, SquareExt, parse_long_algebraic, to_san};

#[test]
fn test_parse_long_algebraic() {
    assert_eq!(
        parse_long_algebraic("e2e4"),
        Some((Square::E2, Square::E4, None))
    );
    assert_eq!(
        parse_long_algebraic("E2E4"),
        Some((Square::E2, Square::E4, None))
    );
    assert_eq!(
        parse_long_algebraic("a7a8q"),
        Some((Square::A7, Square::A8, Some(Piece::Queen)))
    );
    assert_eq!(
        parse_long_algebraic("e7e8N"),
        Some((Square::E7, Square::E8, Some(Piece::Knight)))
    );

    // kings are not a promotion target
    assert_eq!(parse_long_algebraic("a7a8k"), None);

    assert_eq!(parse_long_algebraic(""), None);
    assert_eq!(parse_long_algebraic("e2"), None);
    assert_eq!(parse_long_algebraic("e2e9"), None);
    assert_eq!(parse_long_algebraic("e2e4qq"), None);
    assert_eq!(parse_long_algebraic("went"), None);
}

#[test]
fn test_san_simple_moves() {
    let mut game = Game::new();

    let knight = game
        .find_move(Square::G1, Square::F3, None)
        .expect("Nf3 is legal");
    assert_eq!(to_san(&mut game, knight), "Nf3");

    let push = game
        .find_move(Square::E2, Square::E4, None)
        .expect("e4 is legal");
    assert_eq!(to_san(&mut game, push), "e4");
}

#[test]
fn test_san_pawn_captures_carry_the_file() {
    let mut game = Game::new();

    for (from, to) in [(Square::E2, Square::E4), (Square::D7, Square::D5)] {
        let board_move = game.find_move(from, to, None).expect("opening move");
        game.make_move(board_move);
    }

    let capture = game
        .find_move(Square::E4, Square::D5, None)
        .expect("exd5 is legal");
    assert_eq!(to_san(&mut game, capture), "exd5");
}

#[test]
fn test_san_en_passant() {
    let mut game = Game::new();

    for (from, to) in [
        (Square::E2, Square::E4),
        (Square::D7, Square::D5),
        (Square::E4, Square::E5),
        (Square::F7, Square::F5),
    ] {
        let board_move = game.find_move(from, to, None).expect("opening move");
        game.make_move(board_move);
    }

    let capture = game
        .find_move(Square::E5, Square::F6, None)
        .expect("en passant is legal");
    assert_eq!(to_san(&mut game, capture), "exf6");
}

#[test]
fn test_san_castling() {
    let mut game =
        Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("position parses");

    let sans = game.san_moves(None);
    assert!(sans.iter().any(|san| san == "O-O"));
    assert!(sans.iter().any(|san| san == "O-O-O"));
}

#[test]
fn test_san_file_disambiguation() {
    // both rooks reach b1 along the first rank, so the file decides
    let mut game =
        Game::from_fen("1k6/8/8/8/8/4K3/8/R6R w - - 0 1").expect("position parses");

    let left = game
        .find_move(Square::A1, Square::B1, None)
        .expect("rook move is legal");
    assert_eq!(to_san(&mut game, left), "Rab1+");

    let right = game
        .find_move(Square::H1, Square::B1, None)
        .expect("rook move is legal");
    assert_eq!(to_san(&mut game, right), "Rhb1+");
}

#[test]
fn test_san_rank_disambiguation() {
    // both rooks reach a3 along the a-file, so the rank decides
    let mut game =
        Game::from_fen("1k6/8/8/8/R7/8/R7/4K3 w - - 0 1").expect("position parses");

    let upper = game
        .find_move(Square::A4, Square::A3, None)
        .expect("rook move is legal");
    assert_eq!(to_san(&mut game, upper), "R4a3");

    let lower = game
        .find_move(Square::A2, Square::A3, None)
        .expect("rook move is legal");
    assert_eq!(to_san(&mut game, lower), "R2a3");
}

#[test]
fn test_san_full_square_disambiguation() {
    // four knights cover d5, sharing both a rank and a file with the mover
    let mut game =
        Game::from_fen("7k/2N1N3/8/8/8/2N1N3/8/7K w - - 0 1").expect("position parses");

    for (from, san) in [
        (Square::C7, "Nc7d5"),
        (Square::E7, "Ne7d5"),
        (Square::C3, "Nc3d5"),
        (Square::E3, "Ne3d5"),
    ] {
        let board_move = game
            .find_move(from, Square::D5, None)
            .expect("knight move is legal");
        assert_eq!(to_san(&mut game, board_move), san);
    }
}

#[test]
fn test_san_checkmate_suffix() {
    let mut game =
        Game::from_fen("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2")
            .expect("position parses");

    let mate = game
        .find_move(Square::D8, Square::H4, None)
        .expect("the queen reaches h4");
    assert_eq!(to_san(&mut game, mate), "Qh4#");

    // rendering the suffix must not disturb the position
    assert_eq!(
        game.get_fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2"
    );
}

#[test]
fn test_san_promotion() {
    let mut game = Game::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").expect("position parses");

    let sans = game.san_moves(Some("a7"));
    assert_eq!(sans.len(), 4);

    for san in ["a8=Q", "a8=R", "a8=B", "a8=N"] {
        assert!(sans.iter().any(|s| s == san), "missing {}", san);
    }
}
