use std::io;

pub enum ReplCommand {
    StartPosition(Option<Vec<String>>), // position startpos <maybe some moves>
    FenPosition(String),                // position fen <fen>
    Move(String),                       // move <from><to>[promotion]
    Undo,                               // take the last move back
    Moves(Option<String>),              // moves <maybe a square>
    Perft(String, Option<String>),      // perft <depth> [hashed|parallel]
    Fen,                                // print the position as FEN
    Board,                              // print the board
    Status,                             // print check/checkmate/stalemate
    Put(String, String),                // put <piece> <square>
    Remove(String),                     // remove <square>
    Clear,                              // empty the board
    Quit,                               // quit the program

    Invalid(String), // placeholder for invalid commands so we can pattern match
}

impl ReplCommand {
    pub fn receive() -> ReplCommand {
        let mut input = String::new();

        let bytes = io::stdin()
            .read_line(&mut input)
            .expect("Failed to read line");

        // closed stdin reads as a quit
        if bytes == 0 {
            return ReplCommand::Quit;
        }

        let parts = input.as_str().trim().split_whitespace().collect::<Vec<_>>();

        match parts.as_slice() {
            ["position", "startpos"] => ReplCommand::StartPosition(None),
            ["position", "startpos", "moves", moves @ ..] => {
                ReplCommand::StartPosition(Some(moves.iter().map(|m| m.to_string()).collect()))
            }
            ["position", "fen", fen @ ..] if !fen.is_empty() => {
                ReplCommand::FenPosition(fen.join(" "))
            }
            ["move", notation] => ReplCommand::Move(notation.to_string()),
            ["undo"] => ReplCommand::Undo,
            ["moves"] => ReplCommand::Moves(None),
            ["moves", square] => ReplCommand::Moves(Some(square.to_string())),
            ["perft", depth] => ReplCommand::Perft(depth.to_string(), None),
            ["perft", depth, mode] => {
                ReplCommand::Perft(depth.to_string(), Some(mode.to_string()))
            }
            ["fen"] => ReplCommand::Fen,
            ["board"] => ReplCommand::Board,
            ["status"] => ReplCommand::Status,
            ["put", piece, square] => {
                ReplCommand::Put(piece.to_string(), square.to_string())
            }
            ["remove", square] => ReplCommand::Remove(square.to_string()),
            ["clear"] => ReplCommand::Clear,
            ["quit"] => ReplCommand::Quit,
            _ => ReplCommand::Invalid(input.trim().to_string()),
        }
    }
}
