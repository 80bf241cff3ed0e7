use clap::{Parser, Subcommand};

use rokada::controller::{GameController, MoveResultType};
use rokada::game::{BoardMove, Piece, Square};
use rokada::utils::ReplCommand;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Parser)]
#[command(name = "rokada", version = VERSION, about = "A chess move generator", long_about = None)]
struct Cli {
    /// Initial position as a FEN string
    #[arg(long)]
    fen: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Count the move tree to a fixed depth, then exit
    Perft {
        depth: usize,

        /// Cache subtree counts across transpositions
        #[arg(long)]
        hashed: bool,

        /// Spread the root moves over all cores
        #[arg(long)]
        parallel: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let mut controller = GameController::new();

    if let Some(fen) = &cli.fen {
        if !controller.new_game_from_fen(fen) {
            log::error!("Invalid FEN: {}", fen);
            std::process::exit(1);
        }
    }

    match cli.command {
        Some(Command::Perft {
            depth,
            hashed,
            parallel,
        }) => {
            if parallel {
                println!("Nodes: {}", controller.perft_parallel(depth));
            } else if hashed {
                print_perft(&controller.perft_hashed(depth));
            } else {
                print_perft(&controller.perft(depth));
            }
        }
        None => repl(&mut controller),
    }
}

fn print_perft(move_breakdown: &[(BoardMove, usize)]) {
    for (board_move, count) in move_breakdown {
        println!("{}: {}", board_move.unparse(), count);
    }

    let nodes: usize = move_breakdown.iter().map(|(_, count)| count).sum();
    println!("\nNodes: {}", nodes);
}

fn repl(controller: &mut GameController) {
    loop {
        match ReplCommand::receive() {
            ReplCommand::StartPosition(moves) => {
                controller.new_game();

                if let Some(moves) = moves {
                    play_moves(controller, &moves);
                }
            }
            ReplCommand::FenPosition(fen) => {
                if !controller.new_game_from_fen(&fen) {
                    log::warn!("Invalid FEN: {}", fen);
                }
            }
            ReplCommand::Move(notation) => {
                let result = controller.try_move_piece(&notation);

                match result {
                    MoveResultType::Success => controller.print(),
                    _ => log::info!("{:?}", result),
                };
            }
            ReplCommand::Undo => match controller.try_unmove_piece() {
                MoveResultType::Success => controller.print(),
                result => log::info!("{:?}", result),
            },
            ReplCommand::Moves(square) => {
                let square = square.as_deref();

                println!("{}", controller.game.san_moves(square).join(" "));

                // With a source square, also show where it can go
                if let Some(square) = square {
                    let destinations = controller
                        .game
                        .moves(Some(square), true)
                        .iter()
                        .map(|board_move| board_move.to)
                        .collect::<Vec<Square>>();

                    controller.print_with_moves(&destinations);
                }
            }
            ReplCommand::Perft(depth_string, mode) => match depth_string.parse::<usize>() {
                Ok(depth) => match mode.as_deref() {
                    None => print_perft(&controller.perft(depth)),
                    Some("hashed") => print_perft(&controller.perft_hashed(depth)),
                    Some("parallel") => {
                        println!("Nodes: {}", controller.perft_parallel(depth))
                    }
                    Some(mode) => log::warn!("Unknown perft mode: {}", mode),
                },
                Err(_) => log::warn!("Invalid depth: {}", depth_string),
            },
            ReplCommand::Fen => controller.print_fen(),
            ReplCommand::Board => controller.print(),
            ReplCommand::Status => controller.print_status(),
            ReplCommand::Put(piece, square) => {
                let mut chars = piece.chars();

                match (chars.next().and_then(Piece::from_fen_char), chars.next()) {
                    (Some((piece, color)), None) => {
                        if controller.game.put(piece, color, &square) {
                            controller.print();
                        } else {
                            log::warn!("Cannot put {:?} on '{}'", piece, square);
                        }
                    }
                    _ => log::warn!("Unknown piece: {}", piece),
                }
            }
            ReplCommand::Remove(square) => match controller.game.remove(&square) {
                Some(_) => controller.print(),
                None => log::warn!("Nothing to remove on '{}'", square),
            },
            ReplCommand::Clear => {
                controller.game.clear();
                controller.print();
            }
            ReplCommand::Quit => break,
            ReplCommand::Invalid(line) => log::warn!("Unknown command: {}", line),
        }
    }
}

fn play_moves(controller: &mut GameController, moves: &[String]) {
    for notation in moves {
        match controller.try_move_piece(notation) {
            MoveResultType::Success => {}
            result => {
                log::warn!("Move '{}' rejected: {:?}", notation, result);
                break;
            }
        }
    }
}
