use clap::Parser;
use owo_colors::OwoColorize;

use connectx::agents::Agent;
use connectx::env::{Configuration, MoveRequest, Observation};
use connectx::game::{outcome, Board, Cell, Outcome};

use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "connectx simulator",
    about = "Simulate games between two agents."
)]
struct Opts {
    #[arg(long, default_value_t = 6)]
    rows: usize,
    #[arg(long, default_value_t = 7)]
    columns: usize,
    #[arg(long, default_value_t = 4)]
    inarow: usize,
    #[arg(short, long, default_value_t = 1)]
    game_count: usize,
    #[arg(short, long)]
    verbose: bool,

    /// The two agent configurations, the first one is evaluated.
    #[arg(num_args = 2, required = true)]
    agents: Vec<Agent>,
}

fn main() {
    let Opts {
        rows,
        columns,
        inarow,
        game_count,
        verbose,
        agents,
    } = Opts::parse();

    let config = Configuration::new(rows, columns, inarow);
    let board = match Board::new(&config) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("{}: {e}", "Error".bright_red());
            return;
        }
    };

    let start = Instant::now();

    let mut wins = 0;
    let mut draws = 0;

    for i in 0..game_count {
        // alternate who moves first
        let order = if i % 2 == 0 { [0, 1] } else { [1, 0] };
        let players = [&agents[order[0]], &agents[order[1]]];

        let winner = play_game(board.clone(), players, verbose);
        let result = match winner {
            Some(p) if order[p] == 0 => {
                wins += 1;
                "win".bright_green().to_string()
            }
            Some(_) => "loss".bright_red().to_string(),
            None => {
                draws += 1;
                "draw".bright_yellow().to_string()
            }
        };
        println!(
            "{}: {} {} {}ms",
            "Finish Game".bright_green(),
            i,
            result,
            start.elapsed().as_millis()
        );
    }

    println!("Result: {}/{} ({} draws)", wins, game_count, draws);
}

/// Returns the index of the winning player or `None` on a draw.
fn play_game(mut board: Board, players: [&Agent; 2], verbose: bool) -> Option<usize> {
    let config = board.config();
    let marks = [Cell::Player1, Cell::Player2];

    for turn in 0.. {
        let player = turn % 2;
        let mark = marks[player];

        let request = MoveRequest::new(
            Observation {
                board: board.cells().iter().map(|&c| u8::from(c)).collect(),
                mark: mark.into(),
            },
            config,
        );
        let column = players[player].step(&request).column;

        let (next, row) = board.apply_move(column, mark);
        if row.is_none() {
            println!("game: illegal move {} of {:?} after {} turns", column, mark, turn);
            return Some(1 - player);
        }
        board = next;

        if verbose {
            println!("{}: {} -> {:?}", turn, column, board);
        }

        match outcome(&board) {
            Outcome::Winner(winner) => {
                println!("game: {:?} wins after {} turns", winner, turn + 1);
                return Some(if winner == mark { player } else { 1 - player });
            }
            Outcome::Draw => {
                println!("game: draw after {} turns", turn + 1);
                return None;
            }
            Outcome::None => {}
        }
    }
    None
}
