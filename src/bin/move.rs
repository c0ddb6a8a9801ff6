use clap::Parser;
use log::info;

use connectx::agents::Agent;
use connectx::env::MoveRequest;
use connectx::game::Board;
use connectx::logging;

#[derive(Parser)]
#[command(name = "connectx move", about = "Simulate a move for an agent.")]
struct Opts {
    /// Agent configuration.
    #[arg(long, default_value_t)]
    config: Agent,
    /// JSON move request.
    #[arg(value_parser = parse_request)]
    request: MoveRequest,
}

fn parse_request(s: &str) -> Result<MoveRequest, serde_json::Error> {
    serde_json::from_str(s)
}

fn main() {
    logging();

    let Opts { config, request } = Opts::parse();

    match Board::from_observation(&request.observation, &request.configuration) {
        Ok(board) => info!("{:?}", board),
        Err(e) => info!("invalid board: {e}"),
    }

    let step = config.step(&request);

    info!("Step: {:?}", step);
}
