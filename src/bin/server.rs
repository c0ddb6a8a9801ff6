use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use log::{info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use warp::Filter;

use connectx::agents::{fallback, Agent};
use connectx::env::{IndexResponse, MoveRequest, MoveResponse, API_VERSION};
use connectx::logging;

pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHOR: &str = "l4r0x";

#[derive(Debug, Parser)]
#[command(name = "connectx server", about = "ConnectX minimax agent.")]
struct Opt {
    /// IP and Port of the webserver.
    /// **Note**: Use the IP Address of your device if you want to access it from another device. (`127.0.0.1` or `localhost` is private to your computer)
    #[arg(long, default_value = "127.0.0.1:5001")]
    host: SocketAddr,
    /// Agent configuration.
    #[arg(long, default_value_t)]
    config: Agent,
}

#[tokio::main]
async fn main() {
    logging();

    let Opt { host, config } = Opt::parse();
    info!("config {config}");
    let config = Arc::new(config);

    let index = warp::get().and(warp::path::end()).map(|| {
        warn!("index");
        warp::reply::json(&IndexResponse::new(
            API_VERSION.into(),
            AUTHOR.into(),
            PACKAGE_VERSION.into(),
        ))
    });

    let r#move = warp::path("move")
        .and(with_config(config))
        .and(warp::post())
        .and(warp::body::json::<MoveRequest>())
        .and_then(step);

    warp::serve(index.or(r#move)).run(host).await
}

fn with_config(
    config: Arc<Agent>,
) -> impl Filter<Extract = (Arc<Agent>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || config.clone())
}

async fn step(config: Arc<Agent>, request: MoveRequest) -> Result<impl warp::Reply, Infallible> {
    warn!(
        "move mark {} board {}x{} ({} in a row)",
        request.observation.mark,
        request.configuration.rows,
        request.configuration.columns,
        request.configuration.inarow
    );

    let timer = Instant::now();
    let fallback_request = request.clone();
    // The search is cpu bound, keep it off the async workers
    let next_move = tokio::task::spawn_blocking(move || config.step(&request))
        .await
        .unwrap_or_else(|e| {
            warn!("agent task failed: {e}");
            let mut rng = SmallRng::from_entropy();
            MoveResponse::new(fallback(&fallback_request, &mut rng))
        });
    info!(
        "response time {:?}ms {:?}",
        timer.elapsed().as_millis(),
        next_move
    );

    Ok(warp::reply::json(&next_move))
}
