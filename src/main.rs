use showdown::{Game, Tally};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "showdown=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut path = None;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => path = Some(arg),
        }
    }
    let path = path.ok_or("usage: showdown [--json] <game-file>")?;

    let game = Game::from_path(&path)?;
    info!(plays = game.len(), %path, "loaded game file");

    let showdowns = game.play();
    if json {
        println!("{}", serde_json::to_string_pretty(&showdowns)?);
    }

    let tally = Tally::of(&showdowns);
    info!(
        player_one = tally.player_one,
        player_two = tally.player_two,
        ties = tally.ties,
        "match complete"
    );
    println!(
        "player one: {}  player two: {}  ties: {}",
        tally.player_one, tally.player_two, tally.ties
    );
    Ok(())
}
