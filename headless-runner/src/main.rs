use std::path::PathBuf;
use clap::Parser;
use asteroids_sim::{
    utility::StopWatch,
    Bounds,
    FileHighScoreStore,
    Round,
    RoundConfig,
    TickOutcome
};
use asteroids_sim::game::constants::{ASTEROID_SPAWN_INTERVAL, SCREEN_HEIGHT, SCREEN_WIDTH};

mod autopilot;

/// Plays asteroid rounds without a window, steering the ship with a simple autopilot.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Upper bound on simulated ticks across all rounds
    #[arg(long, default_value_t = 36_000)]
    ticks: u64,

    /// Seconds per tick
    #[arg(long, default_value_t = 1.0 / 60.0, value_parser = positive_f32)]
    dt: f32,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Rounds to play before stopping
    #[arg(long, default_value_t = 1)]
    rounds: u32,

    #[arg(long, default_value = "high_score.txt")]
    high_score_file: PathBuf,

    #[arg(long, default_value_t = SCREEN_WIDTH, value_parser = positive_f32)]
    width: f32,

    #[arg(long, default_value_t = SCREEN_HEIGHT, value_parser = positive_f32)]
    height: f32,

    /// Seconds between asteroid spawns
    #[arg(long, default_value_t = ASTEROID_SPAWN_INTERVAL, value_parser = positive_f32)]
    spawn_interval: f32
}

fn positive_f32(arg: &str) -> Result<f32, String> {
    let value: f32 = arg.parse().map_err(|e| format!("{}", e))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("{} is not a positive number", arg))
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    log::info!("Starting Asteroids!");
    log::info!("Screen width: {}", args.width);
    log::info!("Screen height: {}", args.height);

    let config = RoundConfig {
        bounds: Bounds { width: args.width, height: args.height },
        spawn_interval: args.spawn_interval,
        seed: args.seed
    };
    let store = FileHighScoreStore::new(&args.high_score_file);
    log::info!("High score file: {}", store.path().display());
    let mut round = Round::new(config, Box::new(store));
    round.start();

    let stop_watch = StopWatch::named("headless run");
    let mut rounds_played = 0;
    let mut ticks = 0;
    while ticks < args.ticks {
        ticks += 1;
        let input = autopilot::steer(&round.render_items());
        match round.tick(args.dt, &input) {
            TickOutcome::Running | TickOutcome::Idle => {}
            TickOutcome::RoundOver { score, high_score } => {
                rounds_played += 1;
                println!("Game over! score {} (best {})", score, high_score);
                if rounds_played >= args.rounds {
                    break;
                }
                round.restart();
            }
            TickOutcome::Quit => break
        }
    }

    let snapshot = round.snapshot();
    log::info!(
        "stopped after {} ticks in {:.1} ms: {} rounds finished, last score {}, high score {}",
        ticks, stop_watch.elapsed_ms(), rounds_played, snapshot.score, snapshot.high_score
    );
}
