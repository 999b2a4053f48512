//! Flappy Duck entry point
//!
//! Headless demo loop: an autopilot plays a few runs at the real tick rate,
//! recording high scores between restarts. Pass a seed as the first argument
//! to reproduce a run, and a config path as the second to override the
//! default geometry.

use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use flappy_duck::audio::LogAudio;
use flappy_duck::consts::TICK_PERIOD_MS;
use flappy_duck::driver::PollTimers;
use flappy_duck::session::{GameSession, ScoreSink, SummarySink};
use flappy_duck::sim::{GamePhase, GameState};
use flappy_duck::{GameConfig, HighScores};

const RUNS: u32 = 3;
const SCORES_PATH: &str = "highscores.json";

struct ConsoleScore;

impl ScoreSink for ConsoleScore {
    fn render(&mut self, points: u32) {
        log::info!("score: {points}");
    }
}

struct ConsoleSummary {
    game_over: Rc<Cell<bool>>,
}

impl SummarySink for ConsoleSummary {
    fn show(&mut self, final_score: u32) {
        println!("Game over! Final score: {final_score}");
        self.game_over.set(true);
    }
}

/// Jump whenever the body is sinking below the next opening's center.
fn autopilot_wants_jump(state: &GameState) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }
    let player = &state.player;
    let next = state
        .field
        .obstacles()
        .iter()
        .filter(|o| o.x + o.width >= player.x)
        .min_by(|a, b| a.x.total_cmp(&b.x));
    let target = match next {
        Some(obstacle) => obstacle.bottom_height + obstacle.opening / 2.0,
        None => state.field.area_height() / 2.0,
    };
    player.velocity <= 0.0 && player.y + player.height / 2.0 < target
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(rand::random);
    let config = match args.next() {
        Some(path) => GameConfig::load(Path::new(&path)),
        None => GameConfig::default(),
    };
    let game_over = Rc::new(Cell::new(false));
    let mut highscores = HighScores::load(Path::new(SCORES_PATH));

    let mut session = match GameSession::new(
        config,
        seed,
        PollTimers::new(),
        Box::new(LogAudio),
        Box::new(ConsoleScore),
        Box::new(ConsoleSummary {
            game_over: game_over.clone(),
        }),
    ) {
        Ok(session) => session,
        Err(err) => {
            log::error!("invalid config: {err}");
            std::process::exit(1);
        }
    };

    let mut runs = 0;
    session.start();
    loop {
        for handle in session.timers_mut().poll(Instant::now()) {
            if autopilot_wants_jump(session.state()) {
                session.jump();
            }
            session.on_timer(handle);
        }

        if game_over.take() {
            let run_seed = session.state().seed;
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            if let Some(rank) = highscores.add_score(session.score(), run_seed, now) {
                log::info!("new high score, rank {rank}");
            }
            runs += 1;
            if runs >= RUNS {
                break;
            }
            session.restart();
        }

        match session.timers_mut().next_due() {
            Some(due) => {
                let now = Instant::now();
                if due > now {
                    std::thread::sleep(due - now);
                }
            }
            None => std::thread::sleep(Duration::from_millis(TICK_PERIOD_MS)),
        }
    }

    highscores.save(Path::new(SCORES_PATH));
    if let Some(top) = highscores.top_score() {
        println!("Best: {top}");
    }
}
