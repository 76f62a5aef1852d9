use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use box_snake::config::Palette;
use box_snake::error::AppError;
use box_snake::game::GameState;
use box_snake::logging;
use box_snake::renderer;
use box_snake::session::{Control, Session};
use box_snake::settings::{self, Overrides, Settings};
use box_snake::terminal_runtime::Screen;
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::info;

/// Longest wait for input while nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Settings file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Milliseconds between gameplay ticks.
    #[arg(long = "tick-ms", value_name = "MS")]
    tick_ms: Option<u64>,

    /// Board side in logical units.
    #[arg(long, value_name = "UNITS")]
    box_size: Option<u16>,

    /// Cell side in logical units.
    #[arg(long, value_name = "UNITS")]
    cell_size: Option<u16>,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Append structured logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            config_path: self.config.clone(),
            box_size: self.box_size,
            cell_size: self.cell_size,
            tick_interval_ms: self.tick_ms,
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("box-snake: {error}");
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    logging::init(cli.log_file.as_deref())?;
    let settings = settings::load(&cli.overrides())?;
    info!(
        grid_side = settings.geometry.grid_side(),
        tick_ms = settings.tick_interval.as_millis(),
        "settings loaded"
    );

    let state = match settings.seed {
        Some(seed) => GameState::new_with_seed(settings.geometry, seed),
        None => GameState::new(settings.geometry),
    };
    let mut session = Session::new(state, settings.tick_interval);

    let mut screen = Screen::enter()?;
    event_loop(&mut screen, &mut session, &settings)?;
    info!(high_score = session.state().high_score, "session ended");
    Ok(())
}

fn event_loop(
    screen: &mut Screen,
    session: &mut Session,
    settings: &Settings,
) -> Result<(), AppError> {
    let palette: &Palette = &settings.palette;

    loop {
        if session.take_redraw() {
            screen
                .terminal_mut()
                .draw(|frame| renderer::render(frame, session.state(), palette))?;
        }

        let timeout = session.poll_timeout(Instant::now(), IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if session.handle_key(key, Instant::now()) == Control::Quit {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => session.invalidate(),
                _ => {}
            }
        }

        let _ = session.on_timer(Instant::now());
    }
}
