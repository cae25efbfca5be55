use std::{fs::File, path::Path, sync::Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use tracing_subscriber::EnvFilter;

use termtoe::cli::{self, Cli};
use termtoe::core::runner::{Runner, SessionEnd};
use termtoe::core::terminal::{KeyboardInput, TerminalUi};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;
    init_logging(settings.log_file.as_deref())?;

    let mut rng: Box<dyn RngCore> = match settings.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };
    let engine = cli::build_engine(&settings, rng.as_mut())?;

    let mut runner = Runner::new(engine, TerminalUi::init(), KeyboardInput);
    let result = runner.run();
    ratatui::restore();

    match result? {
        SessionEnd::Won(name) => println!("Congratulations {}! You won!", name),
        SessionEnd::Draw => println!("It's a draw!"),
        SessionEnd::Quit => println!("Game abandoned."),
    }
    Ok(())
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}
