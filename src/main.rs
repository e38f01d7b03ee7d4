//! WheelSpin - Terminal lottery wheel
//!
//! Spins two independent wheels (people and songs) built from user-edited
//! lists and reports the entry under the pointer when a spin settles.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use wheelspin::config::Config;
use wheelspin::tui;

/// WheelSpin - Terminal lottery wheel
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Load the people list from a text file (one entry per line)
    #[arg(long, value_name = "FILE")]
    people: Option<PathBuf>,

    /// Load the songs list from a text file (one entry per line)
    #[arg(long, value_name = "FILE")]
    songs: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load or create default config
    let config = Config::load().unwrap_or_else(|_| Config::default());

    let mut app_state = tui::AppState::new(config);

    // Replace the sample lists with user-provided files, if any
    for (index, path) in [&cli.people, &cli.songs].into_iter().enumerate() {
        if let Some(path) = path {
            let text = fs::read_to_string(path)
                .context(format!("Failed to read list file: {}", path.display()))?;
            app_state.wheels[index].apply_text(&text);
        }
    }

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}
