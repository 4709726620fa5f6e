mod config;
mod console;
mod game_loop;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use common::{log, logger};

use config::get_config_manager;
use game_loop::run_game;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// Path to the YAML config; created with defaults when missing.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config).get_or_create_config()?;

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, config.logging.enabled);
    log!("Loaded config: {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = stdout.lock();
    writeln!(output, "Welcome to Tic-Tac-Toe!")?;

    let result = run_game(&mut stdin.lock(), &mut output, &config.display)?;
    log!("Final result: {}", result);

    Ok(())
}
