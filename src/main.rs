use clap::Parser;

use glyphcast::app;
use glyphcast::cli::{handle_config_action, Args, Command};

fn main() {
    // Rendered text goes to stdout, so logs stay on stderr and quiet by default
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let result = match &args.command {
        Some(Command::Config { action }) => handle_config_action(action, &args),
        None => app::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
