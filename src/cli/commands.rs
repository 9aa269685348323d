//! Subcommand handlers for config actions.

use std::path::Path;

use super::args::{Args, ConfigAction};
use crate::app::{AppError, Settings};
use crate::config::{default_path, write_default, Config};
use crate::output::Destination;

/// Handle config subcommand actions.
pub fn handle_config_action(action: &ConfigAction, args: &Args) -> Result<(), AppError> {
    let config_path = args.config.clone().unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(Some(config_path.as_path()))?;
            let settings = Settings::resolve(args, &config)?;
            print!("{}", describe(&settings, &config_path));
        }
        ConfigAction::Init => {
            write_default(&config_path)?;
            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}

/// Human-readable summary of the effective settings.
pub fn describe(settings: &Settings, config_path: &Path) -> String {
    let output = match &settings.destination {
        Destination::Stdout => "stdout".to_string(),
        Destination::File(path) => path.display().to_string(),
    };
    let state = if config_path.exists() {
        "exists"
    } else {
        "not found"
    };

    format!(
        "Current configuration:\n  Mode: {}\n  Width: {}\n  Charset: {}\n  Color: {}\n  Output: {}\n\nConfig file: {} ({})\n",
        settings.mode.name(),
        settings.width,
        settings.charset.name(),
        if settings.color { "yes" } else { "no" },
        output,
        config_path.display(),
        state
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_describe_defaults() {
        let args = Args::parse_from(["glyphcast"]);
        let settings = Settings::resolve(&args, &Config::default()).unwrap();
        let text = describe(&settings, Path::new("/nonexistent/config.toml"));
        assert!(text.contains("Mode: braille"));
        assert!(text.contains("Width: 200"));
        assert!(text.contains("Charset: detailed"));
        assert!(text.contains("Color: no"));
        assert!(text.contains("Output: stdout"));
        assert!(text.contains("/nonexistent/config.toml (not found)"));
    }

    #[test]
    fn test_init_then_show() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path_arg = path.to_str().unwrap();

        let args = Args::parse_from(["glyphcast", "--config", path_arg, "config", "init"]);
        handle_config_action(&ConfigAction::Init, &args).unwrap();
        assert!(path.exists());

        let args = Args::parse_from(["glyphcast", "--config", path_arg, "config", "show"]);
        handle_config_action(&ConfigAction::Show, &args).unwrap();

        // Second init must not clobber the file
        assert!(handle_config_action(&ConfigAction::Init, &args).is_err());
    }
}
