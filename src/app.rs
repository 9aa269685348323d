//! Top-level pipeline: resolve settings, load, render, write.

use std::path::PathBuf;

use crate::ascii::{AsciiRenderer, CharSet, Mode, RenderError, Renderer};
use crate::cli::Args;
use crate::config::{Config, ConfigError, DEFAULT_WIDTH};
use crate::loader::{self, LoadError};
use crate::output::{self, Destination, OutputError};

/// Errors surfaced to the user by the binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not read image: {0}")]
    Load(#[from] LoadError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Effective settings after merging defaults, config file and CLI flags.
///
/// CLI flags win over the config file, which wins over built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mode: Mode,
    pub width: u32,
    pub charset: CharSet,
    pub color: bool,
    pub input: Option<PathBuf>,
    pub destination: Destination,
}

impl Settings {
    pub fn resolve(args: &Args, config: &Config) -> Result<Self, ConfigError> {
        let file = &config.render;

        let mode = match args.mode {
            Some(m) => m.into(),
            None => file.mode()?.unwrap_or_default(),
        };
        let width = match args.width {
            Some(w) => w,
            None => file.width()?.unwrap_or(DEFAULT_WIDTH),
        };
        let charset = match args.charset {
            Some(c) => c.into(),
            None => file.charset()?.unwrap_or_default(),
        };

        Ok(Self {
            mode,
            width,
            charset,
            color: args.color || file.color,
            input: args.input.clone(),
            destination: Destination::from_arg(args.out.as_deref()),
        })
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(
            self.mode,
            AsciiRenderer {
                charset: self.charset,
                color: self.color,
            },
        )
    }
}

/// Render the configured input to text without writing it anywhere.
pub fn render_to_string(settings: &Settings) -> Result<String, AppError> {
    if settings.mode != Mode::Ascii && (settings.color || settings.charset != CharSet::default()) {
        log::warn!(
            "--charset and --color only apply to ascii mode, ignoring them for {}",
            settings.mode.name()
        );
    }

    let grid = loader::load_grid(settings.input.as_deref(), settings.mode, settings.width)?;
    let text = settings.renderer().render(&grid)?;
    log::info!(
        "Rendered {} lines in {} mode",
        text.lines().count(),
        settings.mode.name()
    );
    Ok(text)
}

/// Run the render pipeline for parsed CLI arguments.
pub fn run(args: &Args) -> Result<(), AppError> {
    // If --config is given the file must exist; otherwise a broken default
    // config only warns and falls back to built-in settings
    let config = match args.config.as_deref() {
        Some(path) => Config::load_explicit(path)?,
        None => Config::load(None).unwrap_or_else(|e| {
            log::warn!("Failed to load config file: {}. Using default settings.", e);
            Config::default()
        }),
    };
    let settings = Settings::resolve(args, &config)?;
    log::debug!("Resolved settings: {:?}", settings);

    let text = render_to_string(&settings)?;
    output::write_output(&settings.destination, &text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["glyphcast"];
        full.extend_from_slice(argv);
        Args::parse_from(full)
    }

    #[test]
    fn test_resolve_builtin_defaults() {
        let settings = Settings::resolve(&args(&[]), &Config::default()).unwrap();
        assert_eq!(settings.mode, Mode::Braille);
        assert_eq!(settings.width, 200);
        assert_eq!(settings.charset, CharSet::Detailed);
        assert!(!settings.color);
        assert_eq!(settings.destination, Destination::Stdout);
        assert_eq!(settings.renderer(), Renderer::Braille);
    }

    #[test]
    fn test_resolve_config_file_values() {
        let config =
            Config::parse("[render]\nmode = \"ascii\"\nwidth = 40\ncharset = \"simple\"\ncolor = true\n")
                .unwrap();
        let settings = Settings::resolve(&args(&[]), &config).unwrap();
        assert_eq!(settings.mode, Mode::Ascii);
        assert_eq!(settings.width, 40);
        assert_eq!(
            settings.renderer(),
            Renderer::Ascii(AsciiRenderer {
                charset: CharSet::Simple,
                color: true
            })
        );
    }

    #[test]
    fn test_resolve_cli_overrides_config() {
        let config = Config::parse("[render]\nmode = \"ascii\"\nwidth = 40\n").unwrap();
        let settings =
            Settings::resolve(&args(&["-m", "ansi", "-w", "90", "-o", "out.txt"]), &config).unwrap();
        assert_eq!(settings.mode, Mode::Ansi);
        assert_eq!(settings.width, 90);
        assert_eq!(settings.destination, Destination::File(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_resolve_invalid_config_value() {
        let config = Config::parse("[render]\nmode = \"sixel\"\n").unwrap();
        assert!(Settings::resolve(&args(&[]), &config).is_err());

        // A CLI value means the bad file value is never consulted
        assert!(Settings::resolve(&args(&["-m", "ascii"]), &config).is_ok());
    }

    #[test]
    fn test_render_error_message() {
        let err = AppError::from(RenderError::ImageTooSmall {
            width: 1,
            height: 4,
        });
        assert!(err.to_string().starts_with("render error: "));
    }
}
