//! Writing rendered text to stdout or a file.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Where rendered text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// `None` and `-` select stdout; anything else is a file path.
    pub fn from_arg(out: Option<&Path>) -> Self {
        match out {
            Some(path) if path != Path::new("-") => Destination::File(path.to_path_buf()),
            _ => Destination::Stdout,
        }
    }
}

/// Errors that can occur while writing output.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Could not write to stdout: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("Could not write output file '{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write `text` verbatim to the destination.
pub fn write_output(dest: &Destination, text: &str) -> Result<(), OutputError> {
    match dest {
        Destination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(OutputError::Stdout)
        }
        Destination::File(path) => {
            log::info!("Writing {} bytes to {}", text.len(), path.display());
            std::fs::write(path, text).map_err(|source| OutputError::File {
                path: path.clone(),
                source,
            })
        }
    }
}
