//! Error types for command resolution and launching.

use std::{io, path::PathBuf, result};

use crate::completion::SUPPORTED_SHELLS;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown command '{0}'\nRun 'afdko --help' for usage.")]
    UnknownCommand(String),

    #[error(
        "Unsupported shell '{0}'\nSupported shells: {shells}\nRun 'afdko completion --help' for more information.",
        shells = SUPPORTED_SHELLS.join(", ")
    )]
    UnsupportedShell(String),

    #[error("cannot load command '{command}': no executable at {}", .path.display())]
    MissingTool { command: &'static str, path: PathBuf },

    #[error("cannot load command '{command}': {source}")]
    Spawn {
        command: &'static str,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = result::Result<T, Error>;
