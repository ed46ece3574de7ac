//! afdko core - command registry, help, completion and wrapper policy for the
//! unified `afdko` front door.

pub mod completion;
pub mod config;
pub mod deprecation;
pub mod dispatch;
pub mod error;
pub mod help;
pub mod launch;
pub mod registry;

pub use completion::Shell;
pub use config::Settings;
pub use deprecation::{Wrapper, WrapperAction, WrapperMode, wrapper_names};
pub use dispatch::dispatch;
pub use error::{Error, Result};
pub use launch::{Launcher, ProcessLauncher};
pub use registry::{Category, Command, Schedule, Target};
