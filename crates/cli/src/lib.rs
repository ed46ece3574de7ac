//! afdko command-line front door.

pub mod cli;
pub mod wrapper;

pub use afdko_core::{ProcessLauncher, Wrapper};
