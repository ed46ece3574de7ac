//! Legacy standalone entry points.
//!
//! The `afdko` binary doubles as every deprecated tool name: installed (or
//! linked) as `tx`, `makeotf`, ... it applies the wrapper policy and then
//! behaves like `afdko <name>`.

use std::{
    ffi::{OsStr, OsString},
    path::Path,
    process::ExitCode,
};

use anyhow::Result;
use log::debug;

use afdko_core::{Launcher, Wrapper, WrapperAction, WrapperMode};

use crate::cli::exit_code;

/// The wrapper this process was started as, judging by `argv[0]`.
pub fn invoked_as(argv0: &OsStr) -> Option<Wrapper> {
    let stem = Path::new(argv0).file_stem()?.to_str()?;
    Wrapper::find(stem)
}

pub fn run(wrapper: Wrapper, args: &[OsString], launcher: &dyn Launcher) -> Result<ExitCode> {
    debug!("invoked as legacy wrapper '{}'", wrapper.name());
    let command = match wrapper.action(WrapperMode::from_env) {
        WrapperAction::Run(command) => command,
        WrapperAction::WarnThenRun(message, command) => {
            eprintln!("{message}");
            command
        }
        WrapperAction::Refuse(message) => {
            eprintln!("{message}");
            return Ok(ExitCode::FAILURE);
        }
    };
    let code = launcher.launch(command, args)?;
    Ok(exit_code(code))
}
