//! Starting the wrapped tools.
//!
//! The front door never looks inside a tool: it starts it with the caller's
//! arguments, waits, and hands back the exit code.

use std::{
    env::consts::EXE_SUFFIX,
    ffi::OsString,
    path::PathBuf,
    process::{self, ExitStatus},
};

use log::debug;

use crate::{
    config::Settings,
    error::{Error, Result},
    registry::{Command, Target},
};

/// Runs a resolved command to completion.
pub trait Launcher {
    /// Run `command` with `args` (not including the command name) and
    /// return its exit code.
    fn launch(&self, command: &'static Command, args: &[OsString]) -> Result<i32>;
}

/// Launches tools as child processes sharing this process's stdio.
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    settings: Settings,
}

impl ProcessLauncher {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn from_env() -> Self {
        Self::new(Settings::from_env())
    }

    /// Path a native tool is expected at.
    pub fn tool_path(&self, tool: &str) -> PathBuf {
        self.settings.tool_dir.join(format!("{tool}{EXE_SUFFIX}"))
    }

    /// Build the child process for `command`, without starting it.
    pub fn process(&self, command: &'static Command, args: &[OsString]) -> Result<process::Command> {
        let mut process = match command.target {
            Target::Native(tool) => {
                let path = self.tool_path(tool);
                if !path.is_file() {
                    return Err(Error::MissingTool { command: command.name, path });
                }
                let mut process = process::Command::new(path);
                set_arg0(&mut process, command.name);
                process
            }
            Target::Module { module, function } => {
                let mut process = process::Command::new(&self.settings.python);
                process.arg("-c").arg(bootstrap(module, function, command.name));
                process
            }
        };
        process.args(args);
        Ok(process)
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&self, command: &'static Command, args: &[OsString]) -> Result<i32> {
        let mut process = self.process(command, args)?;
        debug!(
            "launching {} via {:?} with {} argument(s)",
            command.target,
            process.get_program(),
            args.len()
        );
        let status =
            process.status().map_err(|source| Error::Spawn { command: command.name, source })?;
        Ok(exit_code(status))
    }
}

/// Interpreter program that calls `module.function()` as if it were the
/// `name` script, exiting with its integer result (anything else is 0).
///
/// `-c` puts the working directory first on `sys.path`; it is removed before
/// the import unless `-P`/`PYTHONSAFEPATH` already kept it out.
pub fn bootstrap(module: &str, function: &str, name: &str) -> String {
    format!(
        "import sys\n\
         if not getattr(sys.flags, \"safe_path\", False):\n    del sys.path[0]\n\
         from {module} import {function} as entry\n\
         sys.argv[0] = {name:?}\n\
         result = entry()\n\
         sys.exit(result if isinstance(result, int) else 0)\n"
    )
}

#[cfg(unix)]
fn set_arg0(process: &mut process::Command, name: &str) {
    use std::os::unix::process::CommandExt;
    process.arg0(name);
}

#[cfg(not(unix))]
fn set_arg0(_process: &mut process::Command, _name: &str) {}

/// Exit code to report for a finished child.
#[cfg(unix)]
pub fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.code().or_else(|| status.signal().map(|signal| 128 + signal)).unwrap_or(1)
}

#[cfg(not(unix))]
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
