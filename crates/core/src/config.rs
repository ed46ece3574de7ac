//! Configuration for the afdko front door.
//!
//! Release constants live here as plain items. Tool locations are read from
//! the environment into [`Settings`]; the wrapper mode is read separately by
//! [`WrapperMode::from_env`], and only when running as a wrapper.

use std::{
    env::{self, current_exe},
    ffi::OsString,
    path::PathBuf,
};

use chrono::NaiveDate;

use crate::deprecation::WrapperMode;

/// Name of the unified command, as typed by users.
pub const PROGRAM_NAME: &str = "afdko";

/// Product version being released.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Release date of [`VERSION`].
pub const RELEASE_DATE: NaiveDate = date(2026, 3, 15);

/// Wrappers scheduled for early removal go away after this date.
pub const EARLY_REMOVAL_DATE: NaiveDate = date(2026, 9, 15);

/// All other wrappers go away with the first major version after this date.
pub const STANDARD_REMOVAL_DATE: NaiveDate = date(2027, 3, 15);

/// Wrapper mode used when `AFDKO_WRAPPER_MODE` is unset or invalid.
pub const DEFAULT_WRAPPER_MODE: WrapperMode = WrapperMode::Off;

/// Controls how deprecated wrapper names behave.
pub const WRAPPER_MODE_VAR: &str = "AFDKO_WRAPPER_MODE";

/// `PYTHONWARNINGS=ignore` silences wrappers, as the legacy scripts did.
pub const PYTHON_WARNINGS_VAR: &str = "PYTHONWARNINGS";

/// Overrides the directory holding native tool executables.
pub const TOOL_DIR_VAR: &str = "AFDKO_TOOL_DIR";

/// Overrides the interpreter used for module targets.
pub const PYTHON_VAR: &str = "AFDKO_PYTHON";

#[cfg(windows)]
const DEFAULT_PYTHON: &str = "python";
#[cfg(not(windows))]
const DEFAULT_PYTHON: &str = "python3";

/// Calendar date for a release constant. Invalid dates fail const evaluation.
const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid release constant date"),
    }
}

/// Where the wrapped tools live, resolved from the environment.
///
/// The wrapper mode is not part of this: only wrapper invocations read it.
#[derive(Debug, Clone)]
pub struct Settings {
    pub tool_dir: PathBuf,
    pub python: OsString,
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(|key| env::var_os(key))
    }

    /// Resolve settings through an arbitrary variable lookup.
    pub fn resolve(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let tool_dir = lookup(TOOL_DIR_VAR)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_tool_dir);

        let python = lookup(PYTHON_VAR)
            .filter(|python| !python.is_empty())
            .unwrap_or_else(|| OsString::from(DEFAULT_PYTHON));

        Self { tool_dir, python }
    }
}

/// `<exe dir>/../libexec/afdko`, falling back to a relative path when the
/// executable location is unknown.
fn default_tool_dir() -> PathBuf {
    let libexec = PathBuf::from("libexec").join(PROGRAM_NAME);
    current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(|bin| bin.parent()).map(|prefix| prefix.join(&libexec)))
        .unwrap_or(libexec)
}
