//! Deprecation policy for the legacy standalone wrapper names.
//!
//! Each registry command used to ship as its own script (`tx`, `makeotf`,
//! ...). Those names still work, but depending on [`WrapperMode`] they
//! either stay silent, warn and then run, or refuse to run at all.

use std::env;

use chrono::NaiveDate;
use log::warn;

use crate::{
    config::{
        DEFAULT_WRAPPER_MODE, EARLY_REMOVAL_DATE, PROGRAM_NAME, PYTHON_WARNINGS_VAR,
        STANDARD_REMOVAL_DATE, WRAPPER_MODE_VAR,
    },
    registry::{Command, Schedule, commands},
};

/// Retired tool whose wrapper only explains what replaced it.
pub const MAKEOTFEXE: &str = "makeotfexe";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperMode {
    Off,
    Warn,
    Error,
}

impl WrapperMode {
    /// Parse an `AFDKO_WRAPPER_MODE` value. Returns `None` for an unknown
    /// value; an empty value means "use the default".
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "off" | "silent" | "disabled" | "no" | "false" | "0" => Some(Self::Off),
            "warn" | "warning" | "warnings" | "yes" | "true" | "1" => Some(Self::Warn),
            "error" | "strict" | "fail" | "2" => Some(Self::Error),
            "" => Some(DEFAULT_WRAPPER_MODE),
            _ => None,
        }
    }

    pub fn from_env() -> Self {
        Self::resolve(
            env::var(WRAPPER_MODE_VAR).ok().as_deref(),
            env::var(PYTHON_WARNINGS_VAR).ok().as_deref(),
        )
    }

    /// Combine the two environment variables. `PYTHONWARNINGS=ignore` wins.
    /// An invalid mode is reported on stderr and replaced by the default.
    pub fn resolve(mode: Option<&str>, python_warnings: Option<&str>) -> Self {
        if python_warnings == Some("ignore") {
            return Self::Off;
        }
        let Some(value) = mode else {
            return DEFAULT_WRAPPER_MODE;
        };
        Self::parse(value).unwrap_or_else(|| {
            eprintln!(
                "Warning: Invalid {WRAPPER_MODE_VAR}='{}'. Valid values: off, warn, error. \
                 Using default: '{}'",
                value.trim().to_lowercase(),
                DEFAULT_WRAPPER_MODE.as_str()
            );
            DEFAULT_WRAPPER_MODE
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl Schedule {
    pub fn removal_date(self) -> NaiveDate {
        match self {
            Schedule::Early => EARLY_REMOVAL_DATE,
            Schedule::Standard => STANDARD_REMOVAL_DATE,
        }
    }

    /// Human description of when the wrapper goes away.
    pub fn removal_text(self) -> String {
        let when = self.removal_date().format("%B %Y");
        match self {
            Schedule::Early => format!("an upcoming release after {when}"),
            Schedule::Standard => format!("the next major version after {when}"),
        }
    }
}

/// What a wrapper invocation should do before (or instead of) dispatching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrapperAction {
    /// Dispatch silently.
    Run(&'static Command),
    /// Print the message to stderr, then dispatch.
    WarnThenRun(String, &'static Command),
    /// Print the message to stderr and exit 1 without dispatching.
    Refuse(String),
}

/// A legacy standalone entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapper {
    Command(&'static Command),
    /// `makeotfexe`, replaced by `addfeatures`.
    Makeotfexe,
}

impl Wrapper {
    /// Look up a wrapper by the name it was invoked as. Abbreviations are not
    /// wrapper names.
    pub fn find(name: &str) -> Option<Self> {
        if name == MAKEOTFEXE {
            return Some(Self::Makeotfexe);
        }
        commands().iter().find(|c| c.name == name).map(Self::Command)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Command(command) => command.name,
            Self::Makeotfexe => MAKEOTFEXE,
        }
    }

    /// Decide what to do. `mode` is only consulted for registry commands, so
    /// `makeotfexe` never reads (or complains about) the environment.
    pub fn action(self, mode: impl FnOnce() -> WrapperMode) -> WrapperAction {
        let command = match self {
            Self::Makeotfexe => return WrapperAction::Refuse(makeotfexe_notice()),
            Self::Command(command) => command,
        };
        match mode() {
            WrapperMode::Off => WrapperAction::Run(command),
            WrapperMode::Warn => {
                warn!("{}", short_notice(command));
                WrapperAction::WarnThenRun(warning_message(command), command)
            }
            WrapperMode::Error => WrapperAction::Refuse(error_message(command)),
        }
    }
}

/// Every wrapper name: registry commands in order, then `makeotfexe`.
pub fn wrapper_names() -> impl Iterator<Item = &'static str> {
    commands().iter().map(|c| c.name).chain([MAKEOTFEXE])
}

pub fn warning_message(command: &Command) -> String {
    let name = command.name;
    format!(
        "DeprecationWarning: The '{name}' command wrapper is deprecated and will be removed in {}.\n\
         The command should now be run as \"{PROGRAM_NAME} {name} [options]\".\n\
         \n\
         To suppress this warning, set {WRAPPER_MODE_VAR}=off or {PYTHON_WARNINGS_VAR}=ignore.\n",
        command.schedule.removal_text()
    )
}

pub fn error_message(command: &Command) -> String {
    let name = command.name;
    format!(
        "Error: The '{name}' wrapper is deprecated and will be removed in {}.\n\
         The command should now be run as \"{PROGRAM_NAME} {name} [options]\".\n\
         \n\
         To temporarily allow deprecated wrappers, set {WRAPPER_MODE_VAR}=off or \
         {WRAPPER_MODE_VAR}=warn.\n",
        command.schedule.removal_text()
    )
}

/// One-line form of the warning, for the log.
pub fn short_notice(command: &Command) -> String {
    let name = command.name;
    format!(
        "'{name}' wrapper is deprecated; use '{PROGRAM_NAME} {name}' instead. Removal: {}",
        command.schedule.removal_text()
    )
}

pub fn makeotfexe_notice() -> String {
    format!(
        "The 'makeotfexe' command has been replaced by 'addfeatures'.\n\
         \n\
         makeotfexe took a Type 1 font, converted it to a CFF table, and compiled features \
         into OpenType tables. addfeatures takes a CFF table as input and compiles the \
         features. The 'makeotf' wrapper handles this change automatically, so most users \
         won't need to adjust their workflows.\n\
         \n\
         If you were calling makeotfexe directly, you may now need to build a CFF table first \
         using 'afdko tx', which has been enhanced with some features that were previously \
         exclusive to makeotfexe, including support for GlyphOrderAndAliasDB files.\n\
         \n\
         Examples:\n\
         \x20 Old: makeotfexe -f features.fea font.pfa\n\
         \x20 New: afdko tx -cff +b font.pfa temp.cff && afdko addfeatures -f features.fea temp.cff\n\
         \n\
         \x20 Or use the makeotf command: afdko makeotf -f font.pfa -ff features.fea\n\
         \n\
         The makeotfexe wrapper will be removed in {}.\n",
        Schedule::Standard.removal_text()
    )
}
