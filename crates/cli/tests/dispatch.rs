//! Dispatch to native tools and legacy wrapper names, using shell scripts as
//! stand-in tools.
#![cfg(unix)]

use std::{
    fs::{self, Permissions},
    os::unix::fs::{PermissionsExt, symlink},
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FRONT_DOOR: &str = env!("CARGO_BIN_EXE_afdko");

/// A tool directory holding fake `tx` and `sfntedit` executables, plus a
/// bin directory for wrapper links.
struct Install {
    root: TempDir,
}

impl Install {
    fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("tools")).unwrap();
        fs::create_dir(root.path().join("bin")).unwrap();
        let install = Self { root };
        install.tool("tx", "echo \"tx ran: $*\"\nexit 3\n");
        install.tool("sfntedit", "echo \"sfntedit ran: $*\"\nexit 0\n");
        install
    }

    fn tool_dir(&self) -> PathBuf {
        self.root.path().join("tools")
    }

    fn tool(&self, name: &str, body: &str) {
        let path = self.tool_dir().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
        fs::set_permissions(&path, Permissions::from_mode(0o755)).unwrap();
    }

    /// Link `name` to the front door, the way packaging installs wrappers.
    fn wrapper(&self, name: &str) -> PathBuf {
        let link = self.root.path().join("bin").join(name);
        symlink(Path::new(FRONT_DOOR), &link).unwrap();
        link
    }

    /// A stand-in interpreter that echoes its arguments and exits with `code`.
    fn python(&self, code: i32) -> PathBuf {
        let path = self.root.path().join("bin").join("python");
        fs::write(&path, format!("#!/bin/sh\necho \"python ran: $#\"\nshift 2\necho \"args: $*\"\nexit {code}\n"))
            .unwrap();
        fs::set_permissions(&path, Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn command(&self, program: impl AsRef<Path>) -> Command {
        let mut cmd = Command::new(program.as_ref());
        cmd.env("AFDKO_TOOL_DIR", self.tool_dir())
            .env_remove("AFDKO_WRAPPER_MODE")
            .env_remove("AFDKO_PYTHON")
            .env_remove("PYTHONWARNINGS")
            .env_remove("RUST_LOG");
        cmd
    }

    fn afdko(&self) -> Command {
        self.command(FRONT_DOOR)
    }
}

#[test]
fn test_arguments_and_exit_code_pass_through() {
    let install = Install::new();
    install
        .afdko()
        .args(["tx", "-dump", "font.otf"])
        .assert()
        .code(3)
        .stdout("tx ran: -dump font.otf\n")
        .stderr("");
}

#[test]
fn test_abbreviation_dispatches_to_same_tool() {
    let install = Install::new();
    install.afdko().args(["se", "-d", "DSIG"]).assert().success().stdout("sfntedit ran: -d DSIG\n");
    install.afdko().args(["sfntedit", "-d", "DSIG"]).assert().success().stdout("sfntedit ran: -d DSIG\n");
}

#[test]
fn test_help_forwarding() {
    let install = Install::new();
    install.afdko().args(["-h", "tx"]).assert().code(3).stdout("tx ran: -h\n");
    install.afdko().args(["help", "se"]).assert().success().stdout("sfntedit ran: -h\n");
}

#[test]
fn test_signal_exit_code() {
    let install = Install::new();
    install.tool("spot", "kill -TERM $$\n");
    install.afdko().arg("spot").assert().code(128 + 15);
}

#[test]
fn test_module_target_exit_code_passes_through() {
    let install = Install::new();
    let python = install.python(42);
    install
        .afdko()
        .env("AFDKO_PYTHON", &python)
        .args(["mo", "-f", "x"])
        .assert()
        .code(42)
        .stdout("python ran: 4\nargs: -f x\n");
}

#[test]
fn test_missing_interpreter_is_a_load_error() {
    let install = Install::new();
    install
        .afdko()
        .env("AFDKO_PYTHON", "/nonexistent/python")
        .args(["makeotf", "-f", "x"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("Error: cannot load command 'makeotf':"));
}

#[test]
fn test_wrapper_off_by_default() {
    let install = Install::new();
    let tx = install.wrapper("tx");
    install.command(&tx).arg("-v").assert().code(3).stdout("tx ran: -v\n").stderr("");
}

#[test]
fn test_wrapper_warn_mode() {
    let install = Install::new();
    let tx = install.wrapper("tx");
    install
        .command(&tx)
        .env("AFDKO_WRAPPER_MODE", "warn")
        .arg("-v")
        .assert()
        .code(3)
        .stdout("tx ran: -v\n")
        .stderr(predicate::str::starts_with(
            "DeprecationWarning: The 'tx' command wrapper is deprecated and will be removed in \
             the next major version after March 2027.\n",
        ))
        .stderr(predicate::str::contains("The command should now be run as \"afdko tx [options]\"."))
        .stderr(predicate::str::ends_with("PYTHONWARNINGS=ignore.\n\n"));
}

#[test]
fn test_wrapper_error_mode_refuses() {
    let install = Install::new();
    let sfntedit = install.wrapper("sfntedit");
    install
        .command(&sfntedit)
        .env("AFDKO_WRAPPER_MODE", "strict")
        .arg("-x")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("Error: The 'sfntedit' wrapper is deprecated"))
        .stderr(predicate::str::contains("AFDKO_WRAPPER_MODE=off or AFDKO_WRAPPER_MODE=warn."));
}

#[test]
fn test_python_warnings_ignore_silences_wrapper() {
    let install = Install::new();
    let tx = install.wrapper("tx");
    install
        .command(&tx)
        .env("AFDKO_WRAPPER_MODE", "error")
        .env("PYTHONWARNINGS", "ignore")
        .assert()
        .code(3)
        .stderr("");
}

#[test]
fn test_invalid_mode_falls_back_to_default() {
    let install = Install::new();
    let tx = install.wrapper("tx");
    install
        .command(&tx)
        .env("AFDKO_WRAPPER_MODE", "Loud")
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "Warning: Invalid AFDKO_WRAPPER_MODE='loud'. Valid values: off, warn, error. Using default: 'off'",
        ));
}

#[test]
fn test_front_door_ignores_wrapper_mode() {
    let install = Install::new();
    install
        .afdko()
        .env("AFDKO_WRAPPER_MODE", "error")
        .arg("tx")
        .assert()
        .code(3)
        .stderr("");
}

#[test]
fn test_makeotfexe_transition_notice() {
    let install = Install::new();
    let makeotfexe = install.wrapper("makeotfexe");
    for mode in ["off", "warn", "error"] {
        install
            .command(&makeotfexe)
            .env("AFDKO_WRAPPER_MODE", mode)
            .args(["-f", "features.fea"])
            .assert()
            .code(1)
            .stderr(predicate::str::starts_with(
                "The 'makeotfexe' command has been replaced by 'addfeatures'.",
            ))
            .stderr(predicate::str::contains("afdko addfeatures -f features.fea temp.cff"));
    }
}

#[test]
fn test_abbreviation_link_is_front_door() {
    let install = Install::new();
    let se = install.wrapper("se");
    install
        .command(&se)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: afdko <command>"));
}
