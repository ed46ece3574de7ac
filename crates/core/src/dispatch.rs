//! Resolve a command word and hand it to a [`Launcher`].

use std::ffi::OsString;

use log::debug;

use crate::{
    error::{Error, Result},
    launch::Launcher,
    registry::find,
};

/// Run `word` (a canonical name or abbreviation) with `args` and return the
/// tool's exit code.
pub fn dispatch(launcher: &dyn Launcher, word: &str, args: &[OsString]) -> Result<i32> {
    let command = find(word).ok_or_else(|| Error::UnknownCommand(word.to_string()))?;
    if command.name != word {
        debug!("resolved abbreviation '{word}' to '{}'", command.name);
    }
    launcher.launch(command, args)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::registry::Command;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(&'static str, Vec<OsString>)>>,
        exit_code: i32,
    }

    impl Launcher for Recorder {
        fn launch(&self, command: &'static Command, args: &[OsString]) -> Result<i32> {
            self.calls.borrow_mut().push((command.name, args.to_vec()));
            Ok(self.exit_code)
        }
    }

    fn args(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_dispatch_canonical() {
        let recorder = Recorder { exit_code: 7, ..Default::default() };
        let code = dispatch(&recorder, "tx", &args(&["-dump", "font.otf"])).unwrap();
        assert_eq!(code, 7);
        assert_eq!(*recorder.calls.borrow(), [("tx", args(&["-dump", "font.otf"]))]);
    }

    #[test]
    fn test_dispatch_abbreviation_reaches_same_command() {
        let recorder = Recorder::default();
        dispatch(&recorder, "ah", &args(&["-h"])).unwrap();
        dispatch(&recorder, "autohint", &args(&["-h"])).unwrap();
        dispatch(&recorder, "otfautohint", &args(&["-h"])).unwrap();
        let names: Vec<_> = recorder.calls.borrow().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["otfautohint"; 3]);
    }

    #[test]
    fn test_dispatch_unknown() {
        let recorder = Recorder::default();
        let err = dispatch(&recorder, "makeoft", &[]).unwrap_err();
        assert!(matches!(err, Error::UnknownCommand(ref word) if word == "makeoft"));
        assert_eq!(err.to_string(), "Unknown command 'makeoft'\nRun 'afdko --help' for usage.");
        assert!(recorder.calls.borrow().is_empty());
    }
}
