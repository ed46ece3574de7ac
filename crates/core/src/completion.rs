//! Shell completion scripts for the front door.
//!
//! Completion covers the first word only: canonical command names, sorted,
//! without abbreviations.

use std::{fmt::Write, str::FromStr};

use crate::{error::Error, registry::commands};

pub const SUPPORTED_SHELLS: &[&str] = &["bash", "zsh", "fish", "powershell"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl FromStr for Shell {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "fish" => Ok(Self::Fish),
            "powershell" => Ok(Self::PowerShell),
            _ => Err(Error::UnsupportedShell(s.to_lowercase())),
        }
    }
}

impl Shell {
    pub fn generate(self) -> String {
        let commands = completion_candidates();
        match self {
            Shell::Bash => bash(&commands),
            Shell::Zsh => zsh(&commands),
            Shell::Fish => fish(&commands),
            Shell::PowerShell => powershell(&commands),
        }
    }
}

/// `(name, description)` for every canonical command, sorted by name.
pub fn completion_candidates() -> Vec<(&'static str, &'static str)> {
    let mut candidates: Vec<_> = commands().iter().map(|c| (c.name, c.description)).collect();
    candidates.sort_unstable();
    candidates
}

fn bash(commands: &[(&str, &str)]) -> String {
    let names = commands.iter().map(|(name, _)| *name).collect::<Vec<_>>().join(" ");
    format!(
        r#"# bash completion for afdko
# Save this file or add to your ~/.bashrc:
#   eval "$(afdko completion bash)"

_afdko_completion() {{
    local cur="${{COMP_WORDS[COMP_CWORD]}}"
    local prev="${{COMP_WORDS[COMP_CWORD-1]}}"

    # Only complete the first argument (the command)
    if [ "$COMP_CWORD" -eq 1 ]; then
        local commands="{names}"
        COMPREPLY=($(compgen -W "$commands" -- "$cur"))
    fi
}}

complete -F _afdko_completion afdko
"#
    )
}

fn zsh(commands: &[(&str, &str)]) -> String {
    let entries = commands
        .iter()
        .map(|(name, desc)| format!("'{name}:{}'", desc.replace('\'', r"'\''")))
        .collect::<Vec<_>>()
        .join("\n        ");
    format!(
        r#"#compdef afdko
# zsh completion for afdko
# Save to a directory in your $fpath, e.g.:
#   afdko completion zsh > /usr/local/share/zsh/site-functions/_afdko
# Or add to ~/.zshrc:
#   eval "$(afdko completion zsh)"

_afdko() {{
    local -a commands
    commands=(
        {entries}
    )

    _arguments '1: :->command' '*::arg:->args'

    case $state in
        command)
            _describe 'afdko command' commands
            ;;
    esac
}}

_afdko "$@"
"#
    )
}

fn fish(commands: &[(&str, &str)]) -> String {
    let mut out = String::from(
        "# fish completion for afdko\n\
         # Save to ~/.config/fish/completions/afdko.fish:\n\
         #   afdko completion fish > ~/.config/fish/completions/afdko.fish\n\n",
    );
    for (name, desc) in commands {
        let _ = writeln!(
            out,
            r#"complete -c afdko -f -n "__fish_use_subcommand" -a {name} -d "{}""#,
            desc.replace('"', r#"\""#)
        );
    }
    out
}

fn powershell(commands: &[(&str, &str)]) -> String {
    let names = commands.iter().map(|(name, _)| format!("'{name}'")).collect::<Vec<_>>().join(", ");
    format!(
        r#"# PowerShell completion for afdko
# Add to your PowerShell profile:
#   afdko completion powershell | Out-String | Invoke-Expression
# Or open profile with:
#   notepad $profile

Register-ArgumentCompleter -Native -CommandName afdko -ScriptBlock {{
    param($wordToComplete, $commandAst, $cursorPosition)

    # Get the current line and cursor position
    $line = $commandAst.ToString()

    # Only complete if we're completing the first argument
    $words = $line -split '\s+'
    if ($words.Count -le 2) {{
        $commands = @({names})

        $commands | Where-Object {{ $_ -like "$wordToComplete*" }} | ForEach-Object {{
            [System.Management.Automation.CompletionResult]::new(
                $_,
                $_,
                'ParameterValue',
                $_
            )
        }}
    }}
}}
"#
    )
}

/// Usage for `afdko completion`.
pub fn usage() -> &'static str {
    r#"Usage: afdko completion <shell>

Generate shell completion script for afdko commands.

Supported shells:
  bash       Bourne Again Shell
  zsh        Z Shell
  fish       Friendly Interactive Shell
  powershell PowerShell

Examples:
  # bash - add to ~/.bashrc or ~/.bash_profile
  eval "$(afdko completion bash)"

  # zsh - save to a directory in $fpath
  afdko completion zsh > /usr/local/share/zsh/site-functions/_afdko

  # fish - save to completions directory
  afdko completion fish > ~/.config/fish/completions/afdko.fish

  # PowerShell - add to profile
  afdko completion powershell | Out-String | Invoke-Expression
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell() {
        assert_eq!("bash".parse::<Shell>().unwrap(), Shell::Bash);
        assert_eq!("ZSH".parse::<Shell>().unwrap(), Shell::Zsh);
        assert_eq!("Fish".parse::<Shell>().unwrap(), Shell::Fish);
        assert_eq!("PowerShell".parse::<Shell>().unwrap(), Shell::PowerShell);
    }

    #[test]
    fn test_parse_unsupported_shell() {
        let err = "Tcsh".parse::<Shell>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported shell 'tcsh'\nSupported shells: bash, zsh, fish, powershell\n\
             Run 'afdko completion --help' for more information."
        );
    }

    #[test]
    fn test_candidates_sorted_without_aliases() {
        let names: Vec<_> = completion_candidates().into_iter().map(|(name, _)| name).collect();
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(names.len(), commands().len());
        assert!(names.contains(&"otfautohint"));
        assert!(!names.contains(&"ah"));
        assert!(!names.contains(&"se"));
    }

    #[test]
    fn test_bash() {
        let script = Shell::Bash.generate();
        assert!(script.contains("complete -F _afdko_completion afdko"));
        assert!(script.contains(r#"local commands="addfeatures buildcff2vf buildmasterotfs "#));
        assert!(script.contains(r#"local cur="${COMP_WORDS[COMP_CWORD]}""#));
        assert!(!script.contains(" mo "));
    }

    #[test]
    fn test_zsh() {
        let script = Shell::Zsh.generate();
        assert!(script.starts_with("#compdef afdko\n"));
        assert!(script.contains("'tx:Font converter and analyzer'"));
        assert!(script.contains("_describe 'afdko command' commands"));
    }

    #[test]
    fn test_fish() {
        let script = Shell::Fish.generate();
        assert!(script.contains(
            r#"complete -c afdko -f -n "__fish_use_subcommand" -a makeotf -d "Build OpenType font""#
        ));
        let lines = script.lines().filter(|l| l.starts_with("complete ")).count();
        assert_eq!(lines, commands().len());
    }

    #[test]
    fn test_powershell() {
        let script = Shell::PowerShell.generate();
        assert!(script.contains("Register-ArgumentCompleter -Native -CommandName afdko"));
        assert!(script.contains("$commands = @('addfeatures', 'buildcff2vf'"));
        assert!(script.contains(r"$line -split '\s+'"));
    }

    #[test]
    fn test_usage_lists_every_shell() {
        for shell in SUPPORTED_SHELLS {
            assert!(usage().contains(&format!("afdko completion {shell}")));
        }
    }
}
