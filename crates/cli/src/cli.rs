//! Front-door argument parsing and dispatch.

use std::{ffi::OsString, process::ExitCode};

use anyhow::Result;
use clap::{Parser, Subcommand};

use afdko_core::{
    Category, Launcher, Shell, completion,
    config::{PROGRAM_NAME, RELEASE_DATE, VERSION},
    dispatch, help, wrapper_names,
};

#[derive(Parser)]
#[command(name = "afdko")]
#[command(about = "Adobe Font Development Kit for OpenType")]
#[command(disable_help_flag = true, disable_help_subcommand = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Show help, or forward -h to COMMAND
    #[arg(short, long, value_name = "COMMAND", num_args = 0..=1)]
    pub help: Option<Option<String>>,

    /// List secondary commands
    #[arg(short, long)]
    pub secondary: bool,

    /// List proofing commands
    #[arg(short, long = "plot")]
    pub proofing: bool,

    /// List every command
    #[arg(short, long)]
    pub all: bool,

    /// Print version information
    #[arg(long)]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a shell completion script
    #[command(disable_help_flag = true)]
    Completion {
        #[arg(allow_hyphen_values = true)]
        shell: Option<String>,
    },
    /// Show help, or forward -h to COMMAND
    Help { command: Option<String> },
    /// List legacy wrapper names, one per line
    #[command(hide = true)]
    Wrappers,
    #[command(external_subcommand)]
    Tool(Vec<OsString>),
}

impl Cli {
    fn categories(&self) -> Vec<Category> {
        if self.all {
            return Category::ALL.to_vec();
        }
        let mut categories = Vec::new();
        if self.secondary {
            categories.push(Category::Secondary);
        }
        if self.proofing {
            categories.push(Category::Proofing);
        }
        categories
    }

    pub fn run(self, launcher: &dyn Launcher) -> Result<ExitCode> {
        if self.version {
            println!("{PROGRAM_NAME} {VERSION} ({RELEASE_DATE})");
            return Ok(ExitCode::SUCCESS);
        }

        let categories = self.categories();
        match (self.help, self.command) {
            (Some(Some(command)), _) => forward_help(launcher, &command),
            (Some(None), _) => print_help(&categories, ExitCode::SUCCESS),
            (None, Some(command)) => command.run(launcher),
            (None, None) if !categories.is_empty() => print_help(&categories, ExitCode::SUCCESS),
            (None, None) => print_help(&[], ExitCode::FAILURE),
        }
    }
}

impl Commands {
    pub fn run(self, launcher: &dyn Launcher) -> Result<ExitCode> {
        match self {
            Commands::Completion { shell } => completion(shell.as_deref()),
            Commands::Help { command: Some(command) } => forward_help(launcher, &command),
            Commands::Help { command: None } => print_help(&[], ExitCode::SUCCESS),
            Commands::Wrappers => {
                for name in wrapper_names() {
                    println!("{name}");
                }
                Ok(ExitCode::SUCCESS)
            }
            Commands::Tool(argv) => {
                let Some((word, args)) = argv.split_first() else {
                    return print_help(&[], ExitCode::FAILURE);
                };
                let word = word.to_string_lossy();
                let code = dispatch(launcher, &word, args)?;
                Ok(exit_code(code))
            }
        }
    }
}

fn print_help(categories: &[Category], code: ExitCode) -> Result<ExitCode> {
    print!("{}", help::render(categories));
    Ok(code)
}

/// `afdko -h <command>` runs `<command> -h`.
fn forward_help(launcher: &dyn Launcher, word: &str) -> Result<ExitCode> {
    if word == "completion" {
        return completion(None);
    }
    let code = dispatch(launcher, word, &[OsString::from("-h")])?;
    Ok(exit_code(code))
}

fn completion(shell: Option<&str>) -> Result<ExitCode> {
    match shell {
        None | Some("-h" | "--help" | "help") => {
            print!("{}", completion::usage());
        }
        Some(shell) => {
            let shell: Shell = shell.parse()?;
            print!("{}", shell.generate());
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Map a child exit code onto this process's. Codes outside 0..=255 become 1.
pub fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map(ExitCode::from).unwrap_or(ExitCode::FAILURE)
}
