//! Front-door help text.

use std::fmt::Write;

use crate::{
    config::PROGRAM_NAME,
    registry::{Category, Command, in_category},
};

const NAME_WIDTH: usize = 20;

/// Render the overview listing the given categories.
///
/// Sections always appear in [`Category::ALL`] order, whatever order
/// `categories` is in. An empty selection renders the primary section.
pub fn render(categories: &[Category]) -> String {
    let mut selected: Vec<Category> =
        Category::ALL.into_iter().filter(|c| categories.contains(c)).collect();
    if selected.is_empty() {
        selected.push(Category::Primary);
    }

    let mut out = String::new();
    let _ = writeln!(out, "Usage: {PROGRAM_NAME} <command> [options]");
    out.push('\n');
    out.push_str("Adobe Font Development Kit for OpenType\n");

    for category in &selected {
        out.push('\n');
        let _ = writeln!(out, "{}", category.title());
        for command in in_category(*category) {
            let _ = writeln!(out, "{}", command_line(command));
        }
    }

    out.push('\n');
    let _ = writeln!(out, "Run '{PROGRAM_NAME} <command> -h' for command-specific help.");
    if selected == [Category::Primary] {
        let _ = writeln!(
            out,
            "Run '{PROGRAM_NAME} -s' for secondary commands, '{PROGRAM_NAME} -p' for proofing \
             commands, or '{PROGRAM_NAME} -a' for all."
        );
    }
    let _ = writeln!(
        out,
        "Run '{PROGRAM_NAME} completion <shell>' to generate a shell completion script."
    );
    out
}

/// `  name                 Description (alias, alias)`
fn command_line(command: &Command) -> String {
    let mut line = format!("  {:NAME_WIDTH$} {}", command.name, command.description);
    if !command.aliases.is_empty() {
        let _ = write!(line, " ({})", command.aliases.join(", "));
    }
    line
}
