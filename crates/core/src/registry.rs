//! The subcommand registry: every tool reachable through the front door.

use std::{fmt, iter};

use Category::{Primary, Proofing, Secondary};
use Schedule::{Early, Standard};

/// Where a command's implementation lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// A native executable in the tool directory.
    Native(&'static str),
    /// A function in an interpreted module, run by the configured interpreter.
    Module { module: &'static str, function: &'static str },
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Native(tool) => write!(f, "native:{tool}"),
            Target::Module { module, function } => write!(f, "{module}:{function}"),
        }
    }
}

/// Help section a command is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Primary,
    Secondary,
    Proofing,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Primary, Category::Secondary, Category::Proofing];

    pub fn title(self) -> &'static str {
        match self {
            Category::Primary => "Primary Commands:",
            Category::Secondary => "Secondary Commands:",
            Category::Proofing => "Proofing Commands:",
        }
    }
}

/// When a command's legacy standalone wrapper is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Schedule {
    /// Rarely used tools, removed after the early removal date.
    Early,
    /// Everything else, removed with the next major version.
    Standard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub target: Target,
    pub description: &'static str,
    pub category: Category,
    pub schedule: Schedule,
}

impl Command {
    /// Canonical name followed by every alias.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        iter::once(self.name).chain(self.aliases.iter().copied())
    }

    pub fn is_native(&self) -> bool {
        matches!(self.target, Target::Native(_))
    }
}

const fn native(
    name: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    category: Category,
    schedule: Schedule,
) -> Command {
    Command { name, aliases, target: Target::Native(name), description, category, schedule }
}

const fn module(
    name: &'static str,
    aliases: &'static [&'static str],
    (module, function): (&'static str, &'static str),
    description: &'static str,
    category: Category,
    schedule: Schedule,
) -> Command {
    Command { name, aliases, target: Target::Module { module, function }, description, category, schedule }
}

const COMMANDS: &[Command] = &[
    // Native tools
    native("tx", &[], "Font converter and analyzer", Primary, Standard),
    native("sfntedit", &["se"], "SFNT table editor", Primary, Standard),
    native("spot", &[], "SFNT font inspector", Primary, Standard),
    native("addfeatures", &["af"], "Feature file compiler", Primary, Early),
    native("mergefonts", &["mf"], "Merge font files", Primary, Standard),
    native("rotatefont", &["rf"], "Rotate font glyphs", Primary, Standard),
    native("detype1", &["dt1"], "Type 1 font decompiler", Secondary, Early),
    native("type1", &["t1"], "Type 1 font tool", Secondary, Early),
    native("sfntdiff", &[], "Compare SFNT fonts", Secondary, Early),
    // Build & processing
    module("makeotf", &["mo"], ("afdko.makeotf", "main"), "Build OpenType font", Primary, Standard),
    module("buildcff2vf", &["bvf"], ("afdko.buildcff2vf", "main"), "Build CFF2 variable font", Primary, Standard),
    module("buildmasterotfs", &["bmo"], ("afdko.buildmasterotfs", "main"), "Build master OTF fonts", Primary, Standard),
    module("makeinstancesufo", &["miu"], ("afdko.makeinstancesufo", "main"), "Generate UFO instances", Primary, Standard),
    module("checkoutlinesufo", &["cou"], ("afdko.checkoutlinesufo", "main"), "Check UFO outlines", Primary, Standard),
    module("comparefamily", &["cf"], ("afdko.comparefamily", "main"), "Compare font family", Secondary, Early),
    module("otc2otf", &[], ("afdko.otc2otf", "main"), "Extract OTFs from OTC", Secondary, Early),
    module("otf2otc", &[], ("afdko.otf2otc", "main"), "Combine OTFs into OTC", Secondary, Early),
    module("otf2ttf", &[], ("afdko.otf2ttf", "main"), "Convert OTF to TTF", Secondary, Standard),
    module("ttfcomponentizer", &[], ("afdko.ttfcomponentizer", "main"), "Add TTF components", Secondary, Early),
    module("ttfdecomponentizer", &[], ("afdko.ttfdecomponentizer", "main"), "Remove TTF components", Secondary, Early),
    module("ttxn", &[], ("afdko.ttxn", "main"), "TTX wrapper", Secondary, Standard),
    // Hinting
    module("otfautohint", &["autohint", "ah"], ("afdko.otfautohint.__main__", "main"), "Auto-hint fonts", Primary, Standard),
    module("otfstemhist", &["stemhist", "sh"], ("afdko.otfautohint.__main__", "stemhist"), "Generate stem histogram", Primary, Standard),
    // Proofing
    module("charplot", &[], ("afdko.proofpdf", "charplot"), "Generate character proof", Proofing, Early),
    module("digiplot", &[], ("afdko.proofpdf", "digiplot"), "Generate digitization proof", Proofing, Early),
    module("fontplot", &[], ("afdko.proofpdf", "fontplot"), "Generate font proof", Proofing, Early),
    module("fontplot2", &[], ("afdko.proofpdf", "fontplot2"), "Generate font proof (v2)", Proofing, Early),
    module("fontsetplot", &[], ("afdko.proofpdf", "fontsetplot"), "Generate font set proof", Proofing, Early),
    module("hintplot", &[], ("afdko.proofpdf", "hintplot"), "Generate hint proof", Proofing, Early),
    module("waterfallplot", &[], ("afdko.proofpdf", "waterfallplot"), "Generate waterfall proof", Proofing, Standard),
];

/// Every canonical command, in registration order.
pub fn commands() -> &'static [Command] {
    COMMANDS
}

/// Resolve a canonical name or abbreviation. Matching is exact.
pub fn find(word: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.names().any(|name| name == word))
}

/// Commands listed under `category`, in registration order.
pub fn in_category(category: Category) -> impl Iterator<Item = &'static Command> {
    COMMANDS.iter().filter(move |command| command.category == category)
}
