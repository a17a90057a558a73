//! Query tokens and the operator trigger table.

use std::collections::HashMap;
use std::fmt;

/// The fixed operator vocabulary of the query language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Union the next operand into the accumulator.
    Add,
    /// Subtract the next operand from the accumulator.
    Remove,
    /// Intersect the accumulator with the next operand.
    Retain,
    /// Expand the next word by prefix and union every match.
    StartsWith,
    /// Stem the next word, then expand the root by prefix.
    Root,
    /// Open a bracketed sub-expression.
    GroupOpen,
    /// Close a bracketed sub-expression.
    GroupClose,
}

impl CommandKind {
    /// The operator's name, for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Add => "add",
            CommandKind::Remove => "remove",
            CommandKind::Retain => "retain",
            CommandKind::StartsWith => "starts-with",
            CommandKind::Root => "root",
            CommandKind::GroupOpen => "group-open",
            CommandKind::GroupClose => "group-close",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One token of a lexed query: an operator or a search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An operator, produced from a registered trigger character.
    Command(CommandKind),
    /// A search term (or verbatim bracket content), produced from an
    /// unrecognized run of characters.
    Param(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Command(kind) => write!(f, "operator {kind}"),
            Token::Param(word) => write!(f, "\"{word}\""),
        }
    }
}

/// The table of single-character operator triggers.
///
/// An explicit, constructed value: engines with different tables coexist
/// in one process, and tests can run against a reduced vocabulary.
/// `[` and `]` are always registered, since the tokenizer's bracket escape
/// depends on them.
#[derive(Debug, Clone)]
pub struct TriggerTable {
    triggers: HashMap<char, CommandKind>,
}

impl TriggerTable {
    /// Create a table with only the group brackets registered.
    pub fn new() -> Self {
        let mut triggers = HashMap::new();
        triggers.insert('[', CommandKind::GroupOpen);
        triggers.insert(']', CommandKind::GroupClose);
        TriggerTable { triggers }
    }

    /// The standard vocabulary: `|` add, `+` retain, `-` remove,
    /// `*` starts-with, `~` root, `[` / `]` groups.
    pub fn standard() -> Self {
        TriggerTable::new()
            .with_trigger('|', CommandKind::Add)
            .with_trigger('+', CommandKind::Retain)
            .with_trigger('-', CommandKind::Remove)
            .with_trigger('*', CommandKind::StartsWith)
            .with_trigger('~', CommandKind::Root)
    }

    /// Register a trigger character for an operator.
    pub fn with_trigger(mut self, trigger: char, kind: CommandKind) -> Self {
        self.triggers.insert(trigger, kind);
        self
    }

    /// The operator a character triggers, if any.
    pub fn get(&self, trigger: char) -> Option<CommandKind> {
        self.triggers.get(&trigger).copied()
    }

    /// The trigger character registered for an operator, if any.
    pub fn trigger_for(&self, kind: CommandKind) -> Option<char> {
        self.triggers
            .iter()
            .find(|(_, k)| **k == kind)
            .map(|(c, _)| *c)
    }
}

impl Default for TriggerTable {
    fn default() -> Self {
        TriggerTable::standard()
    }
}
