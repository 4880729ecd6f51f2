//! Shared data-model types for the validation and diagnostics engine.
//!
//! These are plain value types, cheap to clone, with no behavior beyond
//! small helpers.

use std::collections::HashMap;

/// The three closed partitions a command name can belong to, plus the
/// deprecated-command marker used by the main-command validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandType {
    Iaas,
    Misc,
    Root,
    Deprecated,
}

impl CommandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Iaas => "iaas",
            CommandType::Misc => "misc",
            CommandType::Root => "root",
            CommandType::Deprecated => "deprecated",
        }
    }
}

/// A deprecated command is either renamed (has a direct replacement) or
/// discontinued outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeprecationKind {
    Renamed,
    Discontinued,
}

impl DeprecationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeprecationKind::Renamed => "renamed",
            DeprecationKind::Discontinued => "discontinued",
        }
    }
}

/// A single deprecation record. Invariant: `kind = Renamed ⇔ !replacement.is_empty()`;
/// `alternatives` is non-empty only when `kind = Discontinued`.
#[derive(Debug, Clone)]
pub struct DeprecationRecord {
    pub old_name: &'static str,
    pub kind: DeprecationKind,
    pub replacement: &'static str,
    pub message: &'static str,
    pub alternatives: Vec<&'static str>,
    pub doc_url: &'static str,
}

impl DeprecationRecord {
    /// Checks that every entry carries a message and a kind, and that the
    /// renamed/discontinued shape invariant holds. Exercised by a
    /// dictionary-closure test in `dictionary.rs`.
    pub fn is_internally_consistent(&self) -> bool {
        let renamed_shape = match self.kind {
            DeprecationKind::Renamed => {
                !self.replacement.is_empty() && self.alternatives.is_empty()
            }
            DeprecationKind::Discontinued => {
                self.replacement.is_empty() && !self.alternatives.is_empty()
            }
        };
        renamed_shape && !self.message.is_empty() && !self.doc_url.is_empty()
    }
}

/// Positioned parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    NotATool,
    InvalidSyntax { position: usize, reason: &'static str },
}

/// A parsed `usacloud` invocation: main command, subcommand, positional
/// args, `--key value` options, and bare flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedInvocation {
    pub raw: String,
    pub main: String,
    pub sub: String,
    pub args: Vec<String>,
    pub options: HashMap<String, String>,
    pub flags: Vec<String>,
}

impl ParsedInvocation {
    pub fn is_empty_invocation(&self) -> bool {
        self.main.is_empty()
    }
}

/// `error_kind` for the main-command validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainErrorKind {
    None,
    EmptyCommand,
    UnknownCommand,
    DeprecatedCommand,
    DiscontinuedCommand,
    UnexpectedSubcommand,
}

impl MainErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MainErrorKind::None => "",
            MainErrorKind::EmptyCommand => "empty_command",
            MainErrorKind::UnknownCommand => "unknown_command",
            MainErrorKind::DeprecatedCommand => "deprecated_command",
            MainErrorKind::DiscontinuedCommand => "discontinued_command",
            MainErrorKind::UnexpectedSubcommand => "unexpected_subcommand",
        }
    }
}

/// Outcome of validating an invocation's main command.
#[derive(Debug, Clone)]
pub struct MainValidationResult {
    pub valid: bool,
    pub command: String,
    pub command_type: Option<CommandType>,
    pub error_kind: MainErrorKind,
    pub message: String,
    pub suggestions: Vec<String>,
}

impl MainValidationResult {
    pub fn valid(command: &str, command_type: CommandType) -> Self {
        Self {
            valid: true,
            command: command.to_string(),
            command_type: Some(command_type),
            error_kind: MainErrorKind::None,
            message: String::new(),
            suggestions: Vec::new(),
        }
    }
}

/// `error_kind` for the subcommand validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubErrorKind {
    None,
    InvalidMainCommand,
    InvalidSubcommand,
    MissingSubcommand,
    UnexpectedSubcommand,
}

impl SubErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubErrorKind::None => "",
            SubErrorKind::InvalidMainCommand => "invalid_main_command",
            SubErrorKind::InvalidSubcommand => "invalid_subcommand",
            SubErrorKind::MissingSubcommand => "missing_subcommand",
            SubErrorKind::UnexpectedSubcommand => "unexpected_subcommand",
        }
    }
}

/// Outcome of validating an invocation's subcommand.
#[derive(Debug, Clone)]
pub struct SubValidationResult {
    pub valid: bool,
    pub main: String,
    pub sub: String,
    pub error_kind: SubErrorKind,
    pub message: String,
    pub available: Vec<String>,
    pub suggestions: Vec<String>,
}

impl SubValidationResult {
    pub fn valid(main: &str, sub: &str) -> Self {
        Self {
            valid: true,
            main: main.to_string(),
            sub: sub.to_string(),
            error_kind: SubErrorKind::None,
            message: String::new(),
            available: Vec::new(),
            suggestions: Vec::new(),
        }
    }
}

/// One fuzzy-match candidate. Ordering is by `score` descending.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityResult {
    pub candidate: String,
    pub distance: usize,
    pub score: f64,
}

/// The closed set of issue kinds a validation pass can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    InvalidMain,
    InvalidSub,
    Deprecated,
    Syntax,
    Ambiguous,
}

/// Severity ordering: `error < warning < info < success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Success,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Error => "❌",
            Severity::Warning => "⚠️",
            Severity::Info => "ℹ️",
            Severity::Success => "✅",
        }
    }
}

/// A single validation issue surfaced to the formatter.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub issue_type: IssueType,
    pub severity: Severity,
    pub component: String,
    pub message: String,
    pub expected: Vec<String>,
}

/// Everything the formatter needs to render one invocation's diagnostics.
/// Created per invocation, consumed by the formatter, discarded.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub input_command: String,
    pub command_parts: Vec<String>,
    pub detected_issues: Vec<ValidationIssue>,
    pub suggestions: Vec<SimilarityResult>,
    pub deprecation: Option<DeprecationRecord>,
    pub help_url: String,
}

/// A guess at what the user was trying to do. Informational only — does
/// not gate which sections the formatter emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserIntent {
    Typo,
    Exploring,
    Migrating,
    Learning,
}

impl UserIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserIntent::Typo => "typo",
            UserIntent::Exploring => "exploring",
            UserIntent::Migrating => "migrating",
            UserIntent::Learning => "learning",
        }
    }
}

/// Output language. Only `ja`/`en` are accepted; invalid values are
/// silently rejected by the setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Ja,
    En,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ja" => Some(Language::Ja),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }
}
