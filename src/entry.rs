// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Typed credit entries.
//!
//! Every line of a credit block is classified into one of four kinds of
//! __entry__: artist, composer, performer, or comment. Composer and performer
//! entries carry a __function__ drawn from a fixed role vocabulary, e.g.,
//! "Lyricist" or "Violin". Comment entries carry whatever key the line used
//! as their function, or no function at all if the line was free text.
//!
//! # Fixups
//!
//! Entries are canonicalized before merging. Names go through [`NameFixups`],
//! an ordered list of substring replacements. Functions go through a static
//! table keyed by [`EntryKind`], see [`EntryKind::function_fixups`].

use crate::names::{pretty_names, split_into_names};

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Recognized composer roles.
pub const COMPOSER_FUNCTIONS: [&str; 4] = ["Composer", "Lyrics", "Music", "Lyricist"];

/// Recognized performer roles.
pub const PERFORMER_FUNCTIONS: [&str; 30] = [
    "1st Choir",
    "1st Violin",
    "2nd Choir",
    "2nd Violin",
    "Acoustic Guitar",
    "Bass",
    "Cello",
    "Choir",
    "Dizi",
    "Double Bass",
    "Electric Guitar",
    "Erhu",
    "Female Solo Vocals",
    "Guitar",
    "Guzheng",
    "Harp",
    "Harpsichord",
    "Koto",
    "Orchestra",
    "Piano",
    "Pipa",
    "Shakuhachi",
    "Shaoqin",
    "Singer",
    "Steel-Stringed Guitar",
    "Taiko",
    "Tsugaru Shamisen",
    "Viola",
    "Violin",
    "Xiao",
];

const COMPOSER_FIXUPS: &[(&str, &str)] = &[("Composer", "Music"), ("Lyricist", "Lyrics")];

// Empty replacement clears the function.
const PERFORMER_FIXUPS: &[(&str, &str)] = &[("Orchestra", ""), ("Choir", "")];

const COMMENT_FIXUPS: &[(&str, &str)] = &[
    ("Mixing Studio", "Mixing Location"),
    ("Mastering Studio", "Mastering Location"),
    ("Recording Studio", "Recording Location"),
    ("Co-produced by", "Co-Producer"),
    ("Produced by", "Producer"),
];

const BUILTIN_NAME_FIXUPS: &[(&str, &str)] = &[("SHANGRI-LA Inc.", "Shangri-La Inc.")];

/// Studio names that VGMdb tends to spell in all caps.
const BUILTIN_ALL_CAPS: &[&str] = &[
    "Crescente Studio",
    "MonolithSoft",
    "Onkio Haus",
    "Procyon Studio",
    "Studio Sunshine",
];

/// Look up composer role by credit key.
pub fn composer_function(key: &str) -> Option<&'static str> {
    COMPOSER_FUNCTIONS.iter().find(|function| **function == key).copied()
}

/// Look up performer role by credit key.
pub fn performer_function(key: &str) -> Option<&'static str> {
    PERFORMER_FUNCTIONS.iter().find(|function| **function == key).copied()
}

/// The four kinds of credit entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    Artist,
    Composer,
    Performer,
    Comment,
}

impl EntryKind {
    /// Entry kinds that carry a function.
    pub const WITH_FUNCTION: [EntryKind; 3] = [Self::Composer, Self::Performer, Self::Comment];

    /// Function fixup table for this kind of entry.
    ///
    /// Composer and comment tables rename unconditionally. The performer table
    /// only applies when the function label is already part of every name,
    /// and an empty replacement clears the function entirely.
    pub fn function_fixups(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Artist => &[],
            Self::Composer => COMPOSER_FIXUPS,
            Self::Performer => PERFORMER_FIXUPS,
            Self::Comment => COMMENT_FIXUPS,
        }
    }

    fn function_fixup(self, function: &str) -> Option<&'static str> {
        self.function_fixups()
            .iter()
            .find(|(from, _)| *from == function)
            .map(|(_, to)| *to)
    }
}

impl Display for EntryKind {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Artist => "Artist",
            Self::Composer => "Composer",
            Self::Performer => "Performer",
            Self::Comment => "Comment",
        };
        fmt.write_str(name)
    }
}

/// Ordered substring replacements applied to every name of an entry.
///
/// Defaults to the built-in rules: a handful of special-case renames, followed
/// by the canonical spelling of studio names that show up in all caps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFixups {
    rules: Vec<(String, String)>,
}

impl NameFixups {
    /// Construct fixups without any rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a substring replacement rule.
    pub fn push_rule(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.rules.push((from.into(), to.into()));
    }

    /// Append rule that maps the all caps spelling of a name to the name.
    pub fn push_all_caps(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.rules.push((name.to_uppercase(), name));
    }

    /// Apply every rule in order to a name.
    pub fn apply(&self, name: &str) -> String {
        self.rules
            .iter()
            .fold(name.to_owned(), |name, (from, to)| name.replace(from.as_str(), to))
    }

    fn apply_all(&self, names: &[String]) -> Vec<String> {
        names.iter().map(|name| self.apply(name)).collect()
    }
}

impl Default for NameFixups {
    fn default() -> Self {
        let mut fixups = Self::empty();
        for (from, to) in BUILTIN_NAME_FIXUPS {
            fixups.push_rule(*from, *to);
        }
        for name in BUILTIN_ALL_CAPS {
            fixups.push_all_caps(*name);
        }

        fixups
    }
}

/// Common shape of entries that carry a function.
///
/// Block merging groups entries by function without caring which kind of
/// entry it is working on.
pub trait Credit: Sized {
    /// Type of function label.
    type Function: Clone + PartialEq;

    /// Kind of entry implementing this trait.
    const KIND: EntryKind;

    /// Function label of entry.
    fn function(&self) -> &Self::Function;

    /// Names credited by entry.
    fn names(&self) -> &[String];

    /// Construct entry from raw parts without validation.
    fn from_parts(function: Self::Function, names: Vec<String>) -> Self;

    /// Canonicalize function and names.
    fn fixup(&self, fixups: &NameFixups) -> Self;

    /// Empty entries act as partition markers during merge.
    fn is_empty(&self) -> bool {
        self.names().is_empty()
    }
}

/// An artist credit entry, e.g., an arranger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistEntry {
    pub names: Vec<String>,
}

impl ArtistEntry {
    /// Construct artist entry from credit value.
    ///
    /// # Errors
    ///
    /// - Return [`EntryError::MissingNames`] if value contains no names.
    pub fn try_from_value(value: &str) -> Result<Self> {
        let names = split_into_names(value);
        if names.is_empty() {
            return Err(EntryError::MissingNames {
                kind: EntryKind::Artist,
            });
        }

        Ok(Self { names })
    }

    pub fn fixup(&self, fixups: &NameFixups) -> Self {
        Self {
            names: fixups.apply_all(&self.names),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Display for ArtistEntry {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        match pretty_names(&self.names) {
            Some(pretty) => write!(fmt, "Artist: {pretty}"),
            None => fmt.write_str("Artist:"),
        }
    }
}

/// A composer credit entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerEntry {
    pub function: String,
    pub names: Vec<String>,
}

impl ComposerEntry {
    /// Construct composer entry from credit value.
    ///
    /// # Errors
    ///
    /// - Return [`EntryError::MissingNames`] if value contains no names.
    pub fn try_from_value(function: impl Into<String>, value: &str) -> Result<Self> {
        let names = split_into_names(value);
        if names.is_empty() {
            return Err(EntryError::MissingNames {
                kind: EntryKind::Composer,
            });
        }

        Ok(Self {
            function: function.into(),
            names,
        })
    }
}

impl Credit for ComposerEntry {
    type Function = String;
    const KIND: EntryKind = EntryKind::Composer;

    fn function(&self) -> &String {
        &self.function
    }

    fn names(&self) -> &[String] {
        &self.names
    }

    fn from_parts(function: String, names: Vec<String>) -> Self {
        Self { function, names }
    }

    fn fixup(&self, fixups: &NameFixups) -> Self {
        let function = Self::KIND
            .function_fixup(&self.function)
            .map_or_else(|| self.function.clone(), str::to_owned);

        Self {
            function,
            names: fixups.apply_all(&self.names),
        }
    }
}

impl Display for ComposerEntry {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        match pretty_names(&self.names) {
            Some(pretty) => write!(fmt, "Composer: {pretty} ({})", self.function),
            None => write!(fmt, "Composer: {}:", self.function),
        }
    }
}

/// A performer credit entry.
///
/// Function is only ever `None` after a fixup decided that the names already
/// describe the role, e.g., "Tokyo Philharmonic Orchestra".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformerEntry {
    pub function: Option<String>,
    pub names: Vec<String>,
}

impl PerformerEntry {
    /// Construct performer entry from credit value.
    ///
    /// An empty value produces an empty entry.
    pub fn from_value(function: impl Into<String>, value: &str) -> Self {
        Self {
            function: Some(function.into()),
            names: split_into_names(value),
        }
    }
}

impl Credit for PerformerEntry {
    type Function = Option<String>;
    const KIND: EntryKind = EntryKind::Performer;

    fn function(&self) -> &Option<String> {
        &self.function
    }

    fn names(&self) -> &[String] {
        &self.names
    }

    fn from_parts(function: Option<String>, names: Vec<String>) -> Self {
        Self { function, names }
    }

    fn fixup(&self, fixups: &NameFixups) -> Self {
        let mut function = self.function.clone();
        if let Some(current) = self.function.as_deref() {
            if let Some(replacement) = Self::KIND.function_fixup(current) {
                let is_function_explicit = !self.names.is_empty()
                    && self.names.iter().all(|name| name.contains(current));
                if is_function_explicit {
                    function = (!replacement.is_empty()).then(|| replacement.to_owned());
                }
            }
        }

        Self {
            function,
            names: fixups.apply_all(&self.names),
        }
    }
}

impl Display for PerformerEntry {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        match (pretty_names(&self.names), &self.function) {
            (Some(pretty), Some(function)) => write!(fmt, "Performer: {pretty} ({function})"),
            (Some(pretty), None) => write!(fmt, "Performer: {pretty}"),
            (None, Some(function)) => write!(fmt, "Performer: {function}:"),
            (None, None) => fmt.write_str("Performer:"),
        }
    }
}

/// A comment credit entry.
///
/// Function is `None` for unstructured free text lines, which always hold
/// exactly one name: the line itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEntry {
    pub function: Option<String>,
    pub names: Vec<String>,
}

impl CommentEntry {
    /// Construct unstructured comment from free text line.
    pub fn unstructured(line: impl Into<String>) -> Self {
        Self {
            function: None,
            names: vec![line.into()],
        }
    }

    /// Construct structured key/value comment.
    pub fn from_value(key: impl Into<String>, value: &str) -> Self {
        Self {
            function: Some(key.into()),
            names: split_into_names(value),
        }
    }
}

impl Credit for CommentEntry {
    type Function = Option<String>;
    const KIND: EntryKind = EntryKind::Comment;

    fn function(&self) -> &Option<String> {
        &self.function
    }

    fn names(&self) -> &[String] {
        &self.names
    }

    fn from_parts(function: Option<String>, names: Vec<String>) -> Self {
        Self { function, names }
    }

    fn fixup(&self, fixups: &NameFixups) -> Self {
        let function = self.function.as_deref().map(|function| {
            Self::KIND
                .function_fixup(function)
                .unwrap_or(function)
                .to_owned()
        });

        Self {
            function,
            names: fixups.apply_all(&self.names),
        }
    }
}

impl Display for CommentEntry {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        let pretty = pretty_names(&self.names).unwrap_or_default();
        match &self.function {
            Some(function) => write!(fmt, "Comment: {function}: {pretty}"),
            None => write!(fmt, "Comment: {pretty}"),
        }
    }
}

/// A classified credit line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Artist(ArtistEntry),
    Composer(ComposerEntry),
    Performer(PerformerEntry),
    Comment(CommentEntry),
}

impl Entry {
    /// Kind of this entry.
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Artist(_) => EntryKind::Artist,
            Self::Composer(_) => EntryKind::Composer,
            Self::Performer(_) => EntryKind::Performer,
            Self::Comment(_) => EntryKind::Comment,
        }
    }
}

impl Display for Entry {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Artist(entry) => entry.fmt(fmt),
            Self::Composer(entry) => entry.fmt(fmt),
            Self::Performer(entry) => entry.fmt(fmt),
            Self::Comment(entry) => entry.fmt(fmt),
        }
    }
}

/// Credit entry error types.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    /// Entry requires at least one name.
    #[error("invalid {kind} entry: no names given")]
    MissingNames { kind: EntryKind },

    /// Entry kind does not carry a function.
    #[error("{kind} entries have no function")]
    NoFunction { kind: EntryKind },
}

/// Friendly result alias :3
pub type Result<T, E = EntryError> = std::result::Result<T, E>;
