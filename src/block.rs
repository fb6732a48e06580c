// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Credit blocks.
//!
//! A __credit block__ holds every credit line of one track. It starts with a
//! header line identifying the track, and ends with a blank line. Each line in
//! between is classified into an [`Entry`] and filed under its kind.
//!
//! # Merging
//!
//! VGMdb often spreads the same role over several lines, so a block gets
//! merged once parsing is done. Artists collapse into a single entry. Other
//! entries are grouped by function, where empty entries like a lone
//! "Violin:" line split the block into partitions that are merged separately.

use crate::entry::{
    composer_function, performer_function, ArtistEntry, CommentEntry, ComposerEntry, Credit,
    Entry, EntryError, EntryKind, NameFixups, PerformerEntry, Result,
};
use crate::header::BlockHeader;

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Credit information for one track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditBlock {
    header: BlockHeader,
    artists: Vec<ArtistEntry>,
    composers: Vec<ComposerEntry>,
    performers: Vec<PerformerEntry>,
    comments: Vec<CommentEntry>,
}

impl CreditBlock {
    /// Construct new empty credit block.
    pub fn new(header: BlockHeader) -> Self {
        Self {
            header,
            artists: Vec::new(),
            composers: Vec::new(),
            performers: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Classify a credit line.
    ///
    /// Lines without a colon are unstructured comments. Otherwise the part
    /// before the first colon is the key: "Arranger" makes an artist, keys
    /// from the composer vocabulary make a composer, keys from the performer
    /// vocabulary make a performer, and anything else becomes a structured
    /// comment. Composer keys win over performer keys.
    ///
    /// # Errors
    ///
    /// - Return [`EntryError::MissingNames`] if an artist or composer line
    ///   names nobody.
    pub fn classify(line: &str) -> Result<Entry> {
        let Some((key, value)) = line.split_once(':') else {
            return Ok(Entry::Comment(CommentEntry::unstructured(line)));
        };
        let value = value.trim_start();

        if key == "Arranger" {
            return Ok(Entry::Artist(ArtistEntry::try_from_value(value)?));
        }

        if let Some(function) = composer_function(key) {
            return Ok(Entry::Composer(ComposerEntry::try_from_value(
                function, value,
            )?));
        }

        if let Some(function) = performer_function(key) {
            return Ok(Entry::Performer(PerformerEntry::from_value(function, value)));
        }

        Ok(Entry::Comment(CommentEntry::from_value(key, value)))
    }

    /// Classify credit line, and file it under its kind.
    ///
    /// # Errors
    ///
    /// - Return [`EntryError::MissingNames`] if line cannot be classified.
    pub fn parse(&mut self, line: &str) -> Result<()> {
        match Self::classify(line)? {
            Entry::Artist(entry) => self.artists.push(entry),
            Entry::Composer(entry) => self.composers.push(entry),
            Entry::Performer(entry) => self.performers.push(entry),
            Entry::Comment(entry) => self.comments.push(entry),
        }

        Ok(())
    }

    /// Canonicalize and consolidate entries in place.
    ///
    /// Meant to be called once after parsing. Calling it again on merged
    /// entries does not change them.
    pub fn merge(&mut self, fixups: &NameFixups) {
        // INVARIANT: Exactly one artist entry after merge, empty if the
        //   block credits no artist.
        let names: Vec<String> = self
            .artists
            .iter()
            .flat_map(|entry| entry.fixup(fixups).names)
            .collect();
        self.artists = vec![ArtistEntry { names }];

        self.composers = merge_entries(&fixup_entries(&self.composers, fixups));
        self.performers = merge_entries(&fixup_entries(&self.performers, fixups));
        self.comments = merge_entries(&fixup_entries(&self.comments, fixups));
    }

    /// List function of each entry of a given kind in order.
    ///
    /// Composer functions are always present.
    ///
    /// # Errors
    ///
    /// - Return [`EntryError::NoFunction`] for artist entries.
    pub fn functions(&self, kind: EntryKind) -> Result<Vec<Option<String>>> {
        let functions = match kind {
            EntryKind::Artist => return Err(EntryError::NoFunction { kind }),
            EntryKind::Composer => self
                .composers
                .iter()
                .map(|entry| Some(entry.function.clone()))
                .collect(),
            EntryKind::Performer => self
                .performers
                .iter()
                .map(|entry| entry.function.clone())
                .collect(),
            EntryKind::Comment => self
                .comments
                .iter()
                .map(|entry| entry.function.clone())
                .collect(),
        };

        Ok(functions)
    }

    pub fn header(&self) -> &BlockHeader {
        &self.header
    }

    pub fn artists(&self) -> &[ArtistEntry] {
        &self.artists
    }

    pub fn composers(&self) -> &[ComposerEntry] {
        &self.composers
    }

    pub fn performers(&self) -> &[PerformerEntry] {
        &self.performers
    }

    pub fn comments(&self) -> &[CommentEntry] {
        &self.comments
    }
}

impl Display for CreditBlock {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        write!(fmt, "{}", self.header)?;
        for entry in self.artists.iter().filter(|entry| !entry.is_empty()) {
            write!(fmt, "\n\t{entry}")?;
        }
        for entry in &self.composers {
            write!(fmt, "\n\t{entry}")?;
        }
        for entry in &self.performers {
            write!(fmt, "\n\t{entry}")?;
        }
        for entry in &self.comments {
            write!(fmt, "\n\t{entry}")?;
        }

        Ok(())
    }
}

fn fixup_entries<E: Credit>(entries: &[E], fixups: &NameFixups) -> Vec<E> {
    entries.iter().map(|entry| entry.fixup(fixups)).collect()
}

/// Merge entries by function.
///
/// Every empty entry starts a new partition, and is kept as a standalone
/// entry at the front of it. The remaining entries of each partition are
/// grouped by function: one entry per distinct function, in order of first
/// appearance, holding the names of all entries with that function.
///
/// Partition boundaries come from entry positions, so two equal empty entries
/// still make two partitions.
pub fn merge_entries<E>(entries: &[E]) -> Vec<E>
where
    E: Credit + Clone,
{
    let mut merged = Vec::with_capacity(entries.len());
    let mut start = 0;
    for (idx, entry) in entries.iter().enumerate() {
        if idx > start && entry.is_empty() {
            merge_partition(&entries[start..idx], &mut merged);
            start = idx;
        }
    }
    if start < entries.len() {
        merge_partition(&entries[start..], &mut merged);
    }

    merged
}

fn merge_partition<E>(partition: &[E], merged: &mut Vec<E>)
where
    E: Credit + Clone,
{
    let rest = match partition.split_first() {
        Some((marker, rest)) if marker.is_empty() => {
            merged.push(marker.clone());
            rest
        }
        _ => partition,
    };

    let mut functions: Vec<&E::Function> = Vec::new();
    for entry in rest {
        if !functions.contains(&entry.function()) {
            functions.push(entry.function());
        }
    }

    for function in functions {
        let names = rest
            .iter()
            .filter(|entry| entry.function() == function)
            .flat_map(|entry| entry.names().iter().cloned())
            .collect();
        merged.push(E::from_parts(function.clone(), names));
    }
}
