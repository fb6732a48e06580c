// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Album credits parser.
//!
//! Turns the lines of an album credits text into a sequence of
//! [`CreditBlock`]s. The parser is a small state machine that consumes one
//! line per [`AlbumCreditsParser::step`]:
//!
//! ```text
//!                 header line                    blank line
//! SearchingBlock ------------> BlockFound -----------------> SearchingBlock
//!       |                       |    ^
//!       | out of lines          |    | credit line
//!       v                       |    |
//!      Done <-------------------+----+
//!                out of lines
//! ```
//!
//! Lines outside of a block that are not headers get dropped. A block that
//! runs until the end of input without a trailing blank line is still kept.

use crate::{
    block::CreditBlock,
    entry::{EntryError, EntryKind, NameFixups},
    header::BlockHeader,
};

use std::{
    collections::{BTreeSet, VecDeque},
    fmt::{Display, Formatter, Result as FmtResult},
};
use tracing::{debug, info, instrument, trace};

/// State of the album credits parser.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ParsingState {
    /// Looking for the header of the next credit block.
    #[default]
    SearchingBlock,

    /// Inside a credit block.
    BlockFound,

    /// Out of lines.
    Done,
}

/// Outcome of a single parsing step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Continue,
    Done,
}

/// Line-oriented album credits parser.
#[derive(Debug)]
pub struct AlbumCreditsParser {
    lines: VecDeque<String>,
    state: ParsingState,
    pending: Option<CreditBlock>,
    blocks: Vec<CreditBlock>,
    line_number: usize,
}

impl AlbumCreditsParser {
    /// Construct new parser over a list of lines.
    ///
    /// # Errors
    ///
    /// - Return [`ParseError::NoInput`] if there are no lines to parse.
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Result<Self> {
        let lines: VecDeque<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            return Err(ParseError::NoInput);
        }

        Ok(Self {
            lines,
            state: ParsingState::default(),
            pending: None,
            blocks: Vec::new(),
            line_number: 0,
        })
    }

    /// Current state of parser.
    pub fn state(&self) -> ParsingState {
        self.state
    }

    /// Completed credit blocks in input order.
    pub fn blocks(&self) -> &[CreditBlock] {
        &self.blocks
    }

    /// Take completed credit blocks out of parser.
    pub fn into_blocks(self) -> Vec<CreditBlock> {
        self.blocks
    }

    fn consume_line(&mut self) -> Option<String> {
        let line = self.lines.pop_front()?;
        self.line_number += 1;
        Some(line)
    }

    /// Perform one transition of the state machine.
    ///
    /// Consumes at most one line. Returns [`Step::Done`] once all lines have
    /// been consumed and the last pending block was stored.
    ///
    /// # Errors
    ///
    /// - Return [`ParseError::Entry`] if a credit line cannot be classified.
    pub fn step(&mut self) -> Result<Step> {
        match self.state {
            ParsingState::SearchingBlock => match self.consume_line() {
                None => self.state = ParsingState::Done,
                Some(line) => match BlockHeader::from_line(&line) {
                    Some(header) => {
                        debug!("line {}: credit block found: {header}", self.line_number);
                        self.pending = Some(CreditBlock::new(header));
                        self.state = ParsingState::BlockFound;
                    }
                    None => trace!("line {}: skip {line:?}", self.line_number),
                },
            },
            ParsingState::BlockFound => match self.consume_line() {
                None => self.state = ParsingState::Done,
                Some(line) if line.is_empty() => {
                    self.finish_block();
                    self.state = ParsingState::SearchingBlock;
                }
                Some(line) => {
                    let line_number = self.line_number;
                    if let Some(block) = self.pending.as_mut() {
                        block.parse(&line).map_err(|source| ParseError::Entry {
                            line_number,
                            line,
                            source,
                        })?;
                    }
                }
            },
            ParsingState::Done => {
                self.finish_block();
                return Ok(Step::Done);
            }
        }

        Ok(Step::Continue)
    }

    fn finish_block(&mut self) {
        if let Some(block) = self.pending.take() {
            self.blocks.push(block);
        }
    }

    /// Drive parser until all lines are consumed.
    ///
    /// # Errors
    ///
    /// - Return [`ParseError::Entry`] if a credit line cannot be classified.
    #[instrument(skip(self), level = "debug")]
    pub fn run(&mut self) -> Result<()> {
        while self.step()? == Step::Continue {}
        info!("parsed {} credit blocks", self.blocks.len());

        Ok(())
    }

    /// Merge entries of every completed credit block.
    #[instrument(skip(self, fixups), level = "debug")]
    pub fn merge(&mut self, fixups: &NameFixups) {
        for block in &mut self.blocks {
            block.merge(fixups);
        }
    }

    /// Distinct functions of a given entry kind across all blocks.
    ///
    /// # Errors
    ///
    /// - Return [`EntryError::NoFunction`] for artist entries.
    pub fn functions(&self, kind: EntryKind) -> Result<BTreeSet<Option<String>>, EntryError> {
        let mut functions = BTreeSet::new();
        for block in &self.blocks {
            functions.extend(block.functions(kind)?);
        }

        Ok(functions)
    }
}

impl Display for AlbumCreditsParser {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        let mut blocks = self.blocks.iter();
        if let Some(first) = blocks.next() {
            write!(fmt, "{first}")?;
        }
        for block in blocks {
            write!(fmt, "\n\n{block}")?;
        }

        Ok(())
    }
}

/// Album credits parsing error types.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Nothing to parse.
    #[error("album credits contain no lines")]
    NoInput,

    /// Credit line cannot be turned into an entry.
    #[error("failed to parse line {line_number}: {line:?}")]
    Entry {
        #[source]
        source: EntryError,
        line_number: usize,
        line: String,
    },
}

/// Friendly result alias :3
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{CommentEntry, ComposerEntry, Credit, PerformerEntry};
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> AlbumCreditsParser {
        let mut parser = AlbumCreditsParser::new(text.lines()).unwrap();
        parser.run().unwrap();
        parser
    }

    #[test]
    fn reject_empty_input() {
        let result = AlbumCreditsParser::new(Vec::<String>::new());
        assert!(matches!(result, Err(ParseError::NoInput)));
    }

    #[test]
    fn step_through_states() -> anyhow::Result<()> {
        let mut parser = AlbumCreditsParser::new(["noise", "1 Title", "Composer: A", ""])?;
        assert_eq!(parser.state(), ParsingState::SearchingBlock);

        assert_eq!(parser.step()?, Step::Continue);
        assert_eq!(parser.state(), ParsingState::SearchingBlock);

        assert_eq!(parser.step()?, Step::Continue);
        assert_eq!(parser.state(), ParsingState::BlockFound);

        assert_eq!(parser.step()?, Step::Continue);
        assert_eq!(parser.state(), ParsingState::BlockFound);
        assert!(parser.blocks().is_empty());

        assert_eq!(parser.step()?, Step::Continue);
        assert_eq!(parser.state(), ParsingState::SearchingBlock);
        assert_eq!(parser.blocks().len(), 1);

        assert_eq!(parser.step()?, Step::Continue);
        assert_eq!(parser.state(), ParsingState::Done);

        assert_eq!(parser.step()?, Step::Done);
        assert_eq!(parser.step()?, Step::Done);
        assert_eq!(parser.blocks().len(), 1);

        Ok(())
    }

    #[test]
    fn single_composer_block() -> anyhow::Result<()> {
        let mut parser = AlbumCreditsParser::new(["1 Title", "Composer: Jane Doe", ""])?;
        for _ in 0..3 {
            assert_eq!(parser.step()?, Step::Continue);
        }

        // Blank line finished the block before input ran out.
        assert_eq!(parser.state(), ParsingState::SearchingBlock);
        assert_eq!(parser.blocks().len(), 1);

        parser.run()?;
        assert_eq!(parser.blocks().len(), 1);
        assert_eq!(
            parser.blocks()[0].composers(),
            &[ComposerEntry::from_parts(
                "Composer".into(),
                vec!["Jane Doe".into()]
            )]
        );

        Ok(())
    }

    #[test]
    fn keep_block_without_trailing_blank_line() {
        let parser = parse("1 Title\nComposer: Jane Doe");
        assert_eq!(parser.blocks().len(), 1);
    }

    #[test]
    fn skip_lines_outside_of_blocks() {
        let parser = parse(indoc! {"
            Album credits for something
            Composer: Nobody

            1 Title
            Composer: Jane Doe


            stray line
            2 Other
            Violin: John Doe
        "});
        let blocks = parser.blocks();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].header().tracknumber, 1);
        assert_eq!(blocks[1].header().tracknumber, 2);
        assert_eq!(
            blocks[1].performers(),
            &[PerformerEntry::from_value("Violin", "John Doe")]
        );
    }

    #[test]
    fn header_like_line_inside_block_is_content() {
        let parser = parse("1 Title\n2 Not a header here\n");
        let blocks = parser.blocks();
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].comments(),
            &[CommentEntry::unstructured("2 Not a header here")]
        );
    }

    #[test]
    fn report_failing_line() {
        let mut parser = AlbumCreditsParser::new(["1 Title", "Composer: A", "Arranger:"]).unwrap();
        let error = parser.run().unwrap_err();
        match error {
            ParseError::Entry {
                line_number, line, ..
            } => {
                assert_eq!(line_number, 3);
                assert_eq!(line, "Arranger:");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn collect_distinct_functions() {
        let mut parser = parse(indoc! {"
            1 Title
            Composer: A
            Lyricist: B
            Violin: C
            Producer: D

            2 Other
            Composer: E
            Piano: F
            Free text
        "});
        parser.merge(&NameFixups::default());

        let composer = parser.functions(EntryKind::Composer).unwrap();
        assert_eq!(
            composer.into_iter().collect::<Vec<_>>(),
            vec![Some("Lyrics".to_string()), Some("Music".to_string())]
        );

        let comment = parser.functions(EntryKind::Comment).unwrap();
        assert_eq!(
            comment.into_iter().collect::<Vec<_>>(),
            vec![None, Some("Producer".to_string())]
        );

        assert!(parser.functions(EntryKind::Artist).is_err());
    }

    #[test]
    fn display_blocks() {
        let mut parser = parse("1 One\nComposer: A\n\n2 Two\nViolin: B\n");
        parser.merge(&NameFixups::default());
        let expect = "01 One\n\tComposer: A (Music)\n\n02 Two\n\tPerformer: B (Violin)";
        assert_eq!(parser.to_string(), expect);
    }
}
