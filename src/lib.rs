// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Album credits parsing.
//!
//! Albumcredits reads the loosely formatted credits text that VGMdb shows for
//! an album, and turns it into structured per-track credit information.
//!
//! # Input Layout
//!
//! Credits are grouped into __credit blocks__, one per track, separated by
//! blank lines. Each block starts with a header line holding the track number
//! and name, optionally prefixed by a disc number:
//!
//! ```text
//! 1.01 Opening Theme
//! Composer: Jane Doe, John Doe
//! Violin: Jane Doe
//! Recorded live at the opera house
//!
//! 1.02 Closing Theme
//! Lyricist: John Doe
//! ```
//!
//! Lines of the form `Key: value` are credit lines, anything else is a free
//! text comment. See [`block::CreditBlock::classify`] for how keys map to
//! entry kinds.

pub mod block;
pub mod config;
pub mod entry;
pub mod header;
pub mod names;
pub mod parser;
pub mod path;

pub use block::CreditBlock;
pub use entry::{Entry, EntryKind, NameFixups};
pub use header::BlockHeader;
pub use parser::{AlbumCreditsParser, ParsingState, Step};
