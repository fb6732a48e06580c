// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Credit block header lines.

use std::fmt::{Display, Formatter, Result as FmtResult};

const DISC_SEPARATORS: [char; 2] = ['.', '-'];

/// Identify the track a credit block belongs to.
///
/// Parsed from the first line of a block, which looks like
/// `<tracknumber> <trackname>` or `<discnumber>.<tracknumber> <trackname>`.
/// A dash is accepted in place of the dot.
///
/// # Invariant
///
/// - Track number lies in `1..=98`.
/// - Disc number, if any, lies in `1..=29`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    pub discnumber: Option<u32>,
    pub tracknumber: u32,
    pub trackname: Option<String>,
}

impl BlockHeader {
    /// Parse header from line.
    ///
    /// Returns `None` if the line does not look like a header, or if the
    /// disc or track number is out of range. Not being a header is not an
    /// error: callers treat such lines as regular content.
    pub fn from_line(line: &str) -> Option<Self> {
        let (prefix, trackname) = match line.split_once(' ') {
            Some((prefix, trackname)) => (prefix, Some(trackname.to_owned())),
            None => (line, None),
        };

        let (discnumber, tracknumber) = match split_disc_track(prefix) {
            Some((discnumber, tracknumber)) => (Some(discnumber), tracknumber),
            None => (None, parse_bare_track(prefix)?),
        };

        if let Some(discnumber) = discnumber {
            if !(1..=29).contains(&discnumber) {
                return None;
            }
        }

        if !(1..=98).contains(&tracknumber) {
            return None;
        }

        Some(Self {
            discnumber: discnumber.map(|number| number as u32),
            tracknumber: tracknumber as u32,
            trackname,
        })
    }

    /// Check if line is a valid header.
    pub fn is_header(line: &str) -> bool {
        Self::from_line(line).is_some()
    }
}

// "1." reads as track one, matching how track lists are often numbered.
fn parse_bare_track(prefix: &str) -> Option<i64> {
    prefix.strip_suffix('.').unwrap_or(prefix).parse().ok()
}

fn split_disc_track(prefix: &str) -> Option<(i64, i64)> {
    DISC_SEPARATORS.iter().find_map(|separator| {
        let (first, second) = prefix.split_once(*separator)?;
        Some((first.parse().ok()?, second.parse().ok()?))
    })
}

impl Display for BlockHeader {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        if let Some(discnumber) = self.discnumber {
            write!(fmt, "{discnumber}.")?;
        }
        write!(fmt, "{:02}", self.tracknumber)?;
        if let Some(trackname) = &self.trackname {
            write!(fmt, " {trackname}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use simple_test_case::test_case;

    #[test_case("1 Opening Theme", None, 1, Some("Opening Theme"); "bare track")]
    #[test_case("98 Last", None, 98, Some("Last"); "highest track")]
    #[test_case("2.05 Battle", Some(2), 5, Some("Battle"); "dotted disc and track")]
    #[test_case("29-1 Finale", Some(29), 1, Some("Finale"); "dashed disc and track")]
    #[test_case("3", None, 3, None; "no track name")]
    #[test_case("1. Opening Theme", None, 1, Some("Opening Theme"); "track with trailing dot")]
    #[test_case("1.2", Some(1), 2, None; "disc without track name")]
    #[test_case("1 A title with spaces", None, 1, Some("A title with spaces"); "name keeps spaces")]
    #[test]
    fn parse_valid_header(
        line: &str,
        discnumber: Option<u32>,
        tracknumber: u32,
        trackname: Option<&str>,
    ) {
        let expect = BlockHeader {
            discnumber,
            tracknumber,
            trackname: trackname.map(str::to_owned),
        };
        pretty_assertions::assert_eq!(BlockHeader::from_line(line), Some(expect));
    }

    #[test_case("0 Zero"; "track zero")]
    #[test_case("99 Too High"; "track too high")]
    #[test_case("30.1 Disc Too High"; "disc too high")]
    #[test_case("0.1 Disc Zero"; "disc zero")]
    #[test_case("1.99 Track Too High"; "disc with track too high")]
    #[test_case("-1 Negative"; "negative track")]
    #[test_case("Composer: Jane Doe"; "credit line")]
    #[test_case("Some unstructured remark"; "free text")]
    #[test_case(""; "empty line")]
    #[test_case("1.x Broken"; "non numeric track")]
    #[test_case("1.. Double Dot"; "double trailing dot")]
    #[test_case(". Dot Only"; "dot without number")]
    #[test]
    fn reject_invalid_header(line: &str) {
        pretty_assertions::assert_eq!(BlockHeader::from_line(line), None);
        assert!(!BlockHeader::is_header(line));
    }

    #[test]
    fn header_from_every_valid_track() {
        for tracknumber in 1..=98 {
            let line = format!("{tracknumber} title");
            let header = BlockHeader::from_line(&line).unwrap();
            assert_eq!(header.discnumber, None);
            assert_eq!(header.tracknumber, tracknumber);
            assert_eq!(header.trackname.as_deref(), Some("title"));
        }
    }

    #[test]
    fn display_header() {
        let header = BlockHeader::from_line("1.2 Battle").unwrap();
        assert_eq!(header.to_string(), "1.02 Battle");

        let header = BlockHeader::from_line("7").unwrap();
        assert_eq!(header.to_string(), "07");
    }
}
