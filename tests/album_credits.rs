// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use albumcredits::{
    config::Settings,
    entry::{CommentEntry, ComposerEntry, Credit, PerformerEntry},
    AlbumCreditsParser, NameFixups,
};

use anyhow::Result;
use indoc::indoc;
use pretty_assertions::assert_eq;

fn parse_and_merge(text: &str, fixups: &NameFixups) -> Result<AlbumCreditsParser> {
    let mut parser = AlbumCreditsParser::new(text.lines())?;
    parser.run()?;
    parser.merge(fixups);

    Ok(parser)
}

#[test]
fn opening_and_closing_theme() -> Result<()> {
    let parser = parse_and_merge(
        indoc! {"
            1. Opening Theme
            Composer: A, B
            Violin: A
            Some unstructured remark

            2. Closing Theme
            Lyricist: C
        "},
        &NameFixups::default(),
    )?;

    let blocks = parser.blocks();
    assert_eq!(blocks.len(), 2);

    assert_eq!(blocks[0].header().tracknumber, 1);
    assert_eq!(blocks[0].header().trackname.as_deref(), Some("Opening Theme"));
    assert_eq!(
        blocks[0].composers(),
        &[ComposerEntry::from_parts(
            "Music".into(),
            vec!["A".into(), "B".into()]
        )]
    );
    assert_eq!(
        blocks[0].performers(),
        &[PerformerEntry::from_value("Violin", "A")]
    );
    assert_eq!(
        blocks[0].comments(),
        &[CommentEntry::unstructured("Some unstructured remark")]
    );

    assert_eq!(blocks[1].header().tracknumber, 2);
    assert_eq!(
        blocks[1].composers(),
        &[ComposerEntry::from_parts("Lyrics".into(), vec!["C".into()])]
    );

    Ok(())
}

#[test]
fn multi_disc_album() -> Result<()> {
    let parser = parse_and_merge(
        indoc! {"
            Credits

            1.01 Prelude
            Arranger: Jane Doe
            Orchestra: Tokyo Philharmonic Orchestra
            Recording Studio: ONKIO HAUS
            Produced by: SHANGRI-LA Inc.

            2.01 Finale
            Composer: John Doe
            Composer: Jane Doe
            Piano: John Doe (Studio A, Tokyo)
        "},
        &NameFixups::default(),
    )?;

    let expect = indoc! {"
        1.01 Prelude
        \tArtist: Jane Doe
        \tPerformer: Tokyo Philharmonic Orchestra
        \tComment: Recording Location: Onkio Haus
        \tComment: Producer: Shangri-La Inc.

        2.01 Finale
        \tComposer: John Doe and Jane Doe (Music)
        \tPerformer: John Doe (Studio A, Tokyo) (Piano)"};
    assert_eq!(parser.to_string(), expect);

    Ok(())
}

#[test]
fn configured_fixups_apply_on_merge() -> Result<()> {
    let settings: Settings = indoc! {r#"
        [[fixup.names]]
        from = "ACME"
        to = "Acme"
    "#}
    .parse()?;
    let parser = parse_and_merge("3 Track\nGuitar: ACME Band\n", &settings.name_fixups())?;

    assert_eq!(
        parser.blocks()[0].performers(),
        &[PerformerEntry::from_value("Guitar", "Acme Band")]
    );

    Ok(())
}

#[test]
fn invalid_credit_line_aborts_parse() -> Result<()> {
    let mut parser = AlbumCreditsParser::new(["1 Track", "Arranger:"])?;
    let error = parser.run().unwrap_err();
    assert_eq!(error.to_string(), r#"failed to parse line 2: "Arranger:""#);

    Ok(())
}
