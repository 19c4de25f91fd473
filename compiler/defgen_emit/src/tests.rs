use defgen_eval::ResolvedEntry;
use defgen_ir::Name;
use pretty_assertions::assert_eq;

use super::*;

const BANNER: &str = "//Generated by defgen 0.1.0.\n\
                      //This file has been automatically generated.\n\
                      //Edit contents with extreme caution.\n\n";

fn header() -> Header {
    Header::new("defgen 0.1.0")
}

fn entry(name: &str, comment: &str, text: &str) -> ResolvedEntry {
    ResolvedEntry {
        name: Name::new(name),
        comment: comment.to_string(),
        text: text.to_string(),
    }
}

#[test]
fn test_empty_defines_is_just_the_banner() {
    assert_eq!(emit_defines(&header(), &[], &[]), BANNER);
}

#[test]
fn test_define_layout() {
    let out = emit_defines(
        &header(),
        &[],
        &[entry("MASK", "", "4294967295"), entry("NAME", "", "core_32")],
    );
    assert_eq!(
        out,
        format!(
            "{BANNER}\
             `ifndef MASK\n `define MASK 4294967295\n`endif\n\n\
             `ifndef NAME\n `define NAME core_32\n`endif\n\n"
        )
    );
}

#[test]
fn test_multiline_comment_gets_a_prefix_per_line() {
    let out = emit_defines(&header(), &[], &[entry("WIDTH", "Data bus width.\nIn bits.", "32")]);
    assert_eq!(
        out,
        format!(
            "{BANNER}\
             //Data bus width.\n//In bits.\n\
             `ifndef WIDTH\n `define WIDTH 32\n`endif\n\n"
        )
    );
}

#[test]
fn test_line_breaks_in_text_become_continuations() {
    let out = emit_defines(
        &header(),
        &[],
        &[entry("MSG", "", "x\ny"), entry("CRLF", "", "a\r\nb\rc")],
    );
    assert_eq!(
        out,
        format!(
            "{BANNER}\
             `ifndef MSG\n `define MSG x\\\ny\n`endif\n\n\
             `ifndef CRLF\n `define CRLF a\\\nb\\\nc\n`endif\n\n"
        )
    );
    // Every physical line but the last ends the directive with a backslash
    let define_lines: Vec<&str> = out
        .lines()
        .skip_while(|line| !line.starts_with(" `define MSG"))
        .take_while(|line| *line != "`endif")
        .collect();
    assert_eq!(define_lines, vec![" `define MSG x\\", "y"]);
}

#[test]
fn test_verbatim_block_precedes_defines() {
    let verbatim = vec!["`timescale 1ns/1ps".to_string(), "// keep".to_string()];
    let out = emit_defines(&header(), &verbatim, &[entry("A", "", "1")]);
    assert_eq!(
        out,
        format!(
            "{BANNER}\
             `timescale 1ns/1ps\n// keep\n\n\
             `ifndef A\n `define A 1\n`endif\n\n"
        )
    );
}

#[test]
fn test_undefine_layout() {
    let names = [Name::new("A"), Name::new("HIDDEN")];
    assert_eq!(
        emit_undefines(&header(), &names),
        format!(
            "{BANNER}\
             `ifdef A\n `undef A\n`endif\n\n\
             `ifdef HIDDEN\n `undef HIDDEN\n`endif\n\n"
        )
    );
}

#[test]
fn test_writers_share_an_emitter() {
    let mut out = StringEmitter::new();
    write_undefines(&mut out, &header(), &[Name::new("X")]);
    let out = out.output();
    assert!(out.as_str().starts_with("//Generated by defgen 0.1.0.\n"));
    assert!(out.as_str().ends_with("`ifdef X\n `undef X\n`endif\n\n"));
}
