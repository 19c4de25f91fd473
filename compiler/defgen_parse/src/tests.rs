#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use defgen_diagnostic::ErrorCode;
use defgen_ir::{BinaryOp, Expr, Name, Span, UnaryOp};
use pretty_assertions::assert_eq;

fn parse_ok(source: &str) -> ParsedFile {
    let out = parse_source(source);
    assert!(out.errors.is_empty(), "unexpected errors: {:?}", out.errors);
    out.file
}

fn expr_of(source: &str) -> Expr {
    let file = parse_ok(&format!("define X = {source}\n"));
    assert_eq!(file.entries.len(), 1);
    file.entries.into_iter().next().unwrap().expr
}

fn int(n: i64) -> Expr {
    Expr::Int(n)
}

fn r(name: &str) -> Expr {
    Expr::reference(name)
}

#[test]
fn test_simple_definition() {
    let file = parse_ok("define WIDTH = 32\n");
    let entry = &file.entries[0];
    assert_eq!(entry.name, Name::new("WIDTH"));
    assert_eq!(entry.expr, int(32));
    assert!(entry.print);
    assert_eq!(entry.comment, "");
    assert_eq!(entry.span, Span::new(0, 17));
}

#[test]
fn test_hidden_definition_is_not_printed() {
    let file = parse_ok("hidden BASE = 0x1000");
    assert!(!file.entries[0].print);
    assert_eq!(file.entries[0].expr, int(0x1000));
}

#[test]
fn test_doc_comments_attach_to_next_definition() {
    let file = parse_ok("/// Data bus width.\n/// In bits.\ndefine WIDTH = 32\ndefine OTHER = 1\n");
    assert_eq!(file.entries[0].comment, "Data bus width.\nIn bits.");
    assert_eq!(file.entries[1].comment, "");
}

#[test]
fn test_verbatim_lines() {
    let file = parse_ok("verbatim \"`timescale 1ns/1ps\"\ndefine A = 1\nverbatim \"// end\"\n");
    assert_eq!(file.verbatim, vec!["`timescale 1ns/1ps", "// end"]);
    assert_eq!(file.entries.len(), 1);
}

#[test]
fn test_multiplicative_binds_tighter_than_additive() {
    assert_eq!(
        expr_of("1 + 2 * 3"),
        Expr::binary(BinaryOp::Add, int(1), Expr::binary(BinaryOp::Mul, int(2), int(3)))
    );
}

#[test]
fn test_left_associativity() {
    assert_eq!(
        expr_of("10 - 4 - 3"),
        Expr::binary(BinaryOp::Sub, Expr::binary(BinaryOp::Sub, int(10), int(4)), int(3))
    );
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(
        expr_of("(1 << WIDTH) - 1"),
        Expr::binary(
            BinaryOp::Sub,
            Expr::binary(BinaryOp::Shl, int(1), r("WIDTH")),
            int(1)
        )
    );
}

#[test]
fn test_concat_sits_between_additive_and_shift() {
    assert_eq!(
        expr_of("\"w\" # A + 1 << 2"),
        Expr::binary(
            BinaryOp::Shl,
            Expr::binary(
                BinaryOp::Concat,
                Expr::string("w"),
                Expr::binary(BinaryOp::Add, r("A"), int(1))
            ),
            int(2)
        )
    );
}

#[test]
fn test_logical_and_comparison_levels() {
    assert_eq!(
        expr_of("A == 1 || B < 2 && C"),
        Expr::binary(
            BinaryOp::Or,
            Expr::binary(BinaryOp::Eq, r("A"), int(1)),
            Expr::binary(BinaryOp::And, Expr::binary(BinaryOp::Lt, r("B"), int(2)), r("C"))
        )
    );
}

#[test]
fn test_bitwise_levels() {
    assert_eq!(
        expr_of("A | B ^ C & D"),
        Expr::binary(
            BinaryOp::BitOr,
            r("A"),
            Expr::binary(BinaryOp::BitXor, r("B"), Expr::binary(BinaryOp::BitAnd, r("C"), r("D")))
        )
    );
}

#[test]
fn test_negative_literal_is_folded() {
    assert_eq!(expr_of("-5"), int(-5));
    assert_eq!(
        expr_of("-A"),
        Expr::unary(UnaryOp::Neg, r("A"))
    );
}

#[test]
fn test_nested_unary() {
    assert_eq!(
        expr_of("~!A"),
        Expr::unary(UnaryOp::BitNot, Expr::unary(UnaryOp::Not, r("A")))
    );
}

#[test]
fn test_missing_expression() {
    let out = parse_source("define A =\ndefine B = 2\n");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind.to_string(), "expected expression, found end of line");
    assert_eq!(out.errors[0].code(), ErrorCode::E1002);
    // Recovery keeps the next line
    assert_eq!(out.file.entries.len(), 1);
    assert_eq!(out.file.entries[0].name, Name::new("B"));
}

#[test]
fn test_unclosed_paren() {
    let out = parse_source("define A = (1 + 2\n");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, ParseErrorKind::UnclosedParen);
    assert_eq!(out.errors[0].span, Span::new(11, 12));
}

#[test]
fn test_trailing_tokens_are_rejected() {
    let out = parse_source("define A = 1 2\n");
    assert_eq!(
        out.errors[0].kind,
        ParseErrorKind::UnexpectedToken {
            expected: "end of line",
            found: "integer `2`".to_string(),
        }
    );
}

#[test]
fn test_missing_name() {
    let out = parse_source("define = 1\n");
    assert_eq!(out.errors[0].code(), ErrorCode::E1004);
}

#[test]
fn test_every_bad_line_is_reported() {
    let out = parse_source("define A = \ndefine B = )\nfoo\ndefine C = 3\n");
    assert_eq!(out.errors.len(), 3);
    assert_eq!(out.file.entries.len(), 1);
}

#[test]
fn test_lex_errors_are_merged_in_order() {
    let out = parse_source("define A = \"open\ndefine B = 1 @\n");
    let codes: Vec<ErrorCode> = out.errors.iter().map(ParseError::code).collect();
    assert_eq!(codes[0], ErrorCode::E0001);
    assert!(codes.contains(&ErrorCode::E0002));
}

#[test]
fn test_lex_error_is_the_only_error_on_its_line() {
    let codes = |source: &str| -> Vec<ErrorCode> {
        parse_source(source).errors.iter().map(ParseError::code).collect()
    };
    assert_eq!(codes("define A = 99999999999999999999\n"), vec![ErrorCode::E0003]);
    assert_eq!(codes("define A = $\n"), vec![ErrorCode::E0002]);
    // Continued lines are one line
    assert_eq!(codes("define A = $ \\\n  + \n"), vec![ErrorCode::E0002]);
    // Other lines still report their own parse errors
    assert_eq!(
        codes("define A = $\ndefine B = *\n"),
        vec![ErrorCode::E0002, ErrorCode::E1002]
    );
}

#[test]
fn test_dangling_doc_comment_warns() {
    let out = parse_source("define A = 1\n/// orphan\n");
    assert!(out.errors.is_empty());
    assert_eq!(out.warnings.len(), 1);
    let diag = out.warnings[0].to_diagnostic("define A = 1\n/// orphan\n", "a.def");
    assert_eq!(
        diag.to_string(),
        "warning [E1006]: a.def:2: doc comment is not followed by a definition"
    );
}

#[test]
fn test_diagnostic_has_file_and_line() {
    let source = "define A = 1\n\ndefine B = *\n";
    let out = parse_source(source);
    let diag = out.errors[0].to_diagnostic(source, "regs.def");
    assert_eq!(
        diag.to_string(),
        "error [E1002]: regs.def:3: expected expression, found `*`"
    );
}

#[test]
fn test_merge_rejects_duplicates() {
    let mut table = MacroTable::new();
    let first = parse_ok("define A = 1\ndefine B = 2\n");
    assert!(merge_into(&mut table, first.entries).is_empty());

    let second = parse_ok("define C = 3\ndefine A = 9\n");
    let errors = merge_into(&mut table, second.entries);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].kind,
        ParseErrorKind::DuplicateDefinition { name: Name::new("A") }
    );
    assert_eq!(errors[0].span, Span::new(13, 25));
    assert_eq!(table.len(), 3);
    assert_eq!(table.expr("A"), Some(&int(1)));
}
