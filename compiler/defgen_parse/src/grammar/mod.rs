//! Line-level grammar.
//!
//! ```text
//! file  := { line }
//! line  := NEWLINE
//!        | DOC NEWLINE
//!        | ("define" | "hidden") IDENT "=" expr END
//!        | "verbatim" STRING END
//! END   := NEWLINE | EOF
//! ```

mod expr;

use defgen_ir::{MacroEntry, Span};
use defgen_lexer::TokenKind;

use crate::{ParseError, ParseErrorKind, ParseWarning, ParsedFile, Parser};

/// Doc comment lines waiting for the definition they describe.
#[derive(Default)]
struct PendingDocs {
    lines: Vec<String>,
    span: Option<Span>,
}

impl PendingDocs {
    fn push(&mut self, text: &str, span: Span) {
        self.lines.push(text.to_string());
        self.span = Some(self.span.map_or(span, |s| s.merge(span)));
    }

    fn take(&mut self) -> String {
        self.span = None;
        std::mem::take(&mut self.lines).join("\n")
    }
}

impl Parser<'_> {
    pub(crate) fn parse_file(&mut self) -> ParsedFile {
        let mut file = ParsedFile::default();
        let mut docs = PendingDocs::default();

        loop {
            match self.cursor.current_kind() {
                TokenKind::Eof => break,
                TokenKind::Newline => {
                    self.cursor.advance();
                }
                TokenKind::DocComment(text) => {
                    let span = self.cursor.advance().span;
                    docs.push(text, span);
                }
                TokenKind::Define | TokenKind::Hidden => {
                    let comment = docs.take();
                    match self.parse_definition(comment) {
                        Ok(entry) => file.entries.push(entry),
                        Err(err) => self.recover(err),
                    }
                }
                TokenKind::Verbatim => {
                    self.warn_dangling(&mut docs);
                    match self.parse_verbatim() {
                        Ok(line) => file.verbatim.push(line),
                        Err(err) => self.recover(err),
                    }
                }
                other => {
                    let err = ParseError::new(
                        ParseErrorKind::UnexpectedToken {
                            expected: "`define`, `hidden` or `verbatim`",
                            found: other.describe(),
                        },
                        self.cursor.current_span(),
                    );
                    docs.take();
                    self.recover(err);
                }
            }
        }

        self.warn_dangling(&mut docs);
        file
    }

    /// `define NAME = expr` or `hidden NAME = expr`.
    fn parse_definition(&mut self, comment: String) -> Result<MacroEntry, ParseError> {
        let keyword = self.cursor.advance();
        let print = keyword.kind == TokenKind::Define;

        let name = match self.cursor.current_kind() {
            TokenKind::Ident(name) => name.clone(),
            other => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedIdentifier {
                        found: other.describe(),
                    },
                    self.cursor.current_span(),
                ))
            }
        };
        self.cursor.advance();

        self.expect(&TokenKind::Eq, "`=`")?;
        let expr = self.parse_expr()?;
        let span = keyword.span.merge(self.cursor.previous_span());
        self.expect_line_end()?;

        tracing::trace!(%name, %expr, print, "definition");

        Ok(MacroEntry::new(name, expr)
            .with_print(print)
            .with_comment(comment)
            .with_span(span))
    }

    /// `verbatim "text"`.
    fn parse_verbatim(&mut self) -> Result<String, ParseError> {
        self.cursor.advance();
        let text = match self.cursor.current_kind() {
            TokenKind::Str(text) => text.clone(),
            other => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedToken {
                        expected: "string literal",
                        found: other.describe(),
                    },
                    self.cursor.current_span(),
                ))
            }
        };
        self.cursor.advance();
        self.expect_line_end()?;
        Ok(text)
    }

    fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<(), ParseError> {
        if self.cursor.check(kind) {
            self.cursor.advance();
            Ok(())
        } else {
            Err(ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    expected,
                    found: self.cursor.current_kind().describe(),
                },
                self.cursor.current_span(),
            ))
        }
    }

    /// Require the end of the statement and consume the newline.
    fn expect_line_end(&mut self) -> Result<(), ParseError> {
        if !self.cursor.at_line_end() {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    expected: "end of line",
                    found: self.cursor.current_kind().describe(),
                },
                self.cursor.current_span(),
            ));
        }
        self.cursor.advance();
        Ok(())
    }

    /// Record `err` and resume at the next line.
    fn recover(&mut self, err: ParseError) {
        tracing::debug!(error = %err, span = %err.span, "recovering at next line");
        self.errors.push(err);
        self.cursor.skip_line();
    }

    fn warn_dangling(&mut self, docs: &mut PendingDocs) {
        if let Some(span) = docs.span {
            self.warnings.push(ParseWarning::DanglingDocComment { span });
        }
        docs.take();
    }
}
