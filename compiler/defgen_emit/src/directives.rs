//! Directive rendering.
//!
//! Define mode:
//!
//! ```text
//! //Data bus width.
//! `ifndef WIDTH
//!  `define WIDTH 32
//! `endif
//!
//! ```
//!
//! Undefine mode:
//!
//! ```text
//! `ifdef WIDTH
//!  `undef WIDTH
//! `endif
//!
//! ```

use defgen_eval::ResolvedEntry;
use defgen_ir::Name;

use crate::emitter::Emitter;

/// The banner at the top of every generated file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    /// Generator name and version, e.g. `defgen 0.1.0`.
    pub tool: String,
}

impl Header {
    pub fn new(tool: impl Into<String>) -> Self {
        Header { tool: tool.into() }
    }

    pub fn render(&self, out: &mut impl Emitter) {
        out.emit_line(&format!("//Generated by {}.", self.tool));
        out.emit_line("//This file has been automatically generated.");
        out.emit_line("//Edit contents with extreme caution.");
        out.emit_newline();
    }
}

/// Render define mode: header, verbatim block, then one guarded `` `define``
/// per entry in the order given.
pub fn write_defines(
    out: &mut impl Emitter,
    header: &Header,
    verbatim: &[String],
    entries: &[ResolvedEntry],
) {
    header.render(out);

    if !verbatim.is_empty() {
        for line in verbatim {
            out.emit_line(line);
        }
        out.emit_newline();
    }

    for entry in entries {
        write_comment(out, &entry.comment);
        out.emit_line(&format!("`ifndef {}", entry.name));
        write_define(out, &entry.name, &entry.text);
        out.emit_line("`endif");
        out.emit_newline();
    }
}

/// Render undefine mode: header, then one guarded `` `undef`` per name.
/// Verbatim lines are not part of an undefines file.
pub fn write_undefines<'a>(
    out: &mut impl Emitter,
    header: &Header,
    names: impl IntoIterator<Item = &'a Name>,
) {
    header.render(out);

    for name in names {
        out.emit_line(&format!("`ifdef {name}"));
        out.emit_space();
        out.emit_line(&format!("`undef {name}"));
        out.emit_line("`endif");
        out.emit_newline();
    }
}

/// The `` `define`` line itself. Line breaks in `text` become `\`
/// continuations so the directive stays one macro.
fn write_define(out: &mut impl Emitter, name: &Name, text: &str) {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = text.split('\n');
    out.emit_space();
    out.emit(&format!("`define {name} {}", lines.next().unwrap_or_default()));
    for line in lines {
        out.emit("\\");
        out.emit_newline();
        out.emit(line);
    }
    out.emit_newline();
}

/// Every line of a non-empty comment, prefixed with `//`.
fn write_comment(out: &mut impl Emitter, comment: &str) {
    if comment.is_empty() {
        return;
    }
    for line in comment.split('\n') {
        out.emit("//");
        out.emit_line(line);
    }
}
