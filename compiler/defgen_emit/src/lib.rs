//! Verilog preprocessor output for defgen.
//!
//! Renders evaluated macros as guarded `` `define`` directives, or the
//! matching `` `undef`` directives in undefine mode. Rendering cannot fail;
//! whether to render at all is the caller's decision.

mod directives;
mod emitter;

use defgen_eval::ResolvedEntry;
use defgen_ir::Name;

pub use directives::{write_defines, write_undefines, Header};
pub use emitter::{Emitter, StringEmitter};

/// Render a complete defines file.
pub fn emit_defines(header: &Header, verbatim: &[String], entries: &[ResolvedEntry]) -> String {
    let mut out = StringEmitter::new();
    write_defines(&mut out, header, verbatim, entries);
    out.output()
}

/// Render a complete undefines file.
pub fn emit_undefines<'a>(header: &Header, names: impl IntoIterator<Item = &'a Name>) -> String {
    let mut out = StringEmitter::new();
    write_undefines(&mut out, header, names);
    out.output()
}

#[cfg(test)]
mod tests;
