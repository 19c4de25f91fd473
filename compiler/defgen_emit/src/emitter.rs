//! Output Emitter
//!
//! Abstraction for producing output text. Rendering writes to an emitter;
//! the CLI collects everything in a [`StringEmitter`] so nothing reaches the
//! output file unless the whole run succeeded.

/// Sink for rendered text.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit a single space.
    fn emit_space(&mut self);

    /// Emit `text` followed by a newline.
    fn emit_line(&mut self, text: &str) {
        self.emit(text);
        self.emit_newline();
    }
}

/// String-based emitter for in-memory rendering.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_space(&mut self) {
        self.buffer.push(' ');
    }
}
