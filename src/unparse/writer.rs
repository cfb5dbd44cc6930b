//! Line writer with indentation tracking
//!
//! Text is assembled one line at a time. `emit` appends to the pending line; `newline` writes the pending line,
//! prefixed by the indentation in effect *at that moment*, into the finished output.

use super::config::{MAX_INDENT_WIDTH, UnparseConfig};

/// Writer that buffers the current line and tracks indentation
pub struct LineWriter {
    /// Finished lines, each terminated by `\n`
    output: String,
    /// The line being assembled, not yet terminated
    line: String,
    /// Current indentation level
    indent_level: usize,
    config: UnparseConfig,
}

impl LineWriter {
    pub fn new(config: UnparseConfig) -> Self {
        Self {
            output: String::new(),
            line: String::new(),
            indent_level: 0,
            config,
        }
    }

    /// Return the finished output followed by any pending line.
    ///
    /// A pending line gets its indentation prefix but no terminating newline.
    pub fn finish(mut self) -> String {
        if !self.line.is_empty() {
            self.push_prefix();
            self.output.push_str(&self.line);
        }
        self.output
    }

    /// Append text to the pending line
    pub fn emit(&mut self, s: &str) {
        self.line.push_str(s);
    }

    /// Terminate the pending line (even if empty) and start a new one
    pub fn newline(&mut self) {
        self.push_prefix();
        self.output.push_str(&self.line);
        self.output.push('\n');
        self.line.clear();
    }

    /// Terminate the pending line only if it holds text
    pub fn flush_pending(&mut self) {
        if !self.line.is_empty() {
            self.newline();
        }
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level.
    ///
    /// ## Panics
    /// - If called more often than [`LineWriter::indent`]; blocks always pair the two, so this is a bug in the caller.
    pub fn outdent(&mut self) {
        self.indent_level = self
            .indent_level
            .checked_sub(1)
            .expect("INVARIANT: outdent without matching indent");
    }

    #[allow(dead_code)]
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Text of the line being assembled
    #[allow(dead_code)]
    pub fn pending_line(&self) -> &str {
        &self.line
    }

    #[allow(dead_code)]
    pub fn config(&self) -> &UnparseConfig {
        &self.config
    }

    fn push_prefix(&mut self) {
        let step = self.config.indent_width.min(MAX_INDENT_WIDTH);
        let width = self.indent_level.saturating_mul(step);
        self.output.extend(std::iter::repeat_n(' ', width));
    }
}
