//! Output accumulator for the Jira renderer.
//!
//! Jira markup is line oriented: headings, list items, table rows and macros
//! must start at the beginning of a line, and paragraphs are separated by a
//! blank line. The buffer tracks just enough of its own tail to place those
//! line breaks without ever doubling them.

/// Accumulates rendered markup for a single render call.
#[derive(Debug, Default)]
pub struct BlockBuffer {
    out: String,
}

impl BlockBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fragment verbatim.
    pub fn push(&mut self, fragment: &str) {
        self.out.push_str(fragment);
    }

    /// Ends the current line, unless nothing was written yet or the output
    /// already sits at the start of a line.
    pub fn cr(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    /// Runs `f` so that its output starts and ends on a line of its own.
    pub fn block<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.cr();
        f(self);
        self.cr();
    }

    /// Runs `f` between `prefix` and `terminator`.
    pub fn container<F>(&mut self, prefix: &str, terminator: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.push(prefix);
        f(self);
        self.push(terminator);
    }

    /// Leaves exactly one blank line after the current content.
    pub fn blocksep(&mut self) {
        self.cr();
        if !self.out.is_empty() && !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
