use std::io::BufRead;

use crate::language::CommentSyntax;

use super::classify::{CommentTokens, LineKind, classify_line};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            code: 0,
            comment: 0,
            blank: 0,
        }
    }

    /// Number of lines read; always the sum of the three counts.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.code + self.comment + self.blank
    }

    const fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Code => self.code += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Blank => self.blank += 1,
        }
    }
}

/// Running line counts for one file, carrying block-comment state from one
/// line to the next.
#[derive(Debug, Clone)]
pub struct LineTally<'a> {
    tokens: CommentTokens<'a>,
    stats: LineStats,
    in_block_comment: bool,
}

impl<'a> LineTally<'a> {
    #[must_use]
    pub const fn new(tokens: CommentTokens<'a>) -> Self {
        Self {
            tokens,
            stats: LineStats::new(),
            in_block_comment: false,
        }
    }

    /// Classify and count one raw line. Surrounding whitespace, including the
    /// line terminator, is trimmed first.
    pub fn push_line(&mut self, raw: &str) -> LineKind {
        let (kind, still_open) = classify_line(raw.trim(), self.tokens, self.in_block_comment);
        self.in_block_comment = still_open;
        self.stats.record(kind);
        kind
    }

    #[must_use]
    pub const fn in_block_comment(&self) -> bool {
        self.in_block_comment
    }

    #[must_use]
    pub const fn stats(&self) -> LineStats {
        self.stats
    }
}

pub struct SlocCounter<'a> {
    tokens: CommentTokens<'a>,
}

impl<'a> SlocCounter<'a> {
    #[must_use]
    pub fn new(syntax: &'a CommentSyntax) -> Self {
        Self {
            tokens: CommentTokens::from_syntax(syntax),
        }
    }

    #[must_use]
    pub const fn tally(&self) -> LineTally<'a> {
        LineTally::new(self.tokens)
    }

    #[must_use]
    pub fn count(&self, source: &str) -> LineStats {
        let mut tally = self.tally();
        for line in source.lines() {
            tally.push_line(line);
        }
        tally.stats()
    }

    /// Count lines from a buffered reader (streaming, memory-efficient for large files).
    ///
    /// Lines end at `\n`; a final line without a terminator still counts.
    /// A trailing `\n` closes the last line and does not open an empty one,
    /// so an empty source has no lines and an unclosed block comment adds no
    /// extra comment line at end of file.
    /// Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    /// Returns an I/O error if reading from the reader fails.
    pub fn count_reader<R: BufRead>(&self, reader: R) -> std::io::Result<LineStats> {
        let mut tally = self.tally();
        feed_lines(reader, &mut tally)?;
        Ok(tally.stats())
    }
}

/// Push every line of `reader` into `tally`. On error the lines read so far
/// stay counted.
///
/// # Errors
/// Returns the I/O error that stopped reading.
pub fn feed_lines<R: BufRead>(mut reader: R, tally: &mut LineTally<'_>) -> std::io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        tally.push_line(&String::from_utf8_lossy(&buf));
    }
}

#[cfg(test)]
#[path = "sloc_tests.rs"]
mod tests;
