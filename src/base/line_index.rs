//! Byte offset ↔ line/column conversion.
//!
//! The parser works in byte offsets (`TextSize`), editors talk in 0-indexed
//! lines and UTF-16 columns. `LineIndex` is built once per source text and
//! converts in both directions.

use rowan::{TextRange, TextSize};
use rustc_hash::FxHashMap;

use super::position::{Position, Range};

/// A character whose UTF-8 and UTF-16 widths differ, stored per line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct WideChar {
    /// Byte offset of the character within its line
    start: TextSize,
    /// Byte offset just past the character within its line
    end: TextSize,
}

impl WideChar {
    fn len(&self) -> u32 {
        u32::from(self.end - self.start)
    }

    /// Width in UTF-16 code units
    fn wide_len(&self) -> u32 {
        if self.len() == 4 { 2 } else { 1 }
    }
}

/// Maps between byte offsets and line/column positions for one text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset at which each line starts
    line_starts: Vec<TextSize>,
    /// Non-ASCII characters, keyed by line
    wide_chars: FxHashMap<u32, Vec<WideChar>>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        let mut wide_chars = FxHashMap::default();
        let mut line_wide = Vec::new();
        let mut line = 0u32;
        let mut line_start = 0usize;

        for (offset, c) in text.char_indices() {
            if c == '\n' {
                if !line_wide.is_empty() {
                    wide_chars.insert(line, std::mem::take(&mut line_wide));
                }
                line += 1;
                line_start = offset + 1;
                line_starts.push(TextSize::from(line_start as u32));
                continue;
            }
            if !c.is_ascii() {
                let start = (offset - line_start) as u32;
                line_wide.push(WideChar {
                    start: TextSize::new(start),
                    end: TextSize::new(start + c.len_utf8() as u32),
                });
            }
        }
        if !line_wide.is_empty() {
            wide_chars.insert(line, line_wide);
        }

        Self {
            line_starts,
            wide_chars,
            len: TextSize::of(text),
        }
    }

    /// Number of lines (a trailing newline opens one more, empty, line)
    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    /// Convert an editor position to a byte offset.
    ///
    /// Returns `None` when the line does not exist, the column is past the end
    /// of the line, or the column splits a surrogate pair.
    pub fn offset(&self, position: Position) -> Option<TextSize> {
        let line_start = *self.line_starts.get(position.line as usize)?;
        let line_len = self.line_end(position.line) - line_start;
        let column = self.utf16_to_utf8_col(position.line, position.column)?;
        if column > line_len {
            return None;
        }
        Some(line_start + column)
    }

    /// Convert a byte offset to an editor position. Offsets past the end of
    /// the text are clamped to the end.
    pub fn position(&self, offset: TextSize) -> Position {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let column = offset - self.line_starts[line];
        let line = line as u32;
        Position::new(line, self.utf8_to_utf16_col(line, column))
    }

    /// Convert a byte range to an editor range
    pub fn range(&self, range: TextRange) -> Range {
        Range::new(self.position(range.start()), self.position(range.end()))
    }

    /// Byte offset of the end of `line`, excluding its newline
    fn line_end(&self, line: u32) -> TextSize {
        match self.line_starts.get(line as usize + 1) {
            Some(next) => *next - TextSize::new(1),
            None => self.len,
        }
    }

    fn utf16_to_utf8_col(&self, line: u32, mut column: u32) -> Option<TextSize> {
        if let Some(wide) = self.wide_chars.get(&line) {
            for c in wide {
                let start = u32::from(c.start);
                if start >= column {
                    break;
                }
                if column - start < c.wide_len() {
                    return None;
                }
                column += c.len() - c.wide_len();
            }
        }
        Some(TextSize::new(column))
    }

    fn utf8_to_utf16_col(&self, line: u32, column: TextSize) -> u32 {
        let mut result = u32::from(column);
        if let Some(wide) = self.wide_chars.get(&line) {
            for c in wide {
                if c.end > column {
                    break;
                }
                result -= c.len() - c.wide_len();
            }
        }
        result
    }
}
