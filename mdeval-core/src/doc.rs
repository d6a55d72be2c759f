//! Document model with Rope-based text storage

use anyhow::{Context, Result};
use ropey::Rope;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A markdown document open for evaluation.
#[derive(Clone)]
pub struct Document {
    pub path: PathBuf,
    pub rope: Rope,
    pub loaded_mtime: Option<SystemTime>,
    pub rev: u64,
}

impl Document {
    /// Load a document from a file path
    pub fn load(path: &Path) -> Result<Self> {
        let abs_path = path
            .canonicalize()
            .with_context(|| format!("Failed to canonicalize path: {}", path.display()))?;

        let content = fs::read_to_string(&abs_path)
            .with_context(|| format!("Failed to read file: {}", abs_path.display()))?;

        let metadata = fs::metadata(&abs_path).ok();
        let mtime = metadata.and_then(|m| m.modified().ok());

        Ok(Self {
            path: abs_path,
            rope: Rope::from_str(&content),
            loaded_mtime: mtime,
            rev: 1,
        })
    }

    /// Reload the document from disk
    pub fn reload(&mut self) -> Result<()> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to reload file: {}", self.path.display()))?;

        self.rope = Rope::from_str(&content);

        let metadata = fs::metadata(&self.path).ok();
        self.loaded_mtime = metadata.and_then(|m| m.modified().ok());
        self.rev += 1;

        Ok(())
    }

    /// Write the current buffer back to the file it was loaded from
    pub fn save(&mut self) -> Result<()> {
        fs::write(&self.path, self.rope.to_string())
            .with_context(|| format!("Failed to write file: {}", self.path.display()))?;

        let metadata = fs::metadata(&self.path).ok();
        self.loaded_mtime = metadata.and_then(|m| m.modified().ok());
        self.rev += 1;

        Ok(())
    }

    /// Get the number of lines in the document
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Content of a single line without its trailing newline
    pub fn line(&self, line_idx: usize) -> String {
        if line_idx >= self.line_count() {
            return String::new();
        }
        let line = self.rope.line(line_idx);
        let mut result: String = line.chunks().collect();
        if result.ends_with('\n') {
            result.pop();
            if result.ends_with('\r') {
                result.pop();
            }
        }
        result
    }

    /// Extract a run of lines as clean text (inclusive range)
    pub fn get_lines(&self, start: usize, end_inclusive: usize) -> String {
        let line_count = self.line_count();

        // Clamp to valid range
        let start = start.min(line_count.saturating_sub(1));
        let end = end_inclusive.min(line_count.saturating_sub(1));

        if start > end {
            return String::new();
        }

        let mut result = String::new();
        for line_idx in start..=end {
            let line = self.rope.line(line_idx);
            for chunk in line.chunks() {
                result.push_str(chunk);
            }
        }

        // Remove trailing newline if present
        if result.ends_with('\n') {
            result.pop();
        }

        result
    }

    /// Replace an inclusive line range with `text` in one edit.
    ///
    /// The trailing newline of `end_inclusive` (if any) is kept, so the
    /// replacement slots into the surrounding lines without joining them.
    pub fn replace_lines(&mut self, start: usize, end_inclusive: usize, text: &str) {
        let line_count = self.line_count();
        let start = start.min(line_count.saturating_sub(1));
        let end = end_inclusive.min(line_count.saturating_sub(1));

        if start > end {
            return;
        }

        let start_char = self.rope.line_to_char(start);
        let end_line = self.rope.line(end);
        let mut end_char = self.rope.line_to_char(end) + end_line.len_chars();

        // Step back over the end line's newline so it survives the edit
        let end_str: String = end_line.chunks().collect();
        if end_str.ends_with('\n') {
            end_char -= 1;
        }

        self.rope.remove(start_char..end_char);
        self.rope.insert(start_char, text);
        self.rev += 1;
    }
}
