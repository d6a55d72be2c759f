//! Editor seam between the evaluation pipeline and its host.
//!
//! The pipeline needs exactly five things from whatever owns the document:
//! line access, the selected text, the cursor line, and a single
//! replace-selection mutation. Keeping that surface behind a trait lets
//! tests substitute an in-memory buffer for the rope-backed document.

use crate::doc::Document;
use crate::selection::LineSelection;

/// Host-side view of the document being evaluated against.
///
/// `replace_selection` is the only mutation the pipeline ever performs, and
/// it is called at most once per evaluation request.
pub trait Editor {
    fn line_count(&self) -> usize;

    /// Content of line `i` without its trailing newline.
    fn line(&self, i: usize) -> String;

    /// The currently selected text, or `None` when nothing is selected.
    fn selection(&self) -> Option<String>;

    /// Line the cursor sits on.
    fn cursor_line(&self) -> usize;

    /// Replace the current selection with `text`.
    fn replace_selection(&mut self, text: &str);
}

/// An `Editor` over a [`Document`] with a linewise selection.
pub struct DocumentEditor {
    doc: Document,
    selection: LineSelection,
}

impl DocumentEditor {
    pub fn new(doc: Document, selection: LineSelection) -> Self {
        Self { doc, selection }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }
}

impl Editor for DocumentEditor {
    fn line_count(&self) -> usize {
        self.doc.line_count()
    }

    fn line(&self, i: usize) -> String {
        self.doc.line(i)
    }

    fn selection(&self) -> Option<String> {
        let (start, end) = self.selection.range();
        let text = self.doc.get_lines(start, end);
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn cursor_line(&self) -> usize {
        self.selection.cursor
    }

    fn replace_selection(&mut self, text: &str) {
        let (start, end) = self.selection.range();
        self.doc.replace_lines(start, end, text);
    }
}

/// In-memory editor used by unit tests across the crate.
#[cfg(test)]
pub struct MemoryEditor {
    pub lines: Vec<String>,
    pub selection: Option<String>,
    pub cursor: usize,
    pub replacements: Vec<String>,
}

#[cfg(test)]
impl MemoryEditor {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            selection: None,
            cursor: 0,
            replacements: Vec::new(),
        }
    }

    pub fn with_selection(mut self, text: &str, cursor: usize) -> Self {
        self.selection = Some(text.to_string());
        self.cursor = cursor;
        self
    }
}

#[cfg(test)]
impl Editor for MemoryEditor {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, i: usize) -> String {
        self.lines[i].clone()
    }

    fn selection(&self) -> Option<String> {
        self.selection.clone()
    }

    fn cursor_line(&self) -> usize {
        self.cursor
    }

    fn replace_selection(&mut self, text: &str) {
        self.replacements.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::Document;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn doc_from(content: &str) -> Document {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        Document::load(file.path()).unwrap()
    }

    #[test]
    fn test_selection_text() {
        let doc = doc_from("line 1\nline 2\nline 3\n");
        let editor = DocumentEditor::new(doc, LineSelection { anchor: 0, cursor: 1 });
        assert_eq!(editor.selection().as_deref(), Some("line 1\nline 2"));
        assert_eq!(editor.cursor_line(), 1);
    }

    #[test]
    fn test_replace_selection_spans_lines() {
        let doc = doc_from("a\nb\nc\n");
        let mut editor = DocumentEditor::new(doc, LineSelection { anchor: 1, cursor: 1 });
        editor.replace_selection("b\n```\nresult\n```");
        let doc = editor.into_document();
        assert_eq!(doc.get_lines(0, doc.line_count() - 1), "a\nb\n```\nresult\n```\nc");
    }

    #[test]
    fn test_empty_selection_is_none() {
        let doc = doc_from("");
        let editor = DocumentEditor::new(doc, LineSelection::new(0));
        assert_eq!(editor.selection(), None);
    }
}
