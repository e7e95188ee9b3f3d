//! Document model for the notepad
//!
//! Holds the buffer, the file it belongs to, and its edit history. Open and
//! save go through `file_io`; no field changes unless the I/O succeeded.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::file_io;
use crate::history::{self, EditHistory};

/// Window title used while the document has no file.
pub const UNTITLED_TITLE: &str = "Notepad";

#[derive(Debug, Clone, Default)]
pub struct Document {
    text: String,
    path: Option<PathBuf>,
    history: EditHistory,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the text and path and start a clean history.
    pub fn clear(&mut self) {
        self.text.clear();
        self.path = None;
        self.history.clear();
    }

    /// Read `path` into a fresh document. Nothing is built unless the whole
    /// file was read.
    pub fn open(path: &Path) -> Result<Self> {
        let text = file_io::read_text(path)?;
        Ok(Self {
            text,
            path: Some(path.to_path_buf()),
            history: EditHistory::new(),
        })
    }

    /// Write the buffer to the current path. Returns `Ok(false)` when the
    /// document has no path yet and must go through [`Document::save_as`].
    pub fn save(&mut self) -> Result<bool> {
        let Some(path) = self.path.as_deref() else {
            return Ok(false);
        };
        file_io::write_text(path, &self.text)?;
        self.history.mark_saved();
        Ok(true)
    }

    /// Write the buffer to `path` (with `.txt` appended when missing) and
    /// adopt it as the document's file. Returns the path actually written.
    pub fn save_as(&mut self, path: &Path) -> Result<PathBuf> {
        let path = file_io::ensure_txt_extension(path);
        file_io::write_text(&path, &self.text)?;
        self.path = Some(path.clone());
        self.history.mark_saved();
        Ok(path)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Title for the window: the file name, or "Notepad" when untitled.
    pub fn title(&self) -> String {
        self.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED_TITLE.to_string())
    }

    pub fn is_dirty(&self) -> bool {
        self.history.is_dirty()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Take the text area's new contents, recording what changed.
    pub fn replace_text(&mut self, next: &str) {
        for edit in history::diff(&self.text, next) {
            edit.apply(&mut self.text);
            self.history.record(edit);
        }
    }

    pub fn undo(&mut self) -> Option<usize> {
        self.history.undo(&mut self.text)
    }

    pub fn redo(&mut self) -> Option<usize> {
        self.history.redo(&mut self.text)
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_document() {
        let doc = Document::new();
        assert_eq!(doc.text(), "");
        assert_eq!(doc.path(), None);
        assert_eq!(doc.title(), "Notepad");
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_replace_text_edits_buffer() {
        let mut doc = Document::new();
        doc.replace_text("Hello");
        assert_eq!(doc.text(), "Hello");
        assert!(doc.is_dirty());

        doc.replace_text("Hello World");
        assert_eq!(doc.text(), "Hello World");

        doc.replace_text("HelloWorld");
        assert_eq!(doc.text(), "HelloWorld");

        doc.replace_text("HelloWorld");
        doc.undo();
        assert_eq!(doc.text(), "Hello World");
    }

    #[test]
    fn test_undo_redo() {
        let mut doc = Document::new();
        doc.replace_text("Hello");
        doc.replace_text("Hello World");

        assert_eq!(doc.undo(), Some(5));
        assert_eq!(doc.text(), "Hello");

        assert_eq!(doc.redo(), Some(11));
        assert_eq!(doc.text(), "Hello World");
    }

    #[test]
    fn test_replace_text_records_history() {
        let mut doc = Document::new();
        doc.replace_text("abc");
        doc.replace_text("abXc");
        doc.replace_text("Xc");
        assert_eq!(doc.text(), "Xc");

        doc.undo();
        assert_eq!(doc.text(), "abXc");
        doc.undo();
        assert_eq!(doc.text(), "abc");
        doc.undo();
        assert_eq!(doc.text(), "");
        assert!(!doc.can_undo());
    }

    #[test]
    fn test_save_without_path_needs_save_as() {
        let mut doc = Document::new();
        doc.replace_text("draft");
        assert!(!doc.save().unwrap());
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_save_as_appends_txt_and_sets_title() {
        let dir = TempDir::new().unwrap();
        let mut doc = Document::new();
        doc.replace_text("draft");

        let written = doc.save_as(&dir.path().join("notes")).unwrap();
        assert_eq!(written, dir.path().join("notes.txt"));
        assert_eq!(doc.title(), "notes.txt");
        assert!(!doc.is_dirty());
        assert_eq!(std::fs::read_to_string(&written).unwrap(), "draft");

        doc.replace_text("draft two");
        assert!(doc.save().unwrap());
        assert_eq!(std::fs::read_to_string(&written).unwrap(), "draft two");
    }

    #[test]
    fn test_save_as_keeps_uppercase_suffix() {
        let dir = TempDir::new().unwrap();
        let mut doc = Document::new();
        let written = doc.save_as(&dir.path().join("notes.TXT")).unwrap();
        assert_eq!(written.file_name().unwrap(), "notes.TXT");
    }

    #[test]
    fn test_save_round_trips_through_open() {
        let dir = TempDir::new().unwrap();
        let mut doc = Document::new();
        doc.replace_text("line one\nline two\n\tindented\n");
        let path = doc.save_as(&dir.path().join("trip.txt")).unwrap();

        let reopened = Document::open(&path).unwrap();
        assert_eq!(reopened.text(), doc.text());
        assert_eq!(reopened.title(), "trip.txt");
        assert!(!reopened.can_undo());
        assert!(!reopened.is_dirty());
    }

    #[test]
    fn test_failed_save_as_leaves_document_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut doc = Document::new();
        doc.replace_text("keep me");

        let bad = dir.path().join("no_such_dir").join("file.txt");
        assert!(doc.save_as(&bad).is_err());
        assert_eq!(doc.path(), None);
        assert_eq!(doc.title(), "Notepad");
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_clear_resets_everything() {
        let dir = TempDir::new().unwrap();
        let mut doc = Document::new();
        doc.replace_text("scratch");
        doc.save_as(&dir.path().join("scratch.txt")).unwrap();
        doc.replace_text("more scratch");

        doc.clear();
        assert_eq!(doc.text(), "");
        assert_eq!(doc.path(), None);
        assert_eq!(doc.title(), "Notepad");
        assert!(!doc.is_dirty());
        assert!(!doc.can_undo());
        assert!(!doc.can_redo());
    }

    #[test]
    fn test_stats() {
        let mut doc = Document::new();
        doc.replace_text("two words\nand three more");
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.word_count(), 5);
        assert_eq!(doc.char_count(), 24);
    }
}
