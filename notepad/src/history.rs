//! Linear undo/redo history for the text buffer.
//!
//! Every mutation of the buffer is stored as an [`EditRecord`]. The history
//! keeps a cursor: records before it can be undone, records at or after it
//! can be redone. Recording a new edit drops the redoable tail.
//!
//! Offsets are character offsets, so records stay valid for any UTF-8 text.

/// One atomic change to the buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditRecord {
    Insert { offset: usize, text: String },
    Delete { offset: usize, text: String },
}

/// Byte index of the `char_idx`-th character (clamped to the end).
fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(b, _)| b)
        .unwrap_or(text.len())
}

impl EditRecord {
    /// Apply the edit to `buffer`, returning the caret position after it.
    pub fn apply(&self, buffer: &mut String) -> usize {
        match self {
            EditRecord::Insert { offset, text } => {
                let at = byte_offset(buffer, *offset);
                buffer.insert_str(at, text);
                offset + text.chars().count()
            }
            EditRecord::Delete { offset, text } => {
                let start = byte_offset(buffer, *offset);
                let end = start + text.len().min(buffer.len() - start);
                buffer.replace_range(start..end, "");
                *offset
            }
        }
    }

    /// The record that undoes this one.
    pub fn inverse(&self) -> EditRecord {
        match self {
            EditRecord::Insert { offset, text } => EditRecord::Delete { offset: *offset, text: text.clone() },
            EditRecord::Delete { offset, text } => EditRecord::Insert { offset: *offset, text: text.clone() },
        }
    }
}

/// Describe the change from `before` to `after` as edit records.
///
/// The GUI text area only ever changes one contiguous span per event, so a
/// common prefix/suffix scan is exact: a removed span becomes a `Delete`,
/// an inserted span an `Insert`, and a replacement both (delete first).
pub fn diff(before: &str, after: &str) -> Vec<EditRecord> {
    if before == after {
        return Vec::new();
    }

    let prefix = before
        .chars()
        .zip(after.chars())
        .take_while(|(a, b)| a == b)
        .count();

    let before_len = before.chars().count();
    let after_len = after.chars().count();
    let max_suffix = before_len.min(after_len) - prefix;
    let suffix = before
        .chars()
        .rev()
        .zip(after.chars().rev())
        .take(max_suffix)
        .take_while(|(a, b)| a == b)
        .count();

    let mut records = Vec::with_capacity(2);

    let removed_end = before_len - suffix;
    if removed_end > prefix {
        let text = before[byte_offset(before, prefix)..byte_offset(before, removed_end)].to_string();
        records.push(EditRecord::Delete { offset: prefix, text });
    }

    let inserted_end = after_len - suffix;
    if inserted_end > prefix {
        let text = after[byte_offset(after, prefix)..byte_offset(after, inserted_end)].to_string();
        records.push(EditRecord::Insert { offset: prefix, text });
    }

    records
}

#[derive(Debug, Clone)]
pub struct EditHistory {
    records: Vec<EditRecord>,
    cursor: usize,
    /// Cursor value at the last open/save; `None` once that point was
    /// truncated away by a new edit.
    saved_at: Option<usize>,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            cursor: 0,
            saved_at: Some(0),
        }
    }

    /// Append an edit at the cursor, discarding the redoable tail.
    pub fn record(&mut self, edit: EditRecord) {
        if self.cursor < self.records.len() {
            self.records.truncate(self.cursor);
            if self.saved_at.is_some_and(|s| s > self.cursor) {
                self.saved_at = None;
            }
        }
        self.records.push(edit);
        self.cursor += 1;
    }

    /// Reverse the edit before the cursor. Returns the caret position, or
    /// `None` when there is nothing to undo.
    pub fn undo(&mut self, buffer: &mut String) -> Option<usize> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.records[self.cursor].inverse().apply(buffer))
    }

    /// Re-apply the edit at the cursor. Returns the caret position, or
    /// `None` when there is nothing to redo.
    pub fn redo(&mut self, buffer: &mut String) -> Option<usize> {
        let edit = self.records.get(self.cursor)?;
        let caret = edit.apply(buffer);
        self.cursor += 1;
        Some(caret)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.records.len()
    }

    /// Forget every record; the current buffer becomes the clean baseline.
    pub fn clear(&mut self) {
        self.records.clear();
        self.cursor = 0;
        self.saved_at = Some(0);
    }

    pub fn mark_saved(&mut self) {
        self.saved_at = Some(self.cursor);
    }

    pub fn is_dirty(&self) -> bool {
        self.saved_at != Some(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_change(history: &mut EditHistory, buffer: &mut String, next: &str) {
        for edit in diff(buffer, next) {
            history.record(edit);
        }
        *buffer = next.to_string();
    }

    #[test]
    fn test_diff_insert_delete_replace() {
        assert_eq!(
            diff("helo", "hello"),
            vec![EditRecord::Insert { offset: 3, text: "l".into() }]
        );
        assert_eq!(
            diff("hello world", "hello"),
            vec![EditRecord::Delete { offset: 5, text: " world".into() }]
        );
        assert_eq!(
            diff("a cat sat", "a dog sat"),
            vec![
                EditRecord::Delete { offset: 2, text: "cat".into() },
                EditRecord::Insert { offset: 2, text: "dog".into() },
            ]
        );
        assert!(diff("same", "same").is_empty());
    }

    #[test]
    fn test_diff_uses_char_offsets() {
        assert_eq!(
            diff("中文", "中x文"),
            vec![EditRecord::Insert { offset: 1, text: "x".into() }]
        );
        assert_eq!(
            diff("café!", "caf!"),
            vec![EditRecord::Delete { offset: 3, text: "é".into() }]
        );
    }

    #[test]
    fn test_undo_redo_empty_are_noops() {
        let mut history = EditHistory::new();
        let mut buffer = String::from("untouched");
        assert_eq!(history.undo(&mut buffer), None);
        assert_eq!(history.redo(&mut buffer), None);
        assert_eq!(buffer, "untouched");
        assert!(!history.is_dirty());
    }

    #[test]
    fn test_undo_then_redo_restores_buffer() {
        let mut history = EditHistory::new();
        let mut buffer = String::new();
        record_change(&mut history, &mut buffer, "Hello");
        record_change(&mut history, &mut buffer, "Hello World");
        record_change(&mut history, &mut buffer, "Hello Rust World");

        assert_eq!(history.undo(&mut buffer), Some(6));
        assert_eq!(buffer, "Hello World");
        history.undo(&mut buffer);
        assert_eq!(buffer, "Hello");
        assert_eq!(history.redo(&mut buffer), Some(11));
        assert_eq!(buffer, "Hello World");
        history.redo(&mut buffer);
        assert_eq!(buffer, "Hello Rust World");
        assert!(!history.can_redo());
    }

    #[test]
    fn test_new_edit_truncates_redo_tail() {
        let mut history = EditHistory::new();
        let mut buffer = String::new();
        record_change(&mut history, &mut buffer, "one");
        record_change(&mut history, &mut buffer, "one two");
        history.undo(&mut buffer);
        assert!(history.can_redo());

        record_change(&mut history, &mut buffer, "one three");
        assert!(!history.can_redo());
        assert_eq!(history.redo(&mut buffer), None);
        assert_eq!(buffer, "one three");
    }

    #[test]
    fn test_dirty_tracks_saved_marker() {
        let mut history = EditHistory::new();
        let mut buffer = String::new();
        record_change(&mut history, &mut buffer, "a");
        assert!(history.is_dirty());
        history.mark_saved();
        assert!(!history.is_dirty());

        history.undo(&mut buffer);
        assert!(history.is_dirty());
        history.redo(&mut buffer);
        assert!(!history.is_dirty());

        // diverging after an undo makes the saved state unreachable
        history.undo(&mut buffer);
        record_change(&mut history, &mut buffer, "b");
        assert!(history.is_dirty());
        history.undo(&mut buffer);
        assert!(history.is_dirty());
    }

    #[test]
    fn test_replaying_applied_records_reproduces_buffer() {
        let mut history = EditHistory::new();
        let mut buffer = String::new();
        for next in ["ab", "abc", "xbc", "xbcdé", "é", ""] {
            record_change(&mut history, &mut buffer, next);
        }
        history.undo(&mut buffer);
        history.undo(&mut buffer);

        let mut replay = String::new();
        for edit in &history.records[..history.cursor] {
            edit.apply(&mut replay);
        }
        assert_eq!(replay, buffer);
    }

    #[test]
    fn test_undo_all_redo_all_round_trip() {
        // deterministic pseudo-random edit sequences
        let mut seed: u64 = 0x5eed;
        let mut next = move || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) as usize
        };
        let alphabet: Vec<char> = "abc xyz\néü中".chars().collect();

        for _ in 0..20 {
            let mut history = EditHistory::new();
            let mut buffer = String::new();
            let mut edits = 0;
            for _ in 0..30 {
                let len = buffer.chars().count();
                let edit = if len > 0 && next() % 3 == 0 {
                    let start = next() % len;
                    let count = 1 + next() % (len - start);
                    let text: String = buffer.chars().skip(start).take(count).collect();
                    EditRecord::Delete { offset: start, text }
                } else {
                    let at = next() % (len + 1);
                    let text: String = (0..1 + next() % 4)
                        .map(|_| alphabet[next() % alphabet.len()])
                        .collect();
                    EditRecord::Insert { offset: at, text }
                };
                edit.apply(&mut buffer);
                history.record(edit);
                edits += 1;
            }

            let original = buffer.clone();
            for _ in 0..edits {
                assert!(history.undo(&mut buffer).is_some());
            }
            assert!(buffer.is_empty());
            assert_eq!(history.undo(&mut buffer), None);
            for _ in 0..edits {
                assert!(history.redo(&mut buffer).is_some());
            }
            assert_eq!(buffer, original);
        }
    }
}
