//! Reading and writing plain text files.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{NotepadError, Result};

const TXT_SUFFIX: &str = ".txt";

/// Guarantee a `.txt` suffix: if the last four characters of the file name
/// are not `.txt` (ignoring case), `.txt` is appended.
pub fn ensure_txt_extension(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let chars: Vec<char> = name.chars().collect();
    let has_suffix = chars.len() >= TXT_SUFFIX.len()
        && chars[chars.len() - TXT_SUFFIX.len()..]
            .iter()
            .collect::<String>()
            .eq_ignore_ascii_case(TXT_SUFFIX);

    if has_suffix {
        path.to_path_buf()
    } else {
        let mut raw = path.as_os_str().to_owned();
        raw.push(TXT_SUFFIX);
        PathBuf::from(raw)
    }
}

/// Read a whole file as text. Windows line endings are folded to `\n`.
pub fn read_text(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|e| NotepadError::io(path, e))?;
    if text.contains("\r\n") {
        Ok(text.replace("\r\n", "\n"))
    } else {
        Ok(text)
    }
}

/// Write `text` verbatim, creating the file if it does not exist and
/// truncating it otherwise.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| NotepadError::io(path, e))?;
    file.write_all(text.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| NotepadError::io(path, e))
}
