//! Menu and keyboard commands.
//!
//! Every menu entry and shortcut maps to a [`Command`]. Commands run
//! synchronously against a [`Session`] through [`dispatch`]; anything that
//! needs the window (a picker, a dialog, a notice) comes back as an
//! [`Effect`] for the caller to carry out.

use std::path::{Path, PathBuf};

use egui::{Key, KeyboardShortcut, Modifiers};

use crate::document::Document;
use crate::error::Result;
use crate::settings::{PresentationSettings, TextDirection};

/// Notice shown after a successful save.
pub const SAVED_NOTICE: &str = "Saved File!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    New,
    Open,
    Save,
    SaveAs,
    Exit,
    Undo,
    Redo,
    ToggleWordWrap,
    AlignLeft,
    AlignRight,
    Font,
    ZoomIn,
    ZoomOut,
    ZoomRestore,
}

impl Command {
    /// Order in which shortcuts are checked. Shifted chords come before
    /// their unshifted twins since egui matches shift loosely.
    pub const SHORTCUTS: [Command; 9] = [
        Command::SaveAs,
        Command::Redo,
        Command::New,
        Command::Open,
        Command::Save,
        Command::Undo,
        Command::ZoomIn,
        Command::ZoomOut,
        Command::ZoomRestore,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Command::New => "New",
            Command::Open => "Open",
            Command::Save => "Save",
            Command::SaveAs => "Save As",
            Command::Exit => "Exit",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::ToggleWordWrap => "Word Wrap",
            Command::AlignLeft => "Left",
            Command::AlignRight => "Right",
            Command::Font => "Font...",
            Command::ZoomIn => "Zoom In",
            Command::ZoomOut => "Zoom Out",
            Command::ZoomRestore => "Restore Default Zoom",
        }
    }

    /// Primary shortcut, shown next to the menu entry.
    pub fn shortcut(self) -> Option<KeyboardShortcut> {
        let cmd = Modifiers::COMMAND;
        let cmd_shift = Modifiers::COMMAND | Modifiers::SHIFT;
        let key = match self {
            Command::New => (cmd, Key::N),
            Command::Open => (cmd, Key::O),
            Command::Save => (cmd, Key::S),
            Command::SaveAs => (cmd_shift, Key::S),
            Command::Undo => (cmd, Key::Z),
            Command::Redo => (cmd_shift, Key::Z),
            Command::ZoomIn => (cmd, Key::Plus),
            Command::ZoomOut => (cmd, Key::Minus),
            Command::ZoomRestore => (cmd, Key::Num0),
            _ => return None,
        };
        Some(KeyboardShortcut::new(key.0, key.1))
    }

    /// Extra chords that trigger the command without being displayed.
    pub fn alternate_shortcut(self) -> Option<KeyboardShortcut> {
        match self {
            Command::ZoomIn => Some(KeyboardShortcut::new(Modifiers::COMMAND, Key::Equals)),
            _ => None,
        }
    }
}

/// What the window has to do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show the file picker for Open.
    PromptOpen,
    /// Show the file picker for Save As.
    PromptSaveAs,
    OpenFontDialog,
    Close,
    /// The buffer changed underneath the text area; put the caret here.
    TextReplaced { caret: Option<usize> },
    /// A file became the document's file.
    Opened(PathBuf),
    /// The document was written back to its own file.
    Saved(PathBuf),
    /// The document was written to a newly chosen file.
    SavedAs(PathBuf),
    SettingsChanged,
    /// Something failed; tell the user.
    Failed(String),
}

/// The state commands operate on: one document and its presentation.
#[derive(Debug, Default)]
pub struct Session {
    pub document: Document,
    pub settings: PresentationSettings,
}

impl Session {
    pub fn new(settings: PresentationSettings) -> Self {
        Self { document: Document::new(), settings }
    }

    pub fn title(&self) -> String {
        self.document.title()
    }

    pub fn new_document(&mut self) {
        self.document.clear();
    }

    /// Replace the document with the contents of `path`. The current
    /// document is kept if the file cannot be read.
    pub fn open_path(&mut self, path: &Path) -> Result<()> {
        self.document = Document::open(path)?;
        Ok(())
    }

    pub fn save_as_path(&mut self, path: &Path) -> Result<PathBuf> {
        self.document.save_as(path)
    }

    /// Finish an Open once the picker returned `path`.
    pub fn complete_open(&mut self, path: &Path) -> Effect {
        match self.open_path(path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "opened");
                Effect::Opened(path.to_path_buf())
            }
            Err(e) => {
                tracing::warn!(error = %e, "open failed");
                Effect::Failed(e.to_string())
            }
        }
    }

    /// Finish a Save As once the picker returned `path`.
    pub fn complete_save_as(&mut self, path: &Path) -> Effect {
        match self.save_as_path(path) {
            Ok(written) => {
                tracing::info!(path = %written.display(), "saved");
                Effect::SavedAs(written)
            }
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                Effect::Failed(e.to_string())
            }
        }
    }
}

type Handler = fn(&mut Session) -> Effect;

fn handler(command: Command) -> Handler {
    match command {
        Command::New => new_file,
        Command::Open => |_| Effect::PromptOpen,
        Command::Save => save,
        Command::SaveAs => |_| Effect::PromptSaveAs,
        Command::Exit => |_| Effect::Close,
        Command::Undo => undo,
        Command::Redo => redo,
        Command::ToggleWordWrap => toggle_word_wrap,
        Command::AlignLeft => |s| set_direction(s, TextDirection::Ltr),
        Command::AlignRight => |s| set_direction(s, TextDirection::Rtl),
        Command::Font => |_| Effect::OpenFontDialog,
        Command::ZoomIn => |s| zoom(s, PresentationSettings::zoom_in),
        Command::ZoomOut => |s| zoom(s, PresentationSettings::zoom_out),
        Command::ZoomRestore => |s| zoom(s, PresentationSettings::restore_default_zoom),
    }
}

/// Run `command` against `session`.
pub fn dispatch(command: Command, session: &mut Session) -> Effect {
    tracing::debug!(?command, "dispatch");
    handler(command)(session)
}

fn new_file(session: &mut Session) -> Effect {
    session.new_document();
    Effect::TextReplaced { caret: Some(0) }
}

fn save(session: &mut Session) -> Effect {
    match session.document.save() {
        Ok(true) => {
            let path = session.document.path().map(Path::to_path_buf).unwrap_or_default();
            tracing::info!(path = %path.display(), "saved");
            Effect::Saved(path)
        }
        Ok(false) => Effect::PromptSaveAs,
        Err(e) => {
            tracing::warn!(error = %e, "save failed");
            Effect::Failed(e.to_string())
        }
    }
}

fn undo(session: &mut Session) -> Effect {
    match session.document.undo() {
        Some(caret) => Effect::TextReplaced { caret: Some(caret) },
        None => Effect::None,
    }
}

fn redo(session: &mut Session) -> Effect {
    match session.document.redo() {
        Some(caret) => Effect::TextReplaced { caret: Some(caret) },
        None => Effect::None,
    }
}

fn toggle_word_wrap(session: &mut Session) -> Effect {
    session.settings.word_wrap = !session.settings.word_wrap;
    Effect::SettingsChanged
}

fn set_direction(session: &mut Session, direction: TextDirection) -> Effect {
    session.settings.direction = direction;
    Effect::SettingsChanged
}

fn zoom(session: &mut Session, change: fn(&mut PresentationSettings)) -> Effect {
    change(&mut session.settings);
    Effect::SettingsChanged
}
