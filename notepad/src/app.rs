//! Main window: menus, text area, status bar, and the modal windows
//! (file picker, font dialog, notices) that sit on top of it.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use egui::{Align2, Context, Galley, Id, Rect, Ui};
use padcore::storage::FileBrowser;
use padcore::theme::{menu_bar, SlowColors};
use padcore::widgets::{status_bar, FileListItem};

use crate::commands::{self, Command, Effect, Session, SAVED_NOTICE};
use crate::font_dialog::{DialogOutcome, FontDialog};
use crate::fonts::FontCatalog;
use crate::preferences::Preferences;
use crate::settings::TextDirection;

const TEXT_ID: &str = "notepad_text";

/// Where a name typed into the Save As field lands. Trailing separators
/// are dropped; names that are empty or only point at a folder are refused.
fn save_target(dir: &Path, typed: &str) -> Option<PathBuf> {
    let name = typed.trim().trim_end_matches(std::path::is_separator);
    match name {
        "" | "." | ".." => None,
        name => Some(dir.join(name)),
    }
}

/// Shift the rows of a left-aligned galley so each ends at `width`, or at
/// the widest row when that is wider.
fn align_rows_right(galley: &mut Galley, width: f32) {
    let widest = galley.rows.iter().map(|r| r.rect.width()).fold(0.0, f32::max);
    let target = if width.is_finite() { width.max(widest) } else { widest };

    for row in &mut galley.rows {
        let dx = target - row.rect.right();
        if dx <= 0.0 {
            continue;
        }
        let delta = egui::vec2(dx, 0.0);
        row.rect = row.rect.translate(delta);
        for glyph in &mut row.glyphs {
            glyph.pos.x += dx;
        }
        row.visuals.mesh.translate(delta);
        row.visuals.mesh_bounds = row.visuals.mesh_bounds.translate(delta);
    }

    galley.rect.max.x = galley.rect.max.x.max(target);
    galley.mesh_bounds = galley
        .rows
        .iter()
        .fold(Rect::NOTHING, |bounds, row| bounds.union(row.visuals.mesh_bounds));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickerMode {
    Open,
    SaveAs,
}

enum PickerResult {
    Chosen(PathBuf),
    Cancelled,
}

/// In-app file picker for Open and Save As, showing folders and `.txt`
/// files.
struct FilePicker {
    mode: PickerMode,
    browser: FileBrowser,
    file_name: String,
}

impl FilePicker {
    fn new(mode: PickerMode, root: PathBuf, file_name: String) -> Self {
        Self {
            mode,
            browser: FileBrowser::new(root).with_filter(vec!["txt".to_string()]),
            file_name,
        }
    }

    fn show(&mut self, ctx: &Context) -> Option<PickerResult> {
        let title = match self.mode {
            PickerMode::Open => "Open",
            PickerMode::SaveAs => "Save As",
        };
        let mut result = None;
        let mut open = true;

        egui::Window::new(title)
            .id(Id::new("file_picker"))
            .collapsible(false)
            .resizable(false)
            .default_width(360.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Location:");
                    ui.label(self.browser.current_dir.to_string_lossy().to_string());
                });
                ui.separator();

                let mut navigate = None;
                egui::ScrollArea::vertical()
                    .max_height(240.0)
                    .show(ui, |ui| {
                        for (idx, entry) in self.browser.entries.iter().enumerate() {
                            let selected = self.browser.selected_index == Some(idx);
                            let response = ui.add(FileListItem::new(&entry.name, entry.is_directory).selected(selected));

                            if response.clicked() {
                                self.browser.selected_index = Some(idx);
                                if !entry.is_directory && self.mode == PickerMode::SaveAs {
                                    self.file_name = entry.name.clone();
                                }
                            }
                            if response.double_clicked() {
                                if entry.is_directory {
                                    navigate = Some(entry.path.clone());
                                } else if self.mode == PickerMode::Open {
                                    result = Some(PickerResult::Chosen(entry.path.clone()));
                                }
                            }
                        }
                    });
                if let Some(dir) = navigate {
                    self.browser.navigate_to(dir);
                }

                if self.mode == PickerMode::SaveAs {
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label("File name:");
                        ui.text_edit_singleline(&mut self.file_name);
                    });
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        result = Some(PickerResult::Cancelled);
                    }
                    if ui.button(title).clicked() {
                        if let Some(path) = self.confirmed_path() {
                            result = Some(PickerResult::Chosen(path));
                        }
                    }
                });
            });

        if !open {
            result = Some(PickerResult::Cancelled);
        }
        result
    }

    fn confirmed_path(&self) -> Option<PathBuf> {
        match self.mode {
            PickerMode::Open => self
                .browser
                .selected_entry()
                .filter(|e| !e.is_directory)
                .map(|e| e.path.clone()),
            PickerMode::SaveAs => save_target(&self.browser.save_directory(), &self.file_name),
        }
    }
}

pub struct NotepadApp {
    session: Session,
    /// Contents of the text area. Diffed against the document after every
    /// change so edits land in the history.
    buffer: String,
    fonts: FontCatalog,
    prefs: Preferences,
    prefs_path: PathBuf,
    picker: Option<FilePicker>,
    font_dialog: Option<FontDialog>,
    notices: VecDeque<String>,
    pending_caret: Option<usize>,
    shown_title: String,
}

impl NotepadApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.options_mut(|o| o.zoom_with_keyboard = false);
        let prefs_path = Preferences::default_path();
        let prefs = Preferences::load_or_default(&prefs_path);
        tracing::info!(path = %prefs_path.display(), "preferences loaded");
        Self::with_preferences(prefs, prefs_path)
    }

    fn with_preferences(prefs: Preferences, prefs_path: PathBuf) -> Self {
        Self {
            session: Session::new(prefs.settings.clone()),
            buffer: String::new(),
            fonts: FontCatalog::new(),
            prefs,
            prefs_path,
            picker: None,
            font_dialog: None,
            notices: VecDeque::new(),
            pending_caret: Some(0),
            shown_title: String::new(),
        }
    }

    fn is_blocked(&self) -> bool {
        self.picker.is_some() || self.font_dialog.is_some() || !self.notices.is_empty()
    }

    fn run(&mut self, ctx: &Context, command: Command) {
        let effect = commands::dispatch(command, &mut self.session);
        self.handle_effect(ctx, effect);
    }

    fn handle_effect(&mut self, ctx: &Context, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::PromptOpen => {
                self.picker = Some(FilePicker::new(PickerMode::Open, self.prefs.picker_root(), String::new()));
            }
            Effect::PromptSaveAs => {
                let root = self
                    .session
                    .document
                    .path()
                    .and_then(|p| p.parent())
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| self.prefs.picker_root());
                let name = self
                    .session
                    .document
                    .path()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.picker = Some(FilePicker::new(PickerMode::SaveAs, root, name));
            }
            Effect::OpenFontDialog => {
                self.font_dialog = Some(FontDialog::new(&self.session.settings));
            }
            Effect::Close => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            Effect::TextReplaced { caret } => {
                self.buffer = self.session.document.text().to_string();
                self.pending_caret = caret;
            }
            Effect::Opened(path) => {
                self.buffer = self.session.document.text().to_string();
                self.pending_caret = Some(0);
                self.prefs.recent.add(path);
                self.save_preferences();
            }
            Effect::Saved(path) => {
                self.prefs.recent.add(path);
                self.save_preferences();
            }
            Effect::SavedAs(path) => {
                self.notices.push_back(SAVED_NOTICE.to_string());
                self.prefs.recent.add(path);
                self.save_preferences();
            }
            Effect::SettingsChanged => {
                self.prefs.settings = self.session.settings.clone();
                self.save_preferences();
            }
            Effect::Failed(message) => self.notices.push_back(message),
        }
    }

    fn save_preferences(&self) {
        if let Err(e) = self.prefs.save(&self.prefs_path) {
            tracing::warn!(error = %e, "cannot save preferences");
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let fired = ctx.input_mut(|i| {
            Command::SHORTCUTS.into_iter().find(|command| {
                command.shortcut().is_some_and(|s| i.consume_shortcut(&s))
                    || command.alternate_shortcut().is_some_and(|s| i.consume_shortcut(&s))
            })
        });
        if let Some(command) = fired {
            self.run(ctx, command);
        }
    }

    fn menu_item(&mut self, ui: &mut Ui, command: Command, enabled: bool) {
        let mut button = egui::Button::new(command.label());
        if let Some(shortcut) = command.shortcut() {
            button = button.shortcut_text(ui.ctx().format_shortcut(&shortcut));
        }
        if ui.add_enabled(enabled, button).clicked() {
            ui.close_menu();
            self.run(ui.ctx(), command);
        }
    }

    fn render_menu_bar(&mut self, ui: &mut Ui) {
        menu_bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                self.menu_item(ui, Command::New, true);
                self.menu_item(ui, Command::Open, true);
                self.render_recent_menu(ui);
                ui.separator();
                self.menu_item(ui, Command::Save, true);
                self.menu_item(ui, Command::SaveAs, true);
                ui.separator();
                self.menu_item(ui, Command::Exit, true);
            });
            ui.menu_button("Edit", |ui| {
                let (undo, redo) = (self.session.document.can_undo(), self.session.document.can_redo());
                self.menu_item(ui, Command::Undo, undo);
                self.menu_item(ui, Command::Redo, redo);
            });
            ui.menu_button("Format", |ui| {
                let mut wrap = self.session.settings.word_wrap;
                if ui.checkbox(&mut wrap, Command::ToggleWordWrap.label()).clicked() {
                    ui.close_menu();
                    self.run(ui.ctx(), Command::ToggleWordWrap);
                }
                ui.menu_button("Align Text", |ui| {
                    let rtl = self.session.settings.direction == TextDirection::Rtl;
                    if ui.radio(!rtl, Command::AlignLeft.label()).clicked() {
                        ui.close_menu();
                        self.run(ui.ctx(), Command::AlignLeft);
                    }
                    if ui.radio(rtl, Command::AlignRight.label()).clicked() {
                        ui.close_menu();
                        self.run(ui.ctx(), Command::AlignRight);
                    }
                });
                self.menu_item(ui, Command::Font, true);
            });
            ui.menu_button("View", |ui| {
                ui.menu_button("Zoom", |ui| {
                    self.menu_item(ui, Command::ZoomIn, true);
                    self.menu_item(ui, Command::ZoomOut, true);
                    self.menu_item(ui, Command::ZoomRestore, true);
                });
            });
        });
    }

    fn render_recent_menu(&mut self, ui: &mut Ui) {
        let recent = self.prefs.recent.files.clone();
        ui.add_enabled_ui(!recent.is_empty(), |ui| {
            ui.menu_button("Open Recent", |ui| {
                for path in recent {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    if ui.button(name).on_hover_text(path.display().to_string()).clicked() {
                        ui.close_menu();
                        let effect = self.session.complete_open(&path);
                        if matches!(effect, Effect::Failed(_)) {
                            self.prefs.recent.remove(&path);
                            self.save_preferences();
                        }
                        self.handle_effect(ui.ctx(), effect);
                    }
                }
            });
        });
    }

    fn render_status_bar(&self, ui: &mut Ui) {
        let doc = &self.session.document;
        let mut text = format!(
            "{} lines | {} words, {} chars",
            doc.line_count(),
            doc.word_count(),
            doc.char_count()
        );
        if doc.is_dirty() {
            text.push_str("  |  modified");
        }
        status_bar(ui, &text);
    }

    fn render_text_area(&mut self, ui: &mut Ui) {
        let text_id = Id::new(TEXT_ID);
        let ctx = ui.ctx().clone();

        if let Some(caret) = self.pending_caret.take() {
            let mut state = egui::TextEdit::load_state(&ctx, text_id).unwrap_or_default();
            state.cursor.set_char_range(Some(egui::text::CCursorRange::one(egui::text::CCursor::new(caret))));
            state.store(&ctx, text_id);
            ctx.memory_mut(|m| m.request_focus(text_id));
        }

        let settings = &self.session.settings;
        let font_id = self.fonts.font_id(settings.size);
        let color = settings.color.to_color32();
        let wrap = settings.word_wrap;
        let direction = settings.direction;

        // egui anchors right-aligned rows at x = 0, which a TextEdit paints
        // left of its rect, so rows are laid out left and shifted here.
        let mut layouter = |ui: &Ui, text: &str, wrap_width: f32| {
            let width = if wrap { wrap_width } else { f32::INFINITY };
            let job = egui::text::LayoutJob::simple(text.to_owned(), font_id.clone(), color, width);
            let mut galley = ui.fonts(|f| f.layout_job(job));
            if direction == TextDirection::Rtl {
                align_rows_right(Arc::make_mut(&mut galley), wrap_width);
            }
            galley
        };

        let scroll = if wrap { egui::ScrollArea::vertical() } else { egui::ScrollArea::both() };
        let mut changed = false;
        scroll
            .id_source("text_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let rows = (ui.available_height() / self.session.settings.size.max(1) as f32).max(4.0) as usize;
                let output = egui::TextEdit::multiline(&mut self.buffer)
                    .id(text_id)
                    .frame(false)
                    .lock_focus(true)
                    .desired_width(f32::INFINITY)
                    .desired_rows(rows)
                    .layouter(&mut layouter)
                    .show(ui);
                changed = output.response.changed();
            });

        if changed {
            self.session.document.replace_text(&self.buffer);
        }
    }

    fn render_notice(&mut self, ctx: &Context) {
        let Some(message) = self.notices.front().cloned() else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Notepad")
            .id(Id::new("notice"))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });
        let enter = ctx.input(|i| i.key_pressed(egui::Key::Enter));
        if dismissed || enter {
            self.notices.pop_front();
        }
    }

    fn render_file_picker(&mut self, ctx: &Context) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        let mode = picker.mode;
        match picker.show(ctx) {
            Some(PickerResult::Chosen(path)) => {
                self.picker = None;
                let effect = match mode {
                    PickerMode::Open => self.session.complete_open(&path),
                    PickerMode::SaveAs => self.session.complete_save_as(&path),
                };
                self.handle_effect(ctx, effect);
            }
            Some(PickerResult::Cancelled) => self.picker = None,
            None => {}
        }
    }

    fn render_font_dialog(&mut self, ctx: &Context) {
        let outcome = self.font_dialog.as_mut().and_then(|d| d.show(ctx, &self.fonts));
        match outcome {
            Some(DialogOutcome::Apply(settings)) => {
                self.font_dialog = None;
                tracing::info!(family = %settings.font_family, size = settings.size, "font applied");
                self.session.settings = settings;
                self.handle_effect(ctx, Effect::SettingsChanged);
            }
            Some(DialogOutcome::Cancel) => self.font_dialog = None,
            None => {}
        }
    }

    fn sync_title(&mut self, ctx: &Context) {
        let title = self.session.title();
        if title != self.shown_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.shown_title = title;
        }
    }
}

impl eframe::App for NotepadApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.fonts.begin_frame();
        self.fonts.apply(ctx, &self.session.settings);

        let blocked = self.is_blocked();
        if !blocked {
            self.handle_keys(ctx);
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| self.render_menu_bar(ui));
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(SlowColors::WHITE).inner_margin(egui::Margin::same(4.0)))
            .show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| self.render_text_area(ui));
            });

        self.render_file_picker(ctx);
        self.render_font_dialog(ctx);
        self.render_notice(ctx);
        self.sync_title(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Pos2, RawInput, Shape};
    use tempfile::TempDir;

    fn test_app(dir: &TempDir) -> NotepadApp {
        NotepadApp::with_preferences(Preferences::default(), dir.path().join("preferences.json"))
    }

    fn input(events: Vec<Event>) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(400.0, 500.0))),
            events,
            ..Default::default()
        }
    }

    fn glyph_xs(shape: &Shape, out: &mut Vec<f32>) {
        match shape {
            Shape::Text(text) => {
                for row in &text.galley.rows {
                    for glyph in row.glyphs.iter().filter(|g| !g.chr.is_whitespace()) {
                        out.push(text.pos.x + glyph.pos.x);
                    }
                }
            }
            Shape::Vec(shapes) => shapes.iter().for_each(|s| glyph_xs(s, out)),
            _ => {}
        }
    }

    /// Draw the text area for one frame. Returns the panel's left and
    /// right edges and the x of every visible glyph.
    fn draw_text_area(ctx: &Context, app: &mut NotepadApp, events: Vec<Event>) -> (f32, f32, Vec<f32>) {
        let mut edges = (0.0, 0.0);
        let output = ctx.run(input(events), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                edges = (ui.max_rect().left(), ui.max_rect().right());
                app.render_text_area(ui);
            });
        });
        let mut xs = Vec::new();
        for clipped in &output.shapes {
            glyph_xs(&clipped.shape, &mut xs);
        }
        (edges.0, edges.1, xs)
    }

    fn glyph_span(app: &mut NotepadApp) -> (f32, f32, f32, f32) {
        let ctx = Context::default();
        let mut frame = (0.0, 0.0, Vec::new());
        for _ in 0..3 {
            frame = draw_text_area(&ctx, app, Vec::new());
        }
        let (left, right, xs) = frame;
        assert!(!xs.is_empty(), "no text was drawn");
        let min = xs.iter().copied().fold(f32::INFINITY, f32::min);
        let max = xs.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        (left, right, min, max)
    }

    fn app_with_text(dir: &TempDir, text: &str) -> NotepadApp {
        let mut app = test_app(dir);
        app.session.document.replace_text(text);
        app.buffer = text.to_string();
        app
    }

    #[test]
    fn test_save_target_strips_separators() {
        let dir = Path::new("/docs");
        assert_eq!(save_target(dir, " notes "), Some(PathBuf::from("/docs/notes")));
        assert_eq!(save_target(dir, "notes/"), Some(PathBuf::from("/docs/notes")));
        assert_eq!(save_target(dir, "notes//"), Some(PathBuf::from("/docs/notes")));
        assert_eq!(save_target(dir, "/"), None);
        assert_eq!(save_target(dir, "  "), None);
        assert_eq!(save_target(dir, ".."), None);
    }

    #[test]
    fn test_align_rows_right_ends_every_row_at_width() {
        let ctx = Context::default();
        let mut galley = None;
        let _ = ctx.run(input(Vec::new()), |ctx| {
            let job = egui::text::LayoutJob::simple(
                "hello world\nhi\n".to_owned(),
                egui::FontId::monospace(12.0),
                egui::Color32::BLACK,
                f32::INFINITY,
            );
            galley = Some(ctx.fonts(|f| f.layout_job(job)));
        });
        let mut galley = (*galley.unwrap()).clone();

        align_rows_right(&mut galley, 200.0);
        for row in &galley.rows {
            assert!((row.rect.right() - 200.0).abs() < 0.01);
            assert!(row.glyphs.iter().all(|g| g.pos.x >= 0.0));
        }
        assert!(galley.rect.left() >= 0.0);
        assert!((galley.rect.right() - 200.0).abs() < 0.01);
    }

    #[test]
    fn test_right_aligned_text_stays_inside_text_area() {
        let dir = TempDir::new().unwrap();

        let mut ltr = app_with_text(&dir, "hello world");
        let (left, _, ltr_min, _) = glyph_span(&mut ltr);
        assert!(ltr_min >= left);

        for wrap in [false, true] {
            let mut rtl = app_with_text(&dir, "hello world");
            rtl.session.settings.word_wrap = wrap;
            rtl.run(&Context::default(), Command::AlignRight);

            let (left, right, min, max) = glyph_span(&mut rtl);
            assert!(min >= left, "wrap={wrap}: glyph at {min} left of text area at {left}");
            assert!(max <= right, "wrap={wrap}: glyph at {max} right of text area at {right}");
            assert!(min > ltr_min + 100.0, "wrap={wrap}: text was not moved right");
        }
    }

    #[test]
    fn test_typing_records_history() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        let ctx = Context::default();

        draw_text_area(&ctx, &mut app, Vec::new());
        draw_text_area(&ctx, &mut app, vec![Event::Text("hi".to_string())]);
        draw_text_area(&ctx, &mut app, Vec::new());

        assert_eq!(app.buffer, "hi");
        assert_eq!(app.session.document.text(), "hi");
        assert!(app.session.document.can_undo());
    }

    #[test]
    fn test_undo_and_redo_resync_buffer() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_text(&dir, "abc");
        app.session.document.replace_text("abcdef");
        app.buffer = "abcdef".to_string();
        let ctx = Context::default();

        app.run(&ctx, Command::Undo);
        assert_eq!(app.buffer, "abc");
        assert_eq!(app.pending_caret, Some(3));

        app.run(&ctx, Command::Redo);
        assert_eq!(app.buffer, "abcdef");
        assert_eq!(app.pending_caret, Some(6));
    }

    #[test]
    fn test_new_clears_buffer() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_text(&dir, "scratch");
        app.run(&Context::default(), Command::New);
        assert_eq!(app.buffer, "");
        assert_eq!(app.session.title(), "Notepad");
    }

    #[test]
    fn test_open_resyncs_buffer_and_remembers_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("letter.txt");
        std::fs::write(&path, "Dear reader").unwrap();
        let mut app = app_with_text(&dir, "old");

        let effect = app.session.complete_open(&path);
        app.handle_effect(&Context::default(), effect);
        assert_eq!(app.buffer, "Dear reader");
        assert_eq!(app.prefs.recent.files, vec![path]);
        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_failed_open_shows_notice_and_keeps_buffer() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_text(&dir, "keep me");

        let effect = app.session.complete_open(&dir.path().join("missing.txt"));
        app.handle_effect(&Context::default(), effect);
        assert_eq!(app.notices.len(), 1);
        assert!(app.is_blocked());
        assert_eq!(app.buffer, "keep me");
        assert_eq!(app.session.document.text(), "keep me");
    }

    #[test]
    fn test_only_save_as_confirms() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_text(&dir, "draft");
        let ctx = Context::default();

        let effect = app.session.complete_save_as(&dir.path().join("draft"));
        app.handle_effect(&ctx, effect);
        assert_eq!(app.notices.pop_front().as_deref(), Some(SAVED_NOTICE));

        app.session.document.replace_text("draft two");
        app.run(&ctx, Command::Save);
        assert!(app.notices.is_empty());
        assert_eq!(std::fs::read_to_string(dir.path().join("draft.txt")).unwrap(), "draft two");
    }
}
