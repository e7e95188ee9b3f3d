//! Font selection dialog.
//!
//! A modal window polled once per frame. It starts from the current
//! presentation settings, lets the user pick family, style, size and
//! colour, and yields a [`DialogOutcome`] exactly once when it closes.

use egui::{Align2, Color32, Context, RichText};
use padcore::widgets::{ColorSwatch, ListEntry};

use crate::error::{NotepadError, Result};
use crate::fonts::FontCatalog;
use crate::settings::{FontStyle, PresentationSettings, Rgb};

const PREVIEW_TEXT: &str = "AaBbCcXxYyZz 0123";
const LIST_HEIGHT: f32 = 140.0;

/// Sizes offered in the size list.
pub fn size_choices() -> impl Iterator<Item = u32> {
    (8..=72).step_by(2)
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    Apply(PresentationSettings),
    Cancel,
}

/// The dialog's pending choices, as the user sees them in its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSelection {
    pub family: String,
    pub style_label: String,
    pub size_text: String,
    pub color: Rgb,
}

impl FontSelection {
    pub fn from_settings(settings: &PresentationSettings) -> Self {
        Self {
            family: settings.font_family.clone(),
            style_label: settings.style.label().to_string(),
            size_text: settings.size.to_string(),
            color: settings.color,
        }
    }

    fn parse_size(&self) -> Result<u32> {
        match self.size_text.trim().parse::<u32>() {
            Ok(size) if size > 0 => Ok(size),
            _ => Err(NotepadError::Parse { field: "size", value: self.size_text.clone() }),
        }
    }

    /// Build the settings this selection describes. Wrap mode and text
    /// direction are carried over from `base`.
    pub fn apply(&self, base: &PresentationSettings) -> Result<PresentationSettings> {
        let size = self.parse_size()?;
        let family = self.family.trim();
        Ok(PresentationSettings {
            font_family: if family.is_empty() { base.font_family.clone() } else { family.to_string() },
            style: FontStyle::from_label(self.style_label.trim()),
            size,
            color: self.color,
            word_wrap: base.word_wrap,
            direction: base.direction,
        })
    }
}

fn styled(text: &str, style: FontStyle) -> RichText {
    let mut rich = RichText::new(text);
    if style.is_bold() {
        rich = rich.strong();
    }
    if style.is_italic() {
        rich = rich.italics();
    }
    rich
}

pub struct FontDialog {
    base: PresentationSettings,
    selection: FontSelection,
    /// Colour being edited in the "Choose Color" window, if it is open.
    picking: Option<Color32>,
    error: Option<String>,
}

impl FontDialog {
    pub fn new(settings: &PresentationSettings) -> Self {
        Self {
            base: settings.clone(),
            selection: FontSelection::from_settings(settings),
            picking: None,
            error: None,
        }
    }

    pub fn show(&mut self, ctx: &Context, catalog: &FontCatalog) -> Option<DialogOutcome> {
        let mut outcome = None;
        let mut open = true;

        egui::Window::new("Font")
            .collapsible(false)
            .resizable(false)
            .default_width(460.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.add_enabled_ui(self.picking.is_none(), |ui| {
                    ui.columns(3, |cols| {
                        family_column(&mut cols[0], &mut self.selection.family, catalog.families());
                        style_column(&mut cols[1], &mut self.selection.style_label);
                        size_column(&mut cols[2], &mut self.selection.size_text);
                    });

                    ui.separator();
                    self.preview(ui);

                    ui.horizontal(|ui| {
                        ui.label("Color:");
                        ui.add(ColorSwatch::new(self.selection.color.to_color32()));
                        if ui.button("Choose Color").clicked() {
                            self.picking = Some(self.selection.color.to_color32());
                        }
                    });

                    if let Some(err) = &self.error {
                        ui.label(err.as_str());
                    }

                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("Apply").clicked() {
                            match self.selection.apply(&self.base) {
                                Ok(settings) => outcome = Some(DialogOutcome::Apply(settings)),
                                Err(e) => {
                                    tracing::warn!(error = %e, "font selection rejected");
                                    self.error = Some(e.to_string());
                                }
                            }
                        }
                        if ui.button("Cancel").clicked() {
                            outcome = Some(DialogOutcome::Cancel);
                        }
                    });
                });
            });

        self.show_color_picker(ctx);

        if !open && outcome.is_none() {
            outcome = Some(DialogOutcome::Cancel);
        }
        outcome
    }

    fn preview(&self, ui: &mut egui::Ui) {
        let size = self.selection.parse_size().unwrap_or(self.base.size);
        let style = FontStyle::from_label(self.selection.style_label.trim());
        let text = styled(PREVIEW_TEXT, style)
            .size(size as f32)
            .color(self.selection.color.to_color32());

        egui::ScrollArea::horizontal()
            .id_source("font_preview")
            .max_height(80.0)
            .show(ui, |ui| {
                ui.label(text);
            });
    }

    fn show_color_picker(&mut self, ctx: &Context) {
        let Some(mut color) = self.picking else {
            return;
        };
        let mut done = None;

        egui::Window::new("Choose Color")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::color_picker::color_picker_color32(ui, &mut color, egui::color_picker::Alpha::Opaque);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        done = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        done = Some(false);
                    }
                });
            });

        match done {
            Some(true) => {
                self.selection.color = Rgb::from_color32(color);
                self.picking = None;
            }
            Some(false) => self.picking = None,
            None => self.picking = Some(color),
        }
    }
}

fn family_column(ui: &mut egui::Ui, family: &mut String, families: &[String]) {
    ui.label("Font:");
    ui.text_edit_singleline(family);
    let row_height = ui.spacing().interact_size.y + ui.spacing().item_spacing.y;
    egui::ScrollArea::vertical()
        .id_source("font_families")
        .max_height(LIST_HEIGHT)
        .show_rows(ui, row_height, families.len(), |ui, range| {
            for name in &families[range] {
                if ui.add(ListEntry::new(name.as_str())).clicked() {
                    *family = name.clone();
                }
            }
        });
}

fn style_column(ui: &mut egui::Ui, style_label: &mut String) {
    ui.label("Style:");
    ui.text_edit_singleline(style_label);
    egui::ScrollArea::vertical()
        .id_source("font_styles")
        .max_height(LIST_HEIGHT)
        .show(ui, |ui| {
            for style in FontStyle::ALL {
                if ui.add(ListEntry::new(styled(style.label(), style))).clicked() {
                    *style_label = style.label().to_string();
                }
            }
        });
}

fn size_column(ui: &mut egui::Ui, size_text: &mut String) {
    ui.label("Size:");
    ui.text_edit_singleline(size_text);
    egui::ScrollArea::vertical()
        .id_source("font_sizes")
        .max_height(LIST_HEIGHT)
        .show(ui, |ui| {
            for size in size_choices() {
                if ui.add(ListEntry::new(size.to_string())).clicked() {
                    *size_text = size.to_string();
                }
            }
        });
}
