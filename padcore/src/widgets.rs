//! Custom widgets: black and white, with a blue hover highlight on lists

use egui::{Color32, Response, RichText, Ui, Widget};
use crate::theme::SlowColors;

/// Status bar: white bg, 1px black top border
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(SlowColors::WHITE)
        .stroke(egui::Stroke::new(1.0, SlowColors::BLACK))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(text);
        });
}

/// Paint the row background and return the text colour to draw on top.
fn paint_row_background(ui: &Ui, rect: egui::Rect, lit: bool) -> Color32 {
    let painter = ui.painter();
    if lit {
        painter.rect_filled(rect, 0.0, SlowColors::HIGHLIGHT);
        SlowColors::WHITE
    } else {
        painter.rect_filled(rect, 0.0, SlowColors::WHITE);
        SlowColors::BLACK
    }
}

/// File list item for open/save dialogs.
pub struct FileListItem<'a> {
    name: &'a str,
    is_directory: bool,
    selected: bool,
}

impl<'a> FileListItem<'a> {
    pub fn new(name: &'a str, is_directory: bool) -> Self {
        Self { name, is_directory, selected: false }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl<'a> Widget for FileListItem<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let height = 20.0;
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), height),
            egui::Sense::click(),
        );

        if ui.is_rect_visible(rect) {
            let text_color = paint_row_background(ui, rect, self.selected || response.hovered());
            let painter = ui.painter();

            let icon = if self.is_directory { "📁" } else { "📄" };
            let icon_rect = egui::Rect::from_min_size(
                rect.min + egui::vec2(4.0, 0.0),
                egui::vec2(16.0, height),
            );
            painter.text(
                icon_rect.center(),
                egui::Align2::CENTER_CENTER,
                icon,
                egui::FontId::proportional(12.0),
                text_color,
            );

            painter.text(
                egui::pos2(rect.min.x + 24.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                self.name,
                egui::FontId::proportional(12.0),
                text_color,
            );
        }

        response
    }
}

/// One clickable row of a chooser list. Highlighted while the pointer is
/// over it; the caller decides what a click selects.
pub struct ListEntry {
    text: RichText,
}

impl ListEntry {
    pub fn new(text: impl Into<RichText>) -> Self {
        Self { text: text.into() }
    }
}

impl Widget for ListEntry {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.scope(|ui| {
            let widgets = &mut ui.visuals_mut().widgets;
            for state in [&mut widgets.inactive, &mut widgets.active] {
                state.weak_bg_fill = SlowColors::WHITE;
                state.bg_stroke = egui::Stroke::NONE;
                state.fg_stroke = egui::Stroke::new(1.0, SlowColors::BLACK);
            }
            widgets.hovered.weak_bg_fill = SlowColors::HIGHLIGHT;
            widgets.hovered.bg_stroke = egui::Stroke::NONE;
            widgets.hovered.fg_stroke = egui::Stroke::new(1.0, SlowColors::WHITE);

            ui.with_layout(egui::Layout::top_down_justified(egui::Align::LEFT), |ui| {
                ui.add(egui::Button::new(self.text))
            })
            .inner
        })
        .inner
        .on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}

/// A small filled square with a black outline showing a colour.
pub struct ColorSwatch {
    color: Color32,
    size: f32,
}

impl ColorSwatch {
    pub fn new(color: Color32) -> Self {
        Self { color, size: 23.0 }
    }
}

impl Widget for ColorSwatch {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(self.size, self.size), egui::Sense::hover());
        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, self.color);
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, SlowColors::BLACK));
        }
        response
    }
}
