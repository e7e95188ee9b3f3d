//! Presentation settings: one font, colour, wrap mode and direction for
//! the whole buffer.

use serde::{Deserialize, Serialize};

/// Size that "Restore Default Zoom" returns to.
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// Family used until the user picks one; resolves to the system's
/// generic monospace face.
pub const DEFAULT_FONT_FAMILY: &str = "Monospace";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub const ALL: [FontStyle; 4] = [FontStyle::Plain, FontStyle::Bold, FontStyle::Italic, FontStyle::BoldItalic];

    pub fn label(self) -> &'static str {
        match self {
            FontStyle::Plain => "Plain",
            FontStyle::Bold => "Bold",
            FontStyle::Italic => "Italic",
            FontStyle::BoldItalic => "Bold Italic",
        }
    }

    /// Parse a style label. Anything unrecognised means bold italic.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Plain" => FontStyle::Plain,
            "Bold" => FontStyle::Bold,
            "Italic" => FontStyle::Italic,
            _ => FontStyle::BoldItalic,
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, FontStyle::Italic | FontStyle::BoldItalic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }

    pub fn from_color32(color: egui::Color32) -> Self {
        Self { r: color.r(), g: color.g(), b: color.b() }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationSettings {
    pub font_family: String,
    pub style: FontStyle,
    pub size: u32,
    pub color: Rgb,
    pub word_wrap: bool,
    pub direction: TextDirection,
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            style: FontStyle::Plain,
            size: DEFAULT_FONT_SIZE,
            color: Rgb::BLACK,
            word_wrap: false,
            direction: TextDirection::Ltr,
        }
    }
}

impl PresentationSettings {
    pub fn zoom_in(&mut self) {
        self.size = self.size.saturating_add(1);
    }

    /// Shrink by one point; the size never drops below 1.
    pub fn zoom_out(&mut self) {
        self.size = self.size.saturating_sub(1).max(1);
    }

    pub fn restore_default_zoom(&mut self) {
        self.size = DEFAULT_FONT_SIZE;
    }

    /// Settings loaded from disk may carry a zero size.
    pub fn sanitized(mut self) -> Self {
        if self.size == 0 {
            self.size = DEFAULT_FONT_SIZE;
        }
        if self.font_family.trim().is_empty() {
            self.font_family = DEFAULT_FONT_FAMILY.to_string();
        }
        self
    }
}
