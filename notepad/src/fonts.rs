//! System font discovery and installation into egui.
//!
//! font-kit enumerates the families the OS knows about (fontconfig on
//! Linux, Core Text on macOS, DirectWrite on Windows). The chosen
//! family/style is loaded once and registered with egui as a named font
//! family backed by egui's bundled faces as fallback.
//!
//! egui rebuilds its font atlas at the start of the frame after
//! `set_fonts`, so a freshly installed family only becomes the active one
//! on the next [`FontCatalog::begin_frame`].

use egui::{FontData, FontDefinitions, FontFamily, FontId};
use font_kit::family_name::FamilyName;
use font_kit::handle::Handle;
use font_kit::properties::{Properties, Style, Weight};
use font_kit::source::SystemSource;

use crate::error::{NotepadError, Result};
use crate::settings::{FontStyle, PresentationSettings};

/// Generic names offered at the top of the family list.
const GENERIC_FAMILIES: [&str; 3] = ["Monospace", "Sans Serif", "Serif"];

fn family_names(family: &str) -> Vec<FamilyName> {
    match family {
        "Monospace" | "Monospaced" => vec![FamilyName::Monospace],
        "Sans Serif" | "SansSerif" => vec![FamilyName::SansSerif],
        "Serif" => vec![FamilyName::Serif],
        name => vec![FamilyName::Title(name.to_string())],
    }
}

fn properties(style: FontStyle) -> Properties {
    let mut props = Properties::new();
    props.weight(if style.is_bold() { Weight::BOLD } else { Weight::NORMAL });
    props.style(if style.is_italic() { Style::Italic } else { Style::Normal });
    props
}

/// Built-in egui family used when a system family cannot be loaded.
fn builtin_family(family: &str) -> FontFamily {
    match family_names(family).first() {
        Some(FamilyName::Monospace) => FontFamily::Monospace,
        _ => FontFamily::Proportional,
    }
}

fn merge_families(system: Vec<String>) -> Vec<String> {
    let mut families: Vec<String> = system
        .into_iter()
        .filter(|f| !GENERIC_FAMILIES.contains(&f.as_str()))
        .collect();
    families.sort_by_key(|f| f.to_lowercase());
    families.dedup();

    let mut all: Vec<String> = GENERIC_FAMILIES.iter().map(|s| s.to_string()).collect();
    all.extend(families);
    all
}

pub struct FontCatalog {
    source: SystemSource,
    families: Vec<String>,
    base: FontDefinitions,
    installed: Option<(String, FontStyle)>,
    pending: Option<FontFamily>,
    active: FontFamily,
}

impl FontCatalog {
    pub fn new() -> Self {
        let source = SystemSource::new();
        let system = match source.all_families() {
            Ok(families) => families,
            Err(e) => {
                tracing::warn!(error = ?e, "cannot enumerate system fonts");
                Vec::new()
            }
        };
        let families = merge_families(system);
        tracing::info!(count = families.len(), "font families discovered");

        Self {
            source,
            families,
            base: FontDefinitions::default(),
            installed: None,
            pending: None,
            active: FontFamily::Monospace,
        }
    }

    /// Every family name the font dialog offers.
    pub fn families(&self) -> &[String] {
        &self.families
    }

    fn load(&self, family: &str, style: FontStyle) -> Result<FontData> {
        let handle = self
            .source
            .select_best_match(&family_names(family), &properties(style))
            .map_err(|e| NotepadError::Font(format!("{family}: {e:?}")))?;

        let (bytes, index) = match handle {
            Handle::Path { path, font_index } => {
                let bytes = std::fs::read(&path).map_err(|e| NotepadError::io(&path, e))?;
                (bytes, font_index)
            }
            Handle::Memory { bytes, font_index } => ((*bytes).clone(), font_index),
        };

        let mut data = FontData::from_owned(bytes);
        data.index = index;
        Ok(data)
    }

    /// Make `settings`' family and style the text area font. Loading
    /// failures fall back to egui's bundled faces.
    pub fn apply(&mut self, ctx: &egui::Context, settings: &PresentationSettings) {
        let key = (settings.font_family.clone(), settings.style);
        if self.installed.as_ref() == Some(&key) {
            return;
        }

        match self.load(&settings.font_family, settings.style) {
            Ok(data) => {
                let name = format!("notepad:{}:{}", settings.font_family, settings.style.label());
                let mut fonts = self.base.clone();
                fonts.font_data.insert(name.clone(), data);

                let mut chain = vec![name.clone()];
                chain.extend(
                    fonts
                        .families
                        .get(&FontFamily::Proportional)
                        .cloned()
                        .unwrap_or_default(),
                );
                let family = FontFamily::Name(name.into());
                fonts.families.insert(family.clone(), chain);

                ctx.set_fonts(fonts);
                self.pending = Some(family);
                tracing::info!(family = %settings.font_family, style = settings.style.label(), "font installed");
            }
            Err(e) => {
                tracing::warn!(error = %e, "falling back to bundled font");
                self.pending = None;
                self.active = builtin_family(&settings.font_family);
            }
        }
        self.installed = Some(key);
    }

    /// Promote a font installed last frame. Call before any text is laid out.
    pub fn begin_frame(&mut self) {
        if let Some(family) = self.pending.take() {
            self.active = family;
        }
    }

    pub fn font_id(&self, size: u32) -> FontId {
        FontId::new(size as f32, self.active.clone())
    }
}
