use egui::Color32;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::serializer::attribute;

/// Swatch colors offered when no palette has been configured
pub const DEFAULT_COLORS: [&str; 11] = [
    "#000000", "#ffffff", "#fd7f6f", "#7eb0d5", "#b2e061", "#bd7ebe", "#ffb55a", "#ffee65",
    "#beb9db", "#fdcce5", "#8bd3c7",
];

pub const DEFAULT_PEN_COUNT: usize = 6;

/// User-editable palette: swatch colors as `#RRGGBB` text and pen widths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub colors: Vec<String>,
    pub pen_widths: Vec<f32>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| (*c).to_owned()).collect(),
            pen_widths: (0..DEFAULT_PEN_COUNT).map(|i| i as f32 * 4.0 + 1.0).collect(),
        }
    }
}

impl PaletteConfig {
    /// Parse the configuration into usable swatches, dropping invalid entries
    pub fn resolve(&self) -> Palette {
        let colors = self
            .colors
            .iter()
            .filter_map(|text| {
                let color = attribute::parse_color(text);
                if color.is_none() {
                    warn!("Ignoring invalid palette color {:?}", text);
                }
                color
            })
            .collect();

        let pen_widths = self
            .pen_widths
            .iter()
            .copied()
            .filter(|width| {
                let valid = width.is_finite() && *width > 0.0;
                if !valid {
                    warn!("Ignoring invalid pen width {}", width);
                }
                valid
            })
            .collect();

        Palette { colors, pen_widths }
    }
}

/// Swatches ready to draw with
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub colors: Vec<Color32>,
    pub pen_widths: Vec<f32>,
}

/// The pen applied to newly started strokes.
///
/// Owned by the session and handed by reference to both the swatch panel,
/// which writes it, and the drawing controller, which reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSettings {
    current_color: Color32,
    current_width: f32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            current_color: Color32::BLACK,
            current_width: 1.0,
        }
    }
}

impl ToolSettings {
    /// Start with the first swatch of each kind
    pub fn from_palette(palette: &Palette) -> Self {
        let defaults = Self::default();
        Self {
            current_color: palette.colors.first().copied().unwrap_or(defaults.current_color),
            current_width: palette.pen_widths.first().copied().unwrap_or(defaults.current_width),
        }
    }

    pub fn current_color(&self) -> Color32 {
        self.current_color
    }

    pub fn current_width(&self) -> f32 {
        self.current_width
    }

    pub fn set_color(&mut self, color: Color32) {
        self.current_color = color;
    }

    pub fn set_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.current_width = width;
        } else {
            warn!("Ignoring invalid pen width {}", width);
        }
    }

    /// Pick the palette color at `index`. Returns false if there is none.
    pub fn select_color(&mut self, palette: &Palette, index: usize) -> bool {
        match palette.colors.get(index) {
            Some(color) => {
                self.current_color = *color;
                true
            }
            None => false,
        }
    }

    /// Pick the pen width at `index`. Returns false if there is none.
    pub fn select_pen(&mut self, palette: &Palette, index: usize) -> bool {
        match palette.pen_widths.get(index) {
            Some(width) => {
                self.current_width = *width;
                true
            }
            None => false,
        }
    }
}
