mod controller;
mod settings;

pub use controller::{DrawingController, GestureState, PointerEvent};
pub use settings::{DEFAULT_COLORS, DEFAULT_PEN_COUNT, Palette, PaletteConfig, ToolSettings};
