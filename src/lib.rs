#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod document;
pub mod error;
pub mod registry;
pub mod renderer;
pub mod serializer;
pub mod stroke;
pub mod tools;

pub use app::{APP_NAME, PaintApp};
pub use command::{Command, CommandHistory};
pub use document::Document;
pub use error::{DocumentError, DocumentResult};
pub use registry::{DocumentTemplate, TemplateRegistry};
pub use serializer::{ParsePolicy, XmlDocument, XmlElement};
pub use stroke::Stroke;
pub use tools::{DrawingController, GestureState, Palette, PaletteConfig, PointerEvent, ToolSettings};
