use std::path::PathBuf;

use log::{error, info};

use crate::document::Document;
use crate::registry::TemplateRegistry;
use crate::renderer;
use crate::tools::{DrawingController, Palette, PaletteConfig, PointerEvent, ToolSettings};

pub const APP_NAME: &str = "Paint App";

const PALETTE_KEY: &str = "palette";
const SWATCH_SIZE: f32 = 32.0;

/// The open drawing and the controller editing it
struct Session {
    document: Document,
    controller: DrawingController,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilePrompt {
    Open,
    SaveAs,
}

impl FilePrompt {
    fn title(self) -> &'static str {
        match self {
            FilePrompt::Open => "Open",
            FilePrompt::SaveAs => "Save As",
        }
    }
}

/// Actions that replace the open drawing and may need the user to confirm
/// discarding unsaved changes first
#[derive(Debug, Clone)]
enum SessionAction {
    New,
    Open(PathBuf),
    Close,
}

/// Hosts a single drawing at a time in an eframe window
pub struct PaintApp {
    registry: TemplateRegistry,
    session: Option<Session>,
    palette_config: PaletteConfig,
    palette: Palette,
    tools: ToolSettings,
    prompt: Option<FilePrompt>,
    path_input: String,
    pending: Option<SessionAction>,
    status: Option<String>,
    last_title: String,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, initial_path: Option<PathBuf>) -> Self {
        let palette_config: PaletteConfig = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, PALETTE_KEY))
            .unwrap_or_default();
        let palette = palette_config.resolve();
        let tools = ToolSettings::from_palette(&palette);

        let mut app = Self {
            registry: TemplateRegistry::with_defaults(),
            session: None,
            palette_config,
            palette,
            tools,
            prompt: None,
            path_input: String::new(),
            pending: None,
            status: None,
            last_title: String::new(),
        };

        match initial_path {
            Some(path) => app.perform(SessionAction::Open(path)),
            None => app.perform(SessionAction::New),
        }
        app
    }

    fn request(&mut self, action: SessionAction) {
        let unsaved = self
            .session
            .as_ref()
            .is_some_and(|session| session.document.is_modified());
        if unsaved {
            self.pending = Some(action);
        } else {
            self.perform(action);
        }
    }

    fn perform(&mut self, action: SessionAction) {
        match action {
            SessionAction::New => {
                if let Some(template) = self.registry.default_template() {
                    let (document, controller) = template.instantiate();
                    self.session = Some(Session { document, controller });
                    self.status = None;
                }
            }
            SessionAction::Open(path) => self.open(path),
            SessionAction::Close => {
                self.session = None;
                self.status = None;
            }
        }
    }

    fn open(&mut self, path: PathBuf) {
        let Some(template) = self.registry.for_path(&path) else {
            self.status = Some(format!("Unsupported file type: {}", path.display()));
            return;
        };

        let (mut document, controller) = template.instantiate();
        match document.load_from_path(&path) {
            Ok(()) => {
                if document.is_empty() {
                    info!("{} contains no strokes", path.display());
                }
                self.session = Some(Session { document, controller });
                self.status = None;
            }
            Err(err) => {
                error!("Failed to open {}: {}", path.display(), err);
                self.status = Some(format!("Could not open {}: {}", path.display(), err));
            }
        }
    }

    fn save_document(&mut self) {
        let existing = self
            .session
            .as_ref()
            .and_then(|session| session.document.path().map(PathBuf::from));
        match existing {
            Some(path) => self.save_as(path),
            None => self.show_prompt(FilePrompt::SaveAs),
        }
    }

    fn save_as(&mut self, mut path: PathBuf) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if path.extension().is_none() {
            if let Some(template) = self.registry.default_template() {
                path.set_extension(template.extension);
            }
        }

        match session.document.save_to_path(&path) {
            Ok(()) => self.status = Some(format!("Saved {}", path.display())),
            Err(err) => {
                error!("Failed to save {}: {}", path.display(), err);
                self.status = Some(format!("Could not save {}: {}", path.display(), err));
            }
        }
    }

    fn show_prompt(&mut self, prompt: FilePrompt) {
        self.path_input = self
            .session
            .as_ref()
            .and_then(|session| session.document.path())
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        self.prompt = Some(prompt);
    }

    fn undo(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.controller.undo(&mut session.document);
        }
    }

    fn redo(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.controller.redo(&mut session.document);
        }
    }

    fn clear(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session
                .controller
                .handle_event(PointerEvent::ClearRequested, &mut session.document, &self.tools);
        }
    }

    fn shortcuts(&mut self, ctx: &egui::Context) {
        use egui::{Key, KeyboardShortcut, Modifiers};

        let undo = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
        let redo = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
        let save = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);

        if ctx.input_mut(|i| i.consume_shortcut(&undo)) {
            self.undo();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&redo)) {
            self.redo();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&save)) {
            self.save_document();
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                let has_document = self.session.is_some();
                ui.menu_button("File", |ui| {
                    if ui.button("New").clicked() {
                        self.request(SessionAction::New);
                        ui.close_menu();
                    }
                    if ui.button("Open…").clicked() {
                        self.show_prompt(FilePrompt::Open);
                        ui.close_menu();
                    }
                    if ui.add_enabled(has_document, egui::Button::new("Save")).clicked() {
                        self.save_document();
                        ui.close_menu();
                    }
                    if ui.add_enabled(has_document, egui::Button::new("Save As…")).clicked() {
                        self.show_prompt(FilePrompt::SaveAs);
                        ui.close_menu();
                    }
                    if ui.add_enabled(has_document, egui::Button::new("Close")).clicked() {
                        self.request(SessionAction::Close);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    let history = self.session.as_ref().map(|session| session.controller.history());
                    let undo_name = history.and_then(|h| h.undo_name());
                    let redo_name = history.and_then(|h| h.redo_name());

                    let undo_label = undo_name.map_or("Undo".to_owned(), |name| format!("Undo {name}"));
                    if ui.add_enabled(undo_name.is_some(), egui::Button::new(undo_label)).clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                    let redo_label = redo_name.map_or("Redo".to_owned(), |name| format!("Redo {name}"));
                    if ui.add_enabled(redo_name.is_some(), egui::Button::new(redo_label)).clicked() {
                        self.redo();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.add_enabled(has_document, egui::Button::new("Clear")).clicked() {
                        self.clear();
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn controls_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("controls")
            .default_width(220.0)
            .min_width(150.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.label("Colors");
                    let mut picked_color = None;
                    ui.horizontal_wrapped(|ui| {
                        for (index, color) in self.palette.colors.iter().enumerate() {
                            let selected = *color == self.tools.current_color();
                            let response = swatch(ui, selected, |painter, rect| {
                                painter.rect_filled(rect.shrink(4.0), 2.0, *color);
                            });
                            if response.clicked() {
                                picked_color = Some(index);
                            }
                        }
                    });
                    if let Some(index) = picked_color {
                        self.tools.select_color(&self.palette, index);
                    }

                    ui.add_space(8.0);
                    ui.label("Pens");
                    let mut picked_pen = None;
                    ui.horizontal_wrapped(|ui| {
                        let ink = ui.visuals().text_color();
                        for (index, width) in self.palette.pen_widths.iter().enumerate() {
                            let selected = *width == self.tools.current_width();
                            let response = swatch(ui, selected, |painter, rect| {
                                let radius = (width / 2.0).min(rect.width() / 2.0 - 4.0);
                                painter.circle_filled(rect.center(), radius, ink);
                            });
                            if response.clicked() {
                                picked_pen = Some(index);
                            }
                        }
                    });
                    if let Some(index) = picked_pen {
                        self.tools.select_pen(&self.palette, index);
                    }

                    ui.add_space(8.0);
                    if ui.button("Reset palette").clicked() {
                        self.palette_config = PaletteConfig::default();
                        self.palette = self.palette_config.resolve();
                        self.tools = ToolSettings::from_palette(&self.palette);
                    }
                });
            });
    }

    fn canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let Some(session) = self.session.as_mut() else {
                    ui.centered_and_justified(|ui| ui.label("No drawing open"));
                    return;
                };

                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                let rect = response.rect;
                let to_canvas = |pos: egui::Pos2| (pos - rect.min).to_pos2();

                let pointer = CanvasPointer {
                    press_origin: ui.input(|i| i.pointer.press_origin()).map(to_canvas),
                    position: response.interact_pointer_pos().map(to_canvas),
                    clicked: response.clicked(),
                    drag_started: response.drag_started(),
                    dragged: response.dragged() && response.drag_delta() != egui::Vec2::ZERO,
                    drag_stopped: response.drag_stopped(),
                };
                let events = pointer.events();

                for event in events {
                    session
                        .controller
                        .handle_event(event, &mut session.document, &self.tools);
                }

                renderer::paint_document(&painter, rect, &session.document);
            });
    }

    fn file_prompt(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.prompt else {
            return;
        };

        let mut open = true;
        let mut submitted = false;
        let mut cancelled = false;
        egui::Window::new(prompt.title())
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label("File path (*.pxz):");
                let response = ui.text_edit_singleline(&mut self.path_input);
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submitted = true;
                }
                ui.horizontal(|ui| {
                    if ui.button(prompt.title()).clicked() {
                        submitted = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if submitted && !self.path_input.trim().is_empty() {
            self.prompt = None;
            let path = PathBuf::from(self.path_input.trim());
            match prompt {
                FilePrompt::Open => self.request(SessionAction::Open(path)),
                FilePrompt::SaveAs => self.save_as(path),
            }
        } else if cancelled || !open {
            self.prompt = None;
        }
    }

    fn discard_prompt(&mut self, ctx: &egui::Context) {
        let Some(action) = self.pending.clone() else {
            return;
        };
        let name = self
            .session
            .as_ref()
            .map(|session| session.document.user_readable_name())
            .unwrap_or_default();

        let mut discard = false;
        let mut cancel = false;
        egui::Window::new("Unsaved changes")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("Discard unsaved changes to {name}?"));
                ui.horizontal(|ui| {
                    discard = ui.button("Discard").clicked();
                    cancel = ui.button("Cancel").clicked();
                });
            });

        if discard {
            self.pending = None;
            self.perform(action);
        } else if cancel {
            self.pending = None;
        }
    }

    fn status_bar(&mut self, ctx: &egui::Context) {
        if let Some(status) = &self.status {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                ui.label(status);
            });
        }
    }

    fn update_title(&mut self, ctx: &egui::Context) {
        let title = self
            .session
            .as_ref()
            .map(|session| session.document.title(APP_NAME))
            .unwrap_or_else(|| APP_NAME.to_owned());
        if title != self.last_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.last_title = title;
        }
    }
}

/// What the canvas saw of the pointer this frame, in canvas coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct CanvasPointer {
    press_origin: Option<egui::Pos2>,
    position: Option<egui::Pos2>,
    clicked: bool,
    drag_started: bool,
    dragged: bool,
    drag_stopped: bool,
}

impl CanvasPointer {
    /// Translate one frame of pointer state into gesture events.
    ///
    /// egui reports a drag only once the pointer has left the click radius, so
    /// strokes start at the press origin and the current position follows as a
    /// drag. A click without movement is a one-point stroke.
    fn events(self) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        if self.clicked {
            if let Some(pos) = self.press_origin.or(self.position) {
                events.push(PointerEvent::Down(pos));
                events.push(PointerEvent::DragEnd);
            }
            return events;
        }

        if self.drag_started {
            if let Some(origin) = self.press_origin.or(self.position) {
                events.push(PointerEvent::Down(origin));
                if let Some(pos) = self.position.filter(|pos| *pos != origin) {
                    events.push(PointerEvent::Drag(pos));
                }
            }
        } else if self.dragged {
            if let Some(pos) = self.position {
                events.push(PointerEvent::Drag(pos));
            }
        }

        if self.drag_stopped {
            events.push(PointerEvent::DragEnd);
        }
        events
    }
}

/// A clickable square with custom content and a selection outline
fn swatch(ui: &mut egui::Ui, selected: bool, paint: impl FnOnce(&egui::Painter, egui::Rect)) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::click());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);
        paint(painter, rect);
        let outline = if selected {
            ui.visuals().selection.stroke
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke
        };
        painter.rect_stroke(rect, 4.0, outline);
    }
    response
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, PALETTE_KEY, &self.palette_config);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.shortcuts(ctx);
        self.menu_bar(ctx);
        self.status_bar(ctx);
        self.controls_panel(ctx);
        self.canvas(ctx);
        self.file_prompt(ctx);
        self.discard_prompt(ctx);
        self.update_title(ctx);
    }
}
