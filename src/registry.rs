use std::path::Path;

use crate::document::Document;
use crate::tools::DrawingController;

/// Describes a kind of file the application can open and how to build the
/// document and controller that handle it
#[derive(Debug, Clone)]
pub struct DocumentTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub filter: &'static str,
    pub extension: &'static str,
    pub create_document: fn() -> Document,
    pub create_controller: fn() -> DrawingController,
}

impl DocumentTemplate {
    /// The squiggle drawing format, `*.pxz`
    pub fn drawing() -> Self {
        Self {
            name: "Drawing",
            description: "Drawing",
            filter: "*.pxz",
            extension: "pxz",
            create_document: Document::new,
            create_controller: DrawingController::new,
        }
    }

    pub fn instantiate(&self) -> (Document, DrawingController) {
        ((self.create_document)(), (self.create_controller)())
    }

    pub fn matches_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(self.extension))
    }
}

/// Templates keyed by name, looked up when creating or opening documents
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<DocumentTemplate>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(DocumentTemplate::drawing());
        registry
    }

    /// Add a template, replacing any registered under the same name
    pub fn register(&mut self, template: DocumentTemplate) {
        self.templates.retain(|existing| existing.name != template.name);
        self.templates.push(template);
    }

    pub fn templates(&self) -> &[DocumentTemplate] {
        &self.templates
    }

    pub fn find(&self, name: &str) -> Option<&DocumentTemplate> {
        self.templates.iter().find(|template| template.name == name)
    }

    pub fn for_path(&self, path: &Path) -> Option<&DocumentTemplate> {
        self.templates.iter().find(|template| template.matches_path(path))
    }

    /// The template used for "New", the first one registered
    pub fn default_template(&self) -> Option<&DocumentTemplate> {
        self.templates.first()
    }
}
