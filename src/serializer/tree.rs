use crate::error::DocumentResult;

/// A single XML element: tag, attributes in insertion order, and child elements.
///
/// Text content is not modelled; the drawing format only uses attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_attribute(name, value);
        self
    }

    /// Set an attribute, replacing any previous value under the same name
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn add_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    fn write_to(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            out.push_str(&format!(
                " {}=\"{}\"",
                name,
                xml::escape::escape_str_attribute(value)
            ));
        }

        if self.children.is_empty() {
            out.push_str("/>\n");
            return;
        }

        out.push_str(">\n");
        for child in &self.children {
            child.write_to(out, depth + 1);
        }
        out.push_str(&format!("{}</{}>\n", indent, self.name));
    }

    fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let mut element = Self::new(node.tag_name().name());
        for attribute in node.attributes() {
            element.add_attribute(attribute.name(), attribute.value());
        }
        for child in node.children().filter(|child| child.is_element()) {
            element.add_child(Self::from_node(child));
        }
        element
    }
}

/// An XML document tree. A document without a root is the "nothing loaded" tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlDocument {
    root: Option<XmlElement>,
}

impl XmlDocument {
    pub fn new(root: XmlElement) -> Self {
        Self { root: Some(root) }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&XmlElement> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Render the tree as indented UTF-8 XML text. An empty document renders as
    /// an empty string.
    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        if let Some(root) = &self.root {
            out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
            root.write_to(&mut out, 0);
        }
        out
    }

    /// Parse XML text. Blank input yields an empty document; anything else must
    /// be well-formed.
    pub fn parse(text: &str) -> DocumentResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::empty());
        }

        let doc = roxmltree::Document::parse(text)?;
        Ok(Self::new(XmlElement::from_node(doc.root_element())))
    }
}
