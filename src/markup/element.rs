//! Owned SVG element tree

/// A single `name="value"` attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// An SVG element with ordered attributes and element children
///
/// Each render builds a fresh tree, so callers may mutate what they get back
/// without affecting any other caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgElement {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<SvgElement>,
}

impl SvgElement {
    /// Create an element with no attributes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute, replacing the value if the name is already set
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
        self
    }

    /// Append a child element
    pub fn with_child(mut self, child: SvgElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Look up an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn children(&self) -> &[SvgElement] {
        &self.children
    }
}
