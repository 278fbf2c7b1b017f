//! Configuration for markup serialization

/// Configuration options for serialized SVG output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupConfig {
    /// Whether to prepend the XML declaration
    pub standalone: bool,

    /// Whether to format output with newlines and indentation
    pub pretty_print: bool,

    /// Spaces per nesting level when pretty printing
    pub indent: usize,

    /// Whether standalone output carries the glyph's license comment
    pub attribution: bool,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            standalone: false,
            pretty_print: true,
            indent: 2,
            attribution: true,
        }
    }
}

impl MarkupConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-line output with no XML declaration
    pub fn compact() -> Self {
        Self::default().with_pretty_print(false)
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the indent width
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set whether standalone output includes the attribution comment
    pub fn with_attribution(mut self, attribution: bool) -> Self {
        self.attribution = attribution;
        self
    }
}
