//! tv-icon - the Font Awesome "tv" glyph as a pure render function
//!
//! [`render`] returns an owned `<svg>` element tree with a fixed namespace,
//! a fixed `viewBox` of `0 0 640 512` and a single `<path>` child. The
//! [`markup`] module serializes that tree and [`path`] parses its drawing
//! commands.
//!
//! # Example
//!
//! ```rust
//! use tv_icon::render;
//!
//! let svg = render();
//! assert_eq!(svg.attribute("viewBox"), Some("0 0 640 512"));
//! assert_eq!(svg.children().len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod icon;
pub mod markup;
pub mod path;

pub use config::{Config, OutputFormat};
pub use error::{ConfigError, PathError, ViewBoxError};
pub use icon::{render, VectorIcon, ViewBox, ATTRIBUTION, SVG_NAMESPACE, TV};
pub use markup::{to_data_uri, to_markup, MarkupConfig, SvgElement};
pub use path::{parse as parse_path, PathCommand, PathData};

/// Render the icon and serialize it with the default markup configuration
///
/// # Example
///
/// ```rust
/// let svg = tv_icon::render_to_string();
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.ends_with("</svg>"));
/// ```
pub fn render_to_string() -> String {
    to_markup(&render(), &MarkupConfig::default())
}
