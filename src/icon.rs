//! The icon definition and its render function

use std::fmt;
use std::str::FromStr;

use crate::error::{PathError, ViewBoxError};
use crate::markup::SvgElement;
use crate::path::{self, BoundingBox, PathData};

/// Namespace declared on every rendered `<svg>` root
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// License notice that ships with the glyph data
pub const ATTRIBUTION: &str = "Font Awesome Free 5.15.3 by @fontawesome - https://fontawesome.com \
License - https://fontawesome.com/license/free (Icons: CC BY 4.0, Fonts: SIL OFL 1.1, Code: MIT License)";

/// Coordinate system a glyph is drawn against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub const fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// Whether `bounds` lies entirely inside this box, edges included
    pub fn contains(&self, bounds: &BoundingBox) -> bool {
        bounds.min_x >= self.min_x
            && bounds.min_y >= self.min_y
            && bounds.max_x <= self.min_x + self.width
            && bounds.max_y <= self.min_y + self.height
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

impl FromStr for ViewBox {
    type Err = ViewBoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 4 {
            return Err(ViewBoxError::Arity(parts.len()));
        }

        let mut values = [0.0; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| ViewBoxError::NotANumber(part.to_string()))?;
        }
        let [min_x, min_y, width, height] = values;
        Ok(ViewBox::new(min_x, min_y, width, height))
    }
}

/// A single-path vector icon made entirely of constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorIcon {
    pub name: &'static str,
    pub view_box: ViewBox,
    pub path_data: &'static str,
}

/// The "tv" display glyph
pub const TV: VectorIcon = VectorIcon {
    name: "tv",
    view_box: ViewBox::new(0.0, 0.0, 640.0, 512.0),
    path_data: "M592 0H48A48 48 0 0 0 0 48v320a48 48 0 0 0 48 48h240v32H112a16 16 0 0 0-16 16v32a16 16 0 0 0 16 16h416a16 16 0 0 0 16-16v-32a16 16 0 0 0-16-16H352v-32h240a48 48 0 0 0 48-48V48a48 48 0 0 0-48-48zm-16 352H64V64h512z",
};

impl VectorIcon {
    /// Build the `<svg>` fragment: namespace and viewBox on the root, one `<path>` child
    ///
    /// No fill or size is set, so the host's inherited styling applies.
    pub fn render(&self) -> SvgElement {
        tracing::trace!(icon = self.name, "rendering icon");
        SvgElement::new("svg")
            .with_attribute("xmlns", SVG_NAMESPACE)
            .with_attribute("viewBox", self.view_box.to_string())
            .with_child(SvgElement::new("path").with_attribute("d", self.path_data))
    }

    /// Parse this icon's path data into drawing commands
    pub fn path(&self) -> Result<PathData, Vec<PathError>> {
        path::parse(self.path_data)
    }
}

/// Render the tv icon
pub fn render() -> SvgElement {
    TV.render()
}
