//! Typed SVG path drawing commands

use std::fmt;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A point in user space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset this point by another, treated as a vector
    pub fn offset(self, by: Point) -> Point {
        Point::new(self.x + by.x, self.y + by.y)
    }

    /// Mirror `self` through `center`
    pub fn reflect_about(self, center: Point) -> Point {
        Point::new(2.0 * center.x - self.x, 2.0 * center.y - self.y)
    }
}

/// Whether a command's coordinates are absolute or relative to the current point
///
/// Uppercase command letters are absolute, lowercase ones relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Absolute,
    Relative,
}

impl Mode {
    fn letter(self, upper: char) -> char {
        match self {
            Mode::Absolute => upper,
            Mode::Relative => upper.to_ascii_lowercase(),
        }
    }
}

/// A single drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo {
        mode: Mode,
        to: Point,
    },
    LineTo {
        mode: Mode,
        to: Point,
    },
    HorizontalTo {
        mode: Mode,
        x: f64,
    },
    VerticalTo {
        mode: Mode,
        y: f64,
    },
    CubicTo {
        mode: Mode,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    /// Cubic curve whose first control point mirrors the previous curve's second
    SmoothCubicTo {
        mode: Mode,
        ctrl2: Point,
        to: Point,
    },
    QuadraticTo {
        mode: Mode,
        ctrl: Point,
        to: Point,
    },
    /// Quadratic curve whose control point mirrors the previous curve's
    SmoothQuadraticTo {
        mode: Mode,
        to: Point,
    },
    ArcTo {
        mode: Mode,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    ClosePath,
}

impl PathCommand {
    /// The command letter as it appears in path data
    pub fn letter(&self) -> char {
        match self {
            PathCommand::MoveTo { mode, .. } => mode.letter('M'),
            PathCommand::LineTo { mode, .. } => mode.letter('L'),
            PathCommand::HorizontalTo { mode, .. } => mode.letter('H'),
            PathCommand::VerticalTo { mode, .. } => mode.letter('V'),
            PathCommand::CubicTo { mode, .. } => mode.letter('C'),
            PathCommand::SmoothCubicTo { mode, .. } => mode.letter('S'),
            PathCommand::QuadraticTo { mode, .. } => mode.letter('Q'),
            PathCommand::SmoothQuadraticTo { mode, .. } => mode.letter('T'),
            PathCommand::ArcTo { mode, .. } => mode.letter('A'),
            PathCommand::ClosePath => 'z',
        }
    }

    /// Mode of the command; closepath has no coordinates and reports absolute
    pub fn mode(&self) -> Mode {
        match self {
            PathCommand::MoveTo { mode, .. }
            | PathCommand::LineTo { mode, .. }
            | PathCommand::HorizontalTo { mode, .. }
            | PathCommand::VerticalTo { mode, .. }
            | PathCommand::CubicTo { mode, .. }
            | PathCommand::SmoothCubicTo { mode, .. }
            | PathCommand::QuadraticTo { mode, .. }
            | PathCommand::SmoothQuadraticTo { mode, .. }
            | PathCommand::ArcTo { mode, .. } => *mode,
            PathCommand::ClosePath => Mode::Absolute,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.letter();
        match self {
            PathCommand::MoveTo { to, .. }
            | PathCommand::LineTo { to, .. }
            | PathCommand::SmoothQuadraticTo { to, .. } => {
                write!(f, "{}{} {}", letter, to.x, to.y)
            }
            PathCommand::HorizontalTo { x, .. } => write!(f, "{}{}", letter, x),
            PathCommand::VerticalTo { y, .. } => write!(f, "{}{}", letter, y),
            PathCommand::CubicTo {
                ctrl1, ctrl2, to, ..
            } => write!(
                f,
                "{}{} {} {} {} {} {}",
                letter, ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            ),
            PathCommand::SmoothCubicTo { ctrl2, to, .. } => {
                write!(f, "{}{} {} {} {}", letter, ctrl2.x, ctrl2.y, to.x, to.y)
            }
            PathCommand::QuadraticTo { ctrl, to, .. } => {
                write!(f, "{}{} {} {} {}", letter, ctrl.x, ctrl.y, to.x, to.y)
            }
            PathCommand::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                to,
                ..
            } => write!(
                f,
                "{}{} {} {} {} {} {} {}",
                letter,
                rx,
                ry,
                x_axis_rotation,
                u8::from(*large_arc),
                u8::from(*sweep),
                to.x,
                to.y
            ),
            PathCommand::ClosePath => write!(f, "{}", letter),
        }
    }
}

/// Parsed path data: the full command list of one `d` attribute
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    pub commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", cmd)?;
        }
        Ok(())
    }
}
