//! Absolute-coordinate tracing over parsed path data

use super::ast::{Mode, PathCommand, PathData, Point};

/// Axis-aligned bounding box in user space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    fn at(p: Point) -> Self {
        Self {
            min_x: p.x,
            min_y: p.y,
            max_x: p.x,
            max_y: p.y,
        }
    }

    fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// One command resolved to absolute coordinates
#[derive(Debug, Clone, PartialEq)]
struct Resolved {
    end: Point,
    controls: Vec<Point>,
}

/// Walks commands keeping the current point, subpath start and last control points
struct Tracer {
    current: Point,
    subpath_start: Point,
    last_cubic_ctrl: Option<Point>,
    last_quad_ctrl: Option<Point>,
}

impl Tracer {
    fn new() -> Self {
        Self {
            current: Point::ORIGIN,
            subpath_start: Point::ORIGIN,
            last_cubic_ctrl: None,
            last_quad_ctrl: None,
        }
    }

    fn absolute(&self, mode: Mode, p: Point) -> Point {
        match mode {
            Mode::Absolute => p,
            Mode::Relative => self.current.offset(p),
        }
    }

    fn step(&mut self, cmd: &PathCommand) -> Resolved {
        let mut cubic_ctrl = None;
        let mut quad_ctrl = None;
        let mut controls = Vec::new();

        let end = match *cmd {
            PathCommand::MoveTo { mode, to } => {
                let end = self.absolute(mode, to);
                self.subpath_start = end;
                end
            }
            PathCommand::LineTo { mode, to } => self.absolute(mode, to),
            PathCommand::HorizontalTo { mode, x } => match mode {
                Mode::Absolute => Point::new(x, self.current.y),
                Mode::Relative => Point::new(self.current.x + x, self.current.y),
            },
            PathCommand::VerticalTo { mode, y } => match mode {
                Mode::Absolute => Point::new(self.current.x, y),
                Mode::Relative => Point::new(self.current.x, self.current.y + y),
            },
            PathCommand::CubicTo {
                mode,
                ctrl1,
                ctrl2,
                to,
            } => {
                let c1 = self.absolute(mode, ctrl1);
                let c2 = self.absolute(mode, ctrl2);
                controls.extend([c1, c2]);
                cubic_ctrl = Some(c2);
                self.absolute(mode, to)
            }
            PathCommand::SmoothCubicTo { mode, ctrl2, to } => {
                let c1 = self
                    .last_cubic_ctrl
                    .map(|c| c.reflect_about(self.current))
                    .unwrap_or(self.current);
                let c2 = self.absolute(mode, ctrl2);
                controls.extend([c1, c2]);
                cubic_ctrl = Some(c2);
                self.absolute(mode, to)
            }
            PathCommand::QuadraticTo { mode, ctrl, to } => {
                let c = self.absolute(mode, ctrl);
                controls.push(c);
                quad_ctrl = Some(c);
                self.absolute(mode, to)
            }
            PathCommand::SmoothQuadraticTo { mode, to } => {
                let c = self
                    .last_quad_ctrl
                    .map(|c| c.reflect_about(self.current))
                    .unwrap_or(self.current);
                controls.push(c);
                quad_ctrl = Some(c);
                self.absolute(mode, to)
            }
            PathCommand::ArcTo { mode, to, .. } => self.absolute(mode, to),
            PathCommand::ClosePath => self.subpath_start,
        };

        self.current = end;
        self.last_cubic_ctrl = cubic_ctrl;
        self.last_quad_ctrl = quad_ctrl;
        Resolved { end, controls }
    }
}

impl PathData {
    fn resolve(&self) -> Vec<Resolved> {
        let mut tracer = Tracer::new();
        self.commands.iter().map(|cmd| tracer.step(cmd)).collect()
    }

    /// Absolute end point of each command, in order
    ///
    /// A closepath ends at its subpath's start, and a relative moveto that
    /// follows it is measured from there.
    pub fn endpoints(&self) -> Vec<Point> {
        self.resolve().into_iter().map(|r| r.end).collect()
    }

    /// Number of subpaths, one per moveto
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo { .. }))
            .count()
    }

    /// Box around every end point and Bézier control point
    ///
    /// Curves lie inside their control hull so this never undershoots them.
    /// Arcs only contribute their end points.
    pub fn bounds(&self) -> Option<BoundingBox> {
        let mut points = self
            .resolve()
            .into_iter()
            .flat_map(|r| r.controls.into_iter().chain(std::iter::once(r.end)));

        let mut bounds = BoundingBox::at(points.next()?);
        for p in points {
            bounds.include(p);
        }
        Some(bounds)
    }
}
