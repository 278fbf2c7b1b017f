//! SVG path data: lexer, parser and geometry
//!
//! Turns a `d` attribute string into typed [`PathCommand`]s and traces them
//! in absolute coordinates.

pub mod ast;
pub mod geometry;
mod grammar;
pub mod lexer;

pub use ast::*;
pub use geometry::BoundingBox;
pub use grammar::parse;
