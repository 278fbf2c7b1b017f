//! SVG markup: element tree and serializer
//!
//! This module holds the owned tree a render produces and turns it into
//! markup text or a `data:` URI.

pub mod config;
pub mod element;
pub mod writer;

pub use config::MarkupConfig;
pub use element::{Attribute, SvgElement};
pub use writer::{to_data_uri, to_markup};
