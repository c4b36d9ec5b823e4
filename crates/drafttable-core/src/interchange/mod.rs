//! DXF-style interchange text: line-oriented group code / value pairs.
//!
//! Export writes LINE, CIRCLE and rectangles as closed four-vertex
//! LWPOLYLINE records. Import recovers LINE and CIRCLE only; everything else
//! is skipped, so rectangles do not survive a round trip.

mod reader;
mod writer;

pub use reader::{import, import_with_ids, read_pairs, CodePair};
pub use writer::export;

/// Layer assigned to imported entities that do not name one.
pub const FALLBACK_LAYER: &str = "0";

/// Radius given to imported circles with a missing or zero radius.
pub const FALLBACK_RADIUS: f64 = 10.0;
