//! Drawing value types (Cairo-based).
//!
//! - [`Color`] / [`ColorValue`]: normalized RGBA colors and the inputs accepted for them
//! - [`Path`]: the segment list shape primitives accumulate and replay onto cairo

pub mod color;
pub mod path;

pub use color::{Color, ColorParseError, ColorValue, name_to_color};
pub use path::{Path, PathSegment};

// Re-export color constants for public API
pub use color::{BLACK, BLUE, GREEN, RED, TRANSPARENT, WHITE, YELLOW};
