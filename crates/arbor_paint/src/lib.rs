//! Arbor canvas API
//!
//! A retained 2D drawing surface for scene-graph nodes. Nodes paint
//! themselves by recording commands into a [`Canvas`]; a backend replays the
//! command stream. Because the stream is plain data it can be inspected in
//! tests without any GPU or raster backend.
//!
//! - Path building (lines, quadratic curves)
//! - Rect fills, gradient fills
//! - Scoped clipping and translation with guaranteed restoration

pub mod canvas;
pub mod color;
pub mod gradient;
pub mod path;

pub use canvas::{Canvas, ClipScope, PaintCommand, TranslateScope};
pub use color::Color;
pub use gradient::{FadeEdge, GradientStop, LinearGradient};
pub use path::{Path, PathBuilder, Point, Rect};
