//! Linear gradients for fade effects

use crate::color::Color;
use crate::path::Point;
use smallvec::SmallVec;

/// A color stop along a gradient axis (offset in 0.0..=1.0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

/// Linear gradient between two points in local coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: SmallVec<[GradientStop; 4]>,
}

impl LinearGradient {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            stops: SmallVec::new(),
        }
    }

    pub fn with_stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push(GradientStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        });
        self
    }

    /// Fade from `color` to fully transparent along the given edge.
    pub fn fade(edge: FadeEdge, length: f32, color: Color) -> Self {
        let (start, end) = match edge {
            FadeEdge::Left => (Point::ZERO, Point::new(length, 0.0)),
            FadeEdge::Right => (Point::new(length, 0.0), Point::ZERO),
            FadeEdge::Top => (Point::ZERO, Point::new(0.0, length)),
            FadeEdge::Bottom => (Point::new(0.0, length), Point::ZERO),
        };
        Self::new(start, end)
            .with_stop(0.0, color)
            .with_stop(1.0, color.with_alpha(0.0))
    }
}

/// Which viewport edge a fade strip hugs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeEdge {
    Left,
    Right,
    Top,
    Bottom,
}
