//! Path building and basic geometry

use smallvec::SmallVec;

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x
            && p.x <= self.x + self.width
            && p.y >= self.y
            && p.y <= self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Path segment
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, end: Point },
    Close,
}

/// A 2D path composed of segments
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segments: SmallVec<[PathSegment; 16]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Rounded-rect outline built from lines and quadratic curves, the way a
    /// canvas polyfill draws one. `radius` is capped so opposite corners
    /// never cross.
    pub fn rounded_rect(width: f32, height: f32, radius: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Path::new();
        }
        let r = radius.clamp(0.0, width.min(height) / 2.0);
        PathBuilder::new()
            .move_to(0.0, r)
            .quad_to(0.0, 0.0, r, 0.0)
            .line_to(width - r, 0.0)
            .quad_to(width, 0.0, width, r)
            .line_to(width, height - r)
            .quad_to(width, height, width - r, height)
            .line_to(r, height)
            .quad_to(0.0, height, 0.0, height - r)
            .line_to(0.0, r)
            .close()
            .build()
    }
}

/// Builder for constructing paths
#[derive(Default)]
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.path.segments.push(PathSegment::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.path.segments.push(PathSegment::LineTo(Point::new(x, y)));
        self
    }

    pub fn quad_to(mut self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        self.path.segments.push(PathSegment::QuadTo {
            control: Point::new(cx, cy),
            end: Point::new(x, y),
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.path.segments.push(PathSegment::Close);
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_records_segments() {
        let path = PathBuilder::new()
            .move_to(0.0, 0.0)
            .line_to(10.0, 0.0)
            .quad_to(10.0, 10.0, 0.0, 10.0)
            .close()
            .build();
        assert_eq!(path.segments().len(), 4);
        assert_eq!(path.segments()[0], PathSegment::MoveTo(Point::ZERO));
    }

    #[test]
    fn rounded_rect_caps_radius() {
        // radius larger than half the short side must not self-intersect
        let path = Path::rounded_rect(40.0, 10.0, 100.0);
        let max = path
            .segments()
            .iter()
            .filter_map(|s| match s {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(p.y),
                PathSegment::QuadTo { end, .. } => Some(end.y),
                PathSegment::Close => None,
            })
            .fold(f32::MIN, f32::max);
        assert!(max <= 10.0);
    }

    #[test]
    fn rounded_rect_degenerate_is_empty() {
        assert!(Path::rounded_rect(0.0, 10.0, 2.0).is_empty());
        assert!(Path::rounded_rect(-3.0, 10.0, 2.0).is_empty());
    }

    #[test]
    fn rect_contains_edges() {
        let r = Rect::new(0.0, 0.0, 5.0, 5.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(5.0, 5.0)));
        assert!(!r.contains(Point::new(5.1, 0.0)));
    }
}
