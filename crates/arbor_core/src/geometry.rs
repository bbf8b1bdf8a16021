//! Mutable geometry value objects
//!
//! Every scene node owns one [`Position`] and one [`Dimension`]. The three
//! resize flavors exist because callers mix them: absolute sizing on
//! construction, factor scaling on zoom, and signed deltas for things like
//! scrollbar cross-axis compensation.

/// Width/height pair; components never go below zero
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimension {
    width: f32,
    height: f32,
}

impl Dimension {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Set an absolute size
    pub fn resize_to(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Scale the current size by per-axis factors
    pub fn resize_by(&mut self, width_factor: f32, height_factor: f32) {
        self.width = (self.width * width_factor).max(0.0);
        self.height = (self.height * height_factor).max(0.0);
    }

    /// Add signed deltas to the current size
    pub fn resize_with(&mut self, delta_width: f32, delta_height: f32) {
        self.width = (self.width + delta_width).max(0.0);
        self.height = (self.height + delta_height).max(0.0);
    }
}

/// A point in the parent node's coordinate space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn translate_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn translate_with(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}
