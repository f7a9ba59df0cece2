// Math utilities and the axis-aligned rectangle used for every hitbox

use glam::Vec2;

/// Check if two f32 values are approximately equal
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Axis-aligned rectangle in screen space (y grows downward)
///
/// Overlap tests are strict: two rects that only share an edge do not
/// overlap. A degenerate rect (zero/negative area or non-finite values)
/// never overlaps anything.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rect whose bottom edge is centered on `(center_x, bottom)`
    pub fn from_midbottom(center_x: f32, bottom: f32, w: f32, h: f32) -> Self {
        Self::new(center_x - w / 2.0, bottom - h, w, h)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn midbottom(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.bottom())
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    pub fn set_center_x(&mut self, center_x: f32) {
        self.x = center_x - self.w / 2.0;
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite())
            || self.w <= 0.0
            || self.h <= 0.0
    }

    /// Strict overlap test on both axes
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.h_overlaps(other) && self.top() < other.bottom() && other.top() < self.bottom()
    }

    /// Strict overlap test on the horizontal axis only
    pub fn h_overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right() && other.left() < self.right()
    }
}
