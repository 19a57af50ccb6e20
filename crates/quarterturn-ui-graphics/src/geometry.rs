//! Geometric primitives: Point, Size, Rect, Insets and the paint-time layer

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Returns the size with width and height exchanged.
    pub const fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// Scales the rectangle by `factor` around `pivot`.
    pub fn scaled(&self, pivot: Point, factor: f32) -> Rect {
        let left = pivot.x + (self.x - pivot.x) * factor;
        let top = pivot.y + (self.y - pivot.y) * factor;
        let right = pivot.x + (self.x + self.width - pivot.x) * factor;
        let bottom = pivot.y + (self.y + self.height - pivot.y) * factor;
        Rect {
            x: left.min(right),
            y: top.min(bottom),
            width: (right - left).abs(),
            height: (bottom - top).abs(),
        }
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Axis-aligned bounds of this rectangle after rotating it clockwise by
    /// `degrees` around `pivot`.
    ///
    /// Multiples of 90 degrees are computed exactly so quarter-turn layouts
    /// can be compared without tolerances.
    pub fn rotated_bounds(&self, pivot: Point, degrees: f32) -> Rect {
        let (cos, sin) = rotation_cos_sin(degrees);
        let corners = [
            (self.x, self.y),
            (self.x + self.width, self.y),
            (self.x, self.y + self.height),
            (self.x + self.width, self.y + self.height),
        ];
        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for (x, y) in corners {
            let dx = x - pivot.x;
            let dy = y - pivot.y;
            let rx = pivot.x + dx * cos - dy * sin;
            let ry = pivot.y + dx * sin + dy * cos;
            min_x = min_x.min(rx);
            min_y = min_y.min(ry);
            max_x = max_x.max(rx);
            max_y = max_y.max(ry);
        }
        Rect {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }
}

fn rotation_cos_sin(degrees: f32) -> (f32, f32) {
    let quarters = degrees / 90.0;
    if quarters.fract() == 0.0 {
        return match (quarters as i64).rem_euclid(4) {
            0 => (1.0, 0.0),
            1 => (0.0, 1.0),
            2 => (-1.0, 0.0),
            _ => (0.0, -1.0),
        };
    }
    let radians = degrees.to_radians();
    (radians.cos(), radians.sin())
}

/// Padding values for each edge of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub fn uniform(all: f32) -> Self {
        Self {
            left: all,
            top: all,
            right: all,
            bottom: all,
        }
    }

    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }

    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_sum(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Paint-time transform applied after layout has been finalized.
///
/// `rotation_z` is in degrees, clockwise, around the center of the layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsLayer {
    pub alpha: f32,
    pub scale: f32,
    pub rotation_z: f32,
    pub translation_x: f32,
    pub translation_y: f32,
}

impl Default for GraphicsLayer {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            scale: 1.0,
            rotation_z: 0.0,
            translation_x: 0.0,
            translation_y: 0.0,
        }
    }
}

impl GraphicsLayer {
    /// Combines `other` on top of this layer.
    pub fn concat(self, other: GraphicsLayer) -> Self {
        Self {
            alpha: self.alpha * other.alpha,
            scale: self.scale * other.scale,
            rotation_z: self.rotation_z + other.rotation_z,
            translation_x: self.translation_x + other.translation_x,
            translation_y: self.translation_y + other.translation_y,
        }
    }
}

pub trait DrawScope {
    fn size(&self) -> Size;
    fn draw_content(&mut self);
    /// Rotates everything drawn afterwards clockwise by `degrees` around the
    /// center of the drawing bounds.
    fn rotate(&mut self, degrees: f32);
    /// Applies an arbitrary graphics layer to subsequent drawing.
    fn apply_layer(&mut self, layer: GraphicsLayer);
    fn layer(&self) -> GraphicsLayer;
}

/// Recording draw scope used by the headless host.
#[derive(Default, Debug)]
pub struct DrawScopeDefault {
    size: Size,
    layer: GraphicsLayer,
    content_drawn: bool,
}

impl DrawScopeDefault {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            layer: GraphicsLayer::default(),
            content_drawn: false,
        }
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.layer.rotation_z
    }

    pub fn content_drawn(&self) -> bool {
        self.content_drawn
    }

    /// Maps a rectangle laid out in this scope's coordinates to where it
    /// appears on screen once the accumulated layer is applied.
    ///
    /// Scale and rotation pivot on the center of the scope; translation
    /// applies last.
    pub fn visual_bounds(&self, content: Rect) -> Rect {
        let pivot = self.size.center();
        content
            .scaled(pivot, self.layer.scale)
            .rotated_bounds(pivot, self.layer.rotation_z)
            .translate(self.layer.translation_x, self.layer.translation_y)
    }
}

impl DrawScope for DrawScopeDefault {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_content(&mut self) {
        self.content_drawn = true;
    }

    fn rotate(&mut self, degrees: f32) {
        self.layer.rotation_z += degrees;
    }

    fn apply_layer(&mut self, layer: GraphicsLayer) {
        self.layer = self.layer.concat(layer);
    }

    fn layer(&self) -> GraphicsLayer {
        self.layer
    }
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
