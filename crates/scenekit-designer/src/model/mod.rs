//! Shape model.
//!
//! A [`Shape`] is stored as the top-left corner of its unrotated bounding
//! box, a signed size and a rotation about the box center. Every kind builds
//! its outline in the local frame (origin at the unrotated top-left corner);
//! the renderer and the hit-tester map between that frame and the surface.

use tiny_skia::Path;

mod circle;
mod rectangle;
mod star;
mod text;
mod triangle;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotates this point by `angle` radians about `pivot`.
    pub fn rotated_about(&self, pivot: Point, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Point::new(
            dx * cos - dy * sin + pivot.x,
            dx * sin + dy * cos + pivot.y,
        )
    }
}

/// Straight (non-premultiplied) RGBA fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
    Star,
    Text,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Star => "star",
            ShapeKind::Text => "text",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Font parameters for text outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub family: String,
    pub size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            size: scenekit_core::constants::TEXT_FONT_SIZE as f32,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    /// Signed; a resize that crosses the opposite edge leaves it negative.
    pub width: f64,
    /// Signed, like `width`.
    pub height: f64,
    pub color: Color,
    /// Radians about the center, accumulated without normalization.
    pub angle: f64,
    pub text: Option<String>,
    /// Reserved for polygon kinds.
    pub points: Option<Vec<Point>>,
}

impl Shape {
    pub fn new(kind: ShapeKind, x: f64, y: f64, width: f64, height: f64, color: Color) -> Self {
        Self {
            kind,
            x,
            y,
            width,
            height,
            color,
            angle: 0.0,
            text: None,
            points: None,
        }
    }

    pub fn rectangle(x: f64, y: f64, width: f64, height: f64, color: Color) -> Self {
        Self::new(ShapeKind::Rectangle, x, y, width, height, color)
    }

    pub fn circle(x: f64, y: f64, width: f64, height: f64, color: Color) -> Self {
        Self::new(ShapeKind::Circle, x, y, width, height, color)
    }

    pub fn triangle(x: f64, y: f64, width: f64, height: f64, color: Color) -> Self {
        Self::new(ShapeKind::Triangle, x, y, width, height, color)
    }

    pub fn star(x: f64, y: f64, width: f64, height: f64, color: Color) -> Self {
        Self::new(ShapeKind::Star, x, y, width, height, color)
    }

    pub fn text(
        text: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    ) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(ShapeKind::Text, x, y, width, height, color)
        }
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Rotation pivot.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Maps a surface point into the unrotated frame of this shape
    /// (still in surface units, not relative to the origin).
    pub fn unrotate(&self, p: Point) -> Point {
        p.rotated_about(self.center(), -self.angle)
    }

    /// Maps a point of the unrotated frame back onto the surface.
    pub fn rotate(&self, p: Point) -> Point {
        p.rotated_about(self.center(), self.angle)
    }

    /// Unrotated box as `(min_x, min_y, max_x, max_y)`, normalized for
    /// negative sizes.
    pub fn box_bounds(&self) -> (f64, f64, f64, f64) {
        let (x1, x2) = ordered(self.x, self.x + self.width);
        let (y1, y2) = ordered(self.y, self.y + self.height);
        (x1, y1, x2, y2)
    }

    /// Axis-aligned bounds of the rotated box on the surface.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let corners = [
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y),
            Point::new(self.x, self.y + self.height),
            Point::new(self.x + self.width, self.y + self.height),
        ];
        corners.iter().map(|c| self.rotate(*c)).fold(
            (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            |(min_x, min_y, max_x, max_y), p| {
                (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
            },
        )
    }

    /// Fill outline in the local frame. `None` when the shape has nothing to
    /// fill (degenerate size, empty text or no font available).
    pub fn local_outline(&self, text_style: &TextStyle) -> Option<Path> {
        let (w, h) = (self.width as f32, self.height as f32);
        match self.kind {
            ShapeKind::Rectangle => rectangle::outline(w, h),
            ShapeKind::Circle => circle::outline(w, h),
            ShapeKind::Triangle => triangle::outline(w, h),
            ShapeKind::Star => star::outline(w, h),
            ShapeKind::Text => text::outline(self.text.as_deref()?, w, h, text_style),
        }
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
