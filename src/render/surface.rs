//! Drawing surface abstraction
//!
//! The animation core draws through this trait; the shell supplies an
//! egui-backed implementation clipped to the preview area.

use egui::{Color32, Pos2, Stroke};
use glam::{Affine2, Vec2};

/// Minimal 2D drawing capability the scene needs
///
/// Coordinates are in surface space (origin top-left, y down). `save`,
/// `restore`, `translate` and `rotate` manage a transform stack applied to
/// all subsequent geometry, matching the usual canvas contract.
pub trait DrawSurface {
    /// Surface dimensions in points
    fn size(&self) -> (f32, f32);

    /// Set stroke width and color for subsequent lines
    fn set_stroke(&mut self, width: f32, color: (u8, u8, u8));

    /// Set fill color for subsequent filled shapes
    fn set_fill(&mut self, color: (u8, u8, u8));

    /// Stroke a line segment between two points
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Fill a circle centered at (cx, cy)
    fn filled_circle(&mut self, cx: f32, cy: f32, r: f32);

    /// Push the current transform
    fn save(&mut self);

    /// Pop back to the previously saved transform
    fn restore(&mut self);

    /// Translate the local coordinate frame
    fn translate(&mut self, dx: f32, dy: f32);

    /// Rotate the local coordinate frame by `radians`
    fn rotate(&mut self, radians: f32);
}

/// DrawSurface backed by an egui painter
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    width: f32,
    height: f32,
    transform: Affine2,
    stack: Vec<Affine2>,
    stroke: Stroke,
    fill: Color32,
}

impl<'a> PainterSurface<'a> {
    /// Create a surface covering `rect` of the given painter
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self {
            painter,
            width: rect.width(),
            height: rect.height(),
            transform: Affine2::from_translation(Vec2::new(rect.min.x, rect.min.y)),
            stack: Vec::new(),
            stroke: Stroke::NONE,
            fill: Color32::WHITE,
        }
    }

    fn map(&self, x: f32, y: f32) -> Pos2 {
        let p = self.transform.transform_point2(Vec2::new(x, y));
        Pos2::new(p.x, p.y)
    }
}

impl DrawSurface for PainterSurface<'_> {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn set_stroke(&mut self, width: f32, color: (u8, u8, u8)) {
        self.stroke = Stroke::new(width, Color32::from_rgb(color.0, color.1, color.2));
    }

    fn set_fill(&mut self, color: (u8, u8, u8)) {
        self.fill = Color32::from_rgb(color.0, color.1, color.2);
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let a = self.map(x1, y1);
        let b = self.map(x2, y2);
        if a == b {
            return;
        }
        self.painter.line_segment([a, b], self.stroke);
        // egui strokes are butt-capped; round the endpoints
        let cap = self.stroke.width / 2.0;
        self.painter.circle_filled(a, cap, self.stroke.color);
        self.painter.circle_filled(b, cap, self.stroke.color);
    }

    fn filled_circle(&mut self, cx: f32, cy: f32, r: f32) {
        // The transform carries no scale, so the radius maps through as-is
        self.painter.circle_filled(self.map(cx, cy), r, self.fill);
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform = self.transform * Affine2::from_translation(Vec2::new(dx, dy));
    }

    fn rotate(&mut self, radians: f32) {
        self.transform = self.transform * Affine2::from_angle(radians);
    }
}
