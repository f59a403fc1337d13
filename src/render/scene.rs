//! Scene renderer
//!
//! Issues the line/ball geometry for one node of the animation. All sizes
//! derive from min(width, height) via the configured factors, so the scene
//! scales with the surface.

use std::f32::consts::PI;

use crate::config::SceneConfig;

use super::scale::{divide_scale, sinify};
use super::surface::DrawSurface;

/// Draws the reflect-ball scene for the node currently animating
#[derive(Debug)]
pub struct SceneRenderer {
    config: SceneConfig,
}

impl SceneRenderer {
    /// Create the renderer for a validated configuration
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    /// Background color behind the scene
    pub fn background(&self) -> (u8, u8, u8) {
        self.config.background_rgb()
    }

    /// Draw one node at the given progress.
    ///
    /// The eased progress splits into three staggered sub-phases: the line
    /// grows from its anchor, the ball inflates, and finally the line
    /// rotates through -pi while the ball travels from the right edge back
    /// toward the line. Because the easing is symmetric the second half of
    /// the unit step plays the same motion in reverse.
    pub fn draw_node(&self, surface: &mut dyn DrawSurface, index: usize, progress: f32) {
        let (w, h) = surface.size();
        let base = w.min(h);
        let r = base / self.config.ball_radius_factor;
        let line_size = base / self.config.line_length_factor;
        let n = self.config.sub_phases;

        let sf = sinify(progress);
        let sf1 = divide_scale(sf, 0, n);
        let sf2 = divide_scale(sf, 1, n);
        let sf3 = divide_scale(sf, 2, n);

        let cx = w - r - (w - 2.0 * r - line_size) * sf3;
        let color = self.config.palette_rgb(index);

        surface.set_stroke(base / self.config.stroke_factor, color);
        surface.set_fill(color);

        surface.save();
        surface.translate(line_size, h / 2.0);
        surface.rotate(-PI * sf3);
        surface.line(0.0, 0.0, 0.0, -line_size * sf1);
        surface.restore();

        surface.filled_circle(cx, h / 2.0 + (line_size - r), r * sf2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Op {
        Stroke(f32, (u8, u8, u8)),
        Fill((u8, u8, u8)),
        Line(f32, f32, f32, f32),
        Circle(f32, f32, f32),
        Save,
        Restore,
        Translate(f32, f32),
        Rotate(f32),
    }

    /// Surface that records issued operations in local coordinates
    struct RecordingSurface {
        width: f32,
        height: f32,
        ops: Vec<Op>,
    }

    impl RecordingSurface {
        fn new(width: f32, height: f32) -> Self {
            Self { width, height, ops: Vec::new() }
        }
    }

    impl DrawSurface for RecordingSurface {
        fn size(&self) -> (f32, f32) {
            (self.width, self.height)
        }

        fn set_stroke(&mut self, width: f32, color: (u8, u8, u8)) {
            self.ops.push(Op::Stroke(width, color));
        }

        fn set_fill(&mut self, color: (u8, u8, u8)) {
            self.ops.push(Op::Fill(color));
        }

        fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
            self.ops.push(Op::Line(x1, y1, x2, y2));
        }

        fn filled_circle(&mut self, cx: f32, cy: f32, r: f32) {
            self.ops.push(Op::Circle(cx, cy, r));
        }

        fn save(&mut self) {
            self.ops.push(Op::Save);
        }

        fn restore(&mut self) {
            self.ops.push(Op::Restore);
        }

        fn translate(&mut self, dx: f32, dy: f32) {
            self.ops.push(Op::Translate(dx, dy));
        }

        fn rotate(&mut self, radians: f32) {
            self.ops.push(Op::Rotate(radians));
        }
    }

    fn scene() -> SceneRenderer {
        SceneRenderer::new(SceneConfig::default())
    }

    #[test]
    fn test_node_at_rest_draws_degenerate_geometry() {
        let mut surface = RecordingSurface::new(640.0, 480.0);
        scene().draw_node(&mut surface, 0, 0.0);

        // Zero-length line, unrotated
        assert!(surface.ops.contains(&Op::Rotate(0.0)));
        assert!(surface.ops.contains(&Op::Line(0.0, 0.0, 0.0, 0.0)));

        // Ball parked at the right edge with zero radius
        let base: f32 = 480.0;
        let r = base / 15.9;
        let line_size = base / 6.9;
        let circle = surface
            .ops
            .iter()
            .find_map(|op| match op {
                Op::Circle(cx, cy, radius) => Some((*cx, *cy, *radius)),
                _ => None,
            })
            .expect("no circle drawn");
        assert!((circle.0 - (640.0 - r)).abs() < 1e-3);
        assert!((circle.1 - (240.0 + line_size - r)).abs() < 1e-3);
        assert!(circle.2.abs() < 1e-6);
    }

    #[test]
    fn test_node_at_midstep_draws_full_geometry() {
        let mut surface = RecordingSurface::new(640.0, 480.0);
        // progress 0.5 eases to the animation peak: all sub-phases at 1
        scene().draw_node(&mut surface, 2, 0.5);

        let base: f32 = 480.0;
        let r = base / 15.9;
        let line_size = base / 6.9;

        assert!(surface.ops.contains(&Op::Save));
        assert!(surface.ops.contains(&Op::Restore));

        let rotation = surface
            .ops
            .iter()
            .find_map(|op| match op {
                Op::Rotate(radians) => Some(*radians),
                _ => None,
            })
            .expect("no rotation issued");
        assert!((rotation + PI).abs() < 1e-4);

        let line = surface
            .ops
            .iter()
            .find_map(|op| match op {
                Op::Line(_, _, _, y2) => Some(*y2),
                _ => None,
            })
            .expect("no line drawn");
        assert!((line + line_size).abs() < 1e-3);

        let circle = surface
            .ops
            .iter()
            .find_map(|op| match op {
                Op::Circle(cx, _, radius) => Some((*cx, *radius)),
                _ => None,
            })
            .expect("no circle drawn");
        // Fully traveled: resting against the line anchor
        assert!((circle.0 - (r + line_size)).abs() < 1e-3);
        assert!((circle.1 - r).abs() < 1e-3);
    }

    #[test]
    fn test_node_color_follows_palette() {
        let config = SceneConfig::default();
        let expected = config.palette_rgb(1);

        let mut surface = RecordingSurface::new(640.0, 480.0);
        SceneRenderer::new(config).draw_node(&mut surface, 1, 0.25);

        assert!(surface.ops.contains(&Op::Fill(expected)));
        assert!(surface
            .ops
            .iter()
            .any(|op| matches!(op, Op::Stroke(_, color) if *color == expected)));
    }
}
