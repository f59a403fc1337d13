//! Main preview application
//!
//! Implements the egui App trait: senses clicks on the canvas, paces the
//! animation from the frame loop and paints the scene.

use std::time::Instant;

use egui::{Color32, RichText, Sense};
use tracing::debug;

use crate::animation::RenderCoordinator;
use crate::render::{PainterSurface, SceneRenderer};

/// Main preview application
pub struct PreviewApp {
    scene: SceneRenderer,
    coordinator: RenderCoordinator,
}

impl PreviewApp {
    /// Create the application around an already-validated coordinator
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        scene: SceneRenderer,
        coordinator: RenderCoordinator,
    ) -> Self {
        Self { scene, coordinator }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Advance the animation when a tick is due; egui repaints every
        // update, so the returned redraw hint needs no extra handling here
        let _ = self.coordinator.tick(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            let status_height = 24.0;
            let mut canvas_size = ui.available_size();
            canvas_size.y = (canvas_size.y - status_height).max(0.0);

            let (response, painter) = ui.allocate_painter(canvas_size, Sense::click());
            let rect = response.rect;

            if response.clicked() && !self.coordinator.handle_activation(now) {
                debug!("activation ignored, unit step already running");
            }

            let (br, bg, bb) = self.scene.background();
            painter.rect_filled(rect, 0.0, Color32::from_rgb(br, bg, bb));

            let mut surface = PainterSurface::new(&painter, rect);
            self.coordinator.draw(&self.scene, &mut surface);

            let sequence = self.coordinator.sequence();
            ui.label(
                RichText::new(format!(
                    "Node: {}/{} | Sweep: {:?} | {}",
                    sequence.current_index() + 1,
                    sequence.chain().len(),
                    sequence.direction(),
                    if self.coordinator.is_animating() {
                        "animating"
                    } else {
                        "click to step"
                    }
                ))
                .color(Color32::DARK_GRAY)
                .small(),
            );
        });

        // Keep frames coming while a unit step is in flight
        if self.coordinator.is_animating() {
            ctx.request_repaint();
        }
    }
}
