//! Animation coordination
//!
//! Ties the sweep sequence to the tick pacing and exposes the two entry
//! points the shell needs: activation and per-frame ticking.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::SceneConfig;
use crate::render::scene::SceneRenderer;
use crate::render::surface::DrawSurface;

use super::sequence::SequenceController;
use super::state::StepResult;
use super::ticker::Ticker;

/// Composes the sequence controller with the ticker
#[derive(Debug)]
pub struct RenderCoordinator {
    sequence: SequenceController,
    ticker: Ticker,
    increment: f32,
}

impl RenderCoordinator {
    /// Build the coordinator from a validated configuration.
    ///
    /// Fails fast on an invalid configuration (empty palette, zero
    /// sub-phase count, malformed colors) so the animation loop never sees
    /// an empty chain.
    pub fn new(config: &SceneConfig) -> Result<Self> {
        config.validate().context("invalid scene configuration")?;

        let sequence = SequenceController::new(config.palette.len())
            .context("failed to build animation chain")?;

        Ok(Self {
            sequence,
            ticker: Ticker::new(config.tick_interval()),
            increment: config.step_increment(),
        })
    }

    /// The sweep sequence, for state inspection
    pub fn sequence(&self) -> &SequenceController {
        &self.sequence
    }

    /// True while a unit step is running
    pub fn is_animating(&self) -> bool {
        self.ticker.is_running()
    }

    /// React to a pointer activation.
    ///
    /// Arms the current node and starts the ticker. Returns false while a
    /// unit step is already running; repeated activations mid-step have no
    /// effect.
    pub fn handle_activation(&mut self, now: Instant) -> bool {
        if !self.sequence.begin_updating() {
            return false;
        }
        self.ticker.start(now);
        info!(node = self.sequence.current_index(), "unit step started");
        true
    }

    /// Process one frame at `now`.
    ///
    /// When a tick is due, advances the current node; on unit-step
    /// completion the ticker stops so the animation rests until the next
    /// activation. Returns true whenever the scene changed and needs a
    /// redraw, including the final at-rest frame.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }

        if self.sequence.advance(self.increment) == StepResult::Completed {
            self.ticker.stop();
            info!(node = self.sequence.current_index(), "unit step completed");
        }
        true
    }

    /// Draw the current node
    pub fn draw(&self, scene: &SceneRenderer, surface: &mut dyn DrawSurface) {
        self.sequence.draw(scene, surface);
    }
}
