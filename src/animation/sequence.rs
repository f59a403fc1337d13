//! Sweep sequencing
//!
//! Owns the node chain and decides which node animates next. Nodes complete
//! one at a time; at either end of the chain the sweep reverses instead of
//! wrapping.

use tracing::debug;

use crate::render::scene::SceneRenderer;
use crate::render::surface::DrawSurface;

use super::chain::{ChainError, NodeChain, SweepDirection};
use super::state::StepResult;

/// Drives the chain one unit step at a time
#[derive(Debug)]
pub struct SequenceController {
    chain: NodeChain,
    current: usize,
    direction: SweepDirection,
}

impl SequenceController {
    /// Build the controller for a chain of `node_count` nodes
    pub fn new(node_count: usize) -> Result<Self, ChainError> {
        Ok(Self {
            chain: NodeChain::new(node_count)?,
            current: 0,
            direction: SweepDirection::default(),
        })
    }

    /// Index of the node currently animating (or resting)
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Direction the sweep is traveling across the chain
    pub fn direction(&self) -> SweepDirection {
        self.direction
    }

    /// The chain, for state inspection
    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    /// Advance the current node by one tick.
    ///
    /// When the node finishes its unit step, hand control to the neighbor
    /// in the sweep direction; at a chain boundary the direction reverses
    /// and the current node stays put.
    pub fn advance(&mut self, increment: f32) -> StepResult {
        match self.chain.node_mut(self.current).advance(increment) {
            StepResult::Completed => {
                match self.chain.node(self.current).neighbor(self.direction) {
                    Some(next) => self.current = next,
                    None => {
                        self.direction = self.direction.reversed();
                        debug!(current = self.current, "sweep reversed at chain end");
                    }
                }
                StepResult::Completed
            }
            StepResult::Continue => StepResult::Continue,
        }
    }

    /// Arm the current node's next unit step; false while already animating
    pub fn begin_updating(&mut self) -> bool {
        self.chain.node_mut(self.current).begin_updating()
    }

    /// Draw the current node
    pub fn draw(&self, scene: &SceneRenderer, surface: &mut dyn DrawSurface) {
        let node = self.chain.node(self.current);
        scene.draw_node(surface, node.index(), node.state().progress());
    }
}
