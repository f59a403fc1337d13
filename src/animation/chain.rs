//! Node chain
//!
//! Fixed linear chain of animation nodes, one per palette color. The chain
//! is stored as an arena indexed 0..len-1 with explicit neighbor indices,
//! built once at construction.

use thiserror::Error;

use super::state::{AnimationState, StepResult};

/// Chain construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    /// The palette was empty, so there is nothing to animate
    #[error("animation chain requires at least one node")]
    Empty,
}

/// Traversal direction across the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepDirection {
    #[default]
    Forward,
    Backward,
}

impl SweepDirection {
    /// The opposite direction
    pub fn reversed(self) -> Self {
        match self {
            SweepDirection::Forward => SweepDirection::Backward,
            SweepDirection::Backward => SweepDirection::Forward,
        }
    }
}

/// One animatable unit in the chain
#[derive(Debug)]
pub struct ChainNode {
    index: usize,
    prev: Option<usize>,
    next: Option<usize>,
    state: AnimationState,
}

impl ChainNode {
    /// Palette index this node renders with
    pub fn index(&self) -> usize {
        self.index
    }

    /// The node's progress state
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Advance this node's state by one tick
    pub fn advance(&mut self, increment: f32) -> StepResult {
        self.state.advance(increment)
    }

    /// Arm this node's next unit step; false while already animating
    pub fn begin_updating(&mut self) -> bool {
        self.state.begin_updating()
    }

    /// Index of the neighbor in the given direction, or None at a boundary
    pub fn neighbor(&self, direction: SweepDirection) -> Option<usize> {
        match direction {
            SweepDirection::Forward => self.next,
            SweepDirection::Backward => self.prev,
        }
    }
}

/// Arena holding the full chain
#[derive(Debug)]
pub struct NodeChain {
    nodes: Vec<ChainNode>,
}

impl NodeChain {
    /// Build a linear chain of `len` nodes.
    ///
    /// Rejects an empty chain: neighbor and draw logic assume at least one
    /// node exists.
    pub fn new(len: usize) -> Result<Self, ChainError> {
        if len == 0 {
            return Err(ChainError::Empty);
        }

        let nodes = (0..len)
            .map(|index| ChainNode {
                index,
                prev: index.checked_sub(1),
                next: (index + 1 < len).then_some(index + 1),
                state: AnimationState::default(),
            })
            .collect();

        Ok(Self { nodes })
    }

    /// Number of nodes in the chain
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Shared access to a node
    pub fn node(&self, index: usize) -> &ChainNode {
        &self.nodes[index]
    }

    /// Mutable access to a node
    pub fn node_mut(&mut self, index: usize) -> &mut ChainNode {
        &mut self.nodes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain_rejected() {
        assert_eq!(NodeChain::new(0).unwrap_err(), ChainError::Empty);
    }

    #[test]
    fn test_chain_links() {
        let chain = NodeChain::new(3).unwrap();
        assert_eq!(chain.len(), 3);

        assert_eq!(chain.node(0).neighbor(SweepDirection::Backward), None);
        assert_eq!(chain.node(0).neighbor(SweepDirection::Forward), Some(1));
        assert_eq!(chain.node(1).neighbor(SweepDirection::Backward), Some(0));
        assert_eq!(chain.node(1).neighbor(SweepDirection::Forward), Some(2));
        assert_eq!(chain.node(2).neighbor(SweepDirection::Forward), None);
    }

    #[test]
    fn test_single_node_chain_has_no_neighbors() {
        let chain = NodeChain::new(1).unwrap();
        assert_eq!(chain.node(0).neighbor(SweepDirection::Forward), None);
        assert_eq!(chain.node(0).neighbor(SweepDirection::Backward), None);
    }

    #[test]
    fn test_sweep_direction_reversed() {
        assert_eq!(SweepDirection::Forward.reversed(), SweepDirection::Backward);
        assert_eq!(SweepDirection::Backward.reversed(), SweepDirection::Forward);
    }
}
