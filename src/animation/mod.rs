//! Animation module
//!
//! Contains the animation state engine: per-node progress state, tick
//! pacing, the node chain, sweep sequencing and the render coordinator.

pub mod chain;
pub mod coordinator;
pub mod sequence;
pub mod state;
pub mod ticker;

pub use chain::{ChainError, NodeChain, SweepDirection};
pub use coordinator::RenderCoordinator;
pub use sequence::SequenceController;
pub use state::{AnimationState, StepResult};
pub use ticker::Ticker;
