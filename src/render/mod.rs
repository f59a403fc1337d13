//! Render module
//!
//! Contains the sub-phase scale math, the drawing surface abstraction and
//! the scene renderer.

pub mod scale;
pub mod scene;
pub mod surface;

pub use scene::SceneRenderer;
pub use surface::{DrawSurface, PainterSurface};
