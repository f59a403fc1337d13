//! Configuration module
//!
//! Contains the scene configuration data structure.

mod scene_config;

pub use scene_config::*;
