//! # Utilities Module
//!
//! Grid algorithms shared by the simulation: line drawing, field of view and
//! path-finding.

pub mod fov;
pub mod math;
pub mod pathing;

pub use fov::*;
pub use math::*;
pub use pathing::*;
