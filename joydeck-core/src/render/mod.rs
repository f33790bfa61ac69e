//! Render stage
//!
//! Draws one frame (border, optional inset border, cursor) into any
//! `embedded-graphics` target. Flushing is left to the control loop.

mod scene;

pub use scene::{draw_scene, CursorPosition, RenderReport};
