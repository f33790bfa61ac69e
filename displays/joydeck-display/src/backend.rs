//! Display backend trait
//!
//! Defines the interface the render stage uses to reach the panel.

use crate::framebuffer::FrameBuffer;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Display not initialized
    NotInitialized,
}

/// Display backend trait
///
/// A backend owns a framebuffer that callers draw into, and knows how to
/// transfer it to the physical panel.
pub trait DisplayBackend {
    /// Mutable access to the framebuffer for drawing
    fn frame(&mut self) -> &mut FrameBuffer;

    /// Send the framebuffer to the display
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Clear the framebuffer (does not touch the panel until `flush`)
    fn clear(&mut self) {
        self.frame().clear();
    }

    /// Get pixel dimensions (width, height)
    fn pixel_dimensions(&mut self) -> (u32, u32) {
        let frame = self.frame();
        (frame.width(), frame.height())
    }
}
