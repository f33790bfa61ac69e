//! Control loop and panel coordination
//!
//! [`Panel`] owns everything the buttons can change. [`ControlLoop`] owns
//! the ADC and the display and steps through one frame at a time, reaching
//! the panel only through [`PanelHandle`].

mod cycle;
mod panel;

pub use cycle::{ControlLoop, Stage, Step};
pub use panel::{Panel, PanelHandle};
