//! Render stage
//!
//! Draws the border and the joystick cursor into any monochrome
//! `DrawTarget`. Flushing is left to the caller.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment,
};

use crate::config::PanelTuning;
use crate::input::AnalogSample;
use crate::state::ModeState;

/// Top-left corner of the cursor square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorPosition {
    pub x: u32,
    pub y: u32,
}

impl CursorPosition {
    /// Scale a sample into the drawable area
    ///
    /// Axes are crossed to match how the joystick is mounted: the vertical
    /// axis moves the cursor horizontally, and the horizontal axis moves it
    /// vertically with its direction inverted. The result always lies in
    /// `[0, width - cursor] x [0, height - cursor]`.
    pub fn from_sample(
        sample: AnalogSample,
        width: u32,
        height: u32,
        cursor: u32,
        adc_max: u16,
    ) -> Self {
        let adc_max = adc_max.max(1) as u32;
        let raw_x = (sample.raw_x as u32).min(adc_max);
        let raw_y = (sample.raw_y as u32).min(adc_max);
        let span_x = width.saturating_sub(cursor);
        let span_y = height.saturating_sub(cursor);

        Self {
            x: raw_y * span_x / adc_max,
            y: (adc_max - raw_x) * span_y / adc_max,
        }
    }
}

/// What a render pass produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderReport {
    pub cursor: CursorPosition,
    /// Pause to insert before flushing (thick border only)
    pub hold_ms: u32,
}

/// Draw one frame
///
/// Clears the target, draws a one pixel border around the whole area, an
/// inset second border when `thick_border` is set, and the filled cursor.
pub fn draw_scene<T>(
    target: &mut T,
    mode: &ModeState,
    sample: AnalogSample,
    tuning: &PanelTuning,
) -> Result<RenderReport, T::Error>
where
    T: DrawTarget<Color = BinaryColor>,
{
    let size = target.bounding_box().size;
    target.clear(BinaryColor::Off)?;

    let outline = PrimitiveStyleBuilder::new()
        .stroke_color(BinaryColor::On)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();

    Rectangle::new(Point::zero(), size)
        .into_styled(outline)
        .draw(target)?;

    let hold_ms = if mode.thick_border {
        Rectangle::new(
            Point::new(1, 1),
            Size::new(size.width.saturating_sub(2), size.height.saturating_sub(2)),
        )
        .into_styled(outline)
        .draw(target)?;
        tuning.thick_border_hold_ms
    } else {
        0
    };

    let cursor = CursorPosition::from_sample(
        sample,
        size.width,
        size.height,
        tuning.cursor_size,
        tuning.adc_max,
    );
    Rectangle::new(
        Point::new(cursor.x as i32, cursor.y as i32),
        Size::new_equal(tuning.cursor_size),
    )
    .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
    .draw(target)?;

    Ok(RenderReport { cursor, hold_ms })
}

#[cfg(test)]
mod tests {
    use super::*;
    use joydeck_display::FrameBuffer;
    use proptest::prelude::*;

    const THIN_BORDER: u32 = 2 * 128 + 2 * 62;
    const INSET_BORDER: u32 = 2 * 126 + 2 * 60;

    fn render(mode: &ModeState, sample: AnalogSample) -> (FrameBuffer, RenderReport) {
        let mut fb = FrameBuffer::new();
        let report = draw_scene(&mut fb, mode, sample, &PanelTuning::DEFAULT).unwrap();
        (fb, report)
    }

    #[test]
    fn test_centered_frame() {
        let (fb, report) = render(&ModeState::INITIAL, AnalogSample::CENTERED);
        assert_eq!(report.cursor, CursorPosition { x: 60, y: 27 });
        assert_eq!(report.hold_ms, 0);
        assert_eq!(fb.lit_pixels(), THIN_BORDER + 64);

        assert!(fb.pixel(0, 0) && fb.pixel(127, 63));
        assert!(!fb.pixel(1, 1));
        assert!(fb.pixel(60, 27) && fb.pixel(67, 34));
    }

    #[test]
    fn test_thick_border_adds_inset_and_hold() {
        let mode = ModeState {
            thick_border: true,
            ..ModeState::INITIAL
        };
        let (fb, report) = render(&mode, AnalogSample::CENTERED);
        assert_eq!(report.hold_ms, 150);
        assert_eq!(fb.lit_pixels(), THIN_BORDER + INSET_BORDER + 64);
        assert!(fb.pixel(1, 1) && fb.pixel(126, 62));
        assert!(!fb.pixel(2, 2));
    }

    #[test]
    fn test_previous_frame_cleared() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(30, 30, true);
        draw_scene(
            &mut fb,
            &ModeState::INITIAL,
            AnalogSample::CENTERED,
            &PanelTuning::DEFAULT,
        )
        .unwrap();
        assert!(!fb.pixel(30, 30));
    }

    #[test]
    fn test_axes_crossed() {
        // Y at full scale pushes the cursor right; X at zero pushes it down
        let pos = CursorPosition::from_sample(AnalogSample::new(0, 4095), 128, 64, 8, 4095);
        assert_eq!(pos, CursorPosition { x: 120, y: 56 });

        let pos = CursorPosition::from_sample(AnalogSample::new(4095, 0), 128, 64, 8, 4095);
        assert_eq!(pos, CursorPosition { x: 0, y: 0 });
    }

    proptest! {
        #[test]
        fn prop_cursor_in_bounds(raw_x in 0u16..=4095, raw_y in 0u16..=4095) {
            let sample = AnalogSample::new(raw_x, raw_y);
            let pos = CursorPosition::from_sample(sample, 128, 64, 8, 4095);
            prop_assert!(pos.x <= 120);
            prop_assert!(pos.y <= 56);
        }

        #[test]
        fn prop_cursor_fully_drawn(raw_x in 0u16..=4095, raw_y in 0u16..=4095, thick: bool) {
            let mode = ModeState { thick_border: thick, ..ModeState::INITIAL };
            let (fb, report) = render(&mode, AnalogSample::new(raw_x, raw_y));
            let c = report.cursor;
            prop_assert!(fb.pixel(c.x, c.y));
            prop_assert!(fb.pixel(c.x + 7, c.y + 7));
        }
    }
}
