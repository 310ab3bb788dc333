mod encoder;
mod pulses;

pub use encoder::*;
pub use pulses::*;

use crate::types::{SampleValue, Seconds};

/// The signal level for the sync pulse tips, the floor of the signal.
pub const SYNC_LEVEL: SampleValue = 0.0;

/// The signal level for the porches and the tail of sync pulses.
pub const BLANK_LEVEL: SampleValue = 0.3;

/// The signal level for black picture content. PAL has no setup, so this is the same as blanking.
pub const BLACK_LEVEL: SampleValue = 0.3;

/// The signal level for peak white.
pub const WHITE_LEVEL: SampleValue = 1.0;

/// The sampling clock in hz. This is the BT.601 luma sampling rate, which gives a whole number of
/// samples for each scanline.
pub const PIXEL_CLOCK: Seconds = 13.5e6;

/// The number of scanlines in a PAL frame.
pub const LINE_COUNT: u32 = 625;

/// The number of fields per second.
pub const FIELD_RATE: u32 = 50;

/// The length of time for each scanline in seconds, sync included.
pub const LINE_TIME: Seconds = 64e-6;

/// Half a scanline, the unit the vertical sync and equalizing pulses are built from.
pub const HALF_LINE_TIME: Seconds = LINE_TIME / 2.0;

/// The length of the horizontal sync pulse.
pub const HORIZ_SYNC_TIME: Seconds = 4.7e-6;

/// Blanking between the end of active video and the next horizontal sync.
pub const FRONT_PORCH_TIME: Seconds = 1.65e-6;

/// Blanking between the horizontal sync and the start of active video.
pub const BACK_PORCH_TIME: Seconds = 5.7e-6;

/// The sync part of an equalizing pulse.
pub const SHORT_SYNC_TIME: Seconds = 2.35e-6;

/// The length of the active picture part of a scanline.
pub const ACTIVE_VIDEO_TIME: Seconds = 52e-6;

/// The number of picture samples in each scanline, 52us at the pixel clock.
pub const ACTIVE_SAMPLES: usize = 702;

/// The nominal width of the analog line the source image is mapped across. This is wider than
/// the active samples, so the picture edges fall outside the active area as on a real camera.
pub const SOURCE_WIDTH: u32 = 760;

/// The number of picture lines in the source image, both fields together.
pub const SOURCE_HEIGHT: u32 = 576;

/// The number of blank lines after vertical sync in each field.
pub const BLANK_LINES_PER_FIELD: usize = 17;

/// The number of picture lines in each field.
pub const ACTIVE_LINES_PER_FIELD: usize = SOURCE_HEIGHT as usize / 2;

/// The number of long sync, equalizing and trailing equalizing pulses at each field boundary.
pub const VSYNC_PULSE_COUNT: usize = 5;

/// The number of samples per second in the generated signal. The pixel clock divides evenly into
/// lines, so this comes out at the pixel clock itself.
pub const SAMPLE_RATE: Seconds =
    PIXEL_CLOCK * LINE_TIME * FIELD_RATE as Seconds * LINE_COUNT as Seconds / 2.0;

/// Convert a duration into the nearest whole number of samples at the pixel clock.
pub fn time_to_samples(time: Seconds) -> usize {
    (time * PIXEL_CLOCK).round() as usize
}
