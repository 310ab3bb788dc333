//! The fixed pulse shapes that make up the sync structure of a PAL signal. Each generator returns a
//! fresh iterator, so the caller decides whether to collect it or stream it into a bigger buffer.

use std::iter::{self, Repeat, Take};
use crate::pal::*;
use crate::types::{SampleValue, Seconds};

/// A run of one signal level.
pub type Level = Take<Repeat<SampleValue>>;

/// Two runs of signal level back to back, e.g. sync tip then blanking.
pub type Pulse = iter::Chain<Level, Level>;

/// A constant signal level lasting `time` seconds.
pub fn level(value: SampleValue, time: Seconds) -> Level {
    level_samples(value, time_to_samples(time))
}

/// A constant signal level lasting `count` samples.
pub fn level_samples(value: SampleValue, count: usize) -> Level {
    iter::repeat(value).take(count)
}

/// Blanking between active video and the horizontal sync.
pub fn front_porch() -> Level {
    level(BLANK_LEVEL, FRONT_PORCH_TIME)
}

/// Blanking between the horizontal sync and active video.
pub fn back_porch() -> Level {
    level(BLANK_LEVEL, BACK_PORCH_TIME)
}

/// The horizontal sync pulse that starts every scanline.
pub fn horiz_sync() -> Level {
    level(SYNC_LEVEL, HORIZ_SYNC_TIME)
}

/// An equalizing pulse, half a line long.
pub fn short_sync() -> Pulse {
    level(SYNC_LEVEL, SHORT_SYNC_TIME)
        .chain(level(BLANK_LEVEL, HALF_LINE_TIME - SHORT_SYNC_TIME))
}

/// A broad vertical sync pulse, half a line long. The blanking gap at the end is the serration
/// that keeps the receiver's horizontal timing locked during vertical sync.
pub fn long_sync() -> Pulse {
    level(SYNC_LEVEL, HALF_LINE_TIME - HORIZ_SYNC_TIME)
        .chain(level(BLANK_LEVEL, HORIZ_SYNC_TIME))
}
