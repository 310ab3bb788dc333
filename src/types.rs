/// The floating point type for signal levels. Samples are written out as 32-bit floats, so there
/// is no point carrying more precision than that through the generators.
pub type SignalFloat = f32;

/// A span of time in seconds. Kept at f64 so that sub-microsecond timings convert to exact sample
/// counts at the pixel clock.
pub type Seconds = f64;

/// The value of a sample from the signal.
pub type SampleValue = SignalFloat;

/// The type for an rgb pixel sample.
pub type PixelSample = (u8, u8, u8);

