use std::io::Cursor;
use image::RgbImage;
use log::{debug, warn};
use crate::error::{PalError, Result};
use crate::pal::*;
use crate::types::{PixelSample, SampleValue, SignalFloat};

/// One of the two interlaced fields of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Carries the even source rows.
    First,
    /// Carries the odd source rows, starting half a line later than the first field.
    Second,
}

impl Field {
    /// The source rows this field carries, top to bottom.
    pub fn rows(self) -> impl Iterator<Item = u32> {
        let first_row = match self {
            Field::First => 0,
            Field::Second => 1,
        };
        (first_row..SOURCE_HEIGHT).step_by(2)
    }
}

/// The number of samples in a full scanline, blank or active.
pub fn line_len() -> usize {
    debug_assert_eq!(time_to_samples(ACTIVE_VIDEO_TIME), ACTIVE_SAMPLES);

    time_to_samples(HORIZ_SYNC_TIME)
        + time_to_samples(BACK_PORCH_TIME)
        + ACTIVE_SAMPLES
        + time_to_samples(FRONT_PORCH_TIME)
}

/// The number of samples in one field.
pub fn field_len(field: Field) -> usize {
    let half_line = time_to_samples(HALF_LINE_TIME);
    let sync_pulses = 3 * VSYNC_PULSE_COUNT * half_line;
    let lines = (BLANK_LINES_PER_FIELD + ACTIVE_LINES_PER_FIELD) * line_len();

    match field {
        Field::First => sync_pulses + lines,
        Field::Second => sync_pulses + half_line + lines + half_line_len(),
    }
}

/// The number of samples in a full frame, which is what the encoder allocates up front.
pub fn frame_len() -> usize {
    field_len(Field::First) + field_len(Field::Second)
}

/// The length of the half line that ends the second field.
fn half_line_len() -> usize {
    time_to_samples(HORIZ_SYNC_TIME)
        + time_to_samples(BACK_PORCH_TIME)
        + time_to_samples(HALF_LINE_TIME - HORIZ_SYNC_TIME - BACK_PORCH_TIME)
}

/// The PAL encoder, turns a still image into one interlaced frame of baseband signal.
pub struct PalEncoder {
    width: u32,
    height: u32,
    pixel_buffer: Vec<u8>,
}

impl PalEncoder {
    /// Create a PAL encoder from an encoded image file held in memory. Any format the image crate
    /// can guess is accepted.
    pub fn from_image_buf(buf: &[u8]) -> Result<Self> {
        // Load image and convert to rgb8 pixel buffer.
        let img = image::io::Reader::new(Cursor::new(buf))
            .with_guessed_format()?
            .decode()?
            .into_rgb8();

        Self::from_rgb(img)
    }

    /// Create a PAL encoder from decoded pixels. The image must cover the full 760x576 sampling
    /// grid; anything beyond it is ignored.
    pub fn from_rgb(img: RgbImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        if width < SOURCE_WIDTH || height < SOURCE_HEIGHT {
            return Err(PalError::ImageTooSmall {
                width,
                height,
                min_width: SOURCE_WIDTH,
                min_height: SOURCE_HEIGHT,
            });
        }
        if width > SOURCE_WIDTH || height > SOURCE_HEIGHT {
            warn!(
                "Source image is {}x{}, only the top left {}x{} will be encoded",
                width, height, SOURCE_WIDTH, SOURCE_HEIGHT
            );
        }

        Ok(Self {
            width,
            height,
            pixel_buffer: img.into_raw(),
        })
    }

    /// The source image dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Generate the whole frame: the first field followed by the second.
    pub fn encode_frame(&self) -> Vec<SampleValue> {
        let mut frame = Vec::with_capacity(frame_len());

        for field in [Field::First, Field::Second] {
            let start = frame.len();
            self.encode_field(field, &mut frame);
            debug!("{:?} field: {} samples", field, frame.len() - start);
        }

        debug_assert_eq!(frame.len(), frame_len());
        frame
    }

    /// Append one field to `frame`.
    fn encode_field(&self, field: Field, frame: &mut Vec<SampleValue>) {
        // Vertical sync, then the post-equalizing pulses.
        for _ in 0..VSYNC_PULSE_COUNT {
            frame.extend(long_sync());
        }
        for _ in 0..VSYNC_PULSE_COUNT {
            frame.extend(short_sync());
        }

        // Interlace offset.
        if field == Field::Second {
            frame.extend(level(BLACK_LEVEL, HALF_LINE_TIME));
        }

        for _ in 0..BLANK_LINES_PER_FIELD {
            frame.extend(Self::blank_line());
        }
        for row in field.rows() {
            frame.extend(self.active_line(row));
        }

        // The second field's last line is cut short by the next vertical sync.
        if field == Field::Second {
            frame.extend(horiz_sync());
            frame.extend(back_porch());
            frame.extend(level(BLACK_LEVEL, HALF_LINE_TIME - HORIZ_SYNC_TIME - BACK_PORCH_TIME));
        }

        // Pre-equalizing pulses for the next field.
        for _ in 0..VSYNC_PULSE_COUNT {
            frame.extend(short_sync());
        }
    }

    /// A scanline with no picture, black for its whole active period.
    pub fn blank_line() -> impl Iterator<Item = SampleValue> {
        horiz_sync()
            .chain(back_porch())
            .chain(level_samples(BLACK_LEVEL, ACTIVE_SAMPLES))
            .chain(front_porch())
    }

    /// A scanline carrying source row `row`.
    ///
    /// Panics if `row` is outside the 576 source rows.
    pub fn active_line(&self, row: u32) -> impl Iterator<Item = SampleValue> + '_ {
        assert!(row < SOURCE_HEIGHT, "source row {} out of range", row);

        horiz_sync()
            .chain(back_porch())
            .chain((0..ACTIVE_SAMPLES).map(move |column| self.sample_video(column, row)))
            .chain(front_porch())
    }

    /// Sample the picture at active sample `column` of source row `row`, scaled between black and
    /// white level.
    pub fn sample_video(&self, column: usize, row: u32) -> SampleValue {
        let luma = Self::rgb_to_luma(self.sample_pixel(Self::source_column(column), row));

        BLACK_LEVEL * (1.0 - luma) + WHITE_LEVEL * luma
    }

    /// Map an active sample to a source image column. The 702 active samples are spread across
    /// the 760 columns of the nominal line and the fractional position is truncated.
    fn source_column(column: usize) -> u32 {
        (column as f64 / ACTIVE_SAMPLES as f64 * SOURCE_WIDTH as f64) as u32
    }

    /// Sample a pixel by coordinate. Construction guarantees the sampling grid is in bounds.
    fn sample_pixel(&self, x: u32, y: u32) -> PixelSample {
        let idx = (y * self.width + x) as usize * 3;
        let pixel = &self.pixel_buffer[idx..idx + 3];
        (pixel[0], pixel[1], pixel[2])
    }

    /// Convert from rgb to luma in the range 0 to 1.
    fn rgb_to_luma((r, g, b): PixelSample) -> SignalFloat {
        // 0.3 R + 0.59 G + 0.11 B, weighted in hundredths so full white is exactly 1.
        let weighted = 30 * r as u32 + 59 * g as u32 + 11 * b as u32;
        weighted as SignalFloat / (100.0 * 255.0)
    }
}
