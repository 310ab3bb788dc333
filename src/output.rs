//! Raw sample dump. The format is what signal generators and SDR tools read directly: one native
//! endian 32-bit float per sample, no header.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use crate::error::Result;
use crate::types::SampleValue;

/// Write `samples` to `writer` as consecutive native endian f32 values.
pub fn write_samples<W: Write>(writer: &mut W, samples: &[SampleValue]) -> Result<()> {
    for sample in samples {
        writer.write_all(&sample.to_ne_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) the file at `path` and dump `samples` into it.
pub fn write_samples_to_path<P: AsRef<Path>>(path: P, samples: &[SampleValue]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_samples(&mut writer, samples)
}
