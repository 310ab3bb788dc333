mod args;
mod error;
mod output;
mod pal;
mod types;

use std::env;
use std::error::Error;
use log::info;
use crate::args::CliArgs;
use crate::pal::*;
use crate::types::Seconds;

/// Encode a still image as one frame of PAL baseband video.
fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();

    let mut argv = env::args();
    let program = argv.next().unwrap_or_else(|| "pal-encoder".to_string());
    let Some(args) = CliArgs::parse(argv) else {
        eprintln!("{}", CliArgs::usage(&program));
        return Ok(());
    };

    // Load image.
    let encoder = PalEncoder::from_image_buf(&std::fs::read(&args.input)?)?;
    let (width, height) = encoder.dimensions();
    info!("Loaded {} ({}x{})", args.input, width, height);

    let frame = encoder.encode_frame();
    output::write_samples_to_path(&args.output, &frame)?;

    info!(
        "Wrote {} samples ({:.2} ms at {} samples/s) to {}",
        frame.len(),
        frame.len() as Seconds / SAMPLE_RATE * 1e3,
        SAMPLE_RATE,
        args.output
    );

    Ok(())
}
