/// Errors that can end a conversion.
#[derive(thiserror::Error, Debug)]
pub enum PalError {
    /// The input could not be decoded as an image.
    #[error("image decode error: {0}")]
    Image(#[from] image::ImageError),

    /// Reading the input or writing the output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source image doesn't cover the sampling grid.
    #[error("source image is {width}x{height}, need at least {min_width}x{min_height}")]
    ImageTooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
}

pub type Result<T> = std::result::Result<T, PalError>;
