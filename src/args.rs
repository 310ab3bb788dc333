//! Command-line arguments: an input image and an optional output path.

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "output.bin";

/// Parsed command-line arguments.
#[derive(Debug, PartialEq, Eq)]
pub struct CliArgs {
    /// Image to encode.
    pub input: String,
    /// Where to write the raw samples.
    pub output: String,
}

impl CliArgs {
    /// Parse the arguments following the program name. Returns `None` if the input path is
    /// missing. Arguments after the output path are ignored.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Option<Self> {
        let mut args = args.into_iter();
        let input = args.next()?;
        let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

        Some(Self { input, output })
    }

    /// Usage text for `program`.
    pub fn usage(program: &str) -> String {
        format!("Usage: {} <input_filename> [output_filename]", program)
    }
}
