use clap::{Parser, ValueEnum};
use snail_core::DEFAULT_SIDE;
use snail_rendering::{JsonBackend, RenderingBackend, TextBackend};

/// Command-line options accepted by the `snail` binary.
#[derive(Parser, Debug)]
#[command(name = "snail", version)]
#[command(about = "Print a snail matrix to standard output", long_about = None)]
pub(crate) struct Args {
    /// Create an NxN snail matrix.
    #[arg(
        short = 'n',
        long = "size",
        value_name = "N",
        env = "SNAIL_SIZE",
        default_value_t = i64::from(DEFAULT_SIDE),
        allow_negative_numbers = true
    )]
    pub(crate) size: i64,

    /// Output format written to standard output.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

/// Output formats offered on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Right-aligned columns, one row per line.
    Text,
    /// Single-line JSON document with the side length and rows.
    Json,
}

impl OutputFormat {
    /// Rendering backend implementing the format.
    pub(crate) fn backend(self) -> Box<dyn RenderingBackend> {
        match self {
            Self::Text => Box::new(TextBackend),
            Self::Json => Box::new(JsonBackend),
        }
    }
}
