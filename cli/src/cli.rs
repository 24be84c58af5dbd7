use clap::Parser;

use heic_compressor_core::config::{CompressionSettings, WalkOptions, DEFAULT_QUALITY};

use crate::orchestrator::BatchMode;

/// Compress JPEG/PNG images into HEIC, for a single file or a whole directory tree
#[derive(Debug, Parser)]
#[command(name = "heic_compressor", version, about)]
pub struct Cli {
    /// File or directory to compress (asked for interactively when omitted)
    pub path: Option<String>,

    /// HEIF encoder quality, 0–100 (not checked locally, the encoder decides)
    #[arg(short, long, default_value_t = DEFAULT_QUALITY)]
    pub quality: u8,

    /// Encode losslessly, ignoring --quality
    #[arg(long)]
    pub lossless: bool,

    /// Stop the batch at the first file that fails
    #[arg(long)]
    pub fail_fast: bool,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_links: bool,

    /// Skip files and directories whose name starts with '.'
    #[arg(long)]
    pub skip_hidden: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_settings(&self) -> CompressionSettings {
        CompressionSettings::new(self.quality).with_lossless(self.lossless)
    }

    pub fn to_walk_options(&self) -> WalkOptions {
        WalkOptions {
            follow_links: self.follow_links,
            skip_hidden: self.skip_hidden,
        }
    }

    pub fn batch_mode(&self) -> BatchMode {
        if self.fail_fast {
            BatchMode::FailFast
        } else {
            BatchMode::Continue
        }
    }
}
