/// Quality used when nothing else is configured.
pub const DEFAULT_QUALITY: u8 = 50;

/// Encoder settings applied to every conversion.
///
/// `quality` is not range-checked here; values the encoder rejects come back
/// as [`ConversionError::Encode`](crate::error::ConversionError::Encode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionSettings {
    quality: u8,
    lossless: bool,
}

impl CompressionSettings {
    pub fn new(quality: u8) -> Self {
        Self {
            quality,
            lossless: false,
        }
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    pub fn set_quality(&mut self, quality: u8) {
        self.quality = quality;
    }

    /// Whether the encoder runs in lossless mode (quality is ignored).
    pub fn lossless(&self) -> bool {
        self.lossless
    }

    pub fn set_lossless(&mut self, lossless: bool) {
        self.lossless = lossless;
    }

    pub fn with_lossless(mut self, lossless: bool) -> Self {
        self.lossless = lossless;
        self
    }
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self::new(DEFAULT_QUALITY)
    }
}

/// Directory traversal policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Descend into symlinked directories
    pub follow_links: bool,
    /// Prune files and directories whose name starts with `.`
    pub skip_hidden: bool,
}
