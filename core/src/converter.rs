use std::fs;
use std::path::Path;

use image::GenericImageView;

use crate::codec::{HeifCodec, ImageCodec};
use crate::config::CompressionSettings;
use crate::error::ConversionError;
use crate::job::ConversionJob;

/// Sizes and dimensions of one finished conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionStats {
    pub width: u32,
    pub height: u32,
    pub original_size: u64,
    pub converted_size: u64,
}

/// Converts single jobs to HEIF using the configured settings.
pub struct Converter {
    codec: Box<dyn ImageCodec>,
    settings: CompressionSettings,
}

impl Converter {
    pub fn new(settings: CompressionSettings) -> Self {
        Self::with_codec(Box::new(HeifCodec::new()), settings)
    }

    pub fn with_codec(codec: Box<dyn ImageCodec>, settings: CompressionSettings) -> Self {
        Self { codec, settings }
    }

    pub fn settings(&self) -> &CompressionSettings {
        &self.settings
    }

    pub fn quality(&self) -> u8 {
        self.settings.quality()
    }

    pub fn set_quality(&mut self, quality: u8) {
        self.settings.set_quality(quality);
    }

    pub fn set_lossless(&mut self, lossless: bool) {
        self.settings.set_lossless(lossless);
    }

    /// Decode the job's input and write it as HEIF to the job's output.
    ///
    /// An existing file at the output path is overwritten.
    pub fn convert(&self, job: &ConversionJob) -> Result<ConversionStats, ConversionError> {
        let original_size = file_size(job.input()).map_err(|e| ConversionError::ReadFile {
            path: job.input().to_path_buf(),
            source: e,
        })?;

        let img = self.codec.decode(job.input())?;
        let (width, height) = img.dimensions();

        log::debug!(
            "Decoded {}: {}x{} pixels, {} bytes",
            job.input().display(),
            width,
            height,
            original_size
        );

        self.codec.encode(&img, job.output(), &self.settings)?;

        let converted_size = file_size(job.output()).map_err(|e| ConversionError::WriteFile {
            path: job.output().to_path_buf(),
            source: e,
        })?;

        log::info!(
            "Compressed: {} -> {}",
            job.input().display(),
            job.output().display()
        );

        Ok(ConversionStats {
            width,
            height,
            original_size,
            converted_size,
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(CompressionSettings::default())
    }
}

fn file_size(path: &Path) -> std::io::Result<u64> {
    fs::metadata(path).map(|m| m.len())
}
