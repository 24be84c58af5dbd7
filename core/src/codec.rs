use std::fs;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageReader};
use libheif_rs::{
    Channel, ColorSpace, CompressionFormat, EncoderQuality, HeifContext, Image, LibHeif, RgbChroma,
};

use crate::config::CompressionSettings;
use crate::error::ConversionError;

/// The external codec a [`Converter`](crate::converter::Converter) delegates to.
pub trait ImageCodec {
    /// Decode the whole image at `path` into memory.
    fn decode(&self, path: &Path) -> Result<DynamicImage, ConversionError>;

    /// Encode `image` as HEIF and write it to `path`, replacing any existing file.
    fn encode(
        &self,
        image: &DynamicImage,
        path: &Path,
        settings: &CompressionSettings,
    ) -> Result<(), ConversionError>;
}

/// Decodes with the `image` crate and encodes HEVC-compressed HEIF via libheif.
pub struct HeifCodec {
    lib_heif: LibHeif,
}

impl HeifCodec {
    pub fn new() -> Self {
        Self {
            lib_heif: LibHeif::new(),
        }
    }

    /// Whether libheif was built with an HEVC encoder plugin.
    pub fn encoder_available(&self) -> bool {
        self.lib_heif
            .encoder_for_format(CompressionFormat::Hevc)
            .is_ok()
    }

    /// Read a HEIF file back and return the primary image's dimensions.
    pub fn probe(&self, path: &Path) -> Result<(u32, u32), ConversionError> {
        let data = fs::read(path).map_err(|e| ConversionError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let decode_err = |e: libheif_rs::HeifError| ConversionError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        let ctx = HeifContext::read_from_bytes(&data).map_err(decode_err)?;
        let handle = ctx.primary_image_handle().map_err(decode_err)?;
        Ok((handle.width(), handle.height()))
    }

    fn encode_to_bytes(
        &self,
        img: &DynamicImage,
        settings: &CompressionSettings,
    ) -> Result<Vec<u8>, libheif_rs::HeifError> {
        let (width, height) = img.dimensions();

        let (raw, chroma, channels) = if img.color().has_alpha() {
            (img.to_rgba8().into_raw(), RgbChroma::Rgba, 4)
        } else {
            (img.to_rgb8().into_raw(), RgbChroma::Rgb, 3)
        };

        let mut image = Image::new(width, height, ColorSpace::Rgb(chroma))?;
        image.create_plane(Channel::Interleaved, width, height, 8)?;

        {
            let planes = image.planes_mut();
            if let Some(plane) = planes.interleaved {
                let row_bytes = width as usize * channels;
                for (y, row) in raw.chunks_exact(row_bytes).enumerate() {
                    let start = y * plane.stride;
                    plane.data[start..start + row_bytes].copy_from_slice(row);
                }
            }
        }

        let mut encoder = self.lib_heif.encoder_for_format(CompressionFormat::Hevc)?;
        let quality = if settings.lossless() {
            EncoderQuality::LossLess
        } else {
            EncoderQuality::Lossy(settings.quality())
        };
        encoder.set_quality(quality)?;

        let mut context = HeifContext::new()?;
        context.encode_image(&image, &mut encoder, None)?;
        context.write_to_bytes()
    }
}

impl Default for HeifCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCodec for HeifCodec {
    fn decode(&self, path: &Path) -> Result<DynamicImage, ConversionError> {
        let reader = ImageReader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| ConversionError::ReadFile {
                path: path.to_path_buf(),
                source: e,
            })?;

        reader.decode().map_err(|e| ConversionError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn encode(
        &self,
        image: &DynamicImage,
        path: &Path,
        settings: &CompressionSettings,
    ) -> Result<(), ConversionError> {
        let encoded = self
            .encode_to_bytes(image, settings)
            .map_err(|e| ConversionError::Encode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        log::debug!("Encoded {} bytes of HEIF for {}", encoded.len(), path.display());

        fs::write(path, &encoded).map_err(|e| ConversionError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
