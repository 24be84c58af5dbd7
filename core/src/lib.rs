//! Conversion of JPEG and PNG images to HEIC.
//!
//! A [`Walker`](walker::Walker) finds images below a directory, each becomes a
//! [`ConversionJob`](job::ConversionJob), and a [`Converter`](converter::Converter)
//! decodes it and hands it to an [`ImageCodec`](codec::ImageCodec) for HEIF encoding.

pub mod codec;
pub mod config;
pub mod converter;
pub mod error;
pub mod format;
pub mod job;
pub mod walker;
