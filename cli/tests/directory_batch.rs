use std::fs;
use std::path::Path;

use image::{DynamicImage, Rgb, RgbImage};

use heic_compressor::orchestrator::{BatchMode, Orchestrator, Outcome};
use heic_compressor_core::codec::{HeifCodec, ImageCodec};
use heic_compressor_core::config::{CompressionSettings, WalkOptions};
use heic_compressor_core::converter::Converter;
use heic_compressor_core::error::ConversionError;
use heic_compressor_core::walker::Walker;

/// Real decoder, PNG output, so the batch can run without an HEVC encoder.
struct PngOutCodec(HeifCodec);

impl ImageCodec for PngOutCodec {
    fn decode(&self, path: &Path) -> Result<DynamicImage, ConversionError> {
        self.0.decode(path)
    }

    fn encode(
        &self,
        image: &DynamicImage,
        path: &Path,
        _settings: &CompressionSettings,
    ) -> Result<(), ConversionError> {
        image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| ConversionError::Encode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }
}

fn build_tree(root: &Path) {
    fs::create_dir_all(root.join("sub")).unwrap();
    let img = RgbImage::from_pixel(4, 4, Rgb([120, 60, 30]));
    img.save_with_format(root.join("a.jpg"), image::ImageFormat::Jpeg)
        .unwrap();
    img.save_with_format(root.join("b.png"), image::ImageFormat::Png)
        .unwrap();
    img.save_with_format(root.join("sub/d.jpeg"), image::ImageFormat::Jpeg)
        .unwrap();
    fs::write(root.join("c.txt"), b"leave me alone").unwrap();
}

fn run_batch(converter: Converter, root: &Path) -> Outcome {
    Orchestrator::new(converter, Walker::new(WalkOptions::default()), BatchMode::Continue)
        .run(root.to_str().unwrap())
        .unwrap()
}

#[test]
fn converts_every_supported_image_in_tree() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("root");
    build_tree(&root);

    let converter = Converter::with_codec(
        Box::new(PngOutCodec(HeifCodec::new())),
        CompressionSettings::default(),
    );
    let report = match run_batch(converter, &root) {
        Outcome::Completed(report) => report,
        Outcome::NotFound(p) => panic!("not found: {}", p.display()),
    };

    assert_eq!(report.success_count(), 3);
    assert_eq!(report.error_count(), 0);
    for out in ["a.heic", "b.heic", "sub/d.heic"] {
        assert!(root.join(out).is_file(), "missing {out}");
    }
    assert!(!root.join("c.heic").exists());
    assert_eq!(fs::read(root.join("c.txt")).unwrap(), b"leave me alone");
}

#[test]
fn rerunning_batch_overwrites_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("root");
    build_tree(&root);

    for _ in 0..2 {
        let converter = Converter::with_codec(
            Box::new(PngOutCodec(HeifCodec::new())),
            CompressionSettings::default(),
        );
        match run_batch(converter, &root) {
            Outcome::Completed(report) => assert_eq!(report.success_count(), 3),
            Outcome::NotFound(p) => panic!("not found: {}", p.display()),
        }
    }
}

#[test]
fn converts_tree_to_real_heif() {
    let codec = HeifCodec::new();
    if !codec.encoder_available() {
        eprintln!("skipping: libheif has no HEVC encoder");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("root");
    build_tree(&root);

    let report = match run_batch(Converter::default(), &root) {
        Outcome::Completed(report) => report,
        Outcome::NotFound(p) => panic!("not found: {}", p.display()),
    };
    assert_eq!(report.success_count(), 3);

    for out in ["a.heic", "b.heic", "sub/d.heic"] {
        assert_eq!(codec.probe(&root.join(out)).unwrap(), (4, 4));
    }
}

#[test]
fn missing_root_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    match run_batch(Converter::default(), &missing) {
        Outcome::NotFound(p) => assert_eq!(p, missing),
        Outcome::Completed(_) => panic!("expected NotFound"),
    }
}
