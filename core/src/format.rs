use std::path::Path;

/// Extension written for every converted image.
pub const OUTPUT_EXTENSION: &str = "heic";

/// Input formats picked up when walking a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedFormat {
    Jpg,
    Png,
}

impl SupportedFormat {
    /// Suffix match on the file name, ignoring case. No dot is required, so
    /// `photojpg` and a bare `.png` both count.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        if name.ends_with("jpg") || name.ends_with("jpeg") {
            Some(SupportedFormat::Jpg)
        } else if name.ends_with("png") {
            Some(SupportedFormat::Png)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedFormat::Jpg => "JPEG",
            SupportedFormat::Png => "PNG",
        }
    }
}
