use std::path::{Path, PathBuf};

use crate::format::OUTPUT_EXTENSION;

/// One unit of work: an input image and the `.heic` file written next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    input: PathBuf,
    output: PathBuf,
}

impl ConversionJob {
    /// Build a job whose output is the input with its extension replaced by `.heic`.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = input.with_extension(OUTPUT_EXTENSION);
        Self { input, output }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}
