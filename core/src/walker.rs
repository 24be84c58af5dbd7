use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::config::WalkOptions;
use crate::error::ConversionError;
use crate::format::SupportedFormat;
use crate::job::ConversionJob;

/// Enumerates convertible images under a directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct Walker {
    options: WalkOptions,
}

impl Walker {
    pub fn new(options: WalkOptions) -> Self {
        Self { options }
    }

    /// Lazily yield a job for every supported image below `root`.
    ///
    /// Entries are visited depth-first, sorted by file name within each
    /// directory. Unreadable directories and symlink loops are yielded as
    /// errors rather than ending the walk.
    pub fn walk(
        &self,
        root: &Path,
    ) -> Result<impl Iterator<Item = Result<ConversionJob, ConversionError>>, ConversionError> {
        if !root.exists() {
            return Err(ConversionError::PathNotFound(root.to_path_buf()));
        }

        let skip_hidden = self.options.skip_hidden;

        let jobs = WalkDir::new(root)
            .follow_links(self.options.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !(skip_hidden && entry.depth() > 0 && is_hidden(entry)))
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(e) => e,
                    Err(e) => return Some(Err(ConversionError::from(e))),
                };
                if !is_regular_file(&entry) {
                    return None;
                }
                let path = entry.into_path();
                let format = SupportedFormat::from_path(&path)?;
                log::debug!("Found {} image: {}", format.as_str(), path.display());
                Some(Ok(ConversionJob::new(path)))
            });

        Ok(jobs)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Regular files, plus symlinks whose target is a regular file.
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
