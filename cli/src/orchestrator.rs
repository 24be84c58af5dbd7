use std::path::{Path, PathBuf};

use indicatif::ProgressBar;

use heic_compressor_core::converter::Converter;
use heic_compressor_core::error::ConversionError;
use heic_compressor_core::job::ConversionJob;
use heic_compressor_core::walker::Walker;

use crate::prompt::clean_path_input;
use crate::report::{FileResult, Report};

/// What happens to the rest of a batch after one file fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchMode {
    /// Record the failure and keep converting
    #[default]
    Continue,
    /// Abort the run with the first error
    FailFast,
}

#[derive(Debug)]
pub enum Outcome {
    /// The path did not exist; nothing was touched.
    NotFound(PathBuf),
    Completed(Report),
}

/// Routes a user-supplied path to a single conversion or a directory batch.
pub struct Orchestrator {
    converter: Converter,
    walker: Walker,
    mode: BatchMode,
    progress: ProgressBar,
}

impl Orchestrator {
    pub fn new(converter: Converter, walker: Walker, mode: BatchMode) -> Self {
        Self {
            converter,
            walker,
            mode,
            progress: ProgressBar::hidden(),
        }
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    pub fn converter_mut(&mut self) -> &mut Converter {
        &mut self.converter
    }

    /// Convert the file, or every supported image under the directory, named by `raw_input`.
    ///
    /// In [`BatchMode::FailFast`] the first conversion error is returned;
    /// otherwise failures are collected in the report.
    pub fn run(&self, raw_input: &str) -> Result<Outcome, ConversionError> {
        let path = PathBuf::from(clean_path_input(raw_input));

        if !path.exists() {
            self.say(format!("Path does not exist: {}", path.display()));
            self.progress.finish_and_clear();
            return Ok(Outcome::NotFound(path));
        }

        let mut report = Report::new();

        if path.is_file() {
            self.say(format!("Processing file: {}", path.display()));
            self.process(ConversionJob::new(&path), &mut report)?;
        } else if path.is_dir() {
            self.say(format!("Processing directory: {}", path.display()));
            self.process_directory(&path, &mut report)?;
        } else {
            log::warn!("{} is neither a file nor a directory", path.display());
        }

        self.progress.finish_and_clear();
        Ok(Outcome::Completed(report))
    }

    fn process_directory(&self, root: &Path, report: &mut Report) -> Result<(), ConversionError> {
        for job in self.walker.walk(root)? {
            match job {
                Ok(job) => self.process(job, report)?,
                Err(e) => {
                    let path = match &e {
                        ConversionError::WalkDir(walk_err) => walk_err
                            .path()
                            .map(Path::to_path_buf)
                            .unwrap_or_else(|| root.to_path_buf()),
                        _ => root.to_path_buf(),
                    };
                    self.fail(path.clone(), path, e, report)?;
                }
            }
        }
        Ok(())
    }

    fn process(&self, job: ConversionJob, report: &mut Report) -> Result<(), ConversionError> {
        if let Some(name) = job.input().file_name() {
            self.progress.set_message(name.to_string_lossy().into_owned());
        }

        match self.converter.convert(&job) {
            Ok(stats) => {
                let result = FileResult::success(&job, &stats);
                self.say(format!(
                    "Compressed: {} -> {} ({:.1}% smaller)",
                    job.input().display(),
                    job.output().display(),
                    result.savings_pct()
                ));
                report.add(result);
            }
            Err(e) => {
                self.fail(job.input().to_path_buf(), job.output().to_path_buf(), e, report)?;
            }
        }

        self.progress.inc(1);
        Ok(())
    }

    fn fail(
        &self,
        input: PathBuf,
        output: PathBuf,
        error: ConversionError,
        report: &mut Report,
    ) -> Result<(), ConversionError> {
        log::error!("Error converting {}: {}", input.display(), error);
        self.say(format!("Failed: {}: {}", input.display(), error));

        if self.mode == BatchMode::FailFast {
            self.progress.abandon();
            return Err(error);
        }

        report.add(FileResult::failure(input, output, error));
        Ok(())
    }

    fn say(&self, line: String) {
        self.progress.suspend(|| println!("{}", line));
    }
}
