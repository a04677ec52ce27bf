use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::app_config::Config;
use crate::document::StjDocument;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::renderers::OutputFormat;
use crate::validation::{JsonSchemaValidator, ValidationService};

// @module: Application controller for STJ validation and conversion

/// Outcome of validating every STJ file in a folder
#[derive(Debug, Default)]
pub struct FolderReport {
    /// Files that passed validation
    pub passed: Vec<PathBuf>,
    /// Files that failed, with the diagnostic
    pub failed: Vec<(PathBuf, String)>,
}

impl FolderReport {
    pub fn total(&self) -> usize {
        self.passed.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Shared validation engine
    service: ValidationService,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let mut service = ValidationService::with_config(config.validation.clone());

        if config.validation.schema_check {
            match &config.schema_path {
                Some(schema_path) => {
                    let schema = JsonSchemaValidator::from_file(schema_path)?;
                    info!("Loaded schema from {}", schema_path);
                    service = service.with_schema(Arc::new(schema));
                }
                None => debug!("No schema path configured"),
            }
        }

        Ok(Self { config, service })
    }

    /// Validate a single STJ file
    pub fn validate_file<P: AsRef<Path>>(&self, input_file: P) -> Result<StjDocument, AppError> {
        let input_file = input_file.as_ref();
        debug!("Validating {:?}", input_file);

        let document = FileManager::load_json(input_file)?;
        let stj = self.service.validate_document(&document)?;

        info!(
            "{:?}: {} segment(s), {} speaker(s)",
            input_file,
            stj.transcript.segments.len(),
            stj.transcript.speakers.len()
        );
        Ok(stj)
    }

    /// Validate every STJ file under a directory
    pub fn run_folder<P: AsRef<Path>>(&self, input_dir: P) -> Result<FolderReport> {
        let start_time = Instant::now();
        let input_dir = input_dir.as_ref();

        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let stj_files = FileManager::find_stj_files(input_dir)?;
        if stj_files.is_empty() {
            return Err(anyhow!("No STJ files found in directory: {:?}", input_dir));
        }

        let folder_pb = ProgressBar::new(stj_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{bar:40}] {pos}/{len} {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));

        let mut report = FolderReport::default();

        for stj_file in stj_files {
            let file_name = stj_file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Validating: {}", file_name));

            match self.validate_file(&stj_file) {
                Ok(_) => report.passed.push(stj_file),
                Err(e) => {
                    error!("{}: {}", file_name, e);
                    report.failed.push((stj_file, e.to_string()));
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder validation complete");

        info!(
            "Folder validation completed: {} passed, {} failed in {:.2?}",
            report.passed.len(),
            report.failed.len(),
            start_time.elapsed()
        );

        Ok(report)
    }

    /// Validate an STJ file and render it as subtitles
    ///
    /// Without `output_file` the subtitle lands next to the input, named after
    /// it. An existing output is only replaced with `force_overwrite`.
    pub fn convert<P: AsRef<Path>>(
        &self,
        input_file: P,
        output_file: Option<PathBuf>,
        format: Option<OutputFormat>,
        force_overwrite: bool,
    ) -> Result<PathBuf, AppError> {
        let input_file = input_file.as_ref();
        let format = format.unwrap_or(self.config.output.default_format);

        let output_path = match output_file {
            Some(path) => path,
            None => {
                let output_dir = input_file.parent().unwrap_or_else(|| Path::new("."));
                FileManager::generate_output_path(input_file, output_dir, format.extension())
            }
        };

        if output_path.exists() && !force_overwrite {
            warn!("Output already exists: {:?}", output_path);
            return Err(AppError::File(format!(
                "Output file already exists: {} (use -f to force overwrite)",
                output_path.display()
            )));
        }

        let stj = self.validate_file(input_file)?;

        let renderer = format.renderer(&self.config.output);
        let rendered = renderer.render(&stj)?;
        FileManager::write_to_file(&output_path, &rendered)?;

        info!("Wrote {} subtitles to {:?}", format, output_path);
        Ok(output_path)
    }
}
