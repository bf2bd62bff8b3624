/*!
 * Main application controller.
 *
 * Wires the configuration, translation service, pipeline, and dataset I/O
 * together for one run: read the source column (fatal on failure), translate
 * every record through the sequential pipeline, write the output table.
 */

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::app_config::Config;
use crate::batch::BatchRunner;
use crate::dataset;
use crate::translation::TranslationService;

/// Application controller for a translation run
pub struct Controller {
    config: Config,
}

impl Controller {
    /// Create a controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one translation batch from `input_path` to `output_path`
    pub async fn run(&self, input_path: &Path, output_path: &Path) -> Result<()> {
        let languages = self.config.resolved_languages();

        info!(
            "Translating column '{}' of {:?} into {} languages",
            self.config.source_column,
            input_path,
            languages.len()
        );

        // Dataset-level failures abort the run before any output is produced
        let records = dataset::read_source_column(input_path, &self.config.source_column)
            .with_context(|| format!("Failed to read input dataset: {:?}", input_path))?;

        let service = TranslationService::from_config(&self.config.translation)
            .context("Failed to initialize translation service")?;

        // Fail fast on an unreachable provider instead of emitting a table
        // full of error sentinels
        info!(
            "Testing connection to the {} provider",
            self.config.translation.provider.display_name()
        );
        service
            .test_connection()
            .await
            .context("Provider connection test failed")?;

        let runner = BatchRunner::new(&languages)
            .context("Failed to build translation pipeline")?
            .with_progress(true);

        let rows = runner.run(&records, &service).await;

        dataset::write_output(output_path, &self.config.source_column, &languages, &rows)
            .with_context(|| format!("Failed to write output dataset: {:?}", output_path))?;

        info!("Wrote {} rows to {:?}", rows.len(), output_path);
        Ok(())
    }
}
