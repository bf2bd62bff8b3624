/*!
 * Batch processing of dataset records.
 *
 * The batch runner walks the input records one at a time, in input order,
 * runs each through the pipeline executor, and projects the terminal state
 * into an output row. Record-level failures are isolated: a record whose
 * terminal state is incomplete gets a degraded row and the batch continues.
 * Only dataset-level problems (handled upstream) abort a run.
 */

use indicatif::{ProgressBar, ProgressStyle};
use log::error;

use crate::app_config::LanguageSpec;
use crate::errors::{ConfigError, RecordError};
use crate::pipeline::{CellValue, Executor, Pipeline, TranslationState};
use crate::translation::Translator;

/// One output row: the original text plus one cell per configured language,
/// in configured order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    /// The record's source text, preserved verbatim
    pub original: String,

    /// Cells in configured language order
    pub cells: Vec<CellValue>,
}

impl OutputRow {
    /// Render the row as output text fields
    pub fn render(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(self.cells.len() + 1);
        fields.push(self.original.clone());
        fields.extend(self.cells.iter().map(|cell| cell.render()));
        fields
    }
}

/// Iterates dataset records through the pipeline, strictly sequentially
pub struct BatchRunner {
    pipeline: Pipeline,
    languages: Vec<LanguageSpec>,
    show_progress: bool,
}

impl BatchRunner {
    /// Create a runner for the configured language list
    ///
    /// Fails fast on malformed configuration (empty list, duplicate codes).
    pub fn new(languages: &[LanguageSpec]) -> Result<Self, ConfigError> {
        let pipeline = Pipeline::build(languages)?;
        Ok(Self {
            pipeline,
            languages: languages.to_vec(),
            show_progress: false,
        })
    }

    /// Enable or disable the terminal progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// The pipeline this runner executes
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Process every record, returning one output row per record in input order
    pub async fn run(&self, records: &[String], translator: &dyn Translator) -> Vec<OutputRow> {
        let progress = self.progress_bar(records.len() as u64);
        let mut rows = Vec::with_capacity(records.len());

        for (index, text) in records.iter().enumerate() {
            let state = TranslationState::new(text.clone());
            let executor = Executor::new(&self.pipeline, translator);
            let terminal = executor.run(state).await;

            let row = match self.project(index, &terminal) {
                Ok(row) => row,
                Err(e) => {
                    error!("{}", e);
                    self.degraded_row(text, &e)
                }
            };
            rows.push(row);

            if let Some(bar) = &progress {
                bar.inc(1);
            }
        }

        if let Some(bar) = &progress {
            bar.finish_and_clear();
        }

        rows
    }

    /// Project a terminal state into an output row
    ///
    /// The row carries the cells in configured language order, independent of
    /// which stages succeeded. A terminal state missing any configured
    /// language violates the pipeline completeness invariant and is reported
    /// as a record-level error.
    pub fn project(
        &self,
        row_index: usize,
        state: &TranslationState,
    ) -> Result<OutputRow, RecordError> {
        let mut cells = Vec::with_capacity(self.languages.len());
        let mut missing = Vec::new();

        for lang in &self.languages {
            match state.get(&lang.code) {
                Some(cell) => cells.push(cell.clone()),
                None => missing.push(lang.code.clone()),
            }
        }

        if !missing.is_empty() {
            return Err(RecordError::IncompleteState {
                row: row_index,
                missing: missing.join(", "),
            });
        }

        Ok(OutputRow {
            original: state.original_text().to_string(),
            cells,
        })
    }

    /// Build the degraded row for a failed record: original text preserved,
    /// every language cell carrying the error sentinel
    pub fn degraded_row(&self, original: &str, error: &RecordError) -> OutputRow {
        OutputRow {
            original: original.to_string(),
            cells: vec![CellValue::Failed(error.to_string()); self.languages.len()],
        }
    }

    fn progress_bar(&self, total: u64) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Some(bar)
    }
}
