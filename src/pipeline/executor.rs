/*!
 * Pipeline construction and sequential execution.
 *
 * The topology is strictly linear: one stage per configured language, in
 * configured order, terminated by an explicit end marker. There is no
 * branching, no merging, and no stage is ever revisited.
 */

use log::debug;

use crate::app_config::LanguageSpec;
use crate::errors::ConfigError;
use crate::pipeline::stage::Stage;
use crate::pipeline::state::TranslationState;
use crate::translation::Translator;

/// One step of the pipeline
#[derive(Debug, Clone)]
pub enum Step {
    /// Translate into one language
    Translate(Stage),

    /// Terminal marker; execution is complete once this is reached
    End,
}

/// The fixed ordered sequence of stages for a configured language list
///
/// Construction is deterministic: the same language list always yields the
/// same pipeline. Malformed configuration (empty list, duplicate codes) is a
/// construction-time error, not a runtime data error.
#[derive(Debug, Clone)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    /// Build a pipeline from the configured language list
    pub fn build(languages: &[LanguageSpec]) -> Result<Self, ConfigError> {
        if languages.is_empty() {
            return Err(ConfigError::NoLanguages);
        }

        let mut steps = Vec::with_capacity(languages.len() + 1);
        for lang in languages {
            let duplicate = steps.iter().any(|step| match step {
                Step::Translate(stage) => stage.code() == lang.code,
                Step::End => false,
            });
            if duplicate {
                return Err(ConfigError::DuplicateLanguage(lang.code.clone()));
            }
            steps.push(Step::Translate(Stage::new(lang.clone())));
        }
        steps.push(Step::End);

        Ok(Self { steps })
    }

    /// All steps, including the terminal marker
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of translation stages (terminal marker excluded)
    pub fn stage_count(&self) -> usize {
        self.steps.len() - 1
    }

    /// Stage language codes in execution order
    pub fn stage_codes(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                Step::Translate(stage) => Some(stage.code()),
                Step::End => None,
            })
            .collect()
    }
}

/// Execution phase, tracked for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorPhase {
    /// No stage has run yet
    NotStarted,

    /// Stage at this index is running
    RunningStage(usize),

    /// The terminal marker was reached
    Done,
}

/// Runs a pipeline once against one initial state
///
/// Each stage runs exactly once, strictly left to right. Stage-level
/// translation failures are absorbed by the stages themselves; the executor
/// never fails for them, and no transition is retried or rolled back.
pub struct Executor<'a> {
    pipeline: &'a Pipeline,
    translator: &'a dyn Translator,
}

impl<'a> Executor<'a> {
    /// Create an executor over a pipeline and a translator
    pub fn new(pipeline: &'a Pipeline, translator: &'a dyn Translator) -> Self {
        Self {
            pipeline,
            translator,
        }
    }

    /// Drive the state through every stage and return the terminal state
    pub async fn run(&self, mut state: TranslationState) -> TranslationState {
        let mut phase = ExecutorPhase::NotStarted;
        debug!("Pipeline phase {:?}: {} stages", phase, self.pipeline.stage_count());

        for (index, step) in self.pipeline.steps().iter().enumerate() {
            match step {
                Step::Translate(stage) => {
                    phase = ExecutorPhase::RunningStage(index);
                    debug!(
                        "Pipeline phase {:?}: translating into {} ({})",
                        phase,
                        stage.code(),
                        stage.spec().display_name_or_default()
                    );
                    state = stage.apply(state, self.translator).await;
                }
                Step::End => {
                    phase = ExecutorPhase::Done;
                    debug!("Pipeline phase {:?}: {} cells recorded", phase, state.len());
                }
            }
        }

        state
    }
}
