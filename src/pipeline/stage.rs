/*!
 * A single pipeline step bound to one target language.
 */

use log::{debug, warn};

use crate::app_config::LanguageSpec;
use crate::pipeline::state::{CellValue, TranslationState};
use crate::translation::Translator;

/// One translation step
///
/// A stage wraps a single translator call for its language and writes the
/// outcome into the shared state. Translation failures are absorbed here:
/// they are recorded as a `Failed` cell and never propagate, so one bad
/// translation cannot abort the rest of the pipeline.
#[derive(Debug, Clone)]
pub struct Stage {
    spec: LanguageSpec,
}

impl Stage {
    /// Create a stage for one target language
    pub fn new(spec: LanguageSpec) -> Self {
        Self { spec }
    }

    /// The language tag this stage translates into
    pub fn code(&self) -> &str {
        &self.spec.code
    }

    /// The language descriptor this stage is bound to
    pub fn spec(&self) -> &LanguageSpec {
        &self.spec
    }

    /// Apply this stage to the state, returning the updated state
    ///
    /// Never mutates `original_text`. Blank input short-circuits without
    /// invoking the translator at all; there is no point paying for an
    /// external call on empty text.
    pub async fn apply(
        &self,
        mut state: TranslationState,
        translator: &dyn Translator,
    ) -> TranslationState {
        state.set_current_language(&self.spec.code);

        if state.is_blank() {
            state.record(&self.spec.code, CellValue::Blank);
            return state;
        }

        let result = translator.translate(state.original_text(), &self.spec).await;
        match result {
            Ok(text) => {
                debug!("Translated into {}: {} chars", self.spec.code, text.len());
                state.record(&self.spec.code, CellValue::Translated(text));
            }
            Err(e) => {
                warn!("Translation into {} failed: {}", self.spec.code, e);
                state.record(&self.spec.code, CellValue::Failed(e.to_string()));
            }
        }

        state
    }
}
