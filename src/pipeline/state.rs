/*!
 * Record-scoped state carried through the translation pipeline.
 *
 * One `TranslationState` is created per input record, accumulates one cell
 * per executed stage, and is discarded once it has been projected into an
 * output row. No state ever outlives its record or is shared across records.
 */

/// The value a stage produced for one language
///
/// Distinguishes blank input from a translation failure in the type system
/// so downstream consumers can detect failures without string matching; the
/// `ERROR:` sentinel text only appears at the rendering boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// A successful translation
    Translated(String),

    /// The source text was empty, so the translator was never invoked
    Blank,

    /// The translator failed for this language; carries the failure message
    Failed(String),
}

impl CellValue {
    /// Render the cell as output text
    ///
    /// Failures render with an `ERROR: ` prefix so partial failures stay
    /// visible inline instead of crashing the run.
    pub fn render(&self) -> String {
        match self {
            Self::Translated(text) => text.clone(),
            Self::Blank => String::new(),
            Self::Failed(message) => format!("ERROR: {}", message),
        }
    }

    /// Whether this cell records a translation failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Accumulating state for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationState {
    /// Immutable source text, set once at record initialization
    original_text: String,

    /// One entry per executed stage; keys unique, insertion order equals
    /// stage order
    translations: Vec<(String, CellValue)>,

    /// Language code of the most recently executed stage (diagnostics only)
    current_language: Option<String>,
}

impl TranslationState {
    /// Create the initial state for one record
    pub fn new(original_text: impl Into<String>) -> Self {
        Self {
            original_text: original_text.into(),
            translations: Vec::new(),
            current_language: None,
        }
    }

    /// The source text for this record
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// Whether the source text is empty or whitespace-only
    pub fn is_blank(&self) -> bool {
        self.original_text.trim().is_empty()
    }

    /// Record the cell for a language
    ///
    /// Re-recording an existing language replaces the value in place, keeping
    /// keys unique and re-execution structurally idempotent.
    pub fn record(&mut self, code: impl Into<String>, value: CellValue) {
        let code = code.into();
        if let Some(entry) = self.translations.iter_mut().find(|(c, _)| *c == code) {
            entry.1 = value;
        } else {
            self.translations.push((code, value));
        }
    }

    /// Mark the language currently being processed
    pub fn set_current_language(&mut self, code: impl Into<String>) {
        self.current_language = Some(code.into());
    }

    /// Language code of the most recently executed stage, if any
    pub fn current_language(&self) -> Option<&str> {
        self.current_language.as_deref()
    }

    /// Look up the cell recorded for a language
    pub fn get(&self, code: &str) -> Option<&CellValue> {
        self.translations
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, v)| v)
    }

    /// Number of recorded cells
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    /// Whether no cells have been recorded yet
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Iterate recorded cells in insertion (stage) order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.translations.iter().map(|(c, v)| (c.as_str(), v))
    }
}
