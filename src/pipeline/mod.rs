/*!
 * Sequential per-language translation pipeline.
 *
 * The pipeline turns the configured language list into an ordered chain of
 * stages and threads one accumulating `TranslationState` through that chain:
 * 1. **Pipeline**: the fixed ordered sequence of stages, one per language,
 *    terminated by an explicit end marker
 * 2. **Stage**: a single step bound to one target language; absorbs its own
 *    translation failures so one bad translation never aborts a record
 * 3. **Executor**: drives the state through every stage exactly once, in
 *    configured order
 */

pub mod executor;
pub mod stage;
pub mod state;

// Re-export types used externally
pub use executor::{Executor, ExecutorPhase, Pipeline, Step};
pub use stage::Stage;
pub use state::{CellValue, TranslationState};
