/*!
 * Tests for batch processing of dataset records
 */

use linguasheet::app_config::LanguageSpec;
use linguasheet::batch::BatchRunner;
use linguasheet::errors::{ConfigError, RecordError};
use linguasheet::pipeline::{CellValue, TranslationState};

use crate::common::mock_translators::MockTranslator;

fn languages(codes: &[&str]) -> Vec<LanguageSpec> {
    codes.iter().map(|c| LanguageSpec::from_code(*c)).collect()
}

fn records(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_batchRunnerNew_withDuplicateLanguages_shouldFail() {
    let result = BatchRunner::new(&languages(&["vi", "vi"]));
    assert!(matches!(result, Err(ConfigError::DuplicateLanguage(_))));
}

#[tokio::test]
async fn test_batchRun_shouldPreserveRecordOrder() {
    let runner = BatchRunner::new(&languages(&["vi", "th"])).unwrap();
    let translator = MockTranslator::working();

    let rows = runner
        .run(&records(&["first", "second", "third"]), &translator)
        .await;

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].original, "first");
    assert_eq!(rows[1].original, "second");
    assert_eq!(rows[2].original, "third");
}

#[tokio::test]
async fn test_batchRun_shouldRenderOneFieldPerLanguagePlusOriginal() {
    let runner = BatchRunner::new(&languages(&["en-AU", "vi", "th"])).unwrap();
    let translator = MockTranslator::working();

    let rows = runner.run(&records(&["Hello"]), &translator).await;
    let fields = rows[0].render();

    assert_eq!(fields.len(), 4);
    assert_eq!(fields[0], "Hello");
    assert_eq!(fields[1], "[en-AU] Hello");
    assert_eq!(fields[2], "[vi] Hello");
    assert_eq!(fields[3], "[th] Hello");
}

#[tokio::test]
async fn test_batchRun_withBlankRecord_shouldEmitEmptyCells() {
    let runner = BatchRunner::new(&languages(&["vi", "th"])).unwrap();
    let translator = MockTranslator::working();

    let rows = runner.run(&records(&[""]), &translator).await;

    assert_eq!(translator.call_count(), 0);
    assert_eq!(rows[0].render(), vec!["", "", ""]);
}

#[tokio::test]
async fn test_batchRun_withFailingLanguage_shouldKeepColumnOrder() {
    let runner = BatchRunner::new(&languages(&["en-AU", "vi"])).unwrap();
    let translator = MockTranslator::failing_for("en-AU");

    let rows = runner.run(&records(&["Hello"]), &translator).await;

    // Column order follows configuration, independent of which stages failed
    assert!(rows[0].cells[0].is_failure());
    assert_eq!(
        rows[0].cells[1],
        CellValue::Translated("[vi] Hello".to_string())
    );
}

#[test]
fn test_project_withCompleteState_shouldKeepConfiguredOrder() {
    let runner = BatchRunner::new(&languages(&["vi", "th"])).unwrap();

    // Cells recorded out of configured order still project in configured order
    let mut state = TranslationState::new("Hello");
    state.record("th", CellValue::Translated("b".to_string()));
    state.record("vi", CellValue::Translated("a".to_string()));

    let row = runner.project(0, &state).unwrap();
    assert_eq!(row.render(), vec!["Hello", "a", "b"]);
}

#[test]
fn test_project_withIncompleteState_shouldReportRecordError() {
    let runner = BatchRunner::new(&languages(&["vi", "th", "hi"])).unwrap();

    let mut state = TranslationState::new("Hello");
    state.record("vi", CellValue::Translated("a".to_string()));

    let result = runner.project(7, &state);
    match result {
        Err(RecordError::IncompleteState { row, missing }) => {
            assert_eq!(row, 7);
            assert_eq!(missing, "th, hi");
        }
        other => panic!("Expected IncompleteState, got {:?}", other),
    }
}

#[test]
fn test_degradedRow_shouldPreserveOriginalAndMarkEveryCell() {
    let runner = BatchRunner::new(&languages(&["vi", "th"])).unwrap();
    let error = RecordError::IncompleteState {
        row: 0,
        missing: "vi, th".to_string(),
    };

    let row = runner.degraded_row("Hello", &error);

    assert_eq!(row.original, "Hello");
    assert_eq!(row.cells.len(), 2);
    for cell in &row.cells {
        assert!(cell.is_failure());
        assert!(cell.render().starts_with("ERROR: "));
    }
}
