/*!
 * Tests for pipeline construction, stage behavior, and the executor
 */

use linguasheet::app_config::LanguageSpec;
use linguasheet::errors::ConfigError;
use linguasheet::pipeline::{CellValue, Executor, Pipeline, Step, TranslationState};

use crate::common::mock_translators::MockTranslator;

fn languages(codes: &[&str]) -> Vec<LanguageSpec> {
    codes.iter().map(|c| LanguageSpec::from_code(*c)).collect()
}

#[test]
fn test_pipelineBuild_withLanguageList_shouldKeepConfiguredOrder() {
    let langs = languages(&["en-US", "en-AU", "vi", "th", "hi"]);
    let pipeline = Pipeline::build(&langs).unwrap();

    assert_eq!(pipeline.stage_count(), 5);
    assert_eq!(pipeline.stage_codes(), vec!["en-US", "en-AU", "vi", "th", "hi"]);
}

#[test]
fn test_pipelineBuild_shouldTerminateWithEndMarker() {
    let langs = languages(&["vi", "th"]);
    let pipeline = Pipeline::build(&langs).unwrap();

    assert!(matches!(pipeline.steps().last(), Some(Step::End)));
    assert_eq!(pipeline.steps().len(), 3);
}

#[test]
fn test_pipelineBuild_withDuplicateCodes_shouldFail() {
    let langs = languages(&["vi", "th", "vi"]);
    let result = Pipeline::build(&langs);

    assert!(matches!(result, Err(ConfigError::DuplicateLanguage(code)) if code == "vi"));
}

#[test]
fn test_pipelineBuild_withEmptyList_shouldFail() {
    let result = Pipeline::build(&[]);
    assert!(matches!(result, Err(ConfigError::NoLanguages)));
}

#[test]
fn test_pipelineBuild_isDeterministic() {
    let langs = languages(&["vi", "th", "hi"]);
    let first = Pipeline::build(&langs).unwrap();
    let second = Pipeline::build(&langs).unwrap();

    assert_eq!(first.stage_codes(), second.stage_codes());
    assert_eq!(first.steps().len(), second.steps().len());
}

#[tokio::test]
async fn test_executor_shouldRecordOneCellPerLanguageInOrder() {
    let langs = languages(&["en-AU", "vi", "th"]);
    let pipeline = Pipeline::build(&langs).unwrap();
    let translator = MockTranslator::working();

    let terminal = Executor::new(&pipeline, &translator)
        .run(TranslationState::new("Hello"))
        .await;

    assert_eq!(terminal.len(), 3);
    let codes: Vec<&str> = terminal.iter().map(|(c, _)| c).collect();
    assert_eq!(codes, vec!["en-AU", "vi", "th"]);
    assert_eq!(
        terminal.get("vi"),
        Some(&CellValue::Translated("[vi] Hello".to_string()))
    );
}

#[tokio::test]
async fn test_executor_shouldNotMutateOriginalText() {
    let langs = languages(&["vi"]);
    let pipeline = Pipeline::build(&langs).unwrap();
    let translator = MockTranslator::working();

    let terminal = Executor::new(&pipeline, &translator)
        .run(TranslationState::new("Hello"))
        .await;

    assert_eq!(terminal.original_text(), "Hello");
}

#[tokio::test]
async fn test_executor_shouldTrackCurrentLanguageOfLastStage() {
    let langs = languages(&["vi", "th"]);
    let pipeline = Pipeline::build(&langs).unwrap();
    let translator = MockTranslator::working();

    let terminal = Executor::new(&pipeline, &translator)
        .run(TranslationState::new("Hello"))
        .await;

    assert_eq!(terminal.current_language(), Some("th"));
}

#[tokio::test]
async fn test_executor_withBlankInput_shouldNeverInvokeTranslator() {
    let langs = languages(&["en-AU", "vi", "th"]);
    let pipeline = Pipeline::build(&langs).unwrap();
    let translator = MockTranslator::working();

    let terminal = Executor::new(&pipeline, &translator)
        .run(TranslationState::new("   "))
        .await;

    assert_eq!(translator.call_count(), 0);
    assert_eq!(terminal.len(), 3);
    for (_, cell) in terminal.iter() {
        assert_eq!(cell, &CellValue::Blank);
        assert_eq!(cell.render(), "");
    }
}

#[tokio::test]
async fn test_executor_withOneFailingLanguage_shouldIsolateTheFailure() {
    let langs = languages(&["en-AU", "vi", "th"]);
    let pipeline = Pipeline::build(&langs).unwrap();
    let translator = MockTranslator::failing_for("vi");

    let terminal = Executor::new(&pipeline, &translator)
        .run(TranslationState::new("Hello"))
        .await;

    // The failing stage records a sentinel; every other stage still runs
    assert_eq!(terminal.len(), 3);
    let vi = terminal.get("vi").unwrap();
    assert!(vi.is_failure());
    assert!(vi.render().starts_with("ERROR: "));

    assert_eq!(
        terminal.get("en-AU"),
        Some(&CellValue::Translated("[en-AU] Hello".to_string()))
    );
    assert_eq!(
        terminal.get("th"),
        Some(&CellValue::Translated("[th] Hello".to_string()))
    );
}

#[tokio::test]
async fn test_executor_withAllStagesFailing_shouldStillCompleteTheRecord() {
    let langs = languages(&["vi", "th"]);
    let pipeline = Pipeline::build(&langs).unwrap();
    let translator = MockTranslator::failing();

    let terminal = Executor::new(&pipeline, &translator)
        .run(TranslationState::new("Hello"))
        .await;

    assert_eq!(terminal.len(), 2);
    for (_, cell) in terminal.iter() {
        assert!(cell.is_failure());
    }
}

#[tokio::test]
async fn test_executor_onTerminalState_shouldBeIdempotent() {
    let langs = languages(&["en-AU", "vi"]);
    let pipeline = Pipeline::build(&langs).unwrap();
    let translator = MockTranslator::working();
    let executor = Executor::new(&pipeline, &translator);

    let first = executor.run(TranslationState::new("Hello")).await;
    let second = executor.run(first.clone()).await;

    assert_eq!(first, second);
}
