/*!
 * Tests for tabular dataset input/output
 */

use linguasheet::app_config::LanguageSpec;
use linguasheet::batch::OutputRow;
use linguasheet::dataset;
use linguasheet::errors::InputError;
use linguasheet::pipeline::CellValue;

use crate::common::{create_temp_dir, create_test_dataset, create_test_file};

#[test]
fn test_readSourceColumn_shouldReturnRowsInFileOrder() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_dataset(&temp_dir.path().to_path_buf(), "input.csv").unwrap();

    let rows = dataset::read_source_column(&path, "Original Text").unwrap();

    assert_eq!(rows, vec!["Hello, world!", "", "Thank you"]);
}

#[test]
fn test_readSourceColumn_withMissingColumn_shouldListAvailableColumns() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_dataset(&temp_dir.path().to_path_buf(), "input.csv").unwrap();

    let result = dataset::read_source_column(&path, "Source");

    match result {
        Err(InputError::ColumnNotFound { column, available }) => {
            assert_eq!(column, "Source");
            assert_eq!(available, "Id, Original Text, Notes");
        }
        other => panic!("Expected ColumnNotFound, got {:?}", other),
    }
}

#[test]
fn test_readSourceColumn_withMissingFile_shouldFail() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("does_not_exist.csv");

    assert!(dataset::read_source_column(&path, "Original Text").is_err());
}

#[test]
fn test_writeOutput_shouldEmitHeaderAndRenderedRows() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("output.csv");

    let languages = vec![
        LanguageSpec::new("en-AU", "English (Australia)"),
        LanguageSpec::new("vi", "Vietnamese"),
    ];
    let rows = vec![
        OutputRow {
            original: "Hello".to_string(),
            cells: vec![
                CellValue::Translated("G'day".to_string()),
                CellValue::Failed("timeout".to_string()),
            ],
        },
        OutputRow {
            original: "".to_string(),
            cells: vec![CellValue::Blank, CellValue::Blank],
        },
    ];

    dataset::write_output(&path, "Original Text", &languages, &rows).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["Original Text", "English (Australia)", "Vietnamese"]
    );

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(&records[0][0], "Hello");
    assert_eq!(&records[0][1], "G'day");
    assert_eq!(&records[0][2], "ERROR: timeout");
    assert_eq!(&records[1][0], "");
    assert_eq!(&records[1][1], "");
}

#[test]
fn test_readSourceColumn_withShortRows_shouldReadMissingFieldsAsEmpty() {
    let temp_dir = create_temp_dir().unwrap();
    let content = "Id,Original Text\n1,Hello\n2\n3,Bye\n";
    let path = create_test_file(&temp_dir.path().to_path_buf(), "short.csv", content).unwrap();

    let rows = dataset::read_source_column(&path, "Original Text").unwrap();

    assert_eq!(rows, vec!["Hello", "", "Bye"]);
}
