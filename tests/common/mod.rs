/*!
 * Common test utilities for the linguasheet test suite
 */

use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use tempfile::TempDir;


/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample input CSV with an "Original Text" column
pub fn create_test_dataset(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = "Id,Original Text,Notes\n\
                   1,\"Hello, world!\",greeting\n\
                   2,,empty row\n\
                   3,Thank you,gratitude\n";
    create_test_file(dir, filename, content)
}
