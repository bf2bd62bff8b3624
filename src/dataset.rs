/*!
 * Tabular dataset input and output.
 *
 * The input is a CSV file where one configurable column supplies the source
 * text, one record per row, iterated in file order. The output is a CSV file
 * with the source column followed by one column per target language. A
 * missing source column is a dataset-level failure: the run aborts and no
 * partial output is written.
 */

use std::path::Path;

use log::debug;

use crate::app_config::LanguageSpec;
use crate::batch::OutputRow;
use crate::errors::InputError;

/// Read the source column from a CSV file, in row order
///
/// Rows shorter than the header read as an empty value for the missing
/// field, matching how spreadsheet exports represent trailing blank cells.
pub fn read_source_column(path: &Path, column: &str) -> Result<Vec<String>, InputError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();

    let index = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| InputError::ColumnNotFound {
            column: column.to_string(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        })?;

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        values.push(record.get(index).unwrap_or("").to_string());
    }

    debug!("Read {} rows from {:?} (column '{}')", values.len(), path, column);
    Ok(values)
}

/// Write the output table: header row, then one row per record in input order
pub fn write_output(
    path: &Path,
    source_column: &str,
    languages: &[LanguageSpec],
    rows: &[OutputRow],
) -> Result<(), InputError> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = Vec::with_capacity(languages.len() + 1);
    header.push(source_column.to_string());
    header.extend(languages.iter().map(|lang| lang.display_name_or_default()));
    writer.write_record(&header)?;

    for row in rows {
        writer.write_record(row.render())?;
    }

    writer.flush().map_err(InputError::Io)?;
    debug!("Wrote {} rows to {:?}", rows.len(), path);
    Ok(())
}
