//! CSV writing operations.

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::{CsvWriter, NamedFrom, QuoteStyle}, series::Series};
use tracing::debug;

use crate::district::{Demographic, DistrictStatistics};
use crate::io::sink::DownloadSink;

/// Exported columns, absolute counts only.
pub const EXPORT_COLUMNS: [&str; 6] = ["DISTRICT", "TOTAL", "WHITE", "BLACK", "HISPANIC", "ASIAN"];

/// A serialized export ready to be offered for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: Vec<u8>,
}

/// "Raleigh, NC" -> "Raleigh_NC_demographics.csv"
pub fn export_filename(city_name: &str) -> String {
    format!("{}_demographics.csv", city_name.replace(", ", "_"))
}

/// Build the export table: one string column per exported field, rows in input order.
fn export_frame(features: &[DistrictStatistics]) -> Result<DataFrame> {
    let counts = |demographic: Demographic| -> Vec<String> {
        features.iter().map(|f| f.count(demographic).to_string()).collect()
    };

    let districts: Vec<String> = features.iter().map(|f| f.export_label().to_string()).collect();
    let totals: Vec<String> = features.iter().map(|f| f.total.to_string()).collect();

    DataFrame::new(vec![
        Series::new(EXPORT_COLUMNS[0].into(), districts).into(),
        Series::new(EXPORT_COLUMNS[1].into(), totals).into(),
        Series::new(EXPORT_COLUMNS[2].into(), counts(Demographic::White)).into(),
        Series::new(EXPORT_COLUMNS[3].into(), counts(Demographic::Black)).into(),
        Series::new(EXPORT_COLUMNS[4].into(), counts(Demographic::Hispanic)).into(),
        Series::new(EXPORT_COLUMNS[5].into(), counts(Demographic::Asian)).into(),
    ])
    .context("[io::csv::write] Failed to build export frame")
}

/// Serialize district statistics for a city.
///
/// The header row is bare; every data cell is quoted. Zero features yield a
/// header-only file. Cells carry the normalized values (trimmed labels,
/// rounded counts), not the raw property text.
pub fn to_csv(features: &[DistrictStatistics], city_name: &str) -> Result<CsvExport> {
    let mut content = EXPORT_COLUMNS.join(",").into_bytes();
    content.push(b'\n');

    if !features.is_empty() {
        let mut df = export_frame(features)?;
        CsvWriter::new(&mut content)
            .include_header(false)
            .with_quote_style(QuoteStyle::Always)
            .finish(&mut df)
            .context("[io::csv::write] Failed to write CSV to bytes")?;
    }

    Ok(CsvExport { filename: export_filename(city_name), content })
}

/// Export and offer the file to `sink`. An empty feature list offers nothing
/// and returns `None`; otherwise returns the offered filename.
pub fn export_csv(sink: &mut dyn DownloadSink, features: &[DistrictStatistics], city_name: &str) -> Result<Option<String>> {
    if features.is_empty() {
        debug!(city = city_name, "nothing to export");
        return Ok(None);
    }

    let export = to_csv(features, city_name)?;
    sink.offer(&export.filename, &export.content)?;
    debug!(file = %export.filename, rows = features.len(), "export offered");
    Ok(Some(export.filename))
}
