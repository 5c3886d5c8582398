use crate::domain::model::{Promotion, RowDiagnostic};
use crate::utils::error::{PromoError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const REQUIRED_FIELDS: usize = 3;

/// What to do with a row that has fewer than three fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// Abort the whole load on the first short row.
    #[default]
    Strict,
    /// Drop short rows and report them.
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub promotions: HashMap<String, Promotion>,
    pub skipped: Vec<RowDiagnostic>,
}

/// Parses `id,price,expiration_date` rows with the strict row policy.
pub fn parse<R: Read>(source: R) -> Result<HashMap<String, Promotion>> {
    parse_with_policy(source, RowPolicy::Strict).map(|report| report.promotions)
}

/// Parses `id,price,expiration_date` rows. There is no header row; later rows
/// overwrite earlier rows with the same id. Fields past the third are ignored.
///
/// Under [`RowPolicy::Strict`] every row must have as many fields as the first
/// one; under [`RowPolicy::Skip`] widths may vary and short rows are dropped.
pub fn parse_with_policy<R: Read>(mut source: R, policy: RowPolicy) -> Result<LoadReport> {
    let mut data = Vec::new();
    source.read_to_end(&mut data)?;
    check_quotes(&data)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(policy == RowPolicy::Skip)
        .from_reader(data.as_slice());

    let mut report = LoadReport::default();

    for result in reader.records() {
        let record = result.map_err(row_error)?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();

        if record.len() < REQUIRED_FIELDS {
            let fields = record.len();
            match policy {
                RowPolicy::Strict => return Err(PromoError::ShortRowError { line, fields }),
                RowPolicy::Skip => {
                    report.skipped.push(RowDiagnostic {
                        line,
                        fields,
                        message: format!(
                            "expected at least {} fields, found {}",
                            REQUIRED_FIELDS, fields
                        ),
                    });
                    continue;
                }
            }
        }

        let promotion = Promotion::new(&record[0], &record[1], &record[2]);
        report.promotions.insert(promotion.id.clone(), promotion);
    }

    Ok(report)
}

/// A width mismatch that leaves the row short is reported as a short row.
fn row_error(err: csv::Error) -> PromoError {
    let short_row = match err.kind() {
        csv::ErrorKind::UnequalLengths { pos, len, .. } if (*len as usize) < REQUIRED_FIELDS => {
            Some((pos.as_ref().map(|p| p.line()).unwrap_or_default(), *len as usize))
        }
        _ => None,
    };

    match short_row {
        Some((line, fields)) => PromoError::ShortRowError { line, fields },
        None => PromoError::CsvError(err),
    }
}

/// Rejects input that ends inside a quoted field. The csv reader closes such a
/// field at end of input and keeps the row.
fn check_quotes(data: &[u8]) -> Result<()> {
    let mut line: u64 = 1;
    let mut field_start = true;
    let mut quote_opened_on: Option<u64> = None;
    let mut i = 0;

    while i < data.len() {
        let byte = data[i];
        if quote_opened_on.is_some() {
            if byte == b'"' {
                if data.get(i + 1) == Some(&b'"') {
                    i += 1;
                } else {
                    quote_opened_on = None;
                }
            }
        } else {
            if byte == b'"' && field_start {
                quote_opened_on = Some(line);
            }
            field_start = matches!(byte, b',' | b'\n' | b'\r');
        }
        if byte == b'\n' {
            line += 1;
        }
        i += 1;
    }

    match quote_opened_on {
        Some(line) => Err(PromoError::MalformedCsvError {
            line,
            reason: "unterminated quoted field".to_string(),
        }),
        None => Ok(()),
    }
}

/// Opens `path` and parses it with `policy`.
pub fn load_file<P: AsRef<Path>>(path: P, policy: RowPolicy) -> Result<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let report = parse_with_policy(file, policy)?;

    for diagnostic in &report.skipped {
        tracing::warn!(
            "Skipped row {} in {}: {}",
            diagnostic.line,
            path.display(),
            diagnostic.message
        );
    }
    tracing::info!(
        "Loaded {} promotions from {} ({} rows skipped)",
        report.promotions.len(),
        path.display(),
        report.skipped.len()
    );

    Ok(report)
}
