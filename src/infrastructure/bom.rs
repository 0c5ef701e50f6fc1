//! BOM spreadsheet conversion
//!
//! `kicad-cli sch export bom` only writes CSV; fabrication houses want XLSX.
//! The workbook's document timestamp is pinned so identical CSV input always
//! yields an identical file.

use std::path::Path;

use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, FormatBorder, Workbook, XlsxError};
use tracing::debug;

use crate::error::{FabError, FabResult};
use crate::infrastructure::fs::write_atomic;

/// Worksheet name used for the BOM
pub const SHEET_NAME: &str = "BOM";

/// Convert a KiCad BOM CSV into an XLSX workbook.
///
/// The first CSV row becomes a bold header. Cells that parse as finite numbers
/// are written as numbers, everything else as text. Returns the number of data
/// rows (excluding the header).
pub fn convert_csv_to_xlsx(csv_path: &Path, xlsx_path: &Path) -> FabResult<usize> {
    let csv_err = |e: csv::Error| FabError::Bom {
        file: csv_path.to_path_buf(),
        message: e.to_string(),
    };
    let xlsx_err = |e: XlsxError| FabError::Bom {
        file: xlsx_path.to_path_buf(),
        message: e.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(csv_path)
        .map_err(csv_err)?;

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold().set_border(FormatBorder::Thin);

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME).map_err(xlsx_err)?;

    let mut rows: u32 = 0;
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        for (col, field) in record.iter().enumerate() {
            let col = u16::try_from(col).map_err(|_| FabError::Bom {
                file: csv_path.to_path_buf(),
                message: format!("too many columns in row {}", rows + 1),
            })?;

            if rows == 0 {
                sheet
                    .write_string_with_format(rows, col, field, &header)
                    .map_err(xlsx_err)?;
            } else if let Some(number) = numeric_cell(field) {
                sheet.write_number(rows, col, number).map_err(xlsx_err)?;
            } else {
                sheet.write_string(rows, col, field).map_err(xlsx_err)?;
            }
        }
        rows += 1;
    }
    sheet.autofit();

    let created = ExcelDateTime::from_ymd(2000, 1, 1).map_err(xlsx_err)?;
    let properties = DocProperties::new()
        .set_title("Bill of Materials")
        .set_creation_datetime(&created);
    workbook.set_properties(&properties);

    let buffer = workbook.save_to_buffer().map_err(xlsx_err)?;
    write_atomic(xlsx_path, &buffer)?;

    let data_rows = rows.saturating_sub(1) as usize;
    debug!(rows = data_rows, path = %xlsx_path.display(), "wrote BOM workbook");
    Ok(data_rows)
}

/// Quantities and item numbers become numbers; references, values like `100n`
/// and anything with leading zeros stay text.
fn numeric_cell(field: &str) -> Option<f64> {
    let trimmed = field.trim();
    if trimmed.is_empty() || trimmed != field {
        return None;
    }
    if trimmed.len() > 1 && trimmed.starts_with('0') && !trimmed.starts_with("0.") {
        return None;
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
    {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
