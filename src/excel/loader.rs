//! Workbook ingestion - Excel (.xlsm/.xlsx) → [`Workbook`]

use crate::error::{JetError, JetResult};
use crate::rubric::fallback_cells;
use crate::types::{CellValue, Sheet, SheetMatrix, Workbook};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Spreadsheet container accepted for grading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookFormat {
    /// Macro-enabled workbook
    Xlsm,
    /// Macro-free workbook; the Ps plots in the template do not work
    Xlsx,
}

impl WorkbookFormat {
    /// Detect from the file extension, case-insensitively
    pub fn from_path(path: &Path) -> JetResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("xlsm") => Ok(WorkbookFormat::Xlsm),
            Some("xlsx") => Ok(WorkbookFormat::Xlsx),
            _ => Err(JetError::UnsupportedFile(path.display().to_string())),
        }
    }

    pub fn macros_disabled(self) -> bool {
        self == WorkbookFormat::Xlsx
    }
}

/// Loads a submission from disk into an immutable [`Workbook`]
pub struct WorkbookLoader {
    path: PathBuf,
    version_label: String,
}

impl WorkbookLoader {
    pub fn new<P: AsRef<Path>>(path: P, version_label: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            version_label: version_label.into(),
        }
    }

    pub fn format(&self) -> JetResult<WorkbookFormat> {
        WorkbookFormat::from_path(&self.path)
    }

    /// Read all six sheets and patch the rubric's fallback cells
    pub fn load(&self) -> JetResult<Workbook> {
        self.format()?;

        let mut excel: Xlsx<_> = open_workbook(&self.path).map_err(|e| {
            JetError::Workbook(format!("Failed to open {}: {}", self.path.display(), e))
        })?;
        let available = excel.sheet_names();

        let mut sheets = HashMap::new();
        for sheet in Sheet::ALL {
            let name = sheet.tab_name();
            if !available.iter().any(|n| n == name) {
                return Err(JetError::MissingSheet(name.to_string()));
            }
            let range = excel
                .worksheet_range(name)
                .map_err(|e| JetError::Workbook(format!("Failed to read sheet {name}: {e}")))?;

            let mut matrix = matrix_from_range(&range);
            let patched = matrix.patch_fallbacks(fallback_cells(sheet), |cell| {
                range
                    .get_value((cell.row, cell.col))
                    .map(normalize)
            })?;

            let (height, width) = matrix.dimensions();
            debug!(sheet = name, height, width, patched, "sheet loaded");
            sheets.insert(sheet, matrix);
        }

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        Workbook::from_sheets(sheets, file_name, self.version_label.clone())
    }
}

/// Canonical cell value for one calamine cell
pub fn normalize(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::from_text(s),
        Data::Error(_) | Data::Empty => CellValue::Absent,
    }
}

/// Grid anchored at A1 that extends to the end of the used range
fn matrix_from_range(range: &Range<Data>) -> SheetMatrix {
    let (Some(start), Some(end)) = (range.start(), range.end()) else {
        return SheetMatrix::default();
    };
    let mut matrix = SheetMatrix::new(end.0 as usize + 1, end.1 as usize + 1);
    for (row, col, data) in range.used_cells() {
        let value = normalize(data);
        if !value.is_absent() {
            matrix.set(start.0 as usize + row, start.1 as usize + col, value);
        }
    }
    matrix
}
